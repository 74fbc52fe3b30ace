//! Palette matching
//!
//! This module finds, for a query color, the candidate with the smallest or
//! largest CIEDE2000 difference, and maps whole color sets onto a palette.
//! The free functions convert candidates on every call; [`LabPalette`]
//! converts them once up front.

mod key;
mod lab_palette;
mod matcher;

use std::collections::HashMap;

pub use key::PaletteKey;
pub use lab_palette::LabPalette;
pub use matcher::{closest, furthest, map_palette, match_one, try_map_palette, MatchMode};

/// Query key (see [`PaletteKey`]) to the candidate chosen for it.
pub type PaletteMap<C> = HashMap<String, C>;
