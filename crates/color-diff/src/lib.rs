//! color-diff: CIEDE2000 color difference and palette matching
//!
//! This library converts sRGB(A) colors to CIE L\*a\*b\*, measures perceptual
//! difference with the CIEDE2000 formula, and uses that difference to pick
//! the closest or furthest color from a palette.
//!
//! # Quick Start
//!
//! ```
//! use color_diff::{closest, diff, Rgb};
//!
//! let palette = [Rgb::WHITE, Rgb::BLACK, Rgb::from_u8(0, 0, 255)];
//! let navy = Rgb::from_u8(0, 0, 128);
//!
//! assert_eq!(closest(&navy, &palette, None).unwrap(), &Rgb::from_u8(0, 0, 255));
//! assert!(diff(&navy, &Rgb::BLACK, None).unwrap() > 0.0);
//! ```
//!
//! # Mapping a Palette
//!
//! [`map_palette`] maps every color of one set onto another, keyed by
//! [`PaletteKey`]. For many queries against the same candidates, build a
//! [`LabPalette`] so the candidates are converted once:
//!
//! ```
//! use color_diff::{LabPalette, MatchMode, PaletteKey, Rgb};
//!
//! let palette = LabPalette::new(vec![Rgb::WHITE, Rgb::BLACK], None).unwrap();
//! let queries = [Rgb::from_u8(250, 240, 230), Rgb::from_u8(10, 20, 30)];
//! let map = palette.map_palette(&queries, MatchMode::Closest);
//!
//! assert_eq!(map[&queries[0].palette_key()], Rgb::WHITE);
//! assert_eq!(map[&queries[1].palette_key()], Rgb::BLACK);
//! ```
//!
//! # Color Spaces
//!
//! - [`Rgb`] / [`Rgba`]: sRGB on the 0..=255 scale, alpha in 0..=1
//! - [`Lab`]: CIE L\*a\*b\* relative to D65, where differences are measured
//!
//! Colors with alpha are composited over a background (opaque white unless
//! given) before conversion. XYZ is used internally and never exposed.
//!
//! # Errors
//!
//! Every fallible operation returns [`ColorDiffError`]. Non-finite input is
//! rejected up front rather than producing a NaN difference.

pub mod color;
pub mod diff;
pub mod error;
pub mod palette;


pub use color::{rgba_to_lab, Color, Lab, Rgb, Rgba, ToLab};
pub use diff::{ciede2000, diff};
pub use error::{ColorDiffError, HueStage, Result};
pub use palette::{
    closest, furthest, map_palette, match_one, try_map_palette, LabPalette, MatchMode, PaletteKey,
    PaletteMap,
};
