//! Test fixtures and constants.

use color_diff::{Color, Rgb, Rgba};

/// Palettes used across flow tests
pub mod palettes {
    use super::*;

    /// White, black, blue
    pub fn basic() -> Vec<Color> {
        vec![
            Color::Rgb(Rgb::WHITE),
            Color::Rgb(Rgb::BLACK),
            Color::Rgb(Rgb::from_u8(0, 0, 255)),
        ]
    }

    /// Gold, navy, white
    pub fn warm() -> Vec<Color> {
        vec![
            Color::Rgb(Rgb::from_u8(255, 215, 0)),
            Color::Rgb(Rgb::from_u8(0, 0, 128)),
            Color::Rgb(Rgb::WHITE),
        ]
    }

    /// Opaque RGBA versions of [`basic`]
    pub fn basic_rgba() -> Vec<Color> {
        vec![
            Color::Rgba(Rgba::new(255.0, 255.0, 255.0, 1.0)),
            Color::Rgba(Rgba::new(0.0, 0.0, 0.0, 1.0)),
            Color::Rgba(Rgba::new(0.0, 0.0, 255.0, 1.0)),
        ]
    }
}

/// Config file with one custom palette and every top-level key
pub const FULL_CONFIG: &str = r##"
background: "#ffffff"
mode: closest
default_palette: mono
palettes:
  mono:
    - "#000000"
    - "#ffffff"
  brand:
    - "rgb(255, 215, 0)"
    - { R: 0, G: 0, B: 128 }
    - { L: 50, a: 0, b: 0 }
"##;

/// Config file that only switches the search direction
pub const FURTHEST_CONFIG: &str = "mode: furthest\n";

/// Config file with a palette entry that is not a color
pub const BROKEN_CONFIG: &str = r##"
palettes:
  bad:
    - "#12"
"##;

/// Query colors as YAML
pub const QUERIES_YAML: &str = r##"
- "#ffd700"
- { r: 250, g: 240, b: 230 }
- "rgba(0, 0, 0, 0.25)"
"##;

/// Query colors as JSON
pub const QUERIES_JSON: &str = r##"["#000080", {"R": 40, "G": 40, "B": 40}, {"L": 95, "a": 0, "b": 0}]"##;
