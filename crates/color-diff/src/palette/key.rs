//! Map keys for palette results
//!
//! Keys identify the query color a [`PaletteMap`](super::PaletteMap) entry
//! was computed for. Two queries that print the same key share one entry.

use crate::color::{Color, Lab, Rgb, Rgba};

/// Canonical string key of a color.
pub trait PaletteKey {
    /// Returns the key this color is stored under in a palette map.
    fn palette_key(&self) -> String;
}

/// Shortest round-trip decimal form, with negative zero printed as `0`.
fn num(v: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", v + 0.0)
}

impl PaletteKey for Rgb {
    /// `R{r}B{b}G{g}`, blue before green.
    fn palette_key(&self) -> String {
        format!("R{}B{}G{}", num(self.r), num(self.b), num(self.g))
    }
}

impl PaletteKey for Rgba {
    /// The [`Rgb`] key followed by `A{a}`.
    fn palette_key(&self) -> String {
        format!("{}A{}", self.rgb().palette_key(), num(self.a))
    }
}

impl PaletteKey for Lab {
    /// `L{l}a{a}b{b}`.
    fn palette_key(&self) -> String {
        format!("L{}a{}b{}", num(self.l), num(self.a), num(self.b))
    }
}

impl PaletteKey for Color {
    fn palette_key(&self) -> String {
        match self {
            Color::Rgb(rgb) => rgb.palette_key(),
            Color::Rgba(rgba) => rgba.palette_key(),
            Color::Lab(lab) => lab.palette_key(),
        }
    }
}

impl<T: PaletteKey + ?Sized> PaletteKey for &T {
    fn palette_key(&self) -> String {
        (**self).palette_key()
    }
}
