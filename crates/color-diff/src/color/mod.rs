//! Color types and conversion to Lab
//!
//! This module converts sRGB(A) colors to CIE L\*a\*b\* through CIE XYZ:
//!
//! ```text
//! Rgba --(alpha over background)--> Rgb --(gamma decode, matrix)--> Xyz --> Lab
//! ```
//!
//! # Example
//!
//! ```
//! use color_diff::{Color, Rgb, ToLab};
//!
//! let navy = Color::from(Rgb::from_u8(0, 0, 128));
//! let lab = navy.to_lab(None).unwrap();
//! assert!(lab.l > 12.0 && lab.l < 13.0);
//! ```

mod lab;
mod rgb;
mod xyz;

pub use lab::Lab;
pub use rgb::{Rgb, Rgba};

use crate::error::Result;

/// Any color the library accepts as input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Opaque sRGB
    Rgb(Rgb),
    /// sRGB with alpha, resolved against a background before conversion
    Rgba(Rgba),
    /// Already in Lab, used as-is
    Lab(Lab),
}

impl Color {
    /// Returns true if this color carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        matches!(self, Color::Rgba(_))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        Color::Lab(lab)
    }
}

/// Conversion of any supported color representation to Lab.
///
/// `background` is only consulted for colors with an alpha channel and
/// defaults to [`Rgb::WHITE`]. Non-finite channels are rejected with
/// [`ColorDiffError::InvalidNumericInput`](crate::ColorDiffError::InvalidNumericInput).
pub trait ToLab {
    /// Convert to Lab, resolving alpha against `background` if present.
    fn to_lab(&self, background: Option<Rgb>) -> Result<Lab>;
}

impl ToLab for Rgb {
    fn to_lab(&self, _background: Option<Rgb>) -> Result<Lab> {
        self.validate()?;
        Ok(Lab::from(*self))
    }
}

impl ToLab for Rgba {
    fn to_lab(&self, background: Option<Rgb>) -> Result<Lab> {
        rgba_to_lab(*self, background)
    }
}

impl ToLab for Lab {
    fn to_lab(&self, _background: Option<Rgb>) -> Result<Lab> {
        self.validate()?;
        Ok(*self)
    }
}

impl ToLab for Color {
    fn to_lab(&self, background: Option<Rgb>) -> Result<Lab> {
        match self {
            Color::Rgb(rgb) => rgb.to_lab(background),
            Color::Rgba(rgba) => rgba.to_lab(background),
            Color::Lab(lab) => lab.to_lab(background),
        }
    }
}

impl<T: ToLab + ?Sized> ToLab for &T {
    fn to_lab(&self, background: Option<Rgb>) -> Result<Lab> {
        (**self).to_lab(background)
    }
}

/// Convert an sRGB color with alpha to Lab.
///
/// The color is first composited over `background` (opaque white when
/// `None`), then converted like an opaque color.
///
/// # Example
///
/// ```
/// use color_diff::{rgba_to_lab, Rgb, Rgba};
///
/// let clear = rgba_to_lab(Rgba::new(0.0, 0.0, 0.0, 0.0), None).unwrap();
/// let white = rgba_to_lab(Rgb::WHITE.into(), None).unwrap();
/// assert_eq!(clear, white);
/// ```
pub fn rgba_to_lab(rgba: Rgba, background: Option<Rgb>) -> Result<Lab> {
    rgba.validate()?;
    let background = background.unwrap_or(Rgb::WHITE);
    background.validate()?;
    Ok(Lab::from(rgba.over(background)))
}
