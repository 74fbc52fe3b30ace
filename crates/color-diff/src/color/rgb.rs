//! sRGB color types
//!
//! Channels are 8-bit scale values stored as `f64` so that alpha-resolved
//! colors (which land between integers) keep full precision.

use crate::error::{ColorDiffError, Result};

/// An opaque color in sRGB space.
///
/// Channels are on the 0..=255 scale. Values outside that range are not
/// clamped or rejected; the converter trusts its caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Rgb {
    /// Opaque white, the default background for alpha resolution.
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    /// Opaque black.
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Create a new Rgb color from 0..=255 scale values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_diff::Rgb;
    /// let navy = Rgb::from_u8(0, 0, 128);
    /// assert_eq!(navy.b, 128.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Attach an alpha value, producing an [`Rgba`].
    #[inline]
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ColorDiffError::check_finite("red", self.r)?;
        ColorDiffError::check_finite("green", self.g)?;
        ColorDiffError::check_finite("blue", self.b)?;
        Ok(())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }
}

/// An sRGB color with an alpha channel.
///
/// `a` is the fraction of this color visible over a background: 1.0 is fully
/// opaque, 0.0 fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
    /// Alpha (0.0..=1.0)
    pub a: f64,
}

impl Rgba {
    /// Create a new Rgba color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels without alpha.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Resolve alpha against `background`, yielding the opaque color that is
    /// actually seen.
    ///
    /// Each channel becomes `bg + (fg - bg) * alpha`.
    ///
    /// # Example
    /// ```
    /// use color_diff::{Rgb, Rgba};
    ///
    /// let half_black = Rgba::new(0.0, 0.0, 0.0, 0.5);
    /// assert_eq!(half_black.over(Rgb::WHITE), Rgb::new(127.5, 127.5, 127.5));
    /// ```
    #[inline]
    pub fn over(self, background: Rgb) -> Rgb {
        Rgb::new(
            background.r + (self.r - background.r) * self.a,
            background.g + (self.g - background.g) * self.a,
            background.b + (self.b - background.b) * self.a,
        )
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.rgb().validate()?;
        ColorDiffError::check_finite("alpha", self.a)?;
        Ok(())
    }
}

impl From<Rgb> for Rgba {
    /// An opaque color is an Rgba with alpha 1.0.
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}
