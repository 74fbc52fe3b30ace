//! CIE L\*a\*b\* color space
//!
//! Lab is the space in which CIEDE2000 differences are computed.

use super::rgb::Rgb;
use super::xyz::Xyz;
use crate::error::{ColorDiffError, Result};

/// D65 reference white (observer 2°).
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.0;
const REF_Z: f64 = 108.883;

/// Threshold between the cube-root and linear segments of the Lab transfer.
const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;
const KAPPA_OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L\*a\*b\* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white) for in-gamut colors
/// - `a`: Green-red axis, typically -128.0..=128.0
/// - `b`: Blue-yellow axis, typically -128.0..=128.0
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ColorDiffError::check_finite("L", self.l)?;
        ColorDiffError::check_finite("a", self.a)?;
        ColorDiffError::check_finite("b", self.b)?;
        Ok(())
    }
}

#[inline]
fn lab_f(v: f64) -> f64 {
    if v > EPSILON {
        v.powf(1.0 / 3.0)
    } else {
        KAPPA_SLOPE * v + KAPPA_OFFSET
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / REF_X);
        let fy = lab_f(xyz.y / REF_Y);
        let fz = lab_f(xyz.z / REF_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    /// sRGB -> XYZ -> Lab.
    ///
    /// Performs no validation; use [`ToLab`](super::ToLab) to reject
    /// non-finite channels.
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}
