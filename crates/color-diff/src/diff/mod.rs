//! Perceptual color difference
//!
//! [`ciede2000`] works on Lab values directly; [`diff`] accepts any pair of
//! [`ToLab`] colors and converts them first.

mod ciede2000;

pub use ciede2000::ciede2000;

use crate::color::{Rgb, ToLab};
use crate::error::Result;

/// CIEDE2000 difference between two colors of any supported representation.
///
/// Each side is converted independently, so Lab may be compared against RGB.
/// Alpha is resolved against `background` (white when `None`).
///
/// # Example
///
/// ```
/// use color_diff::{diff, Lab, Rgb};
///
/// let white = Rgb::WHITE;
/// let black = Lab::new(0.0, 0.0, 0.0);
/// let d = diff(&white, &black, None).unwrap();
/// assert!((d - 100.0).abs() < 1e-4);
/// ```
pub fn diff<A, B>(c1: &A, c2: &B, background: Option<Rgb>) -> Result<f64>
where
    A: ToLab + ?Sized,
    B: ToLab + ?Sized,
{
    let lab1 = c1.to_lab(background)?;
    let lab2 = c2.to_lab(background)?;
    ciede2000(lab1, lab2)
}
