//! CIEDE2000 color difference
//!
//! Follows G. Sharma, W. Wu and E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005), with the parametric factors kL = kC = kH = 1.
//!
//! Hue angles are handled in degrees, trigonometric terms in radians.

use crate::color::Lab;
use crate::error::{ColorDiffError, HueStage, Result};

#[inline]
fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// sqrt(c^7 / (c^7 + 25^7)), the weight shared by the G and R_C terms.
///
/// Written as 1 / sqrt(1 + (25/c)^7) so that c^7 never overflows.
#[inline]
fn chroma_weight(c: f64) -> f64 {
    if c == 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + (25.0 / c).powi(7)).sqrt()
}

/// Hue angle h′ in degrees, normalized to [0, 360).
///
/// Zero when both coordinates are zero (the achromatic case).
pub(crate) fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = rad_to_deg(b.atan2(a_prime));
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Signed hue difference Δh′ in degrees.
///
/// `chroma_product` is C1·C2; when it is zero one of the colors is achromatic
/// and the difference is zero.
pub(crate) fn hue_difference(chroma_product: f64, h1: f64, h2: f64) -> Result<f64> {
    if chroma_product == 0.0 {
        return Ok(0.0);
    }
    let d = h2 - h1;
    if d.abs() <= 180.0 {
        Ok(d)
    } else if d > 180.0 {
        Ok(d - 360.0)
    } else if d < -180.0 {
        Ok(d + 360.0)
    } else {
        Err(ColorDiffError::InvalidAngleConfiguration {
            stage: HueStage::Difference,
            h1,
            h2,
        })
    }
}

/// Mean hue H̄′ in degrees.
///
/// When one color is achromatic the sum is returned unhalved.
pub(crate) fn mean_hue(chroma_product: f64, h1: f64, h2: f64) -> Result<f64> {
    let sum = h1 + h2;
    if chroma_product == 0.0 {
        Ok(sum)
    } else if (h1 - h2).abs() <= 180.0 {
        Ok(sum / 2.0)
    } else if sum < 360.0 {
        Ok((sum + 360.0) / 2.0)
    } else if sum >= 360.0 {
        Ok((sum - 360.0) / 2.0)
    } else {
        Err(ColorDiffError::InvalidAngleConfiguration {
            stage: HueStage::Mean,
            h1,
            h2,
        })
    }
}

/// CIEDE2000 difference between two Lab colors.
///
/// Symmetric, zero for identical inputs. Non-finite components are rejected
/// with [`ColorDiffError::InvalidNumericInput`].
///
/// # Example
///
/// ```
/// use color_diff::{ciede2000, Lab};
///
/// let d = ciede2000(Lab::new(50.0, 2.5, 0.0), Lab::new(50.0, 0.0, -2.5)).unwrap();
/// assert!((d - 4.3065).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> Result<f64> {
    lab1.validate()?;
    lab2.validate()?;

    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Chroma and the a′ adjustment
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = (c1 + c2) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_bar));
    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    // Differences
    let chroma_product = c1 * c2;
    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;
    let delta_h = hue_difference(chroma_product, h1p, h2p)?;
    let delta_big_h = 2.0 * (c1p * c2p).sqrt() * (deg_to_rad(delta_h) / 2.0).sin();

    // Means
    let l_bar = (l1 + l2) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;
    let h_bar_p = mean_hue(chroma_product, h1p, h2p)?;

    let t = 1.0 - 0.17 * deg_to_rad(h_bar_p - 30.0).cos()
        + 0.24 * deg_to_rad(2.0 * h_bar_p).cos()
        + 0.32 * deg_to_rad(3.0 * h_bar_p + 6.0).cos()
        - 0.20 * deg_to_rad(4.0 * h_bar_p - 63.0).cos();
    let delta_ro = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let r_c = 2.0 * chroma_weight(c_bar_p);

    let l_offset = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset) / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -r_c * (2.0 * deg_to_rad(delta_ro)).sin();

    let dl = delta_l / s_l;
    let dc = delta_c / s_c;
    let dh = delta_big_h / s_h;

    let delta_e = (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt();
    ColorDiffError::check_finite("delta E", delta_e)
}
