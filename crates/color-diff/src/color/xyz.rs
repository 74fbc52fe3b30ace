//! CIE XYZ tristimulus values (observer 2°, illuminant D65)
//!
//! XYZ is the device-independent intermediate between sRGB and Lab. It never
//! leaves the crate.

use super::rgb::Rgb;

/// sRGB (D65) to XYZ matrix, rows produce X, Y and Z.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// A color in CIE XYZ space, scaled so that the D65 white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Decode one gamma-encoded sRGB channel (0..=1) to linear light.
///
/// IEC 61966-2-1 piecewise curve: linear segment up to 0.04045, power 2.4
/// above it.
#[inline]
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r / 255.0) * 100.0;
        let g = srgb_to_linear(rgb.g / 255.0) * 100.0;
        let b = srgb_to_linear(rgb.b / 255.0) * 100.0;

        let [mx, my, mz] = SRGB_TO_XYZ;
        Self {
            x: r * mx[0] + g * mx[1] + b * mx[2],
            y: r * my[0] + g * my[1] + b * my[2],
            z: r * mz[0] + g * mz[1] + b * mz[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_origin() {
        let xyz = Xyz::from(Rgb::BLACK);
        assert_eq!(xyz, Xyz { x: 0.0, y: 0.0, z: 0.0 });
    }

    #[test]
    fn test_white_matches_matrix_row_sums() {
        let xyz = Xyz::from(Rgb::WHITE);
        assert!((xyz.x - 95.05).abs() < 1e-9, "X = {}", xyz.x);
        assert!((xyz.y - 100.0).abs() < 1e-9, "Y = {}", xyz.y);
        assert!((xyz.z - 108.9).abs() < 1e-9, "Z = {}", xyz.z);
    }

    #[test]
    fn test_gamma_threshold_branches() {
        // At the threshold the linear segment applies
        assert_eq!(srgb_to_linear(0.04045), 0.04045 / 12.92);

        // Just above it the power curve applies
        let above = 0.0405;
        assert_eq!(srgb_to_linear(above), ((above + 0.055) / 1.055).powf(2.4));

        // sRGB 0.5 -> linear ~0.214
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 0.001);
    }

    #[test]
    fn test_primary_red_column() {
        let xyz = Xyz::from(Rgb::new(255.0, 0.0, 0.0));
        assert!((xyz.x - 41.24).abs() < 1e-9);
        assert!((xyz.y - 21.26).abs() < 1e-9);
        assert!((xyz.z - 1.93).abs() < 1e-9);
    }
}
