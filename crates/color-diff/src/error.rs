//! Error types for color conversion, difference and matching.

use std::fmt;

use thiserror::Error;

/// Result type alias for color-diff operations.
pub type Result<T> = std::result::Result<T, ColorDiffError>;

/// Which hue case analysis rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueStage {
    /// The signed hue difference (Δh′).
    Difference,
    /// The mean hue (H̄′).
    Mean,
}

impl fmt::Display for HueStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HueStage::Difference => write!(f, "hue difference"),
            HueStage::Mean => write!(f, "mean hue"),
        }
    }
}

/// Errors raised by the converter, the CIEDE2000 formula and the matcher.
///
/// Every error is local to a single color pair or a single query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorDiffError {
    /// A match was attempted against zero candidates.
    #[error("cannot match against an empty candidate set")]
    EmptyInput,

    /// The hue angles fell outside every case of the formula's case analysis.
    ///
    /// Unreachable for finite Lab values.
    #[error("{stage} has no case for hue angles {h1} and {h2}")]
    InvalidAngleConfiguration {
        /// Which case analysis failed
        stage: HueStage,
        /// Hue angle h1′ in degrees
        h1: f64,
        /// Hue angle h2′ in degrees
        h2: f64,
    },

    /// A channel or Lab component was NaN or infinite.
    #[error("non-finite {component} value: {value}")]
    InvalidNumericInput {
        /// Name of the offending component (e.g. "red", "L")
        component: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl ColorDiffError {
    /// Returns `Err(InvalidNumericInput)` unless `value` is finite.
    pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ColorDiffError::InvalidNumericInput { component, value })
        }
    }
}
