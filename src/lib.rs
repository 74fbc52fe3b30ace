//! colormatch - perceptual color matching from the command line
//!
//! Boundary adapters around the `color-diff` library: color parsing,
//! YAML configuration and report rendering. This library exposes modules
//! for integration testing.

pub mod error;
pub mod input;
pub mod models;
pub mod report;
