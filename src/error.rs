use std::io;
use std::path::PathBuf;

use color_diff::ColorDiffError;
use thiserror::Error;

/// Errors from turning text into a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("Empty color string")]
    Empty,

    #[error("Invalid hex color length: {0} digits (expected 3 or 6)")]
    InvalidLength(usize),

    #[error("Invalid hex color: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("{function}() takes {expected} values, found {found}")]
    WrongArity {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unrecognized color format: {0}")]
    UnknownFormat(String),

    #[error("Background must be an RGB color: {0}")]
    NotRgb(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Palette has no colors: {0}")]
    EmptyPalette(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid color: {0}")]
    Parse(#[from] ParseColorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Color error: {0}")]
    Color(#[from] ColorDiffError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
