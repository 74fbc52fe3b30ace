use color_diff::{Color, MatchMode, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ParseColorError};
use crate::input::{background_from, ColorSpec};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "COLORMATCH_CONFIG";

/// Search direction, as written in config files and on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Closest,
    Furthest,
}

impl From<Mode> for MatchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Closest => MatchMode::Closest,
            Mode::Furthest => MatchMode::Furthest,
        }
    }
}

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Background for colors with alpha (default white)
    #[serde(default)]
    pub background: Option<ColorSpec>,

    /// Default search direction for `map`
    #[serde(default)]
    pub mode: Mode,

    /// Palette used when a command names none
    #[serde(default = "default_palette")]
    pub default_palette: String,

    /// Named palettes, merged over the built-in ones
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<ColorSpec>>,
}

fn default_palette() -> String {
    "css-basic".to_string()
}

/// The 16 CSS basic color keywords.
const CSS_BASIC: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00), // black
    (0xc0, 0xc0, 0xc0), // silver
    (0x80, 0x80, 0x80), // gray
    (0xff, 0xff, 0xff), // white
    (0x80, 0x00, 0x00), // maroon
    (0xff, 0x00, 0x00), // red
    (0x80, 0x00, 0x80), // purple
    (0xff, 0x00, 0xff), // fuchsia
    (0x00, 0x80, 0x00), // green
    (0x00, 0xff, 0x00), // lime
    (0x80, 0x80, 0x00), // olive
    (0xff, 0xff, 0x00), // yellow
    (0x00, 0x00, 0x80), // navy
    (0x00, 0x00, 0xff), // blue
    (0x00, 0x80, 0x80), // teal
    (0x00, 0xff, 0xff), // aqua
];

/// Four-level grey ramp
const GREY4: [(u8, u8, u8); 4] = [(0, 0, 0), (85, 85, 85), (170, 170, 170), (255, 255, 255)];

fn builtin(colors: &[(u8, u8, u8)]) -> Vec<ColorSpec> {
    colors
        .iter()
        .map(|&(r, g, b)| ColorSpec(Color::Rgb(Rgb::from_u8(r, g, b))))
        .collect()
}

fn builtin_palettes() -> BTreeMap<String, Vec<ColorSpec>> {
    BTreeMap::from([
        ("css-basic".to_string(), builtin(&CSS_BASIC)),
        ("grey4".to_string(), builtin(&GREY4)),
    ])
}

impl AppConfig {
    /// Parse a config document. Built-in palettes are kept unless the
    /// document redefines them.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        for (name, colors) in builtin_palettes() {
            config.palettes.entry(name).or_insert(colors);
        }
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path`, else from `$COLORMATCH_CONFIG`, else use defaults.
    ///
    /// A file that was asked for but cannot be read or parsed is an error.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file given, using built-in palettes");
                Ok(Self::default())
            }
        }
    }

    /// Colors of the palette `name`, or of `default_palette` when `None`.
    pub fn palette(&self, name: Option<&str>) -> Result<Vec<Color>, ConfigError> {
        let name = name.unwrap_or(&self.default_palette);
        let colors = self
            .palettes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))?;
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette(name.to_string()));
        }
        Ok(colors.iter().map(|&spec| Color::from(spec)).collect())
    }

    /// The configured background as an opaque color.
    pub fn background_rgb(&self) -> Result<Option<Rgb>, ParseColorError> {
        self.background
            .map(|spec| background_from(spec.0))
            .transpose()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            background: None,
            mode: Mode::default(),
            default_palette: default_palette(),
            palettes: builtin_palettes(),
        }
    }
}
