//! Parsing colors from text and config files.
//!
//! Accepted forms (case-insensitive, surrounding whitespace ignored):
//!
//! - `#rgb`, `#rrggbb`, with or without the `#`
//! - `rgb(r, g, b)` with channels on the 0..=255 scale
//! - `rgba(r, g, b, a)` with alpha in 0..=1
//! - `lab(l, a, b)`
//!
//! Function arguments may be separated by commas, whitespace, or both.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use color_diff::{Color, Lab, Rgb, Rgba};
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{AppError, ParseColorError};

static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba|rgb|lab)\s*\(\s*(.*?)\s*\)$").expect("valid regex")
});

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*|\s+").expect("valid regex"));

/// Parse a single color.
pub fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }
    let lower = s.to_ascii_lowercase();

    if let Some(caps) = FUNCTIONAL.captures(&lower) {
        let function = &caps[1];
        let args = &caps[2];
        return parse_functional(function, args);
    }

    let digits = lower.strip_prefix('#').unwrap_or(&lower);
    if lower.starts_with('#') || digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex(digits).map(Color::Rgb);
    }

    Err(ParseColorError::UnknownFormat(s.to_string()))
}

fn parse_hex(digits: &str) -> Result<Rgb, ParseColorError> {
    let expanded: String = match digits.chars().count() {
        // Shorthand: each digit is doubled (f -> ff)
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        n => return Err(ParseColorError::InvalidLength(n)),
    };
    let mut bytes = [0u8; 3];
    hex::decode_to_slice(&expanded, &mut bytes)?;
    Ok(Rgb::from(bytes))
}

fn parse_functional(function: &str, args: &str) -> Result<Color, ParseColorError> {
    let values = if args.is_empty() {
        Vec::new()
    } else {
        SEPARATOR
            .split(args)
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?
    };

    let (name, expected) = match function {
        "rgba" => ("rgba", 4),
        "lab" => ("lab", 3),
        _ => ("rgb", 3),
    };
    match (name, values.as_slice()) {
        ("rgb", &[r, g, b]) => Ok(Color::Rgb(Rgb::new(r, g, b))),
        ("rgba", &[r, g, b, a]) => Ok(Color::Rgba(Rgba::new(r, g, b, a))),
        ("lab", &[l, a, b]) => Ok(Color::Lab(Lab::new(l, a, b))),
        _ => Err(ParseColorError::WrongArity {
            function: name,
            expected,
            found: values.len(),
        }),
    }
}

fn parse_number(s: &str) -> Result<f64, ParseColorError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseColorError::InvalidNumber(s.to_string())),
    }
}

/// Parse a list of colors.
///
/// A list containing `;` or a functional form is split on `;`, so that the
/// commas inside `rgb(...)` survive. Otherwise the list is split on `,`
/// (e.g. `#000000,#ffffff`). Empty items are skipped.
pub fn parse_color_list(s: &str) -> Result<Vec<Color>, ParseColorError> {
    let separator = if s.contains(';') || s.contains('(') {
        ';'
    } else {
        ','
    };
    s.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_color)
        .collect()
}

/// Opaque background for alpha resolution.
///
/// An RGBA color is first composited over white; Lab is rejected.
pub fn background_from(color: Color) -> Result<Rgb, ParseColorError> {
    match color {
        Color::Rgb(rgb) => Ok(rgb),
        Color::Rgba(rgba) => Ok(rgba.over(Rgb::WHITE)),
        Color::Lab(_) => Err(ParseColorError::NotRgb(format_color(&color))),
    }
}

/// Parse a `--background` value.
pub fn parse_background(s: &str) -> Result<Rgb, ParseColorError> {
    background_from(parse_color(s)?)
}

fn is_byte(v: f64) -> bool {
    v.fract() == 0.0 && (0.0..=255.0).contains(&v)
}

/// Format a color so that [`parse_color`] reads it back unchanged.
///
/// Opaque colors with integral in-range channels use `#rrggbb`.
pub fn format_color(color: &Color) -> String {
    match color {
        Color::Rgb(c) if is_byte(c.r) && is_byte(c.g) && is_byte(c.b) => {
            format!("#{}", hex::encode([c.r as u8, c.g as u8, c.b as u8]))
        }
        Color::Rgb(c) => format!("rgb({}, {}, {})", c.r, c.g, c.b),
        Color::Rgba(c) => format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
        Color::Lab(c) => format!("lab({}, {}, {})", c.l, c.a, c.b),
    }
}

/// Read a YAML or JSON list of colors from a file.
///
/// Files ending in `.json` are read as JSON, everything else as YAML. Items
/// are anything [`ColorSpec`] accepts.
pub fn read_color_file(path: &Path) -> Result<Vec<Color>, AppError> {
    let content = std::fs::read_to_string(path)?;
    let specs: Vec<ColorSpec> = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    tracing::debug!(path = %path.display(), colors = specs.len(), "Read color file");
    Ok(specs.into_iter().map(Color::from).collect())
}

/// Serde form of a [`Color`].
///
/// Deserializes from a string (any [`parse_color`] form) or from an object
/// with `R`, `G`, `B` and optional `A` fields (either case), or `L` (or `l`),
/// `a`, `b`. Serializes to the canonical object form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec(pub Color);

impl From<ColorSpec> for Color {
    fn from(spec: ColorSpec) -> Self {
        spec.0
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec(color)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_color(&self.0))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RgbFields {
    #[serde(rename = "R", alias = "r")]
    r: f64,
    #[serde(rename = "G", alias = "g")]
    g: f64,
    #[serde(rename = "B", alias = "b")]
    b: f64,
    #[serde(rename = "A", alias = "a", default, skip_serializing_if = "Option::is_none")]
    a: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabFields {
    #[serde(rename = "L", alias = "l")]
    l: f64,
    a: f64,
    b: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Rgb(RgbFields),
    Lab(LabFields),
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawColor::deserialize(deserializer).map_err(|_| {
            <D::Error as de::Error>::custom(
                "expected a color string or an object with R/G/B[/A] or L/a/b",
            )
        })?;
        let color = match raw {
            RawColor::Text(s) => parse_color(&s).map_err(<D::Error as de::Error>::custom)?,
            RawColor::Rgb(RgbFields { r, g, b, a: None }) => Color::Rgb(Rgb::new(r, g, b)),
            RawColor::Rgb(RgbFields {
                r,
                g,
                b,
                a: Some(a),
            }) => Color::Rgba(Rgba::new(r, g, b, a)),
            RawColor::Lab(LabFields { l, a, b }) => Color::Lab(Lab::new(l, a, b)),
        };
        Ok(ColorSpec(color))
    }
}

impl Serialize for ColorSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Color::Rgb(c) => RgbFields {
                r: c.r,
                g: c.g,
                b: c.b,
                a: None,
            }
            .serialize(serializer),
            Color::Rgba(c) => RgbFields {
                r: c.r,
                g: c.g,
                b: c.b,
                a: Some(c.a),
            }
            .serialize(serializer),
            Color::Lab(c) => LabFields {
                l: c.l,
                a: c.a,
                b: c.b,
            }
            .serialize(serializer),
        }
    }
}
