//! Command results and their rendering as text, JSON or YAML.

use color_diff::{diff, Color, LabPalette, MatchMode, PaletteKey, Rgb, ToLab};
use serde::Serialize;
use std::collections::HashSet;

use crate::error::AppError;
use crate::input::{format_color, ColorSpec};
use crate::models::Mode;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Plain-text form of a report, one line per item.
pub trait TextReport {
    fn to_text(&self) -> String;
}

/// Render a report in the requested format.
pub fn render<T: Serialize + TextReport>(report: &T, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?.trim_end().to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabEntry {
    pub color: String,
    pub lab: ColorSpec,
}

/// Lab values of a list of colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LabReport(pub Vec<LabEntry>);

impl LabReport {
    pub fn build(colors: &[Color], background: Option<Rgb>) -> Result<Self, AppError> {
        let entries = colors
            .iter()
            .map(|color| {
                Ok(LabEntry {
                    color: format_color(color),
                    lab: ColorSpec(Color::Lab(color.to_lab(background)?)),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        Ok(Self(entries))
    }
}

impl TextReport for LabReport {
    fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|entry| match entry.lab.0 {
                Color::Lab(lab) => format!(
                    "{}\tL={:.4} a={:.4} b={:.4}",
                    entry.color, lab.l, lab.a, lab.b
                ),
                other => format!("{}\t{}", entry.color, format_color(&other)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// CIEDE2000 difference between two colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    pub a: String,
    pub b: String,
    pub delta_e: f64,
}

impl DiffReport {
    pub fn build(a: &Color, b: &Color, background: Option<Rgb>) -> Result<Self, AppError> {
        Ok(Self {
            a: format_color(a),
            b: format_color(b),
            delta_e: diff(a, b, background)?,
        })
    }
}

impl TextReport for DiffReport {
    fn to_text(&self) -> String {
        format!("{:.4}", self.delta_e)
    }
}

/// Best palette entry for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEntry {
    pub query: String,
    pub key: String,
    #[serde(rename = "match")]
    pub matched: String,
    pub delta_e: f64,
}

impl TextReport for MatchEntry {
    fn to_text(&self) -> String {
        format!("{} -> {} ({:.4})", self.query, self.matched, self.delta_e)
    }
}

/// Look up the best entry of `palette` for `query`.
pub fn match_entry(
    query: &Color,
    palette: &LabPalette<Color>,
    mode: MatchMode,
) -> Result<MatchEntry, AppError> {
    let (idx, delta_e) = palette.find_best(query, mode)?;
    let matched = palette.get(idx).map(format_color).unwrap_or_default();
    Ok(MatchEntry {
        query: format_color(query),
        key: query.palette_key(),
        matched,
        delta_e,
    })
}

/// Every query mapped onto a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapReport {
    pub palette: String,
    pub mode: Mode,
    pub entries: Vec<MatchEntry>,
}

impl MapReport {
    /// Map `queries` onto `palette`.
    ///
    /// Entries follow query order with one entry per key; when two queries
    /// share a key the later result is reported in the first position.
    /// Queries that cannot be matched are logged and left out.
    pub fn build(
        name: &str,
        queries: &[Color],
        palette: &LabPalette<Color>,
        mode: Mode,
    ) -> Self {
        let map = palette.map_palette(queries, mode.into());
        let mut seen = HashSet::new();
        let entries = queries
            .iter()
            .filter_map(|query| {
                let key = query.palette_key();
                let best = map.get(&key)?;
                if !seen.insert(key.clone()) {
                    return None;
                }
                let delta_e = diff(query, best, Some(palette.background())).ok()?;
                Some(MatchEntry {
                    query: format_color(query),
                    key,
                    matched: format_color(best),
                    delta_e,
                })
            })
            .collect();
        Self {
            palette: name.to_string(),
            mode,
            entries,
        }
    }
}

impl TextReport for MapReport {
    fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(TextReport::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteSummary {
    pub name: String,
    pub colors: usize,
    pub default: bool,
}

/// Configured palettes and their sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PaletteList(pub Vec<PaletteSummary>);

impl TextReport for PaletteList {
    fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|p| {
                let marker = if p.default { " (default)" } else { "" };
                format!("{}\t{} colors{}", p.name, p.colors, marker)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_diff::Lab;
    use pretty_assertions::assert_eq;

    fn palette(colors: &[Rgb]) -> LabPalette<Color> {
        LabPalette::new(colors.iter().copied().map(Color::from).collect(), None).unwrap()
    }

    #[test]
    fn test_lab_report_text() {
        let report = LabReport::build(&[Color::Rgb(Rgb::BLACK)], None).unwrap();
        assert_eq!(report.to_text(), "#000000\tL=0.0000 a=0.0000 b=0.0000");
    }

    #[test]
    fn test_lab_report_json() {
        let report = LabReport::build(&[Color::Lab(Lab::new(50.0, 1.0, -1.0))], None).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["color"], "lab(50, 1, -1)");
        assert_eq!(value[0]["lab"]["L"], 50.0);
    }

    #[test]
    fn test_lab_report_rejects_nan() {
        let result = LabReport::build(&[Color::Rgb(Rgb::new(f64::NAN, 0.0, 0.0))], None);
        assert!(matches!(result, Err(AppError::Color(_))));
    }

    #[test]
    fn test_diff_report() {
        let report = DiffReport::build(
            &Color::Lab(Lab::new(50.0, 2.5, 0.0)),
            &Color::Lab(Lab::new(50.0, 0.0, -2.5)),
            None,
        )
        .unwrap();
        assert_eq!(report.to_text(), "4.3065");
    }

    #[test]
    fn test_match_entry() {
        let palette = palette(&[Rgb::WHITE, Rgb::BLACK, Rgb::from_u8(0, 0, 255)]);
        let entry = match_entry(&Color::Rgb(Rgb::from_u8(0, 0, 128)), &palette, MatchMode::Closest)
            .unwrap();
        assert_eq!(entry.query, "#000080");
        assert_eq!(entry.key, "R0B128G0");
        assert_eq!(entry.matched, "#0000ff");
        assert!(entry.delta_e > 0.0);
    }

    #[test]
    fn test_map_report_order_and_duplicates() {
        let palette = palette(&[Rgb::WHITE, Rgb::BLACK]);
        let queries = [
            Color::Rgb(Rgb::from_u8(10, 10, 10)),
            Color::Rgb(Rgb::from_u8(240, 240, 240)),
            Color::Rgb(Rgb::from_u8(10, 10, 10)),
        ];
        let report = MapReport::build("bw", &queries, &palette, Mode::Closest);
        let matched: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.query.as_str(), e.matched.as_str()))
            .collect();
        assert_eq!(matched, vec![("#0a0a0a", "#000000"), ("#f0f0f0", "#ffffff")]);
    }

    #[test]
    fn test_map_report_skips_unmatched() {
        let palette = palette(&[Rgb::WHITE]);
        let queries = [Color::Rgb(Rgb::new(f64::NAN, 0.0, 0.0)), Color::Rgb(Rgb::BLACK)];
        let report = MapReport::build("w", &queries, &palette, Mode::Furthest);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].matched, "#ffffff");
    }

    #[test]
    fn test_palette_list_text() {
        let list = PaletteList(vec![
            PaletteSummary {
                name: "css-basic".to_string(),
                colors: 16,
                default: true,
            },
            PaletteSummary {
                name: "grey4".to_string(),
                colors: 4,
                default: false,
            },
        ]);
        assert_eq!(
            list.to_text(),
            "css-basic\t16 colors (default)\ngrey4\t4 colors"
        );
    }

    #[test]
    fn test_render_yaml() {
        let report = DiffReport {
            a: "#000000".to_string(),
            b: "#ffffff".to_string(),
            delta_e: 100.0,
        };
        let yaml = render(&report, OutputFormat::Yaml).unwrap();
        assert!(!yaml.ends_with('\n'));

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["a"].as_str(), Some("#000000"));
        assert_eq!(value["delta_e"].as_f64(), Some(100.0));
    }
}
