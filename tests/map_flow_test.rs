//! End-to-end flows: parse colors, build a palette, match and report.

mod common;

use color_diff::{Color, LabPalette, MatchMode, PaletteKey};
use colormatch::input::{format_color, parse_color, parse_color_list, read_color_file};
use colormatch::models::{AppConfig, Mode};
use colormatch::report::{match_entry, render, MapReport, OutputFormat};
use common::{fixtures, fixtures::palettes, write_temp_file};
use pretty_assertions::assert_eq;

fn matched(report: &MapReport) -> Vec<(&str, &str)> {
    report
        .entries
        .iter()
        .map(|e| (e.query.as_str(), e.matched.as_str()))
        .collect()
}

#[test]
fn test_map_yaml_queries_onto_basic_palette() {
    let (_dir, path) = write_temp_file("queries.yaml", fixtures::QUERIES_YAML);
    let queries = read_color_file(&path).unwrap();
    let palette = LabPalette::new(palettes::basic(), None).unwrap();

    let report = MapReport::build("basic", &queries, &palette, Mode::Closest);

    assert_eq!(
        matched(&report),
        vec![
            ("#ffd700", "#ffffff"),
            ("#faf0e6", "#ffffff"),
            // Quarter-opaque black over white is a light grey
            ("rgba(0, 0, 0, 0.25)", "#ffffff"),
        ]
    );
    assert_eq!(report.entries[2].key, "R0B0G0A0.25");
}

#[test]
fn test_map_json_queries_onto_basic_palette() {
    let (_dir, path) = write_temp_file("queries.json", fixtures::QUERIES_JSON);
    let queries = read_color_file(&path).unwrap();
    let palette = LabPalette::new(palettes::basic(), None).unwrap();

    let report = MapReport::build("basic", &queries, &palette, Mode::Closest);

    assert_eq!(
        matched(&report),
        vec![
            ("#000080", "#0000ff"),
            ("#282828", "#000000"),
            ("lab(95, 0, 0)", "#ffffff"),
        ]
    );
}

#[test]
fn test_furthest_from_gold() {
    let palette = LabPalette::new(palettes::basic(), None).unwrap();
    let gold = parse_color("#FFD700").unwrap();

    let entry = match_entry(&gold, &palette, MatchMode::Furthest).unwrap();

    assert_eq!(entry.matched, "#0000ff");
    assert_eq!(entry.key, "R255B0G215");
}

#[test]
fn test_opaque_rgba_palette_matches_like_rgb() {
    let rgb = LabPalette::new(palettes::basic(), None).unwrap();
    let rgba = LabPalette::new(palettes::basic_rgba(), None).unwrap();
    let queries = parse_color_list("#000080,#282828,#faf0e6,#0a141e").unwrap();

    for mode in [MatchMode::Closest, MatchMode::Furthest] {
        let from_rgb = rgb.map_palette(&queries, mode);
        let from_rgba = rgba.map_palette(&queries, mode);
        for query in &queries {
            let key = query.palette_key();
            assert_eq!(
                channels(&from_rgb[&key]),
                channels(&from_rgba[&key]),
                "{} ({mode:?})",
                format_color(query)
            );
        }
    }
}

#[test]
fn test_config_palette_flow_renders_json() {
    let config = AppConfig::from_yaml_str(fixtures::FULL_CONFIG).unwrap();
    let palette = LabPalette::new(config.palette(None).unwrap(), config.background_rgb().unwrap())
        .unwrap();
    let queries = parse_color_list("#0a141e, #faf0e6").unwrap();

    let report = MapReport::build(&config.default_palette, &queries, &palette, config.mode);
    let json = render(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["palette"], "mono");
    assert_eq!(value["mode"], "closest");
    assert_eq!(value["entries"][0]["query"], "#0a141e");
    assert_eq!(value["entries"][0]["match"], "#000000");
    assert_eq!(value["entries"][0]["key"], "R10B30G20");
    assert_eq!(value["entries"][1]["match"], "#ffffff");
}

#[test]
fn test_text_report_lines() {
    let palette = LabPalette::new(palettes::basic(), None).unwrap();
    let queries = parse_color_list("#000080,#000080").unwrap();

    let report = MapReport::build("basic", &queries, &palette, Mode::Closest);
    let text = render(&report, OutputFormat::Text).unwrap();

    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("#000080 -> #0000ff ("), "{text}");
}

#[test]
fn test_read_color_file_errors() {
    let (_dir, path) = write_temp_file("bad.json", r##"["#000000", 42]"##);
    assert!(read_color_file(&path).is_err());

    let dir = tempfile::tempdir().unwrap();
    assert!(read_color_file(&dir.path().join("absent.yaml")).is_err());
}

/// Channels of an RGB or RGBA color
fn channels(color: &Color) -> Option<(f64, f64, f64)> {
    match color {
        Color::Rgb(c) => Some((c.r, c.g, c.b)),
        Color::Rgba(c) => Some((c.r, c.g, c.b)),
        Color::Lab(_) => None,
    }
}
