use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_diff::{Color, LabPalette, MatchMode, Rgb};
use colormatch::input::{parse_background, parse_color, parse_color_list, read_color_file};
use colormatch::models::{AppConfig, Mode};
use colormatch::report::{
    match_entry, render, DiffReport, LabReport, MapReport, OutputFormat, PaletteList,
    PaletteSummary,
};

#[derive(Parser)]
#[command(name = "colormatch")]
#[command(version)]
#[command(about = "Perceptual color difference (CIEDE2000) and palette matching")]
struct Cli {
    /// Config file (default: $COLORMATCH_CONFIG, else built-in palettes)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Background for colors with alpha (default: config value, else white)
    #[arg(long, global = true)]
    background: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the candidate colors come from
#[derive(Args)]
struct PaletteArgs {
    /// Named palette from the config
    #[arg(short, long, conflicts_with = "inline")]
    palette: Option<String>,

    /// Inline palette, e.g. "#000000,#FFFFFF" or "rgb(0,0,128); lab(50,0,0)"
    #[arg(short = 'c', long = "colors", value_name = "LIST")]
    inline: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Lab value of each color
    Lab {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print the CIEDE2000 difference between two colors
    Diff { a: String, b: String },
    /// Find the palette color closest to COLOR
    Closest {
        color: String,
        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Find the palette color furthest from COLOR
    Furthest {
        color: String,
        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Map each color onto its best palette color
    Map {
        colors: Vec<String>,

        /// YAML or JSON file with a list of colors
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        palette: PaletteArgs,

        /// Search direction (default: config value, else closest)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,
    },
    /// List configured palettes
    Palettes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.clone()).context("Failed to load configuration")?;
    let background = resolve_background(cli.background.as_deref(), &config)?;

    let output = match cli.command {
        Commands::Lab { colors } => run_lab_command(&colors, background, cli.format)?,
        Commands::Diff { a, b } => run_diff_command(&a, &b, background, cli.format)?,
        Commands::Closest { color, palette } => run_match_command(
            &color,
            &palette,
            &config,
            background,
            MatchMode::Closest,
            cli.format,
        )?,
        Commands::Furthest { color, palette } => run_match_command(
            &color,
            &palette,
            &config,
            background,
            MatchMode::Furthest,
            cli.format,
        )?,
        Commands::Map {
            colors,
            input,
            palette,
            mode,
        } => run_map_command(
            &colors,
            input.as_deref(),
            &palette,
            mode.unwrap_or(config.mode),
            &config,
            background,
            cli.format,
        )?,
        Commands::Palettes => run_palettes_command(&config, cli.format)?,
    };

    println!("{output}");
    Ok(())
}

/// Logging goes to stderr so that reports on stdout stay parseable
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "colormatch=debug,color_diff=debug"
    } else {
        "colormatch=warn,color_diff=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// `--background` wins over the config file
fn resolve_background(cli: Option<&str>, config: &AppConfig) -> anyhow::Result<Option<Rgb>> {
    if let Some(s) = cli {
        let rgb = parse_background(s).with_context(|| format!("Invalid --background '{s}'"))?;
        return Ok(Some(rgb));
    }
    config
        .background_rgb()
        .context("Invalid background in configuration")
}

fn parse_colors(colors: &[String]) -> anyhow::Result<Vec<Color>> {
    colors
        .iter()
        .map(|s| parse_color(s).with_context(|| format!("Invalid color '{s}'")))
        .collect()
}

/// Returns the palette name (for reports) and its colors
fn resolve_palette(args: &PaletteArgs, config: &AppConfig) -> anyhow::Result<(String, Vec<Color>)> {
    if let Some(ref list) = args.inline {
        let colors = parse_color_list(list).context("Invalid --colors list")?;
        anyhow::ensure!(!colors.is_empty(), "--colors list has no colors");
        return Ok(("inline".to_string(), colors));
    }
    let name = args
        .palette
        .clone()
        .unwrap_or_else(|| config.default_palette.clone());
    let colors = config.palette(Some(&name))?;
    Ok((name, colors))
}

fn run_lab_command(
    colors: &[String],
    background: Option<Rgb>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let colors = parse_colors(colors)?;
    let report = LabReport::build(&colors, background)?;
    Ok(render(&report, format)?)
}

fn run_diff_command(
    a: &str,
    b: &str,
    background: Option<Rgb>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let a = parse_color(a).with_context(|| format!("Invalid color '{a}'"))?;
    let b = parse_color(b).with_context(|| format!("Invalid color '{b}'"))?;
    let report = DiffReport::build(&a, &b, background)?;
    Ok(render(&report, format)?)
}

fn run_match_command(
    color: &str,
    args: &PaletteArgs,
    config: &AppConfig,
    background: Option<Rgb>,
    mode: MatchMode,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let query = parse_color(color).with_context(|| format!("Invalid color '{color}'"))?;
    let (name, colors) = resolve_palette(args, config)?;
    let palette = LabPalette::new(colors, background)
        .with_context(|| format!("Invalid color in palette '{name}'"))?;
    let entry = match_entry(&query, &palette, mode)?;
    Ok(render(&entry, format)?)
}

fn run_map_command(
    colors: &[String],
    input: Option<&Path>,
    args: &PaletteArgs,
    mode: Mode,
    config: &AppConfig,
    background: Option<Rgb>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut queries = parse_colors(colors)?;
    if let Some(path) = input {
        let from_file = read_color_file(path)
            .with_context(|| format!("Failed to read colors from {}", path.display()))?;
        queries.extend(from_file);
    }
    anyhow::ensure!(!queries.is_empty(), "No colors to map (pass COLOR... or --input)");

    let (name, colors) = resolve_palette(args, config)?;
    let palette = LabPalette::new(colors, background)
        .with_context(|| format!("Invalid color in palette '{name}'"))?;

    let report = MapReport::build(&name, &queries, &palette, mode);
    if report.entries.len() < queries.len() {
        tracing::info!(
            queries = queries.len(),
            mapped = report.entries.len(),
            "Some colors were merged or skipped"
        );
    }
    Ok(render(&report, format)?)
}

fn run_palettes_command(config: &AppConfig, format: OutputFormat) -> anyhow::Result<String> {
    let list = PaletteList(
        config
            .palettes
            .iter()
            .map(|(name, colors)| PaletteSummary {
                name: name.clone(),
                colors: colors.len(),
                default: *name == config.default_palette,
            })
            .collect(),
    );
    Ok(render(&list, format)?)
}
