//! Cosmic CLI: print a panel's probability series without the terminal UI.
//!
//! Commands:
//! - `life`: intelligent-life curve for a slider position or a time in years
//! - `asteroid`: cumulative collision curve for a position or yearly probability
//! - `config`: print the effective configuration as TOML

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cosmic_core::binding::event_channel;
use cosmic_core::config::CosmicConfig;
use cosmic_core::panel::{ChartModel, ProbabilityPanel};

#[derive(Parser)]
#[command(
    name = "cosmic",
    about = "Cosmic Odyssey CLI: probability series as tables, CSV or JSON"
)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Probability of intelligent life over time.
    Life {
        /// Slider position (0..=slider_max).
        #[arg(long, conflicts_with = "time")]
        position: Option<u32>,

        /// Selected time after the Big Bang, in years (e.g. 2.5e11).
        #[arg(long)]
        time: Option<f64>,
    },
    /// Cumulative probability of an asteroid collision.
    Asteroid {
        /// Slider position (0..=slider_max).
        #[arg(long, conflicts_with = "probability")]
        position: Option<u32>,

        /// Yearly collision probability (e.g. 1e-7).
        #[arg(long)]
        probability: Option<f64>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

/// Where the slider should sit before sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Selection {
    Initial,
    Position(u32),
    Value(f64),
}

impl Selection {
    fn from_args(position: Option<u32>, value: Option<f64>) -> Self {
        match (position, value) {
            (Some(p), _) => Selection::Position(p),
            (None, Some(v)) => Selection::Value(v),
            (None, None) => Selection::Initial,
        }
    }
}

#[derive(Serialize)]
struct Row {
    years: f64,
    probability: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = CosmicConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Life { position, time } => {
            let (tx, _rx) = event_channel();
            let mut panel = config.life.build_panel(tx)?;
            run_panel(&mut panel, Selection::from_args(position, time), cli.format, &mut out)
        }
        Commands::Asteroid {
            position,
            probability,
        } => {
            let (tx, _rx) = event_channel();
            let mut panel = config.asteroid.build_panel(tx)?;
            run_panel(
                &mut panel,
                Selection::from_args(position, probability),
                cli.format,
                &mut out,
            )
        }
        Commands::Config => {
            out.write_all(config.to_toml()?.as_bytes())?;
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_panel(
    panel: &mut dyn ProbabilityPanel,
    selection: Selection,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    apply_selection(panel, selection)?;
    let chart = panel.chart();
    info!(
        panel = ?panel.id(),
        position = panel.binding().position(),
        points = chart.series.len(),
        "sampled series"
    );

    match format {
        Format::Table => write_table(&chart, &panel.describe_value(), out),
        Format::Csv => write_csv(&chart, out),
        Format::Json => write_json(&chart, out),
    }
}

/// Move the slider the same way the UI does: values go through the text path.
fn apply_selection(panel: &mut dyn ProbabilityPanel, selection: Selection) -> Result<()> {
    let binding = panel.binding_mut();
    match selection {
        Selection::Initial => {}
        Selection::Position(p) => {
            let max = binding.scale().max_position();
            if p > max {
                anyhow::bail!("position {p} is past the end of the slider (max {max})");
            }
            binding.set_position(p);
        }
        Selection::Value(v) => {
            let position = binding
                .submit_text(&v.to_string())
                .with_context(|| format!("applying value {v}"))?;
            debug!(value = v, position, "value mapped to slider position");
        }
    }
    Ok(())
}

fn write_table(chart: &ChartModel, summary: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", chart.title)?;
    writeln!(out, "{summary}")?;
    if let Some(marker) = &chart.marker {
        writeln!(out, "{}", marker.label)?;
    }
    writeln!(out)?;
    writeln!(out, "{:>16} {:>14}", chart.x_label, chart.y_label)?;
    writeln!(out, "{}", "-".repeat(31))?;
    for &(x, y) in chart.series.iter() {
        writeln!(out, "{:>16.4e} {:>14.6e}", x, y)?;
    }
    Ok(())
}

fn write_csv(chart: &ChartModel, out: &mut impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for &(years, probability) in chart.series.iter() {
        writer.serialize(Row { years, probability })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(chart: &ChartModel, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, chart)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life_panel() -> cosmic_core::LifePanel {
        let (tx, _rx) = event_channel();
        CosmicConfig::default().life.build_panel(tx).unwrap()
    }

    fn asteroid_panel() -> cosmic_core::AsteroidPanel {
        let (tx, _rx) = event_channel();
        CosmicConfig::default().asteroid.build_panel(tx).unwrap()
    }

    fn run(panel: &mut dyn ProbabilityPanel, selection: Selection, format: Format) -> String {
        let mut out = Vec::new();
        run_panel(panel, selection, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_life_with_time() {
        let cli = Cli::try_parse_from(["cosmic", "life", "--time", "2.5e11"]).unwrap();
        assert_eq!(cli.format, Format::Table);
        match cli.command {
            Commands::Life { position, time } => {
                assert_eq!(position, None);
                assert_eq!(time, Some(2.5e11));
            }
            _ => panic!("expected life"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cosmic",
            "asteroid",
            "--position",
            "50",
            "--format",
            "csv",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Csv);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Asteroid {
                position: Some(50),
                probability: None
            }
        ));
    }

    #[test]
    fn position_and_value_conflict() {
        assert!(Cli::try_parse_from(["cosmic", "life", "--position", "1", "--time", "1e9"]).is_err());
        assert!(
            Cli::try_parse_from(["cosmic", "asteroid", "--position", "1", "--probability", "1e-8"])
                .is_err()
        );
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cosmic", "life", "--format", "xml"]).is_err());
    }

    #[test]
    fn selection_prefers_position() {
        assert_eq!(Selection::from_args(Some(3), None), Selection::Position(3));
        assert_eq!(Selection::from_args(None, Some(0.5)), Selection::Value(0.5));
        assert_eq!(Selection::from_args(None, None), Selection::Initial);
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let text = run(&mut asteroid_panel(), Selection::Initial, Format::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "years,probability");
        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("0.0,"));
    }

    #[test]
    fn json_carries_marker_label() {
        let mut panel = life_panel();
        let text = run(&mut panel, Selection::Value(5e11), Format::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["marker"]["label"], "Current Time: 5.0e+11 years");
        assert_eq!(value["series"].as_array().unwrap().len(), 1200);
        assert_eq!(panel.binding().position(), 500);
    }

    #[test]
    fn table_lists_title_and_summary() {
        let text = run(&mut asteroid_panel(), Selection::Position(10), Format::Table);
        assert!(text.starts_with("Probability of an Asteroid Collision with Earth"));
        assert!(text.contains("p = 1.00e-7 per year"));
    }

    #[test]
    fn invalid_value_is_an_error() {
        let mut panel = asteroid_panel();
        let mut out = Vec::new();
        assert!(run_panel(&mut panel, Selection::Value(f64::NAN), Format::Csv, &mut out).is_err());
        assert_eq!(panel.binding().position(), 1);
    }

    #[test]
    fn position_past_the_end_is_an_error() {
        let mut panel = life_panel();
        let mut out = Vec::new();
        assert!(run_panel(&mut panel, Selection::Position(5000), Format::Csv, &mut out).is_err());
    }
}
