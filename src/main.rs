//! Painlog CLI
//!
//! Command-line interface for pain journal analytics:
//! - Analyze weather/pain correlations in a journal file
//! - Produce temperature/pain scatter data
//! - Inspect how a weather note is parsed
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use painlog::analysis::{
    temperature_scatter, AnalysisReport, ScatterSeries, WeatherCorrelationAnalyzer,
};
use painlog::config::{generate_default_config, Config, LoggingConfig};
use painlog::journal::{ImportResult, JournalImporter};
use painlog::weather::parse_weather;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "painlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Weather and pain correlation analysis for a pain journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/painlog/config.toml or ./painlog.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze weather/pain correlations in a journal file (CSV or JSON)
    Analyze {
        /// Path to the journal file
        path: PathBuf,
    },

    /// Temperature against pain, with trend line and pain histogram
    Scatter {
        /// Path to the journal file
        path: PathBuf,
    },

    /// Show how a weather note is parsed
    Parse {
        /// Weather text, e.g. "18°C, light rain, 72% humidity"
        text: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default().context("loading default config")?,
    };

    init_logging(&config.logging);
    tracing::debug!("Painlog v{}", env!("CARGO_PKG_VERSION"));

    let json = cli.format == "json";

    match cli.command {
        Commands::Analyze { path } => {
            let imported = import(&config, &path)?;
            let analyzer = WeatherCorrelationAnalyzer::new(config.analysis.clone());
            let report = analyzer.analyze(&imported.entries);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match report {
                    Some(report) => print_report(&report),
                    None => println!(
                        "Insufficient weather data: at least {} entries need weather notes.",
                        analyzer.thresholds().min_weather_entries
                    ),
                }
            }
        }

        Commands::Scatter { path } => {
            let imported = import(&config, &path)?;
            let series = temperature_scatter(&imported.entries);

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                match series {
                    Some(series) => print_scatter(&series),
                    None => println!("Not enough entries with a temperature to plot."),
                }
            }
        }

        Commands::Parse { text } => {
            let parsed = parse_weather(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("Temperature: {}", display_opt(parsed.temperature_celsius, "°C"));
                println!("Humidity:    {}", display_opt(parsed.humidity_percent, "%"));
                println!("Raining:     {}", if parsed.is_raining { "yes" } else { "no" });
                println!("Condition:   {}", parsed.condition_or_fallback());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("painlog={}", logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so reports on stdout stay machine-readable
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn import(config: &Config, path: &Path) -> anyhow::Result<ImportResult> {
    let imported = JournalImporter::from(&config.import)
        .import_path(path)
        .with_context(|| format!("importing {}", path.display()))?;

    if imported.rows_failed > 0 {
        tracing::warn!(failed = imported.rows_failed, "Some journal rows were skipped");
        for error in &imported.errors {
            tracing::warn!("{}", error);
        }
    }

    Ok(imported)
}

fn print_report(report: &AnalysisReport) {
    println!(
        "Entries: {} ({} with weather, {}% coverage)",
        report.total_entries, report.entries_with_weather, report.coverage_percent
    );
    println!();

    if report.correlations.is_empty() {
        println!("No weather factor has enough samples yet.");
    } else {
        println!(
            "{:<20} {:>10} {:>10} {:>8} {:>9} {:>7}",
            "FACTOR", "DIRECTION", "STRENGTH", "WITH", "WITHOUT", "N"
        );
        println!("{}", "-".repeat(69));
        for c in &report.correlations {
            println!(
                "{:<20} {:>10} {:>10} {:>8.2} {:>9.2} {:>7}",
                c.factor.name(),
                c.direction.to_string(),
                c.strength.to_string(),
                c.avg_pain_with_factor,
                c.avg_pain_without_factor,
                c.sample_size
            );
        }
        println!();
        for c in &report.correlations {
            println!("  - {}", c.narrative);
        }
    }

    println!();
    println!("{:<24} {:>6} {:>9}", "CONDITION", "COUNT", "AVG PAIN");
    println!("{}", "-".repeat(41));
    for b in &report.weather_breakdown {
        println!("{:<24} {:>6} {:>9.1}", b.condition, b.count, b.average_pain);
    }
}

fn print_scatter(series: &ScatterSeries) {
    println!("{:>8} {:>6}", "TEMP °C", "PAIN");
    for p in &series.points {
        println!("{:>8} {:>6.1}", p.temperature_celsius, p.pain_score);
    }

    println!();
    println!("Pearson r: {:.2}", series.correlation);
    match &series.regression {
        Some(fit) => println!(
            "Trend: pain = {:.3} x temp + {:.2} (r² = {:.2})",
            fit.slope, fit.intercept, fit.r_squared
        ),
        None => println!("Trend: n/a (single temperature)"),
    }

    println!();
    println!("Pain distribution:");
    for bin in &series.pain_histogram {
        println!(
            "  {:>4.1}-{:<4.1} {}",
            bin.lower,
            bin.upper,
            "#".repeat(bin.count)
        );
    }
}

fn display_opt<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v, unit))
        .unwrap_or_else(|| "-".to_string())
}
