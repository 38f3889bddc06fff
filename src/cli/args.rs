//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    catalog::CatalogCommands, completions::CompletionsArgs, forecast::ForecastArgs,
    schedule::ScheduleArgs,
};

#[derive(Parser)]
#[command(name = "sst")]
#[command(author, version, about = "SOLAS Survey Toolkit")]
#[command(
    long_about = "Computes the mandatory SOLAS/IMO test schedule for inflatable liferafts and other maritime safety equipment from the manufacture date."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Rule catalog file (default: embedded SOLAS/IMO catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the mandatory test schedule for an equipment item
    Schedule(ScheduleArgs),

    /// Project which tests fall due at each age
    Forecast(ForecastArgs),

    /// Inspect or validate the rule catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (styled table)
    #[default]
    Auto,
    /// Plain table
    Table,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// CSV line items (for invoicing/spreadsheets)
    Csv,
}

impl OutputFormat {
    /// Parse a config-file format name, falling back to Auto
    pub fn from_config(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "yaml" => OutputFormat::Yaml,
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Auto,
        }
    }
}
