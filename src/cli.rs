use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "style-grade")]
#[command(author, version, about = "Grade Java codebases by counting style violations")]
#[command(long_about = "Validates each codebase against the enabled style categories and \
    maps violation counts to scores.\n\n\
    Exit codes:\n  \
    0 - All codebases were scored\n  \
    1 - Validation failed for at least one codebase\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v lists every violation)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and score codebases
    Check(CheckArgs),

    /// Generate a starter configuration file
    Init(InitArgs),

    /// List categories, violation types and engine rule identifiers
    Catalog,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Codebase directories to grade (default: every directory under `codebases.root`)
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write score rows to this CSV file (overrides `report.csv`)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the full report to this JSON file (overrides `report.json`)
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Keep violations on lines copied from the template
    #[arg(long)]
    pub no_template: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".style-grade.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
