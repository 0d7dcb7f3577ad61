//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldkit validate --model <path> --input <path>
//! - fieldkit transform --model <path> --input <path>
//! - fieldkit populate --model <path> --input <path>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use simplelog::LevelFilter;

/// fieldkit - validate and normalize input against a model's properties
#[derive(Parser, Debug)]
#[command(name = "fieldkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (off, error, warn, info, debug, trace); overrides FIELDKIT_LOG
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print validation errors; exits with status 1 when any field fails
    Validate(Target),

    /// Print the transformed values of valid input
    Transform(Target),

    /// Print a record populated from valid input
    Populate(Target),
}

/// Model and input shared by every command.
#[derive(Args, Debug)]
pub struct Target {
    /// Path to the model metadata JSON file
    #[arg(long)]
    pub model: PathBuf,

    /// Path to the input JSON object
    #[arg(long)]
    pub input: PathBuf,

    /// Path to a field defaults JSON file
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Only derive fields for these properties
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Derive fields for every property except these
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
