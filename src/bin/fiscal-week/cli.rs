use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Retail fiscal week calendar.
#[derive(Parser)]
#[command(name = "fiscal-week", version, about = "Map calendar dates to retail fiscal weeks")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Company ticker whose calendar to use.
    #[arg(short = 't', long, global = true, default_value = "WMT")]
    pub company: String,

    /// TOML file with extra or overriding company declarations.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print one JSON record per ISO date (YYYY-MM-DD).
    Annotate(AnnotateArgs),
    /// Print one JSON record for every date of a range.
    Calendar(RangeArgs),
    /// Print the fiscal week ids touched by a range.
    Weeks(RangeArgs),
}

/// Arguments for the `annotate` subcommand.
#[derive(clap::Args)]
pub struct AnnotateArgs {
    /// Dates to annotate.
    #[arg(required = true)]
    pub dates: Vec<String>,
}

/// Inclusive date range, both ends as DD-MM-YYYY.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date (DD-MM-YYYY). Empty means no range.
    pub start: String,

    /// Last date (DD-MM-YYYY).
    pub end: String,
}
