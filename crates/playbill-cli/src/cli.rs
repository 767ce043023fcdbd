//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Playbill CLI - extract structured event records from captured posters.
#[derive(Debug, Parser)]
#[command(name = "playbill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file path (overrides the configured one)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recognize a captured image and extract an event record
    Scan(ScanArgs),

    /// List saved records, newest first
    History(HistoryArgs),

    /// Export the saved history as a JSON document
    Export(ExportArgs),

    /// Show or update extraction settings
    Settings(SettingsArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Path to the captured image (jpeg/png)
    pub image: PathBuf,

    /// Save the extracted record to history
    #[arg(long)]
    pub save: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Print the log as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file; defaults to a dated file name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the settings command.
#[derive(Debug, Parser)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show the effective extraction settings
    Show,

    /// Update extraction settings; omitted fields keep their value
    Set(SetArgs),
}

/// Arguments for `settings set`.
#[derive(Debug, Parser)]
pub struct SetArgs {
    /// Provider name: "custom" for a self-hosted endpoint, otherwise the
    /// hosted provider's name
    #[arg(long)]
    pub provider: Option<String>,

    /// Chat-completions endpoint URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// API key, read from the environment when not given on the command line
    #[arg(long, env = "PLAYBILL_API_KEY")]
    pub api_key: Option<String>,
}
