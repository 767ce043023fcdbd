//! Playbill CLI - turn captured posters into structured event records.

use clap::Parser;
use playbill_cli::commands;
use playbill_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> playbill_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = Some(db);
    }

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Scan(args) => commands::execute_scan(args, &config, &formatter).await?,
        Command::History(args) => commands::execute_history(args, &config, &formatter)?,
        Command::Export(args) => commands::execute_export(args, &config, &formatter)?,
        Command::Settings(args) => commands::execute_settings(args, &config, &formatter)?,
    }

    Ok(())
}
