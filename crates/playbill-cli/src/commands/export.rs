//! The export command.

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use playbill_store::Store;
use std::fs;
use std::path::PathBuf;

/// Write the full history log as an indented JSON document.
pub fn execute_export(args: ExportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = Store::open(config.db_path()?)?;
    let document = store.export_history()?;

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(Store::export_file_name(Local::now().date_naive()))
    });

    fs::write(&path, document)?;
    println!(
        "{}",
        formatter.status(&format!("Exported history to {}", path.display()))
    );

    Ok(())
}
