//! The history command.

use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use playbill_store::Store;

/// List saved records, newest first.
pub fn execute_history(args: HistoryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = Store::open(config.db_path()?)?;
    let entries = store.history()?;

    if args.json {
        println!("{}", formatter.format_history_json(&entries)?);
    } else {
        println!("{}", formatter.format_history(&entries));
    }

    Ok(())
}
