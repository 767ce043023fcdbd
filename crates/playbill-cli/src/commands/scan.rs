//! The scan command - the full extraction pipeline for one captured image.

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use playbill_domain::HistoryEntry;
use playbill_extractor::Extractor;
use playbill_ocr::OcrClient;
use playbill_store::Store;
use std::fs;
use tracing::info;

/// Recognize the image, extract a record, display it, optionally save it.
///
/// Recognition failures abort the run; a failed model extraction does not -
/// the extractor falls back to the regex pass and tags the result
/// accordingly.
pub async fn execute_scan(args: ScanArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let image = fs::read(&args.image)?;
    info!(path = %args.image.display(), bytes = image.len(), "image loaded");

    println!("{}", formatter.status("Recognizing text..."));
    let ocr = OcrClient::new(&config.ocr_url);
    let raw_text = ocr.recognize_bytes(&image).await?;
    info!(text_len = raw_text.len(), "recognition complete");

    // Settings resolution happens exactly once per pipeline run
    let mut store = Store::open(config.db_path()?)?;
    let settings = store.settings()?.unwrap_or_default();

    println!("{}", formatter.status("Extracting record..."));
    let extractor = Extractor::from_settings(settings);
    let extraction = extractor.extract(&raw_text).await;

    if args.json {
        println!("{}", formatter.format_extraction_json(&extraction)?);
    } else {
        println!("{}", formatter.format_extraction(&extraction));
    }

    if args.save {
        let now = Local::now();
        let entry = HistoryEntry::from_record(
            &extraction.record,
            raw_text,
            now.timestamp_millis(),
            now.to_rfc3339(),
        );
        store.append_history(entry)?;
        println!("{}", formatter.status("Saved to history."));
    }

    Ok(())
}
