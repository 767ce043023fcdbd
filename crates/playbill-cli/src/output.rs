//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use playbill_domain::{Extraction, ExtractionSource, HistoryEntry};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format an extraction result as a field table plus its source tag.
    pub fn format_extraction(&self, extraction: &Extraction) -> String {
        let record = &extraction.record;
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Venue", display_value(&record.venue)]);
        builder.push_record(["City", display_value(&record.city)]);
        builder.push_record(["Date", display_value(&record.date)]);
        builder.push_record(["Time", display_value(&record.time)]);
        builder.push_record(["Event type", display_value(&record.event_type)]);
        builder.push_record(["Artist", display_value(&record.artist)]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let source = match extraction.source {
            ExtractionSource::Model => self.colorize("extracted by: model", "green"),
            ExtractionSource::Regex => self.colorize("extracted by: regex fallback", "yellow"),
        };

        format!("{}\n{}", table, source)
    }

    /// Format an extraction result as JSON.
    pub fn format_extraction_json(&self, extraction: &Extraction) -> Result<String> {
        Ok(serde_json::to_string_pretty(extraction)?)
    }

    /// Format the history log as a table, newest first.
    pub fn format_history(&self, entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No saved records.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Saved", "Date", "Time", "Venue", "City"]);
        for entry in entries {
            builder.push_record([
                entry.timestamp.as_str(),
                display_value(&entry.date),
                display_value(&entry.time),
                display_value(&entry.location),
                display_value(&entry.city),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the history log as JSON.
    pub fn format_history_json(&self, entries: &[HistoryEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    /// Format a status line.
    pub fn status(&self, message: &str) -> String {
        self.colorize(message, "cyan")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.normal().to_string(),
        }
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
