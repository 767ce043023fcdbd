//! History module - the bounded log of saved records

use crate::record::EventRecord;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the history log.
///
/// Appends past this bound evict the oldest entry.
pub const HISTORY_CAPACITY: usize = 50;

/// One saved extraction, as the user accepted it.
///
/// The `id` is the creation timestamp in milliseconds, which doubles as a
/// stable ordering key; `timestamp` is the same instant as an ISO-8601
/// string for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation timestamp in milliseconds since the Unix epoch
    pub id: i64,

    /// Event date as extracted
    pub date: String,

    /// Event time as extracted
    pub time: String,

    /// Venue name as extracted
    pub location: String,

    /// City or district as extracted
    pub city: String,

    /// The raw OCR text the record was extracted from
    #[serde(rename = "rawText")]
    pub raw_text: String,

    /// Creation instant, ISO-8601
    pub timestamp: String,
}

impl HistoryEntry {
    /// Build an entry from an accepted record.
    ///
    /// `id_millis` and `timestamp` describe the same creation instant; the
    /// caller owns the clock.
    pub fn from_record(
        record: &EventRecord,
        raw_text: impl Into<String>,
        id_millis: i64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id_millis,
            date: record.date.clone(),
            time: record.time.clone(),
            location: record.venue.clone(),
            city: record.city.clone(),
            raw_text: raw_text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_copies_display_fields() {
        let record = EventRecord {
            venue: "Geyik Pub".to_string(),
            city: "Fethiye".to_string(),
            date: "31 Ocak".to_string(),
            time: "22:00".to_string(),
            event_type: "Konser".to_string(),
            artist: "Kara Güneş".to_string(),
        };

        let entry = HistoryEntry::from_record(
            &record,
            "raw ocr text",
            1_738_360_800_000,
            "2025-01-31T22:00:00+03:00",
        );

        assert_eq!(entry.location, "Geyik Pub");
        assert_eq!(entry.city, "Fethiye");
        assert_eq!(entry.date, "31 Ocak");
        assert_eq!(entry.time, "22:00");
        assert_eq!(entry.raw_text, "raw ocr text");
        assert_eq!(entry.id, 1_738_360_800_000);
    }

    #[test]
    fn raw_text_uses_camel_case_on_the_wire() {
        let entry = HistoryEntry::from_record(
            &EventRecord::default(),
            "text",
            1,
            "2025-01-01T00:00:00Z",
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""rawText":"text""#));
    }
}
