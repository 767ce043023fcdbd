//! Event record module - the structured output of one extraction

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A structured event record extracted from poster text.
///
/// Field names on the wire are the Turkish keys the completion model is
/// instructed to emit (`mekan`, `konum`, ...). The model is told to null out
/// fields it is not sure about; deserialization maps both `null` and absent
/// keys to the empty string, so a consumer never sees a null field.
///
/// Records are immutable once produced by an extraction strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Venue business name, without the locality ("Geyik Pub")
    #[serde(rename = "mekan", default, deserialize_with = "null_as_empty")]
    pub venue: String,

    /// City or district ("Fethiye")
    #[serde(rename = "konum", default, deserialize_with = "null_as_empty")]
    pub city: String,

    /// Event date as written on the poster ("31 Ocak", "31.01.2025")
    #[serde(rename = "tarih", default, deserialize_with = "null_as_empty")]
    pub date: String,

    /// Event time ("22:00")
    #[serde(rename = "saat", default, deserialize_with = "null_as_empty")]
    pub time: String,

    /// Event type ("Konser", "Stand-up")
    #[serde(rename = "etkinlik", default, deserialize_with = "null_as_empty")]
    pub event_type: String,

    /// Performing artist name
    #[serde(rename = "sanatci", default, deserialize_with = "null_as_empty")]
    pub artist: String,
}

impl EventRecord {
    /// True when no field was recovered at all
    pub fn is_empty(&self) -> bool {
        self.venue.is_empty()
            && self.city.is_empty()
            && self.date.is_empty()
            && self.time.is_empty()
            && self.event_type.is_empty()
            && self.artist.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which strategy produced an extraction result.
///
/// Set exactly once per extraction and never retroactively corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    /// The remote completion model produced the record
    Model,
    /// The deterministic regex fallback produced the record
    Regex,
}

impl fmt::Display for ExtractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionSource::Model => write!(f, "model"),
            ExtractionSource::Regex => write!(f, "regex"),
        }
    }
}

/// An event record together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The extracted record
    pub record: EventRecord,

    /// Which strategy produced it
    pub source: ExtractionSource,
}
