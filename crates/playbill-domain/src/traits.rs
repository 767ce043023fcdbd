//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::history::HistoryEntry;
use crate::record::EventRecord;
use crate::settings::ExtractionSettings;
use std::future::Future;

/// Trait for the model extraction path
///
/// Implemented by the infrastructure layer (playbill-llm)
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Extract a structured record from raw text via the completion model
    fn complete(&self, text: &str) -> impl Future<Output = Result<EventRecord, Self::Error>>;
}

/// Trait for the persisted history log and settings
///
/// Implemented by the infrastructure layer (playbill-store)
pub trait HistoryStore {
    /// Error type for store operations
    type Error;

    /// Insert an entry at the front of the log, evicting past capacity
    fn append(&mut self, entry: HistoryEntry) -> Result<(), Self::Error>;

    /// Full current log, newest first
    fn history(&self) -> Result<Vec<HistoryEntry>, Self::Error>;

    /// Saved extraction settings, `None` when never saved
    fn settings(&self) -> Result<Option<ExtractionSettings>, Self::Error>;

    /// Persist extraction settings
    fn save_settings(&mut self, settings: &ExtractionSettings) -> Result<(), Self::Error>;
}
