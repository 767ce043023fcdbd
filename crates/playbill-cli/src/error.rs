//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Recognition failures are fatal to a scan - there is no fallback for
/// failed OCR - and storage failures surface uncaught rather than masking
/// data loss. Completion failures never appear here: the extractor recovers
/// them internally.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Text recognition failed
    #[error(transparent)]
    Ocr(#[from] playbill_ocr::OcrError),

    /// Storage failed
    #[error(transparent)]
    Store(#[from] playbill_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
