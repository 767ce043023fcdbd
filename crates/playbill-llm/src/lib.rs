//! Playbill Completion Layer
//!
//! The model extraction path: builds a fixed instruction prompt around the
//! OCR text, sends one OpenAI-chat-style request to the configured endpoint,
//! and parses the model's free-form reply into an
//! [`EventRecord`](playbill_domain::EventRecord).
//!
//! # Architecture
//!
//! - [`prompt`]: pure prompt formatting, no transport concerns
//! - [`CompletionClient`]: the HTTP request, its 120-second cancellable
//!   deadline, and typed error mapping
//! - [`parse`]: tolerant JSON extraction from verbose or markdown-wrapped
//!   model output
//! - [`MockProvider`]: deterministic in-memory provider for testing the
//!   orchestration policy without a network
//!
//! # Examples
//!
//! ```
//! use playbill_llm::MockProvider;
//! use playbill_domain::EventRecord;
//!
//! let record = EventRecord { venue: "Geyik Pub".into(), ..Default::default() };
//! let provider = MockProvider::new(record);
//! assert_eq!(provider.call_count(), 0);
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod parse;
pub mod prompt;

use playbill_domain::traits::CompletionProvider;
use playbill_domain::EventRecord;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use client::{CompletionClient, COMPLETION_TIMEOUT_SECS};

/// Errors that can occur on the model extraction path.
///
/// Every variant is recoverable for the pipeline as a whole: the
/// orchestrator logs it and falls back to the regex extractor.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The completion endpoint could not be reached
    #[error("completion service unreachable ({0}); is the model server running?")]
    Unreachable(String),

    /// The endpoint answered with an unexpected non-2xx status
    #[error("completion service error (HTTP {status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// HTTP 404: the configured model is not available on the endpoint
    #[error("model '{0}' not found on the completion endpoint")]
    ModelNotFound(String),

    /// The request exceeded its deadline and was aborted
    #[error("completion timed out after {0}s")]
    Timeout(u64),

    /// The model's reply contained no parseable JSON record
    #[error("model output is not valid JSON: {0}")]
    MalformedOutput(String),
}

/// Deterministic completion provider for testing.
///
/// Returns a pre-configured record or failure without any network call, and
/// counts how often it was asked - which lets orchestration tests prove that
/// a skipped model path really made no attempt.
///
/// # Examples
///
/// ```
/// use playbill_llm::MockProvider;
/// use playbill_domain::EventRecord;
///
/// let provider = MockProvider::failing();
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    outcome: MockOutcome,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Record(EventRecord),
    Failure,
}

impl MockProvider {
    /// Create a provider that returns `record` for every input
    pub fn new(record: EventRecord) -> Self {
        Self {
            outcome: MockOutcome::Record(record),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that fails every call with
    /// [`CompletionError::Unreachable`]
    pub fn failing() -> Self {
        Self {
            outcome: MockOutcome::Failure,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl CompletionProvider for MockProvider {
    type Error = CompletionError;

    async fn complete(&self, _text: &str) -> Result<EventRecord, CompletionError> {
        *self.call_count.lock().unwrap() += 1;
        match &self.outcome {
            MockOutcome::Record(record) => Ok(record.clone()),
            MockOutcome::Failure => {
                Err(CompletionError::Unreachable("mock failure".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_provider_returns_fixed_record() {
        let record = EventRecord {
            venue: "Geyik Pub".to_string(),
            city: "Fethiye".to_string(),
            ..Default::default()
        };
        let provider = MockProvider::new(record.clone());

        let result = provider.complete("any text").await.unwrap();
        assert_eq!(result, record);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_provider_failure() {
        let provider = MockProvider::failing();

        let result = provider.complete("any text").await;
        assert!(matches!(result, Err(CompletionError::Unreachable(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_provider_clones_share_call_count() {
        let provider = MockProvider::new(EventRecord::default());
        let clone = provider.clone();

        provider.complete("text").await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(clone.call_count(), 1);
    }
}
