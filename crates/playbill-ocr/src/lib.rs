//! Playbill OCR Client
//!
//! HTTP client for the co-located text recognizer backend. The backend takes
//! a base64-encoded image and returns the recognized text in one shot:
//!
//! ```text
//! POST {base_url}/ocr   body {"image": "<base64>"}   ->   {"text": "..."}
//! ```
//!
//! An empty recognition result is a failure, not a valid empty string - a
//! successful scan of a real capture always contains some text. There is no
//! fallback for failed recognition; callers surface [`OcrError`] verbatim.

#![warn(missing_docs)]

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during text recognition
#[derive(Error, Debug)]
pub enum OcrError {
    /// No image data was supplied
    #[error("no image data to recognize")]
    EmptyImage,

    /// The recognizer backend could not be reached.
    ///
    /// The backend is expected to run next to this process, so a connection
    /// failure almost always means it was never started.
    #[error("recognizer backend unreachable ({0}); is the OCR service running?")]
    Unreachable(String),

    /// The backend answered with a non-2xx status
    #[error("recognizer error (HTTP {status}: {})", .message.as_deref().unwrap_or("no detail"))]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-supplied error message, when one was parseable
        message: Option<String>,
    },

    /// The backend answered 2xx but produced no usable text
    #[error("recognizer returned no text")]
    EmptyText,
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct RecognizeErrorBody {
    error: Option<String>,
}

/// Client for the recognizer backend.
///
/// One POST per recognition; no internal deadline beyond the transport's
/// own limits.
#[derive(Debug, Clone)]
pub struct OcrClient {
    base_url: String,
    client: reqwest::Client,
}

impl OcrClient {
    /// Create a client for the backend at `base_url`
    /// (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Recognize text in a base64-encoded image.
    ///
    /// The backend also accepts full data URLs, so both
    /// `data:image/jpeg;base64,...` and bare base64 work here.
    ///
    /// # Errors
    ///
    /// - [`OcrError::EmptyImage`] before any network I/O when `image_base64`
    ///   is empty
    /// - [`OcrError::Unreachable`] when the backend is not running
    /// - [`OcrError::Http`] for any non-2xx status, carrying the server's
    ///   `error` field when present
    /// - [`OcrError::EmptyText`] when a 2xx payload has no usable text
    pub async fn recognize(&self, image_base64: &str) -> Result<String, OcrError> {
        if image_base64.is_empty() {
            return Err(OcrError::EmptyImage);
        }

        let url = format!("{}/ocr", self.base_url);
        debug!(url = %url, image_len = image_base64.len(), "sending recognition request");

        let response = self
            .client
            .post(&url)
            .json(&RecognizeRequest {
                image: image_base64,
            })
            .send()
            .await
            .map_err(|e| OcrError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RecognizeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(OcrError::Http {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<RecognizeResponse>().await {
            Ok(RecognizeResponse { text: Some(text) }) if !text.is_empty() => {
                debug!(text_len = text.len(), "recognition succeeded");
                Ok(text)
            }
            _ => Err(OcrError::EmptyText),
        }
    }

    /// Base64-encode raw image bytes and recognize them
    pub async fn recognize_bytes(&self, image: &[u8]) -> Result<String, OcrError> {
        if image.is_empty() {
            return Err(OcrError::EmptyImage);
        }
        let encoded = BASE64_STANDARD.encode(image);
        self.recognize(&encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_strips_trailing_slash() {
        let client = OcrClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn empty_image_fails_before_any_network_call() {
        // Unroutable base URL: reaching the network would error differently
        let client = OcrClient::new("http://127.0.0.1:1");

        let result = client.recognize("").await;
        assert!(matches!(result, Err(OcrError::EmptyImage)));

        let result = client.recognize_bytes(&[]).await;
        assert!(matches!(result, Err(OcrError::EmptyImage)));
    }

    #[tokio::test]
    async fn connection_failure_maps_to_unreachable() {
        let client = OcrClient::new("http://127.0.0.1:1");

        let result = client.recognize("aGVsbG8=").await;
        match result {
            Err(OcrError::Unreachable(_)) => {}
            other => panic!("expected Unreachable, got {:?}", other),
        }
    }

    #[test]
    fn http_error_display_includes_server_message() {
        let err = OcrError::Http {
            status: 500,
            message: Some("No image provided".to_string()),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("No image provided"));

        let bare = OcrError::Http {
            status: 502,
            message: None,
        };
        assert!(bare.to_string().contains("502"));
        assert!(bare.to_string().contains("no detail"));
    }
}
