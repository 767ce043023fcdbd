//! Completion endpoint client
//!
//! One OpenAI-chat-style request per extraction, with a hard cancellable
//! deadline. This is the only operation in the pipeline that may suspend for
//! a bounded duration: when the deadline expires the in-flight request is
//! aborted at the transport, not merely abandoned.

use crate::parse::parse_completion;
use crate::prompt::{system_prompt, USER_TURN};
use crate::CompletionError;
use playbill_domain::traits::CompletionProvider;
use playbill_domain::{EventRecord, ExtractionSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Hard deadline for one completion request, in seconds.
///
/// Local model servers can stall for minutes while a model loads; past this
/// bound the request is aborted and the pipeline falls back to regex.
pub const COMPLETION_TIMEOUT_SECS: u64 = 120;

// Low temperature keeps the six-field answer from varying between runs.
const TEMPERATURE: f64 = 0.1;
const MAX_TOKENS: u32 = 500;
const TOP_P: f64 = 0.9;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Owns prompt construction, the request contract, the deadline, and the
/// tolerant parsing of the reply. Settings are taken once at construction
/// and never mutated.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    settings: ExtractionSettings,
    timeout: Duration,
    client: reqwest::Client,
}

impl CompletionClient {
    /// Create a client with the default 120-second deadline
    pub fn new(settings: ExtractionSettings) -> Self {
        Self::with_timeout(settings, Duration::from_secs(COMPLETION_TIMEOUT_SECS))
    }

    /// Create a client with an explicit deadline
    pub fn with_timeout(settings: ExtractionSettings, timeout: Duration) -> Self {
        Self {
            settings,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Extract a structured record from `text` via the completion model.
    ///
    /// # Errors
    ///
    /// - [`CompletionError::Unreachable`] when the endpoint cannot be reached
    /// - [`CompletionError::ModelNotFound`] on HTTP 404, naming the
    ///   configured model
    /// - [`CompletionError::Http`] on any other non-2xx status
    /// - [`CompletionError::Timeout`] when the deadline expires; the
    ///   underlying request is aborted
    /// - [`CompletionError::MalformedOutput`] when the reply contains no
    ///   parseable JSON record
    pub async fn complete(&self, text: &str) -> Result<EventRecord, CompletionError> {
        let system = system_prompt(text);
        let payload = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: USER_TURN,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
        };

        debug!(
            url = %self.settings.api_url,
            model = %self.settings.model,
            text_len = text.len(),
            "sending completion request"
        );

        let mut request = self
            .client
            .post(&self.settings.api_url)
            .timeout(self.timeout)
            .json(&payload);

        if let Some(key) = &self.settings.api_key {
            if !key.is_empty() {
                request = request.bearer_auth(key);
            }
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(self.timeout.as_secs())
            } else {
                CompletionError::Unreachable(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CompletionError::ModelNotFound(self.settings.model.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            CompletionError::MalformedOutput(format!("unreadable response body: {}", e))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedOutput("response has no choices".to_string())
            })?;

        debug!(reply_len = content.len(), "completion reply received");

        parse_completion(&content)
    }
}

impl CompletionProvider for CompletionClient {
    type Error = CompletionError;

    async fn complete(&self, text: &str) -> Result<EventRecord, CompletionError> {
        CompletionClient::complete(self, text).await
    }
}
