//! Tolerant JSON extraction from model output
//!
//! Model output is not guaranteed to be pure JSON: replies arrive wrapped in
//! markdown fences, preceded by "Here you go:" prose, or trailed by a
//! sign-off. Extraction runs in two stages - isolate the span from the first
//! `{` to the last `}`, then strip any code-fence markers left inside - and
//! only then attempts a strict parse. A reply that still fails to parse is a
//! hard error carrying a truncated prefix for diagnostics; this module never
//! fabricates a partially-guessed record.

use crate::CompletionError;
use playbill_domain::EventRecord;

const SNIPPET_CHARS: usize = 50;

/// Parse the assistant's reply into an [`EventRecord`].
///
/// # Errors
///
/// [`CompletionError::MalformedOutput`] when no parseable JSON object can be
/// recovered from the reply.
pub fn parse_completion(raw: &str) -> Result<EventRecord, CompletionError> {
    let candidate = isolate_object(raw);
    let cleaned = strip_fences(candidate);

    serde_json::from_str(cleaned.trim())
        .map_err(|_| CompletionError::MalformedOutput(snippet(raw)))
}

/// Take the span from the first `{` to the last `}`; prose around it is noise
fn isolate_object(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => raw,
    }
}

/// Drop markdown code-fence markers anywhere in the text
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Char-safe truncated prefix of the raw reply for diagnostics
fn snippet(raw: &str) -> String {
    let mut prefix: String = raw.chars().take(SNIPPET_CHARS).collect();
    if raw.chars().count() > SNIPPET_CHARS {
        prefix.push_str("...");
    }
    prefix
}
