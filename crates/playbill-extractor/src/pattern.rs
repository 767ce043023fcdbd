//! Regex fallback extraction
//!
//! The terminal fallback strategy: a pure pass over the text that recovers
//! only the date and time. Venue, city, artist and event type are left
//! empty - free-text recovery of those from OCR noise is too unreliable for
//! a pattern-only approach, so they stay blank rather than wrong.

use once_cell::sync::Lazy;
use playbill_domain::EventRecord;
use regex::Regex;

// Numeric date first, day-plus-month-name second; alternation is
// leftmost-first, so the numeric form wins when both could match a span.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}\s*[./-]\s*\d{1,2}\s*[./-]\s*\d{2,4})|(\d{1,2}\s*(?:Ocak|Şubat|Mart|Nisan|Mayıs|Haziran|Temmuz|Ağustos|Eylül|Ekim|Kasım|Aralık))",
    )
    .expect("date pattern compiles")
});

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}\s*[:.]\s*\d{2}").expect("time pattern compiles"));

/// Extract what a fixed pattern pass can recover from `text`.
///
/// Total function: never fails, including on the empty string. Unmatched
/// fields come back as empty strings.
pub fn extract_by_pattern(text: &str) -> EventRecord {
    let date = DATE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let time = TIME_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    EventRecord {
        date,
        time,
        ..Default::default()
    }
}
