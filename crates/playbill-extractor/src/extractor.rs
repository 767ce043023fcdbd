//! Extraction orchestration

use crate::pattern::extract_by_pattern;
use playbill_domain::traits::CompletionProvider;
use playbill_domain::{Extraction, ExtractionSettings, ExtractionSource};
use playbill_llm::CompletionClient;
use tracing::{info, warn};

/// Chooses and runs an extraction strategy.
///
/// Two-state policy: attempt the model path when the settings qualify, then
/// fall through to the regex pass, which always succeeds. For fixed input
/// and settings the chosen path is fully determined - there is no hidden
/// randomness in strategy selection.
///
/// Settings are resolved once at pipeline entry (stored settings, or the
/// built-in default pointing at the local endpoint) and handed in here; the
/// extractor never re-derives them.
pub struct Extractor<P> {
    provider: P,
    settings: ExtractionSettings,
}

impl Extractor<CompletionClient> {
    /// Wire up the production provider from resolved settings
    pub fn from_settings(settings: ExtractionSettings) -> Self {
        let provider = CompletionClient::new(settings.clone());
        Self::new(provider, settings)
    }
}

impl<P> Extractor<P>
where
    P: CompletionProvider,
    P::Error: std::fmt::Display,
{
    /// Create an extractor over an explicit provider
    pub fn new(provider: P, settings: ExtractionSettings) -> Self {
        Self { provider, settings }
    }

    /// Extract a structured record from `text`. Never fails.
    ///
    /// The model path is attempted when the provider is self-hosted or a
    /// usable API key is present; a hosted provider without a credential is
    /// not attempted at all, since that network call is guaranteed to fail.
    /// Any model failure is logged and recovered with the regex pass on the
    /// same input.
    pub async fn extract(&self, text: &str) -> Extraction {
        if self.settings.is_custom() || self.settings.has_usable_key() {
            info!(model = %self.settings.model, "attempting model extraction");
            match self.provider.complete(text).await {
                Ok(record) => {
                    info!("model extraction succeeded");
                    return Extraction {
                        record,
                        source: ExtractionSource::Model,
                    };
                }
                Err(e) => {
                    warn!(error = %e, "model extraction failed, falling back to regex");
                }
            }
        } else {
            info!(provider = %self.settings.provider, "model path not configured, skipping to regex");
        }

        Extraction {
            record: extract_by_pattern(text),
            source: ExtractionSource::Regex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_domain::EventRecord;
    use playbill_llm::MockProvider;

    fn hosted_settings(api_key: Option<&str>) -> ExtractionSettings {
        ExtractionSettings {
            provider: "openai".to_string(),
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn model_success_is_tagged_model() {
        let record = EventRecord {
            venue: "Geyik Pub".to_string(),
            city: "Fethiye".to_string(),
            ..Default::default()
        };
        let provider = MockProvider::new(record.clone());
        let extractor = Extractor::new(provider, ExtractionSettings::default());

        let extraction = extractor.extract("some poster text").await;
        assert_eq!(extraction.source, ExtractionSource::Model);
        assert_eq!(extraction.record, record);
    }

    #[tokio::test]
    async fn default_settings_always_attempt_the_model() {
        // Absent stored settings resolve to the default custom provider, so
        // the model path must be attempted, never skipped.
        let provider = MockProvider::new(EventRecord::default());
        let extractor = Extractor::new(provider.clone(), ExtractionSettings::default());

        extractor.extract("text").await;
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn model_failure_falls_back_to_regex_on_same_input() {
        let provider = MockProvider::failing();
        let extractor = Extractor::new(provider.clone(), ExtractionSettings::default());

        let extraction = extractor
            .extract("... KGEYIK Fethiye 31 Ocak 22:00 ...")
            .await;

        assert_eq!(provider.call_count(), 1);
        assert_eq!(extraction.source, ExtractionSource::Regex);
        assert_eq!(extraction.record.date, "31 Ocak");
        assert_eq!(extraction.record.time, "22:00");
        assert_eq!(extraction.record.venue, "");
        assert_eq!(extraction.record.city, "");
    }

    #[tokio::test]
    async fn hosted_provider_without_key_skips_the_network_entirely() {
        let provider = MockProvider::new(EventRecord::default());
        let extractor = Extractor::new(provider.clone(), hosted_settings(Some("")));

        let extraction = extractor.extract("31 Ocak 22:00").await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(extraction.source, ExtractionSource::Regex);
        assert_eq!(extraction.record.date, "31 Ocak");
    }

    #[tokio::test]
    async fn hosted_provider_with_missing_key_skips_too() {
        let provider = MockProvider::new(EventRecord::default());
        let extractor = Extractor::new(provider.clone(), hosted_settings(None));

        let extraction = extractor.extract("text").await;
        assert_eq!(provider.call_count(), 0);
        assert_eq!(extraction.source, ExtractionSource::Regex);
    }

    #[tokio::test]
    async fn hosted_provider_with_usable_key_is_attempted() {
        let provider = MockProvider::new(EventRecord::default());
        let extractor = Extractor::new(provider.clone(), hosted_settings(Some("sk-0123456789")));

        let extraction = extractor.extract("text").await;
        assert_eq!(provider.call_count(), 1);
        assert_eq!(extraction.source, ExtractionSource::Model);
    }

    #[tokio::test]
    async fn strategy_choice_is_deterministic() {
        let provider = MockProvider::failing();
        let extractor = Extractor::new(provider, ExtractionSettings::default());

        let first = extractor.extract("31 Ocak 22:00").await;
        let second = extractor.extract("31 Ocak 22:00").await;
        assert_eq!(first, second);
    }
}
