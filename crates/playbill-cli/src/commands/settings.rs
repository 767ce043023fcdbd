//! The settings command.

use crate::cli::{SetArgs, SettingsAction, SettingsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use playbill_domain::ExtractionSettings;
use playbill_store::Store;

/// Show or update the persisted extraction settings.
pub fn execute_settings(args: SettingsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut store = Store::open(config.db_path()?)?;

    match args.action {
        SettingsAction::Show => {
            let saved = store.settings()?;
            let effective = saved.clone().unwrap_or_default();
            if saved.is_none() {
                println!("{}", formatter.status("No settings saved; showing defaults."));
            }
            print_settings(&effective);
        }
        SettingsAction::Set(set) => {
            let updated = apply_updates(store.settings()?.unwrap_or_default(), set);
            store.save_settings(&updated)?;
            println!("{}", formatter.status("Settings saved."));
            print_settings(&updated);
        }
    }

    Ok(())
}

/// Merge command-line updates onto the current settings; omitted fields
/// keep their value.
fn apply_updates(mut settings: ExtractionSettings, set: SetArgs) -> ExtractionSettings {
    if let Some(provider) = set.provider {
        settings.provider = provider;
    }
    if let Some(api_url) = set.api_url {
        settings.api_url = api_url;
    }
    if let Some(model) = set.model {
        settings.model = model;
    }
    if let Some(api_key) = set.api_key {
        settings.api_key = if api_key.is_empty() { None } else { Some(api_key) };
    }
    settings
}

fn print_settings(settings: &ExtractionSettings) {
    println!("provider: {}", settings.provider);
    println!("api_url:  {}", settings.api_url);
    println!("model:    {}", settings.model);
    // Never echo the key itself
    let key = match &settings.api_key {
        Some(k) if !k.is_empty() => "set",
        _ => "not set",
    };
    println!("api_key:  {}", key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> SetArgs {
        SetArgs {
            provider: None,
            api_url: None,
            model: None,
            api_key: None,
        }
    }

    #[test]
    fn omitted_fields_keep_their_value() {
        let current = ExtractionSettings::default();
        let updated = apply_updates(current.clone(), set_args());
        assert_eq!(updated, current);
    }

    #[test]
    fn given_fields_replace_their_value() {
        let updated = apply_updates(
            ExtractionSettings::default(),
            SetArgs {
                provider: Some("openai".to_string()),
                model: Some("gpt-4o-mini".to_string()),
                ..set_args()
            },
        );
        assert_eq!(updated.provider, "openai");
        assert_eq!(updated.model, "gpt-4o-mini");
        // Untouched fields survive
        assert_eq!(updated.api_url, ExtractionSettings::default().api_url);
    }

    #[test]
    fn empty_key_clears_the_credential() {
        let updated = apply_updates(
            ExtractionSettings::default(),
            SetArgs {
                api_key: Some(String::new()),
                ..set_args()
            },
        );
        assert_eq!(updated.api_key, None);
    }
}
