// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed UI strings.
//!
//! The locale is fixed at startup (CLI flag, then config, then OS locale,
//! then the fallback), so only the resolved locale's bundle is loaded.
//! Instructional content is compiled-in data and not translated here.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

const FALLBACK_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let available = embedded_locales();
        let locale =
            resolve_locale(cli_lang, config, &available).unwrap_or_else(fallback_locale);
        let bundle = load_bundle(&locale)
            .or_else(|| load_bundle(&fallback_locale()))
            .expect("the fallback locale ships with the binary");
        Self { bundle, locale }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Looks up a message by key. Unknown keys return a visible marker so a
    /// missing translation shows up in the UI instead of an empty string.
    pub fn tr(&self, key: &str) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {}", key);
        };
        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            value.into_owned()
        } else {
            format!("MISSING: {}", key)
        }
    }
}

fn fallback_locale() -> LanguageIdentifier {
    FALLBACK_LOCALE
        .parse()
        .expect("the fallback locale literal is a valid language identifier")
}

/// Locales for which an FTL file is embedded in the binary.
fn embedded_locales() -> Vec<LanguageIdentifier> {
    Locales::iter()
        .filter_map(|file| {
            file.as_ref()
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse().ok())
        })
        .collect()
}

fn load_bundle(locale: &LanguageIdentifier) -> Option<FluentBundle<FluentResource>> {
    let file = Locales::get(&format!("{}.ftl", locale))?;
    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
    let resource =
        FluentResource::try_new(source).expect("embedded FTL files parse at build time");
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle
        .add_resource(resource)
        .expect("embedded FTL files have no duplicate messages");
    Some(bundle)
}

/// Picks the first requested language that is actually bundled, in priority
/// order: CLI flag, config file, OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.language.clone(), sys_locale::get_locale()]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn bundled() -> Vec<LanguageIdentifier> {
        embedded_locales()
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("ko".to_string()), &config, &bundled());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            language: Some("ko".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &bundled());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_languages_that_are_not_bundled() {
        let config = Config {
            language: Some("ko".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("fr".to_string()), &config, &bundled());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn bundled_locales_include_english() {
        assert!(bundled().iter().any(|l| l.to_string() == "en-US"));
    }

    #[test]
    fn tr_returns_marker_for_unknown_key() {
        let i18n = I18n::default();
        assert!(i18n.tr("definitely-not-a-key").starts_with("MISSING:"));
    }

    #[test]
    fn tr_resolves_known_keys() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        assert!(!i18n.tr("window-title").starts_with("MISSING:"));
        assert!(!i18n.tr("mode-insertion").starts_with("MISSING:"));
    }
}
