//! Localized message catalogs.
//!
//! Catalogs are flat JSON objects mapping message ids to text, bundled into
//! the binary per locale. Lookups never fail: a missing id renders the
//! caller's default message.

use std::collections::HashMap;

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

pub const DEFAULT_LOCALE: &str = "en";

const BUNDLED: &[(&str, &str)] = &[("en", include_str!("../locales/en.json")), ("fr", include_str!("../locales/fr.json"))];

/// Message id for a service tile caption.
pub fn about_message_id(service: &str) -> String {
    format!("service.card.about.{service}")
}

/// Messages for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `raw` is not a JSON object of strings.
    pub fn from_json(locale: &str, raw: &str) -> Result<Self, serde_json::Error> {
        let messages = serde_json::from_str::<HashMap<String, String>>(raw)?;
        Ok(Self { locale: locale.to_owned(), messages })
    }

    /// Bundled catalog for `locale`.
    ///
    /// Region tags are ignored (`fr-CA` resolves to `fr`); unknown locales fall
    /// back to [`DEFAULT_LOCALE`].
    pub fn for_locale(locale: &str) -> Self {
        let wanted = normalize_locale(locale);
        let (code, raw) = BUNDLED
            .iter()
            .find(|(code, _)| *code == wanted)
            .or_else(|| BUNDLED.iter().find(|(code, _)| *code == DEFAULT_LOCALE))
            .copied()
            .unwrap_or((DEFAULT_LOCALE, "{}"));
        Self::from_json(code, raw).unwrap_or_else(|_| Self { locale: code.to_owned(), messages: HashMap::new() })
    }

    pub fn locale(&self) -> &str {
        if self.locale.is_empty() { DEFAULT_LOCALE } else { self.locale.as_str() }
    }

    /// Translated text for `id`, or `default` when the catalog lacks it.
    pub fn format_message(&self, id: &str, default: &str) -> String {
        self.messages
            .get(id)
            .map_or_else(|| default.to_owned(), Clone::clone)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }
}

/// Lower-cased primary language subtag of a locale string.
fn normalize_locale(raw: &str) -> String {
    raw.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Locale codes with a bundled catalog.
pub fn bundled_locales() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(code, _)| *code)
}
