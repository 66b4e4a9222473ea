use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display text that is either a plain string or keyed by locale code.
///
/// The admin forms stored both shapes side by side over the years, so both
/// deserialize transparently and callers resolve through one function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Map(BTreeMap<String, String>),
}

impl LocalizedText {
    pub fn plain(value: impl Into<String>) -> Self {
        LocalizedText::Plain(value.into())
    }

    /// Resolve for one locale, falling back to the first variant in key order.
    pub fn resolve(&self, locale: &str) -> &str {
        match self {
            LocalizedText::Plain(value) => value,
            LocalizedText::Map(map) => map
                .get(locale)
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Every textual variant: the one string for plain, all locale values for maps.
    pub fn variants(&self) -> Vec<&str> {
        match self {
            LocalizedText::Plain(value) => vec![value.as_str()],
            LocalizedText::Map(map) => map.values().map(String::as_str).collect(),
        }
    }

    pub fn any_variant(&self, mut pred: impl FnMut(&str) -> bool) -> bool {
        match self {
            LocalizedText::Plain(value) => pred(value),
            LocalizedText::Map(map) => map.values().any(|value| pred(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> LocalizedText {
        LocalizedText::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn plain_resolves_for_any_locale() {
        let text = LocalizedText::plain("Sneakers");
        assert_eq!(text.resolve("en"), "Sneakers");
        assert_eq!(text.resolve("az"), "Sneakers");
    }

    #[test]
    fn map_resolves_requested_locale_then_falls_back() {
        let text = map(&[("az", "İdman ayaqqabısı"), ("en", "Sneakers")]);
        assert_eq!(text.resolve("en"), "Sneakers");
        // BTreeMap key order makes the fallback deterministic.
        assert_eq!(text.resolve("ru"), "İdman ayaqqabısı");
    }

    #[test]
    fn any_variant_checks_every_locale() {
        let text = map(&[("az", "Səndəl"), ("en", "Sandals")]);
        assert!(text.any_variant(|v| v.to_lowercase().contains("sandal")));
        assert!(!text.any_variant(|v| v.contains("boot")));
    }
}
