//! Route name translation.
//!
//! English route segments are the canonical key space. Each language maps
//! English names to localized URL segments; the default language is assumed
//! identity and need not appear. `delocalize` approximates the inverse by
//! scanning every language's mapping in configuration order and taking the
//! first match. That is only well-defined when localized names are globally
//! unique; the startup validator rejects ambiguous configurations.

use crate::error::RoutingError;
use crate::i18n::metrics::LookupMetrics;
use serde_json::{Map, Value};

/// Route names for one language, in configuration order.
#[derive(Debug, Clone)]
pub struct LangRouteNames {
    /// Language code these names belong to
    pub lang: String,

    /// `(english, localized)` pairs, in configuration order
    pub entries: Vec<(String, String)>,
}

/// Per-language route name mappings, canonical-English keyed.
#[derive(Debug, Clone, Default)]
pub struct RouteNameMap {
    langs: Vec<LangRouteNames>,
}

impl RouteNameMap {
    /// Build a map from per-language name lists.
    pub fn new(langs: Vec<LangRouteNames>) -> Self {
        Self { langs }
    }

    /// An empty map: every route name translates to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map from the JSON route configuration:
    /// `{ "pt": { "about": "sobre", ... }, ... }`.
    ///
    /// Object order is preserved, which fixes the `delocalize` scan order.
    pub fn from_json_map(config: &Map<String, Value>) -> Result<Self, RoutingError> {
        let mut langs = Vec::new();
        for (lang, names) in config {
            let names = names
                .as_object()
                .ok_or_else(|| RoutingError::RouteConfigShape(lang.clone()))?;
            let mut entries = Vec::new();
            for (english, localized) in names {
                let localized = localized
                    .as_str()
                    .ok_or_else(|| RoutingError::RouteConfigShape(lang.clone()))?;
                entries.push((english.clone(), localized.to_string()));
            }
            langs.push(LangRouteNames {
                lang: lang.clone(),
                entries,
            });
        }
        Ok(Self { langs })
    }

    /// Translate an English route segment into a target language.
    ///
    /// A segment with no mapping is returned unchanged: every route name is
    /// trivially "translated" to itself.
    pub fn localize<'s>(&'s self, english: &'s str, lang: &str) -> &'s str {
        let mapped = self
            .langs
            .iter()
            .find(|names| names.lang == lang)
            .and_then(|names| names.entries.iter().find(|(en, _)| en == english));

        match mapped {
            Some((_, localized)) => localized.as_str(),
            None => {
                LookupMetrics::global().record_route_identity_fallback();
                english
            }
        }
    }

    /// Find the canonical English name for a localized segment.
    ///
    /// Scans every language's mapping in configuration order; the first
    /// match wins. A segment that appears in no mapping is returned
    /// unchanged.
    pub fn delocalize<'s>(&'s self, segment: &'s str) -> &'s str {
        for names in &self.langs {
            for (english, localized) in &names.entries {
                if localized == segment {
                    return english.as_str();
                }
            }
        }
        segment
    }

    /// Translate a route segment (in any language) into a target language,
    /// pivoting through the canonical English name.
    pub fn translate<'s>(&'s self, segment: &'s str, target_lang: &str) -> &'s str {
        self.localize(self.delocalize(segment), target_lang)
    }

    /// Iterate over the per-language name lists, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &LangRouteNames> {
        self.langs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map() -> RouteNameMap {
        RouteNameMap::new(vec![
            LangRouteNames {
                lang: "pt".to_string(),
                entries: vec![
                    ("about".to_string(), "sobre".to_string()),
                    ("blog".to_string(), "blogue".to_string()),
                    ("contact".to_string(), "contato".to_string()),
                ],
            },
            LangRouteNames {
                lang: "es".to_string(),
                entries: vec![
                    ("about".to_string(), "acerca".to_string()),
                    ("blog".to_string(), "blog".to_string()),
                ],
            },
        ])
    }

    // ==================== Localize Tests ====================

    #[test]
    fn test_localize_mapped_name() {
        assert_eq!(map().localize("about", "pt"), "sobre");
    }

    #[test]
    fn test_localize_unmapped_name_is_identity() {
        assert_eq!(map().localize("pagination", "pt"), "pagination");
    }

    #[test]
    fn test_localize_unknown_language_is_identity() {
        // The default language never appears in the map.
        assert_eq!(map().localize("about", "en"), "about");
    }

    // ==================== Delocalize Tests ====================

    #[test]
    fn test_delocalize_finds_english_name() {
        assert_eq!(map().delocalize("sobre"), "about");
        assert_eq!(map().delocalize("acerca"), "about");
    }

    #[test]
    fn test_delocalize_unmapped_segment_is_identity() {
        assert_eq!(map().delocalize("pagination"), "pagination");
    }

    #[test]
    fn test_delocalize_first_match_wins() {
        // "blog" is the localized form of two different English names; the
        // earlier language in configuration order decides.
        let map = RouteNameMap::new(vec![
            LangRouteNames {
                lang: "pt".to_string(),
                entries: vec![("archive".to_string(), "blog".to_string())],
            },
            LangRouteNames {
                lang: "es".to_string(),
                entries: vec![("blog".to_string(), "blog".to_string())],
            },
        ]);
        assert_eq!(map.delocalize("blog"), "archive");
    }

    // ==================== Composite Tests ====================

    #[test]
    fn test_translate_between_non_english_languages() {
        assert_eq!(map().translate("sobre", "es"), "acerca");
        assert_eq!(map().translate("acerca", "pt"), "sobre");
    }

    #[test]
    fn test_translate_to_default_is_delocalize() {
        assert_eq!(map().translate("sobre", "en"), "about");
    }

    #[test]
    fn test_localize_delocalize_idempotent_when_injective() {
        let map = map();
        for localized in ["sobre", "blogue", "contato"] {
            assert_eq!(map.localize(map.delocalize(localized), "pt"), localized);
        }
    }

    // ==================== Config Parsing Tests ====================

    #[test]
    fn test_from_json_map() {
        let config = json!({ "pt": { "about": "sobre" } });
        let map = RouteNameMap::from_json_map(config.as_object().unwrap()).unwrap();
        assert_eq!(map.localize("about", "pt"), "sobre");
    }

    #[test]
    fn test_from_json_map_rejects_non_object_language() {
        let config = json!({ "pt": ["about"] });
        let result = RouteNameMap::from_json_map(config.as_object().unwrap());
        assert!(matches!(result, Err(RoutingError::RouteConfigShape(_))));
    }

    #[test]
    fn test_from_json_map_rejects_non_string_name() {
        let config = json!({ "pt": { "about": 7 } });
        let result = RouteNameMap::from_json_map(config.as_object().unwrap());
        assert!(matches!(result, Err(RoutingError::RouteConfigShape(_))));
    }

    #[test]
    fn test_empty_map_is_all_identity() {
        let map = RouteNameMap::empty();
        assert_eq!(map.localize("about", "pt"), "about");
        assert_eq!(map.delocalize("sobre"), "sobre");
        assert_eq!(map.translate("about", "pt"), "about");
    }
}
