//! Language registry: the configured language set and URL-prefix rules.
//!
//! The registry is built once at startup from site configuration and passed
//! by shared reference to every resolver. It is read-only after construction,
//! so concurrent readers need no locking.

use crate::error::RoutingError;
use serde::Deserialize;
use std::collections::HashSet;

fn default_true() -> bool {
    true
}

/// Configuration for a supported language.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "pt")
    pub code: String,

    /// English name of the language (e.g., "English", "Portuguese")
    pub name: String,

    /// Native name of the language (e.g., "English", "Português")
    #[serde(default)]
    pub native_name: String,

    /// Whether this is the default language (exactly one must be true)
    #[serde(default)]
    pub is_default: bool,

    /// Whether this language is enabled for routing
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// The closed set of configured languages.
///
/// `show_default_lang` controls whether the default language's code appears
/// as a URL prefix (`/en/about` vs. `/about`).
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    show_default_lang: bool,
}

impl LanguageRegistry {
    /// Build a registry from a language set.
    ///
    /// # Errors
    /// Fails if the set is empty, contains duplicate codes, or does not
    /// designate exactly one default language.
    pub fn new(
        languages: Vec<LanguageConfig>,
        show_default_lang: bool,
    ) -> Result<Self, RoutingError> {
        if languages.is_empty() {
            return Err(RoutingError::NoLanguages);
        }

        let mut seen = HashSet::new();
        for lang in &languages {
            if !seen.insert(lang.code.as_str()) {
                return Err(RoutingError::DuplicateLanguage(lang.code.clone()));
            }
        }

        let defaults = languages.iter().filter(|lang| lang.is_default).count();
        if defaults != 1 {
            return Err(RoutingError::DefaultLanguageCount(defaults));
        }

        Ok(Self {
            languages,
            show_default_lang,
        })
    }

    /// Get a language configuration by its code.
    pub fn get(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a language code is configured and enabled.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).map(|lang| lang.enabled).unwrap_or(false)
    }

    /// Get the default language configuration.
    pub fn default_lang(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_default)
            .expect("registry always contains exactly one default language")
    }

    /// Whether the default language's code appears as a URL prefix.
    pub fn show_default_lang(&self) -> bool {
        self.show_default_lang
    }

    /// Get all enabled languages, in configuration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Iterate over every configured language (including disabled ones).
    pub fn iter(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter()
    }

    /// Extract the active language from a URL path.
    ///
    /// The first non-empty path segment is checked against the configured
    /// language codes. Unknown codes, the root path, and paths without a
    /// language prefix all resolve to the default language; this never fails.
    ///
    /// Example: `/pt/sobre` resolves to `pt`, `/about` to the default.
    pub fn resolve_from_path(&self, path: &str) -> &LanguageConfig {
        if let Some(first) = path.split('/').find(|segment| !segment.is_empty()) {
            if let Some(lang) = self.get(first) {
                if lang.enabled {
                    return lang;
                }
            }
        }
        self.default_lang()
    }

    /// The URL prefix for a language: empty for a hidden default, `/{code}`
    /// otherwise.
    pub fn url_prefix(&self, code: &str) -> String {
        if !self.show_default_lang && code == self.default_lang().code {
            String::new()
        } else {
            format!("/{code}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str, name: &str, is_default: bool) -> LanguageConfig {
        LanguageConfig {
            code: code.to_string(),
            name: name.to_string(),
            native_name: name.to_string(),
            is_default,
            enabled: true,
        }
    }

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(
            vec![lang("en", "English", true), lang("pt", "Portuguese", false)],
            false,
        )
        .unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_rejects_empty_set() {
        let result = LanguageRegistry::new(vec![], false);
        assert!(matches!(result, Err(RoutingError::NoLanguages)));
    }

    #[test]
    fn test_new_rejects_duplicate_codes() {
        let result = LanguageRegistry::new(
            vec![lang("en", "English", true), lang("en", "English", false)],
            false,
        );
        assert!(matches!(result, Err(RoutingError::DuplicateLanguage(_))));
    }

    #[test]
    fn test_new_rejects_zero_defaults() {
        let result = LanguageRegistry::new(vec![lang("en", "English", false)], false);
        assert!(matches!(result, Err(RoutingError::DefaultLanguageCount(0))));
    }

    #[test]
    fn test_new_rejects_two_defaults() {
        let result = LanguageRegistry::new(
            vec![lang("en", "English", true), lang("pt", "Portuguese", true)],
            false,
        );
        assert!(matches!(result, Err(RoutingError::DefaultLanguageCount(2))));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code() {
        let registry = registry();
        assert_eq!(registry.get("pt").unwrap().name, "Portuguese");
        assert!(registry.get("fr").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = registry();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("pt"));
        assert!(!registry.is_supported("fr"));
    }

    #[test]
    fn test_disabled_language_not_supported() {
        let mut disabled = lang("pt", "Portuguese", false);
        disabled.enabled = false;
        let registry =
            LanguageRegistry::new(vec![lang("en", "English", true), disabled], false).unwrap();
        assert!(!registry.is_supported("pt"));
        assert_eq!(registry.list_enabled().len(), 1);
    }

    #[test]
    fn test_default_lang() {
        assert_eq!(registry().default_lang().code, "en");
    }

    // ==================== Path Resolution Tests ====================

    #[test]
    fn test_resolve_from_path_with_prefix() {
        assert_eq!(registry().resolve_from_path("/pt/sobre").code, "pt");
    }

    #[test]
    fn test_resolve_from_path_without_prefix() {
        assert_eq!(registry().resolve_from_path("/about").code, "en");
    }

    #[test]
    fn test_resolve_from_root_path() {
        assert_eq!(registry().resolve_from_path("/").code, "en");
    }

    #[test]
    fn test_resolve_from_empty_path() {
        assert_eq!(registry().resolve_from_path("").code, "en");
    }

    #[test]
    fn test_resolve_unknown_code_falls_through() {
        assert_eq!(registry().resolve_from_path("/fr/about").code, "en");
    }

    #[test]
    fn test_resolve_ignores_repeated_slashes() {
        assert_eq!(registry().resolve_from_path("//pt/sobre").code, "pt");
    }

    // ==================== URL Prefix Tests ====================

    #[test]
    fn test_url_prefix_hidden_default() {
        let registry = registry();
        assert_eq!(registry.url_prefix("en"), "");
        assert_eq!(registry.url_prefix("pt"), "/pt");
    }

    #[test]
    fn test_url_prefix_shown_default() {
        let registry = LanguageRegistry::new(
            vec![lang("en", "English", true), lang("pt", "Portuguese", false)],
            true,
        )
        .unwrap();
        assert_eq!(registry.url_prefix("en"), "/en");
        assert_eq!(registry.url_prefix("pt"), "/pt");
    }

    // ==================== Property Tests ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolve_from_path_always_returns_configured_language(path in "[a-z/]{0,24}") {
                let registry = registry();
                let resolved = registry.resolve_from_path(&path);
                prop_assert!(registry.is_supported(&resolved.code));
            }
        }
    }
}
