//! Key lookup and placeholder interpolation.
//!
//! A [`Translator`] is a cheap per-language handle over the immutable
//! translation table. Keys use `namespace:dotted.key` syntax; a key without
//! a colon is looked up in the `common` namespace. Resolution is a hard
//! three-tier contract: requested language, then default language, then the
//! raw key string. Callers always get a value back.

use crate::i18n::metrics::LookupMetrics;
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::table::{TranslationTable, DEFAULT_NAMESPACE};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// The result of a translation lookup.
///
/// Most keys resolve to a string leaf; asking for an intermediate key yields
/// the whole subtree, returned as-is without interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum Translated<'a> {
    /// A string leaf, with `{{param}}` placeholders substituted.
    Text(String),

    /// A nested subtree (the caller asked for a non-leaf key).
    Tree(&'a Value),
}

impl Translated<'_> {
    /// The text form, if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translated::Text(text) => Some(text),
            Translated::Tree(_) => None,
        }
    }

    /// Whether this is a string value.
    pub fn is_text(&self) -> bool {
        matches!(self, Translated::Text(_))
    }
}

impl fmt::Display for Translated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translated::Text(text) => f.write_str(text),
            Translated::Tree(value) => write!(f, "{value}"),
        }
    }
}

/// Per-language translation function over the shared table.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    registry: &'a LanguageRegistry,
    lang: String,
}

impl<'a> Translator<'a> {
    /// Create a translator bound to a language code.
    ///
    /// The code is used as-is; an unconfigured code simply resolves
    /// everything through the default-language tier.
    pub fn new(table: &'a TranslationTable, registry: &'a LanguageRegistry, lang: &str) -> Self {
        Self {
            table,
            registry,
            lang: lang.to_string(),
        }
    }

    /// The language this translator resolves for.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Resolve a key without parameters.
    pub fn translate(&self, key: &str) -> Translated<'a> {
        self.translate_with(key, &[])
    }

    /// Resolve a key, substituting `{{name}}` placeholders from `params`.
    ///
    /// A malformed key (colon present but either side empty) is returned
    /// unchanged. Unmatched placeholders are left verbatim; params without
    /// a matching placeholder are ignored.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> Translated<'a> {
        let (namespace, translation_key) = match key.split_once(':') {
            None => (DEFAULT_NAMESPACE, key),
            Some((namespace, rest)) if !namespace.is_empty() && !rest.is_empty() => {
                (namespace, rest)
            }
            Some(_) => return Translated::Text(key.to_string()),
        };

        let metrics = LookupMetrics::global();

        if let Some(value) = self.table.lookup(&self.lang, namespace, translation_key) {
            metrics.record_direct_hit();
            return Self::finish(value, params);
        }

        let default_code = &self.registry.default_lang().code;
        if let Some(value) = self.table.lookup(default_code, namespace, translation_key) {
            metrics.record_default_fallback();
            debug!(lang = %self.lang, key = %key, "translation fell back to default language");
            return Self::finish(value, params);
        }

        metrics.record_raw_key_fallback();
        warn!(lang = %self.lang, key = %key, "no translation found, returning raw key");
        Translated::Text(key.to_string())
    }

    fn finish<'v>(value: &'v Value, params: &[(&str, &str)]) -> Translated<'v> {
        match value {
            Value::String(text) => Translated::Text(interpolate(text, params)),
            other => Translated::Tree(other),
        }
    }
}

/// Replace every `{{name}}` occurrence with the matching parameter value.
fn interpolate(text: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(text.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{name}}}}}"), value)
    })
}
