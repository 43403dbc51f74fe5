//! Translation table: per-language, per-namespace translation trees.
//!
//! The table holds one JSON tree per `(language, namespace)` pair, loaded
//! eagerly from locale files at process start and immutable thereafter.
//! Values are `serde_json::Value` trees; a dotted key walks object nodes
//! down to a leaf, and a failed step is an explicit `None`, never a panic.

use crate::error::RoutingError;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// The namespace assumed when a translation key carries none.
pub const DEFAULT_NAMESPACE: &str = "common";

/// Immutable nested mapping: language, then namespace, then translation tree.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    langs: HashMap<String, HashMap<String, Value>>,
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a locale directory.
    ///
    /// Layout mirrors the locale source files: one subdirectory per
    /// language, one `<namespace>.json` file per namespace. Non-directory
    /// entries at the top level and non-JSON files are skipped.
    ///
    /// # Errors
    /// Fails on unreadable files, invalid JSON, or a namespace file whose
    /// top level is not an object.
    pub fn load_from_dir(dir: &Path) -> Result<Self, RoutingError> {
        let mut table = Self::new();

        let lang_dirs = std::fs::read_dir(dir).map_err(|source| RoutingError::LocaleRead {
            path: dir.to_path_buf(),
            source,
        })?;

        for lang_entry in lang_dirs {
            let lang_entry = lang_entry.map_err(|source| RoutingError::LocaleRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let lang_path = lang_entry.path();
            if !lang_path.is_dir() {
                continue;
            }
            let lang = lang_entry.file_name().to_string_lossy().into_owned();

            let files = std::fs::read_dir(&lang_path).map_err(|source| RoutingError::LocaleRead {
                path: lang_path.clone(),
                source,
            })?;

            for file in files {
                let file = file.map_err(|source| RoutingError::LocaleRead {
                    path: lang_path.clone(),
                    source,
                })?;
                let path = file.path();
                if path.extension().map_or(true, |ext| ext != "json") {
                    continue;
                }
                let namespace = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let raw =
                    std::fs::read_to_string(&path).map_err(|source| RoutingError::LocaleRead {
                        path: path.clone(),
                        source,
                    })?;
                let values: Value =
                    serde_json::from_str(&raw).map_err(|source| RoutingError::LocaleParse {
                        path: path.clone(),
                        source,
                    })?;
                if !values.is_object() {
                    return Err(RoutingError::LocaleNotObject { lang, path });
                }

                debug!(lang = %lang, namespace = %namespace, "loaded locale namespace");
                table.insert_namespace(&lang, &namespace, values);
            }
        }

        Ok(table)
    }

    /// Insert a namespace tree for a language, replacing any existing one.
    pub fn insert_namespace(&mut self, lang: &str, namespace: &str, values: Value) {
        self.langs
            .entry(lang.to_string())
            .or_default()
            .insert(namespace.to_string(), values);
    }

    /// Whether a language has the given namespace.
    pub fn has_namespace(&self, lang: &str, namespace: &str) -> bool {
        self.langs
            .get(lang)
            .map_or(false, |namespaces| namespaces.contains_key(namespace))
    }

    /// Resolve a dotted key within a language's namespace.
    ///
    /// Each dot-separated part steps into an object node; the walk stops
    /// with `None` as soon as a part is missing or the current node is not
    /// an object. The returned value may be a string leaf or a subtree.
    pub fn lookup(&self, lang: &str, namespace: &str, dotted_key: &str) -> Option<&Value> {
        let mut node = self.langs.get(lang)?.get(namespace)?;
        for part in dotted_key.split('.') {
            node = node.as_object()?.get(part)?;
        }
        Some(node)
    }

    /// Iterate over a language's namespaces and their trees.
    pub fn namespaces(&self, lang: &str) -> impl Iterator<Item = (&String, &Value)> {
        self.langs
            .get(lang)
            .into_iter()
            .flat_map(|namespaces| namespaces.iter())
    }

    /// Language codes present in the table.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.langs.keys().map(|code| code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert_namespace(
            "en",
            "common",
            json!({
                "nav_home": "Home",
                "menu": { "list": { "home": "Home", "about": "About" } }
            }),
        );
        table.insert_namespace("pt", "common", json!({ "nav_home": "Início" }));
        table
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_flat_key() {
        let table = table();
        assert_eq!(
            table.lookup("en", "common", "nav_home"),
            Some(&json!("Home"))
        );
    }

    #[test]
    fn test_lookup_dotted_key() {
        let table = table();
        assert_eq!(
            table.lookup("en", "common", "menu.list.about"),
            Some(&json!("About"))
        );
    }

    #[test]
    fn test_lookup_returns_subtree() {
        let table = table();
        let subtree = table.lookup("en", "common", "menu.list").unwrap();
        assert!(subtree.is_object());
    }

    #[test]
    fn test_lookup_missing_key() {
        assert_eq!(table().lookup("en", "common", "missing"), None);
    }

    #[test]
    fn test_lookup_missing_namespace() {
        assert_eq!(table().lookup("en", "blog", "nav_home"), None);
    }

    #[test]
    fn test_lookup_missing_language() {
        assert_eq!(table().lookup("fr", "common", "nav_home"), None);
    }

    #[test]
    fn test_lookup_stops_at_string_leaf() {
        // Walking "into" a string leaf is a miss, not a panic.
        assert_eq!(table().lookup("en", "common", "nav_home.deeper"), None);
    }

    #[test]
    fn test_has_namespace() {
        let table = table();
        assert!(table.has_namespace("en", "common"));
        assert!(!table.has_namespace("en", "blog"));
        assert!(!table.has_namespace("fr", "common"));
    }

    // ==================== Loader Tests ====================

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        std::fs::create_dir(&en).unwrap();
        std::fs::write(en.join("common.json"), r#"{"nav_home": "Home"}"#).unwrap();
        std::fs::write(en.join("notes.txt"), "ignored").unwrap();

        let table = TranslationTable::load_from_dir(dir.path()).unwrap();
        assert_eq!(
            table.lookup("en", "common", "nav_home"),
            Some(&json!("Home"))
        );
        assert!(!table.has_namespace("en", "notes"));
    }

    #[test]
    fn test_load_from_dir_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        std::fs::create_dir(&en).unwrap();
        std::fs::write(en.join("common.json"), "not json").unwrap();

        let result = TranslationTable::load_from_dir(dir.path());
        assert!(matches!(result, Err(RoutingError::LocaleParse { .. })));
    }

    #[test]
    fn test_load_from_dir_rejects_non_object_root() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        std::fs::create_dir(&en).unwrap();
        std::fs::write(en.join("common.json"), r#"["not", "an", "object"]"#).unwrap();

        let result = TranslationTable::load_from_dir(dir.path());
        assert!(matches!(result, Err(RoutingError::LocaleNotObject { .. })));
    }

    #[test]
    fn test_load_from_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = TranslationTable::load_from_dir(&missing);
        assert!(matches!(result, Err(RoutingError::LocaleRead { .. })));
    }
}
