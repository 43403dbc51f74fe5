use crate::i18n::registry::LanguageConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Process configuration: where the static site inputs live.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site configuration JSON (languages, route names, pages)
    pub site_config_path: PathBuf,

    /// Locale data directory: `<dir>/<lang>/<namespace>.json`
    pub locales_dir: PathBuf,

    /// Content manifests directory: `<dir>/<collection>.json`
    pub content_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_config_path: std::env::var("SITE_CONFIG")
                .unwrap_or_else(|_| "site.json".to_string())
                .into(),
            locales_dir: std::env::var("LOCALES_DIR")
                .unwrap_or_else(|_| "locales".to_string())
                .into(),
            content_dir: std::env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "content".to_string())
                .into(),
        })
    }
}

fn default_collection() -> String {
    "blog".to_string()
}

fn default_content_routes() -> Vec<String> {
    vec!["blog".to_string()]
}

/// One page declaration: an English base path plus its param pattern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDeclaration {
    /// English base path, e.g. "/about"
    pub base_path: String,

    /// Segment pattern, e.g. ["about", "...index"]
    pub pattern: Vec<String>,
}

/// Operator-authored site configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// The closed language set; exactly one entry is the default
    pub languages: Vec<LanguageConfig>,

    /// Whether the default language's code appears in URLs
    #[serde(default)]
    pub show_default_lang: bool,

    /// Route names per language: `{ "pt": { "about": "sobre" } }`
    #[serde(default)]
    pub routes: Map<String, Value>,

    /// Content collection holding linked entries
    #[serde(default = "default_collection")]
    pub content_collection: String,

    /// Canonical route names whose second segment is a content slug
    #[serde(default = "default_content_routes")]
    pub content_routes: Vec<String>,

    /// Pages to expand into localized static paths
    #[serde(default)]
    pub pages: Vec<PageDeclaration>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read site config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid site config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_site_config_parses() {
        let config: SiteConfig = serde_json::from_str(
            r#"{
                "languages": [
                    { "code": "en", "name": "English", "isDefault": true },
                    { "code": "pt", "name": "Portuguese", "nativeName": "Português" }
                ],
                "showDefaultLang": false,
                "routes": { "pt": { "about": "sobre" } },
                "pages": [
                    { "basePath": "/about", "pattern": ["about", "...index"] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.languages.len(), 2);
        assert!(config.languages[0].is_default);
        assert!(config.languages[1].enabled);
        assert_eq!(config.content_collection, "blog");
        assert_eq!(config.content_routes, vec!["blog".to_string()]);
        assert_eq!(config.pages[0].pattern, vec!["about", "...index"]);
    }

    #[test]
    fn test_site_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::load(&dir.path().join("site.json"));
        assert!(result.is_err());
    }

    // Environment variables are process-wide; these tests clear and set
    // them, so they run serialized.

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        std::env::remove_var("SITE_CONFIG");
        std::env::remove_var("LOCALES_DIR");
        std::env::remove_var("CONTENT_DIR");

        let config = Config::from_env().unwrap();
        assert_eq!(config.site_config_path, PathBuf::from("site.json"));
        assert_eq!(config.locales_dir, PathBuf::from("locales"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        std::env::set_var("LOCALES_DIR", "/srv/site/locales");

        let config = Config::from_env().unwrap();
        assert_eq!(config.locales_dir, PathBuf::from("/srv/site/locales"));

        std::env::remove_var("LOCALES_DIR");
    }
}
