//! Startup configuration validation.
//!
//! The resolvers themselves never fail: missing translations, route names,
//! and content siblings all degrade through fallbacks. The defects that
//! would make those fallbacks ambiguous are caught here instead, once, at
//! build/start time: route-name collisions that break the reverse lookup,
//! duplicate content link entries, and suspicious translation tables.
//! Errors should abort the build; warnings are logged and tolerated.

use crate::content::ContentEntry;
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::routes::RouteNameMap;
use crate::i18n::table::{TranslationTable, DEFAULT_NAMESPACE};
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that should abort the build
    pub errors: Vec<String>,

    /// Non-critical findings worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Absorb another report's findings.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for the static routing configuration.
pub struct ConfigValidator;

// Placeholder extraction regex (cached for reuse)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl ConfigValidator {
    /// Validate the immutable tables built at startup.
    ///
    /// Checks:
    /// - every enabled language carries the `common` namespace (warning);
    /// - route names reference configured languages only (error);
    /// - no localized route name maps to two different English names, in
    ///   one language or across languages (error; the reverse lookup
    ///   would be ambiguous);
    /// - `{{placeholder}}` sets match the default language's string for
    ///   the same key (warning).
    pub fn validate(
        registry: &LanguageRegistry,
        table: &TranslationTable,
        route_names: &RouteNameMap,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::check_common_namespace(registry, table, &mut report);
        Self::check_route_languages(registry, route_names, &mut report);
        Self::check_route_name_collisions(route_names, &mut report);
        Self::check_placeholder_parity(registry, table, &mut report);
        report
    }

    /// Validate linked content entries for duplicate `(group, language)`
    /// pairs, which the runtime grouping silently resolves last-write-wins.
    pub fn validate_content_links(entries: &[ContentEntry]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen: HashMap<(String, String), String> = HashMap::new();

        for entry in entries.iter().filter(|entry| !entry.data.is_draft) {
            if let Some(group) = &entry.data.linked_content {
                let key = (group.clone(), entry.language().to_string());
                if let Some(existing) = seen.insert(key, entry.id.clone()) {
                    report.errors.push(format!(
                        "linked content group '{group}' has multiple '{}' entries: '{existing}' and '{}'",
                        entry.language(),
                        entry.id
                    ));
                }
            }
        }

        report
    }

    fn check_common_namespace(
        registry: &LanguageRegistry,
        table: &TranslationTable,
        report: &mut ValidationReport,
    ) {
        for lang in registry.list_enabled() {
            if !table.has_namespace(&lang.code, DEFAULT_NAMESPACE) {
                report.warnings.push(format!(
                    "language '{}' has no '{DEFAULT_NAMESPACE}' namespace, unqualified keys will fall back",
                    lang.code
                ));
            }
        }
    }

    fn check_route_languages(
        registry: &LanguageRegistry,
        route_names: &RouteNameMap,
        report: &mut ValidationReport,
    ) {
        for names in route_names.iter() {
            if registry.get(&names.lang).is_none() {
                report.errors.push(format!(
                    "route names configured for unknown language '{}'",
                    names.lang
                ));
            }
        }
    }

    fn check_route_name_collisions(route_names: &RouteNameMap, report: &mut ValidationReport) {
        // localized name -> (language, english name)
        let mut seen: HashMap<&str, (&str, &str)> = HashMap::new();

        for names in route_names.iter() {
            for (english, localized) in &names.entries {
                match seen.get(localized.as_str()) {
                    Some((other_lang, other_english)) if *other_english != english.as_str() => {
                        report.errors.push(format!(
                            "localized route name '{localized}' maps to '{other_english}' (in '{other_lang}') and '{english}' (in '{}'), reverse lookup is ambiguous",
                            names.lang
                        ));
                    }
                    _ => {
                        seen.insert(localized.as_str(), (names.lang.as_str(), english.as_str()));
                    }
                }
            }
        }
    }

    fn check_placeholder_parity(
        registry: &LanguageRegistry,
        table: &TranslationTable,
        report: &mut ValidationReport,
    ) {
        let default_code = &registry.default_lang().code;

        for lang in registry.list_enabled() {
            if &lang.code == default_code {
                continue;
            }
            for (namespace, tree) in table.namespaces(default_code) {
                let mut leaves = Vec::new();
                collect_string_leaves(String::new(), tree, &mut leaves);

                for (key, default_text) in leaves {
                    let Some(Value::String(translated)) =
                        table.lookup(&lang.code, namespace, &key)
                    else {
                        continue;
                    };
                    let expected = extract_placeholders(&default_text);
                    let found = extract_placeholders(translated);
                    if expected != found {
                        report.warnings.push(format!(
                            "placeholder mismatch for '{namespace}:{key}' in '{}': default has {expected:?}, translation has {found:?}",
                            lang.code
                        ));
                    }
                }
            }
        }
    }
}

/// Collect `(dotted key, leaf string)` pairs from a translation tree.
fn collect_string_leaves(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(text) => out.push((prefix, text.clone())),
        Value::Object(map) => {
            for (key, child) in map {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_string_leaves(child_prefix, child, out);
            }
        }
        _ => {}
    }
}

/// Extract the set of `{{name}}` placeholders from a string.
fn extract_placeholders(text: &str) -> BTreeSet<String> {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid placeholder regex"));

    regex
        .captures_iter(text)
        .filter_map(|capture| capture.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
