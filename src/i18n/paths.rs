//! Localized path building and static path pattern expansion.
//!
//! `PathTranslator` turns an English path into its per-language URL
//! (localized segments plus the language prefix), and expands declarative
//! page patterns into one routing entry per configured language for the
//! page-rendering layer.

use crate::error::RoutingError;
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::routes::RouteNameMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Marker prefix for a catch-all pattern segment, e.g. `"...index"`.
pub const CATCH_ALL_PREFIX: &str = "...";

/// One segment descriptor in a page pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// A fixed param bound to the segment at its own index.
    Fixed(String),

    /// The trailing catch-all param, bound to the joined remainder.
    CatchAll(String),
}

impl PatternSegment {
    /// The param name this segment binds.
    pub fn name(&self) -> &str {
        match self {
            PatternSegment::Fixed(name) | PatternSegment::CatchAll(name) => name,
        }
    }
}

/// A validated page pattern: fixed names with at most one trailing catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    /// Parse a raw pattern declaration such as `["about", "...index"]`.
    ///
    /// # Errors
    /// Fails fast on an empty segment name or on a catch-all anywhere but
    /// the last position; both are configuration defects, not runtime
    /// conditions.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, RoutingError> {
        let mut segments = Vec::with_capacity(raw.len());
        for (index, raw_segment) in raw.iter().enumerate() {
            let raw_segment = raw_segment.as_ref();
            if let Some(name) = raw_segment.strip_prefix(CATCH_ALL_PREFIX) {
                if name.is_empty() {
                    return Err(RoutingError::EmptyPatternSegment);
                }
                if index != raw.len() - 1 {
                    return Err(RoutingError::CatchAllNotLast(name.to_string()));
                }
                segments.push(PatternSegment::CatchAll(name.to_string()));
            } else {
                if raw_segment.is_empty() {
                    return Err(RoutingError::EmptyPatternSegment);
                }
                segments.push(PatternSegment::Fixed(raw_segment.to_string()));
            }
        }
        Ok(Self { segments })
    }

    /// The parsed segment descriptors, in order.
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }
}

/// Per-language props attached to every expanded static path.
#[derive(Debug, Clone, Serialize)]
pub struct PageProps {
    /// Language code this entry was expanded for
    pub lang: String,

    /// Extra per-language props supplied by the caller
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One localized routing entry, consumed by the page-rendering layer.
///
/// `None` params are intentional: a localized path shorter than the pattern
/// (the hidden default language drops its prefix) surfaces as an
/// explicitly-absent route param, never an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct StaticPathEntry {
    /// Pattern param bindings; `None` marks an absent segment
    pub params: BTreeMap<String, Option<String>>,

    /// Per-language props, always including `lang`
    pub props: PageProps,
}

/// Builds localized URLs and static path entries over the shared tables.
#[derive(Debug, Clone, Copy)]
pub struct PathTranslator<'a> {
    registry: &'a LanguageRegistry,
    route_names: &'a RouteNameMap,
}

impl<'a> PathTranslator<'a> {
    pub fn new(registry: &'a LanguageRegistry, route_names: &'a RouteNameMap) -> Self {
        Self {
            registry,
            route_names,
        }
    }

    /// Translate an English path into a language's URL.
    ///
    /// Each segment is localized independently (English to target only), then
    /// the language prefix is applied. The prefix is omitted iff the target
    /// is the default language and the default is hidden.
    ///
    /// Example: `/about` becomes `/pt/sobre`, or stays `/about` for a hidden
    /// default.
    pub fn translate_path(&self, path: &str, lang: &str) -> String {
        let translated: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.route_names.localize(segment, lang))
            .collect();

        let localized = format!("/{}", translated.join("/"));
        let prefix = self.registry.url_prefix(lang);
        if prefix.is_empty() {
            localized
        } else {
            format!("{prefix}{localized}")
        }
    }

    /// Expand a page pattern into one entry per enabled language.
    pub fn expand(&self, base_path: &str, pattern: &PathPattern) -> Vec<StaticPathEntry> {
        self.expand_with(base_path, pattern, |_| Map::new())
    }

    /// Expand a page pattern, attaching extra per-language props.
    ///
    /// Per language: the base path is translated, split into segments, and
    /// bound positionally against the pattern. Fixed params bind the segment
    /// at their own index (`None` when the localized path is shorter); the
    /// catch-all binds the joined remainder (`None` when nothing remains)
    /// and ends processing.
    pub fn expand_with<F>(
        &self,
        base_path: &str,
        pattern: &PathPattern,
        extra_props: F,
    ) -> Vec<StaticPathEntry>
    where
        F: Fn(&str) -> Map<String, Value>,
    {
        self.registry
            .list_enabled()
            .into_iter()
            .map(|lang| {
                let full = self.translate_path(base_path, &lang.code);
                let segments: Vec<&str> = full
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .collect();

                let mut params = BTreeMap::new();
                for (index, descriptor) in pattern.segments().iter().enumerate() {
                    match descriptor {
                        PatternSegment::Fixed(name) => {
                            params.insert(
                                name.clone(),
                                segments.get(index).map(|segment| segment.to_string()),
                            );
                        }
                        PatternSegment::CatchAll(name) => {
                            let rest = segments
                                .get(index..)
                                .map(|rest| rest.join("/"))
                                .unwrap_or_default();
                            params.insert(name.clone(), (!rest.is_empty()).then_some(rest));
                            break;
                        }
                    }
                }

                StaticPathEntry {
                    params,
                    props: PageProps {
                        lang: lang.code.clone(),
                        extra: extra_props(&lang.code),
                    },
                }
            })
            .collect()
    }
}
