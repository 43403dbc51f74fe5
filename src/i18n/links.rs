//! Content link resolution and language switching.
//!
//! Translations of the same content carry different slugs per language, so
//! "this blog post, in another language" cannot be resolved by slug
//! equality. Authors declare a shared `linkedContent` group key instead;
//! this module groups non-draft entries by that key and uses the groups to
//! rewrite content URLs into a target language. A missing sibling degrades
//! to the original path: language switching must never 404.

use crate::content::{ContentEntry, ContentStore};
use crate::error::RoutingError;
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::routes::RouteNameMap;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Link groups: group key, then language, then content id.
pub type ContentLinks = HashMap<String, HashMap<String, String>>;

/// Resolves cross-language content links against a content store.
///
/// Holds only shared references; link groups are recomputed from the store
/// on every call and have no identity beyond the call that produced them.
pub struct ContentLinkResolver<'a, S: ContentStore> {
    store: &'a S,
    registry: &'a LanguageRegistry,
    route_names: &'a RouteNameMap,
    collection: &'a str,
    content_routes: &'a [String],
}

impl<'a, S: ContentStore> ContentLinkResolver<'a, S> {
    /// Create a resolver.
    ///
    /// `content_routes` are the canonical English route names whose second
    /// segment is a content slug (e.g. `["blog"]`); they are recognized in
    /// any configured language via the reverse route-name lookup.
    pub fn new(
        store: &'a S,
        registry: &'a LanguageRegistry,
        route_names: &'a RouteNameMap,
        collection: &'a str,
        content_routes: &'a [String],
    ) -> Self {
        Self {
            store,
            registry,
            route_names,
            collection,
            content_routes,
        }
    }

    /// Build the link groups from the current store snapshot.
    ///
    /// Non-draft entries with a `linkedContent` key are grouped by it; the
    /// entry's language comes from the leading segment of its id. Two
    /// same-language entries sharing a group key is a configuration defect;
    /// here the last write wins, and the startup validator reports it.
    pub async fn build_content_links(&self) -> Result<ContentLinks, RoutingError> {
        let entries = self.store.entries(self.collection).await?;
        Ok(group_content_links(&entries))
    }

    /// Rewrite a URL path into a target language.
    ///
    /// Content URLs (a recognized content route followed by a slug) resolve
    /// through the link groups; every other path is translated segment by
    /// segment. See the module docs for the degradation rule.
    pub async fn switch_language_url(
        &self,
        current_path: &str,
        target_lang: &str,
    ) -> Result<String, RoutingError> {
        let current_lang = self.registry.resolve_from_path(current_path).code.clone();

        let mut parts: Vec<&str> = current_path
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();
        if parts
            .first()
            .map_or(false, |first| self.registry.is_supported(first))
        {
            parts.remove(0);
        }

        // Root page: only the prefix rule applies.
        if parts.is_empty() {
            let prefix = self.registry.url_prefix(target_lang);
            return Ok(if prefix.is_empty() {
                "/".to_string()
            } else {
                format!("{prefix}/")
            });
        }

        let base_route = parts[0];
        if let Some(slug) = parts.get(1) {
            if self.is_content_route(base_route) {
                return self
                    .switch_content_path(&current_lang, target_lang, base_route, slug, current_path)
                    .await;
            }
        }

        let translated: Vec<&str> = parts
            .iter()
            .map(|segment| self.route_names.translate(segment, target_lang))
            .collect();
        let prefix = self.registry.url_prefix(target_lang);
        Ok(format!("{prefix}/{}", translated.join("/")))
    }

    /// Whether a segment names a content route in any configured language.
    fn is_content_route(&self, segment: &str) -> bool {
        let canonical = self.route_names.delocalize(segment);
        self.content_routes.iter().any(|route| route == canonical)
    }

    async fn switch_content_path(
        &self,
        current_lang: &str,
        target_lang: &str,
        base_route: &str,
        slug: &str,
        fallback_path: &str,
    ) -> Result<String, RoutingError> {
        let candidate = format!("{current_lang}/{slug}");
        let links = self.build_content_links().await?;

        let group = links
            .iter()
            .find(|(_, members)| members.values().any(|id| id == &candidate))
            .map(|(group, _)| group.as_str());

        if let Some(group) = group {
            if let Some(target_id) = links.get(group).and_then(|members| members.get(target_lang)) {
                let target_slug = target_id
                    .split_once('/')
                    .map(|(_, slug)| slug)
                    .unwrap_or(target_id);
                let route_name = self.route_names.translate(base_route, target_lang);
                let prefix = self.registry.url_prefix(target_lang);
                debug!(from = %candidate, to = %target_id, "switched content via link group");
                return Ok(format!("{prefix}/{route_name}/{target_slug}"));
            }
        }

        warn!(
            path = %fallback_path,
            target = %target_lang,
            "no linked content sibling, keeping original path"
        );
        Ok(fallback_path.to_string())
    }
}

/// Group non-draft entries by their `linkedContent` key.
pub fn group_content_links(entries: &[ContentEntry]) -> ContentLinks {
    let mut links: ContentLinks = HashMap::new();
    for entry in entries.iter().filter(|entry| !entry.data.is_draft) {
        if let Some(group) = &entry.data.linked_content {
            links
                .entry(group.clone())
                .or_default()
                .insert(entry.language().to_string(), entry.id.clone());
        }
    }
    links
}
