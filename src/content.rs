//! Content store contract and thin adapters.
//!
//! The content storage/query layer is an external collaborator; the routing
//! core only consumes this trait and reads `id`, `linkedContent`, and
//! `isDraft`. Entry ids have the shape `"{language}/{slug}"`.

use crate::error::RoutingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;

/// Frontmatter fields carried by a content entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Drafts are excluded from link groups and published routes.
    #[serde(default)]
    pub is_draft: bool,

    /// Cross-language group key linking translations of the same content.
    #[serde(default)]
    pub linked_content: Option<String>,

    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
}

/// One entry yielded by the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Opaque id of shape `"{language}/{slug}"`
    pub id: String,

    pub data: ContentMeta,
}

impl ContentEntry {
    /// The language code, derived from the leading segment of the id.
    pub fn language(&self) -> &str {
        self.id.split('/').next().unwrap_or("")
    }

    /// The slug: everything after the leading language segment.
    pub fn slug(&self) -> &str {
        self.id
            .split_once('/')
            .map(|(_, slug)| slug)
            .unwrap_or(&self.id)
    }
}

/// The consumed content store contract.
///
/// Reading the store is the only suspending operation in the routing core;
/// everything else is synchronous over immutable tables.
pub trait ContentStore {
    /// Yield all entries of a collection.
    fn entries(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<ContentEntry>, RoutingError>> + Send;
}

/// In-memory store for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    collections: HashMap<String, Vec<ContentEntry>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to a collection.
    pub fn insert(&mut self, collection: &str, entry: ContentEntry) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(entry);
    }
}

impl ContentStore for InMemoryContentStore {
    async fn entries(&self, collection: &str) -> Result<Vec<ContentEntry>, RoutingError> {
        Ok(self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

/// Store backed by one JSON manifest per collection:
/// `<root>/<collection>.json`, an array of entries.
#[derive(Debug, Clone)]
pub struct JsonContentStore {
    root: PathBuf,
}

impl JsonContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentStore for JsonContentStore {
    async fn entries(&self, collection: &str) -> Result<Vec<ContentEntry>, RoutingError> {
        let path = self.root.join(format!("{collection}.json"));
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RoutingError::ContentRead {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| RoutingError::ContentParse { path, source })
    }
}
