//! Internationalization (i18n) module: localized routing and resolution.
//!
//! All language-related logic lives here: the configured language set, the
//! translation table with its three-tier key lookup, route name translation,
//! static path pattern expansion, and cross-language content link
//! resolution.
//!
//! # Architecture
//!
//! - `registry`: the closed language set, URL-prefix rules, and the locale
//!   resolver that derives the active language from a path
//! - `table`: immutable per-language, per-namespace translation trees
//! - `translate`: `namespace:dotted.key` lookup with fallback and
//!   `{{param}}` interpolation
//! - `routes`: English/localized route segment mapping
//! - `paths`: localized path building and static path pattern expansion
//! - `links`: author-declared content link groups and language switching
//! - `validator`: startup configuration validation (fail fast on defects)
//! - `metrics`: lookup observability
//!
//! The registry, table, and route name map are built once at startup and
//! passed by shared read-only reference; only the content store suspends.

pub mod links;
pub mod metrics;
pub mod paths;
pub mod registry;
pub mod routes;
pub mod table;
pub mod translate;
pub mod validator;

pub use links::{group_content_links, ContentLinkResolver, ContentLinks};
pub use metrics::{LookupMetrics, LookupReport};
pub use paths::{PathPattern, PathTranslator, PatternSegment, StaticPathEntry};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use routes::{LangRouteNames, RouteNameMap};
pub use table::TranslationTable;
pub use translate::{Translated, Translator};
pub use validator::{ConfigValidator, ValidationReport};
