//! Typed errors for the routing core.
//!
//! Lookup failures are never errors here: missing translations, route names,
//! and content siblings all resolve through fallback chains. The variants in
//! this module cover the things that *should* stop a build: unreadable or
//! malformed configuration, and configuration defects detected at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or validating routing configuration.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The language set is empty.
    #[error("no languages configured")]
    NoLanguages,

    /// Two languages share the same code.
    #[error("duplicate language code '{0}'")]
    DuplicateLanguage(String),

    /// The language set must designate exactly one default language.
    #[error("expected exactly one default language, found {0}")]
    DefaultLanguageCount(usize),

    /// A path pattern contains an empty segment name.
    #[error("empty segment name in path pattern")]
    EmptyPatternSegment,

    /// A catch-all segment appeared somewhere other than the last position.
    #[error("catch-all segment '{0}' must be the last pattern entry")]
    CatchAllNotLast(String),

    /// A locale file or directory could not be read.
    #[error("failed to read locale data at {path}")]
    LocaleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A locale file is not valid JSON.
    #[error("invalid JSON in locale file {path}")]
    LocaleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A locale file parsed, but its top level is not an object.
    #[error("locale namespace for '{lang}' is not a JSON object: {path}")]
    LocaleNotObject { lang: String, path: PathBuf },

    /// The route-name configuration for a language is not an object of strings.
    #[error("route names for '{0}' must be an object mapping English names to strings")]
    RouteConfigShape(String),

    /// A content collection manifest could not be read.
    #[error("failed to read content manifest {path}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content collection manifest is not valid JSON.
    #[error("invalid JSON in content manifest {path}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Startup validation found configuration defects.
    #[error("configuration validation failed:\n{0}")]
    InvalidConfiguration(String),
}
