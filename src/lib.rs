//! Localized routing and cross-language content resolution for multilingual
//! static sites.
//!
//! The crate derives the active language from a URL, translates abstract
//! route names into per-language URL segments and back, expands declarative
//! page patterns into the full cross-product of localized static paths, and
//! resolves "this blog post, in another language" through author-declared
//! content links rather than slug equality.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod util;

pub use error::RoutingError;
