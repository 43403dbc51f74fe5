//! Lookup metrics and observability.
//!
//! Counts how translation and route-name lookups resolved: direct hits,
//! default-language fallbacks, raw-key fallbacks, and route-name identity
//! fallbacks. Raw-key fallbacks are the "loud" failure mode that shows up
//! in rendered output, so a build pass reports them at the end.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Lookups resolved in the requested language
    direct_hits: AtomicUsize,

    /// Lookups resolved in the default language
    default_fallbacks: AtomicUsize,

    /// Lookups that fell through to the raw key string
    raw_key_fallbacks: AtomicUsize,

    /// Route-name lookups that fell back to the English name unchanged
    route_identity_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    fn new() -> Self {
        Self {
            direct_hits: AtomicUsize::new(0),
            default_fallbacks: AtomicUsize::new(0),
            raw_key_fallbacks: AtomicUsize::new(0),
            route_identity_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the global lookup metrics instance.
    ///
    /// Counters only ever increase; tests that need exact counts build a
    /// local instance via `new` instead of resetting this one.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// Record a lookup resolved in the requested language.
    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup resolved in the default language.
    pub fn record_default_fallback(&self) {
        self.default_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned the raw key.
    pub fn record_raw_key_fallback(&self) {
        self.raw_key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a route name served unchanged because no mapping exists.
    pub fn record_route_identity_fallback(&self) {
        self.route_identity_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current direct hit count.
    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    /// Get the current default-language fallback count.
    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current raw-key fallback count.
    pub fn raw_key_fallbacks(&self) -> usize {
        self.raw_key_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current route-name identity fallback count.
    pub fn route_identity_fallbacks(&self) -> usize {
        self.route_identity_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> LookupReport {
        let direct = self.direct_hits();
        let default_fallbacks = self.default_fallbacks();
        let raw = self.raw_key_fallbacks();
        let total = direct + default_fallbacks + raw;
        let direct_hit_rate = if total > 0 {
            (direct as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        LookupReport {
            direct_hits: direct,
            default_fallbacks,
            raw_key_fallbacks: raw,
            route_identity_fallbacks: self.route_identity_fallbacks(),
            direct_hit_rate,
        }
    }

}

/// Lookup statistics for one process run.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// Lookups resolved in the requested language
    pub direct_hits: usize,

    /// Lookups resolved in the default language
    pub default_fallbacks: usize,

    /// Lookups that returned the raw key string
    pub raw_key_fallbacks: usize,

    /// Route names served unchanged (no mapping configured)
    pub route_identity_fallbacks: usize,

    /// Direct hit rate as a percentage (0-100)
    pub direct_hit_rate: f64,
}
