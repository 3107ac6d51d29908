//! The builtin catalog: static trait and group tables per category, their
//! detection probes, and the process-global registry and cache built from
//! them.
//!
//! Tables live in one module per category. Each module contributes three
//! things: its trait records, its group records (a canonical partition plus
//! any overlapping convenience groups), and its probe registrations. The
//! assembly here is the only place that wires them together; the core never
//! sees the tables directly.

mod architectures;
mod ci;
mod platforms;
mod shells;
mod terminals;

use std::sync::OnceLock;

use crate::detect::DetectionCache;
use crate::error::Result;
use crate::registry::Registry;

/// Build a fresh registry from the builtin tables.
///
/// Hosts that extend or replace the catalog can start from
/// [`Registry::builder`] instead; this function is the builtin assembly.
pub fn build_registry() -> Result<Registry> {
    Registry::builder()
        .traits(architectures::traits())
        .traits(platforms::traits())
        .traits(shells::traits())
        .traits(terminals::traits())
        .traits(ci::traits())
        .groups(architectures::groups())
        .groups(platforms::groups())
        .groups(shells::groups())
        .groups(terminals::groups())
        .groups(ci::groups())
        .build()
}

/// Build a fresh detection cache with every builtin probe registered.
pub fn build_detection() -> DetectionCache {
    let cache = DetectionCache::new();
    architectures::register_probes(&cache);
    platforms::register_probes(&cache);
    shells::register_probes(&cache);
    terminals::register_probes(&cache);
    ci::register_probes(&cache);
    cache
}

/// The process-global registry, built on first access.
///
/// The builtin tables are validated at load; a violation here is a defect
/// in the tables themselves and aborts.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        build_registry().unwrap_or_else(|e| panic!("builtin catalog is invalid: {e}"))
    })
}

/// The process-global detection cache, built on first access.
pub fn detection() -> &'static DetectionCache {
    static DETECTION: OnceLock<DetectionCache> = OnceLock::new();
    DETECTION.get_or_init(build_detection)
}
