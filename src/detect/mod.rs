//! Live environment detection and its memoization layer.
//!
//! Each trait id has one zero-argument boolean predicate (a *probe*)
//! registered here. The first query for an id executes the probe and caches
//! the boolean for the remaining process lifetime; later queries return the
//! cached value until [`DetectionCache::invalidate_caches`] clears
//! everything in one call. Probe failures propagate and are never cached.
//!
//! The cache is an explicit service object: the process-global instance
//! lives in [`crate::catalog`], and tests construct their own.

mod probes;

pub(crate) use probes::{
    ci_backend, in_ci, in_terminal, linux_distribution, shell_basename, terminal_program,
    KNOWN_DISTRIBUTIONS, KNOWN_SHELLS,
};

use std::sync::{Mutex, RwLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{DiscernError, Result};
use crate::types::fold_id;

/// Environment variable naming trait ids whose probes are forced to report
/// true, comma-separated. Useful for pinning detection in CI.
pub const ASSUME_ENV: &str = "DISCERN_ASSUME";

type ProbeFn = Box<dyn Fn() -> anyhow::Result<bool> + Send + Sync>;

/// Memoizes the result of each trait's detection probe.
///
/// Thread-safe: concurrent first accesses for the same id converge on a
/// single cached value (first write wins), and invalidation concurrent with
/// reads always leaves a consistent cached or freshly computed value.
#[derive(Default)]
pub struct DetectionCache {
    probes: RwLock<FxHashMap<String, ProbeFn>>,
    results: Mutex<FxHashMap<String, bool>>,
}

impl DetectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the detection probe for a trait id, replacing any previous
    /// one. Probes may be registered lazily, any time before the first
    /// `is_current` query for the id.
    pub fn register(
        &self,
        id: &str,
        probe: impl Fn() -> anyhow::Result<bool> + Send + Sync + 'static,
    ) {
        let mut probes = self.probes.write().unwrap_or_else(|e| e.into_inner());
        probes.insert(fold_id(id), Box::new(probe));
    }

    /// Whether a probe is registered for the id.
    pub fn has_probe(&self, id: &str) -> bool {
        let probes = self.probes.read().unwrap_or_else(|e| e.into_inner());
        probes.contains_key(&fold_id(id))
    }

    /// The memoized liveness of a trait id.
    ///
    /// Cache miss executes the registered probe; a probe error propagates
    /// uncached, so the next query retries. Ids listed in [`ASSUME_ENV`]
    /// report true without consulting their probe.
    pub fn is_current(&self, id: &str) -> Result<bool> {
        let key = fold_id(id);

        {
            let results = self.results.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(&cached) = results.get(&key) {
                return Ok(cached);
            }
        }

        let value = if assumed_ids().contains(&key) {
            true
        } else {
            let probes = self.probes.read().unwrap_or_else(|e| e.into_inner());
            let probe = probes
                .get(&key)
                .ok_or_else(|| DiscernError::missing_probe(id))?;
            probe().map_err(|source| DiscernError::detection(id, source))?
        };

        // First write wins: a concurrent prober that got here first keeps
        // its value, so every caller observes the same cached result.
        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        Ok(*results.entry(key).or_insert(value))
    }

    /// True if the id's probe result is currently cached.
    pub fn is_cached(&self, id: &str) -> bool {
        let results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        results.contains_key(&fold_id(id))
    }

    /// Drop every cached detection result, trait-level and aggregate alike.
    ///
    /// The next access to any `current` query runs a fresh probe. There is
    /// no partial-invalidation granularity.
    pub fn invalidate_caches(&self) {
        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        results.clear();
    }
}

impl std::fmt::Debug for DetectionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let probes = self.probes.read().unwrap_or_else(|e| e.into_inner());
        let results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("DetectionCache")
            .field("probes", &probes.len())
            .field("cached", &results.len())
            .finish()
    }
}

fn assumed_ids() -> FxHashSet<String> {
    match std::env::var(ASSUME_ENV) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(fold_id)
            .collect(),
        Err(_) => FxHashSet::default(),
    }
}
