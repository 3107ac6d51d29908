//! The trait entity: a single detectable fact about the running environment.
//!
//! A `Trait` is an immutable catalog entry (one architecture, one OS
//! distribution, one CI backend, ...) whose live truth value is delegated to
//! the detection predicate registered for its id. Traits never reference the
//! groups containing them; that lookup goes through the registry's reverse
//! index to keep the ownership graph acyclic.

use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};

use crate::detect::DetectionCache;
use crate::error::Result;
use crate::types::{fold_id, Category, TraitRecord};

/// A single detectable fact about the environment.
///
/// Equality and hashing are by id alone (case-insensitive), so two `Trait`
/// handles with the same id are interchangeable as map/set keys.
#[derive(Debug)]
pub struct Trait {
    record: TraitRecord,
    key: String,
}

impl Trait {
    pub(crate) fn from_record(record: TraitRecord) -> Self {
        let key = fold_id(&record.id);
        Self { record, key }
    }

    /// Identifier in its original casing.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Case-folded lookup key.
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn icon(&self) -> &str {
        &self.record.icon
    }

    pub fn url(&self) -> &str {
        &self.record.url
    }

    pub fn category(&self) -> Category {
        self.record.category
    }

    /// Category-specific metadata bag. Opaque to the core; keys depend on
    /// the category (e.g. OS version fields for platforms).
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.record.metadata
    }

    /// True if this is the sentinel trait absorbing unclassifiable values
    /// in its category.
    pub fn is_unknown(&self) -> bool {
        self.key == self.record.category.unknown_id()
    }

    /// Live detection result, memoized through the process-global cache.
    ///
    /// The first call executes the registered probe; later calls return the
    /// cached value until [`crate::invalidate_caches`] runs. A probe failure
    /// propagates as [`crate::DiscernError::Detection`].
    pub fn current(&self) -> Result<bool> {
        self.current_in(crate::catalog::detection())
    }

    /// Like [`Trait::current`], against an explicit cache. Used by tests and
    /// by hosts that manage their own detection lifecycle.
    pub fn current_in(&self, cache: &DetectionCache) -> Result<bool> {
        cache.is_current(&self.key)
    }

    /// Flat projection of every public attribute, including `current`.
    ///
    /// Metadata fields are flattened into the map; a metadata key that
    /// shadows a built-in attribute loses.
    pub fn info(&self) -> Result<Map<String, Value>> {
        self.info_in(crate::catalog::detection())
    }

    /// Like [`Trait::info`], against an explicit cache.
    pub fn info_in(&self, cache: &DetectionCache) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        for (key, value) in &self.record.metadata {
            map.insert(key.clone(), value.clone());
        }
        map.insert("id".into(), self.record.id.clone().into());
        map.insert("name".into(), self.record.name.clone().into());
        map.insert("icon".into(), self.record.icon.clone().into());
        map.insert("url".into(), self.record.url.clone().into());
        map.insert("category".into(), self.record.category.label().into());
        map.insert("current".into(), self.current_in(cache)?.into());
        Ok(map)
    }
}

impl PartialEq for Trait {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Trait {}

impl Hash for Trait {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.record.icon, self.record.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make(id: &str) -> Trait {
        Trait::from_record(TraitRecord::new(id, id, "?", "", Category::Ci))
    }

    #[test]
    fn equality_is_by_id_case_insensitive() {
        assert_eq!(make("GitHub-Actions"), make("github-actions"));
        assert_ne!(make("github-actions"), make("gitlab-ci"));
    }

    #[test]
    fn hashes_agree_across_casing() {
        let mut set = HashSet::new();
        set.insert(make("Travis"));
        assert!(set.contains(&make("travis")));
    }

    #[test]
    fn info_flattens_metadata_without_shadowing_attributes() {
        let record = TraitRecord::new("ubuntu", "Ubuntu", "🐧", "https://ubuntu.com", Category::Platform)
            .meta("package_manager", "apt")
            .meta("name", "shadow-attempt");
        let t = Trait::from_record(record);

        let cache = DetectionCache::new();
        cache.register("ubuntu", || Ok(true));

        let info = t.info_in(&cache).unwrap();
        assert_eq!(info["package_manager"], "apt");
        assert_eq!(info["name"], "Ubuntu");
        assert_eq!(info["current"], true);
        assert_eq!(info["category"], "platform");
    }

    #[test]
    fn unknown_sentinel_is_flagged() {
        let t = Trait::from_record(TraitRecord::new(
            "unknown-ci",
            "Unknown CI",
            "?",
            "",
            Category::Ci,
        ));
        assert!(t.is_unknown());
        assert!(!make("travis").is_unknown());
    }
}
