//! Two-pass registry construction with load-time validation.
//!
//! Records may be added in any order; every trait record is materialized
//! before any group's members are resolved, so group records can reference
//! traits declared after them. All validation problems are collected and
//! reported together as one configuration error.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::error::{DiscernError, Result};
use crate::group::Group;
use crate::traits::Trait;
use crate::types::{fold_id, GroupRecord, TraitRecord};

use super::{index::ReverseIndex, validation, Registry};

/// Assembles a [`Registry`] from trait and group record tables.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    trait_records: Vec<TraitRecord>,
    group_records: Vec<GroupRecord>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trait_record(mut self, record: TraitRecord) -> Self {
        self.trait_records.push(record);
        self
    }

    #[must_use]
    pub fn traits(mut self, records: impl IntoIterator<Item = TraitRecord>) -> Self {
        self.trait_records.extend(records);
        self
    }

    #[must_use]
    pub fn group_record(mut self, record: GroupRecord) -> Self {
        self.group_records.push(record);
        self
    }

    #[must_use]
    pub fn groups(mut self, records: impl IntoIterator<Item = GroupRecord>) -> Self {
        self.group_records.extend(records);
        self
    }

    /// Materialize and validate the registry.
    ///
    /// Fails with [`DiscernError::Configuration`] listing every problem at
    /// once: duplicate ids across the combined namespace, unresolvable
    /// group members, and canonical-partition violations.
    pub fn build(self) -> Result<Registry> {
        let start = Instant::now();
        let mut problems = Vec::new();

        // Pass 1: traits. The combined namespace map records which kind
        // first claimed each id so duplicate messages can name both sides.
        let mut claimed: FxHashMap<String, (&'static str, String)> = FxHashMap::default();
        let mut traits = Vec::with_capacity(self.trait_records.len());
        let mut trait_index = FxHashMap::default();

        for record in self.trait_records {
            let key = fold_id(&record.id);
            if let Some((kind, original)) = claimed.get(&key) {
                problems.push(format!(
                    "duplicate id '{}' already declared as {} '{}'",
                    record.id, kind, original
                ));
                continue;
            }
            claimed.insert(key.clone(), ("trait", record.id.clone()));
            trait_index.insert(key, traits.len());
            traits.push(Trait::from_record(record));
        }

        // Pass 2: groups, resolved against the complete trait set.
        let mut groups = Vec::with_capacity(self.group_records.len());
        let mut group_index = FxHashMap::default();

        for record in self.group_records {
            let key = fold_id(&record.id);
            if let Some((kind, original)) = claimed.get(&key) {
                problems.push(format!(
                    "duplicate id '{}' already declared as {} '{}'",
                    record.id, kind, original
                ));
                continue;
            }

            let unresolved: Vec<&str> = record
                .member_ids
                .iter()
                .filter(|member| !trait_index.contains_key(&fold_id(member)))
                .map(String::as_str)
                .collect();
            if !unresolved.is_empty() {
                problems.push(format!(
                    "group '{}' references unknown trait id(s): {}",
                    record.id,
                    unresolved.join(", ")
                ));
                continue;
            }

            claimed.insert(key.clone(), ("group", record.id.clone()));
            group_index.insert(key, groups.len());
            groups.push(Group::from_record(record));
        }

        validation::check_canonical_partition(&traits, &trait_index, &groups, &mut problems);

        if !problems.is_empty() {
            return Err(DiscernError::configuration(problems));
        }

        let reverse = ReverseIndex::build(&groups);
        tracing::debug!(
            traits = traits.len(),
            groups = groups.len(),
            elapsed = ?start.elapsed(),
            "registry built"
        );

        Ok(Registry {
            traits,
            groups,
            trait_index,
            group_index,
            reverse,
        })
    }
}
