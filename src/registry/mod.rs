//! The entity registry: every trait and group, keyed by one case-insensitive
//! id namespace.
//!
//! The registry is populated once at startup from the catalog tables and is
//! read-only afterwards. It consists of:
//!
//! - **Builder**: two-pass construction (traits first, then group-member
//!   resolution) with full load-time validation
//! - **Lookup**: the resolution functions (`traits_from_ids`,
//!   `groups_from_ids`) with first-seen ordering and complete unknown-id
//!   errors
//! - **Index**: the reverse trait-to-groups index, built once at load
//! - **Validation**: id uniqueness and the canonical-partition invariants
//!
//! Traits and groups are arena entries referenced by id; group membership is
//! an auxiliary multimap owned here, never back-pointers on the entities.

mod builder;
mod index;
mod lookup;
mod validation;

pub use builder::RegistryBuilder;

use rustc_hash::FxHashMap;

use crate::group::Group;
use crate::traits::Trait;
use crate::types::{fold_id, Category};

/// Process-wide store of all trait and group objects and their id index.
#[derive(Debug)]
pub struct Registry {
    traits: Vec<Trait>,
    groups: Vec<Group>,
    trait_index: FxHashMap<String, usize>,
    group_index: FxHashMap<String, usize>,
    reverse: index::ReverseIndex,
}

impl Registry {
    /// Start building a registry from record tables.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up a trait by id, case-insensitively.
    pub fn trait_by_id(&self, id: &str) -> Option<&Trait> {
        self.trait_index.get(&fold_id(id)).map(|&i| &self.traits[i])
    }

    /// Look up a group by id, case-insensitively.
    pub fn group_by_id(&self, id: &str) -> Option<&Group> {
        self.group_index.get(&fold_id(id)).map(|&i| &self.groups[i])
    }

    /// All traits in declaration order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// All groups in declaration order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All traits of one category, in declaration order.
    pub fn traits_in(&self, category: Category) -> impl Iterator<Item = &Trait> {
        self.traits.iter().filter(move |t| t.category() == category)
    }

    /// The canonical groups, in declaration order.
    pub fn canonical_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| g.is_canonical())
    }

    /// The sentinel trait absorbing unclassifiable values in a category,
    /// if the catalog defines one.
    pub fn unknown(&self, category: Category) -> Option<&Trait> {
        self.trait_by_id(category.unknown_id())
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn group_position(&self, group: &Group) -> Option<usize> {
        self.group_index.get(&fold_id(group.id())).copied()
    }

    pub(crate) fn reverse(&self) -> &index::ReverseIndex {
        &self.reverse
    }
}
