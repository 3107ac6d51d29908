//! Trait families and their set algebra.
//!
//! A `Group` is an immutable, order-independent collection of trait ids.
//! Groups compose with `| & - ^` (against another group or a single trait),
//! compare with subset semantics, and report a live `current` value that is
//! the short-circuit OR of their members. Canonical groups form a partition
//! of their category; groups derived through the operators are never
//! canonical, even when the arithmetic reproduces a canonical membership.

use std::ops::{BitAnd, BitOr, BitXor, Sub};

use rustc_hash::FxHashSet;

use crate::detect::DetectionCache;
use crate::error::Result;
use crate::registry::Registry;
use crate::traits::Trait;
use crate::types::{fold_id, GroupRecord};

/// A named, immutable collection of trait identifiers.
///
/// Groups own id references, never trait copies; the actual trait data
/// stays in the registry. Equality is set equality over member ids.
#[derive(Debug)]
pub struct Group {
    id: String,
    name: String,
    icon: String,
    canonical: bool,
    /// Members in declaration order, deduplicated
    member_ids: Vec<String>,
    /// Case-folded member keys for set operations
    member_keys: FxHashSet<String>,
}

impl Group {
    /// Build from a record whose member ids have already been resolved
    /// against the registry. Duplicate members collapse silently, keeping
    /// the first occurrence's position and casing.
    pub(crate) fn from_record(record: GroupRecord) -> Self {
        Self::assemble(record.id, record.name, record.icon, record.canonical, record.member_ids)
    }

    /// Derived-group constructor used by the set operators and `copy`.
    /// Derived groups are never canonical.
    fn derived(name: String, icon: String, member_ids: Vec<String>) -> Self {
        let id = name.clone();
        Self::assemble(id, name, icon, false, member_ids)
    }

    fn assemble(
        id: String,
        name: String,
        icon: String,
        canonical: bool,
        raw_members: Vec<String>,
    ) -> Self {
        let mut member_ids = Vec::with_capacity(raw_members.len());
        let mut member_keys = FxHashSet::default();
        for member in raw_members {
            if member_keys.insert(fold_id(&member)) {
                member_ids.push(member);
            }
        }
        Self { id, name, icon, canonical, member_ids, member_keys }
    }

    /// Identifier in its original casing.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Whether this group belongs to its category's canonical partition.
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Member trait ids in declaration order.
    pub fn member_ids(&self) -> &[String] {
        &self.member_ids
    }

    pub(crate) fn member_keys(&self) -> &FxHashSet<String> {
        &self.member_keys
    }

    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }

    /// Member traits resolved through the registry, in declaration order.
    ///
    /// Restartable; each call re-resolves against the registry's (immutable)
    /// trait objects.
    pub fn items<'r>(&'r self, registry: &'r Registry) -> impl Iterator<Item = &'r Trait> + 'r {
        self.member_ids.iter().filter_map(move |id| registry.trait_by_id(id))
    }

    /// True iff at least one member trait is currently active.
    ///
    /// Short-circuits on the first active member, in declaration order.
    /// Recomputed from trait-level cached values on every call; there is no
    /// separate group-level cache to fall out of sync.
    pub fn current(&self) -> Result<bool> {
        self.current_in(crate::catalog::detection())
    }

    /// Like [`Group::current`], against an explicit cache.
    pub fn current_in(&self, cache: &DetectionCache) -> Result<bool> {
        for id in &self.member_ids {
            if cache.is_current(id)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Membership test. Accepts a trait, a raw id string, or another group
    /// (tested as a subset).
    pub fn contains<'a>(&self, member: impl Into<MemberQuery<'a>>) -> bool {
        match member.into() {
            MemberQuery::Id(id) => self.member_keys.contains(&fold_id(id)),
            MemberQuery::Trait(t) => self.member_keys.contains(t.key()),
            MemberQuery::Group(g) => g.member_keys.is_subset(&self.member_keys),
        }
    }

    /// A derived copy: identical membership, never canonical.
    ///
    /// Canonicity stays with the registry's original instance; `reduce`
    /// always reports that instance, so a copy never needs the flag.
    #[must_use]
    pub fn copy(&self) -> Group {
        Self::assemble(
            self.id.clone(),
            self.name.clone(),
            self.icon.clone(),
            false,
            self.member_ids.clone(),
        )
    }

    /// Override the synthesized name of a derived group.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the synthesized icon of a derived group.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn union(&self, other: impl Members) -> Group {
        let mut members = self.member_ids.clone();
        members.extend(other.ordered_member_ids());
        Group::derived(
            format!("{} | {}", self.name, other.display_name()),
            self.icon.clone(),
            members,
        )
    }

    pub fn intersection(&self, other: impl Members) -> Group {
        let keys = other.key_set();
        let members = self
            .member_ids
            .iter()
            .filter(|id| keys.contains(&fold_id(id)))
            .cloned()
            .collect();
        Group::derived(
            format!("{} & {}", self.name, other.display_name()),
            self.icon.clone(),
            members,
        )
    }

    pub fn difference(&self, other: impl Members) -> Group {
        let keys = other.key_set();
        let members = self
            .member_ids
            .iter()
            .filter(|id| !keys.contains(&fold_id(id)))
            .cloned()
            .collect();
        Group::derived(
            format!("{} - {}", self.name, other.display_name()),
            self.icon.clone(),
            members,
        )
    }

    pub fn symmetric_difference(&self, other: impl Members) -> Group {
        let keys = other.key_set();
        let mut members: Vec<String> = self
            .member_ids
            .iter()
            .filter(|id| !keys.contains(&fold_id(id)))
            .cloned()
            .collect();
        members.extend(
            other
                .ordered_member_ids()
                .into_iter()
                .filter(|id| !self.member_keys.contains(&fold_id(id))),
        );
        Group::derived(
            format!("{} ^ {}", self.name, other.display_name()),
            self.icon.clone(),
            members,
        )
    }
}

/// An operand for group set algebra: another group, or a single trait
/// treated as its singleton group.
pub trait Members {
    fn ordered_member_ids(&self) -> Vec<String>;
    fn key_set(&self) -> FxHashSet<String>;
    fn display_name(&self) -> &str;
}

impl Members for &Group {
    fn ordered_member_ids(&self) -> Vec<String> {
        self.member_ids.clone()
    }

    fn key_set(&self) -> FxHashSet<String> {
        self.member_keys.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Members for &Trait {
    fn ordered_member_ids(&self) -> Vec<String> {
        vec![self.id().to_string()]
    }

    fn key_set(&self) -> FxHashSet<String> {
        std::iter::once(self.key().to_string()).collect()
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

/// Argument to [`Group::contains`]: a raw id, a trait, or a whole group.
pub enum MemberQuery<'a> {
    Id(&'a str),
    Trait(&'a Trait),
    Group(&'a Group),
}

impl<'a> From<&'a str> for MemberQuery<'a> {
    fn from(id: &'a str) -> Self {
        MemberQuery::Id(id)
    }
}

impl<'a> From<&'a String> for MemberQuery<'a> {
    fn from(id: &'a String) -> Self {
        MemberQuery::Id(id)
    }
}

impl<'a> From<&'a Trait> for MemberQuery<'a> {
    fn from(t: &'a Trait) -> Self {
        MemberQuery::Trait(t)
    }
}

impl<'a> From<&'a Group> for MemberQuery<'a> {
    fn from(g: &'a Group) -> Self {
        MemberQuery::Group(g)
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.member_keys == other.member_keys
    }
}

impl Eq for Group {}

impl PartialEq<Trait> for Group {
    fn eq(&self, other: &Trait) -> bool {
        self.member_keys.len() == 1 && self.member_keys.contains(other.key())
    }
}

impl PartialEq<Group> for Trait {
    fn eq(&self, other: &Group) -> bool {
        other == self
    }
}

impl PartialOrd for Group {
    /// Subset ordering: `<=` is subset, `<` is proper subset. Incomparable
    /// (overlapping but non-nested) groups return `None`.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;
        if self.member_keys == other.member_keys {
            Some(Ordering::Equal)
        } else if self.member_keys.is_subset(&other.member_keys) {
            Some(Ordering::Less)
        } else if other.member_keys.is_subset(&self.member_keys) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl PartialOrd<Trait> for Group {
    /// A trait compares as its singleton group.
    fn partial_cmp(&self, other: &Trait) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;
        if self == other {
            Some(Ordering::Equal)
        } else if self.member_keys.contains(other.key()) {
            Some(Ordering::Greater)
        } else if self.member_keys.is_empty() {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

impl PartialOrd<Group> for Trait {
    fn partial_cmp(&self, other: &Group) -> Option<std::cmp::Ordering> {
        other.partial_cmp(self).map(std::cmp::Ordering::reverse)
    }
}

impl BitOr<&Group> for &Group {
    type Output = Group;
    fn bitor(self, rhs: &Group) -> Group {
        self.union(rhs)
    }
}

impl BitOr<&Trait> for &Group {
    type Output = Group;
    fn bitor(self, rhs: &Trait) -> Group {
        self.union(rhs)
    }
}

impl BitAnd<&Group> for &Group {
    type Output = Group;
    fn bitand(self, rhs: &Group) -> Group {
        self.intersection(rhs)
    }
}

impl BitAnd<&Trait> for &Group {
    type Output = Group;
    fn bitand(self, rhs: &Trait) -> Group {
        self.intersection(rhs)
    }
}

impl Sub<&Group> for &Group {
    type Output = Group;
    fn sub(self, rhs: &Group) -> Group {
        self.difference(rhs)
    }
}

impl Sub<&Trait> for &Group {
    type Output = Group;
    fn sub(self, rhs: &Trait) -> Group {
        self.difference(rhs)
    }
}

impl BitXor<&Group> for &Group {
    type Output = Group;
    fn bitxor(self, rhs: &Group) -> Group {
        self.symmetric_difference(rhs)
    }
}

impl BitXor<&Trait> for &Group {
    type Output = Group;
    fn bitxor(self, rhs: &Trait) -> Group {
        self.symmetric_difference(rhs)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}
