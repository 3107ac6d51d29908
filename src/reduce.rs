//! Canonical-cover reduction.
//!
//! Given an arbitrary collection of traits and groups - possibly redundant,
//! possibly overlapping - `reduce` produces the smallest equivalent set of
//! symbols, replacing a canonical group's complete membership with the group
//! itself and leaving everything else as individual traits. Canonical groups
//! are disjoint within a category by registry invariant, so no trait can be
//! claimed twice; processing them in declaration order keeps the output
//! deterministic regardless.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::group::Group;
use crate::registry::Registry;
use crate::traits::Trait;
use crate::types::fold_id;

/// One element of a reduced cover: a registry trait or a registry group.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'a> {
    Trait(&'a Trait),
    Group(&'a Group),
}

impl<'a> Symbol<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Symbol::Trait(t) => t.id(),
            Symbol::Group(g) => g.id(),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Symbol::Trait(t) => t.name(),
            Symbol::Group(g) => g.name(),
        }
    }

    pub fn icon(&self) -> &'a str {
        match self {
            Symbol::Trait(t) => t.icon(),
            Symbol::Group(g) => g.icon(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Symbol::Group(_))
    }
}

impl PartialEq for Symbol<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Symbol::Trait(a), Symbol::Trait(b)) => a == b,
            (Symbol::Group(a), Symbol::Group(b)) => fold_id(a.id()) == fold_id(b.id()),
            _ => false,
        }
    }
}

impl Eq for Symbol<'_> {}

impl<'a> From<&'a Trait> for Symbol<'a> {
    fn from(t: &'a Trait) -> Self {
        Symbol::Trait(t)
    }
}

impl<'a> From<&'a Group> for Symbol<'a> {
    fn from(g: &'a Group) -> Self {
        Symbol::Group(g)
    }
}

impl std::fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Trait(t) => write!(f, "{t}"),
            Symbol::Group(g) => write!(f, "{g}"),
        }
    }
}

impl Registry {
    /// Reduce a collection of traits and groups to its minimal canonical
    /// cover, considering every canonical group as a replacement candidate.
    pub fn reduce<'a>(&'a self, input: impl IntoIterator<Item = Symbol<'a>>) -> Vec<Symbol<'a>> {
        let pool: Vec<&Group> = self.canonical_groups().collect();
        self.reduce_against(input, &pool)
    }

    /// Like [`Registry::reduce`], restricted to the given pool of canonical
    /// replacement groups. Non-canonical pool entries are skipped.
    pub fn reduce_against<'a>(
        &'a self,
        input: impl IntoIterator<Item = Symbol<'a>>,
        target_pool: &[&'a Group],
    ) -> Vec<Symbol<'a>> {
        // Step 1: flatten to the denoted trait-id set, first-seen order.
        let mut order: Vec<&Trait> = Vec::new();
        let mut denoted: FxHashSet<&str> = FxHashSet::default();
        let mut flatten = |t: &'a Trait| {
            if denoted.insert(t.key()) {
                order.push(t);
            }
        };
        for symbol in input {
            match symbol {
                Symbol::Trait(t) => flatten(t),
                Symbol::Group(g) => {
                    for member in g.items(self) {
                        flatten(member);
                    }
                }
            }
        }

        // Step 2: sort the pool into declaration order so the output does
        // not depend on how the caller assembled it.
        let mut pool: Vec<&Group> = target_pool
            .iter()
            .copied()
            .filter(|g| {
                let eligible = g.is_canonical();
                if !eligible {
                    tracing::debug!(group = g.id(), "skipping non-canonical pool entry");
                }
                eligible
            })
            .collect();
        pool.sort_by_key(|g| self.group_position(g).unwrap_or(usize::MAX));
        pool.dedup_by_key(|g| fold_id(g.id()));

        // Step 3: a canonical group whose members are all present absorbs
        // them. Disjointness makes double-claims impossible; the guard
        // keeps the first match authoritative anyway.
        let mut claimed: FxHashMap<&str, usize> = FxHashMap::default();
        for (slot, group) in pool.iter().enumerate() {
            if group.is_empty() || !group.member_keys().iter().all(|k| denoted.contains(k.as_str())) {
                continue;
            }
            for key in group.member_keys() {
                claimed.entry(key.as_str()).or_insert(slot);
            }
        }

        // Step 4: emit in first-seen order; each matched group appears at
        // the position of its earliest member.
        let mut out: Vec<Symbol<'a>> = Vec::new();
        let mut emitted: FxHashSet<usize> = FxHashSet::default();
        for t in order {
            match claimed.get(t.key()) {
                Some(&slot) => {
                    if emitted.insert(slot) {
                        out.push(Symbol::Group(pool[slot]));
                    }
                }
                None => out.push(Symbol::Trait(t)),
            }
        }
        out
    }

    /// Resolve ids (trait or group, mixed, case-insensitive) and reduce the
    /// result. Unknown ids are all reported in one error.
    pub fn reduce_ids<I, S>(&self, ids: I) -> Result<Vec<Symbol<'_>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols = Vec::new();
        let mut unknown = Vec::new();
        let mut unknown_seen = FxHashSet::default();

        for id in ids {
            let id = id.as_ref();
            if let Some(t) = self.trait_by_id(id) {
                symbols.push(Symbol::Trait(t));
            } else if let Some(g) = self.group_by_id(id) {
                symbols.push(Symbol::Group(g));
            } else if unknown_seen.insert(fold_id(id)) {
                unknown.push(id.to_string());
            }
        }

        if !unknown.is_empty() {
            return Err(crate::error::DiscernError::UnknownIds { ids: unknown });
        }
        Ok(self.reduce(symbols))
    }
}
