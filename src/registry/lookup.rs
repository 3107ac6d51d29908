//! The resolution functions.
//!
//! Both functions accept ordered collections mixing trait ids and group ids,
//! with duplicates allowed. Results come back in first-seen order with
//! duplicates removed, and every unrecognized token is reported in a single
//! error rather than failing on the first.

use rustc_hash::FxHashSet;

use crate::error::{DiscernError, Result};
use crate::group::{Group, MemberQuery};
use crate::traits::Trait;
use crate::types::fold_id;

use super::Registry;

impl Registry {
    /// Resolve ids to traits.
    ///
    /// A trait id contributes itself; a group id expands to its member
    /// traits in declaration order. First-seen order, duplicates removed.
    pub fn traits_from_ids<I, S>(&self, ids: I) -> Result<Vec<&Trait>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        let mut unknown = Vec::new();
        let mut unknown_seen = FxHashSet::default();

        for id in ids {
            let id = id.as_ref();
            if let Some(t) = self.trait_by_id(id) {
                if seen.insert(t.key().to_string()) {
                    out.push(t);
                }
            } else if let Some(g) = self.group_by_id(id) {
                for member in g.member_ids() {
                    // Members are validated at build time; resolution
                    // cannot fail here.
                    if let Some(t) = self.trait_by_id(member) {
                        if seen.insert(t.key().to_string()) {
                            out.push(t);
                        }
                    }
                }
            } else if unknown_seen.insert(fold_id(id)) {
                unknown.push(id.to_string());
            }
        }

        if unknown.is_empty() {
            Ok(out)
        } else {
            Err(DiscernError::UnknownIds { ids: unknown })
        }
    }

    /// Resolve ids to groups.
    ///
    /// A group id contributes itself; a trait id contributes every group
    /// containing it, in group declaration order. First-seen order,
    /// duplicates removed.
    pub fn groups_from_ids<I, S>(&self, ids: I) -> Result<Vec<&Group>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        let mut unknown = Vec::new();
        let mut unknown_seen = FxHashSet::default();

        for id in ids {
            let id = id.as_ref();
            if let Some(g) = self.group_by_id(id) {
                if seen.insert(fold_id(g.id())) {
                    out.push(g);
                }
            } else if let Some(t) = self.trait_by_id(id) {
                for &position in self.reverse().containing(t.key()) {
                    let g = &self.groups()[position];
                    if seen.insert(fold_id(g.id())) {
                        out.push(g);
                    }
                }
            } else if unknown_seen.insert(fold_id(id)) {
                unknown.push(id.to_string());
            }
        }

        if unknown.is_empty() {
            Ok(out)
        } else {
            Err(DiscernError::UnknownIds { ids: unknown })
        }
    }

    /// The groups containing a trait (or, for a group query, its strict
    /// containers), via the reverse index in declaration order.
    pub fn groups_of<'a, 'q>(&'a self, member: impl Into<MemberQuery<'q>>) -> Vec<&'a Group> {
        match member.into() {
            MemberQuery::Id(id) => self.groups_containing_key(&fold_id(id)),
            MemberQuery::Trait(t) => self.groups_containing_key(t.key()),
            MemberQuery::Group(g) => self
                .groups()
                .iter()
                .filter(|candidate| candidate.contains(g) && *candidate != g)
                .collect(),
        }
    }

    fn groups_containing_key(&self, key: &str) -> Vec<&Group> {
        self.reverse()
            .containing(key)
            .iter()
            .map(|&position| &self.groups()[position])
            .collect()
    }
}
