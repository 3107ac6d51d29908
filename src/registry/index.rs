//! Reverse trait-to-groups index.
//!
//! Traits never hold references to the groups containing them; the registry
//! owns this auxiliary multimap instead, rebuilt at load time and immutable
//! afterwards. Lookup cost is O(groups containing the trait), not O(all
//! groups).

use rustc_hash::FxHashMap;

use crate::group::Group;
use crate::types::fold_id;

/// Folded trait id -> indices of the groups containing it, in group
/// declaration order.
#[derive(Debug, Default)]
pub(crate) struct ReverseIndex {
    by_trait: FxHashMap<String, Vec<usize>>,
}

impl ReverseIndex {
    /// Build the index from the final group list.
    pub(crate) fn build(groups: &[Group]) -> Self {
        let mut by_trait: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, group) in groups.iter().enumerate() {
            for member in group.member_ids() {
                by_trait.entry(fold_id(member)).or_default().push(position);
            }
        }
        Self { by_trait }
    }

    /// Positions of the groups containing the given (already folded) trait
    /// key, in declaration order.
    pub(crate) fn containing(&self, trait_key: &str) -> &[usize] {
        self.by_trait
            .get(trait_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupRecord;

    fn group(id: &str, members: &[&str]) -> Group {
        Group::from_record(GroupRecord::new(id, id, "⬡", false, members.to_vec()))
    }

    #[test]
    fn containing_preserves_group_declaration_order() {
        let groups = vec![
            group("linux", &["ubuntu", "debian"]),
            group("unix", &["ubuntu", "debian", "freebsd"]),
            group("bsd", &["freebsd"]),
        ];
        let index = ReverseIndex::build(&groups);

        assert_eq!(index.containing("ubuntu"), [0, 1]);
        assert_eq!(index.containing("freebsd"), [1, 2]);
        assert!(index.containing("windows").is_empty());
    }
}
