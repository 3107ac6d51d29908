//! Canonical-partition validation.
//!
//! Canonical groups must partition each category: within a category they are
//! pairwise disjoint and their union covers every trait, including the
//! unknown sentinel. Both properties reduce to one check per trait: it must
//! belong to exactly one canonical group of its category. Every violation is
//! collected; nothing fails fast.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::group::Group;
use crate::traits::Trait;
use crate::types::{fold_id, Category};

pub(super) fn check_canonical_partition(
    traits: &[Trait],
    trait_index: &FxHashMap<String, usize>,
    groups: &[Group],
    problems: &mut Vec<String>,
) {
    let start = Instant::now();
    let canonical: Vec<&Group> = groups.iter().filter(|g| g.is_canonical()).collect();

    for group in &canonical {
        if group.is_empty() {
            problems.push(format!("canonical group '{}' has no members", group.id()));
            continue;
        }
        let mut categories: Vec<Category> = group
            .member_ids()
            .iter()
            .filter_map(|id| trait_index.get(&fold_id(id)))
            .map(|&i| traits[i].category())
            .collect();
        categories.sort();
        categories.dedup();
        if categories.len() > 1 {
            let labels: Vec<&str> = categories.iter().map(Category::label).collect();
            problems.push(format!(
                "canonical group '{}' mixes categories: {}",
                group.id(),
                labels.join(", ")
            ));
        }
    }

    // Coverage is only enforced for categories that declare a canonical
    // partition at all; a trait-only registry stays queryable. Disjointness
    // is always enforced.
    let mut partitioned: Vec<Category> = canonical
        .iter()
        .flat_map(|g| g.member_ids())
        .filter_map(|id| trait_index.get(&fold_id(id)))
        .map(|&i| traits[i].category())
        .collect();
    partitioned.sort();
    partitioned.dedup();

    for t in traits {
        let owners: Vec<&str> = canonical
            .iter()
            .filter(|g| g.contains(t.id()))
            .map(|g| g.id())
            .collect();
        match owners.len() {
            0 if partitioned.contains(&t.category()) => problems.push(format!(
                "trait '{}' is not covered by any canonical group in category {}",
                t.id(),
                t.category()
            )),
            0 | 1 => {}
            _ => problems.push(format!(
                "trait '{}' is covered by {} canonical groups: {}",
                t.id(),
                owners.len(),
                owners.join(", ")
            )),
        }
    }

    for group in groups {
        if !group.is_canonical() && group.is_empty() {
            tracing::debug!(group = group.id(), "empty placeholder group");
        }
    }

    tracing::debug!(
        canonical = canonical.len(),
        elapsed = ?start.elapsed(),
        "canonical partition checked"
    );
}
