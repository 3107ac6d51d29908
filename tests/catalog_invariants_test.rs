//! The builtin catalog must satisfy the canonical-partition invariants the
//! reduce engine depends on: per category, canonical families are pairwise
//! disjoint and together cover every trait.

use discern::{catalog, Category, Group, Registry};

fn category_of<'r>(registry: &'r Registry, group: &Group) -> Category {
    let first = group
        .member_ids()
        .first()
        .expect("canonical groups are non-empty");
    registry
        .trait_by_id(first)
        .expect("members resolve")
        .category()
}

#[test]
fn canonical_groups_are_pairwise_disjoint_within_each_category() {
    let registry = catalog::registry();
    let canonical: Vec<&Group> = registry.canonical_groups().collect();

    for (i, g1) in canonical.iter().enumerate() {
        for g2 in &canonical[i + 1..] {
            if category_of(registry, g1) != category_of(registry, g2) {
                continue;
            }
            let overlap = *g1 & *g2;
            assert!(
                overlap.is_empty(),
                "canonical groups '{}' and '{}' share members: {:?}",
                g1.id(),
                g2.id(),
                overlap.member_ids()
            );
        }
    }
}

#[test]
fn canonical_groups_cover_every_trait_of_their_category() {
    let registry = catalog::registry();

    for category in Category::ALL {
        let mut covered: Vec<&str> = Vec::new();
        for group in registry.canonical_groups() {
            if category_of(registry, group) == category {
                covered.extend(group.member_ids().iter().map(String::as_str));
            }
        }
        covered.sort_unstable();

        let mut all: Vec<&str> = registry.traits_in(category).map(|t| t.id()).collect();
        all.sort_unstable();

        assert_eq!(covered, all, "category {category} is not fully partitioned");
    }
}

#[test]
fn each_category_ships_exactly_one_unknown_sentinel() {
    let registry = catalog::registry();
    for category in Category::ALL {
        let sentinels: Vec<&str> = registry
            .traits_in(category)
            .filter(|t| t.is_unknown())
            .map(|t| t.id())
            .collect();
        assert_eq!(sentinels, [category.unknown_id()]);
    }
}

#[test]
fn convenience_groups_may_overlap_canonical_families() {
    let registry = catalog::registry();

    // macOS sits in the canonical darwin family and in the overlapping
    // bsd-family convenience group.
    let bsd_family = registry.group_by_id("bsd-family").unwrap();
    let darwin = registry.group_by_id("darwin").unwrap();
    let bsd = registry.group_by_id("bsd").unwrap();
    assert!(!bsd_family.is_canonical());
    assert!(bsd_family.contains("macos"));
    assert!(!(bsd_family & darwin).is_empty());
    assert!(bsd < bsd_family);
}

#[test]
fn every_builtin_id_resolves_back_to_itself() {
    let registry = catalog::registry();
    for t in registry.traits() {
        assert_eq!(registry.trait_by_id(t.id()).unwrap().id(), t.id());
    }
    for g in registry.groups() {
        assert_eq!(registry.group_by_id(g.id()).unwrap().id(), g.id());
    }
}
