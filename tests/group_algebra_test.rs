//! Set-algebra laws and comparison semantics over builtin groups.

use discern::catalog;

#[test]
fn union_and_intersection_commute() {
    let registry = catalog::registry();
    let bsd = registry.group_by_id("bsd").unwrap();
    let bsd_family = registry.group_by_id("bsd-family").unwrap();

    assert_eq!(bsd | bsd_family, bsd_family | bsd);
    assert_eq!(bsd & bsd_family, bsd_family & bsd);
}

#[test]
fn difference_and_symmetric_difference_laws() {
    let registry = catalog::registry();
    let a = registry.group_by_id("unix").unwrap();
    let b = registry.group_by_id("bsd-family").unwrap();

    // (A - B) | (A & B) == A
    assert_eq!(&(a - b) | &(a & b), *a);
    // A ^ B == (A - B) | (B - A)
    assert_eq!(a ^ b, &(a - b) | &(b - a));
}

#[test]
fn idempotence() {
    let registry = catalog::registry();
    let linux = registry.group_by_id("linux").unwrap();
    assert_eq!(linux | linux, *linux);
    assert_eq!(linux & linux, *linux);
}

#[test]
fn operations_against_a_single_trait_use_singleton_semantics() {
    let registry = catalog::registry();
    let bsd = registry.group_by_id("bsd").unwrap();
    let bsd_family = registry.group_by_id("bsd-family").unwrap();
    let macos = registry.trait_by_id("macos").unwrap();

    assert_eq!(bsd | macos, *bsd_family);
    assert_eq!(bsd_family - macos, *bsd);

    let only_macos = bsd_family & macos;
    assert_eq!(only_macos.member_ids(), ["macos"]);
    assert!(only_macos == *macos);
}

#[test]
fn derived_groups_are_never_canonical() {
    let registry = catalog::registry();
    let linux = registry.group_by_id("linux").unwrap();
    let empty = linux - linux;

    assert!(empty.is_empty());
    assert!(!empty.is_canonical());
    // Rebuilding a canonical membership through arithmetic does not revive
    // the flag, and neither does copying.
    assert!(!(&(linux - linux) | linux).is_canonical());
    assert!(!linux.copy().is_canonical());
    assert_eq!(linux.copy(), *linux);
}

#[test]
fn subset_comparisons_follow_set_semantics() {
    let registry = catalog::registry();
    let bsd = registry.group_by_id("bsd").unwrap();
    let bsd_family = registry.group_by_id("bsd-family").unwrap();

    assert!(bsd <= bsd_family);
    assert!(bsd < bsd_family);
    assert!(bsd_family >= bsd);
    assert!(bsd_family > bsd);
    assert!(!(bsd < bsd));
    assert!(bsd <= bsd);

    // Overlapping but non-nested groups are incomparable.
    let linux = registry.group_by_id("linux").unwrap();
    let debian_based = registry.group_by_id("debian-based").unwrap();
    let mixed = &(linux - debian_based) | &(bsd_family & bsd);
    assert_eq!(mixed.partial_cmp(linux), None);
    assert_eq!(mixed.partial_cmp(bsd_family), None);
}

#[test]
fn trait_comparisons_treat_the_trait_as_singleton() {
    let registry = catalog::registry();
    let linux = registry.group_by_id("linux").unwrap();
    let ubuntu = registry.trait_by_id("ubuntu").unwrap();
    let macos = registry.trait_by_id("macos").unwrap();

    assert!(*linux > *ubuntu);
    assert!(*ubuntu < *linux);
    assert_eq!(linux.partial_cmp(macos), None);
}

#[test]
fn membership_accepts_ids_traits_and_groups() {
    let registry = catalog::registry();
    let unix = registry.group_by_id("unix").unwrap();
    let bsd = registry.group_by_id("bsd").unwrap();
    let windows = registry.trait_by_id("windows").unwrap();

    assert!(unix.contains("Ubuntu"));
    assert!(unix.contains(registry.trait_by_id("macos").unwrap()));
    assert!(unix.contains(bsd));
    assert!(!unix.contains(windows));
    assert!(!unix.contains("nonexistent-id"));
}

#[test]
fn items_resolves_members_in_declaration_order_and_restarts() {
    let registry = catalog::registry();
    let bsd = registry.group_by_id("bsd").unwrap();

    let first: Vec<&str> = bsd.items(registry).map(|t| t.id()).collect();
    let second: Vec<&str> = bsd.items(registry).map(|t| t.id()).collect();
    assert_eq!(first, ["freebsd", "openbsd", "netbsd", "dragonfly"]);
    assert_eq!(first, second);
}

#[test]
fn groups_of_uses_the_reverse_index() {
    let registry = catalog::registry();
    let macos = registry.trait_by_id("macos").unwrap();
    let families: Vec<&str> = registry.groups_of(macos).iter().map(|g| g.id()).collect();
    assert_eq!(families, ["darwin", "bsd-family", "unix"]);
}
