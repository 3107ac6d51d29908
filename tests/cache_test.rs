//! Detection cache behavior: memoization, invalidation, error propagation,
//! and the interplay with group aggregates.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use discern::{catalog, DetectionCache, DiscernError, GroupRecord, Registry, TraitRecord};
use serial_test::serial;

fn registry() -> Registry {
    let t = |id| TraitRecord::new(id, id, "⬡", "", discern::Category::Ci);
    Registry::builder()
        .traits([t("a"), t("b"), t("c")])
        .groups([GroupRecord::new("all-three", "All three", "⬡", true, ["a", "b", "c"])])
        .build()
        .unwrap()
}

#[test]
fn cached_values_survive_underlying_condition_changes() {
    let registry = registry();
    let cache = DetectionCache::new();

    let flag = Arc::new(AtomicBool::new(true));
    let probe_flag = flag.clone();
    cache.register("a", move || Ok(probe_flag.load(Ordering::SeqCst)));
    cache.register("b", || Ok(false));
    cache.register("c", || Ok(false));

    let a = registry.trait_by_id("a").unwrap();
    assert!(a.current_in(&cache).unwrap());

    // The environment changed, but the memoized answer stands...
    flag.store(false, Ordering::SeqCst);
    assert!(a.current_in(&cache).unwrap());

    // ...until invalidation, after which the fresh value is observed.
    cache.invalidate_caches();
    assert!(!a.current_in(&cache).unwrap());
}

#[test]
fn group_aggregates_recompute_from_member_caches() {
    let registry = registry();
    let cache = DetectionCache::new();

    let flag = Arc::new(AtomicBool::new(false));
    let probe_flag = flag.clone();
    cache.register("a", move || Ok(probe_flag.load(Ordering::SeqCst)));
    cache.register("b", || Ok(false));
    cache.register("c", || Ok(false));

    let group = registry.group_by_id("all-three").unwrap();
    assert!(!group.current_in(&cache).unwrap());

    // No separate group-level cache exists to go stale: flipping a member
    // and invalidating is enough for the aggregate to change.
    flag.store(true, Ordering::SeqCst);
    assert!(!group.current_in(&cache).unwrap());
    cache.invalidate_caches();
    assert!(group.current_in(&cache).unwrap());
}

#[test]
fn each_probe_runs_once_even_across_group_and_trait_queries() {
    let registry = registry();
    let cache = DetectionCache::new();

    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    cache.register("a", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    });
    cache.register("b", || Ok(true));
    cache.register("c", || Ok(false));

    let group = registry.group_by_id("all-three").unwrap();
    let a = registry.trait_by_id("a").unwrap();

    assert!(group.current_in(&cache).unwrap());
    assert!(!a.current_in(&cache).unwrap());
    assert!(group.current_in(&cache).unwrap());
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn probe_failures_propagate_through_group_queries() {
    let registry = registry();
    let cache = DetectionCache::new();
    cache.register("a", || Ok(false));
    cache.register("b", || anyhow::bail!("detection blew up"));
    cache.register("c", || Ok(true));

    let group = registry.group_by_id("all-three").unwrap();
    let err = group.current_in(&cache).unwrap_err();
    match err {
        DiscernError::Detection { id, .. } => assert_eq!(id, "b"),
        other => panic!("expected detection error, got {other:?}"),
    }
}

#[test]
fn unregistered_probes_error_rather_than_defaulting_false() {
    let registry = registry();
    let cache = DetectionCache::new();
    let a = registry.trait_by_id("a").unwrap();
    assert!(matches!(
        a.current_in(&cache),
        Err(DiscernError::MissingProbe { .. })
    ));
}

#[test]
#[serial]
fn assume_env_forces_listed_traits_on() {
    let cache = catalog::build_detection();

    std::env::set_var(discern::ASSUME_ENV, "drone, teamcity");
    let forced = cache.is_current("drone").unwrap();
    let also_forced = cache.is_current("TeamCity").unwrap();
    std::env::remove_var(discern::ASSUME_ENV);

    assert!(forced);
    assert!(also_forced);
}

#[test]
#[serial]
fn global_invalidation_clears_the_global_cache() {
    let registry = catalog::registry();
    let cache = catalog::detection();

    // Prime, then invalidate; the query must still answer consistently.
    let before = registry.trait_by_id("github-actions").unwrap().current().unwrap();
    assert!(cache.is_cached("github-actions"));
    discern::invalidate_caches();
    assert!(!cache.is_cached("github-actions"));
    let after = registry.trait_by_id("github-actions").unwrap().current().unwrap();
    assert_eq!(before, after);
}
