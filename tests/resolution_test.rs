//! Resolution functions over the builtin catalog: ordering, deduplication,
//! case handling, and complete unknown-id reporting.

use discern::{catalog, DiscernError};

#[test]
fn traits_from_ids_round_trips_valid_ids() {
    let registry = catalog::registry();
    let input = ["Ubuntu", "MACOS", "ubuntu", "freebsd"];
    let resolved = registry.traits_from_ids(input).unwrap();
    let ids: Vec<&str> = resolved.iter().map(|t| t.id()).collect();
    // Deduplicated, first-seen order, canonical casing restored.
    assert_eq!(ids, ["ubuntu", "macos", "freebsd"]);
}

#[test]
fn group_ids_expand_to_member_traits_in_declaration_order() {
    let registry = catalog::registry();
    let resolved = registry.traits_from_ids(["multiplexers", "kitty"]).unwrap();
    let ids: Vec<&str> = resolved.iter().map(|t| t.id()).collect();
    assert_eq!(ids, ["tmux", "screen", "kitty"]);
}

#[test]
fn expansion_deduplicates_against_explicit_traits() {
    let registry = catalog::registry();
    let resolved = registry.traits_from_ids(["tmux", "multiplexers"]).unwrap();
    let ids: Vec<&str> = resolved.iter().map(|t| t.id()).collect();
    assert_eq!(ids, ["tmux", "screen"]);
}

#[test]
fn groups_from_ids_accepts_traits_and_groups() {
    let registry = catalog::registry();
    let resolved = registry.groups_from_ids(["macos", "linux"]).unwrap();
    let ids: Vec<&str> = resolved.iter().map(|g| g.id()).collect();
    assert_eq!(ids, ["darwin", "bsd-family", "unix", "linux"]);
}

#[test]
fn every_unknown_token_is_reported_not_just_the_first() {
    let registry = catalog::registry();
    let err = registry
        .traits_from_ids(["ubuntu", "beos", "macos", "amiga", "BeOS"])
        .unwrap_err();
    match err {
        DiscernError::UnknownIds { ids } => assert_eq!(ids, ["beos", "amiga"]),
        other => panic!("expected unknown-ids error, got {other:?}"),
    }
    assert!(registry
        .groups_from_ids(["linux", "plan9"])
        .unwrap_err()
        .is_resolution());
}

#[test]
fn resolution_errors_render_the_full_list() {
    let registry = catalog::registry();
    let err = registry.traits_from_ids(["beos", "amiga"]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("beos"));
    assert!(message.contains("amiga"));
}

#[test]
fn info_projects_every_public_attribute() {
    let registry = catalog::registry();
    let cache = catalog::build_detection();
    let ubuntu = registry.trait_by_id("ubuntu").unwrap();

    let info = ubuntu.info_in(&cache).unwrap();
    assert_eq!(info["id"], "ubuntu");
    assert_eq!(info["name"], "Ubuntu");
    assert_eq!(info["category"], "platform");
    assert_eq!(info["package_manager"], "apt");
    assert!(info["current"].is_boolean());
    assert!(info.contains_key("icon"));
    assert!(info.contains_key("url"));
}
