//! discern - classify the running environment against a catalog of named
//! traits and trait families.
//!
//! A *trait* is a single detectable fact about the environment: one CPU
//! architecture, one OS distribution, one shell, one terminal, one CI
//! backend. Traits belong to *groups* (families such as "any Linux"), and
//! groups compose with set algebra. A designated subset of groups is
//! *canonical*: within each category they partition the traits, which lets
//! [`Registry::reduce`] rewrite any collection of traits and groups into its
//! smallest equivalent description. Live detection is memoized per process
//! and invalidated in one call.
//!
//! # Example
//!
//! ```
//! use discern::catalog;
//!
//! let registry = catalog::registry();
//!
//! let linux = registry.group_by_id("linux").unwrap();
//! assert!(linux.contains("ubuntu"));
//!
//! // All seven Linux distributions collapse to the one canonical family.
//! let cover = registry
//!     .reduce_ids(["ubuntu", "debian", "fedora", "rhel", "arch", "alpine", "nixos"])
//!     .unwrap();
//! assert_eq!(cover.len(), 1);
//! assert_eq!(cover[0].id(), "linux");
//! ```
//!
//! Live queries go through the detection cache:
//!
//! ```no_run
//! use discern::catalog;
//!
//! let registry = catalog::registry();
//! if registry.group_by_id("linux").unwrap().current()? {
//!     println!("running on some Linux");
//! }
//! # Ok::<(), discern::DiscernError>(())
//! ```

pub mod catalog;
mod detect;
mod error;
mod group;
mod reduce;
mod registry;
mod traits;
mod types;

pub use detect::{DetectionCache, ASSUME_ENV};
pub use error::{DiscernError, Result};
pub use group::{Group, MemberQuery, Members};
pub use reduce::Symbol;
pub use registry::{Registry, RegistryBuilder};
pub use traits::Trait;
pub use types::{Category, GroupRecord, TraitRecord};

/// Clear every cached detection result in the process-global cache.
///
/// The next access to any `current` query runs a fresh probe. There is no
/// partial-invalidation granularity.
pub fn invalidate_caches() {
    catalog::detection().invalidate_caches();
}

/// Every builtin trait that is currently active, in catalog order.
pub fn current_traits() -> Result<Vec<&'static Trait>> {
    let registry = catalog::registry();
    let cache = catalog::detection();
    let mut active = Vec::new();
    for t in registry.traits() {
        if t.current_in(cache)? {
            active.push(t);
        }
    }
    Ok(active)
}

/// The minimal canonical cover of everything currently active: the
/// human-readable answer to "what is this environment".
pub fn current_symbols() -> Result<Vec<Symbol<'static>>> {
    let registry = catalog::registry();
    Ok(registry.reduce(current_traits()?.into_iter().map(Symbol::Trait)))
}
