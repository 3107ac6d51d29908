//! Operating system and distribution traits and families.
//!
//! Linux distributions are told apart by the os-release `ID` field; the
//! remaining platforms are compile-time targets. The `bsd-family`
//! convenience group deliberately overlaps the canonical `bsd` and `darwin`
//! families: macOS is genealogically a BSD but ships as its own family.

use crate::detect::{linux_distribution, DetectionCache, KNOWN_DISTRIBUTIONS};
use crate::types::{Category, GroupRecord, TraitRecord};

pub(super) fn traits() -> Vec<TraitRecord> {
    let os = |id, name, icon, url| TraitRecord::new(id, name, icon, url, Category::Platform);
    vec![
        os("ubuntu", "Ubuntu", "🟠", "https://ubuntu.com").meta("package_manager", "apt"),
        os("debian", "Debian", "🌀", "https://debian.org").meta("package_manager", "apt"),
        os("fedora", "Fedora", "🎩", "https://fedoraproject.org").meta("package_manager", "dnf"),
        os("rhel", "Red Hat Enterprise Linux", "🎩", "https://redhat.com")
            .meta("package_manager", "dnf"),
        os("arch", "Arch Linux", "🏔", "https://archlinux.org").meta("package_manager", "pacman"),
        os("alpine", "Alpine Linux", "⛰", "https://alpinelinux.org").meta("package_manager", "apk"),
        os("nixos", "NixOS", "❄", "https://nixos.org").meta("package_manager", "nix"),
        os("macos", "macOS", "🍎", "https://apple.com/macos").meta("kernel", "xnu"),
        os("freebsd", "FreeBSD", "😈", "https://freebsd.org").meta("kernel", "freebsd"),
        os("openbsd", "OpenBSD", "🐡", "https://openbsd.org").meta("kernel", "openbsd"),
        os("netbsd", "NetBSD", "🚩", "https://netbsd.org").meta("kernel", "netbsd"),
        os("dragonfly", "DragonFly BSD", "🐉", "https://dragonflybsd.org")
            .meta("kernel", "dragonfly"),
        os("windows", "Windows", "🪟", "https://windows.com").meta("kernel", "nt"),
        os("illumos", "illumos", "☀", "https://illumos.org").meta("kernel", "illumos"),
        os("unknown-platform", "Unknown platform", "❓", ""),
    ]
}

pub(super) fn groups() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new(
            "linux",
            "Linux",
            "🐧",
            true,
            ["ubuntu", "debian", "fedora", "rhel", "arch", "alpine", "nixos"],
        ),
        GroupRecord::new(
            "bsd",
            "BSD",
            "😈",
            true,
            ["freebsd", "openbsd", "netbsd", "dragonfly"],
        ),
        GroupRecord::new("darwin", "Darwin", "🍎", true, ["macos"]),
        GroupRecord::new("nt", "Windows NT", "🪟", true, ["windows"]),
        GroupRecord::new("solarish", "Solarish", "☀", true, ["illumos"]),
        GroupRecord::new(
            "other-platforms",
            "Other platforms",
            "❓",
            true,
            ["unknown-platform"],
        ),
        GroupRecord::new(
            "bsd-family",
            "BSD family",
            "😈",
            false,
            ["freebsd", "openbsd", "netbsd", "dragonfly", "macos"],
        ),
        GroupRecord::new(
            "unix",
            "Unix-like",
            "🐚",
            false,
            [
                "ubuntu", "debian", "fedora", "rhel", "arch", "alpine", "nixos", "macos",
                "freebsd", "openbsd", "netbsd", "dragonfly", "illumos",
            ],
        ),
        GroupRecord::new("debian-based", "Debian based", "🌀", false, ["ubuntu", "debian"]),
    ]
}

pub(super) fn register_probes(cache: &DetectionCache) {
    for &distro in KNOWN_DISTRIBUTIONS {
        cache.register(distro, move || {
            Ok(linux_distribution()?.as_deref() == Some(distro))
        });
    }
    cache.register("macos", || Ok(cfg!(target_os = "macos")));
    cache.register("freebsd", || Ok(cfg!(target_os = "freebsd")));
    cache.register("openbsd", || Ok(cfg!(target_os = "openbsd")));
    cache.register("netbsd", || Ok(cfg!(target_os = "netbsd")));
    cache.register("dragonfly", || Ok(cfg!(target_os = "dragonfly")));
    cache.register("windows", || Ok(cfg!(target_os = "windows")));
    cache.register("illumos", || Ok(cfg!(target_os = "illumos")));
    cache.register("unknown-platform", || {
        if cfg!(target_os = "linux") {
            let known = matches!(
                linux_distribution()?.as_deref(),
                Some(id) if KNOWN_DISTRIBUTIONS.contains(&id)
            );
            Ok(!known)
        } else {
            Ok(!cfg!(any(
                target_os = "macos",
                target_os = "freebsd",
                target_os = "openbsd",
                target_os = "netbsd",
                target_os = "dragonfly",
                target_os = "windows",
                target_os = "illumos",
            )))
        }
    });
}
