//! CPU architecture traits and families.

use crate::detect::DetectionCache;
use crate::types::{Category, GroupRecord, TraitRecord};

pub(super) fn traits() -> Vec<TraitRecord> {
    let arch = |id, name, icon, url| TraitRecord::new(id, name, icon, url, Category::Architecture);
    vec![
        arch("x86_64", "x86-64", "🖥", "https://en.wikipedia.org/wiki/X86-64")
            .meta("bits", 64)
            .meta("endian", "little"),
        arch("i686", "x86 (32-bit)", "🖥", "https://en.wikipedia.org/wiki/P6_(microarchitecture)")
            .meta("bits", 32)
            .meta("endian", "little"),
        arch("aarch64", "ARM64", "💪", "https://en.wikipedia.org/wiki/AArch64")
            .meta("bits", 64)
            .meta("endian", "little"),
        arch("armv7", "ARMv7", "💪", "https://en.wikipedia.org/wiki/ARM_architecture_family")
            .meta("bits", 32)
            .meta("endian", "little"),
        arch("riscv64", "RISC-V 64", "🧩", "https://riscv.org")
            .meta("bits", 64)
            .meta("endian", "little"),
        arch("ppc64le", "POWER (little-endian)", "⚡", "https://en.wikipedia.org/wiki/Ppc64")
            .meta("bits", 64)
            .meta("endian", "little"),
        arch("s390x", "IBM Z", "🏛", "https://en.wikipedia.org/wiki/Linux_on_IBM_Z")
            .meta("bits", 64)
            .meta("endian", "big"),
        arch("wasm32", "WebAssembly", "🕸", "https://webassembly.org")
            .meta("bits", 32)
            .meta("endian", "little"),
        arch("unknown-architecture", "Unknown architecture", "❓", ""),
    ]
}

pub(super) fn groups() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new("x86", "x86", "🖥", true, ["i686", "x86_64"]),
        GroupRecord::new("arm", "ARM", "💪", true, ["armv7", "aarch64"]),
        GroupRecord::new("riscv", "RISC-V", "🧩", true, ["riscv64"]),
        GroupRecord::new(
            "other-architectures",
            "Other architectures",
            "❓",
            true,
            ["ppc64le", "s390x", "wasm32", "unknown-architecture"],
        ),
        GroupRecord::new(
            "64bit",
            "64-bit",
            "🖥",
            false,
            ["x86_64", "aarch64", "riscv64", "ppc64le", "s390x"],
        ),
    ]
}

pub(super) fn register_probes(cache: &DetectionCache) {
    cache.register("x86_64", || Ok(cfg!(target_arch = "x86_64")));
    cache.register("i686", || Ok(cfg!(target_arch = "x86")));
    cache.register("aarch64", || Ok(cfg!(target_arch = "aarch64")));
    cache.register("armv7", || Ok(cfg!(target_arch = "arm")));
    cache.register("riscv64", || Ok(cfg!(target_arch = "riscv64")));
    cache.register("ppc64le", || {
        Ok(cfg!(all(target_arch = "powerpc64", target_endian = "little")))
    });
    cache.register("s390x", || Ok(cfg!(target_arch = "s390x")));
    cache.register("wasm32", || Ok(cfg!(target_arch = "wasm32")));
    cache.register("unknown-architecture", || {
        Ok(!cfg!(any(
            target_arch = "x86_64",
            target_arch = "x86",
            target_arch = "aarch64",
            target_arch = "arm",
            target_arch = "riscv64",
            target_arch = "powerpc64",
            target_arch = "s390x",
            target_arch = "wasm32",
        )))
    });
}
