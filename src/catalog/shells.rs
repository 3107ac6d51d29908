//! Shell traits and families, classified from the `SHELL` basename.

use crate::detect::{shell_basename, DetectionCache, KNOWN_SHELLS};
use crate::types::{Category, GroupRecord, TraitRecord};

pub(super) fn traits() -> Vec<TraitRecord> {
    let shell = |id, name, icon, url| TraitRecord::new(id, name, icon, url, Category::Shell);
    vec![
        shell("bash", "Bash", "💥", "https://www.gnu.org/software/bash"),
        shell("zsh", "Zsh", "🦓", "https://zsh.org"),
        shell("fish", "fish", "🐟", "https://fishshell.com"),
        shell("dash", "dash", "➖", "http://gondor.apana.org.au/~herbert/dash"),
        shell("ksh", "KornShell", "🌽", "http://kornshell.org"),
        shell("tcsh", "tcsh", "🌊", "https://www.tcsh.org"),
        shell("pwsh", "PowerShell", "🔷", "https://learn.microsoft.com/powershell"),
        shell("unknown-shell", "Unknown shell", "❓", ""),
    ]
}

pub(super) fn groups() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new(
            "bourne-shells",
            "Bourne-compatible shells",
            "🐚",
            true,
            ["bash", "zsh", "dash", "ksh"],
        ),
        GroupRecord::new("c-shells", "C shells", "🌊", true, ["tcsh"]),
        GroupRecord::new("alternative-shells", "Alternative shells", "🐟", true, ["fish", "pwsh"]),
        GroupRecord::new("other-shells", "Other shells", "❓", true, ["unknown-shell"]),
        GroupRecord::new(
            "scripting-shells",
            "Scriptable shells",
            "📜",
            false,
            ["bash", "zsh", "fish", "pwsh"],
        ),
    ]
}

pub(super) fn register_probes(cache: &DetectionCache) {
    for &name in KNOWN_SHELLS {
        cache.register(name, move || Ok(shell_basename().as_deref() == Some(name)));
    }
    cache.register("unknown-shell", || {
        Ok(matches!(
            shell_basename().as_deref(),
            Some(base) if !KNOWN_SHELLS.contains(&base)
        ))
    });
}
