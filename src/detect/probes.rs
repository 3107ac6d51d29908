//! Shared probe helpers: environment classifiers the catalog's per-trait
//! predicates are built from.
//!
//! Each classifier inspects one slice of the environment (os-release,
//! `SHELL`, terminal variables, CI variables) and returns the raw token it
//! found; the per-trait probes in `catalog/` compare against it. Anything
//! the classifiers cannot name falls through to the category's unknown
//! sentinel.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;

/// Override for the os-release path, for tests and unusual roots.
pub(crate) const OS_RELEASE_ENV: &str = "DISCERN_OS_RELEASE";

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Linux distribution ids the catalog models. An os-release id outside this
/// list classifies as `unknown-platform`.
pub(crate) const KNOWN_DISTRIBUTIONS: &[&str] = &[
    "ubuntu", "debian", "fedora", "rhel", "arch", "alpine", "nixos",
];

/// Shell basenames the catalog models.
pub(crate) const KNOWN_SHELLS: &[&str] =
    &["bash", "zsh", "fish", "dash", "ksh", "tcsh", "pwsh"];

/// The running Linux distribution's os-release `ID`, lowercased.
///
/// Returns `Ok(None)` off Linux, or when no os-release file exists (e.g.
/// minimal containers). An unreadable or unparseable file is a probe
/// failure, not an absence.
pub(crate) fn linux_distribution() -> anyhow::Result<Option<String>> {
    if !cfg!(target_os = "linux") && env::var(OS_RELEASE_ENV).is_err() {
        return Ok(None);
    }

    let path = env::var(OS_RELEASE_ENV).unwrap_or_else(|_| OS_RELEASE_PATH.to_string());
    if !Path::new(&path).exists() {
        return Ok(None);
    }

    let contents =
        fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    Ok(parse_os_release_id(&contents))
}

/// Extract the `ID=` field from os-release contents, stripping quotes.
fn parse_os_release_id(contents: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("ID=") {
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            if !value.is_empty() {
                return Some(value.to_lowercase());
            }
        }
    }
    None
}

/// Basename of `$SHELL`, lowercased. `None` when unset or empty.
pub(crate) fn shell_basename() -> Option<String> {
    let shell = env::var("SHELL").ok()?;
    let base = Path::new(&shell).file_name()?.to_str()?;
    if base.is_empty() {
        return None;
    }
    Some(base.to_lowercase())
}

/// The terminal the process runs under, as a catalog trait id.
///
/// Checks the most specific signals first: multiplexer variables, then
/// `TERM_PROGRAM`, then emulator-specific variables, then `TERM` itself.
pub(crate) fn terminal_program() -> Option<&'static str> {
    if env::var_os("TMUX").is_some() {
        return Some("tmux");
    }
    if env::var_os("STY").is_some() {
        return Some("screen");
    }
    if let Ok(program) = env::var("TERM_PROGRAM") {
        match program.as_str() {
            "iTerm.app" => return Some("iterm2"),
            "Apple_Terminal" => return Some("terminal-app"),
            "WezTerm" => return Some("wezterm"),
            "ghostty" => return Some("ghostty"),
            _ => {}
        }
    }
    if env::var_os("KONSOLE_VERSION").is_some() {
        return Some("konsole");
    }
    if env::var_os("GNOME_TERMINAL_SCREEN").is_some() {
        return Some("gnome-terminal");
    }
    if env::var_os("WT_SESSION").is_some() {
        return Some("windows-terminal");
    }
    if env::var_os("KITTY_WINDOW_ID").is_some() {
        return Some("kitty");
    }
    if env::var_os("ALACRITTY_WINDOW_ID").is_some() {
        return Some("alacritty");
    }
    if let Ok(term) = env::var("TERM") {
        if term == "xterm-kitty" {
            return Some("kitty");
        }
        if term == "alacritty" {
            return Some("alacritty");
        }
        if term.starts_with("xterm") {
            return Some("xterm");
        }
    }
    None
}

/// True if any terminal signal at all is present, matched or not.
pub(crate) fn in_terminal() -> bool {
    env::var_os("TERM").is_some() || env::var_os("TERM_PROGRAM").is_some()
}

/// The CI backend the process runs under, as a catalog trait id.
pub(crate) fn ci_backend() -> Option<&'static str> {
    if truthy("GITHUB_ACTIONS") {
        return Some("github-actions");
    }
    if truthy("GITLAB_CI") {
        return Some("gitlab-ci");
    }
    if truthy("CIRCLECI") {
        return Some("circleci");
    }
    if truthy("TRAVIS") {
        return Some("travis");
    }
    if env::var_os("JENKINS_URL").is_some() {
        return Some("jenkins");
    }
    if truthy("TF_BUILD") {
        return Some("azure-pipelines");
    }
    if truthy("APPVEYOR") {
        return Some("appveyor");
    }
    if truthy("BUILDKITE") {
        return Some("buildkite");
    }
    if env::var_os("TEAMCITY_VERSION").is_some() {
        return Some("teamcity");
    }
    if truthy("DRONE") {
        return Some("drone");
    }
    None
}

/// True if any generic CI marker is set, backend identified or not.
pub(crate) fn in_ci() -> bool {
    truthy("CI") || ci_backend().is_some()
}

fn truthy(var: &str) -> bool {
    match env::var(var) {
        Ok(value) => {
            let value = value.to_lowercase();
            value == "1" || value == "true" || value == "yes"
        }
        Err(_) => false,
    }
}
