//! Terminal traits and families, classified from terminal environment
//! variables. Multiplexers win over emulators: inside tmux the outer
//! emulator is invisible anyway.

use crate::detect::{in_terminal, terminal_program, DetectionCache};
use crate::types::{Category, GroupRecord, TraitRecord};

const TERMINALS: &[(&str, &str, &str, &str)] = &[
    ("tmux", "tmux", "🔲", "https://github.com/tmux/tmux"),
    ("screen", "GNU Screen", "🖵", "https://www.gnu.org/software/screen"),
    ("kitty", "kitty", "🐱", "https://sw.kovidgoyal.net/kitty"),
    ("alacritty", "Alacritty", "🚀", "https://alacritty.org"),
    ("wezterm", "WezTerm", "🔳", "https://wezterm.org"),
    ("ghostty", "Ghostty", "👻", "https://ghostty.org"),
    ("xterm", "xterm", "🖥", "https://invisible-island.net/xterm"),
    ("konsole", "Konsole", "🔷", "https://konsole.kde.org"),
    ("gnome-terminal", "GNOME Terminal", "👣", "https://wiki.gnome.org/Apps/Terminal"),
    ("iterm2", "iTerm2", "🍏", "https://iterm2.com"),
    ("terminal-app", "Apple Terminal", "🍎", "https://support.apple.com/guide/terminal"),
    ("windows-terminal", "Windows Terminal", "🪟", "https://aka.ms/terminal"),
];

pub(super) fn traits() -> Vec<TraitRecord> {
    let mut records: Vec<TraitRecord> = TERMINALS
        .iter()
        .map(|&(id, name, icon, url)| TraitRecord::new(id, name, icon, url, Category::Terminal))
        .collect();
    records.push(TraitRecord::new(
        "unknown-terminal",
        "Unknown terminal",
        "❓",
        "",
        Category::Terminal,
    ));
    records
}

pub(super) fn groups() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new("multiplexers", "Terminal multiplexers", "🔲", true, ["tmux", "screen"]),
        GroupRecord::new(
            "gpu-terminals",
            "GPU-accelerated terminals",
            "🚀",
            true,
            ["kitty", "alacritty", "wezterm", "ghostty"],
        ),
        GroupRecord::new(
            "desktop-terminals",
            "Desktop terminals",
            "🖥",
            true,
            ["xterm", "konsole", "gnome-terminal"],
        ),
        GroupRecord::new(
            "macos-terminals",
            "macOS terminals",
            "🍎",
            true,
            ["iterm2", "terminal-app"],
        ),
        GroupRecord::new(
            "windows-terminals",
            "Windows terminals",
            "🪟",
            true,
            ["windows-terminal"],
        ),
        GroupRecord::new("other-terminals", "Other terminals", "❓", true, ["unknown-terminal"]),
    ]
}

pub(super) fn register_probes(cache: &DetectionCache) {
    for &(id, ..) in TERMINALS {
        cache.register(id, move || Ok(terminal_program() == Some(id)));
    }
    cache.register("unknown-terminal", || {
        Ok(in_terminal() && terminal_program().is_none())
    });
}
