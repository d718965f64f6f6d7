// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the campus-search CLI.
//!
//! Results are drawn inside an 80-column box. Colors are picked by role
//! (score tier, match kind, pinned, unavailable) from a dark or light palette;
//! `CAMPUS_SEARCH_THEME=light|dark` overrides the `COLORFGBG` guess. Nothing is
//! styled under `NO_COLOR` or when stdout is not a TTY.

use std::sync::OnceLock;

/// Width between │ and │.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

type Rgb = (u8, u8, u8);

/// What a piece of text is, which decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Border,
    Heading,
    ScoreTop,
    ScoreHigh,
    ScoreMid,
    ScoreLow,
    FieldMatch,
    PathMatch,
    CrossMatch,
    Pinned,
    Unavailable,
    Muted,
}

struct Palette {
    strong: Rgb,
    good: Rgb,
    warm: Rgb,
    accent: Rgb,
    link: Rgb,
    star: Rgb,
    alert: Rgb,
    muted: Rgb,
}

const DARK: Palette = Palette {
    strong: (166, 226, 46),
    good: (152, 195, 121),
    warm: (229, 192, 123),
    accent: (86, 182, 194),
    link: (97, 175, 239),
    star: (198, 120, 221),
    alert: (224, 108, 117),
    muted: (92, 99, 112),
};

const LIGHT: Palette = Palette {
    strong: (68, 140, 39),
    good: (80, 161, 79),
    warm: (193, 132, 1),
    accent: (1, 132, 188),
    link: (64, 120, 242),
    star: (166, 38, 164),
    alert: (228, 86, 73),
    muted: (160, 161, 167),
};

impl Palette {
    /// Escape sequence for a role: optional weight, then a true-color foreground.
    fn style(&self, role: Role) -> String {
        let (weight, (r, g, b)) = match role {
            Role::Border => ("", self.muted),
            Role::Heading => ("\x1b[1m", self.accent),
            Role::ScoreTop => ("", self.strong),
            Role::ScoreHigh => ("", self.good),
            Role::ScoreMid => ("", self.warm),
            Role::ScoreLow => ("", self.muted),
            Role::FieldMatch => ("", self.good),
            Role::PathMatch => ("", self.muted),
            Role::CrossMatch => ("", self.link),
            Role::Pinned => ("\x1b[1m", self.star),
            Role::Unavailable => ("\x1b[1m", self.alert),
            Role::Muted => ("\x1b[2m", self.muted),
        };
        format!("{}\x1b[38;2;{};{};{}m", weight, r, g, b)
    }
}

fn light_terminal() -> bool {
    match std::env::var("CAMPUS_SEARCH_THEME").map(|t| t.to_lowercase()) {
        Ok(t) if t == "light" => return true,
        Ok(t) if t == "dark" => return false,
        _ => {}
    }
    // "fg;bg"; backgrounds 7 and 9..=15 are light
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn palette() -> &'static Palette {
    static LIGHT_TERMINAL: OnceLock<bool> = OnceLock::new();
    if *LIGHT_TERMINAL.get_or_init(light_terminal) {
        &LIGHT
    } else {
        &DARK
    }
}

fn use_colors() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", palette().style(role), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length in chars, excluding ANSI codes.
fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", paint(Role::Border, "│"), content, " ".repeat(pad), paint(Role::Border, "│"));
}

fn labelled_rule(left: &str, label: &str, right: &str) {
    let label_part = format!("─ {} ", paint(Role::Heading, label));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label_part)));
    println!(
        "{}{}{}",
        paint(Role::Border, left),
        label_part,
        paint(Role::Border, &format!("{}{}", fill, right))
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule("┌", label, "┐");
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule("├", label, "┤");
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", paint(Role::Border, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT PIECES
// ═══════════════════════════════════════════════════════════════════════════

fn score_role(score: f64) -> Role {
    if score >= 100.0 {
        Role::ScoreTop
    } else if score >= 50.0 {
        Role::ScoreHigh
    } else if score >= 20.0 {
        Role::ScoreMid
    } else if score >= 0.0 {
        Role::ScoreLow
    } else {
        Role::Unavailable
    }
}

pub fn score_value(score: f64) -> String {
    paint(score_role(score), &format!("{:>7.1}", score))
}

/// Where a result matched: its own field, its folder path, or across both.
pub fn field_label(field: Option<&str>) -> String {
    match field {
        Some("path") => paint(Role::PathMatch, "[path]"),
        Some(name) => paint(Role::FieldMatch, &format!("[{}]", name)),
        None => paint(Role::CrossMatch, "[cross]"),
    }
}

pub fn pinned_marker(pinned: bool) -> String {
    if pinned {
        paint(Role::Pinned, "★ ")
    } else {
        "  ".to_string()
    }
}

pub fn degraded_badge() -> String {
    paint(Role::Unavailable, "[unavailable]")
}

pub fn dim(text: &str) -> String {
    paint(Role::Muted, text)
}
