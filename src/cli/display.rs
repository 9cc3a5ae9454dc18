// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the pagewise CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Answers are drawn in a
//! box with a kind badge and page citations underneath; `--show-chunks` adds
//! the ranked chunks with their scores. `NO_COLOR` and non-TTY stdout turn
//! every escape code off, so piped output is plain text.
//!
//! # Theme detection order
//!
//! 1. `PAGEWISE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use pagewise::AnswerKind;

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
}

fn detect_theme() -> Theme {
    std::env::var("PAGEWISE_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Greedy word wrap to `width` columns. Words longer than a line get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut to `max_chars` characters, ending in "..." if anything was dropped.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{b}│{r} {content}{}{b}│{r}", " ".repeat(pad), b = border(), r = reset());
}

/// One or more rows, wrapped to fit inside the box.
pub fn wrapped_rows(text: &str) {
    for line in wrap(text, BOX_WIDTH - 2) {
        row(&line);
    }
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{r}{label_part}{b}{}┐{r}", "─".repeat(remaining), b = border(), r = reset());
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{r}{label_part}{b}{}┤{r}", "─".repeat(remaining), b = border(), r = reset());
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{b}└{}┘{r}", "─".repeat(BOX_WIDTH), b = border(), r = reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded answer kind badge
pub fn kind_badge(kind: AnswerKind) -> String {
    let label = format!("[{}]", kind.as_str().to_uppercase());
    match kind {
        AnswerKind::Steps => themed(GREEN, &[BOLD], &label),
        AnswerKind::Bullets => themed(BLUE, &[BOLD], &label),
        AnswerKind::Text => themed(MAGENTA, &[BOLD], &label),
    }
}

/// "page 3" / "pages 3, 4"
pub fn pages_label(pages: &[u32]) -> String {
    let list = pages.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
    match pages.len() {
        0 => "no pages".to_string(),
        1 => format!("page {list}"),
        _ => format!("pages {list}"),
    }
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.2}", score);
    if score >= 3.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 1.5 {
        themed(GREEN, &[], &text)
    } else if score >= 0.75 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Color-coded idf value: rare terms bright, common terms dim
pub fn idf_value(idf: f64) -> String {
    let text = format!("{:>6.3}", idf);
    if idf >= 2.0 {
        themed(BRIGHT_GREEN, &[], &text)
    } else if idf >= 1.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(GRAY, &[DIM], &text)
    }
}

pub fn warning(text: &str) -> String {
    themed(YELLOW, &[BOLD], text)
}

pub fn error(text: &str) -> String {
    themed(RED, &[BOLD], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
