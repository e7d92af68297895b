// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for `sitesift search` and `sitesift inspect`.
//!
//! Everything is drawn inside one fixed-width [`Panel`]. Colors use the basic
//! ANSI palette so they follow the terminal's own theme, and are dropped when
//! `NO_COLOR` is set or stdout is not a TTY.

/// Inner width of a panel, between the two `│` borders.
pub const PANEL_WIDTH: usize = 80;

/// Width of the label column in stat and check lines.
const LABEL_WIDTH: usize = 18;

/// Title column width in a result line (rank and score take the rest).
pub const TITLE_WIDTH: usize = 52;

const RESET: &str = "\x1b[0m";

/// What a piece of output means, not what color it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Muted,
    Heading,
    Match,
    Url,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[32m",
            Tone::Warn => "\x1b[33m",
            Tone::Bad => "\x1b[1;31m",
            Tone::Muted => "\x1b[2m",
            Tone::Heading => "\x1b[1;36m",
            Tone::Match => "\x1b[1;33m",
            Tone::Url => "\x1b[4;32m",
        }
    }
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(tone: Tone, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", tone.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printed width of `s`, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut a string to `max` chars, marking the cut with `…`.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// A boxed section of output. Opening prints the header, dropping prints
/// the footer.
pub struct Panel;

impl Panel {
    pub fn open(label: &str) -> Self {
        println!("{}", rule('┌', Some(label), '┐'));
        Panel
    }

    /// Start a new titled block inside the same box.
    pub fn divider(&self, label: &str) {
        println!("{}", rule('├', Some(label), '┤'));
    }

    pub fn line(&self, content: &str) {
        println!("│{}│", pad(content, PANEL_WIDTH));
    }

    /// `  label             value`
    pub fn stat(&self, label: &str, value: impl std::fmt::Display) {
        self.line(&format!("  {}{}", pad(label, LABEL_WIDTH), value));
    }

    /// A catalog check: `ok` when nothing was found, otherwise the count,
    /// red when the problem breaks search and yellow when it only degrades it.
    pub fn check(&self, label: &str, found: usize, breaks_search: bool) {
        let value = match (found, breaks_search) {
            (0, _) => paint(Tone::Good, "ok"),
            (n, true) => paint(Tone::Bad, &n.to_string()),
            (n, false) => paint(Tone::Warn, &n.to_string()),
        };
        self.stat(label, value);
    }

    /// One ranked hit: rank, score and (highlighted) title, with the URL and
    /// preview on indented lines below.
    pub fn hit(&self, rank: usize, score: f64, title: &str, url: &str, preview: &str) {
        self.line(&format!(
            "  {:>2}. {}  {}",
            rank,
            score_value(score),
            pad(title, TITLE_WIDTH)
        ));
        self.line(&format!("       {}", paint(Tone::Url, &clip(url, 70))));
        if !preview.is_empty() {
            self.line(&format!("       {}", paint(Tone::Muted, &clip(preview, 70))));
        }
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        println!("{}", rule('└', None, '┘'));
    }
}

fn rule(left: char, label: Option<&str>, right: char) -> String {
    let head = match label {
        Some(label) => format!("─ {} ", paint(Tone::Heading, label)),
        None => String::new(),
    };
    let fill = PANEL_WIDTH.saturating_sub(visible_len(&head));
    format!("{}{}{}{}", left, head, "─".repeat(fill), right)
}

/// Color-coded score.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.2}", score);
    let tone = if score >= 8.0 {
        Tone::Good
    } else if score >= 3.0 {
        Tone::Warn
    } else {
        Tone::Muted
    };
    paint(tone, &text)
}

/// Query latency against the debounce budget: anything near 200 ms would be
/// felt while typing.
pub fn timing_ms(value: f64) -> String {
    let tone = if value < 16.0 {
        Tone::Good
    } else if value < 100.0 {
        Tone::Warn
    } else {
        Tone::Bad
    };
    paint(tone, &format!("{:.3} ms", value))
}

/// Terminal rendering of a highlight: `<mark>` spans become bold yellow (or
/// `[brackets]` without color) and entities are unescaped.
pub fn terminal_highlight(html: &str) -> String {
    let (open, close) = if use_colors() {
        (Tone::Match.code(), RESET)
    } else {
        ("[", "]")
    };
    html.replace("<mark>", open)
        .replace("</mark>", close)
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
