//! Terminal output utilities.
//!
//! Box drawing and the strength meter.

use crossterm::style::{Color, Stylize};
use keypass::StrengthTier;

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

const METER_WIDTH: usize = 20;

fn tier_color(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::VeryWeak => Color::Red,
        StrengthTier::Weak => Color::DarkYellow,
        StrengthTier::Medium => Color::Yellow,
        StrengthTier::Strong => Color::Green,
        StrengthTier::VeryStrong => Color::DarkGreen,
    }
}

/// Uncolored bar for `score`, one cell per five points: [████░░░░...]
pub fn meter(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * METER_WIDTH) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled)
    )
}

/// One summary line: "Score:  87/100 [█████...] Very Strong" with the bar and tier colored.
pub fn strength_line(score: u8) -> String {
    let tier = StrengthTier::from_score(score);
    let color = tier_color(tier);
    format!(
        "Score: {:>3}/100 {} {}",
        score,
        meter(score).with(color),
        tier.label().with(color).bold()
    )
}
