//! Formatting utilities for terminal output

use crate::search::Ladder;

/// The edit between two consecutive ladder words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepChange {
    /// Symbols before the changed position
    pub prefix: String,
    /// Symbol removed from the previous word
    pub from: char,
    /// Symbol introduced in this word
    pub to: char,
    /// Symbols after the changed position
    pub suffix: String,
}

/// Locate the single changed symbol between `prev` and `next`
///
/// Returns `None` unless the words are exactly one edit apart.
#[must_use]
pub fn step_change(prev: &str, next: &str) -> Option<StepChange> {
    let prev_symbols: Vec<char> = prev.chars().collect();
    let next_symbols: Vec<char> = next.chars().collect();
    if prev_symbols.len() != next_symbols.len() {
        return None;
    }

    let mut diffs = prev_symbols
        .iter()
        .zip(&next_symbols)
        .enumerate()
        .filter(|(_, (a, b))| a != b);

    let (position, (&from, &to)) = diffs.next()?;
    if diffs.next().is_some() {
        return None;
    }

    Some(StepChange {
        prefix: next_symbols[..position].iter().collect(),
        from,
        to,
        suffix: next_symbols[position + 1..].iter().collect(),
    })
}

/// Format a ladder with a custom separator
#[must_use]
pub fn format_ladder(ladder: &Ladder, separator: &str) -> String {
    ladder.join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
