//! Formatting utilities for terminal output

use crate::core::Rejection;

/// Circled number for a word length, like ④ for a four-letter word
///
/// Lengths outside 1..=20 fall back to "(n)".
#[must_use]
pub fn length_badge(length: usize) -> String {
    let circled = u32::try_from(length)
        .ok()
        .filter(|n| (1..=20).contains(n))
        .and_then(|n| char::from_u32(0x2460 + n - 1));

    circled.map_or_else(|| format!("({length})"), String::from)
}

/// One-line "title: message" rendering of a rejection
#[must_use]
pub fn rejection_line(rejection: &Rejection) -> String {
    format!("{}: {}", rejection.title(), rejection.message())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
