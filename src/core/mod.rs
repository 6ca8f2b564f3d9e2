//! Core domain types for the word game
//!
//! Pure types with no I/O: candidate normalization, the root-word letter
//! multiset, and the rejection taxonomy shown to the player.

mod letters;
mod rejection;

pub use letters::{LetterPool, can_form};
pub use rejection::Rejection;

/// Default root word used whenever no word list is available
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Normalize raw player input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk \n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
