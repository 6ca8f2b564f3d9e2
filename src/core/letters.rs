//! Root word letter multiset
//!
//! A candidate is formable from a root word when every one of its letters can
//! be matched against a distinct letter of the root.

use rustc_hash::FxHashMap;

/// Multiset of the letters still available from a root word
///
/// Each letter can be taken at most as many times as it appears in the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `root`
    #[must_use]
    pub fn new(root: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut remaining = 0;
        for ch in root.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }

        Self { counts, remaining }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the pool untouched) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// How many occurrences of `letter` are still available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Consume the letters of `word` in order, stopping at the first letter
    /// that is no longer available
    pub fn spell(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }
}

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::can_form;
///
/// assert!(can_form("silkworm", "silk"));
/// assert!(!can_form("aab", "aaa"));
/// ```
#[must_use]
pub fn can_form(root: &str, candidate: &str) -> bool {
    LetterPool::new(root).spell(candidate)
}
