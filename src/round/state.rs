//! Per-round game state

use super::rules::ScorePolicy;
use super::validation::AcceptedWord;
use crate::core::normalize;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Root word, accepted words (newest first) and running score
///
/// Only [`start_round`](Self::start_round), [`accept_word`](Self::accept_word)
/// and [`reset_score`](Self::reset_score) mutate it.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    root: String,
    used: VecDeque<String>,
    seen: FxHashSet<String>,
    score: usize,
    round: usize,
    score_policy: ScorePolicy,
}

impl RoundState {
    /// Empty state; no round has started yet
    #[must_use]
    pub fn new(score_policy: ScorePolicy) -> Self {
        Self {
            score_policy,
            ..Self::default()
        }
    }

    /// Begin a new round on `root`, forgetting every used word
    ///
    /// The score is zeroed only under [`ScorePolicy::Reset`].
    pub fn start_round(&mut self, root: &str) {
        self.root = normalize(root);
        self.used.clear();
        self.seen.clear();
        self.round += 1;

        if self.score_policy == ScorePolicy::Reset {
            self.score = 0;
        }
    }

    /// Record an accepted word at the front of the history and add its score
    ///
    /// Returns `false` without touching the state if the word is already in
    /// the history.
    pub fn accept_word(&mut self, word: AcceptedWord) -> bool {
        let key = word.text.to_lowercase();
        if !self.seen.insert(key) {
            return false;
        }

        self.score += word.score_delta;
        self.used.push_front(word.text);
        true
    }

    /// Zero the score without touching the round
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Current root word
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, newest first
    pub fn used_words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    /// Case-insensitive check against the accepted words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_lowercase())
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of rounds started so far (0 before the first)
    #[must_use]
    pub const fn round_number(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn score_policy(&self) -> ScorePolicy {
        self.score_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(text: &str) -> AcceptedWord {
        AcceptedWord {
            text: text.to_string(),
            score_delta: text.chars().count(),
        }
    }

    #[test]
    fn start_round_sets_root() {
        let mut state = RoundState::default();
        assert_eq!(state.round_number(), 0);

        state.start_round("Silkworm");
        assert_eq!(state.root(), "silkworm");
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.used_words().len(), 0);
    }

    #[test]
    fn accept_word_updates_history_and_score() {
        let mut state = RoundState::default();
        state.start_round("silkworm");

        assert!(state.accept_word(accepted("word")));
        assert_eq!(state.used_words().collect::<Vec<_>>(), vec!["word"]);
        assert_eq!(state.score(), 4);
    }

    #[test]
    fn newest_word_first() {
        let mut state = RoundState::default();
        state.start_round("silkworm");
        state.accept_word(accepted("silk"));
        state.accept_word(accepted("worm"));
        state.accept_word(accepted("milks"));

        assert_eq!(
            state.used_words().collect::<Vec<_>>(),
            vec!["milks", "worm", "silk"]
        );
        assert_eq!(state.score(), 13);
    }

    #[test]
    fn duplicate_accept_is_refused() {
        let mut state = RoundState::default();
        state.start_round("silkworm");
        assert!(state.accept_word(accepted("silk")));
        assert!(!state.accept_word(accepted("SILK")));

        assert_eq!(state.used_words().len(), 1);
        assert_eq!(state.score(), 4);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let mut state = RoundState::default();
        state.start_round("silkworm");
        state.accept_word(accepted("silk"));

        assert!(state.contains("silk"));
        assert!(state.contains("SiLk"));
        assert!(!state.contains("worm"));
    }

    #[test]
    fn new_round_clears_words_and_keeps_score() {
        let mut state = RoundState::new(ScorePolicy::Persist);
        state.start_round("silkworm");
        state.accept_word(accepted("word"));

        state.start_round("anything");
        assert_eq!(state.root(), "anything");
        assert_eq!(state.used_words().len(), 0);
        assert!(!state.contains("word"));
        assert_eq!(state.score(), 4);
        assert_eq!(state.round_number(), 2);
    }

    #[test]
    fn new_round_resets_score_under_reset_policy() {
        let mut state = RoundState::new(ScorePolicy::Reset);
        state.start_round("silkworm");
        state.accept_word(accepted("word"));
        assert_eq!(state.score(), 4);

        state.start_round("anything");
        assert_eq!(state.used_words().len(), 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn reset_score_keeps_round() {
        let mut state = RoundState::default();
        state.start_round("silkworm");
        state.accept_word(accepted("silk"));

        state.reset_score();
        assert_eq!(state.score(), 0);
        assert_eq!(state.used_words().collect::<Vec<_>>(), vec!["silk"]);
        assert_eq!(state.root(), "silkworm");
    }
}
