//! Game configuration

use crate::dictionary::DEFAULT_LANGUAGE;

/// Shortest word the game accepts by default
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// What happens to the score when a new round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Score carries over from round to round
    #[default]
    Persist,
    /// Every round starts from zero
    Reset,
}

/// Tunable rules of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Minimum number of characters a word needs
    pub min_length: usize,
    /// Language tag passed to the dictionary
    pub language: String,
    /// Whether the root word itself counts as an answer
    pub allow_root_word: bool,
    pub score_policy: ScorePolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
            allow_root_word: true,
            score_policy: ScorePolicy::Persist,
        }
    }
}
