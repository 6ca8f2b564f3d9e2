//! Word check command
//!
//! Runs a single word through the validation pipeline against a fresh round.

use crate::core::Rejection;
use crate::dictionary::Dictionary;
use crate::round::{AcceptedWord, RoundState, Rules, validate};

/// Outcome of checking one word against a root
pub struct CheckResult {
    pub root: String,
    pub input: String,
    pub verdict: Result<Option<AcceptedWord>, Rejection>,
}

impl CheckResult {
    /// Whether the word would score
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.verdict, Ok(Some(_)))
    }
}

/// Check whether `word` would be accepted as the first answer of a round on `root`
pub fn check_word<D: Dictionary + ?Sized>(
    root: &str,
    word: &str,
    dictionary: &D,
    rules: &Rules,
) -> CheckResult {
    let mut state = RoundState::new(rules.score_policy);
    state.start_round(root);

    CheckResult {
        root: state.root().to_string(),
        input: word.to_string(),
        verdict: validate(word, &state, dictionary, rules),
    }
}
