//! Word validation pipeline
//!
//! A pure function from (candidate, round state, dictionary, rules) to a
//! verdict. Checks run in a fixed order and stop at the first failure, so the
//! player always sees the most basic problem first:
//!
//! 1. originality
//! 2. minimum length
//! 3. spellable from the root's letters
//! 4. not the root itself (only when the rules forbid it)
//! 5. known to the dictionary

use super::rules::Rules;
use super::state::RoundState;
use crate::core::{Rejection, can_form, normalize};
use crate::dictionary::Dictionary;

/// A word that passed every check, with the points it earns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub text: String,
    pub score_delta: usize,
}

/// Decide whether `candidate` is a new, valid answer for the current round
///
/// Returns `Ok(None)` when the input is empty after trimming: nothing was
/// submitted, which is not an error. The state is never modified.
///
/// # Errors
///
/// Returns the first [`Rejection`] the candidate runs into.
///
/// # Examples
/// ```
/// use word_scramble::round::{AcceptedWord, RoundState, Rules, validate};
///
/// let mut state = RoundState::default();
/// state.start_round("silkworm");
/// let always = |_: &str, _: &str| true;
///
/// let verdict = validate(" Silk ", &state, &always, &Rules::default());
/// assert_eq!(
///     verdict,
///     Ok(Some(AcceptedWord { text: "silk".into(), score_delta: 4 }))
/// );
/// ```
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    state: &RoundState,
    dictionary: &D,
    rules: &Rules,
) -> Result<Option<AcceptedWord>, Rejection> {
    let word = normalize(candidate);
    if word.is_empty() {
        return Ok(None);
    }

    if state.contains(&word) {
        return Err(Rejection::AlreadyUsed { word });
    }

    let length = word.chars().count();
    if length < rules.min_length {
        return Err(Rejection::TooShort {
            word,
            min_length: rules.min_length,
        });
    }

    if !can_form(state.root(), &word) {
        return Err(Rejection::NotASubword {
            word,
            root: state.root().to_string(),
        });
    }

    if !rules.allow_root_word && word == state.root() {
        return Err(Rejection::RootWord { word });
    }

    if !dictionary.is_valid_spelling(&word, &rules.language) {
        return Err(Rejection::NotARealWord { word });
    }

    Ok(Some(AcceptedWord {
        text: word,
        score_delta: length,
    }))
}
