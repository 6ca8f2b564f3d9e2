//! Solutions command
//!
//! Enumerates every dictionary word that would be accepted for a root word.

use crate::dictionary::WordListDictionary;
use crate::round::{RoundState, Rules, validate};
use rayon::prelude::*;

/// Every accepted answer for a root word
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word
    pub max_score: usize,
}

impl SolutionsResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Find every dictionary word that `root` accepts under `rules`
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::round::Rules;
///
/// let dictionary = WordListDictionary::embedded();
/// let result = find_solutions("silkworm", &dictionary, &Rules::default());
/// assert!(result.words.iter().any(|w| w == "silk"));
/// ```
#[must_use]
pub fn find_solutions(root: &str, dictionary: &WordListDictionary, rules: &Rules) -> SolutionsResult {
    let mut state = RoundState::new(rules.score_policy);
    state.start_round(root);

    let candidates: Vec<&str> = dictionary.words().collect();
    let mut words: Vec<String> = candidates
        .par_iter()
        .filter_map(|&word| {
            validate(word, &state, dictionary, rules)
                .ok()
                .flatten()
                .map(|accepted| accepted.text)
        })
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|word| word.chars().count()).sum();

    SolutionsResult {
        root: state.root().to_string(),
        words,
        max_score,
    }
}
