//! Dictionary oracle
//!
//! The validation pipeline only needs one question answered: is this word
//! spelled correctly in this language? Anything that can answer it implements
//! [`Dictionary`], including plain closures.

mod word_list;

pub use word_list::WordListDictionary;

/// Default dictionary language tag
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spell-checking capability queried by the validation pipeline
pub trait Dictionary {
    /// Report whether `word` is a correctly spelled word in `language`
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}
