//! Word-list-backed dictionary
//!
//! Stands in for an operating-system spell checker: a word is spelled
//! correctly when it appears in the list for the requested language.

use super::{DEFAULT_LANGUAGE, Dictionary};
use crate::wordlists::{DICTIONARY, LoadError, load_words};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A set of known words tagged with the language they belong to
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased; blanks are ignored.
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
            language: language.into(),
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::embedded();
    /// assert!(dictionary.is_valid_spelling("silk", "en"));
    /// assert!(!dictionary.is_valid_spelling("mlik", "en"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter(), DEFAULT_LANGUAGE)
    }

    /// Load a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Empty`] if it contains no words.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let dictionary = Self::from_words(load_words(path)?, language);
        log::info!(
            "Loaded {} dictionary words ({}) from {}",
            dictionary.len(),
            dictionary.language,
            path.display()
        );
        Ok(dictionary)
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary knows no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test, ignoring language
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over every known word (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn speaks(&self, language: &str) -> bool {
        primary_subtag(&self.language).eq_ignore_ascii_case(primary_subtag(language))
    }
}

impl Default for WordListDictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.contains(word)
    }
}

/// "en-GB" and "en_US" both answer for "en"
fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_contains_common_words() {
        let dictionary = WordListDictionary::embedded();
        for word in ["silk", "worm", "work", "milk", "slow", "silkworm"] {
            assert!(dictionary.contains(word), "missing '{word}'");
        }
        assert_eq!(dictionary.language(), "en");
    }

    #[test]
    fn embedded_accepts_everyday_words() {
        let dictionary = WordListDictionary::embedded();
        for word in ["bent", "knob", "nook", "tins", "oils", "toes", "silks", "worms"] {
            assert!(dictionary.is_valid_spelling(word, "en"), "rejected '{word}'");
        }
        assert!(dictionary.len() > 50_000);
    }

    #[test]
    fn rejects_misspellings() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_valid_spelling("mlik", "en"));
        assert!(!dictionary.is_valid_spelling("wrom", "en"));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = WordListDictionary::from_words(["Silk"], "en");
        assert!(dictionary.is_valid_spelling("SILK", "en"));
        assert!(dictionary.is_valid_spelling("silk", "en"));
    }

    #[test]
    fn language_mismatch_is_invalid() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        assert!(!dictionary.is_valid_spelling("silk", "fr"));
        assert!(!dictionary.is_valid_spelling("silk", "de-DE"));
    }

    #[test]
    fn regional_tags_match_primary_language() {
        let dictionary = WordListDictionary::from_words(["silk"], "en");
        assert!(dictionary.is_valid_spelling("silk", "en-GB"));
        assert!(dictionary.is_valid_spelling("silk", "EN_us"));

        let british = WordListDictionary::from_words(["colour"], "en-GB");
        assert!(british.is_valid_spelling("colour", "en"));
    }

    #[test]
    fn from_words_skips_blanks() {
        let dictionary = WordListDictionary::from_words(["silk", "  ", "", " worm "], "en");
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("worm"));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\nworm\n\n").unwrap();

        let dictionary = WordListDictionary::from_file(file.path(), "en").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_valid_spelling("worm", "en"));
    }

    #[test]
    fn from_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordListDictionary::from_file(dir.path().join("dict.txt"), "en");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn from_file_blank_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        let result = WordListDictionary::from_file(file.path(), "en");
        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }

    #[test]
    fn words_iterates_everything() {
        let dictionary = WordListDictionary::from_words(["silk", "worm"], "en");
        let mut words: Vec<&str> = dictionary.words().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["silk", "worm"]);
    }
}
