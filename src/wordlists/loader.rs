//! Word list loading utilities
//!
//! Provides functions to load root word lists from files, fall back to the
//! embedded list, and pick a random root for a new round.

use super::ROOT_WORDS;
use crate::core::DEFAULT_ROOT_WORD;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a word list from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Split word list text into normalized words
///
/// One word per line; lines are trimmed and lowercased, blank lines dropped.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Read a word list file with one word per line
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Empty`] if it holds no words.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// Load root words from a file
///
/// # Errors
///
/// Same as [`load_words`].
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::load_root_words;
///
/// let words = load_root_words("data/start.txt").unwrap();
/// println!("Loaded {} root words", words.len());
/// ```
pub fn load_root_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let words = load_words(path)?;

    log::info!("Loaded {} root words from {}", words.len(), path.display());
    Ok(words)
}

/// The root word list compiled into the binary
#[must_use]
pub fn embedded_root_words() -> Vec<String> {
    ROOT_WORDS.iter().map(|&word| word.to_string()).collect()
}

/// Load root words from `path`, degrading to the embedded list on failure
///
/// `None` selects the embedded list directly. A missing or empty file is
/// logged and never stops the game from starting.
#[must_use]
pub fn load_or_default(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return embedded_root_words();
    };

    match load_root_words(path) {
        Ok(words) => words,
        Err(e) => {
            log::warn!("{e}; using the built-in root words");
            embedded_root_words()
        }
    }
}

/// Pick a root word uniformly at random
///
/// Falls back to [`DEFAULT_ROOT_WORD`] when `words` is empty so a round can
/// always start.
pub fn choose_root<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    words.choose(rng).map_or_else(
        || {
            log::warn!("No root words available; using '{DEFAULT_ROOT_WORD}'");
            DEFAULT_ROOT_WORD.to_string()
        },
        Clone::clone,
    )
}
