//! Word lists for the word game
//!
//! Root words and the bundled dictionary are embedded in the binary; a custom
//! root word list can be loaded from disk with [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::{
    LoadError, choose_root, embedded_root_words, load_or_default, load_root_words, load_words,
};
