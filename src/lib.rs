//! Word Scramble
//!
//! A word game: a random root word is shown and the player spells as many
//! real words as possible from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::round::{Rules, Session};
//!
//! let mut session = Session::with_seed(
//!     vec!["silkworm".to_string()],
//!     WordListDictionary::embedded(),
//!     Rules::default(),
//!     7,
//! );
//! session.new_round();
//!
//! let accepted = session.submit(" Silk ").unwrap().unwrap();
//! assert_eq!(accepted.text, "silk");
//! assert_eq!(session.state().score(), 4);
//!
//! let rejection = session.submit("silk").unwrap_err();
//! assert_eq!(rejection.title(), "Word has been used already");
//! ```

// Core domain types
pub mod core;

// Spell-check oracle
pub mod dictionary;

// Round state and the validation pipeline
pub mod round;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
