//! Reasons a submitted word is turned down
//!
//! All variants are recoverable: the shell shows the (title, message) pair and
//! the round carries on.

use thiserror::Error;

/// Why a candidate word was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The word was already accepted this round
    #[error("'{word}' has already been used")]
    AlreadyUsed { word: String },

    /// The word has fewer letters than the rules require
    #[error("'{word}' is shorter than {min_length} letters")]
    TooShort { word: String, min_length: usize },

    /// The word needs letters the root word does not have (or not enough of them)
    #[error("'{word}' cannot be spelled from '{root}'")]
    NotASubword { word: String, root: String },

    /// The word is the root word itself and the rules forbid that
    #[error("'{word}' is the root word")]
    RootWord { word: String },

    /// The dictionary does not recognise the word
    #[error("'{word}' is not a real word")]
    NotARealWord { word: String },
}

impl Rejection {
    /// Short headline for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed { .. } => "Word has been used already",
            Self::TooShort { .. } => "Word is too short",
            Self::NotASubword { .. } => "Word is not recognised",
            Self::RootWord { .. } => "Word is the root word",
            Self::NotARealWord { .. } => "Word is not real",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed { .. } => "Be more original".to_string(),
            Self::TooShort { .. } => "Have some self respect!".to_string(),
            Self::NotASubword { .. } => {
                "That word doesn't fit into the original word.".to_string()
            }
            Self::RootWord { word } => {
                format!("Find words inside '{word}', not the word itself.")
            }
            Self::NotARealWord { .. } => "That isn't a real word.".to_string(),
        }
    }

    /// The normalized word that was rejected
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::AlreadyUsed { word }
            | Self::TooShort { word, .. }
            | Self::NotASubword { word, .. }
            | Self::RootWord { word }
            | Self::NotARealWord { word } => word,
        }
    }
}
