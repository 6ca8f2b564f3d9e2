//! Round lifecycle and word validation
//!
//! [`RoundState`] holds the root word, used words and score. [`validate`] is a
//! pure decision over that state; [`Session`] applies its verdicts.

mod rules;
mod session;
mod state;
mod validation;

pub use rules::{DEFAULT_MIN_LENGTH, Rules, ScorePolicy};
pub use session::Session;
pub use state::RoundState;
pub use validation::{AcceptedWord, validate};
