//! A playing session: round state plus everything needed to drive it

use super::rules::Rules;
use super::state::RoundState;
use super::validation::{AcceptedWord, validate};
use crate::core::Rejection;
use crate::dictionary::Dictionary;
use crate::wordlists::choose_root;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Owns the round state and applies validation verdicts to it
///
/// Shells talk to the game only through this type.
pub struct Session<D: Dictionary> {
    state: RoundState,
    dictionary: D,
    rules: Rules,
    roots: Vec<String>,
    rng: StdRng,
}

impl<D: Dictionary> Session<D> {
    /// Create a session with an OS-seeded random root picker
    ///
    /// No round is started; call [`new_round`](Self::new_round) or
    /// [`start_with`](Self::start_with).
    pub fn new(roots: Vec<String>, dictionary: D, rules: Rules) -> Self {
        Self::with_rng(roots, dictionary, rules, StdRng::from_os_rng())
    }

    /// Create a session whose root word sequence is reproducible
    pub fn with_seed(roots: Vec<String>, dictionary: D, rules: Rules, seed: u64) -> Self {
        Self::with_rng(roots, dictionary, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roots: Vec<String>, dictionary: D, rules: Rules, rng: StdRng) -> Self {
        Self {
            state: RoundState::new(rules.score_policy),
            dictionary,
            rules,
            roots,
            rng,
        }
    }

    /// Start a new round on a randomly chosen root word
    pub fn new_round(&mut self) -> &str {
        let root = choose_root(&self.roots, &mut self.rng);
        self.start_with(&root);
        self.state.root()
    }

    /// Start a new round on a specific root word
    pub fn start_with(&mut self, root: &str) {
        self.state.start_round(root);
        log::info!(
            "Round {} started with root '{}' (score {})",
            self.state.round_number(),
            self.state.root(),
            self.state.score()
        );
    }

    /// Validate raw player input and record it if accepted
    ///
    /// `Ok(None)` means the input was blank and nothing happened.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the word does not count.
    pub fn submit(&mut self, raw: &str) -> Result<Option<AcceptedWord>, Rejection> {
        let verdict = validate(raw, &self.state, &self.dictionary, &self.rules);

        match &verdict {
            Ok(Some(accepted)) => {
                self.state.accept_word(accepted.clone());
                log::debug!(
                    "Accepted '{}' (+{}), score {}",
                    accepted.text,
                    accepted.score_delta,
                    self.state.score()
                );
            }
            Ok(None) => log::trace!("Ignored blank input"),
            Err(rejection) => log::debug!("Rejected: {rejection}"),
        }

        verdict
    }

    /// Zero the score without starting a new round
    pub fn reset_score(&mut self) {
        self.state.reset_score();
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Root words new rounds are drawn from
    #[must_use]
    pub fn roots(&self) -> &[String] {
        &self.roots
    }
}
