//! Errors surfaced by game operations.
//!
//! None of these are fatal: each one blocks a single action until the player
//! (or an external grant) changes the situation.

use crate::core::Category;

/// Errors returned by [`GuessEngine`](super::GuessEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no words remaining in category '{category}'")]
    NoWordsRemaining { category: Category },

    #[error("no lives remaining; wait for the daily refill or earn more")]
    LivesExhausted,

    #[error("no round in progress")]
    NoActiveRound,

    #[error("the round is already over")]
    RoundOver,

    #[error("no category switch is awaiting confirmation")]
    NoPendingSwitch,
}
