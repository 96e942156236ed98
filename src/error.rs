//! Error types for the external collaborators.

use thiserror::Error;

use crate::deck::DeckId;

/// Errors surfaced by a [`DeckProvider`](crate::deck::DeckProvider).
///
/// The variants keep "the deck ran out" distinguishable from "the provider
/// could not be reached"; the engine never retries or reshuffles on its own,
/// so callers can decide per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The deck has fewer cards left than the draw requested.
    #[error("deck is out of cards")]
    Exhausted,
    /// The provider does not recognize the deck handle.
    #[error("unknown deck id `{0}`")]
    UnknownDeck(DeckId),
    /// The provider could not be reached or failed mid-request.
    #[error("deck provider unavailable: {0}")]
    Unavailable(String),
    /// The provider answered with data the engine cannot use.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Errors surfaced by a [`StatsRecorder`](crate::stats::StatsRecorder).
///
/// Recording is fire-and-forget: the engine logs these and never lets them
/// touch game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecorderError {
    /// The recorder could not be reached.
    #[error("statistics recorder unavailable: {0}")]
    Unavailable(String),
    /// The recorder refused the update.
    #[error("statistics recorder rejected the update: {0}")]
    Rejected(String),
}
