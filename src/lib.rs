//! A blackjack round engine driven by an external deck provider.
//!
//! The crate provides a [`RoundEngine`] that owns all state transitions for
//! one round of blackjack: dealing, hand scoring, player hit/stand, dealer
//! play, and outcome resolution. Shuffling and drawing are delegated to a
//! [`DeckProvider`], and every finished round is reported exactly once to a
//! [`StatsRecorder`].
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{LocalDeck, MemoryRecorder, ProviderError, RoundEngine};
//!
//! # async fn play() -> Result<(), ProviderError> {
//! let mut engine = RoundEngine::new(LocalDeck::new(1, 42), MemoryRecorder::new());
//!
//! engine.new_game().await?;
//! engine.hit().await?;
//! engine.stand();
//! engine.dealer_play().await?;
//!
//! println!("{}", engine.state().message);
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod round;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckId, DeckProvider, DrawnCards, LocalDeck, ShuffledDeck};
pub use error::{ProviderError, RecorderError};
pub use hand::{Hand, HandValue, evaluate};
pub use round::{DealerStep, RoundEngine, RoundState, RoundStatus};
pub use stats::{MemoryRecorder, Outcome, StatsRecorder, StatsSummary};
