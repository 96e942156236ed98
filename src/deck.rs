//! The deck provider seam and an in-process implementation.

use core::fmt;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ProviderError;

/// Opaque handle to a shuffled deck held by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    /// Creates a deck handle from a provider-issued identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A freshly shuffled deck, as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffledDeck {
    /// Handle for subsequent draws.
    pub deck_id: DeckId,
    /// Cards left in the deck.
    pub remaining: u32,
}

/// The result of drawing cards from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCards {
    /// The drawn cards, in draw order.
    pub cards: Vec<Card>,
    /// Cards left in the deck after the draw.
    pub remaining: u32,
}

/// External service supplying shuffled decks and card draws.
///
/// The engine issues at most one call at a time per round and awaits each
/// to completion, so implementations never see concurrent draws against the
/// same deck from a single round.
#[async_trait]
pub trait DeckProvider: Send + Sync {
    /// Creates and shuffles a fresh deck.
    async fn create_shuffled_deck(&self) -> Result<ShuffledDeck, ProviderError>;

    /// Draws `count` cards from the deck.
    ///
    /// Implementations must fail with [`ProviderError::Exhausted`] rather
    /// than returning fewer cards than requested.
    async fn draw(&self, deck_id: &DeckId, count: usize) -> Result<DrawnCards, ProviderError>;
}

#[async_trait]
impl<T: DeckProvider + ?Sized> DeckProvider for std::sync::Arc<T> {
    async fn create_shuffled_deck(&self) -> Result<ShuffledDeck, ProviderError> {
        (**self).create_shuffled_deck().await
    }

    async fn draw(&self, deck_id: &DeckId, count: usize) -> Result<DrawnCards, ProviderError> {
        (**self).draw(deck_id, count).await
    }
}

/// In-process [`DeckProvider`] backed by seeded ChaCha8 shuffles.
///
/// Useful for tests and offline play. Each created deck is an independent
/// shoe of `decks` packs addressed by a generated identifier. Makes no
/// fairness claims beyond the RNG seed.
pub struct LocalDeck {
    /// Number of 52-card packs per shoe.
    decks: u8,
    /// Live shoes, drawn from the end.
    shoes: Mutex<HashMap<DeckId, Vec<Card>>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LocalDeck {
    /// Creates a provider dealing shoes of `decks` packs from the given seed.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        Self {
            decks: decks.max(1),
            shoes: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn fresh_shoe(&self, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(usize::from(self.decks) * DECK_SIZE);

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Restores a deck to a full, freshly shuffled shoe.
    ///
    /// The handle stays valid; any cards drawn so far return to the shoe.
    pub fn reshuffle(&self, deck_id: &DeckId) -> Result<ShuffledDeck, ProviderError> {
        let mut shoes = lock(&self.shoes);
        let shoe = shoes
            .get_mut(deck_id)
            .ok_or_else(|| ProviderError::UnknownDeck(deck_id.clone()))?;

        let mut rng = lock(&self.rng);
        *shoe = self.fresh_shoe(&mut rng);

        Ok(ShuffledDeck {
            deck_id: deck_id.clone(),
            remaining: shoe.len() as u32,
        })
    }
}

#[async_trait]
impl DeckProvider for LocalDeck {
    async fn create_shuffled_deck(&self) -> Result<ShuffledDeck, ProviderError> {
        let mut rng = lock(&self.rng);
        let id: String = (&mut *rng)
            .sample_iter(Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        let shoe = self.fresh_shoe(&mut rng);
        drop(rng);

        let deck_id = DeckId::new(id);
        let remaining = shoe.len() as u32;
        lock(&self.shoes).insert(deck_id.clone(), shoe);

        Ok(ShuffledDeck { deck_id, remaining })
    }

    async fn draw(&self, deck_id: &DeckId, count: usize) -> Result<DrawnCards, ProviderError> {
        let mut shoes = lock(&self.shoes);
        let shoe = shoes
            .get_mut(deck_id)
            .ok_or_else(|| ProviderError::UnknownDeck(deck_id.clone()))?;

        if shoe.len() < count {
            return Err(ProviderError::Exhausted);
        }

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = shoe.pop() {
                cards.push(card);
            }
        }

        Ok(DrawnCards {
            cards,
            remaining: shoe.len() as u32,
        })
    }
}
