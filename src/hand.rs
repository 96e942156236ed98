//! Hand representation and scoring.

use serde::Serialize;

use crate::card::{Card, Rank};

/// Score of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandValue {
    /// The blackjack value of the hand.
    pub value: u8,
    /// Whether the hand is a natural 21 (exactly two cards).
    pub is_blackjack: bool,
}

/// Scores a sequence of cards.
///
/// Every card counts its point value with aces at 11; while the total is
/// over 21, aces are demoted to 1 one at a time. At most one ace can ever
/// count 11 in a hand at or under 21, so the demote loop yields standard
/// soft/hard scoring.
///
/// An empty slice scores 0 and is never a blackjack.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    HandValue {
        value,
        is_blackjack: cards.len() == 2 && value == 21,
    }
}

/// An ordered hand of cards belonging to one party for a round.
///
/// Append-only: cards can be added but never removed or reordered. A new
/// round gets fresh hands. Serializes as a plain card array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().value
    }

    /// Returns whether the hand is a blackjack (natural 21 on two cards).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.evaluate().is_blackjack
    }

    /// Returns whether the hand value exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
