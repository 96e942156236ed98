//! Round engine and state transitions.

use crate::card::Card;
use crate::deck::{DeckId, DeckProvider};
use crate::error::ProviderError;
use crate::hand::Hand;
use crate::stats::{Outcome, StatsRecorder};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DealerStep;
pub use state::{RoundState, RoundStatus};

/// State machine for one round of blackjack.
///
/// Owns the only mutable [`RoundState`]; every operation mutates it in
/// place and hands back a shared reference for rendering. Cards come from
/// the [`DeckProvider`], one awaited call at a time, and each terminal
/// transition is reported to the [`StatsRecorder`] exactly once.
///
/// Operations take `&mut self`, so a caller can never overlap two of them
/// on the same round; queueing or rejecting rapid user input is the
/// caller's job.
pub struct RoundEngine<P, R> {
    /// External source of shuffled decks and draws.
    provider: P,
    /// External sink for finished-round outcomes.
    recorder: R,
    /// The round being played.
    state: RoundState,
    /// Whether this round's outcome has already been reported.
    reported: bool,
}

impl<P: DeckProvider, R: StatsRecorder> RoundEngine<P, R> {
    /// Creates an engine in the idle state.
    pub fn new(provider: P, recorder: R) -> Self {
        Self {
            provider,
            recorder,
            state: RoundState::idle(),
            reported: false,
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Starts a fresh round: requests a shuffled deck, resets both hands,
    /// and deals the initial four cards.
    ///
    /// Dealt cards interleave player/dealer/player/dealer. If either opening
    /// hand is a blackjack the round settles immediately: both → push,
    /// player only → blackjack win, dealer only → loss.
    ///
    /// # Errors
    ///
    /// Returns the provider failure after surfacing it in
    /// [`RoundState::last_error`]. A failure while creating the deck leaves
    /// the previous round's state in place; a failure during the initial
    /// deal leaves the new round empty-handed and unresponsive until the
    /// next call.
    pub async fn new_game(&mut self) -> Result<&RoundState, ProviderError> {
        let deck = match self.provider.create_shuffled_deck().await {
            Ok(deck) => deck,
            Err(err) => return Err(self.fail(err)),
        };

        self.state = RoundState {
            deck_id: Some(deck.deck_id.clone()),
            remaining_cards: deck.remaining,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            status: RoundStatus::Playing,
            is_player_turn: true,
            message: String::from("Dealing cards..."),
            last_error: None,
        };
        self.reported = false;

        self.deal_initial(&deck.deck_id).await?;
        Ok(&self.state)
    }

    /// Draws the opening four cards in one call and resolves blackjacks.
    async fn deal_initial(&mut self, deck_id: &DeckId) -> Result<(), ProviderError> {
        let drawn = match self.provider.draw(deck_id, 4).await {
            Ok(drawn) => drawn,
            Err(err) => return Err(self.fail(err)),
        };
        if drawn.cards.len() != 4 {
            return Err(self.fail(ProviderError::Malformed(format!(
                "initial deal returned {} cards, expected 4",
                drawn.cards.len()
            ))));
        }

        // One to the player, one to the dealer, repeat.
        self.state.player_hand.add_card(drawn.cards[0]);
        self.state.dealer_hand.add_card(drawn.cards[1]);
        self.state.player_hand.add_card(drawn.cards[2]);
        self.state.dealer_hand.add_card(drawn.cards[3]);
        self.state.remaining_cards = drawn.remaining;

        let player = self.state.player_hand.evaluate();
        let dealer = self.state.dealer_hand.evaluate();

        match (player.is_blackjack, dealer.is_blackjack) {
            (true, true) => {
                self.settle(
                    RoundStatus::Push,
                    String::from("Both hands are a blackjack. Push!"),
                )
                .await;
            }
            (true, false) => {
                self.settle(
                    RoundStatus::PlayerBlackjack,
                    String::from("Blackjack! You win 3:2!"),
                )
                .await;
            }
            (false, true) => {
                self.settle(
                    RoundStatus::DealerWin,
                    String::from("The dealer has a blackjack. You lose."),
                )
                .await;
            }
            (false, false) => {
                self.state.message = format!(
                    "Your hand is worth {}. The dealer shows {}.",
                    player.value, drawn.cards[1]
                );
            }
        }

        Ok(())
    }

    /// Draws a single card, surfacing failures and short responses.
    async fn draw_one(&mut self, deck_id: &DeckId) -> Result<(Card, u32), ProviderError> {
        let drawn = match self.provider.draw(deck_id, 1).await {
            Ok(drawn) => drawn,
            Err(err) => return Err(self.fail(err)),
        };
        let Some(card) = drawn.cards.first().copied() else {
            return Err(self.fail(ProviderError::Malformed(String::from(
                "draw returned no cards",
            ))));
        };
        Ok((card, drawn.remaining))
    }

    /// Whether `hit`/`stand` may act right now.
    fn accepts_player_action(&self) -> bool {
        self.state.status == RoundStatus::Playing
            && self.state.is_player_turn
            && self.state.last_error.is_none()
    }

    /// Surfaces a provider failure on the state and passes it through.
    ///
    /// Status and hands stay untouched; the round stops drawing cards until
    /// a new game starts.
    fn fail(&mut self, err: ProviderError) -> ProviderError {
        self.state.last_error = Some(err.to_string());
        err
    }

    /// Moves to a terminal status, closes the player's turn, and reports
    /// the outcome.
    async fn settle(&mut self, status: RoundStatus, message: String) {
        self.state.status = status;
        self.state.is_player_turn = false;
        self.state.message = message;

        if let Some(outcome) = status.outcome() {
            self.report(outcome).await;
        }
    }

    /// Delivers the outcome to the recorder at most once per round.
    ///
    /// Fire-and-forget: a recorder failure is logged and never rolls back
    /// or blocks game state.
    async fn report(&mut self, outcome: Outcome) {
        if self.reported {
            return;
        }
        self.reported = true;

        let player_score = self.state.player_hand.value();
        let dealer_score = self.state.dealer_hand.value();

        if let Err(err) = self
            .recorder
            .record(outcome, player_score, dealer_score)
            .await
        {
            log::warn!("failed to record round outcome `{outcome}`: {err}");
        }
    }
}
