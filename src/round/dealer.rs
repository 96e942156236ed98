use crate::card::Card;
use crate::deck::DeckProvider;
use crate::error::ProviderError;
use crate::stats::{Outcome, StatsRecorder};

use super::{RoundEngine, RoundStatus};

/// One observable unit of dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew one card and has not reached a stopping total yet.
    Drew(Card),
    /// The dealer stopped and the round settled with this outcome.
    Settled(Outcome),
    /// Nothing to do: it is not the dealer's turn.
    Idle,
}

impl<P: DeckProvider, R: StatsRecorder> RoundEngine<P, R> {
    /// Advances dealer play by one step.
    ///
    /// While the dealer's value is below 17 each call draws exactly one
    /// card and returns it, leaving the updated state observable before the
    /// next draw — callers rely on the one-card-per-step sequence to animate
    /// or log the dealer's hand. At 17 or more (soft or hard alike) the
    /// round settles: over 21 → dealer bust, otherwise the higher value
    /// wins and equal values push.
    ///
    /// Outside the dealer's turn this is a silent no-op returning
    /// [`DealerStep::Idle`].
    ///
    /// # Errors
    ///
    /// Returns the provider failure after surfacing it in
    /// [`RoundState::last_error`](super::RoundState::last_error); the round
    /// stays unresolved and stops drawing until a new game starts.
    pub async fn dealer_step(&mut self) -> Result<DealerStep, ProviderError> {
        if self.state.status != RoundStatus::Playing
            || self.state.is_player_turn
            || self.state.last_error.is_some()
        {
            return Ok(DealerStep::Idle);
        }
        let Some(deck_id) = self.state.deck_id.clone() else {
            return Ok(DealerStep::Idle);
        };

        let dealer_value = self.state.dealer_hand.value();

        // Dealer draws below 17, stands on any 17 or more.
        if dealer_value < 17 {
            let (card, remaining) = self.draw_one(&deck_id).await?;
            self.state.dealer_hand.add_card(card);
            self.state.remaining_cards = remaining;

            let value = self.state.dealer_hand.value();
            self.state.message =
                format!("The dealer draws {card}. The dealer's hand is worth {value}.");
            return Ok(DealerStep::Drew(card));
        }

        let player_value = self.state.player_hand.value();
        let (status, outcome, message) = if dealer_value > 21 {
            (
                RoundStatus::DealerBust,
                Outcome::Win,
                format!("The dealer goes over 21 with {dealer_value}. You win!"),
            )
        } else if dealer_value > player_value {
            (
                RoundStatus::DealerWin,
                Outcome::Loss,
                format!("The dealer wins with {dealer_value} against your {player_value}."),
            )
        } else if dealer_value < player_value {
            (
                RoundStatus::PlayerWin,
                Outcome::Win,
                format!("You win with {player_value} against the dealer's {dealer_value}!"),
            )
        } else {
            (
                RoundStatus::Push,
                Outcome::Tie,
                format!("Push! You both have {player_value}."),
            )
        };

        self.settle(status, message).await;
        Ok(DealerStep::Settled(outcome))
    }

    /// Runs dealer play to completion.
    ///
    /// Loops [`dealer_step`](Self::dealer_step) until the round settles and
    /// returns the cards the dealer drew, in draw order. Callers that want
    /// to pace the draws should step instead.
    ///
    /// # Errors
    ///
    /// Propagates the first provider failure, leaving the round unresolved.
    pub async fn dealer_play(&mut self) -> Result<Vec<Card>, ProviderError> {
        let mut drawn = Vec::new();

        loop {
            match self.dealer_step().await? {
                DealerStep::Drew(card) => drawn.push(card),
                DealerStep::Settled(_) | DealerStep::Idle => break,
            }
        }

        Ok(drawn)
    }
}
