use crate::deck::DeckProvider;
use crate::error::ProviderError;
use crate::stats::StatsRecorder;

use super::{RoundEngine, RoundState, RoundStatus};

impl<P: DeckProvider, R: StatsRecorder> RoundEngine<P, R> {
    /// Player action: hit (draw one card).
    ///
    /// Outside the player's turn of a live round this is a silent no-op
    /// returning the unchanged state — it models a disabled control, not an
    /// error. Going over 21 settles the round as a bust on the spot; display
    /// pacing is left to the caller, which already holds the busted state
    /// when this returns.
    ///
    /// # Errors
    ///
    /// Returns the provider failure after surfacing it in
    /// [`RoundState::last_error`]; the hand and status stay unchanged.
    pub async fn hit(&mut self) -> Result<&RoundState, ProviderError> {
        if !self.accepts_player_action() {
            return Ok(&self.state);
        }
        let Some(deck_id) = self.state.deck_id.clone() else {
            return Ok(&self.state);
        };

        let (card, remaining) = self.draw_one(&deck_id).await?;
        self.state.player_hand.add_card(card);
        self.state.remaining_cards = remaining;

        let value = self.state.player_hand.value();
        if value > 21 {
            self.settle(
                RoundStatus::PlayerBust,
                format!("You drew {card} and went over 21 with {value}. You lose!"),
            )
            .await;
        } else {
            self.state.message = format!("You drew {card}. Your hand is worth {value}.");
        }

        Ok(&self.state)
    }

    /// Player action: stand (end the player's turn).
    ///
    /// Same silent no-op rule as [`hit`](Self::hit). Dealer play is
    /// caller-driven afterwards: step with
    /// [`dealer_step`](Self::dealer_step) to pace each draw, or run
    /// [`dealer_play`](Self::dealer_play) to completion.
    pub fn stand(&mut self) -> &RoundState {
        if self.accepts_player_action() {
            self.state.is_player_turn = false;
            self.state.message = String::from("You stand. The dealer plays...");
        }
        &self.state
    }
}
