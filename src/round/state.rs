//! Round state types.

use serde::Serialize;

use crate::deck::DeckId;
use crate::hand::Hand;
use crate::stats::Outcome;

/// Status of a round. Exactly one holds at any time.
///
/// Terminal statuses are absorbing until the next
/// [`new_game`](crate::round::RoundEngine::new_game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    /// No round has been started yet.
    Idle,
    /// The round is live and has not been scored.
    Playing,
    /// Player won with a natural 21.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished with the higher value.
    PlayerWin,
    /// Dealer finished with the higher value, or dealt a blackjack.
    DealerWin,
    /// Equal values.
    Push,
}

impl RoundStatus {
    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Idle | Self::Playing)
    }

    /// Maps a terminal status to the outcome reported to statistics.
    ///
    /// `None` for [`Idle`](Self::Idle) and [`Playing`](Self::Playing).
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Idle | Self::Playing => None,
            Self::PlayerBlackjack => Some(Outcome::Blackjack),
            Self::PlayerBust => Some(Outcome::Bust),
            Self::DealerBust | Self::PlayerWin => Some(Outcome::Win),
            Self::DealerWin => Some(Outcome::Loss),
            Self::Push => Some(Outcome::Tie),
        }
    }
}

/// Full state of one round, as consumed by the presentation layer.
///
/// Only [`RoundEngine`](crate::round::RoundEngine) operations mutate it;
/// callers observe it through shared references after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    /// Handle to the provider-held deck, once a game has started.
    pub deck_id: Option<DeckId>,
    /// Cards left in the deck after the latest draw.
    pub remaining_cards: u32,
    /// The player's cards.
    pub player_hand: Hand,
    /// The dealer's cards.
    pub dealer_hand: Hand,
    /// Current round status.
    pub status: RoundStatus,
    /// Whether the player may act.
    pub is_player_turn: bool,
    /// User-facing narration of the latest event.
    pub message: String,
    /// Human-readable provider failure, if one has been surfaced.
    ///
    /// While set, the round no longer draws cards; starting a new game is
    /// the only remedy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl RoundState {
    pub(crate) fn idle() -> Self {
        Self {
            deck_id: None,
            remaining_cards: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            status: RoundStatus::Idle,
            is_player_turn: true,
            message: String::from("Welcome to blackjack! Start a new game to play."),
            last_error: None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::idle()
    }
}
