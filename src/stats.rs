//! Round outcome classification and the statistics recorder seam.

use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RecorderError;

/// Classification of a finished round, as consumed by statistics recorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (dealer blackjack or higher value).
    Loss,
    /// Push.
    Tie,
    /// Player wins with a natural 21.
    Blackjack,
    /// Player went over 21.
    Bust,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Tie => "tie",
            Self::Blackjack => "blackjack",
            Self::Bust => "bust",
        })
    }
}

/// External sink for finished-round results.
///
/// Recorders are not assumed idempotent; the engine delivers at most one
/// record per terminal transition. Delivery failures are logged by the
/// engine and never reach game state.
#[async_trait]
pub trait StatsRecorder: Send + Sync {
    /// Records the outcome of one finished round.
    async fn record(
        &self,
        outcome: Outcome,
        player_score: u8,
        dealer_score: u8,
    ) -> Result<(), RecorderError>;
}

#[async_trait]
impl<T: StatsRecorder + ?Sized> StatsRecorder for std::sync::Arc<T> {
    async fn record(
        &self,
        outcome: Outcome,
        player_score: u8,
        dealer_score: u8,
    ) -> Result<(), RecorderError> {
        (**self).record(outcome, player_score, dealer_score).await
    }
}

/// Aggregated player statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Rounds finished.
    pub games_played: u32,
    /// Rounds won, blackjacks included.
    pub games_won: u32,
    /// Rounds lost, busts included.
    pub games_lost: u32,
    /// Rounds pushed.
    pub games_tied: u32,
    /// Rounds won with a natural 21.
    pub blackjacks: u32,
    /// Rounds lost by going over 21.
    pub busts: u32,
    /// Consecutive wins right now. Ties leave the streak untouched.
    pub current_streak: u32,
    /// Longest win streak seen.
    pub longest_streak: u32,
}

impl StatsSummary {
    /// Folds one round outcome into the summary.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.games_played += 1;

        match outcome {
            Outcome::Win | Outcome::Blackjack => {
                self.games_won += 1;
                self.current_streak += 1;
                if self.current_streak > self.longest_streak {
                    self.longest_streak = self.current_streak;
                }
            }
            Outcome::Loss | Outcome::Bust => {
                self.games_lost += 1;
                self.current_streak = 0;
            }
            Outcome::Tie => {
                self.games_tied += 1;
            }
        }

        match outcome {
            Outcome::Blackjack => self.blackjacks += 1,
            Outcome::Bust => self.busts += 1,
            _ => {}
        }
    }

    /// Percentage of rounds won, rounded to the nearest whole number.
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        Self::rate(self.games_won, self.games_played)
    }

    /// Percentage of rounds won by blackjack, rounded to the nearest whole
    /// number.
    #[must_use]
    pub fn blackjack_rate(&self) -> u32 {
        Self::rate(self.blackjacks, self.games_played)
    }

    fn rate(part: u32, whole: u32) -> u32 {
        if whole == 0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "a rounded percentage always fits in u32"
        )]
        let percent = (f64::from(part) / f64::from(whole) * 100.0).round() as u32;
        percent
    }
}

/// Thread-safe in-memory [`StatsRecorder`].
///
/// Keeps a [`StatsSummary`] that callers can snapshot; a stand-in for the
/// account-backed recorder of the full application.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    summary: Mutex<StatsSummary>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current summary.
    #[must_use]
    pub fn snapshot(&self) -> StatsSummary {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, StatsSummary> {
        self.summary.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StatsRecorder for MemoryRecorder {
    async fn record(
        &self,
        outcome: Outcome,
        _player_score: u8,
        _dealer_score: u8,
    ) -> Result<(), RecorderError> {
        self.lock().record_outcome(outcome);
        Ok(())
    }
}
