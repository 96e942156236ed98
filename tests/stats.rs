//! Statistics summary and recorder tests.

use twentyone::{MemoryRecorder, Outcome, StatsRecorder, StatsSummary};

#[test]
fn summary_counts_outcomes_and_streaks() {
    let mut summary = StatsSummary::default();

    for outcome in [
        Outcome::Win,
        Outcome::Blackjack,
        Outcome::Tie,
        Outcome::Win,
        Outcome::Loss,
        Outcome::Bust,
        Outcome::Win,
    ] {
        summary.record_outcome(outcome);
    }

    assert_eq!(summary.games_played, 7);
    assert_eq!(summary.games_won, 4);
    assert_eq!(summary.games_lost, 2);
    assert_eq!(summary.games_tied, 1);
    assert_eq!(summary.blackjacks, 1);
    assert_eq!(summary.busts, 1);

    // Win, blackjack, then a tie that leaves the streak, then a third win.
    assert_eq!(summary.longest_streak, 3);
    // Loss and bust reset it; the trailing win restarts it.
    assert_eq!(summary.current_streak, 1);
}

#[test]
fn rates_round_to_whole_percentages() {
    let empty = StatsSummary::default();
    assert_eq!(empty.win_rate(), 0);
    assert_eq!(empty.blackjack_rate(), 0);

    let mut summary = StatsSummary::default();
    summary.record_outcome(Outcome::Blackjack);
    summary.record_outcome(Outcome::Win);
    summary.record_outcome(Outcome::Loss);

    // 2 wins of 3 games, 1 blackjack of 3 games.
    assert_eq!(summary.win_rate(), 67);
    assert_eq!(summary.blackjack_rate(), 33);
}

#[tokio::test]
async fn memory_recorder_accumulates_through_the_trait() {
    let recorder = MemoryRecorder::new();

    recorder.record(Outcome::Blackjack, 21, 17).await.unwrap();
    recorder.record(Outcome::Bust, 25, 6).await.unwrap();

    let summary = recorder.snapshot();
    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.games_won, 1);
    assert_eq!(summary.games_lost, 1);
    assert_eq!(summary.blackjacks, 1);
    assert_eq!(summary.busts, 1);
    assert_eq!(summary.current_streak, 0);
    assert_eq!(summary.longest_streak, 1);
}

#[test]
fn summary_serializes_with_original_field_names() {
    let mut summary = StatsSummary::default();
    summary.record_outcome(Outcome::Win);

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["gamesPlayed"], 1);
    assert_eq!(json["gamesWon"], 1);
    assert_eq!(json["currentStreak"], 1);
    assert_eq!(json["longestStreak"], 1);
}
