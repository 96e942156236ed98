//! Interactive CLI round played against the in-process deck provider.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{DealerStep, LocalDeck, MemoryRecorder, RoundEngine, RoundState, RoundStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    println!("Blackjack CLI (h = hit, s = stand, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let recorder = Arc::new(MemoryRecorder::new());
    let mut engine = RoundEngine::new(LocalDeck::new(6, seed), Arc::clone(&recorder));

    loop {
        if let Err(err) = engine.new_game().await {
            println!("Could not start a round: {err}");
            break;
        }
        print_table(engine.state());

        while engine.state().status == RoundStatus::Playing && engine.state().is_player_turn {
            match prompt_line("Action (h/s/q): ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = engine.hit().await {
                        println!("Draw failed: {err}");
                        break;
                    }
                    print_table(engine.state());
                }
                "s" | "stand" => {
                    engine.stand();
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        loop {
            match engine.dealer_step().await {
                Ok(DealerStep::Drew(card)) => println!("Dealer draws {card}."),
                Ok(DealerStep::Settled(_) | DealerStep::Idle) => break,
                Err(err) => {
                    println!("Dealer draw failed: {err}");
                    break;
                }
            }
        }

        print_table(engine.state());

        let stats = recorder.snapshot();
        println!(
            "Record: {} won, {} lost, {} tied (streak {}, best {})",
            stats.games_won,
            stats.games_lost,
            stats.games_tied,
            stats.current_streak,
            stats.longest_streak
        );

        if prompt_line("Play again? (y/n): ") != "y" {
            break;
        }
    }
}

fn print_table(state: &RoundState) {
    let player: Vec<String> = state
        .player_hand
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("You:    {} ({})", player.join(" "), state.player_hand.value());

    // Hide the hole card while the player still acts.
    if state.status == RoundStatus::Playing && state.is_player_turn {
        if let Some(up) = state.dealer_hand.cards().first() {
            println!("Dealer: {up} ??");
        }
    } else {
        let dealer: Vec<String> = state
            .dealer_hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Dealer: {} ({})", dealer.join(" "), state.dealer_hand.value());
    }

    println!("{}", state.message);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
