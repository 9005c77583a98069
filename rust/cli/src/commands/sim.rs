//! Simulation command: auto-plays a run of hands at one table.
//!
//! Every seat follows the passive policy (check when possible, otherwise
//! call). Stacks carry over and the button moves one seat per hand; the run
//! stops early once fewer than two seats have chips.

use crate::config::Config;
use crate::error::CliError;
use sixmax_engine::engine::{Engine, Settlement};
use sixmax_engine::errors::GameError;
use sixmax_engine::player::ActionKind;
use sixmax_engine::state::HandState;
use std::io::Write;

pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = super::resolve_seed(seed, config);
    let mut store = super::open_store(config)?;
    let mut eng = Engine::new(config.table(), Some(seed))?;
    writeln!(out, "sim: hands={} seed={}", hands, seed)?;

    let mut hand = eng.start_hand()?;
    let mut played = 0u32;
    loop {
        let settled = play_passive(&eng, hand)?;
        let record = super::save_record(store.as_mut(), &settled.result)?;
        played += 1;
        let winners: Vec<String> = settled
            .result
            .winners()
            .iter()
            .map(|s| format!("Seat {}", s + 1))
            .collect();
        writeln!(out, "Hand {} {}: {}", played, record.id, winners.join(", "))?;

        if played == hands {
            break;
        }
        hand = match eng.next_hand(&settled.state) {
            Ok(next) => next,
            Err(GameError::NotEnoughPlayers) => {
                writeln!(out, "Table broken after {} hands", played)?;
                break;
            }
            Err(e) => return Err(e.into()),
        };
    }

    tracing::info!(played, seed, "simulation finished");
    writeln!(out, "Simulated {} hands", played)?;
    Ok(())
}

fn play_passive(eng: &Engine, mut hand: HandState) -> Result<Settlement, GameError> {
    while !hand.is_hand_complete() {
        let step = if hand.should_reveal_community_cards() {
            eng.reveal_community_cards(&hand)?
        } else if hand.valid_actions().contains(&ActionKind::Check) {
            eng.check(&hand)?
        } else {
            eng.call(&hand)?
        };
        hand = step.state;
    }
    eng.settle(&hand)
}
