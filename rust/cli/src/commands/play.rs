//! # Play Command
//!
//! Plays a single hand at the six-max table. Every seat is driven from the
//! same input, either a scripted `--actions` sequence or one action per
//! stdin line. Community cards are revealed as soon as a betting round
//! closes.
//!
//! Scripts use the stored notation (`r160` raises to 160) and may include
//! board tokens, so a recorded `Actions:` line replays the same hand. At
//! the prompt, `raise N` puts N on top of the call.
//!
//! Interactive input is forgiving: an unparseable or illegal action is
//! reported and the same seat is prompted again. A scripted sequence is
//! not; the first rejected action fails the command.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use sixmax_engine::engine::Engine;

use crate::actions::{ParseResult, ScriptAction, parse_action_sequence, parse_player_action};
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Where the next action comes from.
enum Source<'a> {
    Script(VecDeque<ScriptAction>),
    Prompt(&'a mut dyn BufRead),
}

pub fn handle_play_command(
    seed: Option<u64>,
    actions: Option<String>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut source = match actions {
        Some(seq) => Source::Script(
            parse_action_sequence(&seq)
                .map_err(CliError::InvalidInput)?
                .into(),
        ),
        None => Source::Prompt(stdin),
    };

    let seed = super::resolve_seed(seed, config);
    let mut store = super::open_store(config)?;
    let mut eng = Engine::new(config.table(), Some(seed))?;
    let mut hand = eng.start_hand()?;

    writeln!(out, "play: seed={} hand={}", seed, hand.hand_id())?;
    ui::write_table(out, &hand)?;

    while !hand.is_hand_complete() {
        if hand.should_reveal_community_cards() {
            let step = eng.reveal_community_cards(&hand)?;
            writeln!(out, "{}", step.narrative)?;
            hand = step.state;
            continue;
        }
        let Some(seat) = hand.current_actor() else {
            break;
        };

        let action = match &mut source {
            Source::Script(queue) => match queue.pop_front() {
                Some(action) => action.resolve(&hand),
                None => {
                    ui::display_warning(err, "action sequence ended before the hand did")?;
                    writeln!(out, "Hand abandoned.")?;
                    return Ok(());
                }
            },
            Source::Prompt(input) => {
                write!(
                    out,
                    "Seat {} to act, pot {}, {} to call (fold/check/call/bet N/raise N/allin/q): ",
                    seat + 1,
                    hand.pot(),
                    hand.to_call()
                )?;
                out.flush()?;
                match read_stdin_line(&mut **input).map(|line| parse_player_action(&line)) {
                    Some(ParseResult::Action(action)) => action,
                    Some(ParseResult::Invalid(msg)) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                    Some(ParseResult::Quit) | None => {
                        writeln!(out, "Hand abandoned.")?;
                        return Ok(());
                    }
                }
            }
        };

        match eng.act(&hand, action) {
            Ok(step) => {
                writeln!(out, "{}", step.narrative)?;
                hand = step.state;
            }
            Err(e) if matches!(source, Source::Prompt(_)) => {
                ui::write_error(err, &format!("Invalid action: {}", e))?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let settlement = eng.settle(&hand)?;
    ui::write_settlement(out, &settlement.result)?;
    let record = super::save_record(store.as_mut(), &settlement.result)?;
    writeln!(out, "Actions: {}", record.action_sequence)?;
    if store.is_some() {
        tracing::info!(hand_id = %record.id, "hand recorded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(actions: Option<&str>, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes());
        let res = handle_play_command(
            Some(42),
            actions.map(str::to_string),
            &Config::default(),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn scripted_folds_settle_to_the_big_blind() {
        let (res, out, _) = play(Some("f.f.f.f.f"), "");
        assert!(res.is_ok());
        assert!(out.contains("Seat 4 folds"));
        assert!(out.contains("Main pot 60: Seat 3 (60)"));
        assert!(out.contains("Actions: f.f.f.f.f"));
        assert!(out.contains("Player 3: +20"));
    }

    #[test]
    fn scripted_illegal_action_is_an_error() {
        let (res, _, _) = play(Some("x"), "");
        assert!(matches!(res, Err(CliError::Engine(_))));
    }

    #[test]
    fn short_script_abandons_the_hand() {
        let (res, out, err) = play(Some("c.c"), "");
        assert!(res.is_ok());
        assert!(out.contains("Hand abandoned."));
        assert!(err.contains("WARNING"));
    }

    #[test]
    fn prompt_reprompts_after_bad_input() {
        let (res, out, err) = play(None, "shove\ncheck\nfold\nfold\nfold\nfold\nfold\n");
        assert!(res.is_ok());
        assert!(err.contains("Unrecognized action 'shove'"));
        assert!(err.contains("Invalid action"));
        assert!(out.contains("Main pot 60: Seat 3 (60)"));
    }

    #[test]
    fn prompt_quit_and_eof_are_graceful() {
        let (res, out, _) = play(None, "call\nq\n");
        assert!(res.is_ok());
        assert!(out.contains("Seat 4 calls 40"));
        assert!(out.contains("Hand abandoned."));

        let (res, out, _) = play(None, "");
        assert!(res.is_ok());
        assert!(out.contains("Hand abandoned."));
    }

    fn actions_line(out: &str) -> &str {
        out.lines()
            .find_map(|l| l.strip_prefix("Actions: "))
            .unwrap_or_default()
    }

    #[test]
    fn recorded_sequence_replays_the_same_hand() {
        let script = "r160.c.f.f.f.f.b80.r240.c.x.x.x.x";
        let (res, first, _) = play(Some(script), "");
        assert!(res.is_ok(), "{res:?}");
        assert!(first.contains("Seat 4 raises to 160"));
        assert!(first.contains("Seat 5 raises to 240"));
        let recorded = actions_line(&first).to_string();
        assert!(recorded.starts_with("r160.c.f.f.f.f."), "{recorded}");

        let (res, replay, _) = play(Some(&recorded), "");
        assert!(res.is_ok(), "{res:?}");
        assert_eq!(actions_line(&replay), recorded);
        // everything after the header line matches, board and awards included
        let body = |out: &str| out.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(body(&first), body(&replay));
    }

    #[test]
    fn limped_pot_runs_every_street() {
        let script = "c.c.c.c.c.x.x.x.x.x.x.x.x.x.x.x.x.x.x.x.x.x.x.x";
        let (res, out, _) = play(Some(script), "");
        assert!(res.is_ok(), "{res:?}");
        assert!(out.contains("Flop: "));
        assert!(out.contains("Turn: "));
        assert!(out.contains("River: "));
        assert!(out.contains("Main pot 240"));
    }
}
