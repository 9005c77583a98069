//! UI helper functions for terminal output formatting.
//!
//! Seats are shown numbered from one, matching the engine's narratives.

use std::io::Write;

use sixmax_engine::cards::Card;
use sixmax_engine::logger::HandResult;
use sixmax_engine::state::HandState;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

fn spaced(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Button, blinds and every seat's cards and stack.
pub fn write_table(out: &mut dyn Write, hand: &HandState) -> std::io::Result<()> {
    let p = hand.positions();
    writeln!(
        out,
        "Dealer: Seat {}  SB: Seat {}  BB: Seat {}",
        p.dealer + 1,
        p.small_blind + 1,
        p.big_blind + 1
    )?;
    for seat in hand.seats() {
        match seat.hole_pair() {
            Some(cards) => writeln!(
                out,
                "Seat {}: {} stack={}",
                seat.index() + 1,
                spaced(&cards),
                seat.stack()
            )?,
            None => writeln!(out, "Seat {}: sitting out", seat.index() + 1)?,
        }
    }
    writeln!(out, "Pot: {}", hand.pot())
}

/// Board, pot awards and per-seat winnings of a settled hand.
pub fn write_settlement(out: &mut dyn Write, result: &HandResult) -> std::io::Result<()> {
    writeln!(out, "Board: {}", spaced(&result.board))?;
    for (i, pot) in result.pots.iter().enumerate() {
        let label = if i == 0 {
            "Main pot".to_string()
        } else {
            format!("Side pot {}", i)
        };
        let shares: Vec<String> = pot
            .shares
            .iter()
            .map(|(seat, chips)| format!("Seat {} ({})", seat + 1, chips))
            .collect();
        writeln!(out, "{} {}: {}", label, pot.amount, shares.join(", "))?;
    }
    writeln!(out, "Winnings: {}", result.winnings())
}
