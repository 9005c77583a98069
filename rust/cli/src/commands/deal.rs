//! Deal command: deals one hand and shows the table.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use sixmax_engine::engine::Engine;
use std::io::Write;

/// Deals a fresh hand and prints its id, seed, positions and every seat's
/// hole cards. The same seed always prints the same table.
pub fn handle_deal_command(
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = super::resolve_seed(seed, config);
    let mut eng = Engine::new(config.table(), Some(seed))?;
    let hand = eng.start_hand()?;

    writeln!(out, "Hand {}", hand.hand_id())?;
    writeln!(out, "Seed: {}", seed)?;
    ui::write_table(out, &hand)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), &Config::default(), &mut out1).unwrap();
        handle_deal_command(Some(12345), &Config::default(), &mut out2).unwrap();
        let (out1, out2) = (String::from_utf8(out1).unwrap(), String::from_utf8(out2).unwrap());
        // only the hand id differs
        assert_ne!(out1.lines().next(), out2.lines().next());
        assert!(out1.lines().skip(1).eq(out2.lines().skip(1)));
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &Config::default(), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Hand "));
        assert_eq!(lines[1], "Seed: 999");
        assert_eq!(lines[2], "Dealer: Seat 1  SB: Seat 2  BB: Seat 3");
        assert!(lines[3].starts_with("Seat 1: ") && lines[3].ends_with("stack=10000"));
        assert!(lines[5].ends_with("stack=9960"));
        assert_eq!(lines[9], "Pot: 60");
    }

    #[test]
    fn test_deal_command_uses_configured_seed() {
        let cfg = Config {
            seed: Some(999),
            ..Config::default()
        };
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(None, &cfg, &mut a).unwrap();
        handle_deal_command(Some(999), &Config::default(), &mut b).unwrap();
        let (a, b) = (String::from_utf8(a).unwrap(), String::from_utf8(b).unwrap());
        assert!(a.lines().skip(1).eq(b.lines().skip(1)));
    }
}
