//! Parsing of player actions typed at the prompt or passed as a compact
//! sequence.

use sixmax_engine::cards::parse_cards;
use sixmax_engine::player::PlayerAction;
use sixmax_engine::state::HandState;

/// Outcome of parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a prompt line (case-insensitive): `fold`, `check`, `call`,
/// `bet N`, `raise N`, `allin`, or `q` to quit. Single-letter forms
/// `f`, `x`, `c` are accepted too.
///
/// # Example
///
/// ```rust
/// # use sixmax_cli::actions::{parse_player_action, ParseResult};
/// use sixmax_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("raise 120"),
///     ParseResult::Action(PlayerAction::Raise(120))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if verb == "q" || verb == "quit" {
        return ParseResult::Quit;
    }

    match verb {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "x" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "raise" => {
            let Some(raw) = parts.get(1) else {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 100')",
                    verb, verb
                ));
            };
            match raw.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(if verb == "bet" {
                    PlayerAction::Bet(amount)
                } else {
                    PlayerAction::Raise(amount)
                }),
                Ok(_) => ParseResult::Invalid(format!("{} amount must be positive", verb)),
                Err(_) => ParseResult::Invalid(format!("Invalid {} amount", verb)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, q",
            verb
        )),
    }
}

/// One token of an action script, in the notation hands are stored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction {
    Fold,
    Check,
    Call,
    AllIn,
    /// Bet to this street total.
    BetTo(u32),
    /// Raise to this street total.
    RaiseTo(u32),
}

impl ScriptAction {
    /// Converts the token into the engine action for the seat to act.
    /// `b`/`r` totals become the amount on top of what the seat has to match.
    pub fn resolve(self, hand: &HandState) -> PlayerAction {
        match self {
            ScriptAction::Fold => PlayerAction::Fold,
            ScriptAction::Check => PlayerAction::Check,
            ScriptAction::Call => PlayerAction::Call,
            ScriptAction::AllIn => PlayerAction::AllIn,
            ScriptAction::BetTo(total) => {
                let street_bet = hand
                    .current_actor()
                    .and_then(|seat| hand.seat(seat))
                    .map_or(0, |seat| seat.street_bet());
                PlayerAction::Bet(total.saturating_sub(street_bet))
            }
            ScriptAction::RaiseTo(total) => {
                PlayerAction::Raise(total.saturating_sub(hand.current_bet()))
            }
        }
    }
}

/// Parses a dot-separated action script such as `c.c.f.r120.3hKdQs.x.b80`.
///
/// Tokens are `f`, `x`, `c`, `allin`, `b<total>` and `r<total>`, the same
/// notation as a stored action sequence, so a recorded hand replays as is.
/// Board tokens are skipped; the engine deals its own cards.
pub fn parse_action_sequence(seq: &str) -> Result<Vec<ScriptAction>, String> {
    seq.split('.')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter_map(|t| parse_token(t).transpose())
        .collect()
}

fn parse_token(token: &str) -> Result<Option<ScriptAction>, String> {
    let amount = |raw: &str| {
        raw.parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| format!("Invalid amount in action '{}'", token))
    };
    let action = match token {
        "f" => ScriptAction::Fold,
        "x" => ScriptAction::Check,
        "c" => ScriptAction::Call,
        "allin" => ScriptAction::AllIn,
        _ => {
            if let Some(raw) = token.strip_prefix('b') {
                ScriptAction::BetTo(amount(raw)?)
            } else if let Some(raw) = token.strip_prefix('r') {
                ScriptAction::RaiseTo(amount(raw)?)
            } else if is_board(token) {
                return Ok(None);
            } else {
                return Err(format!("Unrecognized action '{}'", token));
            }
        }
    };
    Ok(Some(action))
}

fn is_board(token: &str) -> bool {
    matches!(parse_cards(token), Ok(cards) if (1..=5).contains(&cards.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sixmax_engine::engine::Engine;
    use sixmax_engine::game::TableConfig;

    #[test]
    fn prompt_accepts_long_and_short_forms() {
        assert_eq!(parse_player_action("FOLD"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("x"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action(" call "), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("all-in"), ParseResult::Action(PlayerAction::AllIn));
        assert_eq!(
            parse_player_action("bet 300"),
            ParseResult::Action(PlayerAction::Bet(300))
        );
    }

    #[test]
    fn prompt_rejects_missing_or_bad_amounts() {
        assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise lots"), ParseResult::Invalid(_)));
        match parse_player_action("shove") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected invalid, got {other:?}"),
        }
        assert!(matches!(parse_player_action("   "), ParseResult::Invalid(_)));
    }

    #[test]
    fn sequence_parses_every_token() {
        assert_eq!(
            parse_action_sequence("c.x.f.b80.r120.allin").unwrap(),
            vec![
                ScriptAction::Call,
                ScriptAction::Check,
                ScriptAction::Fold,
                ScriptAction::BetTo(80),
                ScriptAction::RaiseTo(120),
                ScriptAction::AllIn,
            ]
        );
        assert!(parse_action_sequence("").unwrap().is_empty());
    }

    #[test]
    fn sequence_skips_board_tokens() {
        assert_eq!(
            parse_action_sequence("c.x.3hKdQs.x.b80.7c").unwrap(),
            vec![
                ScriptAction::Call,
                ScriptAction::Check,
                ScriptAction::Check,
                ScriptAction::BetTo(80),
            ]
        );
    }

    #[test]
    fn totals_resolve_against_the_hand() {
        let mut eng = Engine::new(TableConfig::default(), Some(1)).unwrap();
        let hand = eng.start_hand().unwrap();
        // big blind is 40, so raising to 160 puts 120 on top of the call
        assert_eq!(ScriptAction::RaiseTo(160).resolve(&hand), PlayerAction::Raise(120));
        assert_eq!(ScriptAction::RaiseTo(40).resolve(&hand), PlayerAction::Raise(0));
        assert_eq!(ScriptAction::BetTo(80).resolve(&hand), PlayerAction::Bet(80));
        assert_eq!(ScriptAction::Call.resolve(&hand), PlayerAction::Call);
    }

    #[test]
    fn sequence_reports_the_bad_token() {
        let err = parse_action_sequence("c.q.f").unwrap_err();
        assert!(err.contains("'q'"));
        assert!(parse_action_sequence("b0").is_err());
        assert!(parse_action_sequence("rx").is_err());
        assert!(parse_action_sequence("zz").is_err());
    }
}
