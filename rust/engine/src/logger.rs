use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{cards_to_string, Card};
use crate::game::{Positions, SEATS};
use crate::pot::PotAward;
use crate::rules::ValidatedAction;

/// A betting street in Texas Hold'em, plus the terminal showdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
    /// Betting is over; pots go to the best hands
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards on the table once this street has been dealt.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }
}

/// Records a single applied action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0-5)
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action as applied, after capping
    pub action: ValidatedAction,
    /// The seat's street total after the action
    pub street_total: u32,
}

/// One entry of the append-only hand log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandEvent {
    Blind { seat: usize, amount: u32 },
    Action(ActionRecord),
    Board { street: Street, cards: Vec<Card> },
}

impl HandEvent {
    /// Human-readable line, seats numbered from one.
    pub fn narrate(&self) -> String {
        match self {
            HandEvent::Blind { seat, amount } => {
                format!("Seat {} posts blind {}", seat + 1, amount)
            }
            HandEvent::Action(rec) => narrate_action(rec),
            HandEvent::Board { street, cards } => {
                let shown: Vec<String> = cards.iter().map(Card::to_string).collect();
                format!("{}: {}", street.name(), shown.join(" "))
            }
        }
    }

    /// Token in the compact action sequence; blinds are implied.
    fn token(&self) -> Option<String> {
        match self {
            HandEvent::Blind { .. } => None,
            HandEvent::Action(rec) => Some(match rec.action {
                ValidatedAction::Fold => "f".to_string(),
                ValidatedAction::Check => "x".to_string(),
                ValidatedAction::Call(_) => "c".to_string(),
                ValidatedAction::Bet(_) => format!("b{}", rec.street_total),
                ValidatedAction::Raise(_) => format!("r{}", rec.street_total),
                ValidatedAction::AllIn(_) => "allin".to_string(),
            }),
            HandEvent::Board { cards, .. } => Some(cards_to_string(cards)),
        }
    }
}

fn narrate_action(rec: &ActionRecord) -> String {
    let seat = rec.seat + 1;
    match rec.action {
        ValidatedAction::Fold => format!("Seat {} folds", seat),
        ValidatedAction::Check => format!("Seat {} checks", seat),
        ValidatedAction::Call(n) => format!("Seat {} calls {}", seat, n),
        ValidatedAction::Bet(_) => format!("Seat {} bets {}", seat, rec.street_total),
        ValidatedAction::Raise(_) => format!("Seat {} raises to {}", seat, rec.street_total),
        ValidatedAction::AllIn(n) => format!(
            "Seat {} is all-in for {} (total {})",
            seat, n, rec.street_total
        ),
    }
}

/// Renders the log in the `c.c.f.r120.3hKdQs.x` notation stored with hands.
pub fn action_sequence(events: &[HandEvent]) -> String {
    events
        .iter()
        .filter_map(HandEvent::token)
        .collect::<Vec<_>>()
        .join(".")
}

/// Outcome of a settled hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_id: String,
    pub starting_stack: u32,
    pub positions: Positions,
    pub hole_cards: [Option<[Card; 2]>; SEATS],
    pub board: Vec<Card>,
    pub events: Vec<HandEvent>,
    pub pots: Vec<PotAward>,
    pub starting_stacks: [u32; SEATS],
    pub final_stacks: [u32; SEATS],
}

impl HandResult {
    /// Per-seat `final - starting` chip change.
    pub fn net(&self) -> [i64; SEATS] {
        std::array::from_fn(|i| i64::from(self.final_stacks[i]) - i64::from(self.starting_stacks[i]))
    }

    pub fn winners(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = self
            .pots
            .iter()
            .flat_map(|p| p.shares.iter().map(|(seat, _)| *seat))
            .collect();
        seats.sort_unstable();
        seats.dedup();
        seats
    }

    /// `"Player 1: AhKh; Player 2: QsQd; ..."`
    pub fn player_hands(&self) -> String {
        self.hole_cards
            .iter()
            .enumerate()
            .map(|(i, hole)| match hole {
                Some(cards) => format!("Player {}: {}", i + 1, cards_to_string(cards)),
                None => format!("Player {}: -", i + 1),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn action_sequence(&self) -> String {
        action_sequence(&self.events)
    }

    /// `"Player 1: +0; Player 2: -40; ..."`
    pub fn winnings(&self) -> String {
        self.net()
            .iter()
            .enumerate()
            .map(|(i, n)| format!("Player {}: {:+}", i + 1, n))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn to_record(&self, created_at: DateTime<Utc>) -> HandRecord {
        HandRecord {
            id: self.hand_id.clone(),
            stack_size: self.starting_stack,
            dealer_position: self.positions.dealer,
            small_blind_position: self.positions.small_blind,
            big_blind_position: self.positions.big_blind,
            player_hands: self.player_hands(),
            action_sequence: self.action_sequence(),
            winnings: self.winnings(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Stored form of a completed hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    /// Unique hand identifier
    pub id: String,
    pub stack_size: u32,
    pub dealer_position: usize,
    pub small_blind_position: usize,
    pub big_blind_position: usize,
    /// Per-seat hole cards summary
    pub player_hands: String,
    /// Compact action sequence, board cards inline
    pub action_sequence: String,
    /// Per-seat net change summary
    pub winnings: String,
    /// Creation time (RFC3339, UTC)
    pub created_at: String,
}
