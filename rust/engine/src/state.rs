use serde::{Deserialize, Serialize};

use crate::betting;
use crate::cards::Card;
use crate::deck::Deck;
use crate::game::{Positions, TableConfig, SEATS};
use crate::logger::{HandEvent, Street};
use crate::player::{ActionKind, Seat};
use crate::rules::valid_actions;

/// What the caller must reveal before the hand can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reveal {
    /// Deal the next street and resume betting.
    NextStreet,
    /// No further betting is possible: deal every remaining street.
    RunOut,
}

/// Immutable snapshot of one hand.
///
/// Every engine operation borrows a snapshot and returns a new one, so a
/// rejected action can never disturb the state the caller holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    pub(crate) hand_id: String,
    pub(crate) config: TableConfig,
    pub(crate) positions: Positions,
    pub(crate) seats: [Seat; SEATS],
    pub(crate) starting_stacks: [u32; SEATS],
    pub(crate) deck: Deck,
    pub(crate) board: Vec<Card>,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    pub(crate) street: Street,
    pub(crate) current: Option<usize>,
    pub(crate) pending_reveal: Option<Reveal>,
    pub(crate) events: Vec<HandEvent>,
    pub(crate) settled: bool,
}

impl HandState {
    pub fn hand_id(&self) -> &str {
        &self.hand_id
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn positions(&self) -> Positions {
        self.positions
    }
    pub fn seats(&self) -> &[Seat; SEATS] {
        &self.seats
    }
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }
    /// Stacks as they stood when the hand was dealt.
    pub fn starting_stacks(&self) -> [u32; SEATS] {
        self.starting_stacks
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }
    pub fn pending_reveal(&self) -> Option<Reveal> {
        self.pending_reveal
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seat whose turn it is; `None` while cards await reveal or once the
    /// hand is over.
    pub fn current_actor(&self) -> Option<usize> {
        if self.is_hand_complete() || self.pending_reveal.is_some() {
            None
        } else {
            self.current
        }
    }

    /// Chips the current actor needs to put in to call.
    pub fn to_call(&self) -> u32 {
        self.current_actor()
            .map_or(0, |i| self.current_bet.saturating_sub(self.seats[i].street_bet()))
    }

    pub fn valid_actions(&self) -> Vec<ActionKind> {
        match self.current_actor() {
            Some(i) => {
                let s = &self.seats[i];
                valid_actions(s.stack(), s.street_bet(), self.current_bet)
            }
            None => Vec::new(),
        }
    }

    /// Seats still holding cards.
    pub fn live_seats(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_folded()).count()
    }

    pub fn is_round_complete(&self) -> bool {
        betting::is_round_complete(&self.seats, self.current_bet)
    }

    pub fn is_hand_complete(&self) -> bool {
        self.live_seats() <= 1 || self.street == Street::Showdown
    }

    pub fn should_reveal_community_cards(&self) -> bool {
        !self.settled && self.pending_reveal.is_some()
    }

    /// Pot plus every stack; constant for the whole hand.
    pub fn total_chips(&self) -> u32 {
        self.pot + self.seats.iter().map(Seat::stack).sum::<u32>()
    }
}
