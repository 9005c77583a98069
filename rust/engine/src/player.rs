use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An action requested by the seat whose turn it is.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if there is nothing to call)
    Check,
    /// Match the current bet
    Call,
    /// Open the betting with the given amount
    Bet(u32),
    /// Raise by the given amount on top of the current bet
    Raise(u32),
    /// Commit the whole remaining stack
    AllIn,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::AllIn => ActionKind::AllIn,
        }
    }
}

/// Amount-free action labels, used for the valid-actions query.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        };
        f.write_str(s)
    }
}

/// One seat's state for the current hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    index: usize,
    stack: u32,
    hole: [Option<Card>; 2],
    street_bet: u32,
    contributed: u32,
    has_acted: bool,
    folded: bool,
    all_in: bool,
}

impl Seat {
    pub fn new(index: usize, stack: u32) -> Self {
        Self {
            index,
            stack,
            hole: [None, None],
            street_bet: 0,
            contributed: 0,
            has_acted: false,
            folded: false,
            all_in: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }
    /// Both hole cards, once dealt.
    pub fn hole_pair(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    /// Chips committed over the whole hand.
    pub fn contributed(&self) -> u32 {
        self.contributed
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Still holds cards and chips behind: may be asked to act.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub(crate) fn set_hole(&mut self, cards: [Card; 2]) {
        self.hole = [Some(cards[0]), Some(cards[1])];
    }

    /// Moves up to `amount` chips from the stack into the current street.
    /// Returns what was actually committed; exhausting the stack marks the
    /// seat all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        self.contributed += paid;
        if self.stack == 0 && paid > 0 {
            self.all_in = true;
        }
        paid
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
        self.has_acted = true;
    }

    /// Deals the seat out of a hand it cannot afford to play. Only `folded`
    /// is set; `can_act` and pot eligibility key off it, not `has_acted`.
    pub(crate) fn sit_out(&mut self) {
        self.folded = true;
    }

    pub(crate) fn start_street(&mut self) {
        self.street_bet = 0;
        self.has_acted = false;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
