use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Number of seats at the table.
pub const SEATS: usize = 6;

/// Default starting stack for a fresh table.
pub const STARTING_STACK: u32 = 10_000;
pub const SMALL_BLIND: u32 = 20;
pub const BIG_BLIND: u32 = 40;

/// Largest starting stack whose table total still fits the chip type.
pub const MAX_STARTING_STACK: u32 = u32::MAX / SEATS as u32;

/// Stakes and the opening dealer seat for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub dealer: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            dealer: 0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be >0".into(),
            ));
        }
        if self.starting_stack > MAX_STARTING_STACK {
            return Err(GameError::InvalidConfig(format!(
                "starting_stack must be at most {}",
                MAX_STARTING_STACK
            )));
        }
        if self.small_blind == 0 || self.big_blind < self.small_blind {
            return Err(GameError::InvalidConfig(
                "blinds must satisfy 0 < small_blind <= big_blind".into(),
            ));
        }
        if self.dealer >= SEATS {
            return Err(GameError::InvalidConfig(format!(
                "dealer must be a seat index below {}",
                SEATS
            )));
        }
        Ok(())
    }
}

/// Dealer button and blind seats for one hand. The blinds always sit one
/// and two seats clockwise of the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positions {
    pub dealer: usize,
    pub small_blind: usize,
    pub big_blind: usize,
}

impl Positions {
    pub fn for_dealer(dealer: usize) -> Self {
        let dealer = dealer % SEATS;
        Self {
            dealer,
            small_blind: seat_after(dealer),
            big_blind: seat_after(seat_after(dealer)),
        }
    }

    /// Moves the button one seat clockwise.
    pub fn rotate(&self) -> Self {
        Self::for_dealer(seat_after(self.dealer))
    }
}

pub fn seat_after(seat: usize) -> usize {
    (seat + 1) % SEATS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_follow_the_button_and_wrap() {
        let p = Positions::for_dealer(4);
        assert_eq!((p.dealer, p.small_blind, p.big_blind), (4, 5, 0));
        let p = p.rotate();
        assert_eq!((p.dealer, p.small_blind, p.big_blind), (5, 0, 1));
    }

    #[test]
    fn config_validation() {
        assert!(TableConfig::default().validate().is_ok());
        let bad = TableConfig {
            big_blind: 10,
            ..TableConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = TableConfig {
            dealer: 6,
            ..TableConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
