use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{ActionKind, PlayerAction as A};

/// An action that passed validation, carrying the chips it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ValidatedAction::Fold => ActionKind::Fold,
            ValidatedAction::Check => ActionKind::Check,
            ValidatedAction::Call(_) => ActionKind::Call,
            ValidatedAction::Bet(_) => ActionKind::Bet,
            ValidatedAction::Raise(_) => ActionKind::Raise,
            ValidatedAction::AllIn(_) => ActionKind::AllIn,
        }
    }

    /// Chips moved from the stack into the pot.
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => n,
        }
    }
}

/// Validates a seat's requested action against the street's betting state.
///
/// Over-bets are capped rather than rejected: any call, bet or raise that
/// needs at least the whole stack becomes [`ValidatedAction::AllIn`].
///
/// # Arguments
///
/// * `seat` - Index of the acting seat (used in errors only)
/// * `stack` - Chips the seat still has behind
/// * `street_bet` - Chips the seat already committed on this street
/// * `current_bet` - Street total every live seat must match
/// * `action` - The requested action
///
/// # Errors
///
/// - [`GameError::IllegalAction`] - the action's precondition does not hold
///   (checking while facing a bet, betting into an open bet, ...)
/// - [`GameError::InvalidAmount`] - a bet or raise of zero
///
/// # Examples
///
/// ```
/// use sixmax_engine::rules::{validate_action, ValidatedAction};
/// use sixmax_engine::player::PlayerAction;
///
/// // Facing the big blind with 20 already in: call 20 more
/// let va = validate_action(1, 9980, 20, 40, PlayerAction::Call).unwrap();
/// assert_eq!(va, ValidatedAction::Call(20));
///
/// // Raise 500 over a 40 bet with only 30 chips: capped all-in
/// let va = validate_action(3, 30, 0, 40, PlayerAction::Raise(500)).unwrap();
/// assert_eq!(va, ValidatedAction::AllIn(30));
/// ```
///
/// ```
/// use sixmax_engine::errors::GameError;
/// use sixmax_engine::player::PlayerAction;
/// use sixmax_engine::rules::validate_action;
///
/// let err = validate_action(0, 1000, 0, 40, PlayerAction::Check).unwrap_err();
/// assert!(matches!(err, GameError::IllegalAction { .. }));
///
/// let err = validate_action(0, 1000, 0, 0, PlayerAction::Bet(0)).unwrap_err();
/// assert_eq!(err, GameError::InvalidAmount { amount: 0 });
/// ```
pub fn validate_action(
    seat: usize,
    stack: u32,
    street_bet: u32,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(street_bet);
    let illegal = |reason| GameError::IllegalAction {
        seat,
        action: action.kind(),
        reason,
    };
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(illegal("cannot check while facing a bet"))
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(illegal("nothing to call"))
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if current_bet > 0 {
                return Err(illegal("betting is already open"));
            }
            if amount == 0 {
                return Err(GameError::InvalidAmount { amount });
            }
            if amount >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(amount) => {
            if current_bet == 0 {
                return Err(illegal("no bet to raise"));
            }
            if amount == 0 {
                return Err(GameError::InvalidAmount { amount });
            }
            let needed = to_call.saturating_add(amount);
            if needed >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise(needed))
            }
        }
        A::AllIn => {
            if stack == 0 {
                Err(illegal("no chips left"))
            } else {
                Ok(ValidatedAction::AllIn(stack))
            }
        }
    }
}

/// Action kinds [`validate_action`] would accept for a seat, in a stable
/// order: fold, check, call, bet, raise, allin.
pub fn valid_actions(stack: u32, street_bet: u32, current_bet: u32) -> Vec<ActionKind> {
    let to_call = current_bet.saturating_sub(street_bet);
    let mut kinds = vec![ActionKind::Fold];
    if to_call == 0 {
        kinds.push(ActionKind::Check);
    } else {
        kinds.push(ActionKind::Call);
    }
    if stack > 0 {
        if current_bet == 0 {
            kinds.push(ActionKind::Bet);
        } else {
            kinds.push(ActionKind::Raise);
        }
        kinds.push(ActionKind::AllIn);
    }
    kinds
}
