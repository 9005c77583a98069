//! Betting round controller: applies validated actions to the seats, picks
//! the next actor and decides when a street's betting is over.

use crate::game::SEATS;
use crate::logger::{ActionRecord, Street};
use crate::player::Seat;
use crate::rules::ValidatedAction;
use crate::state::{HandState, Reveal};

/// First seat clockwise after `from` that can still act. `from` itself is
/// checked last, so a full cycle is at most six steps.
pub fn next_to_act(seats: &[Seat], from: usize) -> Option<usize> {
    (1..=SEATS)
        .map(|step| (from + step) % SEATS)
        .find(|&i| seats[i].can_act())
}

/// The street's betting is over once every seat able to act has acted and
/// matched the current bet. With at most one such seat left nobody can be
/// raised any more; that seat only owes a call if it is behind.
pub fn is_round_complete(seats: &[Seat], current_bet: u32) -> bool {
    let active: Vec<&Seat> = seats.iter().filter(|s| s.can_act()).collect();
    if active.len() <= 1 {
        return active.iter().all(|s| s.street_bet() >= current_bet);
    }
    active
        .iter()
        .all(|s| s.has_acted() && s.street_bet() == current_bet)
}

/// Moves the action's chips and updates the street's bet level. A new
/// high total reopens the action for every other seat.
pub(crate) fn apply(state: &mut HandState, seat: usize, action: ValidatedAction) -> ActionRecord {
    let s = &mut state.seats[seat];
    match action {
        ValidatedAction::Fold => s.fold(),
        ValidatedAction::Check => s.set_acted(true),
        ValidatedAction::Call(n)
        | ValidatedAction::Bet(n)
        | ValidatedAction::Raise(n)
        | ValidatedAction::AllIn(n) => {
            let paid = s.commit(n);
            s.set_acted(true);
            state.pot += paid;
        }
    }

    let street_total = state.seats[seat].street_bet();
    if street_total > state.current_bet {
        state.current_bet = street_total;
        for other in state.seats.iter_mut() {
            if other.index() != seat && !other.is_folded() {
                other.set_acted(false);
            }
        }
    }

    ActionRecord {
        seat,
        street: state.street,
        action,
        street_total,
    }
}

/// Hands the turn on after `from` acted, or closes the round.
pub(crate) fn advance(state: &mut HandState, from: usize) {
    if state.live_seats() <= 1 {
        state.current = None;
        return;
    }
    if is_round_complete(&state.seats, state.current_bet) {
        close_round(state);
        return;
    }
    state.current = next_to_act(&state.seats, from);
    if state.current.is_none() {
        close_round(state);
    }
}

/// Ends the street's betting: the river goes to showdown, any other street
/// waits for its community cards.
pub(crate) fn close_round(state: &mut HandState) {
    state.current = None;
    if state.live_seats() <= 1 {
        return;
    }
    if state.street >= Street::River {
        state.street = Street::Showdown;
        return;
    }
    let can_act = state.seats.iter().filter(|s| s.can_act()).count();
    state.pending_reveal = Some(if can_act <= 1 {
        Reveal::RunOut
    } else {
        Reveal::NextStreet
    });
}
