use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::betting;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Positions, TableConfig, SEATS};
use crate::hand::{HandEvaluator, StandardEvaluator};
use crate::logger::{HandEvent, HandResult, Street};
use crate::player::{PlayerAction, Seat};
use crate::pot::PotManager;
use crate::rules::validate_action;
use crate::state::{HandState, Reveal};

/// Outcome of a successful action or reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: HandState,
    /// What happened, e.g. "Seat 3 raises to 160"
    pub narrative: String,
}

/// A settled hand: the final snapshot with the pots pushed to the winners,
/// and the result summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub state: HandState,
    pub result: HandResult,
}

/// Drives six-max hands: deals from a seeded shuffle source, applies
/// actions to hand snapshots and settles them through a [`HandEvaluator`].
///
/// # Examples
///
/// ```
/// use sixmax_engine::engine::Engine;
/// use sixmax_engine::game::TableConfig;
///
/// let mut engine = Engine::new(TableConfig::default(), Some(7)).unwrap();
/// let mut hand = engine.start_hand().unwrap();
/// assert_eq!(hand.pot(), 60);
///
/// // everyone folds to the big blind
/// while !hand.is_hand_complete() {
///     hand = engine.fold(&hand).unwrap().state;
/// }
/// let settled = engine.settle(&hand).unwrap();
/// assert_eq!(settled.result.winners(), vec![2]);
/// ```
pub struct Engine {
    config: TableConfig,
    rng: ChaCha20Rng,
    evaluator: Box<dyn HandEvaluator>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(config: TableConfig, seed: Option<u64>) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_os_rng(),
        };
        Ok(Self {
            config,
            rng,
            evaluator: Box::new(StandardEvaluator),
        })
    }

    /// Replaces the showdown evaluator.
    pub fn with_evaluator(mut self, evaluator: impl HandEvaluator + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Deals a fresh hand with every seat at the configured starting stack.
    pub fn start_hand(&mut self) -> Result<HandState, GameError> {
        let stacks = [self.config.starting_stack; SEATS];
        self.deal(stacks, Positions::for_dealer(self.config.dealer))
    }

    /// Deals the following hand: stacks carry over from a settled hand and
    /// the button moves one seat clockwise.
    pub fn next_hand(&mut self, previous: &HandState) -> Result<HandState, GameError> {
        if !previous.is_settled() {
            return Err(GameError::HandNotComplete);
        }
        let stacks = previous.seats().each_ref().map(Seat::stack);
        self.deal(stacks, previous.positions().rotate())
    }

    fn deal(&mut self, stacks: [u32; SEATS], positions: Positions) -> Result<HandState, GameError> {
        if stacks.iter().filter(|&&s| s > 0).count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        let deck = Deck::shuffled(&mut self.rng);
        // ids stay unique across engines built from the same seed
        let hand_id = uuid::Uuid::new_v4().to_string();

        let mut seats: [Seat; SEATS] = std::array::from_fn(|i| Seat::new(i, stacks[i]));
        for seat in seats.iter_mut().filter(|s| s.stack() == 0) {
            seat.sit_out();
        }

        let mut state = HandState {
            hand_id,
            config: self.config,
            positions,
            seats,
            starting_stacks: stacks,
            deck,
            board: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            street: Street::Preflop,
            current: None,
            pending_reveal: None,
            events: Vec::new(),
            settled: false,
        };

        // one card per seat per pass, starting left of the button
        let order: Vec<usize> = (1..=SEATS)
            .map(|step| (positions.dealer + step) % SEATS)
            .filter(|&i| !state.seats[i].is_folded())
            .collect();
        let mut first = [None; SEATS];
        for &i in &order {
            first[i] = Some(state.deck.draw()?);
        }
        for &i in &order {
            let second = state.deck.draw()?;
            if let Some(card) = first[i] {
                state.seats[i].set_hole([card, second]);
            }
        }

        post_blind(&mut state, positions.small_blind, self.config.small_blind);
        let big_blind_posted = post_blind(&mut state, positions.big_blind, self.config.big_blind);
        // a short big blind still sets the full bet; its shortfall becomes a side pot
        state.current_bet = if big_blind_posted {
            self.config.big_blind
        } else {
            state
                .seats
                .iter()
                .map(Seat::street_bet)
                .max()
                .unwrap_or(0)
        };

        state.current = betting::next_to_act(&state.seats, positions.big_blind);
        if state.current.is_none() || state.is_round_complete() {
            betting::close_round(&mut state);
        }

        info!(
            hand_id = %state.hand_id,
            dealer = positions.dealer,
            pot = state.pot,
            "hand started"
        );
        Ok(state)
    }

    /// Applies `action` for the seat whose turn it is.
    pub fn act(&self, state: &HandState, action: PlayerAction) -> Result<Step, GameError> {
        if state.is_settled() || state.is_hand_complete() {
            return Err(GameError::HandAlreadyComplete);
        }
        if state.should_reveal_community_cards() {
            return Err(GameError::RevealPending);
        }
        let seat = state.current_actor().ok_or(GameError::HandAlreadyComplete)?;
        let s = &state.seats[seat];
        let validated = validate_action(seat, s.stack(), s.street_bet(), state.current_bet, action)
            .inspect_err(|e| {
                warn!(hand_id = %state.hand_id, seat, ?action, error = %e, "action rejected");
            })?;

        let mut next = state.clone();
        let record = betting::apply(&mut next, seat, validated);
        let event = HandEvent::Action(record);
        let narrative = event.narrate();
        next.events.push(event);
        betting::advance(&mut next, seat);

        debug!(
            hand_id = %next.hand_id,
            seat,
            street = ?next.street,
            pot = next.pot,
            "{}",
            narrative
        );
        Ok(Step {
            state: next,
            narrative,
        })
    }

    /// Like [`Engine::act`], but first checks that `seat` holds the turn.
    pub fn act_as(
        &self,
        state: &HandState,
        seat: usize,
        action: PlayerAction,
    ) -> Result<Step, GameError> {
        match state.current_actor() {
            Some(expected) if expected != seat => Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            }),
            _ => self.act(state, action),
        }
    }

    pub fn fold(&self, state: &HandState) -> Result<Step, GameError> {
        self.act(state, PlayerAction::Fold)
    }
    pub fn check(&self, state: &HandState) -> Result<Step, GameError> {
        self.act(state, PlayerAction::Check)
    }
    pub fn call(&self, state: &HandState) -> Result<Step, GameError> {
        self.act(state, PlayerAction::Call)
    }
    pub fn bet(&self, state: &HandState, amount: u32) -> Result<Step, GameError> {
        self.act(state, PlayerAction::Bet(amount))
    }
    pub fn raise(&self, state: &HandState, amount: u32) -> Result<Step, GameError> {
        self.act(state, PlayerAction::Raise(amount))
    }
    pub fn all_in(&self, state: &HandState) -> Result<Step, GameError> {
        self.act(state, PlayerAction::AllIn)
    }

    /// Deals the community cards a closed betting round is waiting for:
    /// the next street, or every remaining street when no more betting is
    /// possible.
    pub fn reveal_community_cards(&self, state: &HandState) -> Result<Step, GameError> {
        let reveal = state.pending_reveal.ok_or(GameError::NothingToReveal)?;
        let mut next = state.clone();
        next.pending_reveal = None;
        let mut lines = Vec::new();

        match reveal {
            Reveal::NextStreet => {
                lines.push(deal_street(&mut next)?);
                next.current = first_after_dealer(&next);
            }
            Reveal::RunOut => {
                while next.street < Street::River {
                    lines.push(deal_street(&mut next)?);
                }
                next.street = Street::Showdown;
                next.current = None;
            }
        }

        let narrative = lines.join("\n");
        debug!(hand_id = %next.hand_id, street = ?next.street, "{}", narrative);
        Ok(Step {
            state: next,
            narrative,
        })
    }

    /// Awards the pots of a finished hand and summarises it.
    ///
    /// Pots are tiered by all-in contribution; contested pots go to the best
    /// hands according to the engine's evaluator.
    pub fn settle(&self, state: &HandState) -> Result<Settlement, GameError> {
        if state.is_settled() {
            return Err(GameError::AlreadySettled);
        }
        if !state.is_hand_complete() {
            return Err(GameError::HandNotComplete);
        }

        let contributed: Vec<u32> = state.seats.iter().map(Seat::contributed).collect();
        let folded: Vec<bool> = state.seats.iter().map(Seat::is_folded).collect();
        let pots = PotManager::build(&contributed, &folded);

        let contenders: Vec<(usize, [Card; 2])> = state
            .seats
            .iter()
            .filter(|s| !s.is_folded())
            .filter_map(|s| s.hole_pair().map(|h| (s.index(), h)))
            .collect();
        let ranking = if contenders.len() > 1 {
            self.evaluator.rank(&state.board, &contenders)
        } else {
            vec![contenders.iter().map(|(seat, _)| *seat).collect()]
        };
        let awards = pots.award(&ranking, state.positions.dealer);

        let mut next = state.clone();
        for (seat, share) in awards.iter().flat_map(|a| a.shares.iter()) {
            next.seats[*seat].add_chips(*share);
        }
        next.pot = 0;
        next.current = None;
        next.settled = true;

        let result = HandResult {
            hand_id: next.hand_id.clone(),
            starting_stack: next.config.starting_stack,
            positions: next.positions,
            hole_cards: next.seats.each_ref().map(Seat::hole_pair),
            board: next.board.clone(),
            events: next.events.clone(),
            pots: awards,
            starting_stacks: next.starting_stacks,
            final_stacks: next.seats.each_ref().map(Seat::stack),
        };
        info!(
            hand_id = %result.hand_id,
            pot = state.pot,
            winners = ?result.winners(),
            "hand settled"
        );
        Ok(Settlement {
            state: next,
            result,
        })
    }
}

/// Posts up to `amount` for `seat`; false when the seat is sitting out.
fn post_blind(state: &mut HandState, seat: usize, amount: u32) -> bool {
    let s = &mut state.seats[seat];
    if s.is_folded() {
        return false;
    }
    let paid = s.commit(amount);
    state.pot += paid;
    state.events.push(HandEvent::Blind { seat, amount: paid });
    true
}

/// Burns one card and deals the next street's community cards.
fn deal_street(state: &mut HandState) -> Result<String, GameError> {
    let street = state.street.next();
    state.deck.burn()?;
    let mut cards = Vec::with_capacity(3);
    while state.board.len() + cards.len() < street.board_len() {
        cards.push(state.deck.draw()?);
    }
    state.board.extend_from_slice(&cards);
    for seat in state.seats.iter_mut().filter(|s| !s.is_folded()) {
        seat.start_street();
    }
    state.current_bet = 0;
    state.street = street;
    let event = HandEvent::Board { street, cards };
    let line = event.narrate();
    state.events.push(event);
    Ok(line)
}

fn first_after_dealer(state: &HandState) -> Option<usize> {
    betting::next_to_act(&state.seats, state.positions.dealer)
}
