use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck consumed from the top. The card order is plain data so a
/// dealt deck can travel inside a hand snapshot; randomness only enters
/// through [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    pub fn ordered() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Restores all 52 cards and applies a Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.cards.shuffle(rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(card)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_fails_once_exhausted() {
        let mut deck = Deck::ordered();
        for _ in 0..52 {
            deck.draw().unwrap();
        }
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
        assert_eq!(deck.burn(), Err(GameError::DeckExhausted));
    }
}
