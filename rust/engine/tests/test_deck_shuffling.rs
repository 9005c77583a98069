use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sixmax_engine::cards::Card;
use sixmax_engine::deck::Deck;
use sixmax_engine::errors::GameError;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {} duplicated at position {}", c, i);
    }
    assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_restores_the_full_deck() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut deck = Deck::shuffled(&mut rng);
    for _ in 0..20 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 32);
    deck.shuffle(&mut rng);
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn burn_consumes_a_card() {
    let mut a = Deck::new_with_seed(3);
    let mut b = a.clone();
    a.burn().unwrap();
    b.draw().unwrap();
    assert_eq!(a.remaining(), 51);
    assert_eq!(a.draw().unwrap(), b.draw().unwrap());
}
