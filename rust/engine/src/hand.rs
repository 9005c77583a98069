use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Strength of the best five-card hand. Ordering compares the category
/// first, then the kickers high to low.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: [u8; 5],
}

/// Ranks the hands still contesting a pot.
///
/// Implementations receive the board and each contender's seat and hole
/// cards, and return the seats grouped into tiers, best first; seats in the
/// same tier split. The engine never inspects how a ranking was reached.
pub trait HandEvaluator: Send + Sync {
    fn rank(&self, board: &[Card], contenders: &[(usize, [Card; 2])]) -> Vec<Vec<usize>>;
}

/// Best-five-of-seven ranking with standard kicker rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn rank(&self, board: &[Card], contenders: &[(usize, [Card; 2])]) -> Vec<Vec<usize>> {
        let mut scored: Vec<(HandStrength, usize)> = contenders
            .iter()
            .map(|(seat, hole)| {
                let mut cards: Vec<Card> = board.to_vec();
                cards.extend_from_slice(hole);
                (evaluate_hand(&cards), *seat)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut tiers: Vec<(HandStrength, Vec<usize>)> = Vec::new();
        for (strength, seat) in scored {
            match tiers.last_mut() {
                Some((s, seats)) if *s == strength => seats.push(seat),
                _ => tiers.push((strength, vec![seat])),
            }
        }
        tiers.into_iter().map(|(_, seats)| seats).collect()
    }
}

/// Evaluates the best five-card hand among `cards` (normally five to seven).
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut counts = [0u8; 15];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;
    for c in cards {
        let r = c.rank.value();
        counts[r as usize] += 1;
        suit_masks[c.suit.index()] |= 1 << r;
        rank_mask |= 1 << r;
    }

    let flush_mask = suit_masks.iter().copied().find(|m| m.count_ones() >= 5);

    if let Some(high) = flush_mask.and_then(straight_high) {
        return strength(Category::StraightFlush, &[high]);
    }

    let quads = ranks_with(&counts, |n| n == 4);
    if let Some(&q) = quads.first() {
        return strength(Category::FourOfAKind, &[q, top_ranks(&counts, &[q], 1)[0]]);
    }

    let trips = ranks_with(&counts, |n| n == 3);
    let pairs = ranks_with(&counts, |n| n == 2);
    if let Some(&t) = trips.first() {
        // a second set of trips plays as the pair
        let pair = trips.get(1).into_iter().chain(pairs.first()).max();
        if let Some(&p) = pair {
            return strength(Category::FullHouse, &[t, p]);
        }
    }

    if let Some(mask) = flush_mask {
        let top: Vec<u8> = (2..=14u8).rev().filter(|r| mask & (1 << r) != 0).take(5).collect();
        return strength(Category::Flush, &top);
    }

    if let Some(high) = straight_high(rank_mask) {
        return strength(Category::Straight, &[high]);
    }

    if let Some(&t) = trips.first() {
        let mut k = vec![t];
        k.extend(top_ranks(&counts, &[t], 2));
        return strength(Category::ThreeOfAKind, &k);
    }

    if pairs.len() >= 2 {
        let (hi, lo) = (pairs[0], pairs[1]);
        let mut k = vec![hi, lo];
        k.extend(top_ranks(&counts, &[hi, lo], 1));
        return strength(Category::TwoPair, &k);
    }

    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(top_ranks(&counts, &[p], 3));
        return strength(Category::OnePair, &k);
    }

    strength(Category::HighCard, &top_ranks(&counts, &[], 5))
}

fn strength(category: Category, ranks: &[u8]) -> HandStrength {
    let mut kickers = [0u8; 5];
    for (slot, r) in kickers.iter_mut().zip(ranks) {
        *slot = *r;
    }
    HandStrength { category, kickers }
}

/// Ranks whose multiplicity satisfies `pred`, highest first.
fn ranks_with(counts: &[u8; 15], pred: impl Fn(u8) -> bool) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| pred(counts[r as usize])).collect()
}

/// Highest `n` distinct ranks present, skipping `exclude`.
fn top_ranks(counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| counts[*r as usize] > 0 && !exclude.contains(r))
        .take(n)
        .collect()
}

/// Highest card of a five-rank run in `mask`; the ace also plays low.
fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        m & window == window
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> HandStrength {
        evaluate_hand(&parse_cards(s).unwrap())
    }

    #[test]
    fn wheel_is_five_high() {
        let s = eval("As2d3c4h5sKdKh");
        assert_eq!(s.category, Category::Straight);
        assert_eq!(s.kickers[0], 5);
    }

    #[test]
    fn two_trips_make_a_full_house() {
        let s = eval("9s9d9cKhKsKd2c");
        assert_eq!(s.category, Category::FullHouse);
        assert_eq!(&s.kickers[..2], &[13, 9]);
    }

    #[test]
    fn third_pair_rank_can_be_the_kicker() {
        let s = eval("AsAdKcKh7s7d9c");
        assert_eq!(s.category, Category::TwoPair);
        assert_eq!(&s.kickers[..3], &[14, 13, 9]);
    }
}
