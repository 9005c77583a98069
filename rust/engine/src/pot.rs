//! Main and side pots built from per-seat hand contributions.
//!
//! Each distinct contribution level of a seat still in the hand caps one
//! pot. A pot holds every seat's chips up to its cap (folded seats included)
//! and can only be won by un-folded seats that reached the cap.

use serde::{Deserialize, Serialize};

use crate::game::{seat_after, SEATS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    /// Seats allowed to win this pot, ascending.
    pub eligible: Vec<usize>,
}

/// A pot after the award: chips handed to each winning seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u32,
    pub eligible: Vec<usize>,
    pub shares: Vec<(usize, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    /// Every seat considered live.
    pub fn from_contributions<const N: usize>(contributed: [u32; N]) -> Self {
        Self::build(&contributed, &[false; N])
    }

    pub fn build(contributed: &[u32], folded: &[bool]) -> Self {
        let mut levels: Vec<u32> = contributed
            .iter()
            .zip(folded)
            .filter(|(c, f)| !**f && **c > 0)
            .map(|(c, _)| *c)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::with_capacity(levels.len());
        let mut prev = 0u32;
        for lvl in levels {
            let amount: u32 = contributed
                .iter()
                .map(|&c| c.min(lvl).saturating_sub(prev))
                .sum();
            let eligible = contributed
                .iter()
                .zip(folded)
                .enumerate()
                .filter(|(_, (c, f))| !**f && **c >= lvl)
                .map(|(i, _)| i)
                .collect();
            prev = lvl;
            if amount > 0 {
                pots.push(Pot { amount, eligible });
            }
        }

        // Folded chips above the highest live level stay in the last pot.
        let total: u32 = contributed.iter().sum();
        let allocated: u32 = pots.iter().map(|p| p.amount).sum();
        if let Some(last) = pots.last_mut() {
            last.amount += total - allocated;
        }
        Self { pots }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map_or(0, |p| p.amount)
    }

    pub fn side_pots(&self) -> Vec<u32> {
        self.pots.iter().skip(1).map(|p| p.amount).collect()
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Splits every pot among its best-ranked eligible seats.
    ///
    /// `ranking` groups seats into tiers, best first. Odd chips go one at a
    /// time to winners in clockwise order starting left of the dealer.
    pub fn award(&self, ranking: &[Vec<usize>], dealer: usize) -> Vec<PotAward> {
        self.pots
            .iter()
            .map(|pot| {
                let winners = pot_winners(pot, ranking);
                PotAward {
                    amount: pot.amount,
                    eligible: pot.eligible.clone(),
                    shares: split(pot.amount, &winners, dealer),
                }
            })
            .collect()
    }
}

fn pot_winners(pot: &Pot, ranking: &[Vec<usize>]) -> Vec<usize> {
    if pot.eligible.len() == 1 {
        return pot.eligible.clone();
    }
    ranking
        .iter()
        .map(|tier| {
            tier.iter()
                .copied()
                .filter(|s| pot.eligible.contains(s))
                .collect::<Vec<_>>()
        })
        .find(|w| !w.is_empty())
        .unwrap_or_else(|| pot.eligible.clone())
}

fn split(amount: u32, winners: &[usize], dealer: usize) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let mut ordered: Vec<usize> = winners.to_vec();
    let first = seat_after(dealer);
    ordered.sort_by_key(|&s| (s + SEATS - first) % SEATS);

    let n = ordered.len() as u32;
    let per = amount / n;
    let mut rem = amount % n;
    ordered
        .into_iter()
        .map(|seat| {
            let mut share = per;
            if rem > 0 {
                share += 1;
                rem -= 1;
            }
            (seat, share)
        })
        .collect()
}
