//! Hand-strength oracle.
//!
//! The rollout only needs three things from an evaluator: an empty hand, a
//! way to add cards (in any order) and a total order over finished hands.
//! [`HandEvaluator`] is that contract; [`BitBoardEvaluator`] is the LUT-based
//! implementation over [`BitBoard4x13`].

use crate::bitboard::BitBoard4x13;
use crate::lut13::{hibit13, popcnt13, straight_end13};
use crate::score::{Category, Score};

/// Contract between the rollout and a hand evaluator.
///
/// `Hand` is an opaque accumulator. Adding the same set of cards in any order,
/// or merging two accumulators, must evaluate identically. `evaluate` is only
/// called on hands holding 5, 6 or 7 cards; larger strengths are better and
/// equal strengths tie.
pub trait HandEvaluator {
    type Hand: Copy;
    type Strength: Ord + Copy;

    fn empty(&self) -> Self::Hand;

    fn add_card(&self, hand: Self::Hand, card: u8) -> Self::Hand;

    fn merge(&self, a: Self::Hand, b: Self::Hand) -> Self::Hand;

    fn evaluate(&self, hand: &Self::Hand) -> Self::Strength;

    /// Accumulates a slice of cards onto `hand`.
    #[inline]
    fn add_cards(&self, hand: Self::Hand, cards: &[u8]) -> Self::Hand {
        cards.iter().fold(hand, |h, &c| self.add_card(h, c))
    }
}

/// Stateless evaluator scoring [`BitBoard4x13`] hands into a packed [`Score`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BitBoardEvaluator;

impl HandEvaluator for BitBoardEvaluator {
    type Hand = BitBoard4x13;
    type Strength = Score;

    #[inline(always)]
    fn empty(&self) -> BitBoard4x13 {
        BitBoard4x13::new()
    }

    #[inline(always)]
    fn add_card(&self, mut hand: BitBoard4x13, card: u8) -> BitBoard4x13 {
        hand.add_id(card);
        hand
    }

    #[inline(always)]
    fn merge(&self, a: BitBoard4x13, b: BitBoard4x13) -> BitBoard4x13 {
        a.union(b)
    }

    #[inline(always)]
    fn evaluate(&self, hand: &BitBoard4x13) -> Score {
        evaluate(hand)
    }
}

/// Highest `n` ranks of `mask` (hi..lo), remaining slots 0.
#[inline(always)]
fn top_ranks(mut mask: u16, n: usize) -> [u8; 5] {
    let mut out = [0u8; 5];
    for slot in out.iter_mut().take(n) {
        let r = hibit13(mask);
        if r < 0 {
            break;
        }
        *slot = r as u8;
        mask &= !(1u16 << r);
    }
    out
}

#[inline(always)]
fn without(mask: u16, rank: u8) -> u16 {
    mask & !(1u16 << rank)
}

/// Scores a 5 to 7 card hand.
#[inline(always)]
pub fn evaluate(hand: &BitBoard4x13) -> Score {
    let suits = hand.suits_array();
    let ranks = hand.ranks_any();
    let ge2 = hand.ge2();
    let ge3 = hand.ge3();
    let ge4 = hand.ge4();

    // At most one suit can hold five of seven cards; callers never pass more than seven.
    let flush = suits.iter().copied().find(|&s| popcnt13(s) >= 5);

    if let Some(fm) = flush {
        let end = straight_end13(fm);
        if end >= 0 {
            return Score::pack(Category::StraightFlush, [end as u8, 0, 0, 0, 0]);
        }
    }

    if ge4 != 0 {
        let q = hibit13(ge4) as u8;
        let k = hibit13(without(ranks, q)) as u8;
        return Score::pack(Category::Quads, [q, k, 0, 0, 0]);
    }

    if ge3 != 0 {
        let t = hibit13(ge3) as u8;
        // a second set of trips also fills the house
        let p = hibit13(without(ge2, t));
        if p >= 0 {
            return Score::pack(Category::FullHouse, [t, p as u8, 0, 0, 0]);
        }
    }

    if let Some(fm) = flush {
        return Score::pack(Category::Flush, top_ranks(fm, 5));
    }

    let end = straight_end13(ranks);
    if end >= 0 {
        return Score::pack(Category::Straight, [end as u8, 0, 0, 0, 0]);
    }

    if ge3 != 0 {
        let t = hibit13(ge3) as u8;
        let [k1, k2, ..] = top_ranks(without(ranks, t), 2);
        return Score::pack(Category::Trips, [t, k1, k2, 0, 0]);
    }

    if popcnt13(ge2) >= 2 {
        let [p1, p2, ..] = top_ranks(ge2, 2);
        let k = hibit13(without(without(ranks, p1), p2)) as u8;
        return Score::pack(Category::TwoPair, [p1, p2, k, 0, 0]);
    }

    if ge2 != 0 {
        let p = hibit13(ge2) as u8;
        let [k1, k2, k3, ..] = top_ranks(without(ranks, p), 3);
        return Score::pack(Category::OnePair, [p, k1, k2, k3, 0]);
    }

    Score::pack(Category::HighCard, top_ranks(ranks, 5))
}

/// Convenience: evaluate a slice of 0..51 card ids.
#[inline]
pub fn evaluate_ids(ids: &[u8]) -> Score {
    evaluate(&BitBoard4x13::from_ids(ids))
}
