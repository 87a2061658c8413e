//! 4×13 bitboard: 4 suits, 13 ranks per suit.
//!
//! This is the hand accumulator handed to the evaluator. Adding a card is an
//! OR into its suit row, so accumulation is order-independent and two
//! accumulators combine with [`BitBoard4x13::union`].

use crate::card::Card;

pub const MASK13: u16 = (1u16 << 13) - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct BitBoard4x13 {
    suits: [u16; 4],
}

impl BitBoard4x13 {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { suits: [0; 4] }
    }

    #[inline]
    pub fn from_cards<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut b = Self::new();
        for c in iter {
            b.add_id(c.id());
        }
        b
    }

    #[inline]
    pub fn from_ids(ids: &[u8]) -> Self {
        let mut b = Self::new();
        for &id in ids {
            b.add_id(id);
        }
        b
    }

    #[inline(always)]
    pub const fn suits_array(&self) -> &[u16; 4] {
        &self.suits
    }

    /// Adds a 0..51 card id. Returns true if the card was already present.
    #[inline(always)]
    pub fn add_id(&mut self, id: u8) -> bool {
        let s = (id / 13) as usize;
        let bit = 1u16 << (id % 13);
        let old = self.suits[s];
        self.suits[s] = (old | bit) & MASK13;
        (old & bit) != 0
    }

    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self {
            suits: [
                self.suits[0] | other.suits[0],
                self.suits[1] | other.suits[1],
                self.suits[2] | other.suits[2],
                self.suits[3] | other.suits[3],
            ],
        }
    }

    /// Number of distinct cards held.
    #[inline(always)]
    pub const fn len(&self) -> u32 {
        self.suits[0].count_ones()
            + self.suits[1].count_ones()
            + self.suits[2].count_ones()
            + self.suits[3].count_ones()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn ranks_any(&self) -> u16 {
        (self.suits[0] | self.suits[1] | self.suits[2] | self.suits[3]) & MASK13
    }

    /// Ranks held in at least two suits.
    #[inline(always)]
    pub fn ge2(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1) | (h0 & h2) | (h0 & h3) | (h1 & h2) | (h1 & h3) | (h2 & h3)
    }

    /// Ranks held in at least three suits.
    #[inline(always)]
    pub fn ge3(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1 & h2) | (h0 & h1 & h3) | (h0 & h2 & h3) | (h1 & h2 & h3)
    }

    #[inline(always)]
    pub fn ge4(&self) -> u16 {
        self.suits[0] & self.suits[1] & self.suits[2] & self.suits[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank::*, Suit::*};

    #[test]
    fn add_reports_duplicates() {
        let mut b = BitBoard4x13::new();
        let id = Card::new(Spades, Ace).id();

        assert!(!b.add_id(id));
        assert!(b.add_id(id));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn union_is_order_independent() {
        let a = BitBoard4x13::from_ids(&[0, 13, 40]);
        let b = BitBoard4x13::from_ids(&[5, 40, 51]);

        assert_eq!(a.union(b), b.union(a));
        assert_eq!(a.union(b), BitBoard4x13::from_ids(&[51, 5, 40, 13, 0]));
        assert_eq!(a.union(b).len(), 5);
    }

    #[test]
    fn multiplicity_masks() {
        let b = BitBoard4x13::from_cards([
            Card::new(Clubs, Two),
            Card::new(Diamonds, Two),
            Card::new(Hearts, Two),
            Card::new(Spades, Two),
            Card::new(Hearts, King),
            Card::new(Spades, King),
        ]);

        assert_eq!(b.ge2(), (1 << Two.idx()) | (1 << King.idx()));
        assert_eq!(b.ge3(), 1 << Two.idx());
        assert_eq!(b.ge4(), 1 << Two.idx());
        assert_eq!(b.ranks_any().count_ones(), 2);
    }
}
