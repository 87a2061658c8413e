//! Card types (Suit/Rank/Card) and the 0..51 id encoding.
//!
//! The rollout core works on raw `u8` ids; these types exist so callers and
//! tests can name cards without doing the `suit * 13 + rank` arithmetic.

use std::fmt;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A playing card suit.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }
}

/// A playing card rank, stored as 0..12 (Two..Ace).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }
}

/// A card = suit + rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[inline(always)]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// suit = id / 13, rank = id % 13. Input assumed < 52.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Self {
        let suit = Suit::from_u8(id / 13);
        let rank = Rank::from_u8(id % 13);
        Self { suit, rank }
    }

    /// Convert to 0..51 id (inverse of from_id).
    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RANKS: &[u8; 13] = b"23456789TJQKA";
        const SUITS: &[u8; 4] = b"cdhs";
        write!(
            f,
            "{}{}",
            RANKS[self.rank.idx() as usize] as char,
            SUITS[self.suit.idx()] as char
        )
    }
}

/// All 52 card ids in ascending order, the natural sorted deck for a rollout.
pub fn full_deck() -> [u8; DECK_SIZE] {
    let mut deck = [0u8; DECK_SIZE];
    for (id, slot) in deck.iter_mut().enumerate() {
        *slot = id as u8;
    }
    deck
}

/// Sorted deck with the given dead cards removed (hole cards, mucked cards).
pub fn deck_without(dead: &[u8]) -> Vec<u8> {
    full_deck()
        .into_iter()
        .filter(|id| !dead.contains(id))
        .collect()
}
