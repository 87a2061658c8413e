//! Packed u32 hand strength.
//!
//! ```text
//! bits 20..23 : category, higher is better
//! bits 16..19 : r0
//! bits 12..15 : r1
//! bits  8..11 : r2
//! bits  4..7  : r3
//! bits  0..3  : r4
//! ```
//!
//! Each r* is a rank index (0..12), unused slots are 0. Comparing two scores
//! as integers compares the hands: category first, then kickers in order.

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Score(pub u32);

/// Hand categories (higher is better).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl Score {
    #[inline(always)]
    pub fn pack(cat: Category, ranks: [u8; 5]) -> Score {
        let [r0, r1, r2, r3, r4] = ranks.map(|r| (r & 0xF) as u32);
        Score(((cat as u32) << 20) | (r0 << 16) | (r1 << 12) | (r2 << 8) | (r3 << 4) | r4)
    }

    pub fn category(self) -> Category {
        match (self.0 >> 20) & 0xF {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::Trips,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::Quads,
            _ => Category::StraightFlush,
        }
    }

    /// Rank slots r0..r4.
    pub fn ranks(self) -> [u8; 5] {
        let v = self.0;
        [16, 12, 8, 4, 0].map(|shift| ((v >> shift) & 0xF) as u8)
    }
}
