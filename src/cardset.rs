//! 52-bit card membership set.
//!
//! Tracks the cards that block opponent hands on the board being scored.
//! Membership is a single mask test. The rollout keeps a snapshot of the fixed
//! cards and only adds the runout cards on top of it per enumerated board.

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Hash)]
pub struct CardSet(u64);

impl CardSet {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn from_ids(ids: &[u8]) -> Self {
        let mut set = Self::new();
        set.extend(ids);
        set
    }

    /// Ids are assumed < 52.
    #[inline(always)]
    pub fn insert(&mut self, id: u8) {
        self.0 |= 1u64 << id;
    }

    #[inline(always)]
    pub fn remove(&mut self, id: u8) {
        self.0 &= !(1u64 << id);
    }

    #[inline(always)]
    pub const fn contains(&self, id: u8) -> bool {
        (self.0 >> id) & 1 != 0
    }

    /// True if either card of the hand is in the set.
    #[inline(always)]
    pub const fn blocks(&self, hand: [u8; 2]) -> bool {
        self.0 & ((1u64 << hand[0]) | (1u64 << hand[1])) != 0
    }

    #[inline]
    pub fn extend(&mut self, ids: &[u8]) {
        for &id in ids {
            self.insert(id);
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
