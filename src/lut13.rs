//! Const lookup table over 13-bit rank masks (0..8191).
//!
//! One entry per mask packs everything the evaluator asks of a rank set:
//! how many ranks it holds, its highest rank, and the top rank of its best
//! straight (the wheel A2345 ends on the Five, index 3). Missing values are -1.

use crate::bitboard::MASK13;

const N: usize = 1 << 13;
const WHEEL_MASK: u16 = (1u16 << 12) | 0b1111;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MaskInfo {
    pub count: u8,
    pub high: i8,
    pub straight_end: i8,
}

const fn high_rank(x: u16) -> i8 {
    if x == 0 {
        -1
    } else {
        (15 - x.leading_zeros()) as i8
    }
}

const fn straight_end(mask: u16) -> i8 {
    // highest 5-wide window first
    let mut start: i8 = 8;
    while start >= 0 {
        let window: u16 = 0b11111 << (start as u16);
        if (mask & window) == window {
            return start + 4;
        }
        start -= 1;
    }
    if (mask & WHEEL_MASK) == WHEEL_MASK {
        return 3;
    }
    -1
}

const fn build() -> [MaskInfo; N] {
    let mut table = [MaskInfo {
        count: 0,
        high: -1,
        straight_end: -1,
    }; N];
    let mut m: usize = 0;
    while m < N {
        let mask = m as u16;
        table[m] = MaskInfo {
            count: mask.count_ones() as u8,
            high: high_rank(mask),
            straight_end: straight_end(mask),
        };
        m += 1;
    }
    table
}

pub static MASK_INFO: [MaskInfo; N] = build();

#[inline(always)]
pub fn info13(mask: u16) -> MaskInfo {
    MASK_INFO[(mask & MASK13) as usize]
}

#[inline(always)]
pub fn popcnt13(mask: u16) -> u8 {
    info13(mask).count
}

#[inline(always)]
pub fn hibit13(mask: u16) -> i8 {
    info13(mask).high
}

#[inline(always)]
pub fn straight_end13(mask: u16) -> i8 {
    info13(mask).straight_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_high_rank() {
        assert_eq!(popcnt13(0), 0);
        assert_eq!(popcnt13(MASK13), 13);
        assert_eq!(hibit13(0), -1);
        assert_eq!(hibit13(1), 0);
        assert_eq!(hibit13((1 << 12) | 1), 12);
        // bits above the 13-bit domain are ignored
        assert_eq!(hibit13(1 << 14), -1);
    }

    #[test]
    fn straights_prefer_the_highest_window() {
        let broadway = 0b11111 << 8;
        assert_eq!(straight_end13(broadway), 12);

        // six in a row: 4..9 ends on the Nine
        assert_eq!(straight_end13(0b111111 << 2), 7);

        assert_eq!(straight_end13(WHEEL_MASK), 3);
        // wheel plus the Six is a six-high straight
        assert_eq!(straight_end13(WHEEL_MASK | (1 << 4)), 4);

        assert_eq!(straight_end13(0b11011 << 3), -1);
    }
}
