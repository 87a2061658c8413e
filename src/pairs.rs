//! Canonical table of the 1326 two-card starting hands.
//!
//! Index `k` of a range vector always refers to `PairTable::get(k)`. Pairs are
//! `[i, j]` with `i < j`, ordered by `i` then `j`. Callers build range vectors
//! against this order, so it must never change.

use crate::card::DECK_SIZE;
use crate::rollout::RolloutError;

/// Number of unordered two-card hands from a 52-card deck.
pub const NUM_PAIRS: usize = DECK_SIZE * (DECK_SIZE - 1) / 2;

/// Index of the unordered pair `{a, b}` in canonical order.
///
/// Returns `None` when the cards are equal or either id is out of range.
#[inline]
pub const fn pair_index(a: u8, b: u8) -> Option<usize> {
    let (lo, hi) = if a < b { (a as usize, b as usize) } else { (b as usize, a as usize) };
    if lo == hi || hi >= DECK_SIZE {
        return None;
    }
    // rows before `lo` hold 51 + 50 + ... + (52 - lo) pairs
    Some(lo * (2 * DECK_SIZE - lo - 1) / 2 + (hi - lo - 1))
}

/// Immutable pair table, built once and shared read-only.
#[derive(Clone, Debug)]
pub struct PairTable {
    pairs: Box<[[u8; 2]; NUM_PAIRS]>,
}

impl PairTable {
    pub fn build() -> Self {
        let mut pairs = Box::new([[0u8; 2]; NUM_PAIRS]);
        let mut idx = 0;
        for i in 0..DECK_SIZE as u8 - 1 {
            for j in i + 1..DECK_SIZE as u8 {
                pairs[idx] = [i, j];
                idx += 1;
            }
        }
        Self { pairs }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<[u8; 2]> {
        self.pairs.get(index).copied()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[[u8; 2]] {
        &self.pairs[..]
    }

    /// Pairs each weight of `range` with the hand it stands for.
    ///
    /// Only the length of `range` matters; the result is the table itself.
    pub fn build_hands(&self, range: &[f64]) -> Result<&[[u8; 2]], RolloutError> {
        if range.len() != NUM_PAIRS {
            return Err(RolloutError::RangeLength(range.len()));
        }
        Ok(self.as_slice())
    }
}

impl Default for PairTable {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollout::ErrorKind;
    use std::collections::HashSet;

    #[test]
    fn table_is_canonical() {
        let table = PairTable::build();
        let pairs = table.as_slice();
        assert_eq!(pairs.len(), 1326);

        assert_eq!(pairs[0], [0, 1]);
        assert_eq!(pairs[50], [0, 51]);
        assert_eq!(pairs[51], [1, 2]);
        assert_eq!(pairs[1325], [50, 51]);

        assert!(pairs.iter().all(|&[i, j]| i < j && (j as usize) < DECK_SIZE));
        assert!(pairs.windows(2).all(|w| w[0] < w[1]));

        let distinct: HashSet<_> = pairs.iter().collect();
        assert_eq!(distinct.len(), NUM_PAIRS);
    }

    #[test]
    fn pair_index_inverts_table() {
        let table = PairTable::build();
        for (k, &[i, j]) in table.as_slice().iter().enumerate() {
            assert_eq!(pair_index(i, j), Some(k));
            assert_eq!(pair_index(j, i), Some(k));
            assert_eq!(table.get(k), Some([i, j]));
        }

        assert_eq!(pair_index(7, 7), None);
        assert_eq!(pair_index(3, 52), None);
        assert_eq!(table.get(NUM_PAIRS), None);
    }

    #[test]
    fn build_hands_ignores_weights() {
        let table = PairTable::build();

        let zeros = vec![0.0; NUM_PAIRS];
        let ramp: Vec<f64> = (0..NUM_PAIRS).map(|k| k as f64).collect();
        assert_eq!(table.build_hands(&zeros).unwrap(), table.as_slice());
        assert_eq!(table.build_hands(&ramp).unwrap(), table.as_slice());
    }

    #[test]
    fn build_hands_rejects_wrong_length() {
        let table = PairTable::build();

        for len in [0, 1325, 1327] {
            let err = table.build_hands(&vec![0.1; len]).unwrap_err();
            assert_eq!(err, RolloutError::RangeLength(len));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }
}
