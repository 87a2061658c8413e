//! Undealt cards and board runouts.
//!
//! [`remaining`] computes the cards that can still fall (deck minus board) and
//! [`for_each_combination`] visits every k-card subset of them exactly once.

/// Sorted set difference `deck \ board` into `out`.
///
/// Both inputs must be ascending and duplicate-free; `out` is cleared first so
/// one buffer can be reused across calls.
pub fn remaining(deck: &[u8], board: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(deck.len());

    let mut b = board.iter().peekable();
    for &card in deck {
        while b.next_if(|&&x| x < card).is_some() {}
        if b.next_if_eq(&&card).is_none() {
            out.push(card);
        }
    }
}

/// Binomial coefficient C(n, k), 0 when k > n.
pub fn count_combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // each partial product is itself a binomial coefficient, so the division is exact
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i as u64 + 1))
}

/// Calls `f` once for every k-subset of `cards`, in lexicographic order of
/// positions. `k == 0` yields the empty subset once; `k > cards.len()` yields
/// nothing. Returns the number of subsets visited.
///
/// The slice passed to `f` is a reused buffer, valid only for that call.
pub fn for_each_combination<F>(cards: &[u8], k: usize, mut f: F) -> u64
where
    F: FnMut(&[u8]),
{
    let n = cards.len();
    if k > n {
        return 0;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    let mut combo: Vec<u8> = cards[..k].to_vec();
    let mut visited = 0u64;

    loop {
        f(&combo);
        visited += 1;

        // rightmost position that can still advance
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return visited;
        };

        idx[i] += 1;
        combo[i] = cards[idx[i]];
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
            combo[j] = cards[idx[j]];
        }
    }
}
