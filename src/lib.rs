//! Exact Texas Hold'em rollout equity against weighted opponent ranges.
//!
//! ```
//! use range_rollout::{deck_without, pair_index, Rollout, NUM_PAIRS};
//!
//! let rollout = Rollout::new();
//! let aces = [51, 38]; // As Ah
//! let mut range = vec![0.0; NUM_PAIRS];
//! range[pair_index(11, 24).unwrap()] = 1.0; // Kc Kd
//!
//! let board = [0, 18, 33]; // 2c 7d 9h
//! // Kc Kd are dead too: a runout dealing either king would block the
//! // opponent hand and its weight is dropped, not spread over the range.
//! let deck = deck_without(&[51, 38, 11, 24]);
//! let equity = rollout.rollout(&aces, &range, &board, &deck).unwrap();
//! assert!((equity - 907.0 / 990.0).abs() < 1e-12);
//! ```

pub mod card;
pub mod bitboard;
pub mod lut13;
pub mod score;
pub mod evaluator;
pub mod cardset;
pub mod pairs;
pub mod runout;
pub mod rollout;

pub use card::{deck_without, full_deck, Card, Rank, Suit, DECK_SIZE};
pub use bitboard::{BitBoard4x13, MASK13};
pub use cardset::CardSet;
pub use evaluator::{evaluate, evaluate_ids, BitBoardEvaluator, HandEvaluator};
pub use pairs::{pair_index, PairTable, NUM_PAIRS};
pub use rollout::{ErrorKind, Rollout, RolloutError, BOARD_SIZE, HOLE_CARDS};
pub use runout::{count_combinations, for_each_combination, remaining};
pub use score::{Category, Score};
