//! Exact rollout equity of a hand against a weighted opponent range.
//!
//! For every completion of the board to five cards the player's hand and each
//! unblocked opponent hand are scored; the weight of every hand the player
//! strictly beats is added to that board's won mass. The result is the won
//! mass averaged over all completions.
//!
//! Ties count as losses, and the weight of opponent hands removed by blockers
//! is dropped rather than redistributed over the rest of the range. With a
//! range that sums to 1 the result is therefore a lower bound on win
//! probability whenever blockers are present.

use std::fmt;

use crate::card::DECK_SIZE;
use crate::cardset::CardSet;
use crate::evaluator::{BitBoardEvaluator, HandEvaluator};
use crate::pairs::{PairTable, NUM_PAIRS};
use crate::runout::{count_combinations, for_each_combination, remaining};

/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Hole cards per player; a scored hand never exceeds seven cards.
pub const HOLE_CARDS: usize = 2;

/// Broad classes of rollout failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A precondition on the inputs was violated; nothing was computed.
    InvalidInput,
    /// Enumeration finished without scoring any board.
    Rollout,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RolloutError {
    RangeLength(usize),
    EmptyPlayerHand,
    TooManyHoleCards(usize),
    TooManyBoardCards(usize),
    EmptyDeck,
    CardOutOfRange(u8),
    /// Board or deck is not strictly ascending.
    Unsorted(&'static str),
    NotEnoughCards { needed: usize, remaining: usize },
    NoBoards,
}

impl RolloutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RolloutError::NoBoards => ErrorKind::Rollout,
            _ => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for RolloutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeLength(n) => {
                write!(f, "opponent range has {n} weights, expected {NUM_PAIRS}")
            }
            Self::EmptyPlayerHand => write!(f, "player hand is empty"),
            Self::TooManyHoleCards(n) => write!(f, "player hand has {n} cards, at most {HOLE_CARDS} allowed"),
            Self::TooManyBoardCards(n) => write!(f, "board has {n} cards, at most {BOARD_SIZE} allowed"),
            Self::EmptyDeck => write!(f, "deck is empty"),
            Self::CardOutOfRange(id) => write!(f, "card id {id} is out of range 0..{DECK_SIZE}"),
            Self::Unsorted(what) => write!(f, "{what} must be strictly ascending"),
            Self::NotEnoughCards { needed, remaining } => {
                write!(f, "need {needed} cards to complete the board, only {remaining} remain")
            }
            Self::NoBoards => write!(f, "no boards were evaluated"),
        }
    }
}

impl std::error::Error for RolloutError {}

fn check_ids(cards: &[u8]) -> Result<(), RolloutError> {
    match cards.iter().find(|&&c| c as usize >= DECK_SIZE) {
        Some(&c) => Err(RolloutError::CardOutOfRange(c)),
        None => Ok(()),
    }
}

fn check_ascending(cards: &[u8], what: &'static str) -> Result<(), RolloutError> {
    if cards.windows(2).all(|w| w[0] < w[1]) {
        Ok(())
    } else {
        Err(RolloutError::Unsorted(what))
    }
}

/// Rollout engine: the canonical pair table plus a hand evaluator.
///
/// Both are read-only after construction, so one `Rollout` can serve any
/// number of concurrent calls; every call keeps its working buffers local.
#[derive(Clone, Debug)]
pub struct Rollout<E = BitBoardEvaluator> {
    table: PairTable,
    evaluator: E,
}

impl Rollout<BitBoardEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(BitBoardEvaluator)
    }
}

impl Default for Rollout<BitBoardEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HandEvaluator> Rollout<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            table: PairTable::build(),
            evaluator,
        }
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Win probability of `player_hand` against `opp_range`, averaged over
    /// every completion of `board` drawn from `deck`.
    ///
    /// - `player_hand` holds one or two cards, so scored hands stay within
    ///   the evaluator's 5 to 7 card contract.
    /// - `opp_range` holds one weight per [`PairTable`] entry (1326).
    /// - `board` holds 0..=5 cards, `deck` the cards still eligible to fall;
    ///   both strictly ascending. Board cards present in the deck are skipped.
    /// - Opponent hands sharing a card with the player's hand or the
    ///   completed board are left out for that board.
    pub fn rollout(
        &self,
        player_hand: &[u8],
        opp_range: &[f64],
        board: &[u8],
        deck: &[u8],
    ) -> Result<f64, RolloutError> {
        let mut rem = Vec::with_capacity(DECK_SIZE);
        self.rollout_with_buffer(player_hand, opp_range, board, deck, &mut rem)
    }

    /// Equity of each hand in `player_hands` against the same range and board.
    pub fn rollout_hands(
        &self,
        player_hands: &[[u8; 2]],
        opp_range: &[f64],
        board: &[u8],
        deck: &[u8],
    ) -> Result<Vec<f64>, RolloutError> {
        let mut rem = Vec::with_capacity(DECK_SIZE);
        player_hands
            .iter()
            .map(|hand| self.rollout_with_buffer(hand, opp_range, board, deck, &mut rem))
            .collect()
    }

    fn rollout_with_buffer(
        &self,
        player_hand: &[u8],
        opp_range: &[f64],
        board: &[u8],
        deck: &[u8],
        rem: &mut Vec<u8>,
    ) -> Result<f64, RolloutError> {
        if player_hand.is_empty() {
            return Err(RolloutError::EmptyPlayerHand);
        }
        if player_hand.len() > HOLE_CARDS {
            return Err(RolloutError::TooManyHoleCards(player_hand.len()));
        }
        if board.len() > BOARD_SIZE {
            return Err(RolloutError::TooManyBoardCards(board.len()));
        }
        if deck.is_empty() {
            return Err(RolloutError::EmptyDeck);
        }
        let hands = self.table.build_hands(opp_range)?;
        check_ids(player_hand)?;
        check_ids(board)?;
        check_ids(deck)?;
        check_ascending(board, "board")?;
        check_ascending(deck, "deck")?;

        remaining(deck, board, rem);
        let to_deal = BOARD_SIZE - board.len();
        if to_deal > rem.len() {
            return Err(RolloutError::NotEnoughCards {
                needed: to_deal,
                remaining: rem.len(),
            });
        }

        log::debug!(
            "rollout: {} board cards, {} remaining, {} runouts",
            board.len(),
            rem.len(),
            count_combinations(rem.len(), to_deal)
        );

        let e = &self.evaluator;
        let player = e.add_cards(e.empty(), player_hand);
        let fixed_board = e.add_cards(e.empty(), board);

        // board and hole cards block for the whole call, runout cards per board
        let mut fixed = CardSet::from_ids(board);
        fixed.extend(player_hand);
        let mut blockers = fixed;

        let mut total_won = 0.0;
        let boards = for_each_combination(rem, to_deal, |runout| {
            blockers.extend(runout);

            let completed = e.add_cards(fixed_board, runout);
            let mine = e.evaluate(&e.merge(player, completed));

            let mut won = 0.0;
            for (&weight, &hand) in opp_range.iter().zip(hands) {
                if weight > 0.0 && !blockers.blocks(hand) {
                    let theirs = e.evaluate(&e.add_cards(completed, &hand));
                    if mine > theirs {
                        won += weight;
                    }
                }
            }
            total_won += won;

            // not remove(): a runout card may also be a hole card
            blockers = fixed;
        });

        if boards == 0 {
            return Err(RolloutError::NoBoards);
        }

        log::trace!("rollout: {boards} boards, won mass {total_won}");
        Ok(total_won / boards as f64)
    }
}

#[cfg(feature = "parallel")]
mod par {
    use super::*;
    use rayon::prelude::*;

    impl<E: HandEvaluator + Sync> Rollout<E> {
        /// Parallel [`Rollout::rollout_hands`]: one rollout per hand on the rayon pool.
        pub fn par_rollout_hands(
            &self,
            player_hands: &[[u8; 2]],
            opp_range: &[f64],
            board: &[u8],
            deck: &[u8],
        ) -> Result<Vec<f64>, RolloutError> {
            player_hands
                .par_iter()
                .map_init(
                    || Vec::with_capacity(DECK_SIZE),
                    |rem, hand| self.rollout_with_buffer(hand, opp_range, board, deck, rem),
                )
                .collect()
        }
    }
}
