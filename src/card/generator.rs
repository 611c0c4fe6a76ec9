//! Card generation.
//!
//! Each column draws its values from the column's fixed 15-value range by
//! rejection sampling: sample uniformly, resample on collision, until the
//! column has enough distinct values. There is no retry cap; termination
//! is probabilistic, not bounded.
//!
//! ## Usage
//!
//! ```
//! use bingo_engine::card::CardGenerator;
//!
//! let mut generator = CardGenerator::from_seed(42);
//! let card = generator.generate().unwrap();
//! assert_eq!(card.marked_count(), 1); // center only
//! ```

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

use super::cell::Cell;
use super::grid::{Card, CENTER, GRID_SIZE};
use crate::core::{Column, GameRng};

/// Card construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A column's range holds fewer values than the rows it must fill.
    /// Cannot occur with the fixed B..O ranges; guarded so a misconfigured
    /// range fails instead of resampling forever.
    #[error("column {column} needs {needed} distinct values but its range holds {available}")]
    ColumnExhausted {
        column: Column,
        needed: usize,
        available: usize,
    },
}

/// Produces randomized cards from an injected RNG.
///
/// Cards from the same seed are identical; see [`GameRng`].
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: GameRng,
}

impl CardGenerator {
    /// Create a generator from an RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a generator from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Generate a card.
    ///
    /// Non-N columns get 5 distinct values placed top to bottom in draw
    /// order; column N gets 4 with the center cell fixed as marked.
    pub fn generate(&mut self) -> Result<Card, GenerateError> {
        let mut rows = [[Cell::Marked; GRID_SIZE]; GRID_SIZE];

        for column in Column::ALL {
            let needed = if column == Column::N {
                GRID_SIZE - 1
            } else {
                GRID_SIZE
            };
            let values = self.sample_distinct(column, needed)?;
            let mut drawn = values.into_iter();

            for (row, cells) in rows.iter_mut().enumerate() {
                if (row, column.index()) == CENTER {
                    continue; // stays Marked
                }
                let value = drawn.next().expect("one sample per open row");
                cells[column.index()] = Cell::Number(value);
            }
        }

        Ok(Card::from_rows(rows))
    }

    /// Draw `needed` distinct values from a column's range, in draw order.
    fn sample_distinct(
        &mut self,
        column: Column,
        needed: usize,
    ) -> Result<SmallVec<[u8; GRID_SIZE]>, GenerateError> {
        let available = column.range_len();
        if needed > available {
            return Err(GenerateError::ColumnExhausted {
                column,
                needed,
                available,
            });
        }

        let mut used = FxHashSet::default();
        let mut values = SmallVec::new();
        let mut rejections = 0u32;

        while values.len() < needed {
            let candidate = self.rng.gen_range_u8(column.range());
            if used.insert(candidate) {
                values.push(candidate);
            } else {
                rejections += 1;
            }
        }

        trace!("column {column}: {needed} values after {rejections} rejections");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_card() {
        let card1 = CardGenerator::from_seed(42).generate().unwrap();
        let card2 = CardGenerator::from_seed(42).generate().unwrap();
        assert_eq!(card1, card2);
    }

    #[test]
    fn test_consecutive_cards_differ() {
        let mut generator = CardGenerator::from_seed(42);
        let card1 = generator.generate().unwrap();
        let card2 = generator.generate().unwrap();
        assert_ne!(card1, card2);
    }

    #[test]
    fn test_center_is_marked_and_alone() {
        let card = CardGenerator::from_seed(7).generate().unwrap();
        assert!(card.cell(CENTER.0, Column::N).is_marked());
        assert_eq!(card.marked_count(), 1);
    }

    #[test]
    fn test_columns_hold_distinct_in_range_values() {
        let card = CardGenerator::from_seed(123).generate().unwrap();

        for column in Column::ALL {
            let values: Vec<u8> = (0..GRID_SIZE)
                .filter_map(|row| card.cell(row, column).number())
                .collect();

            let expected = if column == Column::N { 4 } else { 5 };
            assert_eq!(values.len(), expected);

            let mut deduped = values.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), values.len(), "duplicate in column {column}");

            for value in values {
                assert!(
                    column.range().contains(&value),
                    "{value} outside {column} range"
                );
            }
        }
    }

    #[test]
    fn test_sample_distinct_rejects_impossible_request() {
        let mut generator = CardGenerator::from_seed(0);
        let err = generator.sample_distinct(Column::B, 16).unwrap_err();
        assert_eq!(
            err,
            GenerateError::ColumnExhausted {
                column: Column::B,
                needed: 16,
                available: 15,
            }
        );
    }

    #[test]
    fn test_sample_distinct_can_drain_a_full_range() {
        // Worst case for rejection sampling: every value must be found.
        let mut generator = CardGenerator::from_seed(99);
        let values = generator.sample_distinct(Column::O, 15).unwrap();

        let mut sorted: Vec<u8> = values.into_iter().collect();
        sorted.sort_unstable();
        let expected: Vec<u8> = Column::O.range().collect();
        assert_eq!(sorted, expected);
    }
}
