//! Column identifiers and their fixed ball ranges.
//!
//! An American Bingo card has five columns, each bound to a disjoint
//! 15-value range:
//!
//! | Column | Range |
//! |--------|-------|
//! | B      | 1-15  |
//! | I      | 16-30 |
//! | N      | 31-45 |
//! | G      | 46-60 |
//! | O      | 61-75 |
//!
//! The ranges partition `1..=75` with no overlap and no gaps, so every
//! drawable ball belongs to exactly one column.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Lowest drawable ball value.
pub const BALL_MIN: u8 = 1;

/// Highest drawable ball value.
pub const BALL_MAX: u8 = 75;

/// One of the five card columns.
///
/// Column order on the card is `[B, I, N, G, O]`, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    B,
    I,
    N,
    G,
    O,
}

impl Column {
    /// All columns in card order.
    pub const ALL: [Column; 5] = [Column::B, Column::I, Column::N, Column::G, Column::O];

    /// The inclusive ball range this column draws from.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Column::B => 1..=15,
            Column::I => 16..=30,
            Column::N => 31..=45,
            Column::G => 46..=60,
            Column::O => 61..=75,
        }
    }

    /// Number of values in this column's range.
    #[must_use]
    pub const fn range_len(self) -> usize {
        let range = self.range();
        (*range.end() - *range.start() + 1) as usize
    }

    /// 0-based position of this column on the card (B = 0, O = 4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column at a 0-based card position.
    ///
    /// Returns `None` for indices past the last column.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Column> {
        match index {
            0 => Some(Column::B),
            1 => Some(Column::I),
            2 => Some(Column::N),
            3 => Some(Column::G),
            4 => Some(Column::O),
            _ => None,
        }
    }

    /// The column a drawn ball belongs to.
    ///
    /// Returns `None` for values outside `BALL_MIN..=BALL_MAX`.
    #[must_use]
    pub fn of_ball(ball: u8) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|column| column.range().contains(&ball))
    }

    /// The header letter for this column.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Column::B => 'B',
            Column::I => 'I',
            Column::N => 'N',
            Column::G => 'G',
            Column::O => 'O',
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
