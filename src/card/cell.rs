//! Cell state for a single card position.
//!
//! A cell either still holds its printed number or has been marked.
//! Marked is its own variant, never a sentinel number.

use serde::{Deserialize, Serialize};

/// One position on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell holding its printed ball value.
    Number(u8),
    /// Marked cell. The center starts here; every other cell reaches it
    /// through `Card::mark`.
    Marked,
}

impl Cell {
    /// The printed number, if the cell is still unmarked.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Cell::Number(value) => Some(value),
            Cell::Marked => None,
        }
    }

    /// Whether the cell has been marked.
    #[must_use]
    pub const fn is_marked(self) -> bool {
        matches!(self, Cell::Marked)
    }
}
