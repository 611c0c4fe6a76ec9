//! Win patterns.
//!
//! Four line shapes end the game: a full row, a full column, and the two
//! diagonals. The center cell counts toward any line it sits on.

use serde::{Deserialize, Serialize};

use crate::core::Column;

/// A fully-marked winning line.
///
/// Row and column variants carry which line completed; the reported name
/// does not depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPattern {
    /// Fully-marked row, 0-based from the top.
    Row(usize),
    /// Fully-marked column.
    Column(Column),
    /// Top-left to bottom-right diagonal.
    DiagonalPrimary,
    /// Top-right to bottom-left diagonal.
    DiagonalSecondary,
}

impl WinPattern {
    /// The reported pattern name.
    ///
    /// These strings are the stable output contract; downstream display
    /// code must not reword them.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            WinPattern::Row(_) => "Horizontal line.",
            WinPattern::Column(_) => "Vertical line.",
            WinPattern::DiagonalPrimary => "Diagonal (primary).",
            WinPattern::DiagonalSecondary => "Diagonal (secondary).",
        }
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_names_are_exact() {
        assert_eq!(WinPattern::Row(0).description(), "Horizontal line.");
        assert_eq!(WinPattern::Row(4).description(), "Horizontal line.");
        assert_eq!(
            WinPattern::Column(Column::G).description(),
            "Vertical line."
        );
        assert_eq!(
            WinPattern::DiagonalPrimary.description(),
            "Diagonal (primary)."
        );
        assert_eq!(
            WinPattern::DiagonalSecondary.description(),
            "Diagonal (secondary)."
        );
    }

    #[test]
    fn test_display_matches_description() {
        let pattern = WinPattern::Column(Column::B);
        assert_eq!(pattern.to_string(), pattern.description());
    }

    #[test]
    fn test_serialization() {
        let pattern = WinPattern::Row(2);
        let json = serde_json::to_string(&pattern).unwrap();
        let deserialized: WinPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(pattern, deserialized);
    }
}
