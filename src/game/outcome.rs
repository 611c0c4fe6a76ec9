//! End-of-game outcome.

use serde::{Deserialize, Serialize};

use crate::card::WinPattern;

/// Result of a completed session.
///
/// Produced exactly once, when the loop terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A line completed; carries the winning pattern.
    Win(WinPattern),
    /// Every ball was drawn without completing a line.
    Exhausted,
}

impl GameOutcome {
    /// Whether the session ended in a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameOutcome::Win(_))
    }

    /// The winning pattern, if the session was won.
    #[must_use]
    pub const fn pattern(self) -> Option<WinPattern> {
        match self {
            GameOutcome::Win(pattern) => Some(pattern),
            GameOutcome::Exhausted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_outcome() {
        let outcome = GameOutcome::Win(WinPattern::DiagonalPrimary);
        assert!(outcome.is_win());
        assert_eq!(outcome.pattern(), Some(WinPattern::DiagonalPrimary));
    }

    #[test]
    fn test_exhausted_outcome() {
        let outcome = GameOutcome::Exhausted;
        assert!(!outcome.is_win());
        assert_eq!(outcome.pattern(), None);
    }

    #[test]
    fn test_serialization() {
        let outcome = GameOutcome::Win(WinPattern::Row(3));
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GameOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
