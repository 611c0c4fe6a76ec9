//! Draw-without-replacement ball pool.
//!
//! Starts with every value in `1..=75` and only ever shrinks. An empty
//! pool is the expected end-of-game signal, not an error: `draw` returns
//! `None` and the session reports exhaustion.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, BALL_MAX, BALL_MIN};

/// The set of balls not yet drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPool {
    remaining: Vec<u8>,
}

impl NumberPool {
    /// Create a full pool holding `1..=75`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: (BALL_MIN..=BALL_MAX).collect(),
        }
    }

    /// Draw one ball uniformly at random among the remaining values.
    ///
    /// The drawn ball leaves the pool and never returns. `None` means the
    /// pool is exhausted.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<u8> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Number of balls left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether every ball has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether `ball` is still undrawn.
    #[must_use]
    pub fn contains(&self, ball: u8) -> bool {
        self.remaining.contains(&ball)
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self::new()
    }
}
