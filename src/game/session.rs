//! Game session: the draw/mark/evaluate loop.
//!
//! A session owns one card, one pool, and the draw RNG. Each `step` draws
//! a ball, marks the card, and on a match checks for a completed line.
//! The loop terminates when a line completes or the pool runs dry; the
//! decided [`GameOutcome`] is recorded once and never changes.
//!
//! ## Usage
//!
//! ```
//! use bingo_engine::game::GameSession;
//!
//! let mut session = GameSession::builder().seed(42).build().unwrap();
//! let outcome = session.run_to_completion();
//! assert!(session.is_over());
//! # let _ = outcome;
//! ```

use log::{debug, info};

use super::outcome::GameOutcome;
use crate::card::{Card, CardGenerator, GenerateError, WinPattern};
use crate::core::GameRng;
use crate::pool::NumberPool;

/// Report for one drawn ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallDraw {
    /// The drawn ball value.
    pub ball: u8,
    /// Whether the ball matched an unmarked cell.
    pub matched: bool,
    /// The completed line, if this marking won the game. Only a matched
    /// draw can win.
    pub win: Option<WinPattern>,
}

/// Result of a single session step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A ball was drawn; see the report.
    Drawn(BallDraw),
    /// The pool was empty. The session is over with no winner.
    PoolEmpty,
}

/// A single-player session: one card against the 75-ball pool.
#[derive(Clone, Debug)]
pub struct GameSession {
    card: Card,
    pool: NumberPool,
    rng: GameRng,
    draws: u32,
    outcome: Option<GameOutcome>,
}

/// Builder for a session.
///
/// Without a seed the session is seeded from the operating system; with
/// one, the card and the full draw sequence replay exactly.
#[derive(Clone, Debug, Default)]
pub struct GameSessionBuilder {
    seed: Option<u64>,
}

impl GameSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the seed for a replayable session.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the card and assemble the session.
    pub fn build(self) -> Result<GameSession, GenerateError> {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        // Card generation gets its own stream so ball draws stay
        // independent of how many samples the card consumed.
        let mut generator = CardGenerator::new(rng.fork());
        let card = generator.generate()?;

        Ok(GameSession::from_parts(card, NumberPool::new(), rng))
    }
}

impl GameSession {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Assemble a session from explicit parts.
    ///
    /// Used by the builder and by scenario setups that need a specific
    /// card or a partially drawn pool.
    #[must_use]
    pub fn from_parts(card: Card, pool: NumberPool, rng: GameRng) -> Self {
        Self {
            card,
            pool,
            rng,
            draws: 0,
            outcome: None,
        }
    }

    /// The player's card.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// The remaining pool.
    #[must_use]
    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    /// Balls drawn so far.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// The decided outcome, if the session has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play one turn: draw, mark, and on a match evaluate the card.
    ///
    /// Records the outcome when the turn ends the game. Panics if called
    /// after the outcome is decided; check `is_over` first.
    pub fn step(&mut self) -> DrawOutcome {
        assert!(self.outcome.is_none(), "session already ended");

        let Some(ball) = self.pool.draw(&mut self.rng) else {
            debug!("pool exhausted after {} draws, no winner", self.draws);
            self.outcome = Some(GameOutcome::Exhausted);
            return DrawOutcome::PoolEmpty;
        };

        self.draws += 1;
        let matched = self.card.mark(ball);
        debug!("draw {}: ball {ball}, matched: {matched}", self.draws);

        let win = if matched {
            self.card.winning_pattern()
        } else {
            None
        };

        if let Some(pattern) = win {
            info!("bingo on draw {}: {pattern}", self.draws);
            self.outcome = Some(GameOutcome::Win(pattern));
        }

        DrawOutcome::Drawn(BallDraw { ball, matched, win })
    }

    /// Step until the game ends, returning the outcome.
    pub fn run_to_completion(&mut self) -> GameOutcome {
        while self.outcome.is_none() {
            self.step();
        }
        self.outcome.expect("loop exits once the outcome is decided")
    }
}
