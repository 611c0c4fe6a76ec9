//! # bingo-engine
//!
//! A single-player American Bingo engine: card generation, ball draws,
//! match detection, and win-pattern evaluation.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: the card, the pool, and the RNG are owned
//!    objects passed explicitly. No module-level state.
//!
//! 2. **Deterministic when seeded**: every randomized operation takes a
//!    [`GameRng`]; the same seed replays the same card and draw sequence.
//!
//! 3. **Tagged cell state**: marked-vs-numeric is an enum variant, never
//!    a sentinel value that could collide with a printable number.
//!
//! ## Modules
//!
//! - `core`: columns, ball constants, RNG
//! - `card`: cells, the 5×5 grid, generation, win patterns
//! - `pool`: the 75-ball draw-without-replacement pool
//! - `game`: the session loop and its outcome
//! - `render`: plain-text card and outcome formatting
//!
//! ## Quick Start
//!
//! ```
//! use bingo_engine::game::GameSession;
//!
//! let mut session = GameSession::builder().seed(42).build().unwrap();
//! let outcome = session.run_to_completion();
//! assert!(session.is_over());
//! # let _ = outcome;
//! ```

pub mod card;
pub mod core;
pub mod game;
pub mod pool;
pub mod render;

// Re-export commonly used types
pub use crate::core::{Column, GameRng, BALL_MAX, BALL_MIN};

pub use crate::card::{Card, CardGenerator, Cell, GenerateError, WinPattern, CENTER, GRID_SIZE};

pub use crate::pool::NumberPool;

pub use crate::game::{BallDraw, DrawOutcome, GameOutcome, GameSession, GameSessionBuilder};

pub use crate::render::{card_to_string, outcome_line};
