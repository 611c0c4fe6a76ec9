//! Session orchestration: the draw loop and its outcome.
//!
//! ## Key Types
//!
//! - `GameSession`: owns the card, the pool, and the draw RNG
//! - `BallDraw` / `DrawOutcome`: per-turn report
//! - `GameOutcome`: win with pattern, or pool exhaustion

pub mod outcome;
pub mod session;

pub use outcome::GameOutcome;
pub use session::{BallDraw, DrawOutcome, GameSession, GameSessionBuilder};
