//! Core engine types: columns, ball constants, RNG.
//!
//! This module contains the fundamental building blocks the card, pool,
//! and game modules are assembled from.

pub mod column;
pub mod rng;

pub use column::{Column, BALL_MAX, BALL_MIN};
pub use rng::GameRng;
