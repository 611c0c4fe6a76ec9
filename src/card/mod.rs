//! Card system: cells, the 5×5 grid, generation, and win patterns.
//!
//! ## Key Types
//!
//! - `Cell`: tagged cell state, `Number(u8)` or `Marked`
//! - `Card`: the grid plus `mark` and `winning_pattern`
//! - `CardGenerator`: rejection-sampling card construction
//! - `WinPattern`: the four recognized winning line shapes

pub mod cell;
pub mod generator;
pub mod grid;
pub mod win;

pub use cell::Cell;
pub use generator::{CardGenerator, GenerateError};
pub use grid::{Card, CENTER, GRID_SIZE};
pub use win::WinPattern;
