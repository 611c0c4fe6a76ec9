//! Plain-text rendering of cards and outcomes.
//!
//! The engine never prints; callers take these strings to whatever
//! front end drives the session.

pub mod text;

pub use text::{card_to_string, outcome_line};
