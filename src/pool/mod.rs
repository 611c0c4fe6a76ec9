//! Ball pool: the not-yet-drawn values.

pub mod number_pool;

pub use number_pool::NumberPool;
