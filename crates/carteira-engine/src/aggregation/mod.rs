//! Arithmetic building blocks shared by every rollup level.
//!
//! - [`sum`]: Value rollups over holdings
//! - [`share`]: Percentage of a denominator, 0 when the denominator is degenerate
//! - [`gap()`]: Gap to target and contribution needed
//!
//! All functions are pure and never fail.

mod gap;
mod parallel;
mod share;
mod value;

pub use gap::{gap, Gap};
pub use parallel::maybe_parallel_map;
pub use share::{return_percent, share};
pub use value::{finite_or_zero, mean, sum, ValueField};
