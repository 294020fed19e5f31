//! Core types and traits for the Fermat near-miss search.
//!
//! This crate defines the shared contracts that the solvers, observers, and
//! the command-line front end build on:
//!
//! - [`SearchParameters`] — a validated exponent `n` and upper bound `k`
//! - [`Candidate`] — one `(x, y)` pair from the search grid
//! - [`Bracket`] — the consecutive n-th powers straddling a power sum
//! - [`MissRecord`] and [`RelativeMiss`] — how close a pair came, measured exactly
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! All arithmetic uses [`num_bigint::BigUint`]; nothing here rounds.

mod bracket;
mod candidate;
mod observer;
mod params;
mod record;
mod relative;

pub use bracket::Bracket;
pub use candidate::Candidate;
pub use observer::Observer;
pub use params::{MAX_EXPONENT, MIN_BASE, MIN_EXPONENT, ParamsError, SearchParameters};
pub use record::MissRecord;
pub use relative::{ParseRelativeMissError, RelativeMiss};
