//! Solvers for the Fermat near-miss search.
//!
//! # Modules
//!
//! - [`root`] — exact floor of the n-th root of a big integer
//! - [`scan`] — walks the `(x, y)` grid and tracks the smallest relative miss
//!
//! Both are exact: no floating-point value ever feeds back into a comparison.

pub mod root;
pub mod scan;
