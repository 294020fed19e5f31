//! Exact integer n-th roots.
//!
//! # Algorithm
//!
//! [`integer_nth_root`] finds `r = ⌊value^(1/n)⌋` in two phases:
//!
//! 1. **Exponential search** — double a probe from 1 until its n-th power
//!    exceeds `value`. This brackets the root between the last two probes
//!    without assuming any fixed upper limit.
//! 2. **Bisection** — repeatedly compare `mid^n` with `value` using exact
//!    big-integer exponentiation, returning early on an exact match.
//!
//! Every comparison is exact, so the result is correct for values of any
//! size. Floating-point roots are never consulted.

mod bracket;

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::One;

use bracket::RootBracket;

/// Returns the largest `r` such that `r^n ≤ value`.
///
/// Values 0 and 1 are their own roots for every `n`. The result satisfies
/// `r^n ≤ value < (r+1)^n`.
///
/// `n` must be positive; `n = 0` has no meaningful root.
#[must_use]
pub fn integer_nth_root(value: &BigUint, n: u32) -> BigUint {
    if *value <= BigUint::one() {
        return value.clone();
    }

    let mut bracket = RootBracket::enclosing(value, n);

    while !bracket.is_tight() {
        let mid = bracket.midpoint();
        match mid.pow(n).cmp(value) {
            Ordering::Equal => return mid,
            Ordering::Less => bracket.raise_low(mid),
            Ordering::Greater => bracket.lower_high(mid),
        }
    }

    bracket.into_low()
}
