use fermat_core::{Bracket, Candidate, MissRecord};
use num_bigint::BigUint;

use crate::root::integer_nth_root;

/// The outcome of examining a single pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// `x^n + y^n` is itself a perfect n-th power.
    PerfectPower { candidate: Candidate, root: BigUint },

    /// `x^n + y^n` falls strictly between consecutive n-th powers.
    Miss(MissRecord),
}

/// Classifies one pair against the n-th powers that bracket its sum.
///
/// Computes `s = x^n + y^n`, its floor root `z`, and the bracket
/// `z^n ≤ s < (z+1)^n`. The absolute miss is the smaller gap, with ties
/// going to `z`.
#[must_use]
pub fn evaluate(candidate: Candidate, n: u32) -> Evaluation {
    let sum = candidate.power_sum(n);
    let bracket = Bracket::from_root(integer_nth_root(&sum, n), n);

    if let Some(root) = bracket.exact_root(&sum) {
        return Evaluation::PerfectPower { candidate, root };
    }

    let (z, absolute_miss) = bracket.nearest(&sum);
    Evaluation::Miss(MissRecord::new(candidate, z, absolute_miss, sum))
}
