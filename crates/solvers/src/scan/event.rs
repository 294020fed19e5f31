use fermat_core::{Candidate, MissRecord, RelativeMiss};
use num_bigint::BigUint;

/// Events emitted by the near-miss scanner.
///
/// Events arrive in grid order (x outer, y inner). Successive
/// [`Event::NewBest`] events carry strictly decreasing relative misses.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A pair produced a strictly smaller relative miss than any before it.
    NewBest {
        /// The new best miss.
        record: &'a MissRecord,

        /// The best miss it replaces, if any.
        previous: Option<&'a MissRecord>,
    },

    /// A pair summed to an exact n-th power and was skipped.
    PerfectPower {
        /// The pair that was skipped.
        candidate: Candidate,

        /// The exact root of `x^n + y^n`.
        root: &'a BigUint,
    },
}

impl Event<'_> {
    /// Returns the pair this event concerns.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        match self {
            Self::NewBest { record, .. } => record.candidate,
            Self::PerfectPower { candidate, .. } => *candidate,
        }
    }

    /// Returns the new best relative miss, or `None` for a skipped pair.
    #[must_use]
    pub fn relative_miss(&self) -> Option<&RelativeMiss> {
        match self {
            Self::NewBest { record, .. } => Some(&record.relative_miss),
            Self::PerfectPower { .. } => None,
        }
    }
}
