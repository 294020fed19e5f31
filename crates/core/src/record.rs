use num_bigint::BigUint;

use crate::{Candidate, RelativeMiss};

/// How close one pair came to a perfect n-th power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissRecord {
    /// The pair that produced this miss.
    pub candidate: Candidate,

    /// The neighbor (`z` or `z+1`) whose n-th power is closest to the sum.
    pub z: BigUint,

    /// Distance between the sum and `z^n`.
    pub absolute_miss: BigUint,

    /// The power sum `x^n + y^n`.
    pub power_sum: BigUint,

    /// `absolute_miss / power_sum`, exact.
    pub relative_miss: RelativeMiss,
}

impl MissRecord {
    /// Creates a record, deriving the relative miss from the absolute miss and sum.
    #[must_use]
    pub fn new(
        candidate: Candidate,
        z: BigUint,
        absolute_miss: BigUint,
        power_sum: BigUint,
    ) -> Self {
        let relative_miss = RelativeMiss::new(absolute_miss.clone(), power_sum.clone());
        Self {
            candidate,
            z,
            absolute_miss,
            power_sum,
            relative_miss,
        }
    }

    #[must_use]
    pub fn x(&self) -> u64 {
        self.candidate.x
    }

    #[must_use]
    pub fn y(&self) -> u64 {
        self.candidate.y
    }

    /// Returns true if this record's relative miss is strictly smaller.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.relative_miss < other.relative_miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: u64, y: u64, z: u64, absolute: u64, sum: u64) -> MissRecord {
        MissRecord::new(
            Candidate::new(x, y),
            BigUint::from(z),
            BigUint::from(absolute),
            BigUint::from(sum),
        )
    }

    #[test]
    fn derives_relative_miss() {
        let r = record(10, 10, 13, 197, 2000);

        assert_eq!((r.x(), r.y()), (10, 10));
        assert_eq!(
            r.relative_miss,
            RelativeMiss::new(BigUint::from(197u32), BigUint::from(2000u32))
        );
    }

    #[test]
    fn beats_is_strict() {
        let first = record(10, 10, 13, 197, 2000);
        let better = record(10, 11, 13, 134, 2331);
        let same_ratio = record(20, 20, 0, 394, 4000);

        assert!(better.beats(&first));
        assert!(!first.beats(&better));
        assert!(!same_ratio.beats(&first));
        assert!(!first.beats(&same_ratio));
    }
}
