use num_bigint::BigUint;
use num_traits::One;

/// Half-open search interval `(low, high]` for an integer n-th root.
///
/// Maintains `low^n ≤ value < high^n`, so the floor root always lies in
/// `[low, high)`. Once `high = low + 1`, `low` is the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RootBracket {
    pub(super) low: BigUint,
    pub(super) high: BigUint,
}

impl RootBracket {
    /// Doubles `high` from 1 until `high^n > value`.
    ///
    /// The last probe that did not exceed `value` becomes `low`. `value`
    /// must be at least 1 so the first probe qualifies.
    pub(super) fn enclosing(value: &BigUint, n: u32) -> Self {
        debug_assert!(n > 0, "root degree must be positive");
        debug_assert!(*value >= BigUint::one(), "value must be at least 1");

        let mut high = BigUint::one();
        while high.pow(n) <= *value {
            high <<= 1u32;
        }
        let low = &high >> 1u32;

        Self { low, high }
    }

    /// Returns the integer midpoint, strictly inside the interval when not tight.
    pub(super) fn midpoint(&self) -> BigUint {
        (&self.low + &self.high) >> 1u32
    }

    /// Returns true once no integer lies strictly between `low` and `high`.
    pub(super) fn is_tight(&self) -> bool {
        &self.low + 1u32 >= self.high
    }

    /// Moves `low` up to a point whose n-th power is below the value.
    pub(super) fn raise_low(&mut self, mid: BigUint) {
        self.low = mid;
    }

    /// Moves `high` down to a point whose n-th power is above the value.
    pub(super) fn lower_high(&mut self, mid: BigUint) {
        self.high = mid;
    }

    /// Consumes the bracket and returns `low`.
    pub(super) fn into_low(self) -> BigUint {
        self.low
    }
}
