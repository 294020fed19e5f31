use num_bigint::BigUint;

/// The consecutive n-th powers `z^n` and `(z+1)^n` around a power sum.
///
/// Built from a floor root `z` of some sum `s`, so `lower ≤ s < upper`
/// holds whenever `z` is exact. Equality with either bound means `s` is
/// itself a perfect n-th power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    root: BigUint,
    lower: BigUint,
    upper: BigUint,
}

impl Bracket {
    /// Creates the bracket `[z^n, (z+1)^n)` for root `z`.
    #[must_use]
    pub fn from_root(root: BigUint, n: u32) -> Self {
        let lower = root.pow(n);
        let upper = (&root + 1u32).pow(n);
        Self { root, lower, upper }
    }

    /// Returns the lower root `z`.
    #[must_use]
    pub fn root(&self) -> &BigUint {
        &self.root
    }

    /// Returns `z^n`.
    #[must_use]
    pub fn lower(&self) -> &BigUint {
        &self.lower
    }

    /// Returns `(z+1)^n`.
    #[must_use]
    pub fn upper(&self) -> &BigUint {
        &self.upper
    }

    /// Returns true if `lower ≤ sum ≤ upper`.
    #[must_use]
    pub fn contains(&self, sum: &BigUint) -> bool {
        &self.lower <= sum && sum <= &self.upper
    }

    /// Returns the exact root if `sum` equals either bound.
    #[must_use]
    pub fn exact_root(&self, sum: &BigUint) -> Option<BigUint> {
        if sum == &self.lower {
            Some(self.root.clone())
        } else if sum == &self.upper {
            Some(&self.root + 1u32)
        } else {
            None
        }
    }

    /// Returns the closer neighbor and its distance from `sum`.
    ///
    /// Ties go to the lower neighbor `z`. `sum` must lie within the bracket.
    #[must_use]
    pub fn nearest(&self, sum: &BigUint) -> (BigUint, BigUint) {
        debug_assert!(self.contains(sum), "sum lies outside the bracket");

        let below = sum - &self.lower;
        let above = &self.upper - sum;

        if below <= above {
            (self.root.clone(), below)
        } else {
            (&self.root + 1u32, above)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn bounds_are_consecutive_powers() {
        let bracket = Bracket::from_root(big(12), 3);

        assert_eq!(bracket.root(), &big(12));
        assert_eq!(bracket.lower(), &big(1728));
        assert_eq!(bracket.upper(), &big(2197));
    }

    #[test]
    fn nearest_picks_upper_when_closer() {
        // 12³ = 1728 ≤ 2000 < 2197 = 13³; gaps are 272 and 197.
        let bracket = Bracket::from_root(big(12), 3);
        assert_eq!(bracket.nearest(&big(2000)), (big(13), big(197)));
    }

    #[test]
    fn nearest_picks_lower_when_closer() {
        // 12³ + 1 is one above the lower bound.
        let bracket = Bracket::from_root(big(12), 3);
        assert_eq!(bracket.nearest(&big(1729)), (big(12), big(1)));
    }

    #[test]
    fn nearest_ties_go_to_lower_neighbor() {
        // Consecutive powers always differ by an odd amount, so a real
        // bracket never ties. Build one by hand.
        let bracket = Bracket {
            root: big(3),
            lower: big(10),
            upper: big(20),
        };
        assert_eq!(bracket.nearest(&big(15)), (big(3), big(5)));
    }

    #[test]
    fn exact_root_detects_either_bound() {
        let bracket = Bracket::from_root(big(4), 2);

        assert_eq!(bracket.exact_root(&big(16)), Some(big(4)));
        assert_eq!(bracket.exact_root(&big(25)), Some(big(5)));
        assert_eq!(bracket.exact_root(&big(20)), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let bracket = Bracket::from_root(big(2), 3);

        assert!(bracket.contains(&big(8)));
        assert!(bracket.contains(&big(27)));
        assert!(!bracket.contains(&big(7)));
        assert!(!bracket.contains(&big(28)));
    }
}
