use thiserror::Error;

/// Smallest base considered for either `x` or `y`.
pub const MIN_BASE: u64 = 10;

/// Smallest supported exponent.
pub const MIN_EXPONENT: u32 = 3;

/// Largest supported exponent.
pub const MAX_EXPONENT: u32 = 11;

/// Errors that can occur when validating search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("n must be an integer such that: 2 < n < 12 (3 through 11)")]
    InvalidExponent,

    #[error("k must be ≥ 10")]
    InvalidUpperBound,
}

/// The exponent `n` and upper bound `k` of one search.
///
/// A search examines every pair `(x, y)` with `MIN_BASE ≤ x, y ≤ k` and
/// compares `x^n + y^n` against its neighboring perfect n-th powers.
///
/// Construction validates both values, so a `SearchParameters` in hand is
/// always within the supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParameters {
    exponent: u32,
    upper_bound: u64,
}

impl SearchParameters {
    /// Creates validated search parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidExponent`] if `exponent` is outside
    /// `[MIN_EXPONENT, MAX_EXPONENT]`, or [`ParamsError::InvalidUpperBound`]
    /// if `upper_bound` is below [`MIN_BASE`]. The exponent is checked first.
    pub fn new(exponent: u32, upper_bound: u64) -> Result<Self, ParamsError> {
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(ParamsError::InvalidExponent);
        }
        if upper_bound < MIN_BASE {
            return Err(ParamsError::InvalidUpperBound);
        }

        Ok(Self {
            exponent,
            upper_bound,
        })
    }

    /// Returns the exponent `n`.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns the inclusive upper bound `k` for both bases.
    #[must_use]
    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }

    /// Returns the number of `(x, y)` pairs the search will examine.
    ///
    /// Saturates at `u64::MAX` for bounds too large to ever scan.
    #[must_use]
    pub fn pair_count(&self) -> u64 {
        let side = self.upper_bound - MIN_BASE + 1;
        side.saturating_mul(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_domain_corners() {
        for (n, k) in [(3, 10), (11, 10), (3, 1_000), (11, 1_000)] {
            let params = SearchParameters::new(n, k).expect("valid parameters");
            assert_eq!(params.exponent(), n);
            assert_eq!(params.upper_bound(), k);
        }
    }

    #[test]
    fn rejects_exponent_out_of_range() {
        for n in [0, 1, 2, 12, 100] {
            assert_eq!(SearchParameters::new(n, 10), Err(ParamsError::InvalidExponent));
        }
    }

    #[test]
    fn rejects_small_upper_bound() {
        assert_eq!(SearchParameters::new(3, 9), Err(ParamsError::InvalidUpperBound));
    }

    #[test]
    fn exponent_is_checked_first() {
        assert_eq!(SearchParameters::new(2, 0), Err(ParamsError::InvalidExponent));
    }

    #[test]
    fn pair_count_covers_square_grid() {
        assert_eq!(SearchParameters::new(3, 10).unwrap().pair_count(), 1);
        assert_eq!(SearchParameters::new(3, 12).unwrap().pair_count(), 9);
        assert_eq!(SearchParameters::new(3, u64::MAX).unwrap().pair_count(), u64::MAX);
    }

    #[test]
    fn error_messages_name_the_constraint() {
        let err = SearchParameters::new(12, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "n must be an integer such that: 2 < n < 12 (3 through 11)"
        );

        let err = SearchParameters::new(3, 5).unwrap_err();
        assert_eq!(err.to_string(), "k must be ≥ 10");
    }
}
