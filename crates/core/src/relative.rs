use std::{fmt, str::FromStr};

use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

/// An exact relative miss: `absolute_miss / power_sum`.
///
/// Stored as a reduced ratio of big integers so comparisons never round.
/// Use [`RelativeMiss::to_f64`] only for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativeMiss(Ratio<BigUint>);

/// Errors that can occur when parsing a [`RelativeMiss`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseRelativeMissError {
    #[error("expected a decimal like 0.001 or a fraction like 1/1000, got {input:?}")]
    Invalid { input: String },

    #[error("fraction has a zero denominator")]
    ZeroDenominator,
}

impl RelativeMiss {
    /// Creates the ratio `absolute / sum`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `sum` is zero.
    #[must_use]
    pub fn new(absolute: BigUint, sum: BigUint) -> Self {
        Self(Ratio::new(absolute, sum))
    }

    /// Returns the reduced numerator.
    #[must_use]
    pub fn numer(&self) -> &BigUint {
        self.0.numer()
    }

    /// Returns the reduced denominator.
    #[must_use]
    pub fn denom(&self) -> &BigUint {
        self.0.denom()
    }

    /// Returns the underlying ratio.
    #[must_use]
    pub fn as_ratio(&self) -> &Ratio<BigUint> {
        &self.0
    }

    /// Returns the nearest `f64`, or `f64::NAN` if it cannot be represented.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for RelativeMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses `a/b` fractions or plain decimals such as `0.0985`, exactly.
impl FromStr for RelativeMiss {
    type Err = ParseRelativeMissError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseRelativeMissError::Invalid {
            input: s.to_owned(),
        };

        if let Some((numer, denom)) = trimmed.split_once('/') {
            let numer = parse_digits(numer.trim()).ok_or_else(invalid)?;
            let denom = parse_digits(denom.trim()).ok_or_else(invalid)?;
            if denom.is_zero() {
                return Err(ParseRelativeMissError::ZeroDenominator);
            }
            return Ok(Self(Ratio::new(numer, denom)));
        }

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let numer = parse_digits(&format!("{whole}{frac}")).ok_or_else(invalid)?;
        let scale = u32::try_from(frac.len()).map_err(|_| invalid())?;
        let denom = BigUint::from(10u32).pow(scale);

        Ok(Self(Ratio::new(numer, denom)))
    }
}

/// Parses a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn miss(a: u64, s: u64) -> RelativeMiss {
        RelativeMiss::new(BigUint::from(a), BigUint::from(s))
    }

    #[test]
    fn reduces_to_lowest_terms() {
        let r = miss(16, 2728);
        assert_eq!(r.numer(), &BigUint::from(2u32));
        assert_eq!(r.denom(), &BigUint::from(341u32));
        assert_eq!(r.to_string(), "2/341");
    }

    #[test]
    fn orders_exactly() {
        assert!(miss(134, 2331) < miss(197, 2000));
        assert!(miss(1, 1729) < miss(1, 728));
        assert_eq!(miss(8, 13832), miss(1, 1729));
    }

    #[test]
    fn distinguishes_values_that_collide_as_floats() {
        // Both ratios round to the same f64 but differ exactly.
        let big = BigUint::from(10u32).pow(30);
        let a = RelativeMiss::new(big.clone(), &big * 3u32);
        let b = RelativeMiss::new(big.clone() + 1u32, &big * 3u32);

        assert!(a < b);
        assert_eq!(a.to_f64(), b.to_f64());
    }

    #[test]
    fn converts_for_display() {
        assert_relative_eq!(miss(197, 2000).to_f64(), 0.0985);
        assert_relative_eq!(
            miss(85_311_670_611, 200_000_000_000).to_f64(),
            0.426_558_353_055
        );
    }

    #[test]
    fn parses_decimals_and_fractions() {
        assert_eq!("0.0985".parse::<RelativeMiss>(), Ok(miss(197, 2000)));
        assert_eq!(".5".parse::<RelativeMiss>(), Ok(miss(1, 2)));
        assert_eq!("1".parse::<RelativeMiss>(), Ok(miss(1, 1)));
        assert_eq!(" 2/341 ".parse::<RelativeMiss>(), Ok(miss(16, 2728)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", ".", "abc", "-0.1", "1e-3", "0.1.2", "1/", "/2", "+1"] {
            assert!(
                matches!(
                    input.parse::<RelativeMiss>(),
                    Err(ParseRelativeMissError::Invalid { .. })
                ),
                "accepted {input:?}"
            );
        }
        assert_eq!(
            "1/0".parse::<RelativeMiss>(),
            Err(ParseRelativeMissError::ZeroDenominator)
        );
    }
}
