use num_bigint::BigUint;

/// One `(x, y)` pair from the search grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub x: u64,
    pub y: u64,
}

impl Candidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Returns `x^n + y^n`, computed exactly.
    #[must_use]
    pub fn power_sum(&self, n: u32) -> BigUint {
        BigUint::from(self.x).pow(n) + BigUint::from(self.y).pow(n)
    }
}
