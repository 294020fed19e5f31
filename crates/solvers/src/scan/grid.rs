use fermat_core::{Candidate, MIN_BASE, SearchParameters};

/// Iterates every `(x, y)` with `lower ≤ x, y ≤ upper`, x outer and y inner.
///
/// Symmetric pairs such as `(10, 11)` and `(11, 10)` are both produced.
#[derive(Debug, Clone)]
pub struct Grid {
    lower: u64,
    upper: u64,
    next: Option<Candidate>,
}

impl Grid {
    /// Creates a grid over `[lower, upper]²`. Empty if `lower > upper`.
    #[must_use]
    pub fn new(lower: u64, upper: u64) -> Self {
        let next = (lower <= upper).then(|| Candidate::new(lower, lower));
        Self { lower, upper, next }
    }

    /// Creates the grid `[MIN_BASE, k]²` described by the parameters.
    #[must_use]
    pub fn for_params(params: &SearchParameters) -> Self {
        Self::new(MIN_BASE, params.upper_bound())
    }
}

impl Iterator for Grid {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let current = self.next?;

        self.next = if current.y < self.upper {
            Some(Candidate::new(current.x, current.y + 1))
        } else if current.x < self.upper {
            Some(Candidate::new(current.x + 1, self.lower))
        } else {
            None
        };

        Some(current)
    }
}
