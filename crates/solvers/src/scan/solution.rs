use fermat_core::MissRecord;

/// Indicates how the scan terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Examined every pair in the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a near-miss scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// How the scan terminated.
    pub status: Status,

    /// The smallest relative miss found, or `None` if every pair examined
    /// summed to a perfect power.
    pub best: Option<MissRecord>,

    /// Number of pairs examined.
    pub pairs: u64,

    /// Number of pairs skipped because their sum was a perfect power.
    pub perfect_powers: u64,
}

impl Solution {
    /// Returns true if no near miss was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }
}
