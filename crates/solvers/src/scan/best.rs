use fermat_core::MissRecord;

use super::{Solution, Status};

/// Tracks the best miss encountered so far.
///
/// The best miss is defined by minimum relative miss; ties keep the
/// earlier record. The `Option` represents the state before any miss.
pub(super) struct Best {
    record: Option<MissRecord>,
}

impl Best {
    /// Creates an empty best tracker.
    pub(super) fn empty() -> Self {
        Self { record: None }
    }

    /// Returns true if `record` would replace the current best.
    pub(super) fn is_improved_by(&self, record: &MissRecord) -> bool {
        self.record.as_ref().is_none_or(|best| record.beats(best))
    }

    /// Returns the current best, if any.
    pub(super) fn current(&self) -> Option<&MissRecord> {
        self.record.as_ref()
    }

    /// Replaces the current best unconditionally.
    pub(super) fn replace(&mut self, record: MissRecord) {
        self.record = Some(record);
    }

    /// Finalizes the scan using the best available miss.
    pub(super) fn finish(self, status: Status, pairs: u64, perfect_powers: u64) -> Solution {
        Solution {
            status,
            best: self.record,
            pairs,
            perfect_powers,
        }
    }
}
