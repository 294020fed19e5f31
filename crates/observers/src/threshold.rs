use fermat_core::{Observer, RelativeMiss};

use crate::traits::{CanStopEarly, HasRelativeMiss};

/// Stops the search once a new best falls strictly below a threshold.
///
/// The comparison is exact. Events without a relative miss are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopBelow {
    threshold: RelativeMiss,
    triggered: bool,
}

impl StopBelow {
    /// Creates an observer that stops below `threshold`.
    #[must_use]
    pub fn new(threshold: RelativeMiss) -> Self {
        Self {
            threshold,
            triggered: false,
        }
    }

    /// Returns the threshold.
    #[must_use]
    pub fn threshold(&self) -> &RelativeMiss {
        &self.threshold
    }

    /// Returns true if this observer has requested a stop.
    #[must_use]
    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

impl<E: HasRelativeMiss, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        let miss = event.relative_miss()?;
        if *miss < self.threshold {
            self.triggered = true;
            return Some(A::stop_early());
        }
        None
    }
}

impl<E: HasRelativeMiss, A: CanStopEarly> Observer<E, A> for &mut StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
