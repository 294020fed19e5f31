//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can express its policy once without naming the scanner's types.
//!
//! # Example
//!
//! ```rust
//! use fermat_core::Observer;
//! use fermat_observers::traits::{CanStopEarly, HasRelativeMiss};
//!
//! /// Stops after a fixed number of improvements.
//! struct StopAfter {
//!     remaining: usize,
//! }
//!
//! impl<E: HasRelativeMiss, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event.relative_miss()?;
//!         self.remaining = self.remaining.saturating_sub(1);
//!         (self.remaining == 0).then(A::stop_early)
//!     }
//! }
//! ```

use fermat_core::RelativeMiss;
use fermat_solvers::scan;

/// An event that may carry a new best relative miss.
pub trait HasRelativeMiss {
    /// Returns the new best relative miss for this event.
    ///
    /// Returns `None` when the event does not report an improvement.
    fn relative_miss(&self) -> Option<&RelativeMiss>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasRelativeMiss for scan::Event<'_> {
    fn relative_miss(&self) -> Option<&RelativeMiss> {
        scan::Event::relative_miss(self)
    }
}

impl CanStopEarly for scan::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
