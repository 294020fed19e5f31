//! Scan for near misses to Fermat's Last Theorem.
//!
//! # Algorithm
//!
//! For every pair `(x, y)` with `MIN_BASE ≤ x, y ≤ k` (x outer, y inner):
//!
//! 1. Compute `s = x^n + y^n` exactly.
//! 2. Find `z = ⌊s^(1/n)⌋` with [`integer_nth_root`] and bracket `s` between
//!    `z^n` and `(z+1)^n`.
//! 3. Skip the pair if `s` equals either bound. Fermat's Last Theorem rules
//!    this out for `n ≥ 3`, but the check is cheap and observable.
//! 4. Take the smaller gap as the absolute miss (ties go to `z`) and divide
//!    by `s` for the relative miss.
//! 5. Replace the running best only on a strictly smaller relative miss.
//!
//! Relative misses are exact rationals, so two pairs never compare equal by
//! rounding accident.
//!
//! # Observer Events
//!
//! - [`Event::NewBest`] — emitted each time the best improves, in grid order
//! - [`Event::PerfectPower`] — emitted for each skipped pair
//!
//! Observers can return [`Action::StopEarly`] to halt after the current pair.
//! A new best reported by the stopping event is kept in the solution.
//!
//! [`integer_nth_root`]: crate::root::integer_nth_root

mod action;
mod best;
mod evaluate;
mod event;
mod grid;
mod solution;


pub use action::Action;
pub use evaluate::{Evaluation, evaluate};
pub use event::Event;
pub use grid::Grid;
pub use solution::{Solution, Status};

use fermat_core::{Candidate, Observer, SearchParameters};
use tracing::{debug, info, trace};

use best::Best;

/// Scans the grid described by `params` for the smallest relative miss.
///
/// The observer receives an [`Event`] for every new best and every skipped
/// perfect power. See the [module docs](self) for details.
pub fn scan<Obs>(params: &SearchParameters, observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    scan_grid(params.exponent(), Grid::for_params(params), observer)
}

/// Scans for the smallest relative miss without observer support.
///
/// This is a convenience wrapper around [`scan`] that uses a no-op observer.
#[must_use]
pub fn scan_unobserved(params: &SearchParameters) -> Solution {
    scan(params, ())
}

/// Core scan loop over any sequence of candidates.
pub(crate) fn scan_grid<C, Obs>(n: u32, candidates: C, mut observer: Obs) -> Solution
where
    C: IntoIterator<Item = Candidate>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut best = Best::empty();
    let mut pairs: u64 = 0;
    let mut perfect_powers: u64 = 0;

    for candidate in candidates {
        pairs += 1;

        let action = match evaluate(candidate, n) {
            Evaluation::PerfectPower { candidate, root } => {
                perfect_powers += 1;
                trace!(x = candidate.x, y = candidate.y, %root, "skipping perfect power");
                observer.observe(&Event::PerfectPower {
                    candidate,
                    root: &root,
                })
            }
            Evaluation::Miss(record) => {
                if !best.is_improved_by(&record) {
                    continue;
                }

                debug!(
                    x = record.x(),
                    y = record.y(),
                    z = %record.z,
                    absolute_miss = %record.absolute_miss,
                    relative_miss = %record.relative_miss,
                    "new best near miss"
                );

                let action = observer.observe(&Event::NewBest {
                    record: &record,
                    previous: best.current(),
                });
                best.replace(record);
                action
            }
        };

        if let Some(Action::StopEarly) = action {
            info!(n, pairs, perfect_powers, "scan stopped by observer");
            return best.finish(Status::StoppedByObserver, pairs, perfect_powers);
        }
    }

    info!(n, pairs, perfect_powers, "scan complete");
    best.finish(Status::Complete, pairs, perfect_powers)
}
