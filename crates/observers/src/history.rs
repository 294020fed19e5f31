use fermat_core::{MissRecord, Observer};
use fermat_solvers::scan::{Action, Event};

/// Records every new best in the order the scanner reported it.
///
/// The last entry always matches the scan's final best.
#[derive(Debug, Default, Clone)]
pub struct History {
    records: Vec<MissRecord>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded misses, oldest first.
    #[must_use]
    pub fn records(&self) -> &[MissRecord] {
        &self.records
    }

    /// Consumes the history and returns the recorded misses.
    #[must_use]
    pub fn into_records(self) -> Vec<MissRecord> {
        self.records
    }
}

impl Observer<Event<'_>, Action> for History {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        if let Event::NewBest { record, .. } = event {
            self.records.push((*record).clone());
        }
        None
    }
}

/// Lets a scan borrow the history so it can be read afterwards.
impl Observer<Event<'_>, Action> for &mut History {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (**self).observe(event)
    }
}
