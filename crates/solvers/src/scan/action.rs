/// Control actions supported by the near-miss scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan early and return the best miss found so far.
    StopEarly,
}
