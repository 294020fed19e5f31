//! Reusable observers for the Fermat near-miss search.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! decouple observer policy from the scanner's concrete event and action types.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasRelativeMiss`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every new best in emission order
//! - [`StopBelow`] — stops once a new best falls below a threshold
//!
//! [`Observer`]: fermat_core::Observer
//! [`HasRelativeMiss`]: traits::HasRelativeMiss
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod threshold;

pub use history::History;
pub use threshold::StopBelow;
