//! The scenario corpus as seen by the rest of the crate.
//!
//! ## Core Types
//!
//! - [`Scenario`] — One precomputed heads-up spot with solver results
//! - [`Criteria`] — Which scenarios a query accepts
//! - [`Measure`] — Which hand's equity a window is tested against
//! - [`Corpus`] — Async read interface implemented by the store
//! - [`Stats`] — Aggregate row counts
mod corpus;
mod criteria;
mod scenario;
mod stats;

#[cfg(test)]
mod memory;

pub use corpus::*;
pub use criteria::*;
pub use scenario::*;
pub use stats::*;

#[cfg(test)]
pub(crate) use memory::*;
