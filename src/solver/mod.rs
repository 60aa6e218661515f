//! Boundary to the external equity solver.
//!
//! The generator only ever talks to a [`Solver`]; [`Remote`] is the HTTP
//! implementation used in production, tests substitute their own.
mod dto;
mod equity;
mod solver;

#[cfg(feature = "server")]
mod remote;

pub use dto::*;
pub use equity::*;
pub use solver::*;

#[cfg(feature = "server")]
pub use remote::*;
