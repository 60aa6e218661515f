//! Offline corpus generation.
//!
//! ## Core Types
//!
//! - [`Plan`] — How many deals each stage gets
//! - [`Generator`] — Deals, solves and batches scenarios into a [`Sink`]
//! - [`Tally`] — Running counts and periodic progress lines
//! - [`Cli`] — The `generate` binary's flags and run sequence
mod generator;
mod plan;
mod sink;
mod tally;

#[cfg(feature = "database")]
mod cli;

pub use generator::*;
pub use plan::*;
pub use sink::*;
pub use tally::*;

#[cfg(feature = "database")]
pub use cli::*;
