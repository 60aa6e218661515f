//! PostgreSQL persistence of the scenario corpus.
//!
//! One table, [`SCENARIOS`]. The generator writes through a dedicated
//! [`Client`](tokio_postgres::Client) with binary COPY inside a transaction;
//! the server reads through a [`Pool`](deadpool_postgres::Pool).
mod connect;
mod row;
mod schema;
mod sink;
mod source;

pub use connect::*;
pub use row::*;
pub use schema::*;
pub use sink::*;
pub use source::*;

/// Table holding every generated scenario.
pub const SCENARIOS: &str = "hand_scenarios";
