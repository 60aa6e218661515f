//! Corpus Generator Binary
//!
//! Deals random heads-up spots for each stage, solves them with the equity
//! solver at `SOLVER_URL`, and appends them to the corpus in `DB_URL`.
//!
//! Options: --total, --batch-size, --yes, --status

use clap::Parser;
use equityguesser::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    generation::Cli::parse().run().await
}
