//! Scenario Server Binary
//!
//! Serves `/health`, `/scenario` and `/stats` from the corpus in `DB_URL`.

use equityguesser::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    server::run(config::Config::from_env()?).await
}
