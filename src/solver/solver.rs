use super::equity::Equity;
use crate::cards::Deal;

/// Solver computes exact heads-up equities for a dealt spot.
#[async_trait::async_trait]
pub trait Solver: Send + Sync {
    /// Verifies the solver is reachable.
    async fn health(&self) -> anyhow::Result<()>;
    /// Equities, wins and ties of both hands of the deal.
    async fn equity(&self, deal: &Deal) -> anyhow::Result<Equity>;
}
