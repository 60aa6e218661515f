use super::criteria::Criteria;
use super::scenario::Scenario;
use super::stats::Stats;

/// Corpus defines the read interface the serving path needs from the store.
///
/// Uniform sampling is split into [`count`](Corpus::count) and
/// [`nth`](Corpus::nth) so the caller owns the randomness: it draws an
/// offset below the count and fetches that row. Rows are only ever appended,
/// so an offset drawn below a count stays valid.
#[async_trait::async_trait]
pub trait Corpus: Send + Sync {
    /// Verifies the store is reachable.
    async fn ping(&self) -> anyhow::Result<()>;
    /// Row counts in total and per stage.
    async fn stats(&self) -> anyhow::Result<Stats>;
    /// Number of rows matching the criteria.
    async fn count(&self, criteria: &Criteria) -> anyhow::Result<usize>;
    /// The matching row at `offset`, if any.
    async fn nth(&self, criteria: &Criteria, offset: usize) -> anyhow::Result<Option<Scenario>>;
}
