use super::*;
use crate::cards::Deal;
use crate::cards::Stage;
use crate::corpus::Scenario;
use crate::solver::Solver;
use rand::Rng;

/// Deals stratified random spots, solves them, and writes them in batches.
///
/// Solver failures skip the single deal. Sink failures end the run, since a
/// store that rejects one batch will reject the next.
pub struct Generator<S, K> {
    solver: S,
    sink: K,
    batch: usize,
    buffer: Vec<Scenario>,
    tally: Tally,
}

impl<S, K> Generator<S, K>
where
    S: Solver,
    K: Sink,
{
    pub fn new(solver: S, sink: K, batch: usize) -> Self {
        let batch = batch.max(1);
        Self {
            solver,
            sink,
            batch,
            buffer: Vec::with_capacity(batch),
            tally: Tally::default(),
        }
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn sink(&self) -> &K {
        &self.sink
    }
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Works through the plan stage by stage, stopping early between deals
    /// if a graceful interrupt was requested.
    pub async fn generate<R: Rng + ?Sized>(&mut self, plan: Plan, rng: &mut R) -> anyhow::Result<()> {
        log::info!("generating {} scenarios", plan.total());
        log::info!("press 'Q + ↵' to stop gracefully");
        for (stage, n) in plan {
            log::info!("generating {} {} scenarios", n, stage);
            for _ in 0..n {
                if crate::interrupted() {
                    self.flush().await?;
                    log::info!("stopped early at {}", stage);
                    return Ok(());
                }
                self.attempt(stage, rng).await?;
                if let Some(line) = self.tally.checkpoint(plan.total()) {
                    log::info!("{}", line);
                }
            }
            self.flush().await?;
        }
        Ok(())
    }

    async fn attempt<R: Rng + ?Sized>(&mut self, stage: Stage, rng: &mut R) -> anyhow::Result<()> {
        let deal = Deal::random(stage, rng);
        self.tally.attempted += 1;
        match self.solver.equity(&deal).await {
            Err(e) => {
                log::warn!("skipping {}: {:#}", deal, e);
                self.tally.skipped += 1;
                Ok(())
            }
            Ok(equity) => {
                self.buffer.push(Scenario::from((deal, equity)));
                match self.buffer.len() >= self.batch {
                    true => self.flush().await,
                    false => Ok(()),
                }
            }
        }
    }

    async fn flush(&mut self) -> anyhow::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let batch = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.batch));
        let n = batch.len() as u64;
        self.sink.submit(batch).await?;
        self.tally.persisted += n;
        log::debug!("flushed {} scenarios ({} total)", n, self.tally.persisted);
        Ok(())
    }
}
