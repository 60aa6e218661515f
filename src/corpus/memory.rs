//! In-memory corpus used by tests across the crate.
use super::*;
use crate::Probability;
use crate::cards::Stage;
use crate::generation::Sink;

/// Vec-backed [`Corpus`] and [`Sink`] sharing the same matching rules.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    pub rows: Vec<Scenario>,
    pub batches: Vec<usize>,
}

impl From<Vec<Scenario>> for Memory {
    fn from(rows: Vec<Scenario>) -> Self {
        Self {
            rows,
            batches: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl Corpus for Memory {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
    async fn stats(&self) -> anyhow::Result<Stats> {
        let count = |stage: Stage| self.rows.iter().filter(|s| s.stage == stage).count() as i64;
        Ok(Stats {
            total_scenarios: self.rows.len() as i64,
            preflop_count: count(Stage::Preflop),
            flop_count: count(Stage::Flop),
            turn_count: count(Stage::Turn),
        })
    }
    async fn count(&self, criteria: &Criteria) -> anyhow::Result<usize> {
        Ok(self.rows.iter().filter(|s| criteria.accepts(s)).count())
    }
    async fn nth(&self, criteria: &Criteria, offset: usize) -> anyhow::Result<Option<Scenario>> {
        Ok(self
            .rows
            .iter()
            .filter(|s| criteria.accepts(s))
            .nth(offset)
            .cloned())
    }
}

#[async_trait::async_trait]
impl Sink for Memory {
    async fn total(&self) -> anyhow::Result<usize> {
        Ok(self.rows.len())
    }
    async fn submit(&mut self, batch: Vec<Scenario>) -> anyhow::Result<()> {
        self.batches.push(batch.len());
        self.rows.extend(batch);
        Ok(())
    }
}

/// A store that is never reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

#[async_trait::async_trait]
impl Corpus for Offline {
    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
    async fn stats(&self) -> anyhow::Result<Stats> {
        Err(anyhow::anyhow!("connection refused"))
    }
    async fn count(&self, _: &Criteria) -> anyhow::Result<usize> {
        Err(anyhow::anyhow!("connection refused"))
    }
    async fn nth(&self, _: &Criteria, _: usize) -> anyhow::Result<Option<Scenario>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// AhAd against 7c2s with the given equities and a board fitting the stage.
pub fn fixture(stage: Stage, e1: Probability, e2: Probability) -> Scenario {
    Scenario {
        hand1: "AhAd".into(),
        hand2: "7c2s".into(),
        board: match stage {
            Stage::Preflop => "",
            Stage::Flop => "Kd9h3c",
            Stage::Turn => "Kd9h3c4s",
        }
        .into(),
        stage,
        hand1_equity: e1,
        hand2_equity: e2,
        hand1_wins: 800,
        hand2_wins: 150,
        ties: 50,
    }
}
