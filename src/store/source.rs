use super::*;
use crate::corpus::Corpus;
use crate::corpus::Criteria;
use crate::corpus::Scenario;
use crate::corpus::Stats;
use crate::*;
use deadpool_postgres::Pool;
use tokio_postgres::Client;

/// WHERE clause for the criteria. `$1` is the stage; a window binds its
/// bounds to `$2` and `$3`.
pub fn filter(criteria: &Criteria) -> String {
    let flip = format!(
        "NOT (hand1_equity BETWEEN {lo} AND {hi} AND hand2_equity BETWEEN {lo} AND {hi})",
        lo = COIN_FLIP_MIN,
        hi = COIN_FLIP_MAX,
    );
    match criteria.window() {
        None => format!("stage = $1 AND {}", flip),
        Some((_, measure)) => format!(
            "stage = $1 AND {} AND {} BETWEEN $2 AND $3",
            flip,
            measure.sql()
        ),
    }
}

#[async_trait::async_trait]
impl Corpus for Client {
    async fn ping(&self) -> anyhow::Result<()> {
        self.execute("SELECT 1", &[]).await?;
        Ok(())
    }
    async fn stats(&self) -> anyhow::Result<Stats> {
        #[rustfmt::skip]
        const SQL: &str = const_format::concatcp!(
            "SELECT ",
                "COUNT(*)                                     AS total_scenarios, ",
                "COUNT(*) FILTER (WHERE stage = 'preflop')    AS preflop_count, ",
                "COUNT(*) FILTER (WHERE stage = 'flop')       AS flop_count, ",
                "COUNT(*) FILTER (WHERE stage = 'turn')       AS turn_count ",
            "FROM ", SCENARIOS
        );
        let row = self.query_one(SQL, &[]).await?;
        Ok(Stats {
            total_scenarios: row.try_get("total_scenarios")?,
            preflop_count: row.try_get("preflop_count")?,
            flop_count: row.try_get("flop_count")?,
            turn_count: row.try_get("turn_count")?,
        })
    }
    async fn count(&self, criteria: &Criteria) -> anyhow::Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {}", SCENARIOS, filter(criteria));
        let stage = criteria.stage().as_str();
        let row = match criteria.window() {
            None => self.query_one(&sql, &[&stage]).await?,
            Some((w, _)) => self.query_one(&sql, &[&stage, &w.min(), &w.max()]).await?,
        };
        Ok(row.try_get::<_, i64>(0)? as usize)
    }
    async fn nth(&self, criteria: &Criteria, offset: usize) -> anyhow::Result<Option<Scenario>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} OFFSET {} LIMIT 1",
            COLUMNS,
            SCENARIOS,
            filter(criteria),
            offset
        );
        let stage = criteria.stage().as_str();
        let row = match criteria.window() {
            None => self.query_opt(&sql, &[&stage]).await?,
            Some((w, _)) => self.query_opt(&sql, &[&stage, &w.min(), &w.max()]).await?,
        };
        row.map(Scenario::try_from).transpose()
    }
}

/// Each call checks a connection out of the pool for its duration.
#[async_trait::async_trait]
impl Corpus for Pool {
    async fn ping(&self) -> anyhow::Result<()> {
        let client = self.get().await?;
        Corpus::ping(&**client).await
    }
    async fn stats(&self) -> anyhow::Result<Stats> {
        let client = self.get().await?;
        Corpus::stats(&**client).await
    }
    async fn count(&self, criteria: &Criteria) -> anyhow::Result<usize> {
        let client = self.get().await?;
        Corpus::count(&**client, criteria).await
    }
    async fn nth(&self, criteria: &Criteria, offset: usize) -> anyhow::Result<Option<Scenario>> {
        let client = self.get().await?;
        Corpus::nth(&**client, criteria, offset).await
    }
}
