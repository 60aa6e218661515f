use super::*;
use crate::corpus::Scenario;
use crate::generation::Sink;
use tokio_postgres::Client;
use tokio_postgres::binary_copy::BinaryCopyInWriter;

#[async_trait::async_trait]
impl Sink for Client {
    async fn total(&self) -> anyhow::Result<usize> {
        const SQL: &str = const_format::concatcp!("SELECT COUNT(*) FROM ", SCENARIOS);
        Ok(self.query_one(SQL, &[]).await?.try_get::<_, i64>(0)? as usize)
    }
    /// Streams the batch with binary COPY inside one transaction.
    async fn submit(&mut self, batch: Vec<Scenario>) -> anyhow::Result<()> {
        let tx = self.transaction().await?;
        let sink = tx.copy_in(Scenario::copy()).await?;
        let writer = BinaryCopyInWriter::new(sink, Scenario::columns());
        futures::pin_mut!(writer);
        for scenario in batch {
            scenario.write(writer.as_mut()).await?;
        }
        writer.finish().await?;
        tx.commit().await?;
        Ok(())
    }
}
