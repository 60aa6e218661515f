use crate::corpus::Scenario;

/// Sink defines the write interface between the generator and the store.
#[async_trait::async_trait]
pub trait Sink: Send {
    /// Rows currently stored.
    async fn total(&self) -> anyhow::Result<usize>;
    /// Appends the whole batch atomically, or nothing.
    async fn submit(&mut self, batch: Vec<Scenario>) -> anyhow::Result<()>;
}
