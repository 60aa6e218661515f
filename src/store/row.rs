use crate::cards::Stage;
use crate::corpus::Scenario;
use std::pin::Pin;
use tokio_postgres::binary_copy::BinaryCopyInWriter;

/// A row that can write itself to a pinned BinaryCopyInWriter.
#[async_trait::async_trait]
pub trait Row: Send {
    async fn write(self, writer: Pin<&mut BinaryCopyInWriter>) -> Result<(), tokio_postgres::Error>;
}

#[async_trait::async_trait]
impl Row for Scenario {
    async fn write(self, writer: Pin<&mut BinaryCopyInWriter>) -> Result<(), tokio_postgres::Error> {
        let stage = self.stage.as_str();
        writer
            .write(&[
                &self.hand1,
                &self.hand2,
                &self.board,
                &stage,
                &self.hand1_equity,
                &self.hand2_equity,
                &self.hand1_wins,
                &self.hand2_wins,
                &self.ties,
            ])
            .await
    }
}

/// Columns selected whenever a whole scenario is read back.
pub const COLUMNS: &str =
    "hand1, hand2, board, stage, hand1_equity, hand2_equity, hand1_wins, hand2_wins, ties";

impl TryFrom<tokio_postgres::Row> for Scenario {
    type Error = anyhow::Error;
    fn try_from(row: tokio_postgres::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            hand1: row.try_get("hand1")?,
            hand2: row.try_get("hand2")?,
            board: row.try_get("board")?,
            stage: Stage::try_from(row.try_get::<_, &str>("stage")?)?,
            hand1_equity: row.try_get("hand1_equity")?,
            hand2_equity: row.try_get("hand2_equity")?,
            hand1_wins: row.try_get("hand1_wins")?,
            hand2_wins: row.try_get("hand2_wins")?,
            ties: row.try_get("ties")?,
        })
    }
}
