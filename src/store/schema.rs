use super::*;
use crate::corpus::Scenario;
use tokio_postgres::types::Type;

/// Pure schema definitions for Postgres tables.
/// No I/O operations - just metadata about table structure.
/// Use const_format::concatcp! to build SQL strings at compile time.
pub trait Schema {
    /// Returns the name of the table in the database.
    fn name() -> &'static str;
    /// Returns the SQL to prepare the table schema.
    fn creates() -> &'static str;
    /// Returns the SQL to create indices on the table.
    fn indices() -> &'static str;
    /// Returns the COPY command used to load data into the database.
    fn copy() -> &'static str;
    /// Returns the column types written by COPY, in order.
    fn columns() -> &'static [Type];
}

impl Schema for Scenario {
    fn name() -> &'static str {
        SCENARIOS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            SCENARIOS,
            " (
                id            BIGSERIAL PRIMARY KEY,
                hand1         TEXT             NOT NULL,
                hand2         TEXT             NOT NULL,
                board         TEXT             NOT NULL,
                stage         TEXT             NOT NULL,
                hand1_equity  DOUBLE PRECISION NOT NULL,
                hand2_equity  DOUBLE PRECISION NOT NULL,
                hand1_wins    BIGINT           NOT NULL,
                hand2_wins    BIGINT           NOT NULL,
                ties          BIGINT           NOT NULL
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            SCENARIOS,
            "_stage_favorite ON ",
            SCENARIOS,
            " (stage, GREATEST(hand1_equity, hand2_equity));
            CREATE INDEX IF NOT EXISTS idx_",
            SCENARIOS,
            "_stage_weaker   ON ",
            SCENARIOS,
            " (stage, LEAST(hand1_equity, hand2_equity));
            CREATE INDEX IF NOT EXISTS idx_",
            SCENARIOS,
            "_stage_column   ON ",
            SCENARIOS,
            " (stage, hand2_equity);"
        )
    }
    fn copy() -> &'static str {
        const_format::concatcp!(
            "COPY ",
            SCENARIOS,
            " (
                hand1,
                hand2,
                board,
                stage,
                hand1_equity,
                hand2_equity,
                hand1_wins,
                hand2_wins,
                ties
            )
            FROM STDIN BINARY"
        )
    }
    fn columns() -> &'static [Type] {
        &[
            Type::TEXT,
            Type::TEXT,
            Type::TEXT,
            Type::TEXT,
            Type::FLOAT8,
            Type::FLOAT8,
            Type::INT8,
            Type::INT8,
            Type::INT8,
        ]
    }
}
