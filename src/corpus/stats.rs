use crate::cards::Stage;

/// Aggregate row counts of the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub total_scenarios: i64,
    pub preflop_count: i64,
    pub flop_count: i64,
    pub turn_count: i64,
}

impl Stats {
    pub fn count(&self, stage: Stage) -> i64 {
        match stage {
            Stage::Preflop => self.preflop_count,
            Stage::Flop => self.flop_count,
            Stage::Turn => self.turn_count,
        }
    }
    /// Logs a small table of the counts.
    pub fn report(&self) {
        fn commas(n: i64) -> String {
            n.to_string()
                .as_bytes()
                .rchunks(3)
                .rev()
                .map(|c| String::from_utf8_lossy(c).into_owned())
                .collect::<Vec<_>>()
                .join(",")
        }
        log::info!("┌────────────┬───────────────┐");
        log::info!("│ Stage      │     Scenarios │");
        log::info!("├────────────┼───────────────┤");
        for stage in Stage::all() {
            log::info!("│ {:<10} │ {:>13} │", stage, commas(self.count(stage)));
        }
        log::info!("├────────────┼───────────────┤");
        log::info!("│ {:<10} │ {:>13} │", "total", commas(self.total_scenarios));
        log::info!("└────────────┴───────────────┘");
    }
}
