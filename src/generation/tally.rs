use crate::*;
use std::time::Instant;

/// Counts for one generation run.
///
/// Owns the timing for periodic progress lines, reporting the rate since
/// the previous line rather than since the start.
#[derive(Debug, Clone)]
pub struct Tally {
    pub attempted: u64,
    pub persisted: u64,
    pub skipped: u64,
    start: Instant,
    prior: (Instant, u64),
}

impl Default for Tally {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            attempted: 0,
            persisted: 0,
            skipped: 0,
            start: now,
            prior: (now, 0),
        }
    }
}

impl Tally {
    /// Returns a progress line only if the log interval has elapsed.
    pub fn checkpoint(&mut self, planned: u64) -> Option<String> {
        if self.prior.0.elapsed() >= GENERATION_LOG_INTERVAL {
            let secs = self.prior.0.elapsed().as_secs().max(1) as f64;
            let rate = (self.attempted - self.prior.1) as f64 / secs;
            self.prior = (Instant::now(), self.attempted);
            Some(self.line(planned, rate))
        } else {
            None
        }
    }
    pub fn summary(&self) -> String {
        let secs = self.start.elapsed().as_secs().max(1) as f64;
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("attempted {}", self.attempted),
            format!("persisted {}", self.persisted),
            format!("skipped {}", self.skipped),
            format!("S/sec {:.1}", self.attempted as f64 / secs),
        )
    }
    fn line(&self, planned: u64, rate: f64) -> String {
        format!(
            "{:<24}{:<20}{:<20}{:<20}",
            format!("progress {}/{}", self.attempted, planned),
            format!("persisted {}", self.persisted),
            format!("skipped {}", self.skipped),
            format!("S/sec {:.1}", rate),
        )
    }
}
