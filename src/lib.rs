//! Streak-calibrated poker equity scenarios.
//!
//! Two halves share one corpus of precomputed heads-up scenarios:
//!
//! - **Serving** — [`selection::Selector`] maps a player's streak to a
//!   [`difficulty::Window`] of acceptable favorite equity, samples a stage,
//!   and draws a matching [`corpus::Scenario`] from the store.
//! - **Generation** — [`generation::Generator`] deals random heads-up spots
//!   stratified by stage, asks an external equity solver for the numbers, and
//!   appends them to the store in atomic batches.
//!
//! ## Modules
//!
//! - [`cards`] — Card codec: wire codes, hole cards, boards, stages, decks
//! - [`difficulty`] — Streak → target equity, tolerance and window
//! - [`corpus`] — Scenario rows, query criteria, and the read-side trait
//! - [`selection`] — Weighted stage draw and the serving-time selector
//! - [`generation`] — Deal planning, batching, and the generator CLI
//! - [`solver`] — External equity solver boundary
//! - [`store`] — PostgreSQL schema, reads, and batched writes
//! - [`server`] — actix-web routes for `/health`, `/scenario`, `/stats`

pub mod cards;
pub mod corpus;
pub mod difficulty;
pub mod generation;
pub mod selection;
pub mod solver;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "database")]
pub mod server;
#[cfg(feature = "database")]
pub mod store;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Equities, window bounds, and sampling weights.
pub type Probability = f64;
/// Consecutive correct guesses reported by the client.
pub type Streak = u32;
/// Win and tie tallies reported by the solver.
pub type Count = i64;

// ============================================================================
// DIFFICULTY CURVE
// target(streak) = 0.5 + 0.5 · e^(−DECAY · streak)
// ============================================================================
/// Exponential decay rate of the target equity toward a coin flip.
pub const DIFFICULTY_DECAY: f64 = 0.25;
/// Tolerance around the target while the streak is below 10.
pub const TOLERANCE_EASY: Probability = 0.05;
/// Tolerance around the target while the streak is below 20.
pub const TOLERANCE_HARD: Probability = 0.03;
/// Tolerance around the target from a streak of 20 onward.
pub const TOLERANCE_EXPERT: Probability = 0.02;
/// Streaks up to and including this value use the onboarding window.
pub const ONBOARDING_STREAK: Streak = 2;
/// Lower bound of the onboarding window. Guarantees a clear favorite.
pub const ONBOARDING_MIN: Probability = 0.70;
/// Upper bound of the onboarding window.
pub const ONBOARDING_MAX: Probability = 1.00;

// ============================================================================
// SELECTION POLICY
// ============================================================================
/// Scenarios where both equities fall in this band are never served.
pub const COIN_FLIP_MIN: Probability = 0.49;
/// Upper edge of the near-coin-flip band.
pub const COIN_FLIP_MAX: Probability = 0.51;
/// Presentation weight of preflop scenarios.
pub const WEIGHT_PREFLOP: Probability = 0.150;
/// Presentation weight of flop scenarios.
pub const WEIGHT_FLOP: Probability = 0.425;
/// Presentation weight of turn scenarios.
pub const WEIGHT_TURN: Probability = 0.425;
/// Chance of presenting the stored hand2 as hand1.
pub const SWAP_PROBABILITY: f64 = 0.5;

// ============================================================================
// GENERATION
// ============================================================================
/// Default corpus size requested by the generator.
pub const DEFAULT_TOTAL: u64 = 3_000_000;
/// Default rows per atomic write.
pub const DEFAULT_BATCH_SIZE: u64 = 1_000;
/// Smallest run that still covers every stage once.
pub const MIN_TOTAL: u64 = 3;
/// Interval between progress log messages during generation.
pub const GENERATION_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);
/// Upper bound on a single equity solve.
pub const SOLVER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// Upper bound on the solver reachability check.
pub const SOLVER_HEALTH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Whatever sits in an unflushed generator batch is lost.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Global interrupt flag for graceful shutdown coordination.
#[cfg(feature = "server")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional generation deadline from RUN_DURATION env var.
#[cfg(feature = "server")]
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
#[cfg(feature = "server")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// No-op interrupt check when server feature disabled.
#[cfg(not(feature = "server"))]
pub fn interrupted() -> bool {
    false
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop after the current scenario.
/// Optionally set RUN_DURATION env var (e.g., "2h", "30m") for timed runs.
#[cfg(feature = "server")]
pub fn brb() {
    if let Ok(duration) = std::env::var("RUN_DURATION") {
        match parse_duration(&duration) {
            Some(deadline) => {
                let _ = DEADLINE.set(std::time::Instant::now() + deadline);
                log::info!("generation will stop after {}", duration);
            }
            None => log::warn!("ignoring unparseable RUN_DURATION {:?}", duration),
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, flushing current batch...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "server")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (i, _) = s.char_indices().last()?;
    let (num, unit) = s.split_at(i);
    let scale = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => return None,
    };
    let value: u64 = num.parse().ok()?;
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn durations_by_unit() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration(" 2h "), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }

    #[test]
    fn durations_reject_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("h"), None);
        assert_eq!(parse_duration("10w"), None);
        assert_eq!(parse_duration("-5m"), None);
        assert_eq!(parse_duration("5µ"), None);
        assert_eq!(parse_duration("é"), None);
    }

    #[test]
    fn durations_reject_overflow() {
        assert_eq!(parse_duration(&format!("{}d", u64::MAX)), None);
        assert_eq!(parse_duration(&format!("{}s", u64::MAX)), Some(Duration::from_secs(u64::MAX)));
    }
}
