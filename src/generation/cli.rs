use super::*;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::solver::Remote;
use crate::solver::Solver;
use crate::*;
use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::IsTerminal;

/// Populate the scenario corpus with solved heads-up spots.
#[derive(Debug, Clone, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scenarios to generate, split evenly across preflop, flop and turn
    #[arg(long, default_value_t = DEFAULT_TOTAL, value_parser = clap::value_parser!(u64).range(MIN_TOTAL..))]
    pub total: u64,
    /// Scenarios written per transaction
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: u64,
    /// Append without asking when the corpus already has rows
    #[arg(long, short)]
    pub yes: bool,
    /// Print corpus counts and exit
    #[arg(long)]
    pub status: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let client = crate::store::db(&config.db_url).await?;
        crate::store::migrate(&client).await?;
        if self.status {
            client.stats().await?.report();
            return Ok(());
        }
        let solver = Remote::new(&config.solver_url)?;
        solver
            .health()
            .await
            .with_context(|| format!("equity solver unreachable at {}", solver.url()))?;
        log::info!("equity solver healthy at {}", solver.url());
        let existing = Sink::total(&client).await?;
        log::info!("{} scenarios already stored", existing);
        if existing > 0 && !self.confirm(existing)? {
            log::info!("nothing generated");
            return Ok(());
        }
        crate::brb();
        let ref mut rng = SmallRng::from_rng(&mut rand::rng());
        let mut generator = Generator::new(solver, client, self.batch_size as usize);
        generator.generate(Plan::from(self.total), rng).await?;
        log::info!("{}", generator.tally().summary());
        log::info!("{} scenarios now stored", generator.sink().total().await?);
        Ok(())
    }

    /// Whether to append to a non-empty corpus. Only asks on a terminal.
    fn confirm(&self, existing: usize) -> anyhow::Result<bool> {
        if self.yes || !std::io::stdin().is_terminal() {
            return Ok(true);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(format!(
                "{} scenarios already stored. Append {} more?",
                existing, self.total
            ))
            .default(false)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["generate"]).unwrap();
        assert_eq!(cli.total, 3_000_000);
        assert_eq!(cli.batch_size, 1_000);
        assert!(!cli.yes);
        assert!(!cli.status);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["generate", "--total", "30", "--batch-size", "5", "-y"]).unwrap();
        assert_eq!(cli.total, 30);
        assert_eq!(cli.batch_size, 5);
        assert!(cli.yes);
    }

    #[test]
    fn too_few_scenarios_are_rejected() {
        assert!(Cli::try_parse_from(["generate", "--total", "2"]).is_err());
        assert!(Cli::try_parse_from(["generate", "--total", "3"]).is_ok());
    }

    #[test]
    fn empty_batches_are_rejected() {
        assert!(Cli::try_parse_from(["generate", "--batch-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["generate", "--batch-size", "-4"]).is_err());
    }

    #[test]
    fn confirmation_is_skipped_with_yes() {
        let cli = Cli::try_parse_from(["generate", "--yes"]).unwrap();
        assert!(cli.confirm(100).unwrap());
    }
}
