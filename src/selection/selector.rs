use super::*;
use crate::corpus::Corpus;
use crate::corpus::Criteria;
use crate::corpus::Measure;
use crate::corpus::Scenario;
use crate::difficulty::Difficulty;
use crate::*;
use rand::Rng;
use std::sync::Arc;

/// Picks a scenario for a streak.
///
/// Holds no per-request state: every call draws from the rng it is handed,
/// so a seeded rng fixes the stage, the row and the swap.
#[derive(Clone)]
pub struct Selector {
    corpus: Arc<dyn Corpus>,
    weights: Weights,
    measure: Measure,
}

impl From<Arc<dyn Corpus>> for Selector {
    fn from(corpus: Arc<dyn Corpus>) -> Self {
        Self {
            corpus,
            weights: Weights::default(),
            measure: Measure::default(),
        }
    }
}

impl Selector {
    pub fn with_measure(self, measure: Measure) -> Self {
        Self { measure, ..self }
    }
    pub fn corpus(&self) -> &dyn Corpus {
        self.corpus.as_ref()
    }

    /// A scenario near the streak's difficulty, or any scenario of a
    /// redrawn stage if none is near, or `None` if that stage is empty too.
    pub async fn select<R: Rng + ?Sized>(
        &self,
        streak: Streak,
        rng: &mut R,
    ) -> anyhow::Result<Option<Presentation>> {
        let difficulty = Difficulty::from(streak);
        let window = difficulty.window();
        let primary = Criteria::from(self.weights.draw(rng)).within(window, self.measure);
        let scenario = match self.sample(&primary, rng).await? {
            Some(scenario) => scenario,
            None => {
                let fallback = Criteria::from(self.weights.draw(rng));
                log::debug!("nothing in {}, falling back to {}", primary, fallback);
                match self.sample(&fallback, rng).await? {
                    Some(scenario) => scenario,
                    None => return Ok(None),
                }
            }
        };
        let scenario = match rng.random_bool(SWAP_PROBABILITY) {
            true => scenario.swapped(),
            false => scenario,
        };
        Ok(Some(Presentation::from((scenario, difficulty.target()))))
    }

    /// Uniform draw among the rows accepted by the criteria.
    async fn sample<R: Rng + ?Sized>(
        &self,
        criteria: &Criteria,
        rng: &mut R,
    ) -> anyhow::Result<Option<Scenario>> {
        match self.corpus.count(criteria).await? {
            0 => Ok(None),
            n => self.corpus.nth(criteria, rng.random_range(0..n)).await,
        }
    }
}
