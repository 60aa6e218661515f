use crate::cards::Stage;
use crate::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Presentation frequency of each stage, independent of how the corpus is
/// distributed across stages.
#[derive(Debug, Clone)]
pub struct Weights {
    table: Vec<(Stage, Probability)>,
    index: WeightedIndex<Probability>,
}

impl Weights {
    /// Flop and turn dominate; preflop is shown occasionally.
    pub const TABLE: [(Stage, Probability); 3] = [
        (Stage::Preflop, WEIGHT_PREFLOP),
        (Stage::Flop, WEIGHT_FLOP),
        (Stage::Turn, WEIGHT_TURN),
    ];

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Stage {
        self.table[self.index.sample(rng)].0
    }
    /// Normalized weight of the stage.
    pub fn weight(&self, stage: Stage) -> Probability {
        let total = self.table.iter().map(|(_, w)| w).sum::<Probability>();
        self.table
            .iter()
            .filter(|(s, _)| *s == stage)
            .map(|(_, w)| w / total)
            .sum()
    }
}

impl TryFrom<&[(Stage, Probability)]> for Weights {
    type Error = anyhow::Error;
    fn try_from(table: &[(Stage, Probability)]) -> Result<Self, Self::Error> {
        Ok(Self {
            index: WeightedIndex::new(table.iter().map(|(_, w)| *w))?,
            table: table.to_vec(),
        })
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::try_from(&Self::TABLE[..]).expect("stage weights are positive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn table_sums_to_one() {
        let total = Weights::TABLE.iter().map(|(_, w)| w).sum::<Probability>();
        assert!((total - 1.).abs() < 1e-12);
    }

    #[test]
    fn draws_converge_to_table() {
        let weights = Weights::default();
        let ref mut rng = SmallRng::seed_from_u64(0xEC);
        let n = 100_000;
        let mut counts = std::collections::HashMap::<Stage, usize>::new();
        for _ in 0..n {
            *counts.entry(weights.draw(rng)).or_default() += 1;
        }
        for (stage, weight) in Weights::TABLE {
            let observed = counts[&stage] as Probability / n as Probability;
            assert!((observed - weight).abs() < 0.01, "{stage}: {observed}");
        }
    }

    #[test]
    fn custom_tables() {
        let table: &[(Stage, Probability)] = &[(Stage::Turn, 1.)];
        let only_turn = Weights::try_from(table).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!((0..100).all(|_| only_turn.draw(rng) == Stage::Turn));
        assert_eq!(only_turn.weight(Stage::Flop), 0.);
    }

    #[test]
    fn degenerate_tables_are_rejected() {
        let zero: &[(Stage, Probability)] = &[(Stage::Turn, 0.)];
        let empty: &[(Stage, Probability)] = &[];
        assert!(Weights::try_from(zero).is_err());
        assert!(Weights::try_from(empty).is_err());
    }

    #[test]
    fn normalized_weights() {
        let weights = Weights::default();
        assert!((weights.weight(Stage::Preflop) - 0.15).abs() < 1e-12);
        assert!((weights.weight(Stage::Turn) - 0.425).abs() < 1e-12);
    }
}
