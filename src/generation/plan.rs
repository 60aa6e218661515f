use crate::cards::Stage;

/// Per-stage deal counts for a run of `total` scenarios.
///
/// Each stage gets an equal share; the remainder goes to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub preflop: u64,
    pub flop: u64,
    pub turn: u64,
}

impl From<u64> for Plan {
    fn from(total: u64) -> Self {
        let share = total / 3;
        Self {
            preflop: share,
            flop: share,
            turn: share + total % 3,
        }
    }
}

impl Plan {
    pub fn total(&self) -> u64 {
        self.preflop + self.flop + self.turn
    }
    pub fn count(&self, stage: Stage) -> u64 {
        match stage {
            Stage::Preflop => self.preflop,
            Stage::Flop => self.flop,
            Stage::Turn => self.turn,
        }
    }
}

impl IntoIterator for Plan {
    type Item = (Stage, u64);
    type IntoIter = std::array::IntoIter<(Stage, u64), 3>;
    fn into_iter(self) -> Self::IntoIter {
        Stage::all().map(|stage| (stage, self.count(stage))).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_goes_to_the_turn() {
        assert_eq!(Plan::from(10), Plan { preflop: 3, flop: 3, turn: 4 });
        assert_eq!(Plan::from(11), Plan { preflop: 3, flop: 3, turn: 5 });
        assert_eq!(Plan::from(3), Plan { preflop: 1, flop: 1, turn: 1 });
    }

    #[test]
    fn nothing_is_lost() {
        for total in [3, 4, 5, 999, 1_000, 3_000_000] {
            assert_eq!(Plan::from(total).total(), total);
        }
    }

    #[test]
    fn iterates_in_generation_order() {
        let stages = Plan::from(7).into_iter().collect::<Vec<_>>();
        assert_eq!(
            stages,
            vec![(Stage::Preflop, 2), (Stage::Flop, 2), (Stage::Turn, 3)]
        );
    }
}
