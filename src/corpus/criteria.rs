use super::scenario::Scenario;
use crate::cards::Stage;
use crate::difficulty::Window;
use crate::*;

/// Which equity of a scenario the difficulty window is tested against.
///
/// The two equities of a heads-up spot sum to roughly one, so the weaker hand
/// never holds much more than half. Windows above 0.5 can therefore only be
/// met by the favorite, which is why [`Measure::Favorite`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// The higher of the two equities.
    #[default]
    Favorite,
    /// The lower of the two equities.
    Weaker,
    /// The stored `hand2_equity` column, whichever hand that happens to be.
    Column,
}

impl Measure {
    pub fn equity(&self, scenario: &Scenario) -> Probability {
        match self {
            Self::Favorite => scenario.favorite_equity(),
            Self::Weaker => scenario.weaker_equity(),
            Self::Column => scenario.hand2_equity,
        }
    }
    /// SQL expression over the scenario columns computing the same value.
    pub const fn sql(&self) -> &'static str {
        match self {
            Self::Favorite => "GREATEST(hand1_equity, hand2_equity)",
            Self::Weaker => "LEAST(hand1_equity, hand2_equity)",
            Self::Column => "hand2_equity",
        }
    }
}

/// A query against the corpus: one stage, coin flips excluded, and
/// optionally a window on the [`Measure`]d equity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criteria {
    stage: Stage,
    window: Option<(Window, Measure)>,
}

impl From<Stage> for Criteria {
    fn from(stage: Stage) -> Self {
        Self {
            stage,
            window: None,
        }
    }
}

impl Criteria {
    pub fn within(self, window: Window, measure: Measure) -> Self {
        Self {
            window: Some((window, measure)),
            ..self
        }
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn window(&self) -> Option<(Window, Measure)> {
        self.window
    }
    pub fn accepts(&self, scenario: &Scenario) -> bool {
        scenario.stage == self.stage
            && !scenario.is_coin_flip()
            && self
                .window
                .map_or(true, |(w, m)| w.contains(m.equity(scenario)))
    }
}

impl std::fmt::Display for Criteria {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.window {
            None => write!(f, "{} (any equity)", self.stage),
            Some((w, m)) => write!(f, "{} ({:?} in {})", self.stage, m, w),
        }
    }
}
