use crate::cards::Deal;
use crate::cards::Stage;
use crate::solver::Equity;
use crate::*;

/// A persisted heads-up spot with its solver results.
///
/// Hands and board stay in wire form so a malformed row still loads and
/// only degrades at presentation time. `hand1` is not necessarily the
/// stronger hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub hand1: String,
    pub hand2: String,
    pub board: String,
    pub stage: Stage,
    pub hand1_equity: Probability,
    pub hand2_equity: Probability,
    pub hand1_wins: Count,
    pub hand2_wins: Count,
    pub ties: Count,
}

impl Scenario {
    /// Lower of the two equities.
    pub fn weaker_equity(&self) -> Probability {
        self.hand1_equity.min(self.hand2_equity)
    }
    /// Higher of the two equities.
    pub fn favorite_equity(&self) -> Probability {
        self.hand1_equity.max(self.hand2_equity)
    }
    /// Both hands sit inside the coin-flip band.
    pub fn is_coin_flip(&self) -> bool {
        crate::difficulty::Window::COIN_FLIP.contains(self.hand1_equity)
            && crate::difficulty::Window::COIN_FLIP.contains(self.hand2_equity)
    }
    /// Same spot with the hands relabeled.
    pub fn swapped(self) -> Self {
        Self {
            hand1: self.hand2,
            hand2: self.hand1,
            hand1_equity: self.hand2_equity,
            hand2_equity: self.hand1_equity,
            hand1_wins: self.hand2_wins,
            hand2_wins: self.hand1_wins,
            ..self
        }
    }
}

impl From<(Deal, Equity)> for Scenario {
    fn from((deal, equity): (Deal, Equity)) -> Self {
        Self {
            hand1: deal.hand1.to_string(),
            hand2: deal.hand2.to_string(),
            board: deal.board.to_string(),
            stage: deal.stage(),
            hand1_equity: equity.equities[0],
            hand2_equity: equity.equities[1],
            hand1_wins: equity.wins[0],
            hand2_wins: equity.wins[1],
            ties: equity.ties,
        }
    }
}
