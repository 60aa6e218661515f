use crate::cards::Face;
use crate::cards::Stage;
use crate::corpus::Scenario;
use crate::*;

/// Response body of `/scenario`: the two hands and board decoded for display,
/// their equities, and the difficulty the scenario was chosen for.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Presentation {
    pub hand1: Vec<Face>,
    pub hand2: Vec<Face>,
    pub community: Vec<Face>,
    pub stage: Stage,
    pub hand1_equity: Probability,
    pub hand2_equity: Probability,
    pub target_equity: Probability,
    pub actual_weaker_equity: Probability,
}

impl From<(Scenario, Probability)> for Presentation {
    fn from((scenario, target): (Scenario, Probability)) -> Self {
        Self {
            hand1: Face::hole(&scenario.hand1),
            hand2: Face::hole(&scenario.hand2),
            community: Face::board(&scenario.board),
            stage: scenario.stage,
            hand1_equity: scenario.hand1_equity,
            hand2_equity: scenario.hand2_equity,
            target_equity: target,
            actual_weaker_equity: scenario.weaker_equity(),
        }
    }
}
