use crate::*;

/// Solver result for one heads-up spot, indexed by hand order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    pub equities: [Probability; 2],
    pub wins: [Count; 2],
    pub ties: Count,
}
