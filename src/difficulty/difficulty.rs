use super::window::Window;
use crate::*;

/// How hard the next scenario should be for a given streak.
///
/// The target is the favorite's equity the player should face: 1.0 at a
/// streak of zero (one hand always wins) decaying toward 0.5 (a coin flip)
/// as the streak grows. The tolerance narrows in steps so that matching stays
/// meaningful at the sharp end of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Difficulty(Streak);

impl From<Streak> for Difficulty {
    fn from(streak: Streak) -> Self {
        Self(streak)
    }
}

impl Difficulty {
    /// `0.5 + 0.5 · e^(−0.25 · streak)`, floored just above 0.5 where the
    /// decay term underflows the precision of `f64`.
    pub fn target(&self) -> Probability {
        (0.5 + 0.5 * (-DIFFICULTY_DECAY * self.0 as f64).exp()).max(f64::next_up(0.5))
    }
    /// Half-width of the acceptance window.
    pub fn tolerance(&self) -> Probability {
        match self.0 {
            0..10 => TOLERANCE_EASY,
            10..20 => TOLERANCE_HARD,
            _ => TOLERANCE_EXPERT,
        }
    }
    /// Accepted equities. Early streaks get the fixed onboarding window.
    pub fn window(&self) -> Window {
        match self.0 {
            s if s <= ONBOARDING_STREAK => Window::ONBOARDING,
            _ => Window::around(self.target(), self.tolerance()),
        }
    }
}
