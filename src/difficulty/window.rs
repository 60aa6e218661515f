use crate::*;

/// A closed interval of equities, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    min: Probability,
    max: Probability,
}

impl Window {
    /// Fixed window for the first few guesses: one hand is a clear favorite.
    pub const ONBOARDING: Self = Self {
        min: ONBOARDING_MIN,
        max: ONBOARDING_MAX,
    };
    /// Band where both hands are too close to call either way.
    pub const COIN_FLIP: Self = Self {
        min: COIN_FLIP_MIN,
        max: COIN_FLIP_MAX,
    };

    /// `[center − tolerance, center + tolerance]`, clamped to `[0, 1]`.
    pub fn around(center: Probability, tolerance: Probability) -> Self {
        Self {
            min: (center - tolerance).max(0.),
            max: (center + tolerance).min(1.),
        }
    }
    pub fn min(&self) -> Probability {
        self.min
    }
    pub fn max(&self) -> Probability {
        self.max
    }
    pub fn contains(&self, p: Probability) -> bool {
        self.min <= p && p <= self.max
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.min, self.max)
    }
}
