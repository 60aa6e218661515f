/// The betting round a scenario is frozen at.
///
/// The river is never served: with all five cards out there is nothing left
/// to guess, so the corpus only covers the three earlier streets.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Preflop = 0isize,
    Flop = 1isize,
    Turn = 2isize,
}

impl Stage {
    /// All stages in generation order.
    pub const fn all() -> [Self; 3] {
        [Self::Preflop, Self::Flop, Self::Turn]
    }
    /// Storage and wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
        }
    }
    /// Community cards visible at this stage.
    pub const fn n_board(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
        }
    }
    /// Cards dealt for one heads-up scenario: two holes plus the board.
    pub const fn n_dealt(&self) -> usize {
        2 + 2 + self.n_board()
    }
}

/// board size → stage
impl TryFrom<usize> for Stage {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Preflop),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            _ => Err(anyhow::anyhow!("no stage shows {} board cards", n)),
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid stage: {:?}", s))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for stage in Stage::all() {
            assert_eq!(Stage::try_from(stage.as_str()).unwrap(), stage);
        }
        assert!(Stage::try_from("river").is_err());
    }

    #[test]
    fn bijective_board_size() {
        for stage in Stage::all() {
            assert_eq!(Stage::try_from(stage.n_board()).unwrap(), stage);
        }
        assert!(Stage::try_from(5usize).is_err());
    }

    #[test]
    fn deal_sizes() {
        assert_eq!(Stage::Preflop.n_dealt(), 4);
        assert_eq!(Stage::Flop.n_dealt(), 7);
        assert_eq!(Stage::Turn.n_dealt(), 8);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Flop).unwrap(), "\"flop\"");
    }
}
