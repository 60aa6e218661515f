use super::card::Card;

/// A player's two private cards.
///
/// Order is preserved so that a decoded hand re-encodes to the exact wire
/// string it came from. The two cards are always distinct.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn mask(&self) -> u64 {
        u64::from(self.0) | u64::from(self.1)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(a, b)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// "AhKh" → Hole. Exactly four characters, two valid and distinct cards.
impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self(*a, *b)),
            [_, _] => Err(anyhow::anyhow!("hole repeats a card: {:?}", s)),
            _ => Err(anyhow::anyhow!("hole code must be 4 characters: {:?}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for code in ["AhKh", "2c2d", "Ts9s", "KdAc"] {
            assert_eq!(Hole::try_from(code).unwrap().to_string(), code);
        }
    }

    #[test]
    fn rejects_malformed() {
        assert!(Hole::try_from("").is_err());
        assert!(Hole::try_from("AhK").is_err());
        assert!(Hole::try_from("AhKhQh").is_err());
        assert!(Hole::try_from("AhAh").is_err());
        assert!(Hole::try_from("AhXh").is_err());
    }

    #[test]
    fn mask_has_two_bits() {
        let hole = Hole::try_from("AhKh").unwrap();
        assert_eq!(hole.mask().count_ones(), 2);
    }
}
