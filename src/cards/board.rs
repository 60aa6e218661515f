use super::card::Card;
use super::stage::Stage;

/// Community cards shared by both hands, in the order they were dealt.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn stage(&self) -> Stage {
        match self.0.len() {
            0 => Stage::Preflop,
            3 => Stage::Flop,
            _ => Stage::Turn,
        }
    }
    pub fn mask(&self) -> u64 {
        self.0.iter().copied().map(u64::from).fold(0, |a, b| a | b)
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        debug_assert!(Stage::try_from(cards.len()).is_ok());
        Self(cards)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|card| write!(f, "{}", card))
    }
}

/// "2c4c5h" → Board. Zero, three or four distinct cards.
impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        Stage::try_from(cards.len())?;
        let mask = cards.iter().copied().map(u64::from).fold(0, |a, b| a | b);
        match mask.count_ones() as usize == cards.len() {
            true => Ok(Self(cards)),
            false => Err(anyhow::anyhow!("board repeats a card: {:?}", s)),
        }
    }
}
