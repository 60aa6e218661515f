use super::board::Board;
use super::card::Card;
use super::hole::Hole;

/// Structured card as presented to the client: `{rank, suit, code}`.
///
/// `rank` is the display form ("10" rather than "T"), `code` is the original
/// two-character wire code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Face {
    pub rank: String,
    pub suit: String,
    pub code: String,
}

impl From<Card> for Face {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank().label(),
            suit: card.suit().to_string(),
            code: card.to_string(),
        }
    }
}

impl Face {
    /// Decodes a stored hole code. Malformed input yields no cards.
    pub fn hole(code: &str) -> Vec<Self> {
        Hole::try_from(code)
            .inspect_err(|e| log::warn!("undecodable hole {:?}: {}", code, e))
            .map(|hole| hole.cards().into_iter().map(Self::from).collect())
            .unwrap_or_default()
    }
    /// Decodes a stored board code. Malformed input yields no cards.
    pub fn board(code: &str) -> Vec<Self> {
        Board::try_from(code)
            .inspect_err(|e| log::warn!("undecodable board {:?}: {}", code, e))
            .map(|board| board.cards().iter().copied().map(Self::from).collect())
            .unwrap_or_default()
    }
}
