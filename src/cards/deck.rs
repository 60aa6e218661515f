use super::card::Card;
use super::hole::Hole;
use rand::Rng;

/// The undealt remainder of a 52-card deck, one bit per card.
///
/// Every draw is uniform over the cards still in the deck, so a sequence of
/// draws samples without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self((1 << 52) - 1)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.size() > 0);
        let i = rng.random_range(0..self.0.count_ones());
        let mut deck = self.0;
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0 = self.0 & !u64::from(card);
        card
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let mut seen = 0u64;
        for _ in 0..52 {
            let card = deck.draw(rng);
            assert!(seen & u64::from(card) == 0);
            seen |= u64::from(card);
        }
        assert_eq!(deck.size(), 0);
        assert_eq!(seen, (1 << 52) - 1);
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut counts = [0usize; 52];
        let n = 52_000;
        for _ in 0..n {
            counts[u8::from(Deck::new().draw(rng)) as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c > 800 && c < 1200));
    }
}
