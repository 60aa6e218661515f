use super::board::Board;
use super::deck::Deck;
use super::hole::Hole;
use super::stage::Stage;
use rand::Rng;

/// One heads-up spot: two hole hands and the board they share.
///
/// Dealt from a fresh deck in draw order: the first two cards go to
/// `hand1`, the next two to `hand2`, the rest to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hand1: Hole,
    pub hand2: Hole,
    pub board: Board,
}

impl Deal {
    pub fn random<R: Rng + ?Sized>(stage: Stage, rng: &mut R) -> Self {
        let ref mut deck = Deck::new();
        let hand1 = deck.hole(rng);
        let hand2 = deck.hole(rng);
        let board = Board::from(
            (0..stage.n_board())
                .map(|_| deck.draw(rng))
                .collect::<Vec<_>>(),
        );
        Self {
            hand1,
            hand2,
            board,
        }
    }
    pub fn stage(&self) -> Stage {
        self.board.stage()
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} [{}]", self.hand1, self.hand2, self.board)
    }
}
