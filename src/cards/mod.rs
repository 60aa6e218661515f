//! Card codec shared by the serving and generation paths.
//!
//! Every card travels as a two-character wire code (`"Ah"`, `"Tc"`). Hole
//! cards concatenate two codes, boards concatenate zero, three or four. Parsing
//! is strict (`TryFrom<&str>`) while presentation through [`Face`] is lenient:
//! a malformed stored code decodes to an empty list instead of an error.
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deal;
pub use deal::*;

pub mod deck;
pub use deck::*;

pub mod face;
pub use face::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod stage;
pub use stage::*;

pub mod suit;
pub use suit::*;
