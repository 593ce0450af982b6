//! Card identifiers, the deck, and hand scoring.
//!
//! - [`Card`] — identifier in `1..=52` decoding to a [`Rank`] and a [`Suit`]
//! - [`Deck`] — single pack dealt from the top, reshuffled when empty
//! - [`Hand`] — cards held in draw order
//! - [`Score`] — hand value, or bust
mod card;
mod deck;
mod hand;
mod rank;
mod score;
mod suit;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use rank::*;
pub use score::*;
pub use suit::*;
