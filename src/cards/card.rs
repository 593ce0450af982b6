use super::rank::Rank;
use super::suit::Suit;
use crate::CARD_COUNT;
use crate::SUIT_SIZE;

/// A playing card encoded by its identifier in `1..=52`.
///
/// Identifiers are grouped by suit in blocks of [`SUIT_SIZE`]; within a block
/// the identifier mod 13 is the rank, with 0 standing for the King.
/// 0 is never a card.
///
/// 5H  10S  9D  KC
/// 5   23   35  52
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Rank from the identifier residue.
    pub fn rank(&self) -> Rank {
        Rank::from(self.0)
    }
    /// Suit from the block the identifier falls in.
    pub fn suit(&self) -> Suit {
        Suit::from((self.0 - 1) / SUIT_SIZE)
    }
    /// Scoring value, 1 through 10.
    pub fn value(&self) -> u8 {
        self.rank().value()
    }
    /// Every identifier in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=CARD_COUNT).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * SUIT_SIZE + u8::from(r))
    }
}

/// u8 isomorphism, checked against `1..=52`
impl TryFrom<u8> for Card {
    type Error = InvalidCard;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=CARD_COUNT => Ok(Self(n)),
            _ => Err(InvalidCard(n)),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// An identifier outside `1..=52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCard(pub u8);

impl std::fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} is not a card identifier (expected 1..={})", self.0, CARD_COUNT)
    }
}

impl std::error::Error for InvalidCard {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert_eq!(card, Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(u8::from(card)));
        }
    }

    #[test]
    fn values_in_range() {
        assert!(Card::all().map(|c| c.value()).all(|v| (1..=10).contains(&v)));
    }

    #[test]
    fn suits_are_contiguous_blocks() {
        let cards = Card::all().collect::<Vec<_>>();
        for (block, suit) in cards.chunks(SUIT_SIZE as usize).zip(Suit::all()) {
            assert_eq!(block.len(), 13);
            assert!(block.iter().all(|c| c.suit() == suit));
        }
    }

    #[test]
    fn known_identifiers() {
        assert_eq!(Card::from((Rank::Five, Suit::Heart)), Card(5));
        assert_eq!(Card::from((Rank::Ten, Suit::Spade)), Card(23));
        assert_eq!(Card::from((Rank::Nine, Suit::Diamond)), Card(35));
        assert_eq!(Card::from((Rank::King, Suit::Club)), Card(52));
        assert_eq!(Card(13).rank(), Rank::King);
        assert_eq!(Card(13).suit(), Suit::Heart);
        assert_eq!(Card(14).rank(), Rank::Ace);
        assert_eq!(Card(14).suit(), Suit::Spade);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Card::try_from(0), Err(InvalidCard(0)));
        assert_eq!(Card::try_from(53), Err(InvalidCard(53)));
        assert!(InvalidCard(53).to_string().contains("53"));
    }

    #[test]
    fn display() {
        assert_eq!(Card(1).to_string(), "AH");
        assert_eq!(Card(23).to_string(), "10S");
        assert_eq!(Card(51).to_string(), "QC");
    }
}
