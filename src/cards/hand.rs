use super::card::Card;
use super::score::Score;
use crate::HAND_CAPACITY;

/// Cards held by one side during a round, in draw order.
///
/// Fixed capacity with an explicit length, so snapshots are `Copy`
/// and nothing allocates mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Option<Card>; HAND_CAPACITY],
    len: usize,
}

impl Default for Hand {
    fn default() -> Self {
        Self::empty()
    }
}

impl Hand {
    pub fn empty() -> Self {
        Self {
            cards: [None; HAND_CAPACITY],
            len: 0,
        }
    }
    /// Clears every slot.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
    /// Appends a card.
    ///
    /// # Panics
    /// When the hand is full. Any hand this large has long since bust.
    pub fn add(&mut self, card: Card) {
        assert!(self.len < HAND_CAPACITY, "hand holds at most {} cards", HAND_CAPACITY);
        self.cards[self.len] = Some(card);
        self.len += 1;
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn get(&self, i: usize) -> Option<Card> {
        self.cards.get(i).copied().flatten()
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards[..self.len].iter().flatten().copied()
    }
    /// Sum of card values with every Ace counted as 1.
    pub fn points(&self) -> u8 {
        self.cards().map(|c| c.value()).sum()
    }
    pub fn score(&self) -> Score {
        Score::from(self.points())
    }
    /// Total with a bust collapsed onto 0, as shown on the table.
    pub fn total(&self) -> u8 {
        u8::from(self.score())
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        let mut hand = Self::empty();
        cards.iter().copied().for_each(|c| hand.add(c));
        hand
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let cards = ranks
            .iter()
            .map(|r| Card::from((*r, Suit::Spade)))
            .collect::<Vec<_>>();
        Hand::from(cards.as_slice())
    }

    #[test]
    fn ace_king_is_eleven() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).total(), 11);
    }

    #[test]
    fn king_queen_two_busts() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(h.points(), 22);
        assert_eq!(h.score(), Score::Bust);
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn empty_totals_zero() {
        let h = Hand::empty();
        assert_eq!(h.total(), 0);
        assert_eq!(h.score(), Score::Points(0));
        assert!(h.is_empty());
    }

    #[test]
    fn keeps_draw_order() {
        let h = hand(&[Rank::Nine, Rank::Two, Rank::Jack]);
        let ranks = h.cards().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Nine, Rank::Two, Rank::Jack]);
        assert_eq!(h.get(1).map(|c| c.rank()), Some(Rank::Two));
        assert_eq!(h.get(3), None);
    }

    #[test]
    fn reset_clears() {
        let mut h = hand(&[Rank::Five, Rank::Six]);
        h.reset();
        assert_eq!(h, Hand::empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn capacity_of_aces_and_twos() {
        let mut h = Hand::empty();
        (0..HAND_CAPACITY).for_each(|_| h.add(Card::from((Rank::Ace, Suit::Club))));
        assert_eq!(h.len(), HAND_CAPACITY);
        assert_eq!(h.total(), 14);
    }

    #[test]
    #[should_panic]
    fn overflow_panics() {
        let mut h = Hand::empty();
        (0..=HAND_CAPACITY).for_each(|_| h.add(Card::from((Rank::Ace, Suit::Club))));
    }

    #[test]
    fn display() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ten]).to_string(), "AS 10S");
    }
}
