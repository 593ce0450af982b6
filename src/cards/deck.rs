use super::card::Card;
use crate::DECK_SIZE;
use rand::Rng;
use rand::rngs::SmallRng;

/// A single pack dealt from the top.
///
/// Slots before `DECK_SIZE - remaining` have been dealt; the rest are
/// undrawn. The deck owns its random source so a seeded RNG reproduces
/// every shuffle. Drawing from an empty deck reshuffles all slots first,
/// including cards still held in hands.
#[derive(Debug, Clone)]
pub struct Deck<R = SmallRng> {
    slots: Vec<Card>,
    remaining: usize,
    shuffles: usize,
    rng: R,
}

impl<R: Rng> Deck<R> {
    /// Identifiers `1..=DECK_SIZE` in ascending order, nothing dealt.
    pub fn new(rng: R) -> Self {
        Self {
            slots: Card::all().take(DECK_SIZE).collect(),
            remaining: DECK_SIZE,
            shuffles: 0,
            rng,
        }
    }
    pub fn shuffled(rng: R) -> Self {
        let mut deck = Self::new(rng);
        deck.shuffle();
        deck
    }
    /// Fisher-Yates over every slot. Restores a full deck.
    pub fn shuffle(&mut self) {
        for i in 0..DECK_SIZE - 1 {
            let j = self.rng.random_range(i..DECK_SIZE);
            self.slots.swap(i, j);
        }
        self.remaining = DECK_SIZE;
        self.shuffles += 1;
        log::debug!("{:<32}{:<32}", "shuffled deck", self.shuffles);
    }
    /// Deals the top card, reshuffling first when nothing is left.
    pub fn draw(&mut self) -> Card {
        if self.remaining == 0 {
            log::debug!("deck exhausted, reshuffling");
            self.shuffle();
        }
        self.remaining -= 1;
        let card = self.slots[DECK_SIZE - 1 - self.remaining];
        log::debug!("{:<32}{:<32}", "drew", card);
        card
    }
    /// Moves the given cards, in order, to the top of the undrawn pile.
    /// The pile stays a permutation of itself.
    ///
    /// # Panics
    /// If a card is not in the undrawn pile or is listed twice.
    pub fn stack(&mut self, top: &[Card]) {
        let base = DECK_SIZE - self.remaining;
        for (i, card) in top.iter().enumerate() {
            let at = base + i;
            match self.slots.get(at..).and_then(|rest| rest.iter().position(|c| c == card)) {
                Some(offset) => self.slots.swap(at, at + offset),
                None => panic!("{} is not in the undrawn pile", card),
            }
        }
    }
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    /// Number of shuffles so far, reshuffles included.
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }
    /// Undrawn cards, next card first.
    pub fn undrawn(&self) -> &[Card] {
        &self.slots[DECK_SIZE - self.remaining..]
    }
}

impl<R: Rng> Iterator for Deck<R> {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}
