/// One of four suits. Each owns a contiguous block of [`SUIT_SIZE`] identifiers,
/// in declaration order: hearts `1..=13`, spades `14..=26`,
/// diamonds `27..=39`, clubs `40..=52`.
///
/// [`SUIT_SIZE`]: crate::SUIT_SIZE
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Heart = 0,
    Spade = 1,
    Diamond = 2,
    Club = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Heart, Suit::Spade, Suit::Diamond, Suit::Club]
    }
}

/// u8 isomorphism over the block index `0..4`
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Heart,
            1 => Suit::Spade,
            2 => Suit::Diamond,
            3 => Suit::Club,
            _ => panic!("invalid suit block {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Suit::Heart => "H",
            Suit::Spade => "S",
            Suit::Diamond => "D",
            Suit::Club => "C",
        })
    }
}
