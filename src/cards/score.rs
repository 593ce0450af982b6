use crate::BUST;

/// Value of a hand. A bust ranks below every point total,
/// including the empty hand's zero.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    Bust,
    Points(u8),
}

impl Score {
    pub fn is_bust(&self) -> bool {
        matches!(self, Score::Bust)
    }
    /// Points held, with a bust reading as 0.
    pub fn points(&self) -> u8 {
        u8::from(*self)
    }
}

/// raw sum of card values
impl From<u8> for Score {
    fn from(total: u8) -> Self {
        if total > BUST {
            Score::Bust
        } else {
            Score::Points(total)
        }
    }
}
/// legacy sentinel form: bust collapses onto 0
impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        match score {
            Score::Bust => 0,
            Score::Points(n) => n,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.points())
    }
}
