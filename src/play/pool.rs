use crate::Cherries;

/// One side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        })
    }
}

/// Cherries held by both sides. Settlements move one cherry from the
/// loser to the winner, so the sum never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    player: Cherries,
    computer: Cherries,
}

impl Pool {
    /// Both sides start with `each`.
    pub fn new(each: Cherries) -> Self {
        Self::from((each, each))
    }
    pub fn player(&self) -> Cherries {
        self.player
    }
    pub fn computer(&self) -> Cherries {
        self.computer
    }
    pub fn of(&self, side: Side) -> Cherries {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }
    pub fn total(&self) -> u16 {
        self.player as u16 + self.computer as u16
    }
    /// Winner +1, loser -1.
    pub fn settle(&mut self, winner: Side) {
        let total = self.total();
        debug_assert!(self.of(winner.opponent()) > 0, "{} has no cherries to lose", winner.opponent());
        match winner {
            Side::Player => {
                self.player += 1;
                self.computer -= 1;
            }
            Side::Computer => {
                self.computer += 1;
                self.player -= 1;
            }
        }
        debug_assert_eq!(total, self.total());
    }
    /// The side that has run out, if any.
    pub fn exhausted(&self) -> Option<Side> {
        match (self.player, self.computer) {
            (0, _) => Some(Side::Player),
            (_, 0) => Some(Side::Computer),
            _ => None,
        }
    }
}

/// (player, computer)
impl From<(Cherries, Cherries)> for Pool {
    fn from((player, computer): (Cherries, Cherries)) -> Self {
        Self { player, computer }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Player: {} (cherries)\tComputer: {} (cherries)",
            self.player, self.computer
        )
    }
}
