use super::pool::Pool;
use super::pool::Side;
use super::table::Summary;
use crate::cards::Card;
use crate::cards::Hand;

/// Read-only snapshot of the table handed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub player: Hand,
    pub computer: Hand,
    pub pool: Pool,
}

impl View {
    fn cell(card: Option<Card>) -> String {
        card.map(|c| format!("{:>2}{}", c.rank(), c.suit()))
            .unwrap_or_default()
    }
}

/// The table as a block of text: cherries, both hands side by side, scores.
impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const RULE: &str = "---------------------------------";
        writeln!(f, "-- BlackJack --")?;
        writeln!(f, "{}", self.pool)?;
        writeln!(f, "Your Hand   Computer's Hand")?;
        writeln!(f, "{}", RULE)?;
        for i in 0..self.player.len().max(self.computer.len()) {
            writeln!(
                f,
                "{}\t\t{}",
                Self::cell(self.player.get(i)),
                Self::cell(self.computer.get(i))
            )?;
        }
        writeln!(f, "Score: {}\tScore: {}", self.player.score(), self.computer.score())?;
        write!(f, "{}", RULE)
    }
}

/// Things that happen at the table, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The opening cards are out: one to the player, two to the computer.
    Deal(View),
    /// A card landed in either hand.
    Draw(View),
    /// A round was decided and the pool already settled.
    Resolved { view: View, winner: Side },
    /// The match ended.
    Over(Summary),
}
