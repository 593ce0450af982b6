use super::event::Event;
use super::event::View;
use super::player::Player;
use super::pool::Pool;
use super::pool::Side;
use crate::COMPUTER_SAFE_SCORE;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Score;
use rand::Rng;

/// Where a round stands.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Dealing,
    PlayerTurn,
    ComputerTurn,
    Resolved,
}

/// One round of play: deal, the player's draws, the computer's draws, resolution.
///
/// The step methods assert the phase they belong to; [`Round::play`]
/// sequences them against a [`Player`].
#[derive(Debug, Default, Clone)]
pub struct Round {
    player: Hand,
    computer: Hand,
    phase: Phase,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn computer(&self) -> &Hand {
        &self.computer
    }
    pub fn view(&self, pool: Pool) -> View {
        View {
            player: self.player,
            computer: self.computer,
            pool,
        }
    }

    /// Clears both hands, then one card to the player and two to the computer.
    /// The player's second card comes from the first draw of their turn.
    pub fn deal<R: Rng>(&mut self, deck: &mut Deck<R>) {
        self.player.reset();
        self.computer.reset();
        self.player.add(deck.draw());
        self.computer.add(deck.draw());
        self.computer.add(deck.draw());
        self.phase = Phase::PlayerTurn;
    }
    pub fn hit_player<R: Rng>(&mut self, deck: &mut Deck<R>) -> Score {
        assert_eq!(self.phase, Phase::PlayerTurn);
        self.player.add(deck.draw());
        self.player.score()
    }
    /// Ends the player's turn, by choice or by bust.
    pub fn stand(&mut self) {
        assert_eq!(self.phase, Phase::PlayerTurn);
        self.phase = Phase::ComputerTurn;
    }
    pub fn computer_hits(&self) -> bool {
        computer_hits(self.computer.score(), self.player.score())
    }
    pub fn hit_computer<R: Rng>(&mut self, deck: &mut Deck<R>) -> Score {
        assert_eq!(self.phase, Phase::ComputerTurn);
        self.computer.add(deck.draw());
        self.computer.score()
    }
    pub fn resolve(&mut self) -> Side {
        assert_eq!(self.phase, Phase::ComputerTurn);
        self.phase = Phase::Resolved;
        winner(self.player.score(), self.computer.score())
    }

    /// Runs a whole round. `pool` is only shown to the player; settling
    /// it is the table's job.
    pub fn play<R, P>(&mut self, deck: &mut Deck<R>, player: &mut P, pool: Pool) -> anyhow::Result<Side>
    where
        R: Rng,
        P: Player + ?Sized,
    {
        self.deal(deck);
        player.notify(&Event::Deal(self.view(pool)));
        loop {
            let score = self.hit_player(deck);
            player.notify(&Event::Draw(self.view(pool)));
            if score.is_bust() || !player.hit(&self.view(pool))? {
                break;
            }
        }
        self.stand();
        log::debug!("{:<32}{:<32}", "player stands on", self.player.score());
        while self.computer_hits() {
            let score = self.hit_computer(deck);
            log::debug!("{:<32}{:<32}", "computer draws to", score);
            player.notify(&Event::Draw(self.view(pool)));
        }
        Ok(self.resolve())
    }
}

/// Fixed threshold policy: draw while not bust, at or under the safe score,
/// and strictly behind the player. A bust player is never behind.
pub fn computer_hits(computer: Score, player: Score) -> bool {
    !computer.is_bust() && computer.points() <= COMPUTER_SAFE_SCORE && computer < player
}

/// The player must strictly beat the computer. Ties and double busts go to the computer.
pub fn winner(player: Score, computer: Score) -> Side {
    if player > computer {
        Side::Player
    } else {
        Side::Computer
    }
}
