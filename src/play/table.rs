use super::event::Event;
use super::player::Player;
use super::pool::Pool;
use super::pool::Side;
use super::round::Round;
use crate::CHERRY_COUNT;
use crate::cards::Deck;
use rand::Rng;
use rand::rngs::SmallRng;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub pool: Pool,
    /// Side whose opponent ran out of cherries. `None` when the player quit.
    pub winner: Option<Side>,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.winner {
            Some(Side::Computer) => writeln!(f, "The computer has won the game!")?,
            Some(Side::Player) => writeln!(f, "The player has won the game!")?,
            None => {}
        }
        write!(f, "Thanks for playing!")
    }
}

/// The match controller. Owns the deck, the round in progress and the pool,
/// and keeps dealing rounds until a side runs dry or the player quits.
#[derive(Debug)]
pub struct Table<R = SmallRng> {
    deck: Deck<R>,
    round: Round,
    pool: Pool,
    rounds: usize,
}

impl<R: Rng> Table<R> {
    /// Both sides start with [`CHERRY_COUNT`].
    pub fn new(deck: Deck<R>) -> Self {
        Self::with_pool(deck, Pool::new(CHERRY_COUNT))
    }
    pub fn with_pool(deck: Deck<R>, pool: Pool) -> Self {
        Self {
            deck,
            round: Round::new(),
            pool,
            rounds: 0,
        }
    }
    pub fn pool(&self) -> Pool {
        self.pool
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn deck(&self) -> &Deck<R> {
        &self.deck
    }
    pub fn deck_mut(&mut self) -> &mut Deck<R> {
        &mut self.deck
    }

    /// Plays rounds until either side is out of cherries or the player
    /// declines another round. A pool that starts exhausted plays nothing.
    pub fn play<P>(&mut self, player: &mut P) -> anyhow::Result<Summary>
    where
        P: Player + ?Sized,
    {
        while self.pool.exhausted().is_none() {
            let winner = self.round.play(&mut self.deck, player, self.pool)?;
            self.settle(winner);
            let view = self.round.view(self.pool);
            player.notify(&Event::Resolved { view, winner });
            if self.pool.exhausted().is_some() || !player.rematch(&view)? {
                break;
            }
        }
        let summary = self.summary();
        log::info!(
            "{:<32}{:<32}",
            "match over after rounds",
            summary.rounds
        );
        player.notify(&Event::Over(summary));
        Ok(summary)
    }

    fn settle(&mut self, winner: Side) {
        self.rounds += 1;
        self.pool.settle(winner);
        log::info!(
            "round {:>3} to {:<8} player {:>2} computer {:>2}",
            self.rounds,
            winner,
            self.pool.player(),
            self.pool.computer()
        );
    }

    pub fn summary(&self) -> Summary {
        Summary {
            rounds: self.rounds,
            pool: self.pool,
            winner: self.pool.exhausted().map(|side| side.opponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::players::Script;
    use rand::SeedableRng;

    fn table(seed: u64) -> Table {
        Table::new(Deck::shuffled(SmallRng::seed_from_u64(seed)))
    }

    #[test]
    fn quitting_after_one_round() {
        let mut table = table(1);
        let mut script = Script::new().rematches([false]);
        let summary = table.play(&mut script).unwrap();
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.winner, None);
        assert_eq!(summary.pool.total(), 2 * CHERRY_COUNT as u16);
        assert_eq!(script.asked().1, 1);
        assert!(matches!(script.events().last(), Some(Event::Over(_))));
    }

    #[test]
    fn scripted_loss_moves_one_cherry() {
        let mut table = table(2);
        table.deck_mut().stack(&[
            Card::from((Rank::Five, Suit::Heart)),
            Card::from((Rank::Ten, Suit::Spade)),
            Card::from((Rank::Nine, Suit::Diamond)),
            Card::from((Rank::Six, Suit::Heart)),
        ]);
        let mut script = Script::new().hits([false]);
        let summary = table.play(&mut script).unwrap();
        assert_eq!(summary.pool, Pool::from((9, 11)));
        let resolved = script
            .events()
            .iter()
            .find_map(|e| match e {
                Event::Resolved { view, winner } => Some((view.pool, *winner)),
                _ => None,
            });
        assert_eq!(resolved, Some((Pool::from((9, 11)), Side::Computer)));
    }

    #[test]
    fn last_cherry_ends_match_without_asking() {
        let deck = Deck::shuffled(SmallRng::seed_from_u64(3));
        let mut table = Table::with_pool(deck, Pool::from((1, 1)));
        let mut script = Script::new().rematches([true, true]);
        let summary = table.play(&mut script).unwrap();
        assert_eq!(summary.rounds, 1);
        assert_eq!(script.asked().1, 0);
        let loser = summary.winner.map(|w| w.opponent()).unwrap();
        assert_eq!(summary.pool.of(loser), 0);
        assert_eq!(summary.pool.total(), 2);
    }

    #[test]
    fn long_matches_conserve_cherries() {
        for seed in 0..32 {
            let mut table = table(seed);
            let mut script = Script::new()
                .hits((0..400).map(|i| i % 3 == 0))
                .rematches(std::iter::repeat(true).take(200));
            let summary = table.play(&mut script).unwrap();
            assert_eq!(summary.pool.total(), 2 * CHERRY_COUNT as u16);
            assert!(summary.rounds <= 201);
            match summary.winner {
                Some(side) => assert_eq!(summary.pool.of(side.opponent()), 0),
                None => assert_eq!(summary.rounds, 201),
            }
        }
    }

    #[test]
    fn reshuffles_across_rounds() {
        let mut table = table(9);
        let mut script = Script::new().rematches(std::iter::repeat(true).take(60));
        table.play(&mut script).unwrap();
        // every round deals at least four cards
        assert!(table.rounds() >= CHERRY_COUNT as usize);
        assert!(table.rounds() * 4 > crate::DECK_SIZE);
        assert!(table.deck().shuffles() > 1);
    }

    #[test]
    fn exhausted_pool_plays_no_rounds() {
        for pool in [Pool::from((0, 20)), Pool::from((20, 0))] {
            let deck = Deck::shuffled(SmallRng::seed_from_u64(4));
            let mut table = Table::with_pool(deck, pool);
            let mut script = Script::new().hits([true]).rematches([true]);
            let summary = table.play(&mut script).unwrap();
            assert_eq!(summary.rounds, 0);
            assert_eq!(summary.pool, pool);
            assert_eq!(summary.winner, pool.exhausted().map(|side| side.opponent()));
            assert_eq!(script.asked(), (0, 0));
            assert_eq!(script.events(), &[Event::Over(summary)]);
            assert_eq!(table.deck().remaining(), crate::DECK_SIZE);
        }
    }

    #[test]
    fn summary_messages() {
        let pool = Pool::from((0, 20));
        let lost = Summary { rounds: 10, pool, winner: Some(Side::Computer) };
        let quit = Summary { rounds: 3, pool, winner: None };
        assert_eq!(lost.to_string(), "The computer has won the game!\nThanks for playing!");
        assert_eq!(quit.to_string(), "Thanks for playing!");
    }
}
