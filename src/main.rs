//! Blackjack against the computer for cherries.
//!
//! Runs until one side has no cherries left or the player declines another
//! round. Set `CHERRYJACK_SEED` to replay a particular deck.
use cherryjack::cards::Deck;
use cherryjack::play::Table;
use cherryjack::players::Human;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() -> anyhow::Result<()> {
    cherryjack::log()?;
    let seed = cherryjack::seed()?;
    log::info!("{:<32}{:<32}", "seeding deck", seed);
    let deck = Deck::shuffled(SmallRng::seed_from_u64(seed));
    let summary = Table::new(deck).play(&mut Human)?;
    log::info!("{:<32}{:<32?}", "final pool", summary.pool);
    Ok(())
}
