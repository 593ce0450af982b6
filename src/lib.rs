//! Heads-up blackjack against the computer, played over a shared pool of cherries.
//!
//! The crate is split the way the game is played:
//!
//! - [`cards`] — card identifiers, the deck, hands and their scores
//! - [`play`] — the round state machine and the match table that keeps the pool
//! - [`players`] — collaborators that answer prompts and render the table
//!
//! The core never performs I/O. Everything interactive sits behind
//! [`play::Player`].
pub mod cards;
pub mod play;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Wager units held by one side of the table.
pub type Cherries = u8;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cherries each side starts a match with.
pub const CHERRY_COUNT: Cherries = 10;
/// Cards per suit; identifiers are grouped in contiguous blocks of this size.
pub const SUIT_SIZE: u8 = 13;
/// Highest valid card identifier.
pub const CARD_COUNT: u8 = 52;
/// Cards actually held by the deck. Identifier 52 decodes but is never dealt.
pub const DECK_SIZE: usize = 51;
/// Live cards a hand can hold. No hand reaches this before busting.
pub const HAND_CAPACITY: usize = 14;
/// Highest total that is not a bust.
pub const BUST: u8 = 21;
/// The computer keeps drawing while at or below this total.
pub const COMPUTER_SAFE_SCORE: u8 = 15;
/// Environment variable that pins the deck's RNG seed.
pub const SEED_VAR: &str = "CHERRYJACK_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
use anyhow::Context;

/// Seed for the deck's RNG. Taken from [`SEED_VAR`] when set,
/// otherwise from the wall clock.
pub fn seed() -> anyhow::Result<u64> {
    match std::env::var(SEED_VAR) {
        Ok(value) => parse_seed(&value),
        Err(std::env::VarError::NotPresent) => Ok(std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("system clock is before the unix epoch")?
            .as_secs()),
        Err(e) => Err(e).with_context(|| format!("reading {}", SEED_VAR)),
    }
}

fn parse_seed(value: &str) -> anyhow::Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, value))
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG to file, WARN and above to the terminal
/// so the table stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file: Box<dyn simplelog::SharedLogger> = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term: Box<dyn simplelog::SharedLogger> = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
