//! Implementations of [`Player`](crate::play::Player).
//!
//! - [`Human`] — interactive terminal player (requires `cli` feature)
//! - [`Script`] — pre-recorded answers for headless play and tests
#[cfg(feature = "cli")]
mod human;
mod script;

#[cfg(feature = "cli")]
pub use human::*;
pub use script::*;
