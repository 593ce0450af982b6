//! Round sequencing and match control.
//!
//! - [`Round`] — deal, player turn, computer turn, resolution
//! - [`Table`] — owns the deck and the [`Pool`], runs rounds until a side is out
//! - [`Player`] — collaborator answering prompts and receiving [`Event`]s
mod event;
mod player;
mod pool;
mod round;
mod table;

pub use event::*;
pub use player::*;
pub use pool::*;
pub use round::*;
pub use table::*;
