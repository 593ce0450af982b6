use super::event::Event;
use super::event::View;

/// Whoever sits across from the computer.
///
/// Implementations answer the two questions the table asks and receive
/// every event so they can render it. Answering is the only fallible part:
/// a prompt that cannot be shown ends the match.
pub trait Player {
    /// Draw another card? Asked after each draw that did not bust.
    fn hit(&mut self, view: &View) -> anyhow::Result<bool>;
    /// Play another round? Asked after a settlement that left both sides with cherries.
    fn rematch(&mut self, view: &View) -> anyhow::Result<bool>;
    /// Receive notification of table events.
    fn notify(&mut self, event: &Event);
}
