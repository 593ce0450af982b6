use crate::play::Event;
use crate::play::Player;
use crate::play::View;
use std::collections::VecDeque;

/// Player answering from pre-recorded queues. An exhausted queue answers no.
///
/// Keeps every event it is notified of, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct Script {
    hits: VecDeque<bool>,
    rematches: VecDeque<bool>,
    asked: (usize, usize),
    events: Vec<Event>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }
    /// Queue answers to "draw again?".
    pub fn hits(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.hits.extend(answers);
        self
    }
    /// Queue answers to "play another round?".
    pub fn rematches(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.rematches.extend(answers);
        self
    }
    /// How many times each question was asked: (hit, rematch).
    pub fn asked(&self) -> (usize, usize) {
        self.asked
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Player for Script {
    fn hit(&mut self, _: &View) -> anyhow::Result<bool> {
        self.asked.0 += 1;
        Ok(self.hits.pop_front().unwrap_or(false))
    }
    fn rematch(&mut self, _: &View) -> anyhow::Result<bool> {
        self.asked.1 += 1;
        Ok(self.rematches.pop_front().unwrap_or(false))
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
