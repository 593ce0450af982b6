use crate::play::Event;
use crate::play::Player;
use crate::play::Side;
use crate::play::View;
use colored::Colorize;
use dialoguer::Input;

/// Interactive player at the terminal.
///
/// Only the first character of an answer counts. Anything but `y` or `n`
/// is dropped and the prompt repeats, with the rest of the line discarded.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn hit(&mut self, _: &View) -> anyhow::Result<bool> {
        Self::ask("draw again? (y/n)")
    }
    fn rematch(&mut self, _: &View) -> anyhow::Result<bool> {
        Self::ask("play another round? (y/n)")
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Deal(_) => {}
            Event::Draw(view) => println!("\n{}", view),
            Event::Resolved { view, winner } => {
                println!("\n{}", view);
                println!("{}", Self::verdict(*winner));
            }
            Event::Over(summary) => println!("\n{}", summary),
        }
    }
}

impl Human {
    fn ask(prompt: &str) -> anyhow::Result<bool> {
        Self::answer(std::iter::repeat_with(|| {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .report(false)
                .interact_text()
                .map_err(anyhow::Error::from)
        }))
    }
    /// First line that parses wins; every other line is dropped silently.
    fn answer<I>(lines: I) -> anyhow::Result<bool>
    where
        I: IntoIterator<Item = anyhow::Result<String>>,
    {
        for line in lines {
            if let Some(answer) = Self::parse(&line?) {
                return Ok(answer);
            }
        }
        anyhow::bail!("input closed before a y/n answer")
    }
    fn parse(line: &str) -> Option<bool> {
        match line.chars().next() {
            Some('y') => Some(true),
            Some('n') => Some(false),
            _ => None,
        }
    }
    fn verdict(winner: Side) -> String {
        let line = format!("{} wins!", winner);
        match winner {
            Side::Player => line.green().bold().to_string(),
            Side::Computer => line.red().bold().to_string(),
        }
    }
}
