//! Console table over any line-based reader and writer.

use std::io::{self, BufRead, Write};

use core::num::NonZeroU64;

use crate::hand::Hand;
use crate::result::SessionSummary;
use crate::table::{Decision, Event, Table, parse_game_count};

/// A [`Table`] that prompts on a writer and reads answers line by line.
///
/// Invalid answers are rejected with a hint and asked again. Reaching the end
/// of input is reported as [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its reader and writer.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line)
    }

    fn write_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        writeln!(
            self.output,
            "Played {}: won {}, lost {}, tied {}",
            summary.played, summary.player_wins, summary.dealer_wins, summary.ties
        )?;
        if summary.aborted > 0 {
            writeln!(self.output, "Abandoned: {}", summary.aborted)?;
        }
        Ok(())
    }
}

impl<I: BufRead, O: Write> Table for Console<I, O> {
    type Error = io::Error;

    fn game_count(&mut self) -> io::Result<NonZeroU64> {
        let mut prompt = "How many games do you want to play? ";
        loop {
            let line = self.prompt(prompt)?;
            match parse_game_count(&line) {
                Ok(games) => return Ok(games),
                Err(err) => {
                    tracing::debug!(input = line.trim(), %err, "rejected game count");
                    prompt = "Please enter a positive number: ";
                }
            }
        }
    }

    fn decide(&mut self, _player: &Hand) -> io::Result<Decision> {
        let mut prompt = "Hit or stand? ";
        loop {
            let line = self.prompt(prompt)?;
            writeln!(self.output)?;
            match line.parse() {
                Ok(decision) => return Ok(decision),
                Err(err) => {
                    tracing::debug!(input = line.trim(), %err, "rejected decision");
                    prompt = "Please enter hit or stand (h/s): ";
                }
            }
        }
    }

    fn notify(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::GameStarted { number, total } => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", "*".repeat(30))?;
                writeln!(self.output, "Game: {number} of {total}")?;
            }
            Event::HandShown(view) => {
                writeln!(self.output, "{view}")?;
            }
            Event::RoundOver(result) => {
                if !result.outcome.is_early() {
                    writeln!(self.output, "Final results")?;
                    writeln!(self.output, "Your hand: {}", result.player_value)?;
                    writeln!(self.output, "Dealer's hand: {}", result.dealer_value)?;
                }
                writeln!(self.output, "{}", result.outcome)?;
            }
            Event::RoundAborted(err) => {
                writeln!(self.output, "The deck ran out ({err}). This game is abandoned.")?;
            }
            Event::SessionOver(summary) => {
                writeln!(self.output)?;
                if let Some(summary) = summary {
                    self.write_summary(summary)?;
                }
                writeln!(self.output, "Thanks for playing!")?;
            }
        }
        self.output.flush()
    }
}
