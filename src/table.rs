//! The boundary between the game and whoever sits at the table.

use core::num::{IntErrorKind, NonZeroU64, ParseIntError};
use core::str::FromStr;

use crate::error::{EmptyDeckError, GameCountError, ParseDecisionError};
use crate::hand::{Hand, HandView};
use crate::result::{RoundResult, SessionSummary};

/// The player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    /// Accepts `h`, `hit`, `s` or `stand` in any case, ignoring surrounding
    /// whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(ParseDecisionError)
        }
    }
}

/// Parses the number of games to play.
///
/// # Errors
///
/// Returns [`GameCountError::NotANumber`] for anything that is not an integer,
/// [`GameCountError::NotPositive`] for zero or negative values and
/// [`GameCountError::TooLarge`] for integers above [`u64::MAX`].
pub fn parse_game_count(input: &str) -> Result<NonZeroU64, GameCountError> {
    let value: i128 = input
        .trim()
        .parse()
        .map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => GameCountError::TooLarge,
            IntErrorKind::NegOverflow => GameCountError::NotPositive,
            _ => GameCountError::NotANumber,
        })?;
    if value <= 0 {
        return Err(GameCountError::NotPositive);
    }
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(GameCountError::TooLarge)
}

/// Something the table should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new game begins.
    GameStarted {
        /// 1-based game number.
        number: u64,
        /// Total games in the session.
        total: u64,
    },
    /// A hand should be displayed.
    HandShown(HandView),
    /// The round finished.
    RoundOver(RoundResult),
    /// The round was abandoned because the deck ran out.
    RoundAborted(EmptyDeckError),
    /// The last game is over. Carries the tally when it should be shown.
    SessionOver(Option<SessionSummary>),
}

/// Input and output for a game session.
///
/// The round logic never reads or prints anything itself; it asks the table
/// for decisions and tells it what happened.
pub trait Table {
    /// Error raised when the table cannot read or write.
    type Error;

    /// Asks how many games to play. Implementations keep asking until they
    /// get a positive number.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn game_count(&mut self) -> Result<NonZeroU64, Self::Error>;

    /// Asks the player to hit or stand. Implementations keep asking until
    /// they get a valid answer.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn decide(&mut self, player: &Hand) -> Result<Decision, Self::Error>;

    /// Shows an event.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    fn notify(&mut self, event: &Event) -> Result<(), Self::Error>;
}
