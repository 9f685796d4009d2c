//! Session loop: plays a number of rounds against a table.

use alloc::vec::{IntoIter, Vec};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{ActionError, SessionError};
use crate::game::{Round, RoundState};
use crate::options::SessionOptions;
use crate::result::{RoundResult, SessionSummary};
use crate::table::{Decision, Event, Table};

/// Plays one round to the end, showing hands and asking for decisions at
/// `table`.
///
/// The round must not have been dealt yet.
///
/// # Errors
///
/// Returns [`SessionError::Table`] if the table fails and
/// [`SessionError::Action`] if the round cannot continue, for example because
/// the deck ran out.
pub fn play_round<T>(
    round: &mut Round,
    table: &mut T,
) -> Result<RoundResult, SessionError<T::Error>>
where
    T: Table + ?Sized,
{
    round.deal()?;
    show(table, &Event::HandShown(round.player_view()))?;
    show(table, &Event::HandShown(round.dealer_view()))?;

    while round.state() == RoundState::PlayerTurn {
        let decision = table.decide(round.player()).map_err(SessionError::Table)?;
        match decision {
            Decision::Hit => {
                round.hit()?;
                show(table, &Event::HandShown(round.player_view()))?;
            }
            Decision::Stand => round.stand()?,
        }
    }

    if round.state() == RoundState::DealerTurn {
        round.dealer_play()?;
        show(table, &Event::HandShown(round.dealer_view()))?;
    }

    if round.state() == RoundState::Resolution {
        round.showdown()?;
    }

    let result = round.result().ok_or(ActionError::InvalidState)?;
    show(table, &Event::RoundOver(result))?;
    Ok(result)
}

fn show<T>(table: &mut T, event: &Event) -> Result<(), SessionError<T::Error>>
where
    T: Table + ?Sized,
{
    table.notify(event).map_err(SessionError::Table)
}

/// Where each round's deck comes from.
#[derive(Debug)]
enum DeckSource {
    /// A fresh 52-card deck shuffled by a seeded generator.
    Shuffled(ChaCha8Rng),
    /// Decks handed over up front, one per game.
    Prepared(IntoIter<Deck>),
}

impl DeckSource {
    fn next_round(&mut self) -> Round {
        match self {
            Self::Shuffled(rng) => Round::new(rng),
            Self::Prepared(decks) => {
                let deck = decks.next().unwrap_or_else(|| Deck::from_cards(Vec::new()));
                Round::from_deck(deck)
            }
        }
    }
}

/// A run of games against one table.
///
/// Every round gets a freshly shuffled deck drawn from the session's seeded
/// random number generator, so a seed replays the same deals.
pub struct Session<T> {
    /// Session options.
    pub options: SessionOptions,
    decks: DeckSource,
    table: T,
    summary: SessionSummary,
}

impl<T: Table> Session<T> {
    /// Creates a new session with the given seed.
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64, table: T) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_source(options, DeckSource::Shuffled(rng), table)
    }

    /// Creates a session that deals game `n` from `decks[n - 1]`, as is.
    ///
    /// Games beyond the last deck are dealt from an empty deck and abandoned.
    ///
    /// ```
    /// use core::num::NonZeroU64;
    /// use twentyone::{Console, Deck, Session, SessionOptions};
    ///
    /// let options = SessionOptions::default().with_games(NonZeroU64::MIN);
    /// let console = Console::new(&b"s\n"[..], Vec::new());
    /// let mut session = Session::with_decks(options, vec![Deck::new()], console);
    ///
    /// let summary = session.run().unwrap();
    /// assert_eq!(summary.played, 1);
    /// assert_eq!(summary.aborted, 0);
    /// ```
    #[must_use]
    pub fn with_decks(options: SessionOptions, decks: Vec<Deck>, table: T) -> Self {
        Self::with_source(options, DeckSource::Prepared(decks.into_iter()), table)
    }

    fn with_source(options: SessionOptions, decks: DeckSource, table: T) -> Self {
        Self {
            options,
            decks,
            table,
            summary: SessionSummary::default(),
        }
    }

    /// Plays every game, then announces the end of the session.
    ///
    /// A round that runs out of cards is reported to the table and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the table fails or a round is driven out of order.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError<T::Error>> {
        let total = match self.options.games {
            Some(games) => games,
            None => self.table.game_count().map_err(SessionError::Table)?,
        };
        let total = total.get();
        tracing::info!(games = total, "session started");

        for number in 1..=total {
            self.summary.played += 1;
            show(&mut self.table, &Event::GameStarted { number, total })?;

            let mut round = self.decks.next_round();
            match play_round(&mut round, &mut self.table) {
                Ok(result) => self.summary.record(&result),
                Err(SessionError::Action(ActionError::EmptyDeck(err))) => {
                    tracing::warn!(game = number, %err, "round aborted");
                    self.summary.aborted += 1;
                    show(&mut self.table, &Event::RoundAborted(err))?;
                }
                Err(err) => return Err(err),
            }
        }

        let summary = self.options.show_summary.then_some(self.summary);
        show(&mut self.table, &Event::SessionOver(summary))?;
        tracing::info!(summary = ?self.summary, "session finished");

        Ok(self.summary)
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Consumes the session and returns the table.
    #[must_use]
    pub fn into_table(self) -> T {
        self.table
    }
}
