//! A single-player blackjack game against an automated dealer.
//!
//! The crate provides a [`Round`] type that runs one hand from the deal to the
//! result, and a [`Session`] that plays a number of rounds against a
//! [`Table`]. The table is the only place input is read or output written, so
//! rounds can be played headless with scripted decisions. With the `std`
//! feature, [`Console`] implements the table over any reader and writer.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use twentyone::{Console, Session, SessionOptions};
//!
//! let console = Console::new(io::stdin().lock(), io::stdout());
//! let mut session = Session::new(SessionOptions::default(), 42, console);
//! let _ = session.run();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{ActionError, EmptyDeckError, GameCountError, ParseDecisionError, SessionError};
pub use game::{DEALER_STANDS_ON, Round, RoundState};
pub use hand::{BLACKJACK, Hand, HandView, Role};
pub use options::SessionOptions;
pub use result::{Outcome, RoundResult, SessionSummary, Winner};
pub use session::{Session, play_round};
pub use table::{Decision, Event, Table, parse_game_count};
