use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// The dealer draws until their hand is worth at least this much.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while under 17, then reveals the hole card. A dealer
    /// bust or 21 ends the round; otherwise the round moves to resolution.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.add_cards([card]);
            drawn_cards.push(card);
        }

        self.hole_revealed = true;
        tracing::debug!(
            drawn = drawn_cards.len(),
            value = self.dealer.value(),
            "dealer stands"
        );

        self.resolve_or(RoundState::Resolution);
        Ok(drawn_cards)
    }

    /// Compares final values: the higher hand wins and equal values push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in resolution state.
    pub fn showdown(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != RoundState::Resolution {
            return Err(ActionError::InvalidState);
        }

        let outcome = match self.player.value().cmp(&self.dealer.value()) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Equal => Outcome::Push,
            Ordering::Less => Outcome::DealerWins,
        };

        Ok(self.settle(outcome))
    }
}
