use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 or more ends the player's turn and runs the bust and
    /// blackjack checks.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.add_cards([card]);
        tracing::debug!(%card, value = self.player.value(), "player hits");

        if self.player.value() >= BLACKJACK {
            self.resolve_or(RoundState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(value = self.player.value(), "player stands");
        self.resolve_or(RoundState::DealerTurn);

        Ok(())
    }
}
