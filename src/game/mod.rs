//! Round controller.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{Hand, HandView};
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::RoundState;

/// One round of blackjack between the player and the dealer.
///
/// A round owns its deck and both hands; nothing carries over to the next
/// round. Drive it with [`Round::deal`], then [`Round::hit`] / [`Round::stand`]
/// while in [`RoundState::PlayerTurn`], [`Round::dealer_play`] in
/// [`RoundState::DealerTurn`] and [`Round::showdown`] in
/// [`RoundState::Resolution`]. Once the state is [`RoundState::Done`] the
/// outcome is available from [`Round::result`].
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    hole_revealed: bool,
    result: Option<RoundResult>,
}

impl Round {
    /// Starts a round with a fresh, shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use twentyone::{DECK_SIZE, Round, RoundState};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let round = Round::new(&mut rng);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// assert_eq!(round.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Starts a round with the given deck, dealt as is.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::player(),
            dealer: Hand::dealer(),
            state: RoundState::Dealing,
            hole_revealed: false,
            result: None,
        }
    }

    /// Deals two cards each, alternating player and dealer, then checks for
    /// an immediate result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state or the deck runs
    /// out.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::Dealing {
            return Err(ActionError::InvalidState);
        }

        for _ in 0..2 {
            self.player.add_cards(self.deck.deal(1)?);
            self.dealer.add_cards(self.deck.deal(1)?);
        }

        tracing::debug!(
            player = self.player.value(),
            dealer = self.dealer.value(),
            "initial cards dealt"
        );

        self.resolve_or(RoundState::PlayerTurn);
        Ok(())
    }

    /// Runs the bust and blackjack checks in order.
    fn check_outcome(&self) -> Option<Outcome> {
        if self.player.is_bust() {
            Some(Outcome::PlayerBust)
        } else if self.dealer.is_bust() {
            Some(Outcome::DealerBust)
        } else if self.dealer.is_blackjack() && self.player.is_blackjack() {
            Some(Outcome::BothBlackjack)
        } else if self.dealer.is_blackjack() {
            Some(Outcome::DealerBlackjack)
        } else if self.player.is_blackjack() {
            Some(Outcome::PlayerBlackjack)
        } else {
            None
        }
    }

    /// Finishes the round if a check fires, otherwise moves on to `next`.
    fn resolve_or(&mut self, next: RoundState) {
        match self.check_outcome() {
            Some(outcome) => {
                self.settle(outcome);
            }
            None => self.state = next,
        }
    }

    fn settle(&mut self, outcome: Outcome) -> RoundResult {
        let result = RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        tracing::info!(
            ?outcome,
            player = result.player_value,
            dealer = result.dealer_value,
            "round finished"
        );
        self.state = RoundState::Done;
        self.result = Some(result);
        result
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's hand as shown at the table.
    #[must_use]
    pub fn player_view(&self) -> HandView {
        self.player.view(true)
    }

    /// Returns the dealer's hand as shown at the table. The hole card stays
    /// face down until the dealer plays.
    #[must_use]
    pub fn dealer_view(&self) -> HandView {
        self.dealer.view(self.hole_revealed)
    }

    /// Returns whether the dealer has turned over the hole card.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the result once the round is done.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns every card dealt so far, player's first.
    #[must_use]
    pub fn dealt_cards(&self) -> Vec<Card> {
        self.player
            .cards()
            .iter()
            .chain(self.dealer.cards())
            .copied()
            .collect()
    }
}
