//! A single 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are laid out suit by suit (spades, clubs, hearts, diamonds), each
    /// suit running ace through king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from the given cards. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() > 1 {
            self.cards.shuffle(rng);
        }
    }

    /// Deals `n` cards from the top of the deck, in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck runs out before `n` cards were
    /// dealt. Cards drawn before that point have already left the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EmptyDeckError> {
        let mut dealt = Vec::with_capacity(n);

        for _ in 0..n {
            let Some(card) = self.cards.pop() else {
                tracing::debug!(requested = n, dealt = dealt.len(), "deck exhausted");
                return Err(EmptyDeckError {
                    requested: n,
                    dealt: dealt.len(),
                });
            };
            dealt.push(card);
        }

        Ok(dealt)
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError {
            requested: 1,
            dealt: 0,
        })
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
