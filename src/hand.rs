//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Value at which a hand is a blackjack; anything above is a bust.
pub const BLACKJACK: u8 = 21;

/// Scores a sequence of cards.
///
/// Aces count 11. If the hand holds at least one ace and the raw total is over
/// 21, the total is lowered by 10 once. A second ace is never lowered, so
/// `A A K` scores 22 and `A A K K` scores 32.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        value = value.saturating_add(card.value());
    }

    if has_ace && value > BLACKJACK {
        value -= 10;
    }

    value
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    role: Role,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            cards: Vec::new(),
            role,
        }
    }

    /// Creates an empty player hand.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Role::Player)
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    /// Appends cards to the hand, keeping their order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is worth exactly 21, regardless of card count.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Builds what the table may see of this hand.
    ///
    /// The dealer's first card stays face down unless `reveal_hole` is set or
    /// the dealer already holds 21. Only the player's view carries a value.
    #[must_use]
    pub fn view(&self, reveal_hole: bool) -> HandView {
        let hide_hole = self.role == Role::Dealer && !reveal_hole && !self.is_blackjack();
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| (index != 0 || !hide_hole).then_some(*card))
            .collect();
        let value = match self.role {
            Role::Player => Some(self.value()),
            Role::Dealer => None,
        };

        HandView {
            role: self.role,
            cards,
            value,
        }
    }
}

/// A rendering of a hand, with the hole card possibly face down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Who holds the hand.
    pub role: Role,
    /// Cards in order; `None` marks a face-down card.
    pub cards: Vec<Option<Card>>,
    /// Hand value, shown for the player only.
    pub value: Option<u8>,
}

impl HandView {
    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Option::is_none)
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Player => writeln!(f, "Your hand:")?,
            Role::Dealer => writeln!(f, "Dealer's hand:")?,
        }
        for card in &self.cards {
            match card {
                Some(card) => writeln!(f, "{card}")?,
                None => writeln!(f, "hidden")?,
            }
        }
        if let Some(value) = self.value {
            writeln!(f, "Value: {value}")?;
        }
        Ok(())
    }
}
