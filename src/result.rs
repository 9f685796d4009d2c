//! Round and session result types.

use core::fmt;

/// Who came out ahead in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Nobody won.
    Tie,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Both hands are worth 21.
    BothBlackjack,
    /// Dealer reached 21.
    DealerBlackjack,
    /// Player reached 21.
    PlayerBlackjack,
    /// Player's final value beat the dealer's.
    PlayerWins,
    /// Final values are equal.
    Push,
    /// Dealer's final value beat the player's.
    DealerWins,
}

impl Outcome {
    /// Returns who won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::DealerBust | Self::PlayerBlackjack | Self::PlayerWins => Winner::Player,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWins => Winner::Dealer,
            Self::BothBlackjack | Self::Push => Winner::Tie,
        }
    }

    /// Returns whether the round ended at a bust or blackjack check rather
    /// than by comparing final values.
    #[must_use]
    pub const fn is_early(self) -> bool {
        !matches!(self, Self::PlayerWins | Self::Push | Self::DealerWins)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "You busted. Dealer wins!",
            Self::DealerBust => "Dealer busted. You win!",
            Self::BothBlackjack => "Both players have blackjack. It's a tie!",
            Self::DealerBlackjack => "Dealer has blackjack. Dealer wins!",
            Self::PlayerBlackjack => "You have blackjack. You win!",
            Self::PlayerWins => "You win!",
            Self::Push => "Tie!",
            Self::DealerWins => "Dealer wins!",
        })
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Returns who won.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.outcome.winner()
    }
}

/// Tally of a session, kept in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds started.
    pub played: u64,
    /// Rounds won by the player.
    pub player_wins: u64,
    /// Rounds won by the dealer.
    pub dealer_wins: u64,
    /// Rounds ending in a tie.
    pub ties: u64,
    /// Rounds abandoned because the deck ran out.
    pub aborted: u64,
}

impl SessionSummary {
    /// Counts a finished round.
    pub const fn record(&mut self, result: &RoundResult) {
        match result.outcome.winner() {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }
}
