//! Round state types.

/// Where a round stands.
///
/// Rounds move forward only:
/// `Dealing -> PlayerTurn -> DealerTurn -> Resolution -> Done`. Any bust or
/// blackjack check can jump straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Fresh deck, no cards dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and must be compared.
    Resolution,
    /// The round has a result.
    Done,
}
