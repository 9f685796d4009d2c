//! Session configuration options.

use core::num::NonZeroU64;

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::num::NonZeroU64;
/// use twentyone::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_games(NonZeroU64::new(3).unwrap())
///     .with_summary(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Number of games to play. `None` asks the table.
    pub games: Option<NonZeroU64>,
    /// Whether the closing message includes the win/loss tally.
    pub show_summary: bool,
}

impl SessionOptions {
    /// Sets the number of games, skipping the prompt.
    ///
    /// # Example
    ///
    /// ```
    /// use core::num::NonZeroU64;
    /// use twentyone::SessionOptions;
    ///
    /// let games = NonZeroU64::new(5).unwrap();
    /// let options = SessionOptions::default().with_games(games);
    /// assert_eq!(options.games, Some(games));
    /// ```
    #[must_use]
    pub const fn with_games(mut self, games: NonZeroU64) -> Self {
        self.games = Some(games);
        self
    }

    /// Sets whether the closing message includes the tally.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_summary(true);
    /// assert!(options.show_summary);
    /// ```
    #[must_use]
    pub const fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }
}
