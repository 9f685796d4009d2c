//! Console blackjack.

use core::num::NonZeroU64;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use twentyone::{Console, Session, SessionOptions};

#[derive(Parser)]
#[command(name = "twentyone")]
#[command(about = "Play blackjack against the dealer")]
struct Args {
    /// Number of games to play (asked interactively when omitted)
    #[arg(short, long)]
    games: Option<NonZeroU64>,

    /// Seed for the shuffle, for replaying the same deals
    #[arg(long)]
    seed: Option<u64>,

    /// Print a win/loss tally when the session ends
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the table on stdout.
    let filter = if args.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, "seeded shuffle");

    let mut options = SessionOptions::default().with_summary(args.summary);
    if let Some(games) = args.games {
        options = options.with_games(games);
    }

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(options, seed, console);
    session.run().context("playing blackjack")?;

    Ok(())
}
