//! Tic-tac-toe engine - replay driver
//!
//! Feeds moves from the command line through a game session, logging each
//! round the way a presentation layer would observe it.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::path::PathBuf;
use tictactoe_engine::{
    BoardSnapshot, GameSession, Move, Outcome, Player, Position, ReplayConfig, ResetOutcome,
    SessionState,
};
use tracing::{Subscriber, info, instrument, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, fmt::MakeWriter, layer::SubscriberExt, reload,
    util::SubscriberInitExt,
};

/// Filter in effect until a config supplies its own.
const STARTUP_FILTER: &str = "info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (subscriber, log_filter) = build_subscriber(
        EnvFilter::try_from_default_env().ok(),
        std::io::stderr,
    );
    subscriber.init();

    match cli.command {
        Command::Replay {
            config,
            auto_reset,
            json,
            moves,
        } => {
            let config = load_config(config)?;
            log_filter.apply(&config)?;
            run_replay(&config, auto_reset, json, moves)
        }
    }
}

/// Loads config, falling back to defaults when no path is given.
fn load_config(path: Option<PathBuf>) -> Result<ReplayConfig> {
    match path {
        Some(path) => Ok(ReplayConfig::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(ReplayConfig::default())
        }
    }
}

/// Builds the stderr subscriber.
///
/// An explicit `RUST_LOG` filter is kept for the whole run. Without one the
/// subscriber starts at [`STARTUP_FILTER`] and [`LogFilter::apply`] later
/// swaps in the config's filter.
fn build_subscriber<W>(
    env_filter: Option<EnvFilter>,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogFilter)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let pinned = env_filter.is_some();
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(STARTUP_FILTER)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));

    (subscriber, LogFilter { handle, pinned })
}

/// Handle onto the installed filter.
struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogFilter {
    /// Replaces the startup filter with `config.log_filter`, unless
    /// `RUST_LOG` chose the filter.
    fn apply(&self, config: &ReplayConfig) -> Result<()> {
        if self.pinned {
            return Ok(());
        }

        self.handle.reload(EnvFilter::try_new(config.log_filter())?)?;
        info!(log_filter = %config.log_filter(), "Log filter taken from config");
        Ok(())
    }
}

/// Replays moves through a session
#[instrument(skip_all, fields(move_count = moves.len()))]
fn run_replay(
    config: &ReplayConfig,
    auto_reset: bool,
    json: bool,
    moves: Vec<Position>,
) -> Result<()> {
    let auto_reset = auto_reset || *config.auto_reset();
    let show_board = *config.show_board() && !json;
    let mut session = GameSession::new();
    let mut rounds_finished = 0;

    if show_board {
        print_round(&session);
    }

    for position in moves {
        if session.is_finished() && auto_reset && session.reset() == ResetOutcome::Reset {
            info!("Starting next round");
        }

        let finished = match session.play(position.row, position.column) {
            Ok(state) => {
                info!(%position, %state, "Move accepted");
                state.is_finished()
            }
            Err(rejection) => {
                warn!(%position, %rejection, "Move rejected");
                false
            }
        };

        if show_board {
            print_round(&session);
        }

        if finished {
            rounds_finished += 1;
            if !json && let Some(outcome) = session.outcome() {
                println!("{}\n", finish_banner(outcome));
            }
        }
    }

    info!(rounds_finished, "Replay complete");

    if json {
        let summary = ReplaySummary {
            state: session.state(),
            board: session.board_snapshot(),
            history: session.history(),
            rounds_finished,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", session.state());
    }
    Ok(())
}

/// Final session report for `--json`.
#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    state: SessionState,
    board: BoardSnapshot,
    history: &'a [Move],
    rounds_finished: usize,
}

fn print_round(session: &GameSession) {
    println!("{}\n{}\n", session.board_snapshot(), session.state());
}

/// Announcement shown when a round ends. X is player 1, O is player 2.
fn finish_banner(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(Player::X) => "Player 1 won!".to_string(),
        Some(Player::O) => "Player 2 won!".to_string(),
        None => "Stalemate.".to_string(),
    }
}
