//! Tic-tac-toe engine - board, rules and round lifecycle
//!
//! The engine has no rendering or input handling of its own. A presentation
//! layer calls [`GameSession::play`] when a cell is picked, calls
//! [`GameSession::reset`] once the round is over, and redraws from
//! [`GameSession::board_snapshot`].
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, move application, win and stalemate detection
//! - **Rules**: pure line and fullness checks over a grid
//! - **Session**: turn order, finished-state gate, reset policy
//! - **Invariants**: properties re-checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Outcome, Player, SessionState};
//!
//! let mut session = GameSession::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     session.play(row, column)?;
//! }
//! let state = session.play(0, 2)?;
//! assert_eq!(state, SessionState::Finished(Outcome::Winner(Player::X)));
//! # Ok::<(), tictactoe_engine::Rejection>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod session;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board
pub use board::{Board, BoardSnapshot, Grid, InvalidMove, RoundOutcome, SIZE};

// Crate-level exports - Session
pub use session::{GameSession, Outcome, Rejection, ResetOutcome, SessionState};

// Crate-level exports - Domain types
pub use types::{Cell, Move, ParsePositionError, Player, Position};

// Crate-level exports - Configuration
pub use config::{ConfigError, ReplayConfig};
