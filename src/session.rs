//! Game session: turn order, finished-state gating and reset.

use crate::board::{Board, BoardSnapshot, InvalidMove, RoundOutcome};
use crate::types::{Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Outcomes and states
// ─────────────────────────────────────────────────────────────

/// Terminal result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Stalemate,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Stalemate => None,
        }
    }

    /// Returns true if the round ended in a stalemate.
    pub fn is_stalemate(&self) -> bool {
        matches!(self, Outcome::Stalemate)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Where the session stands after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Awaiting a move from this player.
    Active(Player),
    /// Round over; only `reset` changes anything now.
    Finished(Outcome),
}

impl SessionState {
    /// Returns true if the round is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionState::Finished(_))
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Active(player) => write!(f, "Player {} to move", player),
            SessionState::Finished(outcome) => write!(f, "Game over. {}", outcome),
        }
    }
}

/// Why `play` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// Row or column outside the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// Cell already played.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// Round is over and must be reset first.
    #[display("Game is already over")]
    GameFinished,
}

impl std::error::Error for Rejection {}

impl From<InvalidMove> for Rejection {
    fn from(invalid: InvalidMove) -> Self {
        match invalid {
            InvalidMove::OutOfBounds(position) => Rejection::OutOfBounds(position),
            InvalidMove::CellOccupied(position) => Rejection::CellOccupied(position),
        }
    }
}

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetOutcome {
    /// Board cleared and X to move.
    Reset,
    /// Round still in progress; nothing changed.
    Ignored,
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// A single tic-tac-toe table: one board, two alternating players.
///
/// The session owns its board outright. Callers see the grid only through
/// [`GameSession::board_snapshot`].
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self::default()
    }

    /// Plays the current player's token at (`row`, `column`).
    ///
    /// On success returns the resulting state. A rejected move leaves the
    /// board, the current player and the history untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, row: usize, column: usize) -> Result<SessionState, Rejection> {
        if self.outcome.is_some() {
            warn!("Game is finished, cannot accept any moves until reset");
            return Err(Rejection::GameFinished);
        }

        let player = self.current_player;
        let position = Position::new(row, column);

        match self.board.apply_move(player, row, column) {
            RoundOutcome::InvalidMove(invalid) => {
                warn!(reason = %invalid, "Invalid play, choose an available cell");
                return Err(invalid.into());
            }
            RoundOutcome::Continue => {
                self.history.push(Move::new(player, position));
                self.current_player = player.opponent();
            }
            RoundOutcome::Win(winner) => {
                self.history.push(Move::new(player, position));
                info!(%winner, "Player has won");
                self.outcome = Some(Outcome::Winner(winner));
            }
            RoundOutcome::Stalemate => {
                self.history.push(Move::new(player, position));
                info!("Stalemate");
                self.outcome = Some(Outcome::Stalemate);
            }
        }

        debug!(board = %self.board.snapshot(), state = %self.state(), "Round played");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.state())
    }

    /// Starts a new round, but only once the current one is finished.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> ResetOutcome {
        if self.outcome.is_none() {
            debug!("Reset ignored, game still in progress");
            return ResetOutcome::Ignored;
        }

        info!("Resetting game");
        self.board.reset();
        self.current_player = Player::X;
        self.outcome = None;
        self.history.clear();
        ResetOutcome::Reset
    }

    /// Builds a fresh session and plays each position in turn.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, Rejection> {
        let mut session = Self::new();
        for position in positions {
            session.play(position.row, position.column)?;
        }
        Ok(session)
    }

    /// Returns the player to move, or the player who made the final move
    /// once the round is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true if the round is over.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the terminal outcome, if the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the current session state.
    pub fn state(&self) -> SessionState {
        match self.outcome {
            Some(outcome) => SessionState::Finished(outcome),
            None => SessionState::Active(self.current_player),
        }
    }

    /// Returns a copy of the board.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Returns the accepted moves of the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let result = crate::invariants::check_session(self);
        if let Err(violated) = &result {
            for invariant in violated {
                tracing::error!(%invariant, "Session invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
