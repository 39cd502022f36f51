//! Consistency checks for a game session.
//!
//! Each check is a predicate over [`GameSession`] that every reachable
//! session satisfies. The session runs all of them after each accepted move
//! in debug builds.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

use crate::GameSession;
use strum::IntoEnumIterator;

/// A property that holds after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum SessionInvariant {
    /// Replaying the history onto an empty board reproduces the grid.
    #[display("Board cells are monotonic (never overwritten)")]
    MonotonicBoard,

    /// X moves first and players alternate.
    #[display("Players alternate turns (X, O, X, O, ...)")]
    AlternatingTurn,

    /// Occupied cells and the outcome agree with the history.
    #[display("Move history matches board state")]
    HistoryConsistent,
}

impl SessionInvariant {
    /// Checks this invariant against `session`.
    pub fn holds(self, session: &GameSession) -> bool {
        match self {
            SessionInvariant::MonotonicBoard => monotonic_board::holds(session),
            SessionInvariant::AlternatingTurn => alternating_turn::holds(session),
            SessionInvariant::HistoryConsistent => history_consistent::holds(session),
        }
    }
}

/// Runs every invariant, returning the ones `session` violates.
pub fn check_session(session: &GameSession) -> Result<(), Vec<SessionInvariant>> {
    let violated: Vec<_> = SessionInvariant::iter()
        .filter(|invariant| !invariant.holds(session))
        .collect();

    if violated.is_empty() {
        Ok(())
    } else {
        Err(violated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    #[test]
    fn test_new_session_passes() {
        assert_eq!(check_session(&GameSession::new()), Ok(()));
    }

    #[test]
    fn test_passes_after_moves() {
        let session = GameSession::replay(&[
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(0, 2),
        ])
        .unwrap();
        assert_eq!(check_session(&session), Ok(()));
    }

    #[test]
    fn test_stray_token_reports_each_broken_invariant() {
        let mut session = GameSession::new();
        session.play(1, 1).unwrap();

        session
            .board_mut()
            .set(Position::new(0, 0), Cell::Occupied(Player::O));

        assert_eq!(
            check_session(&session),
            Err(vec![
                SessionInvariant::MonotonicBoard,
                SessionInvariant::HistoryConsistent,
            ])
        );
    }

    #[test]
    fn test_invariant_display() {
        assert_eq!(
            SessionInvariant::HistoryConsistent.to_string(),
            "Move history matches board state"
        );
    }
}
