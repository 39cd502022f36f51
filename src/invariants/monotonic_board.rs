//! Monotonic board invariant: cells never change once played.

use crate::{Board, GameSession, RoundOutcome};

/// Replaying the move history onto an empty board must accept every move
/// (no cell played twice) and reproduce the current grid exactly.
pub(super) fn holds(session: &GameSession) -> bool {
    let mut reconstructed = Board::new();

    for mov in session.history() {
        let position = mov.position;
        if let RoundOutcome::InvalidMove(_) =
            reconstructed.apply_move(mov.player, position.row, position.column)
        {
            return false;
        }
    }

    reconstructed.snapshot() == session.board_snapshot()
}
