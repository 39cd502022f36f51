//! History consistency invariant: history matches board and outcome.

use crate::{GameSession, SIZE};

/// - History length equals the number of occupied cells.
/// - A winner, if any, made the final move.
/// - A stalemate leaves no empty cell.
pub(super) fn holds(session: &GameSession) -> bool {
    let snapshot = session.board_snapshot();
    let occupied = snapshot.cells().filter(|(_, cell)| !cell.is_empty()).count();

    if occupied != session.history().len() {
        return false;
    }

    let Some(outcome) = session.outcome() else {
        return true;
    };

    if outcome.is_stalemate() {
        return occupied == SIZE * SIZE;
    }

    session.history().last().map(|mov| mov.player) == outcome.winner()
}
