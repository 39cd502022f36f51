//! Alternating turn invariant: players alternate X, O, X, O, ...

use crate::{GameSession, Player};

/// While the round is active the player to move follows the last mover.
/// Once finished, the current player is the one who made the final move.
pub(super) fn holds(session: &GameSession) -> bool {
    let history = session.history();

    let Some(first) = history.first() else {
        return session.current_player() == Player::X && !session.is_finished();
    };

    if first.player != Player::X {
        return false;
    }

    if history.windows(2).any(|w| w[0].player == w[1].player) {
        return false;
    }

    let last_mover = history[history.len() - 1].player;
    let expected = if session.is_finished() {
        last_mover
    } else {
        last_mover.opponent()
    };

    session.current_player() == expected
}
