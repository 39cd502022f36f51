//! Win detection logic for tic-tac-toe.

use crate::board::Grid;
use crate::types::{Cell, Player, Position};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

const fn at(row: usize, column: usize) -> Position {
    Position { row, column }
}

/// Every winning line, in checking order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the first line fully held by `player`, if any.
///
/// Only the given player is checked. After a move, only the player who just
/// moved can have completed a line, so checking the other is unnecessary.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, player: Player) -> Option<Line> {
    let token = Cell::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|p| grid[p.row][p.column] == token))
}
