//! Fullness checks for stalemate detection.

use crate::board::Grid;
use crate::types::{Cell, Position};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a stalemate.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| !cell.is_empty())
}

/// Returns the empty positions in row-major order.
pub fn empty_cells(grid: &Grid) -> Vec<Position> {
    grid.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Empty)
                .map(move |(column, _)| Position::new(row, column))
        })
        .collect()
}
