//! The 3x3 board and the immediate outcome of applying a move to it.

use crate::rules;
use crate::types::{Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// Raw 3x3 grid of cells, indexed `[row][column]`.
pub type Grid = [[Cell; SIZE]; SIZE];

/// Why a move could not be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidMove {
    /// Row or column lies outside `0..3`.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a token.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for InvalidMove {}

/// Immediate result of one move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Move applied, empty cells remain, nobody has won.
    Continue,
    /// Move rejected; the board is unchanged.
    InvalidMove(InvalidMove),
    /// Move applied and completed a line for this player.
    Win(Player),
    /// Move applied and filled the board without completing a line.
    Stalemate,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `token` at (`row`, `column`) and evaluates the result.
    ///
    /// Out-of-range coordinates and occupied cells yield
    /// [`RoundOutcome::InvalidMove`] without touching the grid. Otherwise
    /// exactly one cell is written, then the acting token is checked against
    /// rows, columns and diagonals before testing for a full board.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, token: Player, row: usize, column: usize) -> RoundOutcome {
        let position = Position::new(row, column);

        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) else {
            debug!(%position, "Move is off the board");
            return RoundOutcome::InvalidMove(InvalidMove::OutOfBounds(position));
        };

        if !cell.is_empty() {
            debug!(%position, occupant = %cell, "Cell already played");
            return RoundOutcome::InvalidMove(InvalidMove::CellOccupied(position));
        }

        *cell = Cell::Occupied(token);

        if let Some(line) = rules::winning_line(&self.cells, token) {
            debug!(?line, "Line completed");
            return RoundOutcome::Win(token);
        }

        if rules::is_full(&self.cells) {
            RoundOutcome::Stalemate
        } else {
            RoundOutcome::Continue
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = Grid::default();
    }

    /// Returns a copy of the current grid.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { cells: self.cells }
    }

    /// Gets the cell at the given position, `None` if off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Returns the positions still open for play.
    pub fn empty_cells(&self) -> Vec<Position> {
        rules::empty_cells(&self.cells)
    }

    /// Overwrites a cell with no validation, for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.column] = cell;
    }
}

/// Read-only copy of the board at a point in time.
///
/// Holding a snapshot never aliases the live board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: Grid,
}

impl BoardSnapshot {
    /// Gets the cell at the given position, `None` if off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates over every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (Position::new(row, column), *cell))
        })
    }

    /// Counts the cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Checks if no cell has been played.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}|{}|{}", row[0], row[1], row[2])?;
            if i < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new();
        assert!(board.snapshot().is_blank());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_apply_move_writes_one_cell() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(Player::X, 1, 2), RoundOutcome::Continue);
        assert_eq!(board.get(1, 2), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.empty_cells().len(), 8);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        for (row, column) in [(3, 0), (0, 3), (usize::MAX, 1)] {
            assert_eq!(
                board.apply_move(Player::X, row, column),
                RoundOutcome::InvalidMove(InvalidMove::OutOfBounds(Position::new(row, column)))
            );
        }
        assert!(board.snapshot().is_blank());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = Board::new();
        board.apply_move(Player::X, 0, 0);
        let before = board.snapshot();

        assert_eq!(
            board.apply_move(Player::O, 0, 0),
            RoundOutcome::InvalidMove(InvalidMove::CellOccupied(Position::new(0, 0)))
        );
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_reset_clears_grid() {
        let mut board = Board::new();
        board.apply_move(Player::X, 0, 0);
        board.apply_move(Player::O, 2, 2);
        board.reset();
        assert!(board.snapshot().is_blank());
        board.reset();
        assert!(board.snapshot().is_blank());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new();
        let snapshot = board.snapshot();
        board.apply_move(Player::X, 1, 1);
        assert!(snapshot.is_blank());
        assert_eq!(board.snapshot().get(1, 1), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_snapshot_display() {
        let mut board = Board::new();
        board.apply_move(Player::X, 0, 0);
        board.apply_move(Player::O, 1, 1);
        board.apply_move(Player::X, 2, 2);
        assert_eq!(
            board.snapshot().to_string(),
            "X| | \n-+-+-\n |O| \n-+-+-\n | |X"
        );
    }

    #[test]
    fn test_snapshot_counts() {
        let mut board = Board::new();
        board.apply_move(Player::X, 0, 0);
        board.apply_move(Player::O, 0, 1);
        board.apply_move(Player::X, 0, 2);
        let snapshot = board.snapshot();
        assert_eq!(snapshot.count(Player::X), 2);
        assert_eq!(snapshot.count(Player::O), 1);
        assert_eq!(snapshot.cells().count(), 9);
    }
}
