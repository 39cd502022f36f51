//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are separated from
//! board storage so they can be checked against snapshots as well as the
//! live board.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_full};
pub use win::{LINES, Line, winning_line};
