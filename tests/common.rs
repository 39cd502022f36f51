//! Common helpers for the board and session test suites.

use tictactoe_engine::Position;
use tictactoe_engine::rules::{LINES, Line};

/// Picks three off-line cells that do not themselves form a line.
pub fn fillers(line: &Line) -> [Position; 3] {
    let free: Vec<Position> = (0..3)
        .flat_map(|row| (0..3).map(move |column| Position::new(row, column)))
        .filter(|p| !line.contains(p))
        .collect();

    for i in 0..free.len() {
        for j in i + 1..free.len() {
            for k in j + 1..free.len() {
                let set = [free[i], free[j], free[k]];
                let forms_line = LINES
                    .iter()
                    .any(|l| l.iter().all(|p| set.contains(p)));
                if !forms_line {
                    return set;
                }
            }
        }
    }
    panic!("No filler set for line {:?}", line);
}
