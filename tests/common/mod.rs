//! Common test utilities
#![allow(dead_code)]

use puzzlr::board::{Board, Mark};
use puzzlr::matrix::{Element, Matrix};

/// Build a matrix from slice rows, panicking on ragged input.
pub fn matrix<T: Element>(rows: &[&[T]]) -> Matrix<T> {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect())
        .expect("test fixture must be rectangular")
}

/// Build a board from three strings of `X`, `O`, and `.` (empty).
///
/// ```text
/// board(["XX.",
///        ".O.",
///        "..O"])
/// ```
pub fn board(rows: [&str; 3]) -> Board {
    let mut cells = [[None; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 3, "board row {} must have 3 cells", r);
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                other => panic!("unexpected board cell {:?}", other),
            };
        }
    }
    Board::from_cells(cells)
}
