//! Tic-tac-toe position evaluation
//!
//! Decides the winner, if any, of a 3x3 grid. The evaluator accepts any
//! grid at all - boards unreachable from legal alternating play, boards
//! with two winning lines - and never errors: "no winner" is an ordinary
//! outcome, indistinguishable from an empty board.

use std::fmt;

/// A player's mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The X player
    X,
    /// The O player
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// The eight winning lines in scan order: rows top to bottom, columns left
/// to right, main diagonal, anti-diagonal. The first uniform line found in
/// this order decides a board that satisfies several lines at once.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 tic-tac-toe grid; `None` cells are empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; 3]; 3],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from its cells, row by row from the top.
    pub fn from_cells(cells: [[Option<Mark>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Cell at `(row, col)`; both indices run 0..3 from the top-left.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    /// The winning mark, or `None` when no line, column, or diagonal is
    /// fully and uniformly occupied.
    ///
    /// Lines are scanned in a fixed order - rows top to bottom, columns
    /// left to right, main diagonal, anti-diagonal - so on degenerate
    /// boards where both marks complete a line, the first line in that
    /// order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlr::board::{Board, Mark};
    ///
    /// let x = Some(Mark::X);
    /// let o = Some(Mark::O);
    /// let board = Board::from_cells([
    ///     [x, None, o],
    ///     [None, x, o],
    ///     [None, None, x],
    /// ]);
    /// assert_eq!(board.winner(), Some(Mark::X));
    /// assert_eq!(Board::new().winner(), None);
    /// ```
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| self.line_winner(line))
    }

    /// The mark occupying all three cells of `line`, if any.
    fn line_winner(&self, line: &[(usize, usize); 3]) -> Option<Mark> {
        let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
        match a {
            Some(mark) if b == a && c == a => Some(mark),
            _ => None,
        }
    }
}
