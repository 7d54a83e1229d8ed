use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

const ROWS: usize = 3;
const COLS: usize = 2;

/// A six-dot braille cell: a 3×2 grid of raised/flat dot states.
///
/// Dots are numbered 1–6 column-major, top to bottom then left to right:
///
/// ```text
///  1 4
///  2 5
///  3 6
/// ```
///
/// `Cell` is a plain value and is never mutated in place; every
/// operation returns a new cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    rows: [[bool; COLS]; ROWS],
}

impl Cell {
    /// Grid height of a six-dot cell.
    pub const ROWS: usize = ROWS;
    /// Grid width of a six-dot cell.
    pub const COLS: usize = COLS;

    /// The all-flat cell. Also the row marker for the W column, which
    /// contributes no dots of its own.
    pub const EMPTY: Cell = Cell {
        rows: [[false; COLS]; ROWS],
    };

    /// Build a cell with exactly the given dot positions raised.
    ///
    /// Positions use the standard 1–6 numbering. The grid is a set of
    /// dots, so duplicates are idempotent; `from_dots(&[])` is
    /// [`Cell::EMPTY`]. Positions outside 1..=6 are a table-construction
    /// bug and panic immediately rather than producing a wrong glyph.
    pub fn from_dots(dots: &[u8]) -> Cell {
        let mut rows = [[false; COLS]; ROWS];
        for &dot in dots {
            let (row, col) = grid_position(dot);
            rows[row][col] = true;
        }
        Cell { rows }
    }

    /// Whether the dot at `position` (1..=6) is raised.
    pub fn dot(&self, position: u8) -> bool {
        let (row, col) = grid_position(position);
        self.rows[row][col]
    }

    /// Raised dot positions in ascending order.
    pub fn raised_dots(&self) -> Vec<u8> {
        (1..=6).filter(|&p| self.dot(p)).collect()
    }

    /// Element-wise OR: a dot is raised in the result wherever it is
    /// raised in either input. Models stacking a consonant row marker
    /// and a vowel pattern into one cell.
    pub fn union(self, other: Cell) -> Cell {
        let mut rows = self.rows;
        for (row, other_row) in rows.iter_mut().zip(other.rows) {
            for (dot, other_dot) in row.iter_mut().zip(other_row) {
                *dot |= other_dot;
            }
        }
        Cell { rows }
    }

    /// Cyclic rotation of the rows downward by one: the bottom row moves
    /// to the top, the other two shift down.
    pub fn rotate_down(self) -> Cell {
        let [top, mid, bottom] = self.rows;
        Cell {
            rows: [bottom, top, mid],
        }
    }

    /// Whether the bottom row carries no raised dot.
    pub fn bottom_row_empty(&self) -> bool {
        self.rows[ROWS - 1].iter().all(|&dot| !dot)
    }
}

impl BitOr for Cell {
    type Output = Cell;

    fn bitor(self, rhs: Cell) -> Cell {
        self.union(rhs)
    }
}

impl fmt::Display for Cell {
    /// Compact `o`/`-` grid, one line per row. Debug/log representation
    /// only, not braille rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &dot in row {
                f.write_str(if dot { "o" } else { "-" })?;
            }
        }
        Ok(())
    }
}

/// Dot number → (row, col). Column-major: 1,2,3 run down the left
/// column, 4,5,6 down the right.
fn grid_position(dot: u8) -> (usize, usize) {
    assert!(
        (1..=6).contains(&dot),
        "dot position out of range: {dot} (expected 1..=6)"
    );
    let index = usize::from(dot - 1);
    (index % ROWS, index / ROWS)
}
