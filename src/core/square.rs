//! Board coordinates.
//!
//! A `Square` is always on the board: rows and columns are in `0..8`.
//! Off-board positions are unrepresentable, so constructors return `Option`.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board. Row 0 is Black's home row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, or `None` if either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Dark squares are the only playable ones.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square displaced by `(d_row, d_col)`, if it is still on the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Column letter in the A-H notation (column 0 is `H`).
    #[must_use]
    pub const fn file_letter(self) -> char {
        (b'A' + (BOARD_SIZE - 1 - self.col)) as char
    }

    /// Row digit in the 1-8 notation (row 0 is `8`).
    #[must_use]
    pub const fn rank_digit(self) -> char {
        (b'0' + (BOARD_SIZE - self.row)) as char
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_digit())
    }
}
