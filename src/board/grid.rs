//! The 8x8 grid.

use serde::{Deserialize, Serialize};

use crate::core::{ByColor, Cell, Piece, Player, Square, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Board contents. `Copy`, so a snapshot is a plain copy.
///
/// Only dark squares (`row + col` odd) are ever occupied by the rules;
/// `set` does not enforce this so tests can build arbitrary positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Standard opening position: Black men on the dark squares of rows 0-2,
    /// White men on the dark squares of rows 5-7.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for square in Square::all().filter(|s| s.is_dark()) {
            match square.row() {
                0..=2 => board.set(square, Piece::man(Player::Black).into()),
                5..=7 => board.set(square, Piece::man(Player::White).into()),
                _ => {}
            }
        }
        board
    }

    /// Build a board from explicit placements on an otherwise empty grid.
    #[must_use]
    pub fn with_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(square, piece) in pieces {
            board.set(square, piece.into());
        }
        board
    }

    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[usize::from(square.row())][usize::from(square.col())]
    }

    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[usize::from(square.row())][usize::from(square.col())] = cell;
    }

    /// Take the cell's contents, leaving it empty.
    pub fn take(&mut self, square: Square) -> Cell {
        std::mem::take(&mut self.cells[usize::from(square.row())][usize::from(square.col())])
    }

    /// Squares holding a piece of `player`, in row-major order.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&s| self.get(s).color() == Some(player))
    }

    /// Number of pieces of one color.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.squares_of(player).count()
    }

    /// Piece counts for both colors.
    #[must_use]
    pub fn counts(&self) -> ByColor<usize> {
        ByColor::new(|player| self.count(player))
    }

    /// Rows of cells, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;

    #[test]
    fn test_initial_counts() {
        let board = Board::initial();
        assert_eq!(board.count(Player::White), 12);
        assert_eq!(board.count(Player::Black), 12);
    }

    #[test]
    fn test_initial_placement() {
        let board = Board::initial();
        for square in Square::all() {
            let cell = board.get(square);
            if !square.is_dark() {
                assert!(cell.is_empty(), "light square {square} should be empty");
                continue;
            }
            let expected = match square.row() {
                0..=2 => Cell::from(Piece::man(Player::Black)),
                5..=7 => Cell::from(Piece::man(Player::White)),
                _ => Cell::Empty,
            };
            assert_eq!(cell, expected, "unexpected contents on {square}");
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(Square::all().all(|s| board.get(s).is_empty()));
        assert_eq!(board.counts(), ByColor::with_value(0));
    }

    #[test]
    fn test_set_and_take() {
        let mut board = Board::empty();
        let square = Square::new(3, 4).unwrap();
        board.set(square, Piece::king(Player::White).into());

        assert_eq!(board.get(square).piece().map(|p| p.rank), Some(Rank::King));
        assert_eq!(board.take(square), Cell::from(Piece::king(Player::White)));
        assert!(board.get(square).is_empty());
    }

    #[test]
    fn test_squares_of_row_major() {
        let a = Square::new(1, 2).unwrap();
        let b = Square::new(4, 1).unwrap();
        let board = Board::with_pieces(&[
            (b, Piece::man(Player::Black)),
            (a, Piece::man(Player::Black)),
            (Square::new(2, 5).unwrap(), Piece::man(Player::White)),
        ]);

        let squares: Vec<_> = board.squares_of(Player::Black).collect();
        assert_eq!(squares, vec![a, b]);
    }

    #[test]
    fn test_serialization() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
