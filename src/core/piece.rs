//! Pieces and cell contents.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Piece rank. Men are crowned to kings on the far row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Player,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn man(color: Player) -> Self {
        Self { color, rank: Rank::Man }
    }

    #[must_use]
    pub const fn king(color: Player) -> Self {
        Self { color, rank: Rank::King }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// The same piece with king rank. Crowning a king is a no-op.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.color)
    }
}

/// Contents of a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of the occupying piece, if any.
    #[must_use]
    pub const fn color(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.color),
        }
    }

    /// Display glyph: `.` empty, `w`/`W` white man/king, `b`/`B` black man/king.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Piece { color: Player::White, rank: Rank::Man }) => 'w',
            Cell::Occupied(Piece { color: Player::White, rank: Rank::King }) => 'W',
            Cell::Occupied(Piece { color: Player::Black, rank: Rank::Man }) => 'b',
            Cell::Occupied(Piece { color: Player::Black, rank: Rank::King }) => 'B',
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}
