//! Move legality, move application and promotion.
//!
//! Rules, in the order they are checked:
//! - the destination must be empty
//! - the source must hold a piece of the mover's color
//! - a step goes one square diagonally; men only step forward
//! - a capture goes two squares diagonally over an opposing piece, in any
//!   direction (men included)
//! - nothing else is legal
//!
//! A turn applies exactly one step or one capture; further captures from the
//! landing square are not chained.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, Move, MoveKind, Piece, Player};
use crate::error::MoveError;

/// Legal moves for one side. Inline for the common case of a few moves.
pub type MoveList = SmallVec<[Move; 16]>;

/// Diagonal offsets tried from every source square, in generation order.
const OFFSETS: [(i8, i8); 8] = [
    (-2, -2),
    (-2, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (2, -2),
    (2, 2),
];

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The side to move had no legal moves; the other side wins.
    Winner(Player),
}

impl GameResult {
    #[must_use]
    pub fn winner(self) -> Player {
        match self {
            GameResult::Winner(player) => player,
        }
    }

    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == player
    }
}

/// Effects of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl Board {
    /// Validate `mv` for `mover`, returning its kind or the first rule broken.
    pub fn check(&self, mv: Move, mover: Player) -> Result<MoveKind, MoveError> {
        if !self.get(mv.to).is_empty() {
            return Err(MoveError::DestinationOccupied(mv.to));
        }

        let piece = match self.get(mv.from).piece() {
            Some(piece) if piece.color == mover => piece,
            _ => {
                return Err(MoveError::NotOwnPiece {
                    square: mv.from,
                    mover,
                })
            }
        };

        match mv.kind() {
            Some(MoveKind::Step) => {
                let (d_row, _) = mv.delta();
                if piece.is_king() || d_row == mover.forward() {
                    Ok(MoveKind::Step)
                } else {
                    Err(MoveError::BackwardStep)
                }
            }
            Some(MoveKind::Capture) => {
                let mid = mv.midpoint().ok_or(MoveError::UnsupportedDisplacement)?;
                match self.get(mid).color() {
                    None => Err(MoveError::NothingToCapture(mid)),
                    Some(color) if color == mover => Err(MoveError::OwnPieceInPath(mid)),
                    Some(_) => Ok(MoveKind::Capture),
                }
            }
            None => Err(MoveError::UnsupportedDisplacement),
        }
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move, mover: Player) -> bool {
        self.check(mv, mover).is_ok()
    }

    /// Apply `mv` without validating it. A two-square move always clears the
    /// midpoint, so callers must check legality first.
    ///
    /// A piece that lands on its color's promotion row is crowned. Applying
    /// from an empty square is a no-op.
    pub fn apply(&mut self, mv: Move) -> Applied {
        let kind = mv.kind().unwrap_or(MoveKind::Step);

        let Cell::Occupied(piece) = self.take(mv.from) else {
            return Applied {
                kind,
                captured: None,
                promoted: false,
            };
        };

        let captured = mv
            .midpoint()
            .and_then(|mid| self.take(mid).piece());

        let landed = if mv.to.row() == piece.color.promotion_row() {
            piece.crowned()
        } else {
            piece
        };
        self.set(mv.to, landed.into());

        Applied {
            kind,
            captured,
            promoted: landed.is_king() && !piece.is_king(),
        }
    }

    /// Every legal move for `mover`: source squares in row-major order, then
    /// the fixed diagonal offset order.
    #[must_use]
    pub fn legal_moves(&self, mover: Player) -> MoveList {
        self.squares_of(mover)
            .flat_map(|from| {
                OFFSETS
                    .into_iter()
                    .filter_map(move |(dr, dc)| from.offset(dr, dc).map(|to| Move::new(from, to)))
            })
            .filter(|&mv| self.is_legal(mv, mover))
            .collect()
    }

    /// Whether `mover` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, mover: Player) -> bool {
        !self.legal_moves(mover).is_empty()
    }
}
