//! Move representation: source square + destination square.
//!
//! The kind of a move is derived from its displacement:
//! - one square diagonally is a `Step`
//! - two squares diagonally is a `Capture` over the midpoint
//! - anything else has no kind and is never legal

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::player::Player;
use super::square::Square;

/// Shape of a diagonal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Step,
    Capture,
}

/// A move from one square to another.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{Move, MoveKind, Square};
///
/// let from = Square::new(5, 0).unwrap();
/// let step = Move::new(from, Square::new(4, 1).unwrap());
/// assert_eq!(step.kind(), Some(MoveKind::Step));
///
/// let jump = Move::new(from, Square::new(3, 2).unwrap());
/// assert_eq!(jump.kind(), Some(MoveKind::Capture));
/// assert_eq!(jump.midpoint(), Square::new(4, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Row and column displacement.
    #[must_use]
    pub fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }

    /// `Step` or `Capture`, or `None` for any other displacement.
    #[must_use]
    pub fn kind(self) -> Option<MoveKind> {
        let (dr, dc) = self.delta();
        match (dr.abs(), dc.abs()) {
            (1, 1) => Some(MoveKind::Step),
            (2, 2) => Some(MoveKind::Capture),
            _ => None,
        }
    }

    /// The jumped square of a capture.
    #[must_use]
    pub fn midpoint(self) -> Option<Square> {
        match self.kind() {
            Some(MoveKind::Capture) => {
                let (dr, dc) = self.delta();
                self.from.offset(dr / 2, dc / 2)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// An applied move with its effects, for history tracking.
///
/// Used for:
/// - Reporting what the automated side played
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based ply number.
    pub ply: u32,

    /// Side that moved.
    pub mover: Player,

    /// The move taken.
    pub mv: Move,

    pub kind: MoveKind,

    /// Piece removed by a capture.
    pub captured: Option<Piece>,

    /// Whether the moving piece was crowned on this move.
    pub promoted: bool,
}
