//! The `MoveSelector` seam and the deterministic baseline.

use crate::board::Board;
use crate::core::{Move, Player};

/// Decision-maker for the automated side.
///
/// The controller only calls `choose` with a non-empty slice of moves that are
/// legal for `mover` on `board`, and applies the result without re-checking
/// it. Implementations must return one of the candidates.
///
/// `board` is a read-only snapshot; a search can copy it and play moves ahead
/// with `Board::apply` without affecting the game.
pub trait MoveSelector {
    /// Pick one of `moves`.
    fn choose(&mut self, board: &Board, mover: Player, moves: &[Move]) -> Move;

    /// Display name, used in logs.
    fn name(&self) -> &str;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn choose(&mut self, board: &Board, mover: Player, moves: &[Move]) -> Move {
        (**self).choose(board, mover, moves)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Always plays the first candidate, i.e. the first move in generation order.
///
/// Useful for reproducible games and tests.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalSelector;

impl MoveSelector for FirstLegalSelector {
    fn choose(&mut self, _board: &Board, _mover: Player, moves: &[Move]) -> Move {
        moves[0]
    }

    fn name(&self) -> &str {
        "First"
    }
}
