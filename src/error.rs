//! Structured error types.
//!
//! Everything except `GameError` is recoverable: the console reports it and
//! prompts again.

use crate::core::{Player, Square};

/// A coordinate token or move line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("malformed coordinate '{0}' (expected a letter A-H and a digit 1-8, e.g. C3)")]
    MalformedCoordinate(String),

    #[error("expected two coordinates, got {0}")]
    WrongTokenCount(usize),
}

/// Why a move is illegal for the side trying to make it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("destination {0} is occupied")]
    DestinationOccupied(Square),

    #[error("{square} does not hold a {mover} piece")]
    NotOwnPiece { square: Square, mover: Player },

    #[error("men cannot step backward")]
    BackwardStep,

    #[error("no piece to capture on {0}")]
    NothingToCapture(Square),

    #[error("cannot jump over your own piece on {0}")]
    OwnPieceInPath(Square),

    #[error("moves must go one or two squares diagonally")]
    UnsupportedDisplacement,
}

/// Side prompt input that names neither color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SideError {
    #[error("unrecognized side '{0}' (type white or black)")]
    Unrecognized(String),
}

/// A turn operation that does not fit the controller's current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("it is not the automated side's turn")]
    NotSelectorTurn,

    #[error("the game is over")]
    GameOver,

    #[error("illegal move: {0}")]
    Illegal(#[from] MoveError),
}

/// Fatal errors of the interactive console.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("turn error: {0}")]
    Turn(#[from] TurnError),
}
