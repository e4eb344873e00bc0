//! # rust-checkers
//!
//! A checkers engine for one human against an automated opponent on an 8x8
//! board, played over a text interface.
//!
//! ## Design Principles
//!
//! 1. **Rules Own the Board**: legality, capture and promotion live in one
//!    place (`rules`), on a plain `Copy` board value.
//!
//! 2. **Pluggable Opponent**: the automated side is a `MoveSelector`. The
//!    shipped selector picks uniformly at random; a search algorithm can
//!    replace it without touching the rules.
//!
//! 3. **Turn-Synchronous**: exactly one move is decided or applied at a time.
//!    Selectors only ever see a snapshot of the board.
//!
//! ## Rules Notes
//!
//! - Men step forward only, but may capture in any diagonal direction.
//! - One step or one capture per turn; captures are never chained.
//! - Captures are not forced.
//! - A side with no legal moves on its turn loses.
//!
//! ## Modules
//!
//! - `core`: colors, squares, pieces, moves, RNG, configuration
//! - `board`: the grid
//! - `rules`: move validation, application, enumeration
//! - `selector`: `MoveSelector` and its implementations
//! - `game`: turn controller and interactive console
//! - `text`: coordinate notation, rendering, side prompt parsing
//! - `error`: structured error types

pub mod core;
pub mod board;
pub mod rules;
pub mod selector;
pub mod game;
pub mod text;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ByColor, Cell, GameConfig, GameRng, GameRngState, Move, MoveKind, MoveRecord, Piece, Player,
    Rank, SelectorKind, SidePolicy, Square,
};

pub use crate::board::Board;

pub use crate::rules::{Applied, GameResult, MoveList};

pub use crate::selector::{
    BackgroundSelector, DynSelector, FirstLegalSelector, MoveSelector, RandomSelector,
};

pub use crate::game::{Console, Seat, TurnController, TurnPhase};

pub use crate::error::{CoordinateError, GameError, MoveError, SideError, TurnError};
