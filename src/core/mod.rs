//! Core value types: colors, squares, pieces, moves, RNG, configuration.
//!
//! Everything here is small, `Copy` where possible and serializable.
//! Rules live in `board` and `rules`; these types carry no rule semantics.

pub mod player;
pub mod square;
pub mod piece;
pub mod action;
pub mod rng;
pub mod config;

pub use player::{ByColor, Player};
pub use square::{Square, BOARD_SIZE};
pub use piece::{Cell, Piece, Rank};
pub use action::{Move, MoveKind, MoveRecord};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, SelectorKind, SidePolicy};
