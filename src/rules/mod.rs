//! Checkers rules on top of `Board`.
//!
//! Adds to `Board`:
//! - `check` / `is_legal`: move validation for a given side
//! - `apply`: move execution, capture removal and promotion
//! - `legal_moves`: deterministic enumeration of every legal move
//!
//! `GameResult` describes how a finished game ended.

pub mod engine;

pub use engine::{Applied, GameResult, MoveList};
