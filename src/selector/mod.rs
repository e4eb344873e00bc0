//! Move selection for the automated side.
//!
//! ## Overview
//!
//! The controller asks a `MoveSelector` for a move whenever the automated
//! side is to play. Selectors see a read-only board snapshot and the legal
//! candidates; they never touch the live board.
//!
//! - `RandomSelector`: uniform over the candidates, seeded
//! - `FirstLegalSelector`: first candidate, deterministic
//! - `BackgroundSelector`: wraps any selector and runs it on a worker thread
//!
//! A real search (minimax, alpha-beta, MCTS) plugs in by implementing
//! `MoveSelector`; nothing else changes.
//!
//! ## Usage
//!
//! ```rust
//! use rust_checkers::board::Board;
//! use rust_checkers::core::Player;
//! use rust_checkers::selector::{MoveSelector, RandomSelector};
//!
//! let board = Board::initial();
//! let moves = board.legal_moves(Player::White);
//! let mut selector = RandomSelector::new(42);
//! let mv = selector.choose(&board, Player::White, &moves);
//! assert!(moves.contains(&mv));
//! ```

mod background;
mod policy;
mod random;

pub use background::BackgroundSelector;
pub use policy::{FirstLegalSelector, MoveSelector};
pub use random::RandomSelector;

use crate::core::{GameConfig, SelectorKind};

/// Boxed selector, as built from a `GameConfig`.
pub type DynSelector = Box<dyn MoveSelector + Send>;

/// Build the selector described by `config`.
#[must_use]
pub fn from_config(config: &GameConfig) -> DynSelector {
    let base: DynSelector = match config.selector {
        SelectorKind::Random => match config.seed {
            Some(seed) => Box::new(RandomSelector::new(seed)),
            None => Box::new(RandomSelector::from_entropy()),
        },
        SelectorKind::First => Box::new(FirstLegalSelector),
    };

    if config.background {
        Box::new(BackgroundSelector::new(base))
    } else {
        base
    }
}
