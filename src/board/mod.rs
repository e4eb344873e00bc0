//! Board storage.
//!
//! `Board` owns the grid and nothing else. Legality, move application and
//! promotion are implemented in `rules`; text rendering in `text`.

mod grid;

pub use grid::Board;
