//! Text glue: coordinate notation, board rendering, side selection.
//!
//! None of this carries rule semantics. `Board` implements `Display` here.

mod coord;
mod render;
mod side;

pub use coord::{parse_move, parse_square};
pub use side::parse_side;
