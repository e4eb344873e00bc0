//! Game flow: the turn controller and the interactive console.
//!
//! `TurnController` is the only owner of the live board during a game. The
//! console is a thin driver that turns lines of text into controller calls.

mod console;
mod controller;

pub use console::Console;
pub use controller::{Seat, TurnController, TurnPhase};
