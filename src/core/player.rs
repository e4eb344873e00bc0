//! Player colors and per-color data storage.
//!
//! ## Player
//!
//! The two sides of a checkers game. White starts on rows 5-7 and advances
//! toward row 0; Black starts on rows 0-2 and advances toward row 7.
//!
//! ## ByColor
//!
//! Fixed two-slot storage indexed by `Player`, used for seat bindings and
//! piece counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both colors, White first (White always opens).
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward step: White moves toward decreasing rows.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// The row on which this color's men are crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    /// Slot index for `ByColor`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Lowercase name, as typed at the side prompt.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Per-color data with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{ByColor, Player};
///
/// let mut counts: ByColor<u32> = ByColor::new(|_| 12);
/// counts[Player::White] -= 1;
///
/// assert_eq!(counts[Player::White], 11);
/// assert_eq!(counts[Player::Black], 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByColor<T> {
    data: [T; 2],
}

impl<T> ByColor<T> {
    /// Create with values from a factory function.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::White), factory(Player::Black)],
        }
    }

    /// Create with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for ByColor<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for ByColor<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
