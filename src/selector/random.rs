use crate::board::Board;
use crate::core::{GameRng, GameRngState, Move, Player};

use super::policy::MoveSelector;

/// Selects uniformly at random from the legal moves.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    /// A reproducible selector: the same seed yields the same choices.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: GameRng::from_entropy() }
    }

    /// Resume from a captured RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self { rng: GameRng::from_state(state) }
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MoveSelector for RandomSelector {
    fn choose(&mut self, _board: &Board, _mover: Player, moves: &[Move]) -> Move {
        assert!(!moves.is_empty(), "No legal moves available");
        let idx = self.rng.gen_range_usize(0..moves.len());
        moves[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
