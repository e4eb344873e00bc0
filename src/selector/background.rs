use std::thread;

use tracing::trace;

use crate::board::Board;
use crate::core::{Move, Player};

use super::policy::MoveSelector;

/// Runs another selector on a scoped worker thread.
///
/// The worker gets its own copy of the board and the candidate list; the
/// caller blocks until it has joined, so selection never overlaps with a
/// board mutation. A panic in the worker is re-raised on the caller.
#[derive(Clone, Debug, Default)]
pub struct BackgroundSelector<S> {
    inner: S,
}

impl<S> BackgroundSelector<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MoveSelector + Send> MoveSelector for BackgroundSelector<S> {
    fn choose(&mut self, board: &Board, mover: Player, moves: &[Move]) -> Move {
        let snapshot = *board;
        let candidates = moves.to_vec();
        let inner = &mut self.inner;

        let joined = thread::scope(|scope| {
            scope
                .spawn(move || inner.choose(&snapshot, mover, &candidates))
                .join()
        });

        match joined {
            Ok(mv) => {
                trace!(%mv, "background selection joined");
                mv
            }
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{FirstLegalSelector, RandomSelector};

    #[test]
    fn test_background_matches_inner() {
        let board = Board::initial();
        let moves = board.legal_moves(Player::White);

        let mut direct = RandomSelector::new(11);
        let mut background = BackgroundSelector::new(RandomSelector::new(11));

        for _ in 0..10 {
            assert_eq!(
                direct.choose(&board, Player::White, &moves),
                background.choose(&board, Player::White, &moves)
            );
        }
    }

    #[test]
    fn test_background_name_and_into_inner() {
        let selector = BackgroundSelector::new(FirstLegalSelector);
        assert_eq!(selector.name(), "First");
        let _inner: FirstLegalSelector = selector.into_inner();
    }

    struct Panicking;

    impl MoveSelector for Panicking {
        fn choose(&mut self, _board: &Board, _mover: Player, _moves: &[Move]) -> Move {
            panic!("selector failed");
        }

        fn name(&self) -> &str {
            "Panicking"
        }
    }

    #[test]
    #[should_panic(expected = "selector failed")]
    fn test_worker_panic_propagates() {
        let board = Board::initial();
        let moves = board.legal_moves(Player::White);
        BackgroundSelector::new(Panicking).choose(&board, Player::White, &moves);
    }
}
