//! Turn controller: alternates the human and the selector.
//!
//! ```text
//! AwaitingHuman --submit_human--> AwaitingSelector --play_selector_turn--> AwaitingHuman ...
//!        \                               \
//!         +--- no legal moves ------------+--> GameOver(winner)
//! ```
//!
//! White always opens. The terminal check runs whenever the turn passes: the
//! side to move with no legal moves loses on the spot.

use tracing::{debug, info};

use crate::board::Board;
use crate::core::{ByColor, Move, MoveRecord, Player};
use crate::error::TurnError;
use crate::rules::GameResult;
use crate::selector::MoveSelector;

/// Who controls a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Selector,
}

/// What the controller is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHuman,
    AwaitingSelector,
    GameOver(GameResult),
}

/// Owns the board for the whole game and drives turns.
#[derive(Debug)]
pub struct TurnController<S> {
    board: Board,
    seats: ByColor<Seat>,
    to_move: Player,
    selector: S,
    history: Vec<MoveRecord>,
    result: Option<GameResult>,
}

impl<S: MoveSelector> TurnController<S> {
    /// A new game from the standard position with White to move.
    pub fn new(human: Player, selector: S) -> Self {
        Self::from_position(Board::initial(), Player::White, human, selector)
    }

    /// A game from an arbitrary position.
    pub fn from_position(board: Board, to_move: Player, human: Player, selector: S) -> Self {
        let seats = ByColor::new(|p| if p == human { Seat::Human } else { Seat::Selector });
        let mut controller = Self {
            board,
            seats,
            to_move,
            selector,
            history: Vec::new(),
            result: None,
        };
        controller.settle();
        controller
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn human(&self) -> Player {
        if self.seats[Player::White] == Seat::Human {
            Player::White
        } else {
            Player::Black
        }
    }

    #[must_use]
    pub fn selector_side(&self) -> Player {
        self.human().opponent()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.result {
            Some(result) => TurnPhase::GameOver(result),
            None => match self.seats[self.to_move] {
                Seat::Human => TurnPhase::AwaitingHuman,
                Seat::Selector => TurnPhase::AwaitingSelector,
            },
        }
    }

    /// Validate and apply the human's move.
    ///
    /// An illegal move changes nothing; the human is still to move.
    pub fn submit_human(&mut self, mv: Move) -> Result<&MoveRecord, TurnError> {
        match self.phase() {
            TurnPhase::GameOver(_) => return Err(TurnError::GameOver),
            TurnPhase::AwaitingSelector => return Err(TurnError::NotHumanTurn),
            TurnPhase::AwaitingHuman => {}
        }

        if let Err(err) = self.board.check(mv, self.to_move) {
            debug!(%mv, %err, "rejected human move");
            return Err(err.into());
        }
        Ok(self.commit(mv))
    }

    /// Ask the selector for a move and apply it.
    ///
    /// The selector's choice is trusted and applied without re-validation.
    pub fn play_selector_turn(&mut self) -> Result<&MoveRecord, TurnError> {
        match self.phase() {
            TurnPhase::GameOver(_) => return Err(TurnError::GameOver),
            TurnPhase::AwaitingHuman => return Err(TurnError::NotSelectorTurn),
            TurnPhase::AwaitingSelector => {}
        }

        let mover = self.to_move;
        let moves = self.board.legal_moves(mover);
        let snapshot = self.board;
        let mv = self.selector.choose(&snapshot, mover, &moves);
        debug_assert!(moves.contains(&mv), "selector returned a non-candidate move {mv}");
        debug!(selector = self.selector.name(), %mv, candidates = moves.len(), "selector chose");

        Ok(self.commit(mv))
    }

    fn commit(&mut self, mv: Move) -> &MoveRecord {
        let mover = self.to_move;
        let applied = self.board.apply(mv);
        let ply = self.history.len() as u32 + 1;

        debug!(ply, %mover, %mv, kind = ?applied.kind, promoted = applied.promoted, "move applied");

        self.history.push(MoveRecord {
            ply,
            mover,
            mv,
            kind: applied.kind,
            captured: applied.captured,
            promoted: applied.promoted,
        });
        self.to_move = mover.opponent();
        self.settle();

        &self.history[self.history.len() - 1]
    }

    /// End the game if the side to move is stuck.
    fn settle(&mut self) {
        if self.result.is_none() && !self.board.has_legal_move(self.to_move) {
            let result = GameResult::Winner(self.to_move.opponent());
            info!(stuck = %self.to_move, winner = %result.winner(), "no legal moves, game over");
            self.result = Some(result);
        }
    }
}
