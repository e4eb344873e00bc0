//! Property tests over arbitrary positions.

use proptest::prelude::*;

use rust_checkers::board::Board;
use rust_checkers::core::{Cell, Move, MoveKind, Piece, Player, Rank, Square};

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        4 => Just(Cell::Empty),
        2 => Just(Cell::from(Piece::man(Player::White))),
        2 => Just(Cell::from(Piece::man(Player::Black))),
        1 => Just(Cell::from(Piece::king(Player::White))),
        1 => Just(Cell::from(Piece::king(Player::Black))),
    ]
}

/// Random contents on the 32 dark squares.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), 32).prop_map(|cells| {
        let mut board = Board::empty();
        for (square, cell) in Square::all().filter(|s| s.is_dark()).zip(cells) {
            board.set(square, cell);
        }
        board
    })
}

fn player_strategy() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::White), Just(Player::Black)]
}

proptest! {
    #[test]
    fn prop_apply_preserves_mover_count(board in board_strategy(), mover in player_strategy()) {
        for mv in board.legal_moves(mover) {
            let mut after = board;
            let applied = after.apply(mv);

            prop_assert_eq!(after.count(mover), board.count(mover));

            let lost = board.count(mover.opponent()) - after.count(mover.opponent());
            let expected = if mv.kind() == Some(MoveKind::Capture) { 1 } else { 0 };
            prop_assert_eq!(lost, expected);
            prop_assert_eq!(applied.captured.is_some(), expected == 1);
        }
    }

    #[test]
    fn prop_legal_moves_match_exhaustive_check(board in board_strategy(), mover in player_strategy()) {
        let generated: Vec<Move> = board.legal_moves(mover).into_iter().collect();

        let mut exhaustive = Vec::new();
        for from in Square::all() {
            for to in Square::all() {
                let mv = Move::new(from, to);
                if board.is_legal(mv, mover) {
                    exhaustive.push(mv);
                }
            }
        }

        prop_assert_eq!(generated.is_empty(), exhaustive.is_empty());
        prop_assert_eq!(generated.len(), exhaustive.len());
        for mv in &exhaustive {
            prop_assert!(generated.contains(mv));
        }
    }

    #[test]
    fn prop_men_never_step_backward(board in board_strategy(), mover in player_strategy()) {
        for from in board.squares_of(mover) {
            let Some(piece) = board.get(from).piece() else { continue };
            if piece.rank != Rank::Man {
                continue;
            }
            for d_col in [-1, 1] {
                if let Some(to) = from.offset(-mover.forward(), d_col) {
                    prop_assert!(!board.is_legal(Move::new(from, to), mover));
                }
            }
        }
    }

    #[test]
    fn prop_promotion(board in board_strategy(), mover in player_strategy()) {
        for mv in board.legal_moves(mover) {
            let before = board.get(mv.from).piece();
            let mut after = board;
            after.apply(mv);
            let landed = after.get(mv.to).piece();

            prop_assert_eq!(landed.map(|p| p.color), Some(mover));
            let was_king = before.map(|p| p.is_king()).unwrap_or(false);
            let should_be_king = was_king || mv.to.row() == mover.promotion_row();
            prop_assert_eq!(landed.map(|p| p.is_king()), Some(should_be_king));
        }
    }

    #[test]
    fn prop_light_squares_stay_empty(board in board_strategy(), mover in player_strategy()) {
        for mv in board.legal_moves(mover) {
            let mut after = board;
            after.apply(mv);
            prop_assert!(Square::all().filter(|s| !s.is_dark()).all(|s| after.get(s).is_empty()));
        }
    }

    #[test]
    fn prop_generation_is_deterministic(board in board_strategy(), mover in player_strategy()) {
        prop_assert_eq!(board.legal_moves(mover), board.legal_moves(mover));
    }
}
