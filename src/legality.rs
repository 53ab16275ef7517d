//! King safety and terminal-state detection built on the movement rules.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::color::Side;
use crate::movement::movement_allowed;
use crate::position::Position;

/// Where a side stands at the start of its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Whether any piece of `by` could move onto `square`.
pub fn is_square_attacked(board: &Board, square: &Position, by: Side) -> bool {
    board
        .pieces(by)
        .iter()
        .any(|(pos, _)| movement_allowed(board, by, pos, square))
}

/// Whether `side`'s king is attacked.
///
/// # Panics
///
/// Panics if `side` has no king on the board.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let king = board.king_position(side);
    is_square_attacked(board, &king, side.opposite())
}

/// Whether `side` may move the piece on `from` to `to`: the piece must be able
/// to make the move, and its own king must not be attacked afterwards.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn is_legal_move(board: &Board, side: Side, from: &Position, to: &Position) -> bool {
    if !movement_allowed(board, side, from, to) {
        return false;
    }

    let mut scratch = *board;
    scratch.relocate(from, to);
    !is_in_check(&scratch, side)
}

pub fn legal_destinations(board: &Board, side: Side, from: &Position) -> ArrayVec<Position, 64> {
    Position::all()
        .filter(|to| is_legal_move(board, side, from, to))
        .collect()
}

pub fn has_any_legal_move(board: &Board, side: Side, from: &Position) -> bool {
    Position::all().any(|to| is_legal_move(board, side, from, &to))
}

pub fn side_has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .iter()
        .any(|(pos, _)| has_any_legal_move(board, side, pos))
}

#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn status(board: &Board, side: Side) -> GameStatus {
    let in_check = is_in_check(board, side);
    let can_move = side_has_legal_move(board, side);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

pub fn is_checkmate(board: &Board, side: Side) -> bool {
    status(board, side) == GameStatus::Checkmate
}

pub fn is_stalemate(board: &Board, side: Side) -> bool {
    status(board, side) == GameStatus::Stalemate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("Failed to parse FEN")
    }

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).expect("Invalid square name")
    }

    #[test]
    fn test_initial_position_is_ongoing() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Side::White));
        assert!(!is_in_check(&board, Side::Black));
        assert_eq!(status(&board, Side::White), GameStatus::Ongoing);
        assert_eq!(status(&board, Side::Black), GameStatus::Ongoing);
    }

    #[test]
    fn test_is_square_attacked() {
        let board = board("4k3/8/8/8/4R3/8/8/K7");

        assert!(is_square_attacked(&board, &sq("e1"), Side::White));
        assert!(is_square_attacked(&board, &sq("a4"), Side::White));
        assert!(is_square_attacked(&board, &sq("e8"), Side::White));
        assert!(!is_square_attacked(&board, &sq("f5"), Side::White));
    }

    #[test]
    fn test_check_by_each_kind() {
        assert!(is_in_check(&board("4k3/3P4/8/8/8/8/8/4K3"), Side::Black));
        assert!(is_in_check(&board("4k3/8/5N2/8/8/8/8/4K3"), Side::Black));
        assert!(is_in_check(&board("4k3/8/8/8/B7/8/8/4K3"), Side::Black));
        assert!(is_in_check(&board("4k3/8/8/8/8/8/8/4R1K1"), Side::Black));
        assert!(is_in_check(&board("4k3/8/8/7Q/8/8/8/4K3"), Side::Black));
        assert!(is_in_check(&board("8/8/8/8/8/8/3k4/4K3"), Side::White));

        // A pawn does not attack straight ahead
        assert!(!is_in_check(&board("8/8/8/8/8/8/4p3/4K2k"), Side::White));
    }

    #[test]
    fn test_blocked_slider_does_not_check() {
        let board = board("4k3/4p3/8/8/8/8/8/4R1K1");
        assert!(!is_in_check(&board, Side::Black));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // The e2 knight shields its king from the e8 rook
        let board = board("4r2k/8/8/8/8/8/4N3/4K3");

        assert!(movement_allowed(&board, Side::White, &sq("e2"), &sq("c3")));
        assert!(!is_legal_move(&board, Side::White, &sq("e2"), &sq("c3")));
        assert!(!has_any_legal_move(&board, Side::White, &sq("e2")));
        assert!(has_any_legal_move(&board, Side::White, &sq("e1")));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = board("3r3k/8/8/8/8/8/8/4K3");

        assert!(!is_legal_move(&board, Side::White, &sq("e1"), &sq("d1")));
        assert!(!is_legal_move(&board, Side::White, &sq("e1"), &sq("d2")));
        assert!(is_legal_move(&board, Side::White, &sq("e1"), &sq("f2")));
    }

    #[test]
    fn test_check_must_be_answered() {
        let board = board("4r2k/8/8/8/8/8/3B4/R3K3");

        // Blocking and stepping aside are legal, ignoring the check is not
        assert!(is_legal_move(&board, Side::White, &sq("d2"), &sq("e3")));
        assert!(is_legal_move(&board, Side::White, &sq("e1"), &sq("f1")));
        assert!(!is_legal_move(&board, Side::White, &sq("a1"), &sq("a8")));
        assert_eq!(status(&board, Side::White), GameStatus::Check);
    }

    #[test]
    fn test_capturing_the_checker_is_legal() {
        let board = board("7k/8/8/8/8/8/4q3/4K3");
        assert!(is_legal_move(&board, Side::White, &sq("e1"), &sq("e2")));
    }

    #[test]
    fn test_legal_destinations_row_major() {
        let board = Board::standard();
        let destinations = legal_destinations(&board, Side::White, &sq("g1"));
        assert_eq!(destinations.as_slice(), &[sq("f3"), sq("h3")]);
        assert!(legal_destinations(&board, Side::White, &sq("a1")).is_empty());
        assert!(legal_destinations(&board, Side::Black, &sq("g1")).is_empty());
    }

    #[test]
    fn test_back_rank_mate() {
        let board = board("3R2k1/5ppp/8/8/8/8/8/6K1");

        assert!(is_in_check(&board, Side::Black));
        assert!(is_checkmate(&board, Side::Black));
        assert!(!is_stalemate(&board, Side::Black));
        assert!(status(&board, Side::Black).is_terminal());
    }

    #[test]
    fn test_stalemate() {
        let board = board("k7/2Q5/1K6/8/8/8/8/8");

        assert!(!is_in_check(&board, Side::Black));
        assert!(is_stalemate(&board, Side::Black));
        assert!(!is_checkmate(&board, Side::Black));
        assert_eq!(status(&board, Side::White), GameStatus::Ongoing);
    }

    #[test]
    fn test_simulation_leaves_board_untouched() {
        let board = board("4r2k/8/8/8/8/8/4N3/4K3");
        let before = board;

        for from in Position::all() {
            for to in Position::all() {
                let _ = is_legal_move(&board, Side::White, &from, &to);
            }
        }

        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "malformed board")]
    fn test_missing_king_panics() {
        let board = board("8/8/8/8/8/8/8/4K3");
        is_in_check(&board, Side::Black);
    }
}
