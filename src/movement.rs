//! Per-piece movement rules.
//!
//! These answer whether a piece may travel from one square to another on the
//! current board. They do not consider the mover's own king; see
//! [`crate::legality`] for that.

use crate::board::Board;
use crate::color::Side;
use crate::pieces::{Piece, PieceKind};
use crate::position::Position;

/// Whether the piece on `from` may move to `to` when `side` is to move,
/// ignoring whether the move would leave `side`'s king attacked.
pub fn movement_allowed(board: &Board, side: Side, from: &Position, to: &Position) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }

    let piece = match board.get_piece(from) {
        Some(piece) if piece.side == side => piece,
        _ => return false,
    };

    if let Some(target) = board.get_piece(to) {
        if target.side == piece.side {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_allowed(board, &piece, from, to),
        PieceKind::Knight => knight_move_allowed(from, to),
        PieceKind::Bishop => bishop_move_allowed(board, from, to),
        PieceKind::Rook => rook_move_allowed(board, from, to),
        PieceKind::Queen => queen_move_allowed(board, from, to),
        PieceKind::King => king_move_allowed(from, to),
    }
}

fn deltas(from: &Position, to: &Position) -> (i8, i8) {
    (to.file - from.file, to.rank - from.rank)
}

fn pawn_move_allowed(board: &Board, piece: &Piece, from: &Position, to: &Position) -> bool {
    let forward = piece.side.forward();
    let (file_delta, rank_delta) = deltas(from, to);

    // Diagonal capture
    if file_delta.abs() == 1 && rank_delta == forward {
        return !board.is_empty(to);
    }

    if file_delta != 0 {
        return false;
    }

    // Single push
    if rank_delta == forward {
        return board.is_empty(to);
    }

    // Double push from the starting rank
    if rank_delta == 2 * forward && from.rank == piece.side.pawn_rank() {
        let between = from.offset(0, forward);
        return board.is_empty(&between) && board.is_empty(to);
    }

    false
}

fn knight_move_allowed(from: &Position, to: &Position) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    let (file_diff, rank_diff) = (file_delta.abs(), rank_delta.abs());

    (file_diff == 2 && rank_diff == 1) || (file_diff == 1 && rank_diff == 2)
}

/// Walks the squares strictly between `from` and `to`, which must lie on a
/// shared rank, file or diagonal.
fn path_is_clear(board: &Board, from: &Position, to: &Position) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    let (file_step, rank_step) = (file_delta.signum(), rank_delta.signum());
    let distance = file_delta.abs().max(rank_delta.abs());

    (1..distance).all(|i| board.is_empty(&from.offset(i * file_step, i * rank_step)))
}

fn bishop_move_allowed(board: &Board, from: &Position, to: &Position) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);

    if file_delta.abs() != rank_delta.abs() || file_delta == 0 {
        return false;
    }

    path_is_clear(board, from, to)
}

fn rook_move_allowed(board: &Board, from: &Position, to: &Position) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);

    if (file_delta == 0) == (rank_delta == 0) {
        return false;
    }

    path_is_clear(board, from, to)
}

fn queen_move_allowed(board: &Board, from: &Position, to: &Position) -> bool {
    rook_move_allowed(board, from, to) || bishop_move_allowed(board, from, to)
}

fn king_move_allowed(from: &Position, to: &Position) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    let (file_diff, rank_diff) = (file_delta.abs(), rank_delta.abs());

    file_diff <= 1 && rank_diff <= 1 && (file_diff + rank_diff) > 0
}
