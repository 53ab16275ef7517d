//! Errors raised while a turn is being played.

use crate::position::Position;

/// Why a selected square cannot start a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionFault {
    #[error("square is off the board")]
    OffBoard,
    #[error("square is empty")]
    Empty,
    #[error("piece belongs to the opponent")]
    OpponentPiece,
    #[error("piece has no legal moves")]
    NoLegalMoves,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The chosen origin square cannot be moved from.
    #[error("invalid selection {at}: {reason}")]
    InvalidSelection { at: Position, reason: SelectionFault },

    /// The chosen destination is not a legal move for the selected piece.
    #[error("invalid destination: {from} cannot move to {to}")]
    InvalidDestination { from: Position, to: Position },

    /// The input source stopped producing squares.
    #[error("input source closed")]
    InputClosed,
}

/// Result type alias for turn operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidSelection {
            at: Position::new(4, 3),
            reason: SelectionFault::Empty,
        };
        assert_eq!(err.to_string(), "invalid selection e4: square is empty");

        let err = GameError::InvalidDestination {
            from: Position::new(4, 1),
            to: Position::new(4, 4),
        };
        assert_eq!(err.to_string(), "invalid destination: e2 cannot move to e5");

        let err = GameError::InvalidSelection {
            at: Position::new(0, 0),
            reason: SelectionFault::NoLegalMoves,
        };
        assert_eq!(err.to_string(), "invalid selection a1: piece has no legal moves");
        assert_eq!(SelectionFault::OpponentPiece.to_string(), "piece belongs to the opponent");
    }
}
