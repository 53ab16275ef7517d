pub mod board;
pub mod color;
pub mod error;
pub mod game;
pub mod io;
pub mod legality;
pub mod r#move;
pub mod movement;
pub mod outcome;
pub mod pieces;
pub mod position;
pub mod render;

pub use board::{Board, Square};
pub use color::Side;
pub use error::{GameError, GameResult, SelectionFault};
pub use game::{Game, is_game_over, play_turn, switch_turn, winner};
pub use legality::{GameStatus, has_any_legal_move, is_in_check, is_legal_move};
pub use movement::movement_allowed;
pub use outcome::GameOutcome;
pub use pieces::{Piece, PieceKind};
pub use position::Position;
