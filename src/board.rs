use arrayvec::ArrayVec;

use crate::color::Side;
use crate::pieces::{Piece, PieceKind};
use crate::position::{BOARD_SIZE, Position};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// One cell of the board. `highlighted` and `outlined` are presentation marks
/// and take no part in move legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square {
    pub piece: Option<Piece>,
    pub highlighted: bool,
    pub outlined: bool,
}

/// The 8x8 grid, stored rank-major. Rank 0 is White's back rank.
///
/// The board is `Copy`: duplicating it for a hypothetical move is a plain
/// stack copy that shares nothing with the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[Square::default(); SIZE]; SIZE],
        }
    }

    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, kind) in (0..BOARD_SIZE).zip(back_rank) {
            board.set_piece(&Position::new(file, 0), Some(Piece::new(kind, Side::White)));
            board.set_piece(
                &Position::new(file, Side::White.pawn_rank()),
                Some(Piece::new(PieceKind::Pawn, Side::White)),
            );
            board.set_piece(
                &Position::new(file, Side::Black.pawn_rank()),
                Some(Piece::new(PieceKind::Pawn, Side::Black)),
            );
            board.set_piece(&Position::new(file, 7), Some(Piece::new(kind, Side::Black)));
        }

        board
    }

    /// Builds a board from the piece-placement field of a FEN record.
    pub fn from_fen(placement: &str) -> Result<Self, String> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.split('/').collect();

        if rows.len() != SIZE {
            return Err(format!(
                "Invalid FEN: expected {} rows, got {}",
                SIZE,
                rows.len()
            ));
        }

        for (row_idx, row_str) in rows.iter().enumerate() {
            let rank = (SIZE - 1 - row_idx) as i8;
            let mut file: i8 = 0;

            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as i8;
                    if file > BOARD_SIZE {
                        return Err(format!("Invalid FEN: rank {} overflows", rank + 1));
                    }
                } else if let Some(piece) = Piece::from_char(c) {
                    if file >= BOARD_SIZE {
                        return Err(format!("Invalid FEN: rank {} overflows", rank + 1));
                    }
                    board.set_piece(&Position::new(file, rank), Some(piece));
                    file += 1;
                } else {
                    return Err(format!("Invalid FEN character: {}", c));
                }
            }

            if file != BOARD_SIZE {
                return Err(format!(
                    "Invalid FEN: rank {} has wrong number of squares",
                    rank + 1
                ));
            }
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..BOARD_SIZE).rev() {
            let mut empty_count = 0;

            for file in 0..BOARD_SIZE {
                if let Some(piece) = self.get_piece(&Position::new(file, rank)) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if rank > 0 {
                fen.push('/');
            }
        }

        fen
    }

    pub fn square(&self, pos: &Position) -> Option<&Square> {
        if pos.is_on_board() {
            Some(&self.squares[pos.rank as usize][pos.file as usize])
        } else {
            None
        }
    }

    fn square_mut(&mut self, pos: &Position) -> Option<&mut Square> {
        if pos.is_on_board() {
            Some(&mut self.squares[pos.rank as usize][pos.file as usize])
        } else {
            None
        }
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Piece> {
        self.square(pos).and_then(|square| square.piece)
    }

    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        if let Some(square) = self.square_mut(pos) {
            square.piece = piece;
        }
    }

    pub fn is_empty(&self, pos: &Position) -> bool {
        self.get_piece(pos).is_none()
    }

    /// Moves whatever stands on `from` to `to`, replacing any occupant, and
    /// leaves `from` empty. No legality checking.
    pub fn relocate(&mut self, from: &Position, to: &Position) {
        let piece = self.get_piece(from);
        self.set_piece(to, piece);
        self.set_piece(from, None);
    }

    pub fn highlight(&mut self, pos: &Position) {
        if let Some(square) = self.square_mut(pos) {
            square.highlighted = true;
        }
    }

    pub fn outline(&mut self, pos: &Position) {
        if let Some(square) = self.square_mut(pos) {
            square.outlined = true;
        }
    }

    pub fn clear_marks(&mut self) {
        for square in self.squares.iter_mut().flatten() {
            square.highlighted = false;
            square.outlined = false;
        }
    }

    /// Compares piece placement only, ignoring highlight and outline marks.
    pub fn same_arrangement(&self, other: &Board) -> bool {
        Position::all().all(|pos| self.get_piece(&pos) == other.get_piece(&pos))
    }

    pub fn pieces(&self, side: Side) -> ArrayVec<(Position, Piece), 64> {
        Position::all()
            .filter_map(|pos| self.get_piece(&pos).map(|piece| (pos, piece)))
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    pub fn find_king(&self, side: Side) -> Option<Position> {
        Position::all().find(|pos| {
            self.get_piece(pos) == Some(Piece::new(PieceKind::King, side))
        })
    }

    /// Square of `side`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `side` has no king. Kings are never captured, so a board
    /// without one was built incorrectly.
    pub fn king_position(&self, side: Side) -> Position {
        match self.find_king(side) {
            Some(pos) => pos,
            None => panic!("malformed board: no {} king in {}", side, self.to_fen()),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{:2} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let square = &self.squares[rank as usize][file as usize];
                let glyph = match square.piece {
                    Some(piece) => piece.to_char(),
                    None if square.highlighted => '*',
                    None => '.',
                };
                let (open, close) = if square.outlined {
                    ('[', ']')
                } else if square.highlighted && square.piece.is_some() {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                write!(f, "{}{}{}", open, glyph, close)?;
            }
            writeln!(f)?;
        }

        write!(f, "   ")?;
        for file in 0..BOARD_SIZE {
            write!(f, " {} ", (b'a' + file as u8) as char)?;
        }
        Ok(())
    }
}
