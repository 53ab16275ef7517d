use crate::color::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece standing on the board. An empty square is `None`, so a piece always
/// has both a kind and a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece::new(kind, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_creation() {
        let piece = Piece::new(PieceKind::King, Side::White);
        assert_eq!(piece.kind, PieceKind::King);
        assert_eq!(piece.side, Side::White);
    }

    #[test]
    fn test_piece_char_case_follows_side() {
        assert_eq!(Piece::new(PieceKind::Knight, Side::White).to_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Side::Black).to_char(), 'n');
        assert_eq!(
            Piece::from_char('Q'),
            Some(Piece::new(PieceKind::Queen, Side::White))
        );
        assert_eq!(
            Piece::from_char('k'),
            Some(Piece::new(PieceKind::King, Side::Black))
        );
    }

    #[test]
    fn test_piece_from_invalid_char() {
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }
}
