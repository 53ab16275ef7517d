use crate::pieces::Piece;
use crate::position::Position;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b00000001;
        const DOUBLE_PUSH = 0b00000010;
        const CHECK = 0b00000100;
    }
}

/// A move that was applied to a board, with enough information to take it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Position,
    pub dst: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub flags: MoveFlags,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    pub fn gives_check(&self) -> bool {
        self.flags.contains(MoveFlags::CHECK)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.src, separator, self.dst)?;
        if self.gives_check() {
            write!(f, "+")?;
        }
        Ok(())
    }
}
