use std::fmt;

pub const BOARD_SIZE: i8 = 8;

/// A board coordinate. Files and ranks are signed so that callers can name
/// squares off the board and have them rejected by `is_on_board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Position {
        Position::new(
            self.file.saturating_add(file_delta),
            self.rank.saturating_add(rank_delta),
        )
    }

    /// Every square of the board, rank by rank starting from rank 0.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position::new(file, rank)))
    }

    pub fn to_algebraic(&self) -> String {
        if self.is_on_board() {
            format!("{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
        } else {
            format!("({},{})", self.file, self.rank)
        }
    }

    pub fn from_algebraic(s: &str) -> Result<Self, String> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(format!("Invalid square name: {:?}", s));
        };

        let file_char = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file_char) {
            return Err(format!("Invalid file character: {}", file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(format!("Invalid rank character: {}", rank_char));
        }

        Ok(Position::new(
            (file_char as u8 - b'a') as i8,
            (rank_char as u8 - b'1') as i8,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_algebraic() {
        assert_eq!(Position::new(0, 0).to_algebraic(), "a1");
        assert_eq!(Position::new(7, 7).to_algebraic(), "h8");
        assert_eq!(Position::new(4, 3).to_algebraic(), "e4");
        assert_eq!(Position::new(-1, 3).to_algebraic(), "(-1,3)");
    }

    #[test]
    fn test_position_from_algebraic() {
        assert_eq!(Position::from_algebraic("a1"), Ok(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("E4"), Ok(Position::new(4, 3)));
        assert_eq!(Position::from_algebraic("h8"), Ok(Position::new(7, 7)));

        assert!(Position::from_algebraic("").is_err());
        assert!(Position::from_algebraic("i1").is_err());
        assert!(Position::from_algebraic("a9").is_err());
        assert!(Position::from_algebraic("a10").is_err());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(8, 0).is_on_board());
        assert!(!Position::new(0, -1).is_on_board());
        assert!(!Position::new(i8::MIN, i8::MAX).is_on_board());
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(1, 0));
        assert_eq!(all[8], Position::new(0, 1));
        assert_eq!(all[63], Position::new(7, 7));
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Position::new(3, 3).offset(1, -2), Position::new(4, 1));
        assert_eq!(Position::new(i8::MAX, 0).offset(1, 0).file, i8::MAX);
    }
}
