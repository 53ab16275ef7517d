use crate::color::Side;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameOutcome {
    /// The outcome of `side` being checkmated.
    pub fn checkmated(side: Side) -> Self {
        match side {
            Side::White => GameOutcome::BlackWin,
            Side::Black => GameOutcome::WhiteWin,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::WhiteWin => Some(Side::White),
            GameOutcome::BlackWin => Some(Side::Black),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOutcome::WhiteWin => "white_win",
            GameOutcome::BlackWin => "black_win",
            GameOutcome::Draw => "draw",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(GameOutcome::WhiteWin.winner(), Some(Side::White));
        assert_eq!(GameOutcome::BlackWin.winner(), Some(Side::Black));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_checkmated_side_loses() {
        assert_eq!(GameOutcome::checkmated(Side::White), GameOutcome::BlackWin);
        assert_eq!(GameOutcome::checkmated(Side::Black), GameOutcome::WhiteWin);
    }

    #[test]
    fn test_is_draw() {
        assert!(!GameOutcome::WhiteWin.is_draw());
        assert!(!GameOutcome::BlackWin.is_draw());
        assert!(GameOutcome::Draw.is_draw());
    }

    #[test]
    fn test_to_string() {
        assert_eq!(GameOutcome::WhiteWin.to_string(), "white_win");
        assert_eq!(GameOutcome::BlackWin.to_string(), "black_win");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
    }
}
