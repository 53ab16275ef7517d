//! Collaborators the turn controller talks to: where squares come from, where
//! the board goes after it changes, and where the final result is shown.

use std::collections::VecDeque;

use crate::board::Board;
use crate::color::Side;
use crate::outcome::GameOutcome;
use crate::position::Position;

/// A blocking source of board coordinates.
///
/// Each call waits until the player has confirmed a square. `None` means the
/// source will never produce another square.
pub trait InputSource {
    fn poll_selection(&mut self, side: Side) -> Option<Position>;

    fn poll_destination(&mut self, side: Side, from: Position) -> Option<Position>;
}

pub trait Renderer {
    fn render(&mut self, board: &Board);
}

pub trait ResultDisplay {
    fn show_result(&mut self, outcome: GameOutcome);
}

/// Replays a fixed list of `(from, to)` pairs.
///
/// Selections and destinations are consumed from separate queues, so a
/// rejected square only consumes its own entry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    selections: VecDeque<Position>,
    destinations: VecDeque<Position>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = (Position, Position)>,
    {
        let mut input = Self::new();
        for (from, to) in moves {
            input.push_selection(from);
            input.push_destination(to);
        }
        input
    }

    pub fn push_selection(&mut self, pos: Position) {
        self.selections.push_back(pos);
    }

    pub fn push_destination(&mut self, pos: Position) {
        self.destinations.push_back(pos);
    }

    pub fn is_exhausted(&self) -> bool {
        self.selections.is_empty() && self.destinations.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_selection(&mut self, _side: Side) -> Option<Position> {
        self.selections.pop_front()
    }

    fn poll_destination(&mut self, _side: Side, _from: Position) -> Option<Position> {
        self.destinations.pop_front()
    }
}

/// Keeps every frame it is handed. Useful when nothing needs to be drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Board>,
    pub results: Vec<GameOutcome>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, board: &Board) {
        self.frames.push(*board);
    }
}

impl ResultDisplay for RecordingRenderer {
    fn show_result(&mut self, outcome: GameOutcome) {
        self.results.push(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_order() {
        let e2 = Position::new(4, 1);
        let e4 = Position::new(4, 3);
        let e7 = Position::new(4, 6);
        let e5 = Position::new(4, 4);
        let mut input = ScriptedInput::from_moves([(e2, e4), (e7, e5)]);

        assert_eq!(input.poll_selection(Side::White), Some(e2));
        assert_eq!(input.poll_destination(Side::White, e2), Some(e4));
        assert_eq!(input.poll_selection(Side::Black), Some(e7));
        assert_eq!(input.poll_destination(Side::Black, e7), Some(e5));
        assert!(input.is_exhausted());
        assert_eq!(input.poll_selection(Side::White), None);
    }

    #[test]
    fn test_recording_renderer_keeps_frames() {
        let mut renderer = RecordingRenderer::default();
        renderer.render(&Board::standard());
        renderer.show_result(GameOutcome::Draw);

        assert_eq!(renderer.frames, vec![Board::standard()]);
        assert_eq!(renderer.results, vec![GameOutcome::Draw]);
    }
}
