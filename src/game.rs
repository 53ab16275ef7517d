use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::board::Board;
use crate::color::Side;
use crate::error::{GameError, GameResult, SelectionFault};
use crate::io::{InputSource, Renderer, ResultDisplay};
use crate::legality::{self, GameStatus};
use crate::outcome::GameOutcome;
use crate::pieces::PieceKind;
use crate::position::Position;
use crate::r#move::{Move, MoveFlags};

pub fn switch_turn(side: Side) -> Side {
    side.opposite()
}

/// Checks that `side` may start a move from `from` and returns every square
/// the piece there can legally reach.
pub fn select_piece(
    board: &Board,
    side: Side,
    from: &Position,
) -> GameResult<ArrayVec<Position, 64>> {
    let fault = match board.get_piece(from) {
        _ if !from.is_on_board() => Some(SelectionFault::OffBoard),
        None => Some(SelectionFault::Empty),
        Some(piece) if piece.side != side => Some(SelectionFault::OpponentPiece),
        Some(_) => None,
    };

    if let Some(reason) = fault {
        return Err(GameError::InvalidSelection { at: *from, reason });
    }

    let destinations = legality::legal_destinations(board, side, from);
    if destinations.is_empty() {
        return Err(GameError::InvalidSelection {
            at: *from,
            reason: SelectionFault::NoLegalMoves,
        });
    }

    Ok(destinations)
}

/// Moves the piece on `from` to `to` if that is a legal move for `side`.
/// The board is left untouched on error.
pub fn apply_move(
    board: &mut Board,
    side: Side,
    from: &Position,
    to: &Position,
) -> GameResult<Move> {
    if !legality::is_legal_move(board, side, from, to) {
        return Err(GameError::InvalidDestination { from: *from, to: *to });
    }

    let piece = board
        .get_piece(from)
        .ok_or(GameError::InvalidDestination { from: *from, to: *to })?;
    let captured = board.get_piece(to);

    let mut flags = MoveFlags::empty();
    if captured.is_some() {
        flags |= MoveFlags::CAPTURE;
    }
    if piece.kind == PieceKind::Pawn && (to.rank - from.rank).abs() == 2 {
        flags |= MoveFlags::DOUBLE_PUSH;
    }

    board.relocate(from, to);

    if legality::is_in_check(board, side.opposite()) {
        flags |= MoveFlags::CHECK;
    }

    Ok(Move {
        src: *from,
        dst: *to,
        piece,
        captured,
        flags,
    })
}

/// Plays one move for `side`, asking `input` for squares until it supplies a
/// legal selection and destination.
///
/// The selected square is outlined and its destinations highlighted while the
/// player chooses; the marks are cleared once the move is made.
pub fn play_turn<I, R>(
    board: &mut Board,
    side: Side,
    input: &mut I,
    renderer: &mut R,
) -> GameResult<Move>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let from = loop {
        let from = input.poll_selection(side).ok_or(GameError::InputClosed)?;
        match select_piece(board, side, &from) {
            Ok(destinations) => {
                board.clear_marks();
                board.outline(&from);
                for to in &destinations {
                    board.highlight(to);
                }
                trace!("{} selected {} with {} destinations", side, from, destinations.len());
                renderer.render(board);
                break from;
            }
            Err(err) => debug!("{}: {}", side, err),
        }
    };

    let mv = loop {
        let to = match input.poll_destination(side, from) {
            Some(to) => to,
            None => {
                board.clear_marks();
                return Err(GameError::InputClosed);
            }
        };
        match apply_move(board, side, &from, &to) {
            Ok(mv) => break mv,
            Err(err) => debug!("{}: {}", side, err),
        }
    };

    board.clear_marks();
    renderer.render(board);
    info!("{} played {}", side, mv);

    Ok(mv)
}

pub fn is_game_over(board: &Board, side: Side) -> bool {
    legality::status(board, side).is_terminal()
}

/// The result of the game when `side` is to move, or `None` while it can
/// still move.
pub fn winner(board: &Board, side: Side) -> Option<GameOutcome> {
    match legality::status(board, side) {
        GameStatus::Checkmate => Some(GameOutcome::checkmated(side)),
        GameStatus::Stalemate => Some(GameOutcome::Draw),
        GameStatus::Ongoing | GameStatus::Check => None,
    }
}

/// A game in progress: the board, whose turn it is, and the moves played.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Side,
    move_history: Vec<Move>,
}

impl Game {
    /// Builds a game from a piece-placement field followed by the side to
    /// move, e.g. `"4k3/8/8/8/8/8/8/4K3 w"`.
    pub fn new(fen: &str) -> Result<Self, String> {
        let mut parts = fen.split_whitespace();
        let (Some(placement), Some(turn), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid FEN: expected placement and turn, got {:?}", fen));
        };

        let board = Board::from_fen(placement)?;

        let turn = match turn {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return Err("Invalid turn in FEN".to_string()),
        };

        for side in [Side::White, Side::Black] {
            if board.find_king(side).is_none() {
                return Err(format!("No {} king found in FEN position", side));
            }
        }

        // The side that just moved cannot have left its own king attacked
        if legality::is_in_check(&board, turn.opposite()) {
            return Err(format!("{} is in check but it is {} to move", turn.opposite(), turn));
        }

        Ok(Game {
            board,
            turn,
            move_history: Vec::new(),
        })
    }

    pub fn standard() -> Self {
        Game {
            board: Board::standard(),
            turn: Side::White,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn to_fen(&self) -> String {
        let turn = match self.turn {
            Side::White => 'w',
            Side::Black => 'b',
        };
        format!("{} {}", self.board.to_fen(), turn)
    }

    pub fn is_legal_move(&self, from: &Position, to: &Position) -> bool {
        legality::is_legal_move(&self.board, self.turn, from, to)
    }

    /// Applies a move for the side to move without going through an input source.
    pub fn make_move(&mut self, from: &Position, to: &Position) -> GameResult<Move> {
        let mv = apply_move(&mut self.board, self.turn, from, to)?;
        self.finish_turn(mv);
        Ok(mv)
    }

    pub fn play_turn<I, R>(&mut self, input: &mut I, renderer: &mut R) -> GameResult<Move>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let mv = play_turn(&mut self.board, self.turn, input, renderer)?;
        self.finish_turn(mv);
        Ok(mv)
    }

    fn finish_turn(&mut self, mv: Move) {
        self.move_history.push(mv);
        self.turn = switch_turn(self.turn);
    }

    /// Takes back the last move. Returns whether there was one.
    pub fn unmake_move(&mut self) -> bool {
        let Some(mv) = self.move_history.pop() else {
            return false;
        };

        self.board.set_piece(&mv.src, Some(mv.piece));
        self.board.set_piece(&mv.dst, mv.captured);
        self.turn = switch_turn(self.turn);

        true
    }

    pub fn status(&self) -> GameStatus {
        legality::status(&self.board, self.turn)
    }

    pub fn is_check(&self) -> bool {
        legality::is_in_check(&self.board, self.turn)
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.board, self.turn)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        winner(&self.board, self.turn)
    }

    /// Plays turns until the game ends, then renders the final position and
    /// reports the outcome.
    pub fn run<I, R, D>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        display: &mut D,
    ) -> GameResult<GameOutcome>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        D: ResultDisplay + ?Sized,
    {
        renderer.render(&self.board);

        loop {
            if let Some(outcome) = self.outcome() {
                info!("game over after {} moves: {}", self.move_count(), outcome);
                renderer.render(&self.board);
                display.show_result(outcome);
                return Ok(outcome);
            }

            if self.is_check() {
                debug!("{} is in check", self.turn);
            }

            self.play_turn(input, renderer)?;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, status: {:?}, placement: {})\n{}",
            self.turn,
            self.status(),
            self.board.to_fen(),
            self.board
        )
    }
}
