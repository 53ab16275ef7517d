//! Two players at one terminal. Squares are entered by name (`e2`), one per
//! line; the board is printed after every change.

use std::io::{self, BufRead, Write};

use log::warn;
use vga_chess::io::{InputSource, Renderer, ResultDisplay};
use vga_chess::{Board, Game, GameError, GameOutcome, Position, Side};

struct StdinInput<R> {
    lines: R,
}

impl<R: BufRead> StdinInput<R> {
    fn prompt(&mut self, message: &str) -> Option<Position> {
        loop {
            print!("{}: ", message);
            if io::stdout().flush().is_err() {
                return None;
            }

            let mut line = String::new();
            match self.lines.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match Position::from_algebraic(line.trim()) {
                Ok(pos) => return Some(pos),
                Err(err) => warn!("{}", err),
            }
        }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn poll_selection(&mut self, side: Side) -> Option<Position> {
        self.prompt(&format!("{} to move, select a piece", side))
    }

    fn poll_destination(&mut self, side: Side, from: Position) -> Option<Position> {
        self.prompt(&format!("{} moves {} to", side, from))
    }
}

struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&mut self, board: &Board) {
        println!("\n{}\n", board);
    }
}

impl ResultDisplay for TextRenderer {
    fn show_result(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(side) => println!("Checkmate. {} wins.", side),
            None => println!("Stalemate. The game is drawn."),
        }
    }
}

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = StdinInput {
        lines: stdin.lock(),
    };
    let mut renderer = TextRenderer;
    let mut display = TextRenderer;
    let mut game = Game::standard();

    match game.run(&mut input, &mut renderer, &mut display) {
        Ok(_) => {}
        Err(GameError::InputClosed) => {
            println!("\nInput closed after {} moves.", game.move_count())
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
