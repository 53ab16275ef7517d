//! Plays random games to exercise the legality engine under a profiler.

use log::info;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use vga_chess::legality::legal_destinations;
use vga_chess::{Game, Position};

const GAMES: usize = 200;
const MAX_PLIES: usize = 200;

fn random_game(rng: &mut StdRng) -> Game {
    let mut game = Game::standard();

    for _ in 0..MAX_PLIES {
        if game.is_over() {
            break;
        }

        let side = game.turn();
        let board = *game.board();
        let moves: Vec<(Position, Position)> = board
            .pieces(side)
            .iter()
            .flat_map(|(from, _)| {
                legal_destinations(&board, side, from)
                    .into_iter()
                    .map(move |to| (*from, to))
            })
            .collect();

        let Some((from, to)) = moves.choose(rng) else {
            break;
        };
        if let Err(err) = game.make_move(from, to) {
            panic!("generated move {}-{} was rejected: {}", from, to, err);
        }
    }

    game
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut finished = 0;
    let mut plies = 0;

    for _ in 0..GAMES {
        let game = random_game(&mut rng);
        plies += game.move_count();
        if let Some(outcome) = game.outcome() {
            finished += 1;
            info!("game ended in {} plies: {}", game.move_count(), outcome);
        }
    }

    println!(
        "{} games, {} plies, {} reached checkmate or stalemate",
        GAMES, plies, finished
    );
}
