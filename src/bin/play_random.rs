use anyhow::Result;
use mancabot::board::{Board, MoveOutcome, Side};
use mancabot::player::{Player, RandomPlayer};
use mancabot::search::engine::Searcher;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();
    println!("Mancala Engine vs Random Mover");
    println!("==============================");
    println!("The engine sows first from the south row; the opponent picks");
    println!("uniformly among its legal pits.");
    println!();

    let engine = Searcher::new(Side::South, Duration::from_millis(250));
    let mut random = RandomPlayer::new(Side::North, 0xbada55);
    let mut board = Board::new();

    while !board.is_over() {
        let mover = board.to_move();
        let pit = if mover == engine.side() {
            engine.choose_move(&board)
        } else {
            random.choose_move(&board)
        };
        let Some(pit) = pit else {
            println!("No move available for {mover:?}");
            break;
        };
        match board.apply_move(pit)? {
            MoveOutcome::ExtraTurn => println!("{mover:?} sows pit {pit} and goes again"),
            MoveOutcome::Capture(n) => println!("{mover:?} sows pit {pit}, capturing {n}"),
            _ => println!("{mover:?} sows pit {pit}"),
        }
    }

    println!("\n{}", board);
    println!(
        "Final score: South {} - North {}",
        board.store(Side::South),
        board.store(Side::North)
    );
    match board.winner() {
        Some(side) => println!("{side:?} wins!"),
        None => println!("Draw."),
    }
    Ok(())
}
