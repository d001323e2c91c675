use anyhow::Result;
use clap::Parser;
use mancabot::board::{Board, MoveOutcome, Side, PITS_PER_SIDE};
use mancabot::search::engine::Searcher;
use mancabot::search::eval::Weights;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Mancala against the search engine", long_about = None)]
struct Args {
    /// Operation mode: 's' for self play, 'p' for profile, 'h' for human
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your side: 's' for south (sows first), 'n' for north
    #[arg(long, default_value = "s")]
    side: String,

    /// Engine thinking time per move, in milliseconds
    #[arg(long, default_value_t = 1000)]
    millis: u64,

    /// Number of search workers (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Path to a JSON file overriding the built-in evaluation weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Print per-move search timing
    #[arg(long)]
    verbose: bool,
}

fn parse_side(side_str: &str) -> Result<Side> {
    match side_str.to_lowercase().as_str() {
        "s" | "south" => Ok(Side::South),
        "n" | "north" => Ok(Side::North),
        _ => anyhow::bail!("Invalid side: use 's' or 'n'"),
    }
}

fn load_weights(path: &PathBuf) -> Result<Weights> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn get_human_move(board: &Board) -> Result<usize> {
    let offset = board.to_move().offset();
    loop {
        print!("Enter a pit to sow ({}-{}): ", offset, offset + PITS_PER_SIDE - 1);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if let Ok(pit) = input.parse::<usize>() {
            if board.is_legal_move(pit) {
                return Ok(pit);
            }
            println!("Illegal move!");
        } else {
            println!("Enter the pit index as a number");
        }
    }
}

fn announce_result(board: &Board, engine: &Searcher) {
    println!("\n{}", board);
    println!(
        "Final score: South {} - North {}",
        board.store(Side::South),
        board.store(Side::North)
    );
    match board.winner() {
        Some(side) if side == engine.side() => {
            println!("{:?} wins. {}", side, engine.victory_remark());
        }
        Some(side) => println!("{:?} wins!", side),
        None => println!("It's a draw!"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_side = parse_side(&args.side)?;
    let engine_side = if mode == 'h' { human_side.opponent() } else { Side::South };

    let weights = match &args.weights {
        Some(path) => load_weights(path)?,
        None => Weights::default(),
    };

    let movetime = Duration::from_millis(args.millis);
    let mut engine = Searcher::new(engine_side, movetime);
    engine.set_weights(weights);
    if args.threads > 0 {
        engine.set_threads(args.threads);
    }
    // Second engine for the other side in self-play and profile modes.
    let mut opponent = Searcher::new(engine_side.opponent(), movetime);
    opponent.set_weights(weights);
    if args.threads > 0 {
        opponent.set_threads(args.threads);
    }

    let mut board = Board::new();
    loop {
        if board.is_over() {
            announce_result(&board, &engine);
            break;
        }

        println!("\n{:?} to move", board.to_move());
        println!("{}", board);

        let is_human_turn = mode == 'h' && board.to_move() == human_side;
        let pit = if is_human_turn {
            get_human_move(&board)?
        } else {
            let mover = if board.to_move() == engine.side() { &engine } else { &opponent };
            let start = Instant::now();
            let Some(pit) = mover.choose_move(&board) else {
                println!("No move available!");
                break;
            };
            if args.verbose {
                println!(
                    "{} ({:?}) plays pit {} in {:.2}s",
                    mover.name(),
                    board.to_move(),
                    pit,
                    start.elapsed().as_secs_f32()
                );
            } else {
                println!("{} ({:?}) plays pit {}", mover.name(), board.to_move(), pit);
            }
            pit
        };

        match board.apply_move(pit) {
            Ok(MoveOutcome::ExtraTurn) => println!("Extra turn!"),
            Ok(MoveOutcome::Capture(n)) => println!("Captured {n} stones!"),
            Ok(_) => {}
            Err(e) => println!("{e}"),
        }

        // In profile mode, exit after the first engine move
        if mode == 'p' {
            break;
        }
    }

    Ok(())
}
