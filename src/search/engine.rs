use crate::board::{Board, Side, PITS_PER_SIDE};
use crate::search::eval::{evaluate, Weights};
use log::{debug, info};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

// Deepening never realistically gets here before the deadline fires; the
// cap only keeps workers from spinning once a short endgame is exhausted.
const MAX_DEPTH: u32 = 99;

/// Raised inside the tree when the deadline flag trips. Absorbed before
/// `choose_move` returns; the caller only ever sees a move or `None`.
#[derive(Debug, thiserror::Error)]
#[error("search cancelled by deadline")]
struct Cancelled;

/// Deepest fully-searched line so far, shared between workers.
#[derive(Debug, Clone, Copy)]
struct BestLine {
    depth: u32,
    pit: usize,
    score: i32,
}

/// Outcome of one timed search: the chosen pit, its score, and the depth
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub pit: usize,
    pub score: i32,
    pub depth: u32,
}

/// Iterative-deepening alpha-beta searcher for one fixed side. Each call to
/// [`choose_move`](Searcher::choose_move) races a pool of workers against a
/// wall-clock deadline and answers with the deepest completed result.
pub struct Searcher {
    side: Side,
    weights: Weights,
    movetime: Duration,
    threads: usize,
    name: String,
    remark: String,
}

impl Searcher {
    pub fn new(side: Side, movetime: Duration) -> Self {
        let threads = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self {
            side,
            weights: Weights::default(),
            movetime,
            threads,
            name: "mancabot".to_string(),
            remark: "You lose!".to_string(),
        }
    }

    pub fn set_threads(&mut self, threads: usize) {
        self.threads = threads.max(1);
    }

    pub fn set_weights(&mut self, weights: Weights) {
        self.weights = weights;
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn victory_remark(&self) -> &str {
        &self.remark
    }

    /// Best pit for this engine's side within the time budget, or `None`
    /// when the game is already over or not even a depth-1 pass finished in
    /// time. Never blocks past the budget by more than the time it takes
    /// in-flight recursion to notice the flag and unwind.
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        self.search(board).map(|line| line.pit)
    }

    /// Like [`choose_move`](Searcher::choose_move), with the score and
    /// completed depth attached.
    pub fn search(&self, board: &Board) -> Option<SearchOutcome> {
        if board.is_over() {
            return None;
        }

        let cancel = Arc::new(AtomicBool::new(false));
        let timer_flag = cancel.clone();
        let budget = self.movetime;
        thread::spawn(move || {
            thread::sleep(budget);
            timer_flag.store(true, Ordering::Relaxed);
        });

        // Workers only publish iterations they finished, and only over
        // shallower entries, so the slot always holds the deepest completed
        // line no matter how the pool interleaves.
        let best: Mutex<Option<BestLine>> = Mutex::new(None);
        (0..self.threads).into_par_iter().for_each(|wid| {
            let root = board.clone();
            for depth in 1..=MAX_DEPTH {
                match self.minimax(&root, depth, i32::MIN, i32::MAX, &cancel) {
                    Ok((Some(pit), score)) => {
                        if let Ok(mut slot) = best.lock() {
                            if (*slot).map_or(true, |b| depth > b.depth) {
                                *slot = Some(BestLine { depth, pit, score });
                            }
                        }
                        debug!("worker {wid} finished depth {depth}: pit {pit}, score {score}");
                    }
                    // Nothing to play from the root; deepening won't change that.
                    Ok((None, _)) => break,
                    Err(Cancelled) => break,
                }
            }
        });

        let chosen = best.into_inner().ok().flatten();
        match chosen {
            Some(line) => {
                info!(
                    "{:?} plays pit {} (depth {}, score {})",
                    self.side, line.pit, line.depth, line.score
                );
                Some(SearchOutcome { pit: line.pit, score: line.score, depth: line.depth })
            }
            None => {
                info!("{:?} found no move within the budget", self.side);
                None
            }
        }
    }

    /// Fixed-depth search with no deadline. Benchmarks and analysis; the
    /// timed path goes through [`search`](Searcher::search).
    pub fn search_depth(&self, board: &Board, depth: u32) -> (Option<usize>, i32) {
        let cancel = AtomicBool::new(false);
        match self.minimax(board, depth, i32::MIN, i32::MAX, &cancel) {
            Ok(result) => result,
            // The flag above never trips.
            Err(Cancelled) => (None, 0),
        }
    }

    fn minimax(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        cancel: &AtomicBool,
    ) -> Result<(Option<usize>, i32), Cancelled> {
        if board.is_over() || depth == 0 {
            return Ok((None, evaluate(board, self.side, &self.weights)));
        }
        if cancel.load(Ordering::Relaxed) {
            return Err(Cancelled);
        }

        let mover = board.to_move();
        let maximizing = mover == self.side;
        let offset = mover.offset();
        let mut best_pit = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for pit in offset..offset + PITS_PER_SIDE {
            if !board.is_legal_move(pit) {
                continue;
            }
            let mut child = board.clone();
            // One ply only; an extra turn shows up as the child keeping the
            // same side to move.
            if child.apply_move(pit).is_err() {
                continue;
            }
            let (_, score) = self.minimax(&child, depth - 1, alpha, beta, cancel)?;
            let improves = if maximizing { score > best_score } else { score < best_score };
            if improves {
                best_pit = Some(pit);
                best_score = score;
            }
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        match best_pit {
            Some(_) => Ok((best_pit, best_score)),
            // Stuck position: nothing to play, but not formally over either.
            None => Ok((None, evaluate(board, self.side, &self.weights))),
        }
    }
}
