use crate::board::{Board, Side, PITS_PER_SIDE};
use crate::search::engine::Searcher;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Anything that can take a turn: pick a pit, own a side, answer to a name.
pub trait Player {
    fn side(&self) -> Side;
    fn name(&self) -> &str;
    /// Pit to sow, or `None` when no move is available.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;
    /// Cosmetic line for the post-game announcement.
    fn victory_remark(&self) -> &str {
        "Good game."
    }
}

impl Player for Searcher {
    fn side(&self) -> Side {
        Searcher::side(self)
    }

    fn name(&self) -> &str {
        Searcher::name(self)
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        Searcher::choose_move(self, board)
    }

    fn victory_remark(&self) -> &str {
        Searcher::victory_remark(self)
    }
}

/// Uniform-random legal mover, the baseline opponent. The seed is explicit
/// so games replay deterministically.
pub struct RandomPlayer {
    side: Side,
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(side: Side, seed: u64) -> Self {
        Self { side, rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let offset = self.side.offset();
        let legal: Vec<usize> = (offset..offset + PITS_PER_SIDE)
            .filter(|&pit| board.is_legal_move(pit))
            .collect();
        legal.choose(&mut self.rng).copied()
    }

    fn victory_remark(&self) -> &str {
        "Lucky me."
    }
}
