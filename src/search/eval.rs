use crate::board::{Board, Side, PITS_PER_SIDE};
use serde::{Deserialize, Serialize};

// A sown stone never enters the opponent's store, so landing arithmetic
// runs on a 13-slot ring.
const SOW_RING: usize = 13;

/// Evaluation weights, fixed for the lifetime of an engine. Loadable from
/// JSON; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Difference between store counts.
    pub mancala: i32,
    /// Difference between stones sitting on each side of the board.
    pub pit: i32,
    /// Difference between potential captures next turn.
    pub capture: i32,
    /// Potentially getting another turn.
    pub turn: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self { mancala: 30, pit: 1, capture: 20, turn: 10 }
    }
}

impl Weights {
    /// Store-and-pit-count variant: the zero weights switch the capture and
    /// extra-turn terms off entirely.
    pub fn simple() -> Self {
        Self { mancala: 1, pit: 2, capture: 0, turn: 0 }
    }
}

/// Static score of `board` from `side`'s point of view; higher is better
/// for `side`. Pure integer arithmetic over the board contents, so repeated
/// calls on the same position always agree.
pub fn evaluate(board: &Board, side: Side, weights: &Weights) -> i32 {
    let mine = side.offset();
    let theirs = side.opponent().offset();
    let mut eval = (board.stones_at(side.store()) as i32
        - board.stones_at(side.opponent().store()) as i32)
        * weights.mancala;
    for i in 0..PITS_PER_SIDE {
        let my_pit = i + mine;
        let their_pit = i + theirs;
        eval += (board.stones_at(my_pit) as i32 - board.stones_at(their_pit) as i32) * weights.pit;
        eval += (capture_potential(board, my_pit, mine) - capture_potential(board, their_pit, theirs))
            * weights.capture;
        eval += (extra_turn_potential(board, my_pit, mine)
            - extra_turn_potential(board, their_pit, theirs))
            * weights.turn;
    }
    eval
}

// Stones a sow from `pit` stands to capture next turn. The landing pit must
// hold stones and fall inside the sower's own row; the haul is the mirror
// pit across the board.
fn capture_potential(board: &Board, pit: usize, offset: usize) -> i32 {
    let landing = (pit + board.stones_at(pit) as usize) % SOW_RING;
    if board.stones_at(landing) != 0 && landing >= offset && landing <= offset + PITS_PER_SIDE - 1 {
        board.stones_at(SOW_RING - 1 - landing) as i32
    } else {
        0
    }
}

// 1 when a sow from `pit` would drop its last stone in the sower's store.
fn extra_turn_potential(board: &Board, pit: usize, offset: usize) -> i32 {
    if (pit + board.stones_at(pit) as usize) % SOW_RING == offset + PITS_PER_SIDE {
        1
    } else {
        0
    }
}
