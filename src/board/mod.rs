use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

pub const PITS_PER_SIDE: usize = 6;
pub const SLOTS: usize = 14;

const SOUTH_STORE: usize = 6;
const NORTH_STORE: usize = 13;

/// One of the two rows of pits. South owns slots 0-5 with store 6 and sows
/// first from the starting position; North owns slots 7-12 with store 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    South,
    North,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// Index of this side's first pit.
    pub fn offset(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => 7,
        }
    }

    pub fn store(self) -> usize {
        self.offset() + PITS_PER_SIDE
    }
}

/// What a sow did, beyond moving stones around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Turn passes to the opponent.
    Normal,
    /// Last stone landed in the mover's store; the mover goes again.
    ExtraTurn,
    /// Last stone landed in an empty pit of the mover's row with an occupied
    /// mirror pit; the count is the total banked.
    Capture(u8),
    /// The move left a row empty; remaining stones were swept to their
    /// owners' stores and the game ended.
    GameOver,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("pit {0} is not a legal move for the side to move")]
    IllegalMove(usize),
    #[error("the game is already over")]
    GameOver,
}

/// Kalah board: six pits and a store per side, sown counter-clockwise.
/// Slots run south pits 0-5, south store 6, north pits 7-12, north store 13.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [u8; SLOTS],
    to_move: Side,
    over: bool,
}

impl Board {
    /// Standard opening position: four stones in every pit, South to move.
    pub fn new() -> Self {
        let mut slots = [4u8; SLOTS];
        slots[SOUTH_STORE] = 0;
        slots[NORTH_STORE] = 0;
        Self { slots, to_move: Side::South, over: false }
    }

    /// Arbitrary position, mainly for tests and analysis. A position with an
    /// already-empty row counts as finished; stores are kept as given.
    pub fn from_pits(slots: [u8; SLOTS], to_move: Side) -> Self {
        let mut board = Self { slots, to_move, over: false };
        board.over = board.row_empty(Side::South) || board.row_empty(Side::North);
        board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Stones in `pit`; 0 for out-of-range indices rather than a panic.
    pub fn stones_at(&self, pit: usize) -> u8 {
        self.slots.get(pit).copied().unwrap_or(0)
    }

    pub fn store(&self, side: Side) -> u8 {
        self.slots[side.store()]
    }

    pub fn pits(&self, side: Side) -> &[u8] {
        let o = side.offset();
        &self.slots[o..o + PITS_PER_SIDE]
    }

    /// A pit is playable when it belongs to the side to move and holds
    /// stones. Anything else, stores and garbage indices included, is not.
    pub fn is_legal_move(&self, pit: usize) -> bool {
        if self.over {
            return false;
        }
        let o = self.to_move.offset();
        pit >= o && pit < o + PITS_PER_SIDE && self.slots[pit] > 0
    }

    /// Sow `pit` for the side to move: stones go counter-clockwise, skipping
    /// the opponent's store, then capture and extra-turn rules resolve. Who
    /// moves next is readable from `to_move` afterwards.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, BoardError> {
        if self.over {
            return Err(BoardError::GameOver);
        }
        if !self.is_legal_move(pit) {
            return Err(BoardError::IllegalMove(pit));
        }

        let mover = self.to_move;
        let skip = mover.opponent().store();
        let mut remaining = self.slots[pit];
        self.slots[pit] = 0;
        let mut idx = pit;
        while remaining > 0 {
            idx = (idx + 1) % SLOTS;
            if idx == skip {
                continue;
            }
            self.slots[idx] += 1;
            remaining -= 1;
        }

        let mut outcome = MoveOutcome::Normal;
        if idx == mover.store() {
            outcome = MoveOutcome::ExtraTurn;
        } else {
            let o = mover.offset();
            let mirror = (SLOTS - 2) - idx;
            if idx >= o && idx < o + PITS_PER_SIDE && self.slots[idx] == 1 && self.slots[mirror] > 0 {
                let banked = self.slots[mirror] + 1;
                self.slots[idx] = 0;
                self.slots[mirror] = 0;
                self.slots[mover.store()] += banked;
                outcome = MoveOutcome::Capture(banked);
            }
            self.to_move = mover.opponent();
        }

        if self.row_empty(Side::South) || self.row_empty(Side::North) {
            self.sweep();
            self.over = true;
            outcome = MoveOutcome::GameOver;
        }
        Ok(outcome)
    }

    /// Side with the fuller store, once the game is over. `None` while the
    /// game is running or on a drawn final position.
    pub fn winner(&self) -> Option<Side> {
        if !self.over {
            return None;
        }
        match self.slots[SOUTH_STORE].cmp(&self.slots[NORTH_STORE]) {
            Ordering::Greater => Some(Side::South),
            Ordering::Less => Some(Side::North),
            Ordering::Equal => None,
        }
    }

    fn row_empty(&self, side: Side) -> bool {
        self.pits(side).iter().all(|&n| n == 0)
    }

    fn sweep(&mut self) {
        for side in [Side::South, Side::North] {
            let o = side.offset();
            for pit in o..o + PITS_PER_SIDE {
                self.slots[side.store()] += self.slots[pit];
                self.slots[pit] = 0;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // North's pits print right to left so the rows line up as on a
        // physical board, sowing running counter-clockwise.
        write!(f, "      ")?;
        for pit in (Side::North.offset()..NORTH_STORE).rev() {
            write!(f, "{:>3}", self.slots[pit])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  [{:>3}]                  [{:>3}]",
            self.slots[NORTH_STORE], self.slots[SOUTH_STORE]
        )?;
        write!(f, "      ")?;
        for pit in Side::South.offset()..SOUTH_STORE {
            write!(f, "{:>3}", self.slots[pit])?;
        }
        writeln!(f)
    }
}
