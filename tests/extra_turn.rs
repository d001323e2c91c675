use mancabot::board::{Board, Side};
use mancabot::search::engine::Searcher;
use mancabot::search::eval::Weights;
use std::time::Duration;

// South has exactly two moves. Sowing pit 1 or pit 3 banks nothing and
// leaves the same store and stone totals; only the pit-3 child keeps a pit
// primed to land in the store next turn.
fn two_move_board() -> Board {
    Board::from_pits([0, 1, 0, 2, 0, 0, 0, 4, 4, 4, 4, 4, 4, 0], Side::South)
}

#[test]
fn turn_weight_breaks_otherwise_equal_moves() {
    let mut s = Searcher::new(Side::South, Duration::from_millis(100));
    s.set_weights(Weights { mancala: 30, pit: 1, capture: 0, turn: 10 });
    let (pit, score) = s.search_depth(&two_move_board(), 1);
    assert_eq!(pit, Some(3), "the move keeping an extra-turn threat must win the tie");
    assert_eq!(score, -11);
}

#[test]
fn ties_keep_the_lowest_pit() {
    let mut s = Searcher::new(Side::South, Duration::from_millis(100));
    s.set_weights(Weights { mancala: 30, pit: 1, capture: 0, turn: 0 });
    let (pit, score) = s.search_depth(&two_move_board(), 1);
    assert_eq!(pit, Some(1), "with the turn term off both moves tie; first found wins");
    assert_eq!(score, -21);
}

#[test]
fn extra_turn_sow_wins_a_tempo() {
    // Pit 4 drops its last stone in the store and moves again; pit 5 banks
    // the same single stone but hands North the reply. Two plies of
    // lookahead make the difference visible.
    let b = Board::from_pits([1, 0, 0, 0, 2, 2, 0, 2, 2, 2, 2, 2, 2, 0], Side::South);
    let s = Searcher::new(Side::South, Duration::from_millis(100));
    let (pit, _) = s.search_depth(&b, 2);
    assert_eq!(pit, Some(4), "the extra-turn sow should be preferred");
}
