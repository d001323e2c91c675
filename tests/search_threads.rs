#[test]
fn threads_param_propagates() {
    use mancabot::board::Side;
    use mancabot::search::engine::Searcher;
    use std::time::Duration;
    let mut s = Searcher::new(Side::South, Duration::from_millis(50));
    s.set_threads(4);
    assert_eq!(s.threads(), 4, "threads param did not propagate to searcher");
    s.set_threads(0);
    assert_eq!(s.threads(), 1, "worker pool can never be empty");
}

#[test]
fn single_worker_still_finds_a_move() {
    use mancabot::board::{Board, Side};
    use mancabot::search::engine::Searcher;
    use std::time::Duration;
    let b = Board::new();
    let mut s = Searcher::new(Side::South, Duration::from_millis(100));
    s.set_threads(1);
    let pit = s.choose_move(&b).expect("single-threaded search found nothing");
    assert!(b.is_legal_move(pit));
}

#[test]
fn more_time_searches_deeper() {
    use mancabot::board::{Board, Side};
    use mancabot::search::engine::Searcher;
    use std::time::Duration;
    let b = Board::new();
    let short = Searcher::new(Side::South, Duration::from_millis(50));
    let long = Searcher::new(Side::South, Duration::from_millis(500));
    let shallow = short.search(&b).expect("no result under the short budget");
    let deep = long.search(&b).expect("no result under the long budget");
    assert!(
        deep.depth >= shallow.depth,
        "expected at least depth {} with 10x the budget, got {}",
        shallow.depth,
        deep.depth
    );
}
