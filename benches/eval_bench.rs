use criterion::{criterion_group, criterion_main, Criterion, black_box};
use mancabot::board::{Board, Side};
use mancabot::search::eval::{evaluate, Weights};

fn bench_eval(c: &mut Criterion) {
    let b = Board::new();
    let w = Weights::default();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = evaluate(black_box(&b), Side::South, &w);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
