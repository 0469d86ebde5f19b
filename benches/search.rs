use criterion::{black_box, criterion_group, criterion_main, Criterion};
use connect_four_search::ai::BasicEvaluator;
use connect_four_search::game::GameState;
use connect_four_search::search::{Algorithm, NodeCounter, Search};

fn criterion_benchmark(c: &mut Criterion) {
    let search: Search = Search::default();
    let opening = GameState::initial();
    let midgame = GameState::from_moves(&[3, 3, 2, 4, 4, 2, 5]).unwrap();

    for (label, state) in [("opening", opening), ("midgame", midgame)] {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let id = format!("{} {label} depth 4", algorithm.name());
            c.bench_function(&id, |b| {
                b.iter(|| {
                    let counter = NodeCounter::new();
                    search.run(algorithm, black_box(&state), black_box(4), &BasicEvaluator, &counter)
                })
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
