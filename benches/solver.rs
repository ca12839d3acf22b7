//! Benchmarks for the A* solver.
//!
//! - **`solve`**: solvable 3x3 fixtures of increasing depth.
//! - **`unsolvable`**: a 3x3 board whose twin is four moves from the goal.
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slide_solver::{Board, Solver};

const FIXTURES: [(&str, &str); 4] = [
    ("3x3-04", include_str!("../puzzles/puzzle3x3-04.txt")),
    ("3x3-10", include_str!("../puzzles/puzzle3x3-10.txt")),
    ("3x3-14", include_str!("../puzzles/puzzle3x3-14.txt")),
    ("3x3-20", include_str!("../puzzles/puzzle3x3-20.txt")),
];

fn bench_solve(c: &mut Criterion) {
    for (name, text) in FIXTURES {
        let board: Board = text.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", name), &board, |b, board| {
            b.iter(|| Solver::new(hint::black_box(board.clone())))
        });
    }
}

fn bench_unsolvable(c: &mut Criterion) {
    let board: Board = include_str!("../puzzles/puzzle3x3-unsolvable.txt")
        .parse()
        .unwrap();
    c.bench_function("unsolvable", |b| {
        b.iter(|| Solver::new(hint::black_box(board.clone())))
    });
}

criterion_group!(benches, bench_solve, bench_unsolvable);
criterion_main!(benches);
