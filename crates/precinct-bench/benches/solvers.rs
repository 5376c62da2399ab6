//! Criterion benchmarks for the individual nearest-station solvers.
//!
//! Every solver runs on the obstacle-free twin of the reference profile
//! so the three are timed on identical work.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use precinct_bench::{open_profile, reference_profile, stress_profile};
use precinct_core::Metric;
use precinct_solvers::{spatial_tree_with_index, KdTree, SolverKind};

fn bench_solvers_10k(c: &mut Criterion) {
    let scenario = open_profile(&reference_profile(42).unwrap()).unwrap();
    let mut group = c.benchmark_group("solve_10k");

    for metric in [Metric::Manhattan, Metric::Chebyshev, Metric::Euclidean] {
        for solver in SolverKind::ALL {
            if !solver.supports(metric) {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(solver.name(), metric.name()),
                &(solver, metric),
                |b, &(solver, metric)| {
                    b.iter(|| {
                        let map = solver
                            .solve(scenario.grid(), scenario.stations(), metric)
                            .unwrap();
                        black_box(&map);
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_bfs_walled_100k(c: &mut Criterion) {
    let scenario = stress_profile(42).unwrap();

    c.bench_function("bfs_walled_100k", |b| {
        b.iter(|| {
            let map = SolverKind::Bfs
                .solve(scenario.grid(), scenario.stations(), Metric::Manhattan)
                .unwrap();
            black_box(&map);
        });
    });
}

fn bench_kdtree_build_vs_reuse(c: &mut Criterion) {
    let scenario = open_profile(&stress_profile(42).unwrap()).unwrap();
    let tree = KdTree::from_stations(scenario.stations()).unwrap();

    c.bench_function("kdtree_build_64", |b| {
        b.iter(|| {
            let tree = KdTree::from_stations(scenario.stations()).unwrap();
            black_box(&tree);
        });
    });

    c.bench_function("kdtree_query_reused_100k", |b| {
        b.iter(|| {
            let map = spatial_tree_with_index(scenario.grid(), &tree, Metric::Euclidean);
            black_box(&map);
        });
    });
}

criterion_group!(
    benches,
    bench_solvers_10k,
    bench_bfs_walled_100k,
    bench_kdtree_build_vs_reuse
);
criterion_main!(benches);
