//! Integration test: end-to-end coverage queries.
//!
//! Exercises the public engine surface on generated layouts: single
//! queries, batch evaluation, cross-validation, and seeded scenarios.
//! Every check compares two independent routes to the same answer.

use precinct_core::{Cell, CoverageError, Metric};
use precinct_engine::{
    cross_validate, evaluate_batch, evaluate_coverage, Evaluator, EvaluatorConfig, RandomLayout,
    Scenario,
};
use precinct_solvers::SolverKind;
use precinct_test_utils::{
    arb_grid_metric, arb_metric, arb_open_layout, arb_walled_layout, assert_radius_eq,
    open_with_stations, station_everywhere,
};
use proptest::prelude::*;

// ── Generated scenarios ─────────────────────────────────────────────

#[test]
fn random_scenarios_cross_validate_without_walls() {
    for seed in 0..8 {
        let scenario = Scenario::random(RandomLayout {
            rows: 18,
            cols: 25,
            stations: 5,
            obstacle_ratio: 0.0,
            seed,
        })
        .unwrap();
        for metric in Metric::ALL {
            let check =
                cross_validate(scenario.grid(), scenario.stations(), metric, 1e-9).unwrap();
            assert!(check.agreed, "seed {seed} {metric}");
        }
    }
}

#[test]
fn walls_only_lengthen_or_disconnect() {
    for seed in 0..8 {
        let scenario = Scenario::random(RandomLayout {
            rows: 20,
            cols: 20,
            stations: 3,
            obstacle_ratio: 0.35,
            seed,
        })
        .unwrap()
        .with_metric(Metric::Manhattan);
        let graph = scenario.evaluate().unwrap();
        let geo = scenario
            .clone()
            .with_solver(SolverKind::BruteForce)
            .evaluate()
            .unwrap();
        assert!(geo.gap.is_empty());
        assert_eq!(graph.covered + graph.gap.count, geo.covered, "seed {seed}");
    }
}

#[test]
fn walled_scenarios_keep_geometric_solvers_in_step() {
    let scenario = Scenario::random(RandomLayout {
        seed: 7,
        ..RandomLayout::default()
    })
    .unwrap();
    let check =
        cross_validate(scenario.grid(), scenario.stations(), Metric::Chebyshev, 0.0).unwrap();
    assert!(check.agreed);
    let bfs = check.report(SolverKind::Bfs).unwrap();
    let brute = check.report(SolverKind::BruteForce).unwrap();
    assert!(bfs.covered <= brute.covered);
}

// ── Known answers ───────────────────────────────────────────────────

#[test]
fn every_cell_a_station() {
    let (grid, _) = open_with_stations(6, 6, &[(0, 0)]);
    let stations = station_everywhere(&grid);
    for solver in SolverKind::ALL {
        let report =
            evaluate_coverage(&grid, stations.cells(), Metric::Chebyshev, solver).unwrap();
        assert_eq!(report.radius, 0.0, "{solver}");
        assert!(report.is_fully_covered_by(0.0));
    }
}

#[test]
fn station_outside_grid_is_out_of_range() {
    let (grid, _) = open_with_stations(3, 3, &[(0, 0)]);
    let err = evaluate_coverage(&grid, [Cell::new(3, 0)], Metric::Manhattan, SolverKind::Bfs)
        .unwrap_err();
    assert!(matches!(err, CoverageError::Grid(_)));
    assert!(err.to_string().contains("(3, 0)"));
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_equals_sequential(
        (grid, stations) in arb_walled_layout(12, 6, 0.2),
        metric in arb_grid_metric(),
        workers in 1usize..6,
    ) {
        let evaluator = Evaluator::new(
            EvaluatorConfig::new(metric, SolverKind::Bfs).with_worker_count(workers),
        ).unwrap();
        let all: Vec<Cell> = stations.cells().collect();
        let candidates: Vec<Vec<Cell>> = (1..=all.len()).map(|k| all[..k].to_vec()).collect();

        let batch = evaluate_batch(&evaluator, &grid, &candidates).unwrap();
        prop_assert_eq!(batch.len(), candidates.len());
        for (eval, candidate) in batch.iter().zip(&candidates) {
            let seq = evaluate_coverage(&grid, candidate.iter().copied(), metric, SolverKind::Bfs)
                .unwrap();
            prop_assert_eq!(&eval.report, &seq);
        }
        // Each candidate extends the previous one.
        for pair in batch.windows(2) {
            prop_assert!(pair[1].report.gap.count <= pair[0].report.gap.count);
        }
    }

    #[test]
    fn open_grids_always_cross_validate(
        (grid, stations) in arb_open_layout(16, 8),
        metric in arb_metric(),
    ) {
        let check = cross_validate(&grid, &stations, metric, 1e-9).unwrap();
        prop_assert!(check.agreed);
        let first = check.outcomes[0].1.radius;
        for (_, report) in &check.outcomes {
            assert_radius_eq(metric, report.radius, first);
        }
    }

    #[test]
    fn reported_radius_covers_everything_reachable(
        (grid, stations) in arb_walled_layout(12, 5, 0.3),
        metric in arb_grid_metric(),
    ) {
        let report = evaluate_coverage(&grid, stations.cells(), metric, SolverKind::Bfs).unwrap();
        prop_assert_eq!(report.covered + report.gap.count, grid.passable_count());
        prop_assert_eq!(report.gap.cells.len(), report.gap.count);
        prop_assert_eq!(report.is_fully_covered_by(report.radius), report.gap.is_empty());
    }
}
