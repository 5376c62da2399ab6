//! Precinct Quickstart: a complete coverage query from scratch.
//!
//! Demonstrates:
//!   1. Generating a reproducible random city layout
//!   2. Evaluating the covering radius with every solver and metric
//!   3. Reading the coverage gap that only BFS can see
//!   4. Cross-validating the solvers on an obstacle-free copy
//!   5. Comparing candidate station placements in parallel
//!
//! Run with:
//!   RUST_LOG=precinct_engine=debug cargo run --example quickstart

use precinct_core::{Cell, Metric};
use precinct_engine::{
    best_candidate, cross_validate, evaluate_batch, evaluate_coverage, Evaluator,
    EvaluatorConfig, RandomLayout, Scenario,
};
use precinct_solvers::SolverKind;
use precinct_space::{CityGrid, StationSet};
use tracing_subscriber::EnvFilter;

// ─── Layout parameters ──────────────────────────────────────────

const ROWS: usize = 24;
const COLS: usize = 40;
const STATIONS: usize = 6;
const OBSTACLE_RATIO: f64 = 0.25;
const SEED: u64 = 42;

// ─── Rendering ──────────────────────────────────────────────────

fn render(grid: &CityGrid, stations: &StationSet, gap: &[Cell]) {
    for r in 0..grid.rows() as i32 {
        let row: String = (0..grid.cols() as i32)
            .map(|c| {
                let cell = Cell::new(r, c);
                if stations.id_of(cell).is_some() {
                    'S'
                } else if gap.contains(&cell) {
                    '?'
                } else if grid.is_passable(cell).unwrap_or(false) {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("  {row}");
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Precinct Quickstart ===\n");

    // 1. Generate a layout.
    let scenario = Scenario::random(RandomLayout {
        rows: ROWS,
        cols: COLS,
        stations: STATIONS,
        obstacle_ratio: OBSTACLE_RATIO,
        seed: SEED,
    })?;
    let grid = scenario.grid();
    println!(
        "Grid: {}x{}, {} passable, {} blocked, {} stations (seed {})",
        grid.rows(),
        grid.cols(),
        grid.passable_count(),
        grid.blocked_count(),
        scenario.stations().len(),
        SEED,
    );

    // 2. Every solver under every metric it supports.
    println!("\nCovering radius:");
    let stations: Vec<Cell> = scenario.stations().cells().collect();
    for metric in Metric::ALL {
        for solver in SolverKind::ALL {
            if !solver.supports(metric) {
                continue;
            }
            let report = evaluate_coverage(grid, stations.iter().copied(), metric, solver)?;
            println!(
                "  {:<10} {:<13} radius={:>7.3}  gap={}",
                metric.name(),
                solver.name(),
                report.radius,
                report.gap.count,
            );
        }
    }

    // 3. What the walls hide.
    let report = scenario.evaluate()?;
    println!(
        "\nBFS ({}): {} cells reachable, {} walled off (shown as '?'):",
        scenario.metric(),
        report.covered,
        report.gap.count,
    );
    render(grid, scenario.stations(), &report.gap.cells);

    // 4. Cross-validate on the same stations without walls.
    let open = CityGrid::open(ROWS, COLS)?;
    let open_stations = StationSet::new(&open, stations.iter().copied())?;
    println!("\nCross-validation on an open grid:");
    for metric in Metric::ALL {
        let check = cross_validate(&open, &open_stations, metric, 1e-9)?;
        println!(
            "  {:<10} solvers={} agreed={} spread={:.2e}",
            metric.name(),
            check.outcomes.len(),
            check.agreed,
            check.radius_spread(),
        );
    }

    // 5. Try a few alternative placements in parallel.
    let candidates: Vec<Vec<Cell>> = (0..4)
        .map(|shift| {
            stations
                .iter()
                .map(|c| Cell::new(c.row, (c.col + shift * 3) % COLS as i32))
                .collect()
        })
        .collect();
    let config = EvaluatorConfig::new(Metric::Euclidean, SolverKind::SpatialTree);
    let evaluator = Evaluator::new(config)?;
    let results = evaluate_batch(&evaluator, &open, &candidates)?;
    println!("\nCandidate placements (euclidean, open grid):");
    for (i, eval) in results.iter().enumerate() {
        println!(
            "  #{i}: radius={:.3}  solve={}μs",
            eval.report.radius, eval.metrics.solve_us,
        );
    }
    if let Some(best) = best_candidate(&results) {
        println!("Best: #{best}");
    }

    println!("\nDone.");
    Ok(())
}
