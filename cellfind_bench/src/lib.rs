// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellfind Bench: times the exhaustive scan against the k-d tree.
//!
//! A run covers the disc of a given radius with square cells, queries every
//! cell center with both strategies, and refuses to report timings unless the
//! two strategies returned the same cell for every query.
//!
//! ```no_run
//! use cellfind_bench::{BenchConfig, run};
//!
//! let config = BenchConfig {
//!     grid_size: 50,
//!     iterations: 5,
//!     ..BenchConfig::default()
//! };
//! let results = run(&config)?;
//! assert_eq!(results.len(), 2);
//! # Ok::<(), cellfind_bench::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod report;
pub mod runner;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use runner::{BenchmarkResult, BenchmarkRunner, cross_validate};

use generate::{PointGenerator, centers, circle_cells};
use report::BenchReport;

/// Run both strategies as configured, cross-validate them, print the table
/// and write the JSON and CSV reports into `config.output_dir`.
pub fn run(config: &BenchConfig) -> Result<Vec<BenchmarkResult>> {
    config.validate()?;
    log::debug!("configuration: {}", serde_json::to_string(config)?);
    log::info!(
        "disc radius {} cm, {}x{} grid, cell size {} cm, {} iterations",
        config.radius,
        config.grid_size,
        config.grid_size,
        config.cell_size(),
        config.iterations
    );

    let cells = circle_cells(config.radius, config.grid_size);
    let mut points = centers(&cells);
    log::info!("generated {} cells inside the disc", cells.len());
    if !config.no_shuffle {
        PointGenerator::new(config.radius, config.seed).shuffle(&mut points);
        log::info!("shuffled query points with seed {}", config.seed);
    }

    let runner = BenchmarkRunner::new(cells, config.iterations);
    let scan = runner.run_scan(&points);
    let kdtree = runner.run_kdtree(&points);
    cross_validate(&points, &scan, &kdtree)?;

    let results = vec![scan, kdtree];
    report::print_results(&results)?;

    std::fs::create_dir_all(&config.output_dir)?;
    let summary = BenchReport::new(config, points.len(), &results);
    report::save_json(&config.output_dir.join(report::JSON_FILE), &summary)?;
    report::save_csv(&config.output_dir.join(report::CSV_FILE), &results)?;
    Ok(results)
}
