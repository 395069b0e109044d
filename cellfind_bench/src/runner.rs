// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed runs of a lookup strategy and cross-validation of their answers.

use std::hint::black_box;
use std::time::Instant;

use cellfind_index::{Cell, KdTree, Locator, Point, Scan, entries_from_cells};
use serde::Serialize;

use crate::error::{BenchError, Result};

/// Timing, memory and answers of one strategy over one query set.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    /// Strategy name as reported by [`Locator::name`].
    pub method: String,
    /// Time spent building the locator.
    pub build_time_ms: f64,
    /// Time spent on all timed passes.
    pub total_time_ms: f64,
    /// `total_time_ms` divided by the number of passes.
    pub avg_time_ms: f64,
    /// Estimated memory held by the locator.
    pub memory_bytes: usize,
    /// Number of timed passes.
    pub iterations: u32,
    /// Queries per pass.
    pub points_per_iteration: usize,
    /// Answer to every query of one untimed pass, in query order.
    #[serde(skip)]
    pub found_cells: Vec<Cell>,
}

impl BenchmarkResult {
    /// Memory estimate in KiB.
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes as f64 / 1024.0
    }

    /// Queries answered across all timed passes.
    pub fn points_searched(&self) -> usize {
        self.iterations as usize * self.points_per_iteration
    }
}

/// Runs each strategy over the same cell set.
#[derive(Clone, Debug)]
pub struct BenchmarkRunner {
    cells: Vec<Cell>,
    iterations: u32,
}

impl BenchmarkRunner {
    /// Create a runner over `cells` doing `iterations` timed passes per strategy.
    pub fn new(cells: Vec<Cell>, iterations: u32) -> Self {
        Self { cells, iterations }
    }

    /// The cells every strategy is built from.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Benchmark the exhaustive scan.
    pub fn run_scan(&self, points: &[Point]) -> BenchmarkResult {
        self.run(&mut Scan::default(), points)
    }

    /// Benchmark the k-d tree.
    pub fn run_kdtree(&self, points: &[Point]) -> BenchmarkResult {
        self.run(&mut KdTree::new(), points)
    }

    /// Build `locator` from the runner's cells, time the query passes, then
    /// record one untimed pass of answers.
    pub fn run<L: Locator>(&self, locator: &mut L, points: &[Point]) -> BenchmarkResult {
        let entries = entries_from_cells(&self.cells);
        let start = Instant::now();
        locator.build(&entries);
        let build_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let mut found = 0_usize;
        let start = Instant::now();
        for _ in 0..self.iterations {
            for p in points {
                if !locator.search(black_box(*p)).is_sentinel() {
                    found += 1;
                }
            }
        }
        let total_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        let _ = black_box(found);

        let found_cells: Vec<Cell> = points.iter().map(|p| locator.search(*p)).collect();
        log::info!(
            "{}: {} queries x {} passes in {:.2} ms (build {:.2} ms)",
            locator.name(),
            points.len(),
            self.iterations,
            total_time_ms,
            build_time_ms
        );

        BenchmarkResult {
            method: locator.name().to_owned(),
            build_time_ms,
            total_time_ms,
            avg_time_ms: total_time_ms / f64::from(self.iterations.max(1)),
            memory_bytes: locator.memory_bytes(),
            iterations: self.iterations,
            points_per_iteration: points.len(),
            found_cells,
        }
    }
}

/// Check that both runs answered every query with the same cell.
///
/// Reports the first divergence; `points` is only used to describe it.
pub fn cross_validate(
    points: &[Point],
    scan: &BenchmarkResult,
    kdtree: &BenchmarkResult,
) -> Result<()> {
    if scan.found_cells.len() != kdtree.found_cells.len() {
        return Err(BenchError::LengthMismatch {
            scan: scan.found_cells.len(),
            kdtree: kdtree.found_cells.len(),
        });
    }
    let diverged = scan
        .found_cells
        .iter()
        .zip(&kdtree.found_cells)
        .position(|(a, b)| a != b);
    if let Some(index) = diverged {
        return Err(BenchError::Mismatch {
            index,
            point: points.get(index).copied().unwrap_or_default(),
            scan: scan.found_cells[index],
            kdtree: kdtree.found_cells[index],
        });
    }
    log::debug!("cross-validated {} answers", scan.found_cells.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{centers, circle_cells};

    #[test]
    fn both_runs_agree_on_circle_centers() {
        let cells = circle_cells(5.0, 24);
        let points = centers(&cells);
        let runner = BenchmarkRunner::new(cells.clone(), 2);
        let scan = runner.run_scan(&points);
        let tree = runner.run_kdtree(&points);
        assert_eq!(scan.found_cells, cells);
        assert!(cross_validate(&points, &scan, &tree).is_ok());
        assert_eq!(scan.points_searched(), 2 * points.len());
        assert_eq!(scan.method, "Regular Search");
        assert_eq!(tree.method, "KD-Tree Search");
    }

    #[test]
    fn divergence_is_reported_with_its_position() {
        let cells = circle_cells(2.0, 4);
        let points = centers(&cells);
        let runner = BenchmarkRunner::new(cells, 1);
        let scan = runner.run_scan(&points);
        let mut tree = runner.run_kdtree(&points);
        tree.found_cells[1] = Cell::SENTINEL;
        match cross_validate(&points, &scan, &tree) {
            Err(BenchError::Mismatch { index, kdtree, .. }) => {
                assert_eq!(index, 1);
                assert!(kdtree.is_sentinel());
            }
            other => panic!("expected a mismatch, got {other:?}"),
        }

        let _ = tree.found_cells.pop();
        assert!(matches!(
            cross_validate(&points, &scan, &tree),
            Err(BenchError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn memory_estimates_follow_entry_count() {
        let cells = circle_cells(3.0, 6);
        let runner = BenchmarkRunner::new(cells.clone(), 1);
        assert_eq!(runner.cells(), cells.as_slice());
        let scan = runner.run_scan(&[]);
        assert_eq!(scan.memory_bytes, cells.len() * size_of::<Cell>());
        assert!(scan.found_cells.is_empty());
        assert!(scan.memory_kb() > 0.0);
    }
}
