// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console report and JSON/CSV export of benchmark results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::runner::BenchmarkResult;

/// File name of the JSON report inside the output directory.
pub const JSON_FILE: &str = "benchmark_results.json";
/// File name of the CSV report inside the output directory.
pub const CSV_FILE: &str = "benchmark_results.csv";

const CSV_HEADER: [&str; 5] = [
    "Method",
    "Total_Time_ms",
    "Avg_Time_Per_Iteration_ms",
    "Memory_KB",
    "Points_Searched",
];

/// Shape of the JSON report.
#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    /// Settings the run used.
    pub configuration: Configuration,
    /// One row per strategy.
    pub results: Vec<ResultRow>,
    /// Comparison of the two strategies, present when exactly two ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

/// `configuration` section of the JSON report.
#[derive(Clone, Debug, Serialize)]
pub struct Configuration {
    /// Cells per side of the bounding square.
    pub grid_size: u32,
    /// Lower coordinate bound, in cm.
    pub min_coordinate_cm: f64,
    /// Upper coordinate bound, in cm.
    pub max_coordinate_cm: f64,
    /// Side length of one cell, in cm.
    pub cell_size_cm: f64,
    /// Queries per pass.
    pub num_test_points: usize,
    /// Timed passes per strategy.
    pub iterations: u32,
    /// Seed used for the query order.
    pub seed: u64,
}

/// One entry of the `results` section of the JSON report.
#[derive(Clone, Debug, Serialize)]
pub struct ResultRow {
    /// Strategy name.
    pub method: String,
    /// Time to build the locator.
    pub build_time_ms: f64,
    /// Time for all timed passes.
    pub total_time_ms: f64,
    /// Time per pass.
    pub avg_time_per_iteration_ms: f64,
    /// Memory estimate in KiB.
    pub memory_kb: f64,
    /// Queries answered across all passes.
    pub total_points_searched: usize,
}

/// `analysis` section of the JSON report.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    /// First strategy's total time over the second's.
    pub speedup_factor: f64,
    /// Name of the faster strategy.
    pub faster_method: String,
}

impl From<&BenchmarkResult> for ResultRow {
    fn from(r: &BenchmarkResult) -> Self {
        Self {
            method: r.method.clone(),
            build_time_ms: r.build_time_ms,
            total_time_ms: r.total_time_ms,
            avg_time_per_iteration_ms: r.avg_time_ms,
            memory_kb: r.memory_kb(),
            total_points_searched: r.points_searched(),
        }
    }
}

impl BenchReport {
    /// Assemble the report for a run of `num_points` queries.
    pub fn new(config: &BenchConfig, num_points: usize, results: &[BenchmarkResult]) -> Self {
        let analysis = match results {
            [baseline, contender] => Some(Analysis {
                speedup_factor: speedup(baseline, contender),
                faster_method: if contender.total_time_ms < baseline.total_time_ms {
                    contender.method.clone()
                } else {
                    baseline.method.clone()
                },
            }),
            _ => None,
        };
        Self {
            configuration: Configuration {
                grid_size: config.grid_size,
                min_coordinate_cm: -config.radius,
                max_coordinate_cm: config.radius,
                cell_size_cm: config.cell_size(),
                num_test_points: num_points,
                iterations: config.iterations,
                seed: config.seed,
            },
            results: results.iter().map(ResultRow::from).collect(),
            analysis,
        }
    }
}

fn speedup(baseline: &BenchmarkResult, contender: &BenchmarkResult) -> f64 {
    if contender.total_time_ms > 0.0 {
        baseline.total_time_ms / contender.total_time_ms
    } else {
        f64::INFINITY
    }
}

/// Write the human-readable result table to `out`.
pub fn write_results<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    let rule = "=".repeat(70);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "BENCHMARK RESULTS")?;
    writeln!(out, "{rule}")?;
    for r in results {
        writeln!(out, "\nMethod: {}", r.method)?;
        writeln!(out, "  Build Time: {:.2} ms", r.build_time_ms)?;
        writeln!(out, "  Total Time: {:.2} ms", r.total_time_ms)?;
        writeln!(out, "  Average Time per Iteration: {:.3} ms", r.avg_time_ms)?;
        writeln!(out, "  Memory Used: {:.2} KB", r.memory_kb())?;
        writeln!(out, "  Total Points Searched: {}", r.points_searched())?;
    }
    if let [baseline, contender] = results {
        writeln!(out, "\n{}", "-".repeat(70))?;
        writeln!(
            out,
            "SPEEDUP ({} vs {}): {:.2}x",
            baseline.method,
            contender.method,
            speedup(baseline, contender)
        )?;
        writeln!(out, "{rule}")?;
    }
    Ok(())
}

/// Print the result table to stdout.
pub fn print_results(results: &[BenchmarkResult]) -> io::Result<()> {
    write_results(&mut io::stdout().lock(), results)
}

/// Write `report` as pretty-printed JSON to `path`.
pub fn save_json(path: &Path, report: &BenchReport) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    log::info!("results saved to {}", path.display());
    Ok(())
}

/// Write one CSV row per result to `path`.
pub fn save_csv(path: &Path, results: &[BenchmarkResult]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(CSV_HEADER)?;
    for r in results {
        w.write_record([
            r.method.clone(),
            format!("{:.2}", r.total_time_ms),
            format!("{:.3}", r.avg_time_ms),
            format!("{:.2}", r.memory_kb()),
            r.points_searched().to_string(),
        ])?;
    }
    w.flush()?;
    log::info!("CSV saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(method: &str, total: f64) -> BenchmarkResult {
        BenchmarkResult {
            method: method.into(),
            build_time_ms: 0.5,
            total_time_ms: total,
            avg_time_ms: total / 4.0,
            memory_bytes: 2048,
            iterations: 4,
            points_per_iteration: 10,
            found_cells: Vec::new(),
        }
    }

    #[test]
    fn report_includes_analysis_for_two_results() {
        let results = [result("Regular Search", 80.0), result("KD-Tree Search", 4.0)];
        let report = BenchReport::new(&BenchConfig::default(), 10, &results);
        let analysis = report.analysis.as_ref().expect("two results have an analysis");
        assert_eq!(analysis.speedup_factor, 20.0);
        assert_eq!(analysis.faster_method, "KD-Tree Search");
        assert_eq!(report.results[0].total_points_searched, 40);
        assert_eq!(report.results[1].memory_kb, 2.0);
        assert_eq!(report.configuration.min_coordinate_cm, -15.0);

        let single = BenchReport::new(&BenchConfig::default(), 10, &results[..1]);
        assert!(single.analysis.is_none());
        let json = serde_json::to_value(&single).unwrap();
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn table_mentions_every_method_and_speedup() {
        let results = [result("Regular Search", 9.0), result("KD-Tree Search", 3.0)];
        let mut buf = Vec::new();
        write_results(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Method: Regular Search"));
        assert!(text.contains("Method: KD-Tree Search"));
        assert!(text.contains("Memory Used: 2.00 KB"));
        assert!(text.contains("SPEEDUP (Regular Search vs KD-Tree Search): 3.00x"));
    }
}
