// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the benchmark harness.

use cellfind_index::{Cell, Point};
use thiserror::Error;

/// Everything that can stop a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The two strategies returned different cells for the same query.
    #[error(
        "lookup mismatch at query {index} {point:?}: scan returned {scan:?}, k-d tree returned {kdtree:?}"
    )]
    Mismatch {
        /// Position of the query in the point list.
        index: usize,
        /// The query point.
        point: Point,
        /// Cell reported by the exhaustive scan.
        scan: Cell,
        /// Cell reported by the k-d tree.
        kdtree: Cell,
    },

    /// The two runs did not answer the same number of queries.
    #[error("result count mismatch: scan answered {scan} queries, k-d tree answered {kdtree}")]
    LengthMismatch {
        /// Results collected from the scan.
        scan: usize,
        /// Results collected from the k-d tree.
        kdtree: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a result file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the harness.
pub type Result<T> = std::result::Result<T, BenchError>;
