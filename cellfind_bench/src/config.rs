// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::error::{BenchError, Result};

/// Settings for one benchmark run.
///
/// The region is the disc of `radius` around the origin, covered by a
/// `grid_size × grid_size` partition of its bounding square.
#[derive(Clone, Debug, Parser, Serialize)]
#[command(
    name = "cellfind-bench",
    version,
    about = "Compare exhaustive scan and k-d tree point-in-cell lookups"
)]
pub struct BenchConfig {
    /// Radius of the disc, in cm.
    #[arg(long, default_value_t = 15.0)]
    pub radius: f64,

    /// Cells per side of the bounding square.
    #[arg(long, default_value_t = 100)]
    pub grid_size: u32,

    /// Timed passes over the query set per strategy.
    #[arg(long, default_value_t = 20)]
    pub iterations: u32,

    /// Seed for shuffling the query points.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Directory receiving `benchmark_results.json` and `benchmark_results.csv`.
    #[arg(long, default_value = ".")]
    #[serde(skip)]
    pub output_dir: PathBuf,

    /// Query the cell centers in grid order instead of a shuffled order.
    #[arg(long)]
    pub no_shuffle: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            grid_size: 100,
            iterations: 20,
            seed: 42,
            output_dir: PathBuf::from("."),
            no_shuffle: false,
        }
    }
}

impl BenchConfig {
    /// Side length of one cell.
    pub fn cell_size(&self) -> f64 {
        2.0 * self.radius / f64::from(self.grid_size)
    }

    /// Reject settings that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BenchError::InvalidConfig(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        if self.grid_size == 0 {
            return Err(BenchError::InvalidConfig(
                "grid size must be at least 1".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
