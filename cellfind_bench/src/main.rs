// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `cellfind-bench`: compare exhaustive scan and k-d tree lookups.

use std::process::ExitCode;

use cellfind_bench::{BenchConfig, run};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = BenchConfig::parse();
    match run(&config) {
        Ok(_) => {
            log::info!("benchmark complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
