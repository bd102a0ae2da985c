// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshprobe info: triangle count, area and bounding box only

use clap::Parser;
use meshprobe::cli::{Reporter, Runner};
use meshprobe::AnalysisConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshprobe-info")]
#[command(about = "Print triangle count, surface area and bounding box of a binary STL", long_about = None)]
struct Cli {
    /// Input binary STL file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let runner = Runner::new(AnalysisConfig::info_only());
    if let Err(e) = runner.run_and_report(&cli.input, cli.json) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
