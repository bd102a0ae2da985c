// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshprobe CLI: area, bounding box and Monte Carlo volume of a binary STL

use anyhow::Result;
use clap::Parser;
use meshprobe::cli::{Reporter, Runner};
use meshprobe::AnalysisConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshprobe")]
#[command(about = "Measure a binary STL: surface area, bounding box and estimated volume", long_about = None)]
struct Cli {
    /// Input binary STL file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Monte Carlo sample count
    #[arg(short, long)]
    samples: Option<u64>,

    /// Sampler seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for the area sum and parallel sampling (0 = all cores)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Spread Monte Carlo samples across threads
    #[arg(long)]
    parallel_sampling: bool,

    /// Sum areas on a single thread
    #[arg(long)]
    sequential: bool,

    /// Skip the volume estimate
    #[arg(long)]
    no_volume: bool,

    /// Parallel-ray determinant threshold
    #[arg(long)]
    epsilon: Option<f32>,

    /// Configuration file (defaults to ./meshprobe.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the loaded mesh back out as binary STL
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)?.with_env_overrides(|key| std::env::var(key).ok())?,
            None => AnalysisConfig::load()?,
        };

        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        config.parallel_sampling |= self.parallel_sampling;
        if self.sequential {
            config.parallel_area = false;
        }
        if self.no_volume {
            config.estimate_volume = false;
        }
        Ok(config)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    log::debug!("configuration: {:?}", config);

    let mut runner = Runner::new(config);
    if let Some(export) = &cli.export {
        runner = runner.with_export(export);
    }
    runner.run_and_report(&cli.input, cli.json)
}
