// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Load-analyze-report pipeline shared by the binaries

use super::Reporter;
use crate::analysis::{analyze, MeshReport};
use crate::config::AnalysisConfig;
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of analyzing one file
pub struct RunResult {
    pub report: MeshReport,
    /// Load plus analysis wall time
    pub duration: Duration,
}

/// Runner for one STL file
pub struct Runner {
    config: AnalysisConfig,
    export: Option<PathBuf>,
}

impl Runner {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            export: None,
        }
    }

    /// Also re-encode the loaded mesh to `path`
    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    /// Load `input` and run the configured measurements
    pub fn run(&self, input: &Path) -> Result<RunResult> {
        let start = Instant::now();

        let mesh = io::load_stl(input).with_context(|| format!("Failed to load STL: {}", input.display()))?;

        if let Some(export) = &self.export {
            io::export_stl(&mesh, export)
                .with_context(|| format!("Failed to export STL: {}", export.display()))?;
        }

        let report = analyze(&mesh, &self.config);
        Ok(RunResult {
            report,
            duration: start.elapsed(),
        })
    }

    /// Run and print, as colored text or as JSON
    pub fn run_and_report(&self, input: &Path, json: bool) -> Result<()> {
        let result = self.run(input)?;

        if json {
            let output = serde_json::to_string_pretty(&result.report).context("Failed to serialize report")?;
            println!("{}", output);
            return Ok(());
        }

        if let Some(volume) = &result.report.volume {
            if volume.box_volume <= 0.0 {
                Reporter::report_warning("bounding box is flat; volume estimate is 0");
            }
        }
        Reporter::report_mesh(&input.display().to_string(), &result.report, result.duration);
        Ok(())
    }
}
