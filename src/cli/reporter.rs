// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::analysis::MeshReport;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print the measurements for one file
    pub fn report_mesh(file: &str, report: &MeshReport, total_time: Duration) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(60).bright_black());

        println!("  {:<16} {}", "Triangles:".bright_black(), report.triangle_count);
        println!(
            "  {:<16} {:.6} units²",
            "Surface area:".bright_black(),
            report.surface_area
        );

        let (min, max) = (report.bbox.min, report.bbox.max);
        println!("  {}", "Bounding box:".bright_black());
        println!("    min = ({:.6}, {:.6}, {:.6})", min.x, min.y, min.z);
        println!("    max = ({:.6}, {:.6}, {:.6})", max.x, max.y, max.z);

        if let Some(volume) = &report.volume {
            println!(
                "  {:<16} {} units³ {} ({} samples)",
                "Volume:".bright_black(),
                format!("{:.6}", volume.volume).green(),
                format!("± {:.6}", volume.standard_error()).bright_black(),
                volume.samples
            );
            if let Some(seed) = report.seed {
                println!("  {:<16} {}", "Seed:".bright_black(), seed);
            }
        }

        println!("\n{}", "Performance:".bold());
        println!(
            "  {} {}",
            "Area:".bright_black(),
            Self::format_duration(report.area_time).cyan()
        );
        if let Some(volume_time) = report.volume_time {
            println!(
                "  {} {}",
                "Volume:".bright_black(),
                Self::format_duration(volume_time).cyan()
            );
        }
        println!(
            "  {} {}",
            "Total:".bright_black(),
            Self::format_duration(total_time).cyan()
        );
    }

    /// Report an error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Report a warning
    pub fn report_warning(message: &str) {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    }

    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.4}s", micros as f64 / 1_000_000.0)
        }
    }
}
