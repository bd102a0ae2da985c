// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh measurements driven by an [`AnalysisConfig`]

use crate::config::AnalysisConfig;
use crate::utils::pool;
use crate::geometry::{
    total_area, total_area_parallel, BoundingBox, Intersector, Mesh, VolumeEstimate, VolumeEstimator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Everything measured for one mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshReport {
    pub triangle_count: usize,
    pub surface_area: f64,
    pub bbox: BoundingBox,
    /// Present when the volume estimate was enabled
    pub volume: Option<VolumeEstimate>,
    /// Seed the sampler actually used
    pub seed: Option<u64>,
    pub area_time: Duration,
    pub volume_time: Option<Duration>,
}

/// Run the measurements `config` enables
pub fn analyze(mesh: &Mesh, config: &AnalysisConfig) -> MeshReport {
    let start = Instant::now();
    let surface_area = if config.parallel_area {
        total_area_parallel(mesh, config.workers)
    } else {
        total_area(mesh)
    };
    let area_time = start.elapsed();
    log::debug!("surface area {:.6} in {:.2?}", surface_area, area_time);

    let bbox = mesh.bounding_box();

    let (volume, seed, volume_time) = if config.estimate_volume {
        let seed = config.seed.unwrap_or_else(rand::random);
        let start = Instant::now();
        let estimate = run_estimate(mesh, bbox, config, seed);
        let elapsed = start.elapsed();
        log::debug!(
            "volume {:.6} ± {:.6} from {} samples (seed {}) in {:.2?}",
            estimate.volume,
            estimate.standard_error(),
            estimate.samples,
            seed,
            elapsed
        );
        (Some(estimate), Some(seed), Some(elapsed))
    } else {
        (None, None, None)
    };

    MeshReport {
        triangle_count: mesh.triangle_count(),
        surface_area,
        bbox,
        volume,
        seed,
        area_time,
        volume_time,
    }
}

fn run_estimate(mesh: &Mesh, bbox: BoundingBox, config: &AnalysisConfig, seed: u64) -> VolumeEstimate {
    let estimator = VolumeEstimator::new(mesh, bbox).with_intersector(Intersector::with_epsilon(config.epsilon));
    if config.parallel_sampling {
        pool::install(config.workers, || estimator.estimate_parallel(config.samples, seed))
    } else {
        estimator.estimate(config.samples, &mut StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;

    #[test]
    fn test_info_only_skips_volume() {
        let mesh = Primitive::unit_cube().to_mesh();
        let report = analyze(&mesh, &AnalysisConfig::info_only());

        assert_eq!(report.triangle_count, 12);
        assert!((report.surface_area - 6.0).abs() < 1e-5);
        assert!(report.volume.is_none());
        assert!(report.seed.is_none());
    }

    #[test]
    fn test_seeded_report_is_reproducible() {
        let mesh = Primitive::unit_cube().to_mesh();
        let config = AnalysisConfig {
            samples: 2_000,
            seed: Some(11),
            ..AnalysisConfig::default()
        };

        let a = analyze(&mesh, &config);
        let b = analyze(&mesh, &config);
        assert_eq!(a.volume, b.volume);
        assert_eq!(a.seed, Some(11));
    }

    #[test]
    fn test_parallel_sampling_close_to_truth() {
        let mesh = Primitive::unit_cube().to_mesh();
        let config = AnalysisConfig {
            samples: 50_000,
            seed: Some(5),
            parallel_sampling: true,
            ..AnalysisConfig::default()
        };
        let volume = analyze(&mesh, &config).volume.unwrap().volume;
        assert!((volume - 1.0).abs() < 0.05, "volume {}", volume);
    }

    #[test]
    fn test_parallel_sampling_same_for_any_worker_count() {
        let mesh = Primitive::sphere(1.0, 16).to_mesh();
        let run = |workers: usize| {
            let config = AnalysisConfig {
                samples: 3 * 4096 + 17,
                seed: Some(21),
                parallel_sampling: true,
                workers,
                ..AnalysisConfig::default()
            };
            analyze(&mesh, &config).volume.unwrap()
        };

        let single = run(1);
        assert_eq!(single, run(4));
        assert_eq!(single, run(0));
    }

    #[test]
    fn test_report_serializes() {
        let mesh = Primitive::unit_cube().to_mesh();
        let report = analyze(&mesh, &AnalysisConfig::info_only());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"triangle_count\":12"));
    }
}
