// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Monte Carlo volume estimation by ray-parity point classification
//!
//! Points are drawn uniformly in the bounding box and classified inside when
//! a ray from them crosses the surface an odd number of times. The estimate is
//! only meaningful for closed (watertight) meshes: an open surface breaks the
//! parity rule. The ray direction is fixed, so samples whose ray runs through
//! a shared edge or vertex are double counted; with random sample positions
//! that set has measure zero.

use super::{BoundingBox, Intersector, Mesh};
use crate::utils::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of every parity ray (+X)
pub const RAY_DIRECTION: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Samples handled by one generator in the parallel estimator
///
/// Fixed independently of the thread count so a seed always maps to the same
/// set of points.
pub const SAMPLES_PER_CHUNK: u64 = 4096;

/// Outcome of one Monte Carlo run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeEstimate {
    pub samples: u64,
    pub inside: u64,
    pub box_volume: f64,
    pub volume: f64,
}

impl VolumeEstimate {
    fn empty(samples: u64, box_volume: f64) -> Self {
        Self {
            samples,
            inside: 0,
            box_volume,
            volume: 0.0,
        }
    }

    fn from_counts(samples: u64, inside: u64, box_volume: f64) -> Self {
        let ratio = inside as f64 / samples as f64;
        Self {
            samples,
            inside,
            box_volume,
            volume: box_volume * ratio,
        }
    }

    /// Fraction of samples classified inside
    pub fn inside_fraction(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.inside as f64 / self.samples as f64
    }

    /// Binomial standard error of `volume`
    pub fn standard_error(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let p = self.inside_fraction();
        self.box_volume * (p * (1.0 - p) / self.samples as f64).sqrt()
    }
}

/// Monte Carlo volume estimator over one mesh and its bounding box
#[derive(Debug, Clone, Copy)]
pub struct VolumeEstimator<'a> {
    mesh: &'a Mesh,
    bbox: BoundingBox,
    intersector: Intersector,
    direction: Vec3,
}

impl<'a> VolumeEstimator<'a> {
    pub fn new(mesh: &'a Mesh, bbox: BoundingBox) -> Self {
        Self {
            mesh,
            bbox,
            intersector: Intersector::new(),
            direction: RAY_DIRECTION,
        }
    }

    pub fn with_intersector(mut self, intersector: Intersector) -> Self {
        self.intersector = intersector;
        self
    }

    /// Box volume, or zero when any extent is non-positive or non-finite
    fn box_volume(&self) -> f64 {
        let size = self.bbox.size();
        if !size.iter().all(|extent| *extent > 0.0) {
            return 0.0;
        }
        let volume = self.bbox.volume();
        if volume.is_finite() {
            volume
        } else {
            0.0
        }
    }

    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let r = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
        self.bbox.min + r.component_mul(&self.bbox.size())
    }

    /// Ray-parity classification of a single point
    pub fn is_inside(&self, point: &Vec3) -> bool {
        self.intersector
            .count_hits(point, &self.direction, self.mesh.triangles())
            % 2
            == 1
    }

    fn count_inside<R: Rng + ?Sized>(&self, samples: u64, rng: &mut R) -> u64 {
        (0..samples)
            .filter(|_| {
                let point = self.sample_point(rng);
                self.is_inside(&point)
            })
            .count() as u64
    }

    /// Sequential estimate drawing every sample from `rng`
    ///
    /// A zero sample count or a box with non-positive volume yields a zero
    /// estimate without touching the generator.
    pub fn estimate<R: Rng + ?Sized>(&self, samples: u64, rng: &mut R) -> VolumeEstimate {
        let box_volume = self.box_volume();
        if samples == 0 || box_volume <= 0.0 {
            return VolumeEstimate::empty(samples, box_volume);
        }

        let inside = self.count_inside(samples, rng);
        VolumeEstimate::from_counts(samples, inside, box_volume)
    }

    /// Parallel estimate with one `StdRng` per chunk of samples
    ///
    /// Chunk `i` draws from the stream keyed by the pair `(seed, i)`, so the
    /// result depends on `seed` and `samples` only, never on how many threads
    /// ran it. Runs with neighbouring seeds share no chunk streams.
    pub fn estimate_parallel(&self, samples: u64, seed: u64) -> VolumeEstimate {
        let box_volume = self.box_volume();
        if samples == 0 || box_volume <= 0.0 {
            return VolumeEstimate::empty(samples, box_volume);
        }

        let chunks = samples.div_ceil(SAMPLES_PER_CHUNK);
        let inside: u64 = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * SAMPLES_PER_CHUNK;
                let count = SAMPLES_PER_CHUNK.min(samples - start);
                let mut rng = chunk_rng(seed, chunk);
                self.count_inside(count, &mut rng)
            })
            .sum();

        log::debug!("parallel estimate: {} chunks, {}/{} inside", chunks, inside, samples);
        VolumeEstimate::from_counts(samples, inside, box_volume)
    }
}

/// Generator for one parallel chunk
///
/// The seed and the chunk index occupy separate words of the key, so two
/// different pairs never select the same stream.
fn chunk_rng(seed: u64, chunk: u64) -> StdRng {
    let mut key = <StdRng as SeedableRng>::Seed::default();
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..16].copy_from_slice(&chunk.to_le_bytes());
    StdRng::from_seed(key)
}

/// Estimated enclosed volume of `mesh` from `samples` points drawn with `rng`
///
/// Returns `0.0` for a zero sample count or a degenerate box.
pub fn estimate_volume<R: Rng + ?Sized>(mesh: &Mesh, bbox: &BoundingBox, samples: u64, rng: &mut R) -> f64 {
    VolumeEstimator::new(mesh, *bbox).estimate(samples, rng).volume
}
