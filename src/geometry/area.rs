// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Surface area reduction, sequential and rayon-parallel

use super::{Mesh, Triangle};
use crate::utils::pool;
use rayon::prelude::*;

/// Running f64 sum plus the number of triangles dropped as non-finite
#[derive(Debug, Clone, Copy, Default)]
struct AreaSum {
    total: f64,
    skipped: usize,
}

impl AreaSum {
    fn add(mut self, triangle: &Triangle) -> Self {
        match triangle.finite_area() {
            Some(area) => self.total += area,
            None => self.skipped += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            skipped: self.skipped + other.skipped,
        }
    }

    fn finish(self) -> f64 {
        if self.skipped > 0 {
            log::debug!("skipped {} triangles with non-finite area", self.skipped);
        }
        self.total
    }
}

/// Total surface area, summed in file order
///
/// Triangles whose area is NaN or infinite contribute zero.
pub fn total_area(mesh: &Mesh) -> f64 {
    mesh.triangles()
        .iter()
        .fold(AreaSum::default(), AreaSum::add)
        .finish()
}

/// Total surface area with the triangle range split across `workers` threads
///
/// `workers == 0` uses the global rayon pool. Each partition accumulates its
/// own f64 partial sum; partials are then reduced, so the result can differ
/// from [`total_area`] in the last bits.
pub fn total_area_parallel(mesh: &Mesh, workers: usize) -> f64 {
    let triangles = mesh.triangles();
    pool::install(workers, || reduce_partitions(triangles, rayon::current_num_threads()))
}

fn reduce_partitions(triangles: &[Triangle], partitions: usize) -> f64 {
    let chunk_size = triangles.len().div_ceil(partitions.max(1)).max(1);
    triangles
        .par_chunks(chunk_size)
        .map(|chunk| chunk.iter().fold(AreaSum::default(), AreaSum::add))
        .reduce(AreaSum::default, AreaSum::merge)
        .finish()
}
