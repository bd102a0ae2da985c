// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshprobe
//!
//! Surface area, bounding box and Monte Carlo volume of triangulated solids
//! stored as binary STL.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use analysis::{analyze, MeshReport};
pub use config::AnalysisConfig;
pub use error::{MeshError, MeshResult};
pub use geometry::{estimate_volume, total_area, BoundingBox, Mesh, Triangle, VolumeEstimate};
pub use utils::Vec3;

use std::path::Path;

/// Load a binary STL file
pub fn load(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    io::load_stl(path)
}

/// Axis-aligned bounding box of a mesh
pub fn bounding_box(mesh: &Mesh) -> BoundingBox {
    mesh.bounding_box()
}
