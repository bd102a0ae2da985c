// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and measurements

mod area;
mod bbox;
mod intersect;
mod mesh;
mod primitives;
mod volume;

pub use area::{total_area, total_area_parallel};
pub use bbox::BoundingBox;
pub use intersect::{ray_triangle_intersection, Intersector, DEFAULT_EPSILON};
pub use mesh::{Mesh, Triangle};
pub use primitives::Primitive;
pub use volume::{estimate_volume, VolumeEstimate, VolumeEstimator, RAY_DIRECTION, SAMPLES_PER_CHUNK};
