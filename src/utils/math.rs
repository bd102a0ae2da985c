// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vector math primitives
//!
//! Thin wrappers over nalgebra so the geometry code reads like the formulas it
//! implements. NaN and infinity propagate untouched; callers that care guard
//! the results.

use nalgebra::Vector3;

/// Single-precision 3D vector, the unit of every stored coordinate
pub type Vec3 = Vector3<f32>;

/// Componentwise difference `a - b`
#[inline]
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// Cross product `a × b`
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Dot product `a · b`
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a.dot(b)
}

/// Euclidean length `sqrt(v · v)`
#[inline]
pub fn length(v: &Vec3) -> f32 {
    dot(v, v).sqrt()
}
