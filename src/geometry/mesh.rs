// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle soup mesh as read from a binary STL

use super::BoundingBox;
use crate::error::{MeshError, MeshResult};
use crate::utils::math::{cross, length, sub, Vec3};
use serde::{Deserialize, Serialize};

/// One STL facet
///
/// The stored normal is carried as read and never checked against the
/// winding of `v1`, `v2`, `v3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub normal: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
    /// Attribute byte count, opaque
    pub attribute: u16,
}

impl Triangle {
    /// Triangle with a zero normal and zero attribute
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self {
            normal: Vec3::zeros(),
            v1,
            v2,
            v3,
            attribute: 0,
        }
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_attribute(mut self, attribute: u16) -> Self {
        self.attribute = attribute;
        self
    }

    /// Area from vertex positions: `0.5 * |(v2 - v1) × (v3 - v1)|`
    ///
    /// The stored normal plays no part. Non-finite coordinates give a
    /// non-finite result; see [`Triangle::finite_area`].
    pub fn area(&self) -> f32 {
        let a = sub(&self.v2, &self.v1);
        let b = sub(&self.v3, &self.v1);
        0.5 * length(&cross(&a, &b))
    }

    /// Area widened to f64, or `None` when it is NaN or infinite
    pub fn finite_area(&self) -> Option<f64> {
        let area = self.area();
        area.is_finite().then_some(area as f64)
    }
}

/// Ordered, non-empty collection of triangles
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Wrap a triangle list, rejecting an empty one
    pub fn new(triangles: Vec<Triangle>) -> MeshResult<Self> {
        if triangles.is_empty() {
            return Err(MeshError::format("mesh has no triangles"));
        }
        Ok(Self { triangles })
    }

    /// Wrap a triangle list the caller has already checked is non-empty
    pub(crate) fn from_nonempty(triangles: Vec<Triangle>) -> Self {
        debug_assert!(!triangles.is_empty());
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_triangles(&self.triangles)
    }
}
