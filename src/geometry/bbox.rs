// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::Triangle;
use crate::utils::math::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Fold the vertex extrema of a triangle list
    ///
    /// Starts from the first vertex of the first triangle, so an empty slice
    /// has no answer.
    ///
    /// # Panics
    ///
    /// Panics if `triangles` is empty.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let Some(first) = triangles.first() else {
            panic!("bounding box of an empty triangle list");
        };

        let mut bbox = Self::new(first.v1, first.v1);
        for triangle in triangles {
            bbox.expand_to_include(&triangle.v1);
            bbox.expand_to_include(&triangle.v2);
            bbox.expand_to_include(&triangle.v3);
        }
        bbox
    }

    pub fn expand_to_include(&mut self, point: &Vec3) {
        // Plain comparisons so a NaN coordinate never replaces a bound
        if point.x < self.min.x {
            self.min.x = point.x;
        }
        if point.y < self.min.y {
            self.min.y = point.y;
        }
        if point.z < self.min.z {
            self.min.z = point.z;
        }
        if point.x > self.max.x {
            self.max.x = point.x;
        }
        if point.y > self.max.y {
            self.max.y = point.y;
        }
        if point.z > self.max.z {
            self.max.z = point.z;
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box volume computed in f64 from the f32 extents
    pub fn volume(&self) -> f64 {
        let dx = self.max.x as f64 - self.min.x as f64;
        let dy = self.max.y as f64 - self.min.y as f64;
        let dz = self.max.z as f64 - self.min.z as f64;
        dx * dy * dz
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f32) -> bool {
        (self.min - other.min).amax() < tolerance && (self.max - other.max).amax() < tolerance
    }
}
