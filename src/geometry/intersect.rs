// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ray-triangle intersection (Möller–Trumbore)

use super::Triangle;
use crate::utils::math::{cross, dot, sub, Vec3};

/// Determinant magnitude below which a ray counts as parallel to the triangle
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// Möller–Trumbore ray-triangle test with a configurable parallel threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersector {
    epsilon: f32,
}

impl Intersector {
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Intersect the half-line `origin + t * direction`, `t >= 0`, with a triangle
    ///
    /// Returns the ray parameter `t` on a hit. `direction` need not be unit
    /// length, so `t` is measured in multiples of it. Hits exactly on a shared
    /// edge or vertex are reported for every triangle that contains them.
    pub fn intersect(&self, origin: &Vec3, direction: &Vec3, triangle: &Triangle) -> Option<f32> {
        let e1 = sub(&triangle.v2, &triangle.v1);
        let e2 = sub(&triangle.v3, &triangle.v1);
        let pvec = cross(direction, &e2);
        let det = dot(&e1, &pvec);

        // Negated so a NaN determinant is rejected with the parallel case
        if !(det.abs() >= self.epsilon) || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = sub(origin, &triangle.v1);
        let u = dot(&tvec, &pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = cross(&tvec, &e1);
        let v = dot(direction, &qvec) * inv_det;
        if !(v >= 0.0 && u + v <= 1.0) {
            return None;
        }

        let t = dot(&e2, &qvec) * inv_det;
        if !(t >= 0.0) || !t.is_finite() {
            return None;
        }

        Some(t)
    }

    /// Number of triangles hit by the ray
    pub fn count_hits(&self, origin: &Vec3, direction: &Vec3, triangles: &[Triangle]) -> usize {
        triangles
            .iter()
            .filter(|triangle| self.intersect(origin, direction, triangle).is_some())
            .count()
    }
}

impl Default for Intersector {
    fn default() -> Self {
        Self::new()
    }
}

/// Möller–Trumbore with the default epsilon
pub fn ray_triangle_intersection(origin: &Vec3, direction: &Vec3, triangle: &Triangle) -> Option<f32> {
    Intersector::new().intersect(origin, direction, triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_xy_triangle(z: f32) -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, z),
            Vec3::new(1.0, 0.0, z),
            Vec3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_hit_reports_parameter() {
        let tri = unit_xy_triangle(2.0);
        let origin = Vec3::new(0.25, 0.25, 0.0);

        let t = ray_triangle_intersection(&origin, &Vec3::new(0.0, 0.0, 1.0), &tri);
        assert_relative_eq!(t.unwrap(), 2.0);

        // Parameter scales with the direction length
        let t = ray_triangle_intersection(&origin, &Vec3::new(0.0, 0.0, 4.0), &tri);
        assert_relative_eq!(t.unwrap(), 0.5);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let tri = unit_xy_triangle(1.0);
        let reversed = Triangle::new(tri.v1, tri.v3, tri.v2);
        let origin = Vec3::new(0.2, 0.2, 0.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        assert!(ray_triangle_intersection(&origin, &dir, &tri).is_some());
        assert!(ray_triangle_intersection(&origin, &dir, &reversed).is_some());
    }

    #[test]
    fn test_miss_outside_triangle() {
        let tri = unit_xy_triangle(1.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        assert!(ray_triangle_intersection(&Vec3::new(0.8, 0.8, 0.0), &dir, &tri).is_none());
        assert!(ray_triangle_intersection(&Vec3::new(-0.1, 0.5, 0.0), &dir, &tri).is_none());
        assert!(ray_triangle_intersection(&Vec3::new(0.5, -0.1, 0.0), &dir, &tri).is_none());
    }

    #[test]
    fn test_behind_origin_is_not_a_hit() {
        let tri = unit_xy_triangle(-1.0);
        let origin = Vec3::new(0.25, 0.25, 0.0);
        assert!(ray_triangle_intersection(&origin, &Vec3::new(0.0, 0.0, 1.0), &tri).is_none());
        assert!(ray_triangle_intersection(&origin, &Vec3::new(0.0, 0.0, -1.0), &tri).is_some());
    }

    #[test]
    fn test_parallel_ray_rejected() {
        let tri = unit_xy_triangle(0.0);
        let origin = Vec3::new(-1.0, 0.25, 0.0);
        assert!(ray_triangle_intersection(&origin, &Vec3::new(1.0, 0.0, 0.0), &tri).is_none());
    }

    #[test]
    fn test_epsilon_is_configurable() {
        // Tiny triangle: det = 1e-8, under the default threshold
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1e-4, 0.0, 1.0),
            Vec3::new(0.0, 1e-4, 1.0),
        );
        let origin = Vec3::new(2e-5, 2e-5, 0.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);

        assert!(Intersector::new().intersect(&origin, &dir, &tri).is_none());
        assert!(Intersector::with_epsilon(1e-12).intersect(&origin, &dir, &tri).is_some());
    }

    #[test]
    fn test_degenerate_and_nan_triangles_rejected() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let collapsed = Triangle::new(p, p, p);
        let nan = Triangle::new(
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        let origin = Vec3::zeros();
        let dir = Vec3::new(1.0, 0.0, 0.0);
        assert!(ray_triangle_intersection(&origin, &dir, &collapsed).is_none());
        assert!(ray_triangle_intersection(&origin, &Vec3::new(0.0, 0.0, 1.0), &nan).is_none());
    }

    #[test]
    fn test_shared_edge_counts_twice() {
        // Two triangles forming a unit square split along the diagonal x + y = 1
        let a = Triangle::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        let b = Triangle::new(
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        let origin = Vec3::new(0.5, 0.5, 0.0);
        let hits = Intersector::new().count_hits(&origin, &Vec3::new(0.0, 0.0, 1.0), &[a, b]);
        assert_eq!(hits, 2);
    }
}
