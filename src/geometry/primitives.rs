// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed reference solids with known area and volume

use super::{Mesh, Triangle};
use crate::utils::math::{cross, sub, Vec3};
use nalgebra::Vector3;
use std::f32::consts::PI;

/// Geometric primitives
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Cube { size: Vector3<f32>, center: bool },
    Sphere { r: f32, segments: u32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f32>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    /// Cube spanning `[0, 1]` on every axis
    pub fn unit_cube() -> Self {
        Self::cube(Vector3::new(1.0, 1.0, 1.0), false)
    }

    /// UV sphere centered on the origin; fewer than 3 segments means 32
    pub fn sphere(r: f32, segments: u32) -> Self {
        let segments = if segments >= 3 { segments } else { 32 };
        Self::Sphere { r, segments }
    }

    pub fn to_mesh(&self) -> Mesh {
        let triangles = match self {
            Self::Cube { size, center } => generate_cube(*size, *center),
            Self::Sphere { r, segments } => generate_sphere(*r, *segments),
        };
        Mesh::from_nonempty(triangles)
    }
}

/// Triangle with its stored normal set from the winding
fn facet(v1: Vec3, v2: Vec3, v3: Vec3) -> Triangle {
    let normal = cross(&sub(&v2, &v1), &sub(&v3, &v1));
    let normal = normal.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros);
    Triangle::new(v1, v2, v3).with_normal(normal)
}

fn generate_cube(size: Vector3<f32>, center: bool) -> Vec<Triangle> {
    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    // 8 corners
    let positions = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];

    // Two triangles per face, counter-clockwise seen from outside
    let faces: [[usize; 3]; 12] = [
        // Front (z+)
        [4, 5, 6],
        [4, 6, 7],
        // Back (z-)
        [1, 0, 3],
        [1, 3, 2],
        // Right (x+)
        [5, 1, 2],
        [5, 2, 6],
        // Left (x-)
        [0, 4, 7],
        [0, 7, 3],
        // Top (y+)
        [7, 6, 2],
        [7, 2, 3],
        // Bottom (y-)
        [0, 1, 5],
        [0, 5, 4],
    ];

    faces
        .iter()
        .map(|[a, b, c]| facet(positions[*a], positions[*b], positions[*c]))
        .collect()
}

fn generate_sphere(radius: f32, segments: u32) -> Vec<Triangle> {
    let stacks = segments;
    let slices = segments;

    let point = |i: u32, j: u32| {
        let phi = PI * i as f32 / stacks as f32;
        let theta = 2.0 * PI * j as f32 / slices as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut triangles = Vec::with_capacity((2 * stacks * slices) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            // Seam vertices are recomputed from the same angles, so shared
            // edges match bit for bit
            let j_next = (j + 1) % slices;
            let a = point(i, j);
            let b = point(i + 1, j);
            let c = point(i, j_next);
            let d = point(i + 1, j_next);

            triangles.push(facet(a, b, c));
            triangles.push(facet(b, d, c));
        }
    }
    triangles
}
