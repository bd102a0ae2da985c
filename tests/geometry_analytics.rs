// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry measurement verification tests

use approx::assert_abs_diff_eq;
use meshprobe::geometry::{
    estimate_volume, total_area, total_area_parallel, BoundingBox, Intersector, Primitive, VolumeEstimator,
    RAY_DIRECTION,
};
use meshprobe::Vec3;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_unit_cube_area_and_bbox() {
    let mesh = Primitive::unit_cube().to_mesh();

    assert_abs_diff_eq!(total_area(&mesh), 6.0, epsilon = 1e-5);

    let bbox = mesh.bounding_box();
    let expected = BoundingBox::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(bbox.approx_eq(&expected, 1e-6), "bbox {:?}", bbox);
}

#[test]
fn test_sphere_bbox_matches_radius() {
    let mesh = Primitive::sphere(1.0, 48).to_mesh();
    let bbox = mesh.bounding_box();

    let expected = BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    assert!(bbox.approx_eq(&expected, 1e-5), "bbox {:?}", bbox);
    assert!(!bbox.approx_eq(&BoundingBox::new(expected.min, expected.max * 1.01), 1e-5));
}

#[test]
fn test_convex_parity() {
    let intersector = Intersector::new();
    let mut rng = StdRng::seed_from_u64(2024);

    for mesh in [
        Primitive::cube(Vector3::new(2.0, 3.0, 4.0), true).to_mesh(),
        Primitive::sphere(1.5, 20).to_mesh(),
    ] {
        let bbox = mesh.bounding_box();
        let center = bbox.center();
        let half = bbox.size() / 2.0;

        for _ in 0..200 {
            // Strictly inside: shrink toward the center, well clear of the surface
            let offset = Vec3::new(rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3));
            let inside = center + offset.component_mul(&half);
            let hits = intersector.count_hits(&inside, &RAY_DIRECTION, mesh.triangles());
            assert_eq!(hits, 1, "inside point {:?}", inside);

            // Strictly outside: beyond the box on the -X side, so the ray can cross
            let outside = Vec3::new(bbox.min.x - 1.0, inside.y, inside.z);
            let hits = intersector.count_hits(&outside, &RAY_DIRECTION, mesh.triangles());
            assert!(hits == 0 || hits == 2, "outside point {:?} hit {} faces", outside, hits);

            // Beyond +X the ray leaves without touching anything
            let past = Vec3::new(bbox.max.x + 1.0, inside.y, inside.z);
            assert_eq!(intersector.count_hits(&past, &RAY_DIRECTION, mesh.triangles()), 0);
        }
    }
}

#[test]
fn test_unit_cube_monte_carlo_volume() {
    let mesh = Primitive::unit_cube().to_mesh();
    let bbox = mesh.bounding_box();
    let mut rng = StdRng::seed_from_u64(12345);

    let volume = estimate_volume(&mesh, &bbox, 100_000, &mut rng);
    let relative = (volume - 1.0).abs();
    assert!(relative < 0.05, "volume {} off by {:.2}%", volume, relative * 100.0);
}

#[test]
fn test_sphere_monte_carlo_volume() {
    let radius = 1.0;
    let mesh = Primitive::sphere(radius, 48).to_mesh();
    let estimate = VolumeEstimator::new(&mesh, mesh.bounding_box()).estimate_parallel(100_000, 99);

    // Tessellated sphere is slightly smaller than the analytic one
    let expected = 4.0 / 3.0 * std::f64::consts::PI * (radius as f64).powi(3);
    let relative = ((estimate.volume - expected) / expected).abs();
    assert!(
        relative < 0.05,
        "volume {} vs {} (± {})",
        estimate.volume,
        expected,
        estimate.standard_error()
    );
}

#[test]
fn test_degenerate_volume_inputs() {
    let mesh = Primitive::unit_cube().to_mesh();
    let mut rng = StdRng::seed_from_u64(1);

    let bbox = mesh.bounding_box();
    assert_eq!(estimate_volume(&mesh, &bbox, 0, &mut rng), 0.0);

    let flat = BoundingBox::new(Vec3::new(0.0, 0.0, 0.5), Vec3::new(1.0, 1.0, 0.5));
    assert_eq!(estimate_volume(&mesh, &flat, 10_000, &mut rng), 0.0);

    let inverted = BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
    assert_eq!(estimate_volume(&mesh, &inverted, 10_000, &mut rng), 0.0);
}

#[test]
fn test_parallel_area_tolerance() {
    let mesh = Primitive::sphere(10.0, 96).to_mesh();
    let single = total_area_parallel(&mesh, 1);

    for workers in [2, 4, 7, 16] {
        let many = total_area_parallel(&mesh, workers);
        let relative = ((many - single) / single).abs();
        assert!(relative < 1e-6, "{} workers: {} vs {}", workers, many, single);
    }

    let sequential = total_area(&mesh);
    assert!(((sequential - single) / single).abs() < 1e-6);

    // Close to the analytic sphere
    let expected = 4.0 * std::f64::consts::PI * 100.0;
    assert!(((single - expected) / expected).abs() < 0.01);
}
