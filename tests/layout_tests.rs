// Host-side tests for the sphere layout functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::config::{Distribution, Facing};
use crate::core::layout::{facing_rotation, sphere_points, wireframe_rings};
use glam::Vec3;

#[test]
fn golden_spiral_points_sit_on_the_shell() {
    let radius = 13.5;
    let points = sphere_points(Distribution::GoldenSpiral, 32, radius);
    assert_eq!(points.len(), 32);
    for p in &points {
        assert!(
            (p.length() - radius).abs() < 1e-4,
            "|p| = {} expected {}",
            p.length(),
            radius
        );
    }
}

#[test]
fn layout_is_deterministic() {
    let a = sphere_points(Distribution::GoldenSpiral, 17, 9.0);
    let b = sphere_points(Distribution::GoldenSpiral, 17, 9.0);
    assert_eq!(a, b);
    let c = sphere_points(Distribution::LatitudeRings, 17, 9.0);
    let d = sphere_points(Distribution::LatitudeRings, 17, 9.0);
    assert_eq!(c, d);
}

#[test]
fn no_two_items_share_an_anchor() {
    for distribution in [Distribution::GoldenSpiral, Distribution::LatitudeRings] {
        for count in [2usize, 3, 7, 16, 50, 100] {
            let points = sphere_points(distribution, count, 9.0);
            for i in 0..points.len() {
                for j in (i + 1)..points.len() {
                    assert!(
                        points[i].distance(points[j]) > 1e-4,
                        "{distribution:?} with {count} items collides at {i}/{j}"
                    );
                }
            }
        }
    }
}

#[test]
fn golden_spiral_spans_pole_to_pole() {
    let points = sphere_points(Distribution::GoldenSpiral, 64, 1.0);
    assert!((points[0].y - 1.0).abs() < 1e-6);
    assert!((points[63].y + 1.0).abs() < 1e-6);
}

#[test]
fn single_item_rests_on_the_equator() {
    let points = sphere_points(Distribution::GoldenSpiral, 1, 5.0);
    assert_eq!(points.len(), 1);
    assert!(points[0].y.abs() < 1e-6);
    assert!((points[0].length() - 5.0).abs() < 1e-4);
}

#[test]
fn zero_items_yield_an_empty_layout() {
    assert!(sphere_points(Distribution::GoldenSpiral, 0, 5.0).is_empty());
    assert!(sphere_points(Distribution::LatitudeRings, 0, 5.0).is_empty());
}

#[test]
fn latitude_rings_place_every_item_on_the_shell() {
    for count in [1usize, 2, 5, 13, 32, 100] {
        let points = sphere_points(Distribution::LatitudeRings, count, 7.0);
        assert_eq!(points.len(), count, "count = {count}");
        for p in &points {
            assert!((p.length() - 7.0).abs() < 1e-4);
        }
    }
}

#[test]
fn latitude_rings_spread_across_bands() {
    // 32 items over ceil(sqrt(32)) = 6 bands; every band gets something
    let points = sphere_points(Distribution::LatitudeRings, 32, 10.0);
    let highest = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let lowest = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    assert!(highest > 5.0);
    assert!(lowest < -5.0);
}

#[test]
fn inward_facing_quads_front_the_center() {
    let anchor = Vec3::new(0.0, 0.0, 10.0);
    let q = facing_rotation(anchor, Facing::Inward);
    let normal = q * Vec3::Z; // local +Z is the quad face
    assert!(normal.dot((-anchor).normalize()) > 0.999);
}

#[test]
fn outward_facing_flips_the_normal() {
    let anchor = Vec3::new(3.0, 4.0, 0.0);
    let inward = facing_rotation(anchor, Facing::Inward) * Vec3::Z;
    let outward = facing_rotation(anchor, Facing::Outward) * Vec3::Z;
    assert!(inward.dot(outward) < -0.999);
}

#[test]
fn facing_rotation_is_well_formed_at_the_poles() {
    for anchor in [Vec3::new(0.0, 9.0, 0.0), Vec3::new(0.0, -9.0, 0.0)] {
        let q = facing_rotation(anchor, Facing::Inward);
        assert!(q.is_finite());
        assert!((q.length() - 1.0).abs() < 1e-4);
        let normal = q * Vec3::Z;
        assert!(normal.dot(-anchor.normalize()) > 0.999);
    }
}

#[test]
fn facing_rotation_keeps_quads_upright_off_the_poles() {
    let anchor = Vec3::new(6.0, 2.0, 7.0);
    let q = facing_rotation(anchor, Facing::Inward);
    // the quad's local up should not be flipped below the horizon
    let up = q * Vec3::Y;
    assert!(up.y > 0.0);
}

#[test]
fn wireframe_vertices_stay_on_the_shell() {
    let radius = 10.0;
    let rings = 6;
    let segments = 64;
    let verts = wireframe_rings(radius, rings, segments);
    // latitude circles plus meridians, two vertices per chord
    assert_eq!(verts.len(), rings * segments * 2 * 2);
    for v in &verts {
        assert!((v.length() - radius).abs() < 1e-4);
    }
}

#[test]
fn degenerate_wireframes_are_empty() {
    assert!(wireframe_rings(10.0, 0, 64).is_empty());
    assert!(wireframe_rings(10.0, 6, 2).is_empty());
}
