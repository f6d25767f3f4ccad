use crate::core::config::{Distribution, Facing};
use glam::{Mat3, Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Deterministic anchor positions for `count` items on a sphere shell of
/// `radius`. The same arguments always yield the same sequence; there is no
/// randomness anywhere in the layout.
pub fn sphere_points(distribution: Distribution, count: usize, radius: f32) -> Vec<Vec3> {
    match distribution {
        Distribution::GoldenSpiral => golden_spiral(count, radius),
        Distribution::LatitudeRings => latitude_rings(count, radius),
    }
}

fn golden_spiral(count: usize, radius: f32) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        // a single item sits on the equator rather than dividing by zero
        let y = if count > 1 {
            1.0 - (i as f32 / (count - 1) as f32) * 2.0
        } else {
            0.0
        };
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let theta = i as f32 * golden_angle;
        points.push(Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius);
    }
    points
}

/// Ring-based alternative: latitude bands with per-band capacity
/// proportional to circumference, apportioned by largest remainder so the
/// totals always add up to `count`. Longitudes are staggered per ring.
fn latitude_rings(count: usize, radius: f32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    if count == 0 {
        return points;
    }
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let ring_count = (count as f32).sqrt().ceil().max(1.0) as usize;

    let mut latitudes: SmallVec<[f32; 16]> = SmallVec::new();
    let mut weights: SmallVec<[f32; 16]> = SmallVec::new();
    let mut weight_sum = 0.0_f32;
    for j in 0..ring_count {
        let lat = PI * (j as f32 + 0.5) / ring_count as f32 - FRAC_PI_2;
        latitudes.push(lat);
        weights.push(lat.cos());
        weight_sum += lat.cos();
    }

    let mut counts: SmallVec<[usize; 16]> = SmallVec::new();
    let mut fractions: SmallVec<[(usize, f32); 16]> = SmallVec::new();
    let mut assigned = 0usize;
    for (j, w) in weights.iter().enumerate() {
        let quota = count as f32 * w / weight_sum;
        let base = quota.floor() as usize;
        counts.push(base);
        fractions.push((j, quota - base as f32));
        assigned += base;
    }
    fractions.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    for (j, _) in fractions.iter().take(count.saturating_sub(assigned)) {
        counts[*j] += 1;
    }

    for (j, &n) in counts.iter().enumerate() {
        let y = latitudes[j].sin();
        let ring = latitudes[j].cos();
        let phase = j as f32 * golden_angle;
        for k in 0..n {
            let theta = TAU * k as f32 / n as f32 + phase;
            points.push(Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius);
        }
    }
    points
}

/// Orientation for a quad anchored at `anchor` so its +Z face fronts the
/// sphere center (`Inward`) or faces away from it (`Outward`).
pub fn facing_rotation(anchor: Vec3, facing: Facing) -> Quat {
    let forward = match facing {
        Facing::Inward => -anchor,
        Facing::Outward => anchor,
    };
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    // pole anchors are parallel to world up; pick another hint axis there
    let up_hint = if forward.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    let right = up_hint.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Line-list vertex pairs for the decorative sphere outline: `rings`
/// latitude circles plus `rings` meridians, each split into `segments`
/// chords. Every vertex lies on the shell of `radius`.
pub fn wireframe_rings(radius: f32, rings: usize, segments: usize) -> Vec<Vec3> {
    let mut verts = Vec::new();
    if rings == 0 || segments < 3 {
        return verts;
    }
    for j in 0..rings {
        let lat = PI * (j as f32 + 0.5) / rings as f32 - FRAC_PI_2;
        let y = lat.sin();
        let ring = lat.cos();
        for k in 0..segments {
            let a0 = TAU * k as f32 / segments as f32;
            let a1 = TAU * (k + 1) as f32 / segments as f32;
            verts.push(Vec3::new(a0.cos() * ring, y, a0.sin() * ring) * radius);
            verts.push(Vec3::new(a1.cos() * ring, y, a1.sin() * ring) * radius);
        }
    }
    for j in 0..rings {
        let azi = PI * j as f32 / rings as f32;
        let (sa, ca) = azi.sin_cos();
        for k in 0..segments {
            let a0 = TAU * k as f32 / segments as f32;
            let a1 = TAU * (k + 1) as f32 / segments as f32;
            verts.push(Vec3::new(a0.sin() * ca, a0.cos(), a0.sin() * sa) * radius);
            verts.push(Vec3::new(a1.sin() * ca, a1.cos(), a1.sin() * sa) * radius);
        }
    }
    verts
}
