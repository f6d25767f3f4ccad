use crate::core::constants::{CAMERA_FAR, CAMERA_FOV_Y_RAD, CAMERA_NEAR};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Normalized device coordinates (x right, y up, both in [-1, 1]) for a
/// pixel position inside a `width`×`height` viewport.
#[inline]
pub fn ndc_from_canvas_px(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((2.0 * x / w) - 1.0, 1.0 - (2.0 * y / h))
}

#[inline]
pub fn view_proj(aspect: f32, eye: Vec3, target: Vec3) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y_RAD, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    proj * view
}

/// Compute a world-space ray through an ndc position for the gallery
/// camera.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn camera_ray(ndc: Vec2, aspect: f32, eye: Vec3, target: Vec3) -> (Vec3, Vec3) {
    let inv = view_proj(aspect, eye, target).inverse();
    let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p_far: Vec3 = far.truncate() / far.w;
    (eye, (p_far - eye).normalize())
}

/// Forward mapping of `camera_ray`: project a world point into ndc.
/// Returns `None` for points behind the camera plane.
pub fn project_to_ndc(point: Vec3, aspect: f32, eye: Vec3, target: Vec3) -> Option<Vec2> {
    let clip = view_proj(aspect, eye, target) * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}

/// Ray vs. a finite double-sided quad centered at `center`, oriented by
/// `orientation`, face in its local XY plane. Returns the hit distance
/// along the ray.
#[inline]
pub fn ray_quad(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    orientation: Quat,
    half_extent: Vec2,
) -> Option<f32> {
    let inv = orientation.inverse();
    let ro = inv * (ray_origin - center);
    let rd = inv * ray_dir;
    if rd.z.abs() < 1e-6 {
        return None;
    }
    let t = -ro.z / rd.z;
    if t < 0.0 {
        return None;
    }
    let hit = ro + rd * t;
    (hit.x.abs() <= half_extent.x && hit.y.abs() <= half_extent.y).then_some(t)
}
