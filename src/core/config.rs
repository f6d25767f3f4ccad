use glam::Vec2;

/// How item anchors are distributed over the sphere shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    GoldenSpiral,
    LatitudeRings,
}

/// Which way item quads front: toward the sphere center or away from it.
/// Fixed per gallery instance, never per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Inward,
    Outward,
}

/// Backdrop drawn behind the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Plain,
    LiquidCrt,
}

/// Everything that varied across page revisions, collapsed into one
/// parameter struct. Angular rates are rad/s, times are seconds.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub radius: f32,
    /// Shrinks the item shell inside `radius` so quads do not graze the
    /// outline sphere.
    pub packing: f32,
    pub distribution: Distribution,
    pub facing: Facing,
    pub backdrop: Backdrop,
    /// World-space quad dimensions before emphasis scaling.
    pub quad_size: Vec2,
    /// Resting camera distance from the sphere center.
    pub camera_distance: f32,
    /// Pointer ndc to rotation-target gain.
    pub rotate_sensitivity: f32,
    /// Idle yaw drift while the pointer rests near center.
    pub auto_rotate_rate: f32,
    /// Camera offset beyond a focused item.
    pub focus_distance: f32,
    pub focus_scale: f32,
    /// Smoothing time constant for per-item scale/opacity.
    pub item_tau: f32,
}

impl GalleryConfig {
    /// Large inward-facing sphere with the liquid CRT backdrop.
    pub fn curation() -> Self {
        Self {
            radius: 12.0,
            packing: 0.9,
            distribution: Distribution::GoldenSpiral,
            facing: Facing::Inward,
            backdrop: Backdrop::LiquidCrt,
            quad_size: Vec2::new(5.5, 4.2),
            camera_distance: 35.0,
            rotate_sensitivity: 0.5,
            auto_rotate_rate: 0.12,
            focus_distance: 12.0,
            focus_scale: 2.5,
            item_tau: 0.16,
        }
    }

    /// Tighter sphere with a plain backdrop and snappier item easing.
    pub fn compact() -> Self {
        Self {
            radius: 8.0,
            packing: 0.8,
            backdrop: Backdrop::Plain,
            quad_size: Vec2::new(3.2, 2.4),
            camera_distance: 28.0,
            focus_distance: 8.0,
            focus_scale: 2.0,
            item_tau: 0.20,
            ..Self::curation()
        }
    }

    /// Radius the item anchors actually sit on.
    #[inline]
    pub fn shell_radius(&self) -> f32 {
        self.radius * self.packing
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::curation()
    }
}
