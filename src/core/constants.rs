// Gallery tuning constants shared by the core state machine and the
// render/interaction layers. Values that differ between the shipped presets
// live in `GalleryConfig`; everything here is preset-independent. Smoothing
// is expressed as exponential time constants so behavior does not depend on
// frame rate.

// Camera projection
pub const CAMERA_FOV_Y_RAD: f32 = std::f32::consts::PI * (75.0 / 180.0);
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Pointer interaction
pub const POINTER_THROTTLE_MS: u64 = 16;
pub const IDLE_POINTER_THRESHOLD: f32 = 0.05;
pub const ROTATION_TARGET_LIMIT: f32 = std::f32::consts::PI;

// Smoothing time constants (seconds)
pub const ROTATION_TAU_SEC: f32 = 0.83;
pub const CAMERA_TAU_SEC: f32 = 0.33;

// Item emphasis
pub const HOVER_SCALE: f32 = 1.1;
pub const HOVER_BRIGHTEN: f32 = 1.25;

// Media resolution
pub const RESOLVE_TIMEOUT_MS: u32 = 5_000;
pub const PLACEHOLDER_WIDTH: u32 = 320;
pub const PLACEHOLDER_HEIGHT: u32 = 240;
// Decoded images and captured video frames are normalized to this raster
pub const SURFACE_WIDTH: u32 = 640;
pub const SURFACE_HEIGHT: u32 = 480;

// Decorative sphere outline
pub const OUTLINE_SHELL_FACTOR: f32 = 0.95;
pub const OUTLINE_RING_COUNT: usize = 6;
pub const OUTLINE_SEGMENTS: usize = 64;
pub const OUTLINE_DRIFT_YAW_RATE: f32 = 0.06; // rad/s
pub const OUTLINE_DRIFT_PITCH_RATE: f32 = 0.03; // rad/s
pub const OUTLINE_OPACITY_BASE: f32 = 0.3;
pub const OUTLINE_OPACITY_PULSE: f32 = 0.1;
pub const OUTLINE_PULSE_RATE: f32 = 2.0; // rad/s
