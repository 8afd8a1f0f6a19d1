use glam::Vec3;

// Shared tuning constants for the camera rig and colour rig.

// Camera motion
pub const CAMERA_RATE: f32 = 6.0; // smoothing rate per second; higher = snappier slide
pub const CAMERA_FOV_DEG: f32 = 52.0;

// Colour rig
pub const BACKGROUND_WHITE_MIX: f32 = 0.9; // background = accent blended 90% toward white
pub const FOG_DENSITY: f32 = 0.045; // exponential-squared fog density

// Scroll
pub const SCROLL_DAMPING_SEC: f32 = 0.2; // smoothing time applied to raw page scroll

pub const WHITE: Vec3 = Vec3::ONE;
