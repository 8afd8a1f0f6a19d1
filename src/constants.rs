/// Front-end layout, projection and shading constants.
///
/// Camera motion and colour tuning live in `folio_core::constants`; these
/// only describe how the web page and the renderer present that state.
// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const SLIDES_ID: &str = "slides";
pub const SLIDE_LABEL_ID: &str = "slide-label";
pub const SLIDE_ID_PREFIX: &str = "slide-";

// Projection
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Model stand-in (box the camera orbits)
pub const MODEL_CENTER: [f32; 3] = [0.0, -0.4, 0.0];
pub const MODEL_HALF_EXTENTS: [f32; 3] = [0.9, 0.45, 2.0];

// Ground plane under the model
pub const GROUND_Y: f32 = -1.2;
pub const GROUND_HALF_SIZE: f32 = 6.0;
pub const GROUND_SHADE: f32 = 0.12;

// Lighting
pub const KEY_LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.3];
pub const AMBIENT: f32 = 0.3;
pub const SPECULAR_STRENGTH: f32 = 0.6; // glossy, metallic look
pub const SPECULAR_POWER: f32 = 48.0;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so the camera doesn't jump
