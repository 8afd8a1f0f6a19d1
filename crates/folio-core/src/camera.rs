//! Time-adaptive exponential smoothing of the camera toward the active slide.

use crate::constants::CAMERA_RATE;
use crate::context::CameraHandle;
use crate::views::Viewpoint;
use glam::{Mat4, Vec3};

/// Live camera pose owned by the rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraState {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn from_view(view: &Viewpoint) -> Self {
        Self::new(view.position, view.look_at)
    }

    /// World-to-view matrix, right-handed, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

/// Per-frame interpolation weight `clamp(dt * rate, 0, 1)`.
///
/// Zero, negative or non-finite `dt` yields 0 so the camera holds still.
#[inline]
pub fn smoothing_factor(dt_sec: f32, rate: f32) -> f32 {
    let s = dt_sec * rate;
    if s.is_finite() {
        s.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Eases a [`CameraState`] toward a target pose every frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    state: CameraState,
    rate: f32,
}

impl CameraRig {
    pub fn new(initial: CameraState, rate: f32) -> Self {
        Self {
            state: initial,
            rate,
        }
    }

    #[inline]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Advance toward `target` by one frame and push the result to `camera`.
    ///
    /// Position and look-at move independently per axis; the camera is then
    /// positioned and oriented toward the just-updated look-at point. A
    /// non-finite target is ignored for this frame.
    pub fn step(&mut self, dt_sec: f32, target: CameraState, camera: &mut dyn CameraHandle) {
        if !target.position.is_finite() || !target.look_at.is_finite() {
            return;
        }
        let s = smoothing_factor(dt_sec, self.rate);
        self.state.position += (target.position - self.state.position) * s;
        self.state.look_at += (target.look_at - self.state.look_at) * s;

        camera.set_position(self.state.position);
        camera.look_at(self.state.look_at);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraState::new(Vec3::ZERO, Vec3::ZERO), CAMERA_RATE)
    }
}
