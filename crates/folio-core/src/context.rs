//! Handles into the rendering engine, passed explicitly into every tick.
//!
//! These traits intentionally avoid referencing platform-specific APIs. The
//! web frontend implements them on its GPU state; tests implement them with
//! recorders.

use glam::Vec3;

/// Distance fog, exponential-squared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

pub trait CameraHandle {
    fn set_position(&mut self, position: Vec3);
    /// Orient the camera toward a world-space point.
    fn look_at(&mut self, target: Vec3);
}

pub trait SceneHandle {
    fn set_background(&mut self, color: Vec3);
    fn set_fog(&mut self, fog: Fog);
}

pub trait MaterialHandle {
    /// Surface tint of the centre model.
    fn set_tint(&mut self, color: Vec3);
}

/// Camera, scene and model material for one tick.
pub struct RenderContext<'a> {
    pub camera: &'a mut dyn CameraHandle,
    pub scene: &'a mut dyn SceneHandle,
    pub material: &'a mut dyn MaterialHandle,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        camera: &'a mut dyn CameraHandle,
        scene: &'a mut dyn SceneHandle,
        material: &'a mut dyn MaterialHandle,
    ) -> Self {
        Self {
            camera,
            scene,
            material,
        }
    }
}
