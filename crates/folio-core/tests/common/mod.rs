#![allow(dead_code)]
use folio_core::{CameraHandle, Fog, MaterialHandle, SceneHandle};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Position(Vec3),
    LookAt(Vec3),
    Background(Vec3),
    Fog(Fog),
    Tint(Vec3),
}

/// Records every handle call in order.
#[derive(Default, Debug)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl CameraHandle for Recorder {
    fn set_position(&mut self, position: Vec3) {
        self.calls.push(Call::Position(position));
    }
    fn look_at(&mut self, target: Vec3) {
        self.calls.push(Call::LookAt(target));
    }
}

impl SceneHandle for Recorder {
    fn set_background(&mut self, color: Vec3) {
        self.calls.push(Call::Background(color));
    }
    fn set_fog(&mut self, fog: Fog) {
        self.calls.push(Call::Fog(fog));
    }
}

impl MaterialHandle for Recorder {
    fn set_tint(&mut self, color: Vec3) {
        self.calls.push(Call::Tint(color));
    }
}

pub fn approx(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, 1e-5)
}
