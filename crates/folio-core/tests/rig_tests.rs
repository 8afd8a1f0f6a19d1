mod common;

use common::{approx, Call, Recorder};
use folio_core::*;
use glam::Vec3;
use std::cell::Cell;

fn two_view_table() -> ViewTable {
    ViewTable::new(vec![
        Viewpoint::new(Vec3::ZERO, Vec3::ZERO, "A").with_accent(Vec3::new(1.0, 0.0, 0.0)),
        Viewpoint::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, "B")
            .with_accent(Vec3::new(0.0, 1.0, 0.0)),
    ])
    .unwrap()
}

struct Handles {
    camera: Recorder,
    scene: Recorder,
    material: Recorder,
}

impl Handles {
    fn new() -> Self {
        Self {
            camera: Recorder::default(),
            scene: Recorder::default(),
            material: Recorder::default(),
        }
    }

    fn tick(&mut self, rig: &mut SlideRig, progress: f32, dt: f32) -> Option<SlideFrame> {
        let mut ctx = RenderContext::new(&mut self.camera, &mut self.scene, &mut self.material);
        rig.tick(&progress, dt, &mut ctx)
    }

    fn total_calls(&self) -> usize {
        self.camera.calls.len() + self.scene.calls.len() + self.material.calls.len()
    }
}

#[test]
fn starts_at_first_slide_pose() {
    let rig = SlideRig::new(ViewTable::portfolio().unwrap(), RigConfig::default());
    assert_eq!(rig.camera_state().position, Vec3::new(3.2, 2.2, 4.2));
    assert_eq!(rig.table().len(), 4);
}

#[test]
fn initial_pose_overrides_first_slide() {
    let pose = CameraState::new(Vec3::new(0.0, 9.0, 0.0), Vec3::ZERO);
    let rig = SlideRig::new(
        two_view_table(),
        RigConfig {
            initial_pose: Some(pose),
            ..RigConfig::default()
        },
    );
    assert_eq!(rig.camera_state(), pose);
}

#[test]
fn half_scroll_end_to_end() {
    let mut rig = SlideRig::new(
        two_view_table(),
        RigConfig {
            mode: SelectionMode::Interpolated,
            ..RigConfig::default()
        },
    );
    let mut h = Handles::new();
    let frame = h.tick(&mut rig, 0.5, 1.0 / 60.0).unwrap();
    assert_eq!(frame.selection.blend.current, 0);
    assert_eq!(frame.selection.blend.next, 1);
    assert!((frame.selection.blend.weight - 0.5).abs() < 1e-6);
    assert!(approx(frame.color.active, Vec3::new(0.5, 0.5, 0.0)));
    // camera targets `current` in interpolated mode
    assert_eq!(frame.camera.position, Vec3::ZERO);
    assert_eq!(frame.overlay_index(), 0);
}

#[test]
fn nearest_mode_moves_camera_toward_rounded_slide() {
    let mut rig = SlideRig::new(two_view_table(), RigConfig::default());
    let mut h = Handles::new();
    let frame = h.tick(&mut rig, 0.5, 1.0 / 60.0).unwrap();
    assert_eq!(frame.selection.nearest, 1);
    assert_eq!(frame.overlay_index(), 1);
    assert!(approx(frame.camera.position, Vec3::new(1.0, 0.0, 0.0)));

    for _ in 0..59 {
        h.tick(&mut rig, 0.5, 1.0 / 60.0);
    }
    assert!(rig.camera_state().position.distance(Vec3::new(10.0, 0.0, 0.0)) < 0.05);
}

#[test]
fn each_tick_drives_every_handle_once() {
    let mut rig = SlideRig::new(two_view_table(), RigConfig::default());
    let mut h = Handles::new();
    h.tick(&mut rig, 0.2, 1.0 / 60.0).unwrap();
    assert!(matches!(
        h.camera.calls.as_slice(),
        [Call::Position(_), Call::LookAt(_)]
    ));
    assert!(matches!(
        h.scene.calls.as_slice(),
        [Call::Background(_), Call::Fog(_)]
    ));
    assert!(matches!(h.material.calls.as_slice(), [Call::Tint(_)]));
}

#[test]
fn non_finite_scroll_skips_the_tick() {
    let mut rig = SlideRig::new(two_view_table(), RigConfig::default());
    let mut h = Handles::new();
    h.tick(&mut rig, 1.0, 1.0 / 60.0).unwrap();
    let camera_before = rig.camera_state();
    let color_before = rig.color_state();
    let calls_before = h.total_calls();

    assert!(h.tick(&mut rig, f32::NAN, 1.0 / 60.0).is_none());
    assert!(h.tick(&mut rig, f32::INFINITY, 1.0 / 60.0).is_none());

    assert_eq!(rig.camera_state(), camera_before);
    assert_eq!(rig.color_state(), color_before);
    assert_eq!(h.total_calls(), calls_before);

    assert!(h.tick(&mut rig, 1.0, 1.0 / 60.0).is_some());
}

#[test]
fn slide_changed_only_on_transitions() {
    let mut rig = SlideRig::new(ViewTable::portfolio().unwrap(), RigConfig::default());
    let mut h = Handles::new();
    let changes: Vec<bool> = [0.0, 0.1, 0.15, 0.2, 0.5, 0.5, 1.0, 0.0]
        .iter()
        .map(|p| h.tick(&mut rig, *p, 1.0 / 60.0).unwrap().slide_changed)
        .collect();
    // f = 0, 0.3, 0.45, 0.6 (→1), 1.5 (→2), 1.5, 3, 0
    assert_eq!(
        changes,
        vec![true, false, false, true, true, false, true, true]
    );
}

#[test]
fn color_follows_weight_while_slide_is_steady() {
    let mut rig = SlideRig::new(two_view_table(), RigConfig::default());
    let mut h = Handles::new();
    let a = h.tick(&mut rig, 0.1, 1.0 / 60.0).unwrap();
    let b = h.tick(&mut rig, 0.3, 1.0 / 60.0).unwrap();
    assert!(!b.slide_changed);
    assert_ne!(a.color.active, b.color.active);
    assert!(approx(b.color.active, Vec3::new(0.7, 0.3, 0.0)));
}

#[test]
fn single_slide_table_is_stable() {
    let t = ViewTable::new(vec![Viewpoint::new(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO, "Only")]).unwrap();
    let mut rig = SlideRig::new(t, RigConfig::default());
    let mut h = Handles::new();
    for p in [0.0, 0.5, 1.0] {
        let f = h.tick(&mut rig, p, 1.0 / 60.0).unwrap();
        assert_eq!(f.overlay_index(), 0);
        assert_eq!(f.selection.blend.weight, 0.0);
    }
}

struct CountingScroll {
    value: f32,
    reads: Cell<usize>,
}

impl ScrollSignal for CountingScroll {
    fn progress(&self) -> f32 {
        self.reads.set(self.reads.get() + 1);
        self.value
    }
}

#[test]
fn scroll_is_read_once_per_tick() {
    let mut rig = SlideRig::new(two_view_table(), RigConfig::default());
    let mut h = Handles::new();
    for (i, value) in [0.2, 0.7, f32::NAN, 1.0].into_iter().enumerate() {
        let scroll = CountingScroll {
            value,
            reads: Cell::new(0),
        };
        let mut ctx = RenderContext::new(&mut h.camera, &mut h.scene, &mut h.material);
        rig.tick(&scroll, 1.0 / 60.0, &mut ctx);
        assert_eq!(scroll.reads.get(), 1, "tick {i}");
    }
}
