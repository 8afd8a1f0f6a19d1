//! Per-tick orchestration: scroll sample → selection → camera → colour.

use crate::camera::{CameraRig, CameraState};
use crate::color::{ColorRig, ColorState};
use crate::constants::{BACKGROUND_WHITE_MIX, CAMERA_RATE, FOG_DENSITY};
use crate::context::RenderContext;
use crate::scroll::ScrollSignal;
use crate::selector::{select, Selection, SelectionMode};
use crate::views::ViewTable;

#[derive(Clone, Copy, Debug)]
pub struct RigConfig {
    pub mode: SelectionMode,
    pub camera_rate: f32,
    pub white_mix: f32,
    pub fog_density: f32,
    /// Starting camera pose; the first slide when `None`.
    pub initial_pose: Option<CameraState>,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Nearest,
            camera_rate: CAMERA_RATE,
            white_mix: BACKGROUND_WHITE_MIX,
            fog_density: FOG_DENSITY,
            initial_pose: None,
        }
    }
}

/// Result of one completed tick, for the overlay and renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    pub selection: Selection,
    pub camera: CameraState,
    pub color: ColorState,
    /// The overlay slide differs from the previous tick's.
    pub slide_changed: bool,
}

impl SlideFrame {
    /// Slide whose text the overlay shows; matches the camera target.
    #[inline]
    pub fn overlay_index(&self) -> usize {
        self.selection.camera_index()
    }
}

pub struct SlideRig {
    table: ViewTable,
    mode: SelectionMode,
    camera: CameraRig,
    color: ColorRig,
    last_slide: Option<usize>,
    skipping: bool,
}

impl SlideRig {
    pub fn new(table: ViewTable, config: RigConfig) -> Self {
        let initial = config
            .initial_pose
            .unwrap_or_else(|| CameraState::from_view(table.first()));
        let color = ColorRig::new(table.first().accent, config.white_mix, config.fog_density);
        Self {
            mode: config.mode,
            camera: CameraRig::new(initial, config.camera_rate),
            color,
            table,
            last_slide: None,
            skipping: false,
        }
    }

    pub fn table(&self) -> &ViewTable {
        &self.table
    }

    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }

    pub fn color_state(&self) -> ColorState {
        self.color.state()
    }

    /// Advance one frame.
    ///
    /// Scroll is sampled exactly once. A non-finite sample skips the whole
    /// tick: no state changes and no handle calls.
    pub fn tick(
        &mut self,
        scroll: &dyn ScrollSignal,
        dt_sec: f32,
        ctx: &mut RenderContext<'_>,
    ) -> Option<SlideFrame> {
        let progress = scroll.progress();
        let Some(selection) = select(progress, self.table.len(), self.mode) else {
            if !self.skipping {
                log::warn!("[rig] skipping frame: scroll progress {progress} is not finite");
                self.skipping = true;
            }
            return None;
        };
        self.skipping = false;

        let target = CameraState::from_view(self.table.view(selection.camera_index()));
        self.camera.step(dt_sec, target, &mut *ctx.camera);
        let color = self
            .color
            .apply(&self.table, selection.blend, &mut *ctx.scene, &mut *ctx.material);

        let slide = selection.camera_index();
        let slide_changed = self.last_slide != Some(slide);
        if slide_changed {
            log::debug!(
                "[rig] slide {} -> {} ({})",
                self.last_slide.map_or(-1, |s| s as i64),
                slide,
                self.table.view(slide).label
            );
            self.last_slide = Some(slide);
        }

        Some(SlideFrame {
            selection,
            camera: self.camera.state(),
            color,
            slide_changed,
        })
    }
}
