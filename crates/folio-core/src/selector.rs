//! Scroll progress → slide index mapping.
//!
//! Both policies read the same floating index `f = progress * (n - 1)`:
//! nearest-neighbour rounds it, interpolated mode splits it into
//! `(current, next, weight)`. They are deliberately independent so the camera
//! can snap while colours blend continuously.

/// Which index the camera targets each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Camera and overlay snap to `round(f)`.
    #[default]
    Nearest,
    /// Camera and overlay follow `floor(f)`.
    Interpolated,
}

/// Two adjacent slides and how far we are between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBlend {
    pub current: usize,
    pub next: usize,
    /// In `[0, 1)`; exactly 0 on the last slide.
    pub weight: f32,
}

/// Everything derived from one scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub progress: f32,
    pub fractional: f32,
    pub nearest: usize,
    pub blend: ViewBlend,
    pub mode: SelectionMode,
}

impl Selection {
    /// Index the camera target and the overlay text follow.
    #[inline]
    pub fn camera_index(&self) -> usize {
        match self.mode {
            SelectionMode::Nearest => self.nearest,
            SelectionMode::Interpolated => self.blend.current,
        }
    }
}

/// `progress * (n - 1)` with progress clamped to `[0, 1]`.
///
/// Returns `None` for non-finite progress. A single-slide table always maps
/// to `0.0`.
#[inline]
pub fn fractional_index(progress: f32, n: usize) -> Option<f32> {
    if !progress.is_finite() {
        return None;
    }
    if n <= 1 {
        return Some(0.0);
    }
    Some(progress.clamp(0.0, 1.0) * (n - 1) as f32)
}

/// Nearest slide for `progress`.
///
/// Ties round half up: with two slides, progress 0.5 selects slide 1. Since
/// `f` is never negative this is exactly `f32::round`.
#[inline]
pub fn nearest_index(progress: f32, n: usize) -> Option<usize> {
    let f = fractional_index(progress, n)?;
    Some(clamp_index(f.round(), n))
}

/// Split `progress` into the surrounding pair of slides and a blend weight.
#[inline]
pub fn view_blend(progress: f32, n: usize) -> Option<ViewBlend> {
    let f = fractional_index(progress, n)?;
    let current = clamp_index(f.floor(), n);
    let next = (current + 1).min(n.saturating_sub(1));
    let weight = if next == current {
        0.0
    } else {
        (f - current as f32).clamp(0.0, 1.0)
    };
    Some(ViewBlend {
        current,
        next,
        weight,
    })
}

/// Run both policies for one scroll sample.
pub fn select(progress: f32, n: usize, mode: SelectionMode) -> Option<Selection> {
    let fractional = fractional_index(progress, n)?;
    let nearest = nearest_index(progress, n)?;
    let blend = view_blend(progress, n)?;
    Some(Selection {
        progress: progress.clamp(0.0, 1.0),
        fractional,
        nearest,
        blend,
        mode,
    })
}

#[inline]
fn clamp_index(f: f32, n: usize) -> usize {
    let last = n.saturating_sub(1);
    if f <= 0.0 {
        0
    } else {
        (f as usize).min(last)
    }
}
