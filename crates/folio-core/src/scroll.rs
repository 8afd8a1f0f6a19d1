//! Scroll progress source and helpers for deriving it from page metrics.

/// Anything that can report how far through the slides the user has scrolled.
///
/// Read exactly once per tick; the value is treated as constant for the rest
/// of that tick.
pub trait ScrollSignal {
    fn progress(&self) -> f32;
}

impl ScrollSignal for f32 {
    fn progress(&self) -> f32 {
        *self
    }
}

/// Normalize a scroll offset to `[0, 1]` over the scrollable range.
#[inline]
pub fn progress_from_metrics(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let range = scroll_height - viewport_height;
    if !(range > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// One full-screen overlay page per slide.
#[inline]
pub fn pages_for(view_count: usize) -> usize {
    view_count.max(1)
}

/// Exponentially damped scroll offset.
#[derive(Clone, Copy, Debug)]
pub struct ScrollDamper {
    /// Smoothing time constant in seconds; `<= 0` disables damping.
    pub damping: f32,
    value: f32,
}

impl ScrollDamper {
    pub fn new(damping: f32, initial: f32) -> Self {
        Self {
            damping,
            value: initial.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move toward `raw` and return the damped progress.
    pub fn step(&mut self, raw: f32, dt_sec: f32) -> f32 {
        if !raw.is_finite() {
            return self.value;
        }
        let raw = raw.clamp(0.0, 1.0);
        if self.damping <= 0.0 {
            self.value = raw;
            return self.value;
        }
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let alpha = 1.0 - (-dt / self.damping).exp();
        self.value += (raw - self.value) * alpha;
        self.value
    }
}

impl ScrollSignal for ScrollDamper {
    fn progress(&self) -> f32 {
        self.value
    }
}
