//! Static table of camera slides.
//!
//! A [`ViewTable`] is built once at startup and never mutated. Index order is
//! slide order along the scroll axis, so the first entry is shown at the top
//! of the page and the last entry at the bottom.

use crate::color::parse_hex_color;
use crate::error::ViewTableError;
use glam::Vec3;

/// Horizontal placement of a slide's overlay text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A named camera pose plus the text shown while it is active.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewpoint {
    pub position: Vec3,
    pub look_at: Vec3,
    pub label: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// sRGB in 0..1, as authored in hex.
    pub accent: Vec3,
    pub details: Vec<String>,
    pub align: TextAlign,
}

impl Viewpoint {
    pub fn new(position: Vec3, look_at: Vec3, label: impl Into<String>) -> Self {
        Self {
            position,
            look_at,
            label: label.into(),
            subtitle: None,
            description: None,
            accent: Vec3::ONE,
            details: Vec::new(),
            align: TextAlign::default(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_accent(mut self, accent: Vec3) -> Self {
        self.accent = accent;
        self
    }

    /// Set the accent from a `#RRGGBB` / `#RGB` string.
    pub fn with_hex_accent(self, hex: &str) -> Result<Self, ViewTableError> {
        let accent = parse_hex_color(hex).map_err(|source| ViewTableError::BadAccent {
            label: self.label.clone(),
            source,
        })?;
        Ok(self.with_accent(accent))
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            Some("position")
        } else if !self.look_at.is_finite() {
            Some("look_at")
        } else if !self.accent.is_finite() {
            Some("accent")
        } else {
            None
        }
    }
}

/// Ordered, non-empty, read-only list of viewpoints.
#[derive(Clone, Debug)]
pub struct ViewTable {
    views: Vec<Viewpoint>,
}

impl ViewTable {
    /// Validate and wrap a list of viewpoints.
    ///
    /// Fails on an empty list or on any non-finite position, look-at or
    /// accent component.
    pub fn new(views: Vec<Viewpoint>) -> Result<Self, ViewTableError> {
        if views.is_empty() {
            return Err(ViewTableError::Empty);
        }
        for (index, v) in views.iter().enumerate() {
            if let Some(field) = v.non_finite_field() {
                return Err(ViewTableError::NonFinite {
                    index,
                    label: v.label.clone(),
                    field,
                });
            }
        }
        log::info!("[views] table ready with {} slides", views.len());
        Ok(Self { views })
    }

    /// The four slides of the portfolio page.
    pub fn portfolio() -> Result<Self, ViewTableError> {
        let origin = Vec3::ZERO;
        let views = vec![
            Viewpoint::new(Vec3::new(3.2, 2.2, 4.2), origin, "Intro – Hello")
                .with_subtitle("Creative developer")
                .with_description("Scroll to slide around the model. Each section is a new angle.")
                .with_hex_accent("#FFFF00")?,
            Viewpoint::new(Vec3::new(-4.0, 1.4, 2.4), origin, "Work – Selected Projects")
                .with_subtitle("Things I have shipped")
                .with_details(["Realtime 3D on the web", "Rust + WebAssembly", "Design systems"])
                .with_hex_accent("#DD00FF")?
                .with_align(TextAlign::Left),
            Viewpoint::new(Vec3::new(0.2, 5.0, 0.2), origin, "About – What I do")
                .with_subtitle("From prototypes to production")
                .with_description("Graphics, tooling and interactive front-ends.")
                .with_hex_accent("#00E5FF")?
                .with_align(TextAlign::Right),
            Viewpoint::new(Vec3::new(2.6, -2.2, -3.8), origin, "Contact – Let’s talk")
                .with_subtitle("Say hello")
                .with_details(["Email", "GitHub", "LinkedIn"])
                .with_hex_accent("#FF5A36")?,
        ];
        Self::new(views)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Viewpoint> {
        self.views.get(index)
    }

    /// Indexed access clamped to the last slide.
    #[inline]
    pub fn view(&self, index: usize) -> &Viewpoint {
        &self.views[index.min(self.views.len() - 1)]
    }

    #[inline]
    pub fn first(&self) -> &Viewpoint {
        &self.views[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Viewpoint> {
        self.views.iter()
    }

}

impl<'a> IntoIterator for &'a ViewTable {
    type Item = &'a Viewpoint;
    type IntoIter = std::slice::Iter<'a, Viewpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}
