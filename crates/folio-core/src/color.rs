//! Scroll-driven accent colour, backdrop and fog.

use crate::constants::{BACKGROUND_WHITE_MIX, FOG_DENSITY, WHITE};
use crate::context::{Fog, MaterialHandle, SceneHandle};
use crate::error::ColorParseError;
use crate::selector::ViewBlend;
use crate::views::ViewTable;
use glam::Vec3;

/// Colour outputs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorState {
    /// Blended accent, applied unmodified as the model tint.
    pub active: Vec3,
    /// Accent washed toward white; used as backdrop and fog colour.
    pub background: Vec3,
    pub fog: Fog,
}

/// Component-wise RGB blend of the two adjacent accents.
#[inline]
pub fn blend_accent(table: &ViewTable, blend: ViewBlend) -> Vec3 {
    let a = table.view(blend.current).accent;
    let b = table.view(blend.next).accent;
    a.lerp(b, blend.weight)
}

#[inline]
pub fn toward_white(color: Vec3, mix: f32) -> Vec3 {
    color.lerp(WHITE, mix.clamp(0.0, 1.0))
}

/// Parse `#RRGGBB`, `RRGGBB` or `#RGB` into RGB 0..1.
pub fn parse_hex_color(s: &str) -> Result<Vec3, ColorParseError> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit(s.to_string()));
    }
    let nibbles: Vec<u8> = hex
        .bytes()
        .filter_map(|b| (b as char).to_digit(16))
        .map(|d| d as u8)
        .collect();
    let bytes: [u8; 3] = match nibbles.as_slice() {
        [r, g, b] => [r * 17, g * 17, b * 17],
        [r1, r0, g1, g0, b1, b0] => [r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0],
        _ => return Err(ColorParseError::BadLength(s.to_string())),
    };
    Ok(Vec3::new(
        bytes[0] as f32 / 255.0,
        bytes[1] as f32 / 255.0,
        bytes[2] as f32 / 255.0,
    ))
}

/// Decode an sRGB colour to linear light for a `*Srgb` render target.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    let decode = |v: f32| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(decode(c.x), decode(c.y), decode(c.z))
}

/// Owns the colour state and pushes it to the scene and model every frame.
#[derive(Clone, Debug)]
pub struct ColorRig {
    state: ColorState,
    white_mix: f32,
    fog_density: f32,
}

impl ColorRig {
    pub fn new(initial_accent: Vec3, white_mix: f32, fog_density: f32) -> Self {
        let mut rig = Self {
            state: ColorState {
                active: initial_accent,
                background: Vec3::ONE,
                fog: Fog {
                    color: Vec3::ONE,
                    density: fog_density,
                },
            },
            white_mix,
            fog_density,
        };
        rig.state = rig.derive(initial_accent);
        rig
    }

    #[inline]
    pub fn state(&self) -> ColorState {
        self.state
    }

    fn derive(&self, active: Vec3) -> ColorState {
        let background = toward_white(active, self.white_mix);
        ColorState {
            active,
            background,
            fog: Fog {
                color: background,
                density: self.fog_density,
            },
        }
    }

    /// Recompute from `blend` and apply backdrop, fog and tint.
    ///
    /// Runs every frame since the weight moves even when the slide index
    /// does not.
    pub fn apply(
        &mut self,
        table: &ViewTable,
        blend: ViewBlend,
        scene: &mut dyn SceneHandle,
        material: &mut dyn MaterialHandle,
    ) -> ColorState {
        self.state = self.derive(blend_accent(table, blend));
        scene.set_background(self.state.background);
        scene.set_fog(self.state.fog);
        material.set_tint(self.state.active);
        self.state
    }
}

impl Default for ColorRig {
    fn default() -> Self {
        Self::new(WHITE, BACKGROUND_WHITE_MIX, FOG_DENSITY)
    }
}
