//! Intensity-driven colors of the proximity map, plus the brand swatches
//! shared by the panels.
//!
//! The map has two moods. At low intensity everything is a neutral gray;
//! once a topic is active the scene turns warm (clay, moss, deep green).
//! Selection is a pure function of the intensity scalar.

use egui::Color32;

/// Intensity above which the scene switches to the warm mood.
pub const WARM_THRESHOLD: f32 = 0.3;
/// Intensity above which the backdrop gradient turns green-black.
pub const BACKDROP_THRESHOLD: f32 = 0.5;
/// Intensity above which the disc caption is drawn.
pub const CAPTION_THRESHOLD: f32 = 0.1;

// ── Brand swatches ──

pub const CLAY: Color32 = Color32::from_rgb(212, 163, 115);
pub const MOSS: Color32 = Color32::from_rgb(88, 129, 87);
pub const COPPER: Color32 = Color32::from_rgb(188, 108, 37);
pub const OLIVE_SAGE: Color32 = Color32::from_rgb(107, 127, 90);
pub const DEEP_FOREST: Color32 = Color32::from_rgb(45, 74, 62);
pub const RIPE_OLIVE: Color32 = Color32::from_rgb(96, 108, 56);
pub const LINEN: Color32 = Color32::from_rgb(254, 250, 224);
pub const GREEN_NIGHT: Color32 = Color32::from_rgb(40, 54, 24);
pub const INK: Color32 = Color32::from_rgb(5, 5, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Neutral,
    Warm,
}

impl Mood {
    /// `t <= 0.3` is neutral, anything above is warm.
    pub fn from_intensity(t: f32) -> Self {
        if t > WARM_THRESHOLD {
            Mood::Warm
        } else {
            Mood::Neutral
        }
    }
}

/// Resolved colors for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub mood: Mood,
    /// Radial backdrop stops: center, rim.
    pub backdrop: [Color32; 2],
    pub disc_fill: Color32,
    pub street: Color32,
    pub pedestrian: Color32,
    pub disc_border: Color32,
    /// `None` while the intensity is too low for the caption.
    pub caption: Option<Color32>,
}

impl Palette {
    pub fn for_intensity(intensity: f32) -> Self {
        let t = if intensity.is_finite() { intensity.clamp(0.0, 1.0) } else { 0.0 };
        let mood = Mood::from_intensity(t);
        let backdrop = if t > BACKDROP_THRESHOLD {
            [Color32::from_rgb(13, 18, 16), Color32::from_rgb(5, 8, 5)]
        } else {
            [Color32::from_rgb(10, 10, 10), Color32::from_rgb(5, 5, 5)]
        };
        let caption = (t > CAPTION_THRESHOLD).then(|| rgba(212, 163, 115, 0.5 + t * 0.5));

        match mood {
            Mood::Warm => Self {
                mood,
                backdrop,
                disc_fill: rgba(20, 25, 22, 0.5),
                street: rgba(45, 74, 62, 0.25),
                pedestrian: rgba(180, 200, 180, 0.35),
                disc_border: rgba(212, 163, 115, 0.4),
                caption,
            },
            Mood::Neutral => Self {
                mood,
                backdrop,
                disc_fill: rgba(18, 18, 18, 0.5),
                street: rgba(50, 50, 50, 0.3),
                pedestrian: rgba(180, 180, 180, 0.30),
                disc_border: rgba(255, 255, 255, 0.15),
                caption,
            },
        }
    }

    /// Stroke color of dashed ring `index` (0 = innermost); outer rings are brighter.
    pub fn ring(&self, index: usize) -> Color32 {
        let i = index as f32;
        match self.mood {
            Mood::Warm => rgba(88, 129, 87, 0.1 + i * 0.05),
            Mood::Neutral => rgba(255, 255, 255, 0.03 + i * 0.02),
        }
    }

    /// Orbiting markers keep their copper tint in both moods.
    pub fn orbiter(&self, opacity: f32) -> Color32 {
        rgba(188, 108, 37, opacity)
    }
}

/// CSS-style `rgba()` with a 0–1 alpha.
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, (a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Same color with a 0–1 alpha.
pub fn with_alpha(c: Color32, a: f32) -> Color32 {
    rgba(c.r(), c.g(), c.b(), a)
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let m = |a: u8, b: u8| ((a as f32) * (1.0 - t) + (b as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(m(a.r(), b.r()), m(a.g(), b.g()), m(a.b(), b.b()), m(a.a(), b.a()))
}
