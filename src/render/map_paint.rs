//! Paint one frame of the proximity map.
//!
//! Order: backdrop, disc fill, streets, pedestrians, disc border, orbiters,
//! dashed rings, caption. Nothing here mutates the simulation.

use egui::{Pos2, Vec2};

use super::canvas::Canvas;
use super::palette::Palette;
use crate::map::streets::chord_half_length;
use crate::map::ProximityMap;

/// Dashed ring radii as fractions of half the shorter viewport side.
pub const RING_FRACTIONS: [f32; 4] = [0.3, 0.5, 0.7, 0.9];
pub const CAPTION: &str = "Tu ciudad";
const CAPTION_GAP: f32 = 20.0;
const CAPTION_SIZE: f32 = 11.0;
const RING_JITTER: f32 = 2.0;
const RING_DASH: f32 = 5.0;
const RING_GAP: f32 = 15.0;
const DISC_BORDER_WIDTH: f32 = 1.5;

/// Paint `map` with its viewport's top-left corner at `origin`.
pub fn paint_map<C: Canvas + ?Sized>(
    canvas: &mut C,
    map: &ProximityMap,
    origin: Pos2,
    intensity: f32,
) {
    let viewport = map.viewport();
    if !viewport.is_drawable() {
        return;
    }
    let palette = Palette::for_intensity(intensity);
    let (cx, cy) = viewport.center();
    let center = origin + Vec2::new(cx, cy);
    let inner = map.inner_radius();
    let ref_size = viewport.ref_size();
    let t = map.clock();

    canvas.radial_fill(
        center,
        viewport.width.max(viewport.height),
        palette.backdrop[0],
        palette.backdrop[1],
    );

    // City disc. Streets are cut to the chord and pedestrians never leave
    // the cull radius, so nothing drawn here escapes the disc.
    canvas.fill_circle(center, inner, palette.disc_fill);

    let streets = map.streets();
    for &y in &streets.horizontal {
        let half = chord_half_length(inner, y);
        canvas.line(
            center + Vec2::new(-half, y),
            center + Vec2::new(half, y),
            1.0,
            palette.street,
        );
    }
    for &x in &streets.vertical {
        let half = chord_half_length(inner, x);
        canvas.line(
            center + Vec2::new(x, -half),
            center + Vec2::new(x, half),
            1.0,
            palette.street,
        );
    }

    for p in map.pedestrians() {
        let (dx, dy) = p.offset();
        canvas.fill_circle(center + Vec2::new(dx, dy), p.size, palette.pedestrian);
    }

    canvas.stroke_circle(center, inner, DISC_BORDER_WIDTH, palette.disc_border);

    for o in map.orbiters() {
        let (dx, dy) = o.offset();
        canvas.fill_circle(center + Vec2::new(dx, dy), o.size_at(t), palette.orbiter(o.opacity));
    }

    for (i, f) in RING_FRACTIONS.iter().enumerate() {
        let radius = f * ref_size / 2.0 + (t + i as f32 * 0.5).sin() * RING_JITTER;
        canvas.dashed_circle(center, radius, 1.0, palette.ring(i), RING_DASH, RING_GAP);
    }

    if let Some(color) = palette.caption {
        canvas.caption(
            center + Vec2::new(0.0, inner + CAPTION_GAP),
            CAPTION,
            CAPTION_SIZE,
            color,
        );
    }
}
