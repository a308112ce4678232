//! Drawing seam between the proximity map and the host surface.
//!
//! The map painter only speaks [`Canvas`]; the app hands it a
//! [`PainterCanvas`] wrapping an `egui::Painter`, tests hand it a recorder.

use std::f32::consts::TAU;

use egui::epaint::Mesh;
use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};

/// Segments used to approximate circles built from points.
const CIRCLE_SEGMENTS: usize = 96;

pub trait Canvas {
    /// Fill a disc whose color fades from `inner` at the center to `outer` at the rim.
    fn radial_fill(&mut self, center: Pos2, radius: f32, inner: Color32, outer: Color32);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
    fn dashed_circle(
        &mut self,
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
        dash: f32,
        gap: f32,
    );
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    /// Centered text whose baseline sits on `pos`.
    fn caption(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

/// [`Canvas`] backed by an egui painter.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn radial_fill(&mut self, center: Pos2, radius: f32, inner: Color32, outer: Color32) {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, inner);
        for p in circle_points(center, radius, CIRCLE_SEGMENTS) {
            mesh.colored_vertex(p, outer);
        }
        // circle_points closes the loop, so vertex n + 1 repeats vertex 1
        for i in 1..=CIRCLE_SEGMENTS as u32 {
            mesh.add_triangle(0, i, i + 1);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(center, radius, Stroke::new(width, color));
    }

    fn dashed_circle(
        &mut self,
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
        dash: f32,
        gap: f32,
    ) {
        let points = circle_points(center, radius, CIRCLE_SEGMENTS);
        self.painter
            .extend(Shape::dashed_line(&points, Stroke::new(width, color), dash, gap));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment([from, to], Stroke::new(width, color));
    }

    fn caption(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.painter
            .text(pos, Align2::CENTER_BOTTOM, text, FontId::proportional(size), color);
    }
}

/// `segments + 1` points around a circle, first and last coinciding.
pub fn circle_points(center: Pos2, radius: f32, segments: usize) -> Vec<Pos2> {
    (0..=segments)
        .map(|i| {
            let a = TAU * i as f32 / segments as f32;
            Pos2::new(center.x + a.cos() * radius, center.y + a.sin() * radius)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_points_close_the_loop() {
        let pts = circle_points(Pos2::new(10.0, 20.0), 5.0, 16);
        assert_eq!(pts.len(), 17);
        assert!((pts[0].x - pts[16].x).abs() < 1e-4);
        assert!((pts[0].y - pts[16].y).abs() < 1e-4);
        for p in &pts {
            let d = ((p.x - 10.0).powi(2) + (p.y - 20.0).powi(2)).sqrt();
            assert!((d - 5.0).abs() < 1e-4);
        }
    }
}
