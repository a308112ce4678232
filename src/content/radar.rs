//! Radar chart geometry for the segment profile.
//!
//! Axes start at twelve o'clock and go clockwise. Each value scales its
//! vertex along the axis; during the reveal every value is additionally
//! multiplied by the reveal progress so the polygon grows from the center.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Pos2, Vec2};

/// Chart radius as a fraction of the chart size.
pub const RADIUS_FRACTION: f32 = 0.36;
/// Distance from the chart rim to the axis labels.
pub const LABEL_GAP: f32 = 40.0;
/// Guide ring radii as fractions of the chart radius.
pub const GUIDE_RINGS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarAxis {
    pub label: &'static str,
    /// In `[0, 1]`.
    pub value: f32,
}

impl RadarAxis {
    pub fn percent(&self) -> u32 {
        (self.value * 100.0).round() as u32
    }
}

pub const SEGMENT_PROFILE: [RadarAxis; 6] = [
    RadarAxis { label: "Tiempo libre", value: 0.25 },
    RadarAxis { label: "Nivel de estrés", value: 0.88 },
    RadarAxis { label: "Poder adquisitivo", value: 0.72 },
    RadarAxis { label: "Uso digital", value: 0.92 },
    RadarAxis { label: "Eco-consciencia", value: 0.78 },
    RadarAxis { label: "Exigencia emocional", value: 0.95 },
];

/// Placement of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    /// Polygon vertex for the current progress.
    pub vertex: Pos2,
    /// Where the axis line ends on the outer guide ring.
    pub tip: Pos2,
    pub label_pos: Pos2,
}

pub fn chart_radius(size: f32) -> f32 {
    size * RADIUS_FRACTION
}

pub fn axis_angle(index: usize, count: usize) -> f32 {
    TAU * index as f32 / count.max(1) as f32 - FRAC_PI_2
}

pub fn radar_layout(axes: &[RadarAxis], center: Pos2, size: f32, progress: f32) -> Vec<RadarPoint> {
    let radius = chart_radius(size);
    let progress = progress.clamp(0.0, 1.0);
    axes.iter()
        .enumerate()
        .map(|(i, axis)| {
            let (s, c) = axis_angle(i, axes.len()).sin_cos();
            let dir = Vec2::new(c, s);
            RadarPoint {
                vertex: center + dir * radius * axis.value * progress,
                tip: center + dir * radius,
                label_pos: center + dir * (radius + LABEL_GAP),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Pos2 = Pos2::new(140.0, 140.0);

    #[test]
    fn first_axis_points_up() {
        let pts = radar_layout(&SEGMENT_PROFILE, C, 280.0, 1.0);
        assert_eq!(pts.len(), 6);
        let tip = pts[0].tip;
        assert!((tip.x - 140.0).abs() < 1e-3);
        assert!((tip.y - (140.0 - 100.8)).abs() < 1e-3);
        // Tiempo libre at 25%
        assert!(((pts[0].vertex - C).length() - 25.2).abs() < 1e-3);
        assert!(((pts[0].label_pos - C).length() - 140.8).abs() < 1e-3);
    }

    #[test]
    fn unrevealed_polygon_collapses_to_center() {
        for p in radar_layout(&SEGMENT_PROFILE, C, 280.0, 0.0) {
            assert!((p.vertex - C).length() < 1e-4);
        }
    }

    #[test]
    fn vertices_scale_with_value() {
        let pts = radar_layout(&SEGMENT_PROFILE, C, 300.0, 1.0);
        for (p, axis) in pts.iter().zip(SEGMENT_PROFILE) {
            let expected = chart_radius(300.0) * axis.value;
            assert!(((p.vertex - C).length() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn percent_labels() {
        let pcts: Vec<_> = SEGMENT_PROFILE.iter().map(RadarAxis::percent).collect();
        assert_eq!(pcts, [25, 88, 72, 92, 78, 95]);
    }
}
