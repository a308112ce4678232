//! Pedestrian dots walking the street grid.

use std::f32::consts::TAU;

use rand::Rng;

use super::streets::{chord_half_length, StreetGrid};
use crate::config::MapConfig;

/// Lateral wobble amplitude, in pixels.
pub const WOBBLE_AMPLITUDE: f32 = 2.0;
/// Dot radius.
pub const PEDESTRIAN_SIZE: f32 = 1.2;
/// Start this far along the walkable half-chord.
const START_MARGIN: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pedestrian {
    pub axis: Axis,
    /// Perpendicular offset of the walked line (street + sidewalk).
    pub street: f32,
    /// Coordinate along the street.
    pub pos: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    pub speed: f32,
    pub wobble_phase: f32,
    pub wobble_rate: f32,
    pub size: f32,
    pub alive: bool,
}

impl Pedestrian {
    /// Place a pedestrian at one end of a random street, walking inward.
    ///
    /// Returns `None` when the grid has no streets.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        grid: &StreetGrid,
        radius: f32,
        config: &MapConfig,
    ) -> Option<Self> {
        let axis = if rng.gen_bool(0.5) { Axis::Horizontal } else { Axis::Vertical };
        let streets = match axis {
            Axis::Horizontal => &grid.horizontal,
            Axis::Vertical => &grid.vertical,
        };
        if streets.is_empty() {
            return None;
        }
        let base = streets[rng.gen_range(0..streets.len())];
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let street = base + side * config.sidewalk_offset;

        let extent = chord_half_length(radius, street) * config.spawn_extent;
        let from_positive = rng.gen_bool(0.5);
        let (pos, direction) = if from_positive {
            (extent * START_MARGIN, -1.0)
        } else {
            (-extent * START_MARGIN, 1.0)
        };

        Some(Self {
            axis,
            street,
            pos,
            direction,
            speed: rng.gen_range(0.4..0.9),
            wobble_phase: rng.gen_range(0.0..TAU),
            wobble_rate: rng.gen_range(0.06..0.10),
            size: PEDESTRIAN_SIZE,
            alive: true,
        })
    }

    /// One frame of walking.
    pub fn advance(&mut self) {
        self.pos += self.direction * self.speed;
        self.wobble_phase += self.wobble_rate;
    }

    /// Position relative to the disc center, wobble included.
    pub fn offset(&self) -> (f32, f32) {
        let wobble = self.wobble_phase.sin() * WOBBLE_AMPLITUDE;
        match self.axis {
            Axis::Horizontal => (self.pos, self.street + wobble),
            Axis::Vertical => (self.street + wobble, self.pos),
        }
    }

    pub fn distance_from_center(&self) -> f32 {
        let (x, y) = self.offset();
        (x * x + y * y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_parameters_in_range() {
        let config = MapConfig::default();
        let grid = StreetGrid::generate(90.0, config.street_spacing, config.street_clip);
        let mut rng = SmallRng::seed_from_u64(0xC3C4);
        for _ in 0..500 {
            let p = Pedestrian::spawn(&mut rng, &grid, 90.0, &config).unwrap();
            assert!((0.4..0.9).contains(&p.speed));
            assert!((0.06..0.10).contains(&p.wobble_rate));
            assert!((0.0..TAU).contains(&p.wobble_phase));
            assert_eq!(p.direction.abs(), 1.0);
            // walks toward the center
            assert!(p.pos * p.direction <= 0.0);
            let extent = chord_half_length(90.0, p.street) * config.spawn_extent;
            assert!(p.pos.abs() <= extent);
        }
    }

    #[test]
    fn spawn_on_empty_grid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = StreetGrid::default();
        assert!(Pedestrian::spawn(&mut rng, &grid, 90.0, &MapConfig::default()).is_none());
    }

    #[test]
    fn advance_moves_along_direction() {
        let mut p = Pedestrian {
            axis: Axis::Vertical,
            street: 15.0,
            pos: -10.0,
            direction: 1.0,
            speed: 0.5,
            wobble_phase: 0.0,
            wobble_rate: 0.1,
            size: PEDESTRIAN_SIZE,
            alive: true,
        };
        p.advance();
        assert!((p.pos + 9.5).abs() < 1e-6);
        assert!((p.wobble_phase - 0.1).abs() < 1e-6);
        let (x, y) = p.offset();
        assert!((x - (15.0 + 0.1f32.sin() * WOBBLE_AMPLITUDE)).abs() < 1e-5);
        assert!((y + 9.5).abs() < 1e-6);
    }
}
