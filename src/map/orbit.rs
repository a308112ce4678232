//! Proximity markers orbiting the city disc.

use std::f32::consts::TAU;

use rand::Rng;

/// Breathing amplitude of the marker radius.
const BREATH_AMPLITUDE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Orbiter {
    pub radius: f32,
    pub angle: f32,
    /// Radians per frame; the sign picks the orbit direction.
    pub angular_speed: f32,
    pub base_size: f32,
    pub breath_rate: f32,
    pub breath_phase: f32,
    pub opacity: f32,
}

impl Orbiter {
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Marker radius at clock time `t`.
    pub fn size_at(&self, t: f32) -> f32 {
        self.base_size + (t * self.breath_rate + self.breath_phase).sin() * BREATH_AMPLITUDE
    }

    /// Position relative to the disc center.
    pub fn offset(&self) -> (f32, f32) {
        let (s, c) = self.angle.sin_cos();
        (c * self.radius, s * self.radius)
    }
}

/// Spread `count` markers evenly in angle, from `1.5 * inner` out to `0.8 * outer`.
///
/// Outer markers are larger and more opaque.
pub fn ring<R: Rng>(rng: &mut R, inner: f32, outer: f32, count: usize) -> Vec<Orbiter> {
    let min = inner * 1.5;
    let max = outer * 0.8;
    (0..count)
        .map(|i| {
            let f = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
            let speed = 0.0002 + rng.gen::<f32>() * 0.0003;
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            Orbiter {
                radius: min + (max - min) * f,
                angle: TAU * i as f32 / count as f32,
                angular_speed: speed * sign,
                base_size: 2.0 + f * 3.0,
                breath_rate: rng.gen_range(0.5..1.0),
                breath_phase: rng.gen_range(0.0..TAU),
                opacity: 0.4 + f * 0.2,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn ring_spans_inner_to_outer() {
        let mut rng = SmallRng::seed_from_u64(0x0B17);
        let ring = ring(&mut rng, 90.0, 270.0, 6);
        assert_eq!(ring.len(), 6);
        assert!((ring[0].radius - 135.0).abs() < 1e-4);
        assert!((ring[5].radius - 216.0).abs() < 1e-4);
        assert!((ring[0].base_size - 2.0).abs() < 1e-6);
        assert!((ring[5].base_size - 5.0).abs() < 1e-6);
        assert!((ring[0].opacity - 0.4).abs() < 1e-6);
        assert!((ring[5].opacity - 0.6).abs() < 1e-6);
        for w in ring.windows(2) {
            assert!(w[1].radius > w[0].radius);
        }
    }

    #[test]
    fn speeds_and_breathing_in_range() {
        let mut rng = SmallRng::seed_from_u64(99);
        for o in ring(&mut rng, 50.0, 150.0, 64) {
            let s = o.angular_speed.abs();
            assert!(s >= 0.0002 - 1e-9 && s <= 0.0005 + 1e-9);
            assert!((0.5..1.0).contains(&o.breath_rate));
            for t in [0.0, 1.7, 33.3] {
                let size = o.size_at(t);
                assert!(size >= o.base_size - 0.5 - 1e-6 && size <= o.base_size + 0.5 + 1e-6);
            }
        }
    }

    #[test]
    fn single_marker_sits_on_inner_bound() {
        let mut rng = SmallRng::seed_from_u64(5);
        let ring = ring(&mut rng, 40.0, 120.0, 1);
        assert_eq!(ring.len(), 1);
        assert!((ring[0].radius - 60.0).abs() < 1e-5);
    }

    #[test]
    fn advance_keeps_radius() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut o = ring(&mut rng, 90.0, 270.0, 6).remove(3);
        for _ in 0..1000 {
            o.advance();
        }
        let (x, y) = o.offset();
        assert!(((x * x + y * y).sqrt() - o.radius).abs() < 1e-2);
    }
}
