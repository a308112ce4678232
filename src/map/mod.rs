//! Proximity map simulation.
//!
//! A "city" disc in the middle of the viewport, crossed by a street grid on
//! which pedestrian dots wander, surrounded by slowly orbiting proximity
//! markers. All state is owned by [`ProximityMap`]; painting lives in
//! `render::map_paint` and reads it without mutation.
//!
//! - Streets: regenerated on every resize
//! - Pedestrians: spawned at street ends, culled past the cull radius,
//!   topped up toward a cap that grows with the clock
//! - Orbiters: fixed count, regenerated on every resize

pub mod orbit;
pub mod pedestrian;
pub mod streets;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::MapConfig;
use orbit::Orbiter;
use pedestrian::Pedestrian;
use streets::StreetGrid;

/// Spawn candidates drawn per admitted pedestrian.
const SPAWN_ATTEMPTS: usize = 8;

/// Drawable surface size, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False for zero-sized or non-finite surfaces, which are never simulated.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Shorter side; every radius scales with it.
    pub fn ref_size(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

/// Owned simulation context of the animated background.
#[derive(Debug, Clone)]
pub struct ProximityMap {
    config: MapConfig,
    viewport: Viewport,
    streets: StreetGrid,
    pedestrians: Vec<Pedestrian>,
    orbiters: Vec<Orbiter>,
    /// Simulated seconds; advances by `frame_step` per step.
    clock: f32,
    rng: SmallRng,
}

impl ProximityMap {
    /// Build a map, seeding from `config.rng_seed` or from entropy.
    pub fn new(config: MapConfig, viewport: Viewport) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, viewport, rng)
    }

    pub fn with_seed(config: MapConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: MapConfig, viewport: Viewport, rng: SmallRng) -> Self {
        let mut map = Self {
            config,
            viewport,
            streets: StreetGrid::default(),
            pedestrians: Vec::new(),
            orbiters: Vec::new(),
            clock: 0.0,
            rng,
        };
        map.regenerate();
        map
    }

    /// Adopt a new viewport and rebuild everything sized from it.
    ///
    /// Particle identity is not preserved. The clock keeps running, so the
    /// population cap does not fall back.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.regenerate();
        log::debug!(
            "Proximity map resized to {}x{}: {} streets, inner radius {:.1}",
            viewport.width,
            viewport.height,
            self.streets.len(),
            self.inner_radius()
        );
    }

    fn regenerate(&mut self) {
        let inner = self.inner_radius();
        let outer = self.outer_radius();
        self.streets =
            StreetGrid::generate(inner, self.config.street_spacing, self.config.street_clip);

        self.pedestrians.clear();
        for _ in 0..self.config.initial_pedestrians {
            if let Some(p) = admit(&mut self.rng, &self.streets, inner, &self.config) {
                self.pedestrians.push(p);
            }
        }

        self.orbiters = orbit::ring(&mut self.rng, inner, outer, self.config.orbit_count);
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        self.clock += self.config.frame_step;

        let cull = self.cull_radius();
        for p in self.pedestrians.iter_mut() {
            p.advance();
            if p.distance_from_center() > cull {
                p.alive = false;
            }
        }
        self.pedestrians.retain(|p| p.alive);

        if (self.pedestrians.len() as f32) < self.population_cap() {
            let inner = self.inner_radius();
            if let Some(p) = admit(&mut self.rng, &self.streets, inner, &self.config) {
                self.pedestrians.push(p);
            }
        }

        for o in self.orbiters.iter_mut() {
            o.advance();
        }
    }

    /// Population ceiling at the current clock: `min(cap, base + rate * clock)`.
    pub fn population_cap(&self) -> f32 {
        let growing = self.config.growth_base + self.config.growth_rate * self.clock;
        growing.min(self.config.pedestrian_cap as f32)
    }

    pub fn inner_radius(&self) -> f32 {
        self.viewport.ref_size() * self.config.inner_fraction
    }

    pub fn outer_radius(&self) -> f32 {
        self.viewport.ref_size() * self.config.outer_fraction
    }

    pub fn cull_radius(&self) -> f32 {
        self.inner_radius() * self.config.cull_fraction
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn streets(&self) -> &StreetGrid {
        &self.streets
    }

    pub fn pedestrians(&self) -> &[Pedestrian] {
        &self.pedestrians
    }

    pub fn orbiters(&self) -> &[Orbiter] {
        &self.orbiters
    }
}

/// Draw spawn candidates until one already stands inside the cull radius.
fn admit<R: Rng>(
    rng: &mut R,
    streets: &StreetGrid,
    inner: f32,
    config: &MapConfig,
) -> Option<Pedestrian> {
    let cull = inner * config.cull_fraction;
    (0..SPAWN_ATTEMPTS)
        .filter_map(|_| Pedestrian::spawn(rng, streets, inner, config))
        .find(|p| p.distance_from_center() <= cull)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: f32, height: f32) -> ProximityMap {
        ProximityMap::with_seed(MapConfig::default(), Viewport::new(width, height), 0x5EED)
    }

    #[test]
    fn radii_follow_shorter_side() {
        let mut map = seeded(800.0, 600.0);
        assert!((map.inner_radius() - 90.0).abs() < 1e-4);
        assert!((map.outer_radius() - 270.0).abs() < 1e-4);

        map.resize(Viewport::new(1920.0, 1080.0));
        assert!((map.inner_radius() - 162.0).abs() < 1e-4);
        for &o in &map.streets().horizontal {
            assert!(o.abs() < 0.9 * 162.0);
        }
    }

    #[test]
    fn initial_population() {
        let map = seeded(800.0, 600.0);
        assert_eq!(map.pedestrians().len(), 5);
        assert_eq!(map.orbiters().len(), 6);
        assert_eq!(map.clock(), 0.0);
    }

    #[test]
    fn live_pedestrians_stay_inside_cull_radius() {
        let mut map = seeded(800.0, 600.0);
        let cull = map.cull_radius();
        for p in map.pedestrians() {
            assert!(p.distance_from_center() <= cull);
        }
        for _ in 0..3_000 {
            map.step();
            for p in map.pedestrians() {
                assert!(p.alive);
                assert!(p.distance_from_center() <= cull + 1e-4);
            }
        }
    }

    #[test]
    fn population_bounded_by_growing_cap() {
        let mut map = seeded(1280.0, 800.0);
        for _ in 0..12_000 {
            map.step();
            let n = map.pedestrians().len();
            assert!(n <= 80);
            assert!(n as f32 <= map.population_cap().ceil());
        }
        // 12k frames = 192 clock units, cap saturated long ago
        assert!((map.population_cap() - 80.0).abs() < 1e-6);
        assert!(map.pedestrians().len() > 40);
    }

    #[test]
    fn population_grows_while_under_cap() {
        let mut map = seeded(1280.0, 800.0);
        let mut peak = map.pedestrians().len();
        for _ in 0..2_000 {
            map.step();
            peak = peak.max(map.pedestrians().len());
        }
        // cap after 2000 frames is 5 + 0.5 * 32 = 21, give or take float drift
        assert!(peak > 5);
        assert!(peak <= 22);
    }

    #[test]
    fn resize_regenerates_fixed_orbit_count() {
        let mut map = seeded(800.0, 600.0);
        for _ in 0..500 {
            map.step();
        }
        let clock = map.clock();
        map.resize(Viewport::new(1920.0, 1080.0));
        assert_eq!(map.orbiters().len(), 6);
        assert_eq!(map.pedestrians().len(), 5);
        assert_eq!(map.clock(), clock);
        let inner = map.inner_radius();
        assert!((map.orbiters()[0].radius - inner * 1.5).abs() < 1e-3);
        assert!((map.orbiters()[5].radius - map.outer_radius() * 0.8).abs() < 1e-3);
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = seeded(800.0, 600.0);
        let mut b = seeded(800.0, 600.0);
        for _ in 0..300 {
            a.step();
            b.step();
        }
        assert_eq!(a.pedestrians(), b.pedestrians());
        assert_eq!(a.orbiters(), b.orbiters());
    }

    #[test]
    fn viewport_drawable() {
        assert!(Viewport::new(1.0, 1.0).is_drawable());
        assert!(!Viewport::new(0.0, 600.0).is_drawable());
        assert!(!Viewport::new(800.0, f32::NAN).is_drawable());
        assert_eq!(Viewport::new(800.0, 600.0).center(), (400.0, 300.0));
    }
}
