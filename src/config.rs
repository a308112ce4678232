//! Deck configuration.
//!
//! Every tunable of the proximity map and the shell transitions lives here
//! with its default. A JSON file may override any subset of fields:
//!
//! ```json
//! { "map": { "rng_seed": 7, "pedestrian_cap": 120 }, "timing": { "open_delay_ms": 150 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "CERCA_CONFIG";

/// Errors raised while loading or validating a [`DeckConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Smallest accepted street spacing, in pixels.
pub const MIN_STREET_SPACING: f32 = 1.0;

/// Geometry and population parameters of the proximity map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Inner ("city") disc radius as a fraction of the shorter viewport side.
    pub inner_fraction: f32,
    /// Outer orbit bound as a fraction of the shorter viewport side.
    pub outer_fraction: f32,
    /// Distance between neighbouring streets, in pixels.
    pub street_spacing: f32,
    /// Streets are kept while `|offset| < street_clip * inner_radius`.
    pub street_clip: f32,
    /// Pedestrians walk this far to either side of the street centre line.
    pub sidewalk_offset: f32,
    /// Fraction of the street chord a pedestrian may start on.
    pub spawn_extent: f32,
    /// Pedestrians die once further than `cull_fraction * inner_radius` from center.
    pub cull_fraction: f32,
    /// Pedestrians created on every (re)generation.
    pub initial_pedestrians: usize,
    /// Population cap at clock zero.
    pub growth_base: f32,
    /// Cap growth per clock unit.
    pub growth_rate: f32,
    /// Hard population ceiling.
    pub pedestrian_cap: usize,
    /// Number of orbiting proximity markers.
    pub orbit_count: usize,
    /// Clock advance per frame. Not tied to wall time.
    pub frame_step: f32,
    /// Optional RNG seed for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            inner_fraction: 0.15,
            outer_fraction: 0.45,
            street_spacing: 15.0,
            street_clip: 0.9,
            sidewalk_offset: 5.0,
            spawn_extent: 0.75,
            cull_fraction: 0.8,
            initial_pedestrians: 5,
            growth_base: 5.0,
            growth_rate: 0.5,
            pedestrian_cap: 80,
            orbit_count: 6,
            frame_step: 0.016,
            rng_seed: None,
        }
    }
}

/// Delays driving the shell's panel and intensity transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellTiming {
    /// Selection → panel open.
    pub open_delay_ms: u64,
    /// Panel close → active topic cleared.
    pub close_delay_ms: u64,
    /// Selection → intensity starts rising.
    pub intensity_delay_ms: u64,
    /// Duration of the 0 → 1 intensity ramp.
    pub intensity_ease_ms: u64,
}

impl Default for ShellTiming {
    fn default() -> Self {
        Self {
            open_delay_ms: 200,
            close_delay_ms: 400,
            intensity_delay_ms: 100,
            intensity_ease_ms: 600,
        }
    }
}

impl ShellTiming {
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn intensity_delay(&self) -> Duration {
        Duration::from_millis(self.intensity_delay_ms)
    }

    pub fn intensity_ease(&self) -> Duration {
        Duration::from_millis(self.intensity_ease_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub map: MapConfig,
    pub timing: ShellTiming,
}

impl DeckConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Resolve the configuration from [`CONFIG_ENV`], falling back to defaults.
    ///
    /// A broken file is logged and ignored; the deck always starts.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => match Self::load(&path) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring configuration: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default configuration");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.map;
        let floats = [
            m.inner_fraction,
            m.outer_fraction,
            m.street_spacing,
            m.street_clip,
            m.sidewalk_offset,
            m.spawn_extent,
            m.cull_fraction,
            m.growth_base,
            m.growth_rate,
            m.frame_step,
        ];
        if floats.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("numeric settings must be finite"));
        }
        let fraction = |v: f32| v > 0.0 && v <= 1.0;
        if !fraction(m.inner_fraction) || !fraction(m.outer_fraction) {
            return Err(ConfigError::Invalid("radius fractions must lie in (0, 1]"));
        }
        if m.outer_fraction <= m.inner_fraction {
            return Err(ConfigError::Invalid("outer_fraction must exceed inner_fraction"));
        }
        if m.street_spacing < MIN_STREET_SPACING {
            return Err(ConfigError::Invalid("street_spacing must be at least 1 pixel"));
        }
        if !fraction(m.street_clip) || !fraction(m.cull_fraction) || !fraction(m.spawn_extent) {
            return Err(ConfigError::Invalid(
                "street_clip, cull_fraction and spawn_extent must lie in (0, 1]",
            ));
        }
        if m.sidewalk_offset < 0.0 {
            return Err(ConfigError::Invalid("sidewalk_offset must not be negative"));
        }
        if m.initial_pedestrians > m.pedestrian_cap {
            return Err(ConfigError::Invalid("initial_pedestrians exceeds pedestrian_cap"));
        }
        if m.growth_base < 0.0 || m.growth_rate < 0.0 {
            return Err(ConfigError::Invalid("population growth must not be negative"));
        }
        if m.orbit_count == 0 {
            return Err(ConfigError::Invalid("orbit_count must be at least 1"));
        }
        if !(m.frame_step > 0.0) {
            return Err(ConfigError::Invalid("frame_step must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DeckConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            DeckConfig::from_json(r#"{ "map": { "rng_seed": 7 }, "timing": { "open_delay_ms": 150 } }"#)
                .unwrap();
        assert_eq!(config.map.rng_seed, Some(7));
        assert_eq!(config.map.pedestrian_cap, 80);
        assert_eq!(config.timing.open_delay(), Duration::from_millis(150));
        assert_eq!(config.timing.close_delay(), Duration::from_millis(400));
    }

    #[test]
    fn rejects_inverted_radii() {
        let err = DeckConfig::from_json(r#"{ "map": { "inner_fraction": 0.5, "outer_fraction": 0.4 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_orbits() {
        let mut config = DeckConfig::default();
        config.map.orbit_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_overflowing_frame_step() {
        // 1e39 overflows f32 and parses as infinity
        let err = DeckConfig::from_json(r#"{ "map": { "frame_step": 1e39 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_finite_growth_and_offsets() {
        for field in ["growth_rate", "growth_base", "sidewalk_offset", "street_spacing"] {
            let json = format!(r#"{{ "map": {{ "{}": 1e39 }} }}"#, field);
            assert!(DeckConfig::from_json(&json).is_err(), "{field}");
        }
        let mut config = DeckConfig::default();
        config.map.growth_rate = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_subpixel_street_spacing() {
        let err = DeckConfig::from_json(r#"{ "map": { "street_spacing": 1e-6 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(DeckConfig::from_json(r#"{ "map": { "street_spacing": 1.0 } }"#).is_ok());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = DeckConfig::from_json("{ map: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DeckConfig::load("/definitely/not/here/cerca.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("cerca.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
