//! Cerca: an animated proximity map behind a five-topic presentation deck.
//!
//! - `map`: the street/pedestrian/orbit simulation
//! - `render`: palette, canvas seam, map painter and the animation loop
//! - `shell`: topic selection and slide-over panel state
//! - `content`: panel copy, chart geometry, waveforms
//! - `config`: JSON configuration with defaults

pub mod config;
pub mod content;
pub mod map;
pub mod render;
pub mod shell;

pub use config::{ConfigError, DeckConfig, MapConfig, ShellTiming};
pub use map::{ProximityMap, Viewport};
pub use shell::{PresentationShell, Topic};
