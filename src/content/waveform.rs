//! Before/after sound waveforms.
//!
//! Two 50-bar visualizers: a chaotic "urban noise" one and a slow
//! breathing "Cerca rhythm" one. Bars are regenerated on a fixed cadence
//! while playing and rest at a flat low height when stopped. At most one
//! of the pair plays at a time.

use std::time::Duration;

use egui::Color32;
use rand::Rng;

use crate::render::palette::rgba;

pub const BAR_COUNT: usize = 50;
/// Bar height while stopped.
pub const IDLE_HEIGHT: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    Urban,
    Cerca,
}

impl WaveKind {
    /// Time between regenerations while playing.
    pub fn interval(self) -> Duration {
        match self {
            WaveKind::Urban => Duration::from_millis(80),
            WaveKind::Cerca => Duration::from_millis(120),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WaveKind::Urban => "Ruido Urbano",
            WaveKind::Cerca => "Ritmo CERCA",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            WaveKind::Urban => "Caótico · Estresante · Impredecible",
            WaveKind::Cerca => "Pausado · Respiratorio · Orgánico",
        }
    }

    pub fn play_label(self) -> &'static str {
        match self {
            WaveKind::Urban => "▶ Simular ruido",
            WaveKind::Cerca => "▶ Simular ritmo",
        }
    }

    pub fn bar_color(self, height: f32) -> Color32 {
        match self {
            WaveKind::Urban => rgba(180, 180, 180, 0.3 + height * 0.4),
            WaveKind::Cerca => rgba(88, 129, 87, 0.5 + height * 0.5),
        }
    }

    /// Height of bar `index` at `now`.
    fn sample<R: Rng>(self, index: usize, now: Duration, rng: &mut R) -> f32 {
        match self {
            WaveKind::Urban => rng.gen::<f32>() * 0.85 + 0.15,
            WaveKind::Cerca => {
                let ms = now.as_secs_f64() * 1000.0;
                let phase = (ms / 800.0) as f32 + index as f32 * 0.2;
                phase.sin() * 0.25 + 0.35 + rng.gen::<f32>() * 0.08
            }
        }
    }
}

pub const STOP_LABEL: &str = "⏸ Detener";

#[derive(Debug, Clone)]
pub struct Waveform {
    kind: WaveKind,
    playing: bool,
    heights: [f32; BAR_COUNT],
    last_update: Option<Duration>,
}

impl Waveform {
    pub fn new(kind: WaveKind) -> Self {
        Self {
            kind,
            playing: false,
            heights: [IDLE_HEIGHT; BAR_COUNT],
            last_update: None,
        }
    }

    pub fn kind(&self) -> WaveKind {
        self.kind
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn heights(&self) -> &[f32; BAR_COUNT] {
        &self.heights
    }

    /// Start playing; the first regeneration lands one interval later.
    pub fn start(&mut self, now: Duration) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.last_update = Some(now);
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.last_update = None;
        self.heights = [IDLE_HEIGHT; BAR_COUNT];
    }

    /// Regenerate the bars if an interval has passed. Returns whether they changed.
    pub fn update<R: Rng>(&mut self, now: Duration, rng: &mut R) -> bool {
        if !self.playing {
            return false;
        }
        let due = match self.last_update {
            Some(last) => now.saturating_sub(last) >= self.kind.interval(),
            None => true,
        };
        if !due {
            return false;
        }
        for (i, h) in self.heights.iter_mut().enumerate() {
            *h = self.kind.sample(i, now, rng);
        }
        self.last_update = Some(now);
        true
    }

    /// Time until the next regeneration while playing.
    pub fn next_due(&self, now: Duration) -> Option<Duration> {
        if !self.playing {
            return None;
        }
        let last = self.last_update.unwrap_or(now);
        Some((last + self.kind.interval()).saturating_sub(now))
    }
}

/// The urban/Cerca pair; starting one stops the other.
#[derive(Debug, Clone)]
pub struct WaveformPair {
    pub urban: Waveform,
    pub cerca: Waveform,
}

impl Default for WaveformPair {
    fn default() -> Self {
        Self {
            urban: Waveform::new(WaveKind::Urban),
            cerca: Waveform::new(WaveKind::Cerca),
        }
    }
}

impl WaveformPair {
    pub fn get(&self, kind: WaveKind) -> &Waveform {
        match kind {
            WaveKind::Urban => &self.urban,
            WaveKind::Cerca => &self.cerca,
        }
    }

    /// Toggle `kind` and stop its sibling.
    pub fn toggle(&mut self, kind: WaveKind, now: Duration) {
        let (target, sibling) = match kind {
            WaveKind::Urban => (&mut self.urban, &mut self.cerca),
            WaveKind::Cerca => (&mut self.cerca, &mut self.urban),
        };
        if target.is_playing() {
            target.stop();
        } else {
            target.start(now);
        }
        sibling.stop();
        log::debug!("Waveform {:?} playing: {}", kind, target.is_playing());
    }

    pub fn stop_all(&mut self) {
        self.urban.stop();
        self.cerca.stop();
    }

    pub fn update<R: Rng>(&mut self, now: Duration, rng: &mut R) -> bool {
        let a = self.urban.update(now, rng);
        let b = self.cerca.update(now, rng);
        a || b
    }

    pub fn next_due(&self, now: Duration) -> Option<Duration> {
        match (self.urban.next_due(now), self.cerca.next_due(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn stopped_bars_are_flat() {
        let w = Waveform::new(WaveKind::Urban);
        assert!(!w.is_playing());
        assert!(w.heights().iter().all(|&h| h == IDLE_HEIGHT));
    }

    #[test]
    fn urban_regenerates_every_80ms() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut w = Waveform::new(WaveKind::Urban);
        w.start(ms(0));
        assert!(!w.update(ms(79), &mut rng));
        assert!(w.update(ms(80), &mut rng));
        assert!(w.heights().iter().all(|&h| (0.15..=1.0).contains(&h)));
        assert!(!w.update(ms(150), &mut rng));
        assert!(w.update(ms(160), &mut rng));
    }

    #[test]
    fn cerca_stays_in_breathing_band() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut w = Waveform::new(WaveKind::Cerca);
        w.start(ms(0));
        for step in 1..200 {
            w.update(ms(step * 120), &mut rng);
            for &h in w.heights() {
                assert!((0.1 - 1e-6..=0.68 + 1e-6).contains(&h), "{h}");
            }
        }
    }

    #[test]
    fn stop_resets_heights() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut w = Waveform::new(WaveKind::Urban);
        w.start(ms(0));
        w.update(ms(100), &mut rng);
        w.stop();
        assert!(w.heights().iter().all(|&h| h == IDLE_HEIGHT));
        assert!(!w.update(ms(1_000), &mut rng));
    }

    #[test]
    fn pair_is_mutually_exclusive() {
        let mut pair = WaveformPair::default();
        pair.toggle(WaveKind::Urban, ms(0));
        assert!(pair.urban.is_playing());
        pair.toggle(WaveKind::Cerca, ms(10));
        assert!(pair.cerca.is_playing());
        assert!(!pair.urban.is_playing());
        pair.toggle(WaveKind::Cerca, ms(20));
        assert!(!pair.cerca.is_playing());
        assert!(!pair.urban.is_playing());
    }

    #[test]
    fn pair_reports_nearest_deadline() {
        let mut pair = WaveformPair::default();
        assert_eq!(pair.next_due(ms(0)), None);
        pair.toggle(WaveKind::Cerca, ms(0));
        assert_eq!(pair.next_due(ms(20)), Some(ms(100)));
    }

    #[test]
    fn bar_colors_follow_height() {
        assert_eq!(WaveKind::Urban.bar_color(0.0), rgba(180, 180, 180, 0.3));
        assert_eq!(WaveKind::Cerca.bar_color(1.0), Color32::from_rgb(88, 129, 87));
    }
}
