//! Panel content: static copy, chart geometry and the waveform toy.
//!
//! Everything here is egui-free data and math so it can be tested without
//! a window. The app's panel renderers consume it.

pub mod copy;
pub mod radar;
pub mod scores;
pub mod waveform;

use std::time::Duration;

pub use radar::{radar_layout, RadarAxis, RadarPoint, SEGMENT_PROFILE};
pub use scores::{Criterion, Phase, PhaseStatus, ToneTrait, FEASIBILITY, PHASES, TONE_OF_VOICE};
pub use waveform::{WaveKind, Waveform, WaveformPair};

/// Delayed, eased reveal of an animated chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
}

/// Radar polygon grows in after the panel mounts.
pub const RADAR_REVEAL: Reveal = Reveal {
    delay: Duration::from_millis(400),
    duration: Duration::from_millis(1200),
};

/// Feasibility bars fill in slightly later.
pub const MATRIX_REVEAL: Reveal = Reveal {
    delay: Duration::from_millis(600),
    duration: Duration::from_millis(1000),
};

impl Reveal {
    /// Progress in `[0, 1]`, `elapsed` since the content appeared.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        reveal_progress(elapsed, self.delay, self.duration)
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Cubic ease-out from 0 to 1, starting `delay` after zero.
pub fn reveal_progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    if elapsed < delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let t = ((elapsed - delay).as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn nothing_before_delay() {
        assert_eq!(RADAR_REVEAL.progress(ms(0)), 0.0);
        assert_eq!(RADAR_REVEAL.progress(ms(399)), 0.0);
        assert_eq!(MATRIX_REVEAL.progress(ms(599)), 0.0);
    }

    #[test]
    fn eases_out_to_one() {
        let mid = RADAR_REVEAL.progress(ms(1000));
        // half way through, ease-out is well past half
        assert!((mid - 0.875).abs() < 1e-4);
        assert_eq!(RADAR_REVEAL.progress(ms(1600)), 1.0);
        assert_eq!(RADAR_REVEAL.progress(ms(10_000)), 1.0);
        assert!(RADAR_REVEAL.is_done(ms(1600)));
        assert!(!RADAR_REVEAL.is_done(ms(1599)));
    }

    #[test]
    fn monotonic() {
        let mut last = 0.0;
        for t in (0..2_000).step_by(25) {
            let p = MATRIX_REVEAL.progress(ms(t));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn zero_duration_jumps() {
        assert_eq!(reveal_progress(ms(5), ms(5), Duration::ZERO), 1.0);
        assert_eq!(reveal_progress(ms(4), ms(5), Duration::ZERO), 0.0);
    }
}
