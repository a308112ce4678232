//! Proximity map animation loop.
//!
//! Drives the simulation one fixed step per displayed frame:
//! - Tick: step the map, paint it, ask the host for the next frame
//! - Resize: a viewport change regenerates streets and particles
//! - Skip: a zero-sized surface draws nothing but keeps the loop alive
//! - Teardown: cancelling the token stops both rescheduling and resize handling
//!
//! The clock advances by `frame_step` per tick regardless of how much wall
//! time passed between frames.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use egui::Pos2;

use super::canvas::Canvas;
use super::map_paint::paint_map;
use crate::config::MapConfig;
use crate::map::{ProximityMap, Viewport};

/// Host hook asked for the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&mut self) {
        self.request_repaint();
    }
}

/// Shared stop flag for an [`AnimationLoop`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Stepped, painted and rescheduled.
    Drawn,
    /// Surface unusable this frame; rescheduled without drawing.
    Skipped,
    /// Cancelled; nothing drawn and nothing scheduled.
    Stopped,
}

pub struct AnimationLoop {
    config: MapConfig,
    /// Built lazily on the first drawable frame.
    map: Option<ProximityMap>,
    cancel: CancelToken,
    frames: u64,
}

impl AnimationLoop {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            map: None,
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    /// Token that stops this loop from anywhere it is cloned to.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    pub fn map(&self) -> Option<&ProximityMap> {
        self.map.as_ref()
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one animation step against `viewport`, painting at `origin`.
    pub fn tick<C, S>(
        &mut self,
        canvas: &mut C,
        scheduler: &mut S,
        origin: Pos2,
        viewport: Viewport,
        intensity: f32,
    ) -> FrameOutcome
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.cancel.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        if !viewport.is_drawable() {
            scheduler.request_frame();
            return FrameOutcome::Skipped;
        }

        self.observe_viewport(viewport);
        let Some(map) = self.map.as_mut() else {
            scheduler.request_frame();
            return FrameOutcome::Skipped;
        };
        map.step();
        paint_map(canvas, map, origin, intensity);
        self.frames += 1;
        scheduler.request_frame();
        FrameOutcome::Drawn
    }

    fn observe_viewport(&mut self, viewport: Viewport) {
        match self.map.as_mut() {
            Some(map) if map.viewport() != viewport => map.resize(viewport),
            Some(_) => {}
            None => {
                log::debug!(
                    "Starting proximity map at {}x{}",
                    viewport.width,
                    viewport.height
                );
                self.map = Some(ProximityMap::new(self.config.clone(), viewport));
            }
        }
    }

    /// Stop scheduling and release the simulation.
    pub fn teardown(&mut self) {
        if !self.cancel.is_cancelled() {
            log::debug!("Animation loop torn down after {} frames", self.frames);
        }
        self.cancel.cancel();
        self.map = None;
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::recording::{Op, RecordingCanvas};

    #[derive(Default)]
    struct CountingScheduler {
        requests: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            self.requests += 1;
        }
    }

    fn seeded_loop() -> AnimationLoop {
        let config = MapConfig {
            rng_seed: Some(0xA11CE),
            ..MapConfig::default()
        };
        AnimationLoop::new(config)
    }

    #[test]
    fn each_tick_draws_and_reschedules() {
        let mut anim = seeded_loop();
        let mut sched = CountingScheduler::default();
        for _ in 0..10 {
            let mut canvas = RecordingCanvas::default();
            let out = anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(800.0, 600.0), 0.0);
            assert_eq!(out, FrameOutcome::Drawn);
            assert!(!canvas.ops.is_empty());
        }
        assert_eq!(sched.requests, 10);
        assert_eq!(anim.frames(), 10);
        let clock = anim.map().unwrap().clock();
        assert!((clock - 0.16).abs() < 1e-5);
    }

    #[test]
    fn zero_surface_skips_frame() {
        let mut anim = seeded_loop();
        let mut sched = CountingScheduler::default();
        let mut canvas = RecordingCanvas::default();
        let out = anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(0.0, 600.0), 1.0);
        assert_eq!(out, FrameOutcome::Skipped);
        assert!(canvas.ops.is_empty());
        assert_eq!(sched.requests, 1);
        assert!(anim.map().is_none());
    }

    #[test]
    fn resize_regenerates_for_new_viewport() {
        let mut anim = seeded_loop();
        let mut sched = CountingScheduler::default();
        let mut canvas = RecordingCanvas::default();
        anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(800.0, 600.0), 0.0);
        assert!((anim.map().unwrap().inner_radius() - 90.0).abs() < 1e-4);

        anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(1920.0, 1080.0), 0.0);
        let map = anim.map().unwrap();
        assert!((map.inner_radius() - 162.0).abs() < 1e-4);
        assert_eq!(map.orbiters().len(), 6);
        assert!((map.orbiters()[0].radius - 243.0).abs() < 1e-3);
    }

    #[test]
    fn teardown_stops_rescheduling() {
        let mut anim = seeded_loop();
        let token = anim.cancel_token();
        let mut sched = CountingScheduler::default();
        let mut canvas = RecordingCanvas::default();
        anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(800.0, 600.0), 0.0);

        token.cancel();
        assert!(!anim.is_running());
        canvas.ops.clear();
        let out = anim.tick(&mut canvas, &mut sched, Pos2::ZERO, Viewport::new(1024.0, 768.0), 0.0);
        assert_eq!(out, FrameOutcome::Stopped);
        assert!(canvas.ops.is_empty());
        assert_eq!(sched.requests, 1);
        // a stopped loop no longer reacts to resizes
        assert!((anim.map().unwrap().inner_radius() - 90.0).abs() < 1e-4);

        anim.teardown();
        assert!(anim.map().is_none());
    }

    #[test]
    fn intensity_recolors_disc_border() {
        let mut anim = seeded_loop();
        let mut sched = CountingScheduler::default();
        let viewport = Viewport::new(800.0, 600.0);

        let border = |canvas: &RecordingCanvas| {
            canvas.ops.iter().find_map(|op| match op {
                Op::Stroke { color, .. } => Some(*color),
                _ => None,
            })
        };

        let mut calm = RecordingCanvas::default();
        anim.tick(&mut calm, &mut sched, Pos2::ZERO, viewport, 0.0);
        let mut warm = RecordingCanvas::default();
        anim.tick(&mut warm, &mut sched, Pos2::ZERO, viewport, 1.0);
        assert_ne!(border(&calm), border(&warm));
    }
}
