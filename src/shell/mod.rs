//! Presentation shell state.
//!
//! Two pieces of state and their delayed transitions:
//!
//! ```text
//!   idle ──select(i)──▶ active=i ──+open_delay──▶ active=i, panel open
//!                                                      │ close
//!   idle ◀──+close_delay── active=i, panel closed ◀────┘
//! ```
//!
//! Time is passed in explicitly as the duration since the deck started, so
//! the machine is deterministic. The background intensity is derived from
//! the selection instant and never stored.

pub mod topic;

use std::time::Duration;

use crate::config::ShellTiming;
pub use topic::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open { at: Duration },
    Clear { at: Duration },
}

/// A delayed transition that just fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    PanelOpened(Topic),
    TopicCleared,
}

#[derive(Debug, Clone)]
pub struct PresentationShell {
    timing: ShellTiming,
    active: Option<Topic>,
    panel_open: bool,
    /// When the current run of activity started; drives the intensity ramp.
    selected_at: Option<Duration>,
    pending: Option<Pending>,
}

impl PresentationShell {
    pub fn new(timing: ShellTiming) -> Self {
        Self {
            timing,
            active: None,
            panel_open: false,
            selected_at: None,
            pending: None,
        }
    }

    pub fn active(&self) -> Option<Topic> {
        self.active
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// True when no delayed transition is waiting.
    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    /// Make `topic` active; its panel opens after the open delay.
    ///
    /// Cancels a pending clear from an earlier close. A repeat selection
    /// while the open is pending keeps the first deadline.
    pub fn select(&mut self, topic: Topic, now: Duration) {
        if self.active.is_none() {
            self.selected_at = Some(now);
        }
        self.active = Some(topic);
        self.pending = match self.pending {
            _ if self.panel_open => None,
            Some(Pending::Open { at }) => Some(Pending::Open { at }),
            _ => Some(Pending::Open { at: now + self.timing.open_delay() }),
        };
        log::debug!("Selected topic {:?}", topic);
    }

    /// Close the panel now; the active topic clears after the close delay.
    pub fn close(&mut self, now: Duration) {
        if self.active.is_none() {
            return;
        }
        self.panel_open = false;
        self.pending = Some(Pending::Clear { at: now + self.timing.close_delay() });
        log::debug!("Closing panel");
    }

    /// Fire the pending transition if it is due.
    pub fn update(&mut self, now: Duration) -> Option<Transition> {
        let fired = match self.pending? {
            Pending::Open { at } if now >= at => {
                let topic = self.active?;
                self.panel_open = true;
                Transition::PanelOpened(topic)
            }
            Pending::Clear { at } if now >= at => {
                self.active = None;
                self.selected_at = None;
                self.panel_open = false;
                Transition::TopicCleared
            }
            _ => return None,
        };
        self.pending = None;
        log::debug!("Shell transition {:?}", fired);
        Some(fired)
    }

    /// Background intensity in `[0, 1]`.
    ///
    /// Zero without an active topic; otherwise a linear ramp that starts
    /// `intensity_delay` after the selection and lasts `intensity_ease`.
    pub fn intensity(&self, now: Duration) -> f32 {
        let (Some(_), Some(start)) = (self.active, self.selected_at) else {
            return 0.0;
        };
        let begin = start + self.timing.intensity_delay();
        if now < begin {
            return 0.0;
        }
        let ease = self.timing.intensity_ease().as_secs_f32();
        if ease <= 0.0 {
            return 1.0;
        }
        ((now - begin).as_secs_f32() / ease).clamp(0.0, 1.0)
    }

    /// Time left until the pending transition, for scheduling a repaint.
    pub fn next_deadline(&self, now: Duration) -> Option<Duration> {
        let at = match self.pending? {
            Pending::Open { at } | Pending::Clear { at } => at,
        };
        Some(at.saturating_sub(now))
    }
}

impl Default for PresentationShell {
    fn default() -> Self {
        Self::new(ShellTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn consistent(shell: &PresentationShell) -> bool {
        !shell.panel_open() || shell.active().is_some()
    }

    #[test]
    fn starts_idle() {
        let shell = PresentationShell::default();
        assert_eq!(shell.active(), None);
        assert!(!shell.panel_open());
        assert_eq!(shell.intensity(ms(5_000)), 0.0);
    }

    #[test]
    fn select_narrativa_then_close() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Narrativa, ms(1_000));
        assert_eq!(shell.active().map(Topic::index), Some(2));
        assert!(!shell.panel_open());

        assert_eq!(shell.update(ms(1_199)), None);
        assert!(!shell.panel_open());
        assert_eq!(shell.update(ms(1_200)), Some(Transition::PanelOpened(Topic::Narrativa)));
        assert!(shell.panel_open());

        shell.close(ms(3_000));
        assert!(!shell.panel_open());
        assert_eq!(shell.active(), Some(Topic::Narrativa));
        assert_eq!(shell.update(ms(3_399)), None);
        assert_eq!(shell.update(ms(3_400)), Some(Transition::TopicCleared));
        assert_eq!(shell.active(), None);
        assert!(!shell.panel_open());
        assert!(shell.is_settled());
    }

    #[test]
    fn close_before_open_never_opens() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Cliente, ms(0));
        shell.close(ms(50));
        for t in (0..1_000).step_by(10) {
            shell.update(ms(t));
            assert!(!shell.panel_open());
            assert!(consistent(&shell));
        }
        assert_eq!(shell.active(), None);
    }

    #[test]
    fn reselect_during_close_cancels_clear() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Recursos, ms(0));
        shell.update(ms(200));
        shell.close(ms(500));
        shell.select(Topic::Simbolos, ms(600));
        assert_eq!(shell.update(ms(799)), None);
        assert_eq!(shell.active(), Some(Topic::Simbolos));
        // the old clear deadline (900) has been replaced by the open
        assert_eq!(shell.update(ms(900)), Some(Transition::PanelOpened(Topic::Simbolos)));
        assert!(shell.panel_open());
        // the ramp kept running from the first selection
        assert_eq!(shell.intensity(ms(900)), 1.0);
    }

    #[test]
    fn double_click_keeps_first_open_deadline() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Cliente, ms(0));
        shell.select(Topic::Cliente, ms(150));
        assert_eq!(shell.update(ms(200)), Some(Transition::PanelOpened(Topic::Cliente)));
        assert!(shell.panel_open());

        // a different topic picked during the wait opens on the same schedule
        let mut shell = PresentationShell::default();
        shell.select(Topic::Cliente, ms(0));
        shell.select(Topic::Recursos, ms(120));
        assert_eq!(shell.update(ms(200)), Some(Transition::PanelOpened(Topic::Recursos)));
    }

    #[test]
    fn switching_topics_while_open() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Cliente, ms(0));
        shell.update(ms(200));
        shell.select(Topic::Viabilidad, ms(300));
        assert!(shell.panel_open());
        assert!(shell.is_settled());
        assert_eq!(shell.active(), Some(Topic::Viabilidad));
    }

    #[test]
    fn close_when_idle_is_noop() {
        let mut shell = PresentationShell::default();
        shell.close(ms(10));
        assert!(shell.is_settled());
        assert_eq!(shell.update(ms(10_000)), None);
    }

    #[test]
    fn intensity_ramps_after_delay() {
        let mut shell = PresentationShell::default();
        shell.select(Topic::Cliente, ms(1_000));
        assert_eq!(shell.intensity(ms(1_050)), 0.0);
        assert_eq!(shell.intensity(ms(1_100)), 0.0);
        assert!((shell.intensity(ms(1_400)) - 0.5).abs() < 1e-4);
        assert_eq!(shell.intensity(ms(1_700)), 1.0);
        assert_eq!(shell.intensity(ms(60_000)), 1.0);

        shell.update(ms(1_200));
        shell.close(ms(2_000));
        // stays lit until the topic actually clears
        assert_eq!(shell.intensity(ms(2_300)), 1.0);
        shell.update(ms(2_400));
        assert_eq!(shell.intensity(ms(2_400)), 0.0);
    }

    #[test]
    fn instant_ramp_when_ease_is_zero() {
        let timing = ShellTiming {
            intensity_ease_ms: 0,
            ..ShellTiming::default()
        };
        let mut shell = PresentationShell::new(timing);
        shell.select(Topic::Cliente, ms(0));
        assert_eq!(shell.intensity(ms(99)), 0.0);
        assert_eq!(shell.intensity(ms(100)), 1.0);
    }

    #[test]
    fn deadline_counts_down() {
        let mut shell = PresentationShell::default();
        assert_eq!(shell.next_deadline(ms(0)), None);
        shell.select(Topic::Cliente, ms(0));
        assert_eq!(shell.next_deadline(ms(150)), Some(ms(50)));
        assert_eq!(shell.next_deadline(ms(250)), Some(Duration::ZERO));
    }
}
