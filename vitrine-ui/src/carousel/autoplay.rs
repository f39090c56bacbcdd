//! Autoplay timing.
//!
//! The timer is cancelled and recreated wholesale on interaction rather
//! than paused with remaining time preserved, matching how the page
//! variants stop/start their interval around every arrow, dot, and hover
//! event. All operations take `now` so tests drive time explicitly.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoplayState {
    Running { next_due: Instant },
    Paused,
}

/// Recurring automatic-advance timer for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    resume_after: Duration,
    state: AutoplayState,
}

impl Autoplay {
    /// Start a running timer; the first advance is due one interval from `now`.
    pub fn start(interval: Duration, resume_after: Duration, now: Instant) -> Self {
        Self {
            interval,
            resume_after,
            state: AutoplayState::Running {
                next_due: now + interval,
            },
        }
    }

    /// Whether the timer is currently running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running { .. })
    }

    /// Poll the timer. Returns `true` when an automatic advance is due and
    /// reschedules the next one a full interval from `now`, so a late tick
    /// never produces a burst of advances.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            AutoplayState::Running { next_due } if now >= next_due => {
                self.state = AutoplayState::Running {
                    next_due: now + self.interval,
                };
                true
            }
            _ => false,
        }
    }

    /// Stop the timer. Stopping an already-stopped timer is a no-op.
    pub fn pause(&mut self) {
        self.state = AutoplayState::Paused;
    }

    /// Restart the timer from zero; the next advance is due a quiet period
    /// plus one interval from `now`.
    pub fn resume(&mut self, now: Instant) {
        self.state = AutoplayState::Running {
            next_due: now + self.resume_after + self.interval,
        };
    }

    /// Stop-then-start around a manual interaction, resetting the interval.
    pub fn interact(&mut self, now: Instant) {
        self.pause();
        self.resume(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn advances_once_per_interval() {
        let t0 = Instant::now();
        let mut ap = Autoplay::start(INTERVAL, Duration::ZERO, t0);
        assert!(!ap.tick(t0 + Duration::from_millis(4999)));
        assert!(ap.tick(t0 + INTERVAL));
        // Immediately after firing, the next advance is a full interval out.
        assert!(!ap.tick(t0 + INTERVAL + Duration::from_millis(1)));
        assert!(ap.tick(t0 + INTERVAL * 2));
    }

    #[test]
    fn late_tick_does_not_burst() {
        let t0 = Instant::now();
        let mut ap = Autoplay::start(INTERVAL, Duration::ZERO, t0);
        // Three intervals pass before anyone polls; only one advance fires.
        let late = t0 + INTERVAL * 3;
        assert!(ap.tick(late));
        assert!(!ap.tick(late + Duration::from_millis(1)));
        assert!(ap.tick(late + INTERVAL));
    }

    #[test]
    fn pause_is_idempotent() {
        let t0 = Instant::now();
        let mut ap = Autoplay::start(INTERVAL, Duration::ZERO, t0);
        ap.pause();
        ap.pause();
        assert!(!ap.is_running());
        assert!(!ap.tick(t0 + INTERVAL * 10));
    }

    #[test]
    fn interact_resets_the_window() {
        let t0 = Instant::now();
        let mut ap = Autoplay::start(INTERVAL, Duration::ZERO, t0);
        // Manual nav just before the tick was due.
        let t_nav = t0 + Duration::from_millis(4900);
        ap.interact(t_nav);
        // The old deadline no longer fires; only one advance lands within
        // the window following the interaction.
        assert!(!ap.tick(t0 + INTERVAL));
        assert!(!ap.tick(t_nav + Duration::from_millis(4999)));
        assert!(ap.tick(t_nav + INTERVAL));
    }

    #[test]
    fn resume_honors_quiet_period() {
        let t0 = Instant::now();
        let quiet = Duration::from_millis(1000);
        let mut ap = Autoplay::start(INTERVAL, quiet, t0);
        ap.pause();
        ap.resume(t0);
        assert!(!ap.tick(t0 + INTERVAL));
        assert!(ap.tick(t0 + quiet + INTERVAL));
    }
}
