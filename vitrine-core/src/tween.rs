//! Clock-free value tweening.
//!
//! A [`Tween`] maps elapsed time to an interpolated value; the caller owns
//! the clock. This keeps snap-offset math unit-testable without timestamps
//! while `vitrine-ui` drives it with real `Instant`s.

use std::time::Duration;

use crate::easing::Easing;

/// Interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
    /// Total duration of the tween.
    pub duration: Duration,
    /// Curve shaping the progress.
    pub easing: Easing,
}

impl Tween {
    /// Create a tween between two values.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Value after `elapsed` time. Exactly `to` at or past the duration,
    /// including for a zero-duration tween.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Whether the tween has reached its end after `elapsed` time.
    #[inline]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_value_is_exact() {
        let tw = Tween::new(0.0, 640.0, Duration::from_millis(500), Easing::EaseOutQuad);
        assert_eq!(tw.value_at(Duration::from_millis(500)), 640.0);
        assert_eq!(tw.value_at(Duration::from_millis(900)), 640.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let tw = Tween::new(10.0, 20.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tw.value_at(Duration::ZERO), 20.0);
    }

    #[test]
    fn linear_midpoint() {
        let tw = Tween::new(0.0, 100.0, Duration::from_secs(1), Easing::Linear);
        let mid = tw.value_at(Duration::from_millis(500));
        assert!((mid - 50.0).abs() < 0.01);
    }

    #[test]
    fn monotonic_progress() {
        let tw = Tween::new(0.0, 100.0, Duration::from_secs(1), Easing::EaseOutQuad);
        let mut last = -1.0;
        for ms in (0..=1000).step_by(50) {
            let v = tw.value_at(Duration::from_millis(ms));
            assert!(v >= last);
            last = v;
        }
    }
}
