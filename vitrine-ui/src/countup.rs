//! One-shot count-up number animation.
//!
//! Animates a headline figure like `"250+"` from zero to its target with a
//! quartic ease-out, arming once when the section scrolls into view. The
//! terminal frame always shows the exact original text.

use std::time::{Duration, Instant};

use vitrine_core::{Easing, Tween};

use crate::constants::countup;

#[derive(Debug, Clone, PartialEq)]
enum CountUpState {
    Armed,
    Running(Instant),
    Finished,
}

/// Count-up animation for one display figure.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    suffix: String,
    duration: Duration,
    state: CountUpState,
}

impl CountUp {
    /// Parse a display string into a target number and suffix. Strings with
    /// no digits at all yield `None` (the figure is left untouched).
    pub fn parse(display: &str) -> Option<Self> {
        let trimmed = display.trim();
        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix: String = trimmed.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self {
            target,
            suffix: suffix.trim().to_string(),
            duration: Duration::from_millis(countup::DURATION_MS),
            state: CountUpState::Armed,
        })
    }

    /// Report section visibility; starts the animation once at the arming
    /// ratio. Later reports are no-ops.
    pub fn visibility(&mut self, ratio: f32, now: Instant) {
        if self.state == CountUpState::Armed && ratio >= countup::VISIBILITY_RATIO {
            self.state = CountUpState::Running(now);
        }
    }

    /// Whether the animation has started (running or finished).
    pub fn has_animated(&self) -> bool {
        !matches!(self.state, CountUpState::Armed)
    }

    /// The text to display at `now`. Settles to the exact target text and
    /// marks the animation finished once the duration elapses.
    pub fn display_at(&mut self, now: Instant) -> String {
        match self.state {
            CountUpState::Armed => self.format(0),
            CountUpState::Finished => self.format(self.target),
            CountUpState::Running(started) => {
                let elapsed = now.saturating_duration_since(started);
                let tween = Tween::new(0.0, self.target as f32, self.duration, Easing::EaseOutQuart);
                if tween.is_done(elapsed) {
                    self.state = CountUpState::Finished;
                    self.format(self.target)
                } else {
                    self.format(tween.value_at(elapsed).floor() as u64)
                }
            }
        }
    }

    fn format(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_and_suffix() {
        let cu = CountUp::parse("250+").unwrap();
        assert_eq!(cu.target, 250);
        assert_eq!(cu.suffix, "+");
        assert!(CountUp::parse("n/a").is_none());
    }

    #[test]
    fn arms_at_half_visibility() {
        let t0 = Instant::now();
        let mut cu = CountUp::parse("40").unwrap();
        cu.visibility(0.4, t0);
        assert!(!cu.has_animated());
        cu.visibility(0.5, t0);
        assert!(cu.has_animated());
    }

    #[test]
    fn runs_once_and_ends_exact() {
        let t0 = Instant::now();
        let mut cu = CountUp::parse("250+").unwrap();
        cu.visibility(1.0, t0);
        assert_eq!(cu.display_at(t0), "0+");
        let mid = cu.display_at(t0 + Duration::from_millis(500));
        assert_ne!(mid, "0+");
        assert_ne!(mid, "250+");
        assert_eq!(cu.display_at(t0 + Duration::from_millis(1000)), "250+");
        // A second visibility report never restarts it.
        cu.visibility(1.0, t0 + Duration::from_secs(5));
        assert_eq!(cu.display_at(t0 + Duration::from_secs(5)), "250+");
    }

    #[test]
    fn quartic_ease_front_loads_progress() {
        let t0 = Instant::now();
        let mut cu = CountUp::parse("1000").unwrap();
        cu.visibility(1.0, t0);
        let half: u64 = cu
            .display_at(t0 + Duration::from_millis(500))
            .parse()
            .unwrap();
        // EaseOutQuart covers ~94% of the distance by half time.
        assert!(half > 900);
    }
}
