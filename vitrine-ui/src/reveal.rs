//! Scroll-triggered reveal state.
//!
//! Headless counterpart of the fade-in-on-scroll behavior: elements start
//! hidden and latch to revealed once enough of them enters the viewport.
//! The latch is one-way; scrolling back up never re-hides anything.

use std::time::{Duration, Instant};

use vitrine_core::{Easing, Tween};

use crate::constants::reveal;

/// Reveal state of one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet scrolled into view.
    Hidden,
    /// Entrance animation started at the recorded instant.
    Revealed(Instant),
}

/// A set of elements that fade in as they scroll into view.
#[derive(Debug, Clone)]
pub struct RevealSet {
    states: Vec<RevealState>,
    duration: Duration,
    rise_px: f32,
    ratio: f32,
}

impl RevealSet {
    /// Track `count` elements, all initially hidden.
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
            duration: Duration::from_millis(reveal::DURATION_MS),
            rise_px: reveal::RISE_PX,
            ratio: reveal::VISIBILITY_RATIO,
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the set tracks no elements.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Report a visibility ratio for an element. Latches to revealed at the
    /// configured ratio. Returns `true` when this call caused the reveal.
    pub fn visibility(&mut self, idx: usize, ratio: f32, now: Instant) -> bool {
        match self.states.get_mut(idx) {
            Some(state @ RevealState::Hidden) if ratio >= self.ratio => {
                *state = RevealState::Revealed(now);
                true
            }
            _ => false,
        }
    }

    /// Whether an element has been revealed.
    pub fn is_revealed(&self, idx: usize) -> bool {
        matches!(self.states.get(idx), Some(RevealState::Revealed(_)))
    }

    /// Entrance styling for an element at `now`: `(opacity, translate_y)`.
    /// Hidden elements sit transparent at the rise offset; revealed ones
    /// tween to full opacity at rest.
    pub fn entrance(&self, idx: usize, now: Instant) -> (f32, f32) {
        match self.states.get(idx) {
            Some(RevealState::Revealed(at)) => {
                let elapsed = now.saturating_duration_since(*at);
                let opacity = Tween::new(0.0, 1.0, self.duration, Easing::EaseOutQuad);
                let rise = Tween::new(self.rise_px, 0.0, self.duration, Easing::EaseOutQuad);
                (opacity.value_at(elapsed), rise.value_at(elapsed))
            }
            _ => (0.0, self.rise_px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_threshold_and_latches() {
        let t0 = Instant::now();
        let mut set = RevealSet::new(3);
        assert!(!set.visibility(0, 0.05, t0));
        assert!(!set.is_revealed(0));
        assert!(set.visibility(0, 0.1, t0));
        assert!(set.is_revealed(0));
        // Scrolling away does not re-hide, and re-reporting is not a reveal.
        assert!(!set.visibility(0, 0.0, t0));
        assert!(set.is_revealed(0));
    }

    #[test]
    fn entrance_tween_runs_to_rest() {
        let t0 = Instant::now();
        let mut set = RevealSet::new(1);
        assert_eq!(set.entrance(0, t0), (0.0, 20.0));
        set.visibility(0, 1.0, t0);
        let (opacity, rise) = set.entrance(0, t0 + Duration::from_millis(600));
        assert_eq!(opacity, 1.0);
        assert_eq!(rise, 0.0);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let t0 = Instant::now();
        let mut set = RevealSet::new(1);
        assert!(!set.visibility(5, 1.0, t0));
        assert!(!set.is_revealed(5));
    }
}
