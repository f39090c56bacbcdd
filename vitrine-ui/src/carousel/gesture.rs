//! Swipe gesture recognition.
//!
//! Interprets a horizontal touch drag as a prev/next command. A drag must
//! travel past the threshold and be horizontal-dominant; anything else is a
//! tap or a vertical page scroll and produces no command.

/// Navigation command recognized from a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe: advance to the next slide.
    Next,
    /// Rightward swipe: retreat to the previous slide.
    Prev,
}

/// Tracks one touch interaction from start to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f32,
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    /// Create a tracker with the given horizontal travel threshold.
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start: None,
        }
    }

    /// Record the touch-start position.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// True while a touch is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Complete the interaction at the release position.
    ///
    /// Returns the recognized direction, or `None` for taps, sub-threshold
    /// drags, vertical-dominant drags, and releases without a matching
    /// [`SwipeTracker::begin`].
    pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;
        if dx.abs() <= self.threshold_px || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        })
    }

    /// Drop any in-progress touch (e.g. touch-cancel).
    pub fn reset(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 50.0;

    fn swipe(dx: f32, dy: f32) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        tracker.begin(200.0, 300.0);
        // dx = start - end, so a leftward drag ends at a smaller x.
        tracker.end(200.0 - dx, 300.0 - dy)
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(swipe(THRESHOLD - 1.0, 0.0), None);
        assert_eq!(swipe(THRESHOLD + 1.0, 0.0), Some(SwipeDirection::Next));
        assert_eq!(swipe(-(THRESHOLD + 1.0), 0.0), Some(SwipeDirection::Prev));
        // Exactly at the threshold is still a tap.
        assert_eq!(swipe(THRESHOLD, 0.0), None);
    }

    #[test]
    fn vertical_dominant_drag_is_a_scroll() {
        assert_eq!(swipe(60.0, 80.0), None);
        assert_eq!(swipe(60.0, -80.0), None);
        assert_eq!(swipe(80.0, 60.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn end_without_begin_is_noop() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        assert_eq!(tracker.end(0.0, 0.0), None);
    }

    #[test]
    fn tracker_resets_after_end() {
        let mut tracker = SwipeTracker::new(THRESHOLD);
        tracker.begin(200.0, 0.0);
        assert_eq!(tracker.end(100.0, 0.0), Some(SwipeDirection::Next));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.end(0.0, 0.0), None);
    }
}
