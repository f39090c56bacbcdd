//! Shared tuning constants for the interaction controllers.
//!
//! Behavioral tuning lives here so every carousel on a page updates
//! consistently. Runtime overrides go through [`crate::config::TuningOverlay`].

/// Navigation transition defaults.
pub mod transition {
    /// Duration (ms) of an animated page move; navigation commands received
    /// while a move is in flight are dropped for this long.
    pub const DURATION_MS: u64 = 500;
}

/// Autoplay defaults.
pub mod autoplay {
    /// Interval (ms) between automatic advances.
    pub const INTERVAL_MS: u64 = 5000;
    /// Quiet period (ms) after an interaction before autoplay resumes.
    /// Zero restarts immediately on interaction end.
    pub const RESUME_AFTER_MS: u64 = 0;
}

/// Swipe gesture defaults.
pub mod swipe {
    /// Minimum horizontal travel (px) for a drag to count as a swipe.
    pub const THRESHOLD_PX: f32 = 50.0;
}

/// Scroll-reveal defaults.
pub mod reveal {
    /// Visibility ratio at which an element reveals.
    pub const VISIBILITY_RATIO: f32 = 0.1;
    /// Entrance tween duration (ms).
    pub const DURATION_MS: u64 = 600;
    /// Vertical offset (px) the element rises from.
    pub const RISE_PX: f32 = 20.0;
}

/// Count-up animation defaults.
pub mod countup {
    /// Visibility ratio at which the animation arms.
    pub const VISIBILITY_RATIO: f32 = 0.5;
    /// Animation duration (ms).
    pub const DURATION_MS: u64 = 1000;
}
