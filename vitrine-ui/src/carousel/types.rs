//! Shared types for the carousel controllers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{autoplay, swipe, transition};

/// Unique key identifying a carousel instance.
///
/// Strongly-typed keys avoid brittle string matching and give every region
/// on the page its own scoped state, so two carousels never share a current
/// index or timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    /// The single-item business-area spotlight.
    BusinessAreas,
    /// The paged testimonials track.
    Testimonials,
    /// A named ad-hoc instance.
    Custom(&'static str),
    /// A region discovered at runtime.
    Dynamic(Uuid),
}

/// How a carousel presents and moves its slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMode {
    /// One slide at a time, styled via active/prev/next class assignment
    /// with the neighbors peeking in from the sides.
    Spotlight,
    /// Multiple items per page, moved by a pixel-offset transform.
    Track,
    /// [`CarouselMode::Track`] with a cloned tail: forward motion past the
    /// last page animates into the clones and snaps back without animation,
    /// so wraparound always looks like a smooth step.
    SeamlessTrack,
}

/// Static configuration for one carousel instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Presentation and motion mode.
    pub mode: CarouselMode,
    /// Animated transition duration; doubles as the navigation lock window.
    pub transition: Duration,
    /// Automatic advance interval; `None` disables autoplay entirely.
    pub autoplay: Option<Duration>,
    /// Quiet period after an interaction before autoplay resumes.
    pub resume_after: Duration,
    /// Minimum horizontal travel for a touch drag to count as a swipe.
    pub swipe_threshold_px: f32,
}

impl CarouselConfig {
    /// Defaults for the single-item spotlight carousel.
    pub const fn spotlight_defaults() -> Self {
        Self {
            mode: CarouselMode::Spotlight,
            transition: Duration::from_millis(transition::DURATION_MS),
            autoplay: Some(Duration::from_millis(autoplay::INTERVAL_MS)),
            resume_after: Duration::from_millis(autoplay::RESUME_AFTER_MS),
            swipe_threshold_px: swipe::THRESHOLD_PX,
        }
    }

    /// Defaults for a paged multi-item track (testimonials style).
    pub const fn track_defaults() -> Self {
        Self {
            mode: CarouselMode::Track,
            transition: Duration::from_millis(transition::DURATION_MS),
            autoplay: Some(Duration::from_millis(autoplay::INTERVAL_MS)),
            resume_after: Duration::from_millis(autoplay::RESUME_AFTER_MS),
            swipe_threshold_px: swipe::THRESHOLD_PX,
        }
    }

    /// Defaults for the seamless infinite-loop track variant.
    pub const fn seamless_defaults() -> Self {
        Self {
            mode: CarouselMode::SeamlessTrack,
            transition: Duration::from_millis(transition::DURATION_MS),
            autoplay: Some(Duration::from_millis(autoplay::INTERVAL_MS)),
            resume_after: Duration::from_millis(autoplay::RESUME_AFTER_MS),
            swipe_threshold_px: swipe::THRESHOLD_PX,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::spotlight_defaults()
    }
}

/// Measured geometry and content of a markup region a carousel binds to.
///
/// Shells fill this from whatever they can measure (a DOM bridge reads
/// client rects, a test fabricates numbers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionDescription {
    /// Width of the visible region in pixels.
    pub width_px: f32,
    /// Gap between adjacent slides in pixels.
    pub gap_px: f32,
    /// Width of a single slide in pixels.
    pub slide_width_px: f32,
    /// Number of slides found in the region.
    pub slide_count: usize,
}
