//! Runtime tuning overlay.
//!
//! Optional overrides for the compiled constants, deserialized from JSON so
//! a shell can ship tuning without a rebuild. Fields are `None` by default;
//! accessors fall back to [`crate::constants`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{autoplay, swipe, transition};
use crate::error::BindError;

/// Optional overrides applied on top of the compiled defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuningOverlay {
    /// Transition duration (ms).
    pub transition_ms: Option<u64>,
    /// Autoplay interval (ms).
    pub autoplay_interval_ms: Option<u64>,
    /// Quiet period before autoplay resumes (ms).
    pub autoplay_resume_after_ms: Option<u64>,
    /// Swipe threshold (px).
    pub swipe_threshold_px: Option<f32>,
}

impl TuningOverlay {
    /// Parse an overlay from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, BindError> {
        serde_json::from_str(s).map_err(|e| BindError::InvalidOverlay(e.to_string()))
    }

    /// Transition duration with fallback.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.unwrap_or(transition::DURATION_MS))
    }

    /// Autoplay interval with fallback.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.unwrap_or(autoplay::INTERVAL_MS))
    }

    /// Autoplay quiet period with fallback.
    pub fn autoplay_resume_after(&self) -> Duration {
        Duration::from_millis(
            self.autoplay_resume_after_ms
                .unwrap_or(autoplay::RESUME_AFTER_MS),
        )
    }

    /// Swipe threshold with fallback.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_px.unwrap_or(swipe::THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overlay_falls_back_to_constants() {
        let overlay = TuningOverlay::default();
        assert_eq!(overlay.transition(), Duration::from_millis(500));
        assert_eq!(overlay.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(overlay.swipe_threshold(), 50.0);
    }

    #[test]
    fn parses_partial_json() {
        let overlay = TuningOverlay::from_json_str(r#"{"autoplay_interval_ms": 3000}"#).unwrap();
        assert_eq!(overlay.autoplay_interval(), Duration::from_millis(3000));
        assert_eq!(overlay.transition(), Duration::from_millis(500));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = TuningOverlay::from_json_str(r#"{"nope": 1}"#).unwrap_err();
        assert!(matches!(err, BindError::InvalidOverlay(_)));
    }
}
