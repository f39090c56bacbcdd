//! Per-instance carousel navigation controller.
//!
//! Owns the index, the transition lock, autoplay, and swipe tracking for
//! one bound region. The transition lock is an explicit `Idle` /
//! `Transitioning` machine settled against caller-supplied timestamps, not
//! a wall-clock timeout, so the whole controller is deterministic under
//! test.

use std::time::Instant;

use vitrine_core::{Easing, SlideIndex, Tween, Viewport};

use super::autoplay::Autoplay;
use super::gesture::{SwipeDirection, SwipeTracker};
use super::plan::{dot_states, spotlight_classes, RenderPlan, TrackOffset};
use super::types::{CarouselConfig, CarouselMode, RegionDescription};
use crate::error::BindError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning {
        started_at: Instant,
        until: Instant,
        // Pixel tween for track modes; spotlight moves are class-driven and
        // carry only the lock window.
        tween: Option<Tween>,
    },
}

/// Headless controller for one carousel region.
///
/// The index unit is slides for [`CarouselMode::Spotlight`] and pages for
/// the track modes. Seamless clone offsets exist only inside in-flight
/// tweens; a settled controller is always at the original offset for its
/// user-visible index, which keeps `next` then `prev` a round trip even
/// across the loop boundary.
#[derive(Debug, Clone)]
pub struct CarouselController {
    config: CarouselConfig,
    viewport: Viewport,
    slide_count: usize,
    index: SlideIndex,
    phase: Phase,
    autoplay: Option<Autoplay>,
    swipe: SwipeTracker,
}

impl CarouselController {
    /// Bind to a region, validating the description.
    pub fn try_bind(
        config: CarouselConfig,
        region: RegionDescription,
        now: Instant,
    ) -> Result<Self, BindError> {
        if region.slide_width_px <= 0.0 {
            return Err(BindError::InvalidSlideWidth(region.slide_width_px));
        }
        if region.slide_count == 0 {
            return Err(BindError::EmptySlideSet);
        }
        let viewport = Viewport::new(region.width_px, region.gap_px, region.slide_width_px);
        let units = match config.mode {
            CarouselMode::Spotlight => region.slide_count,
            CarouselMode::Track | CarouselMode::SeamlessTrack => {
                viewport.pages(region.slide_count)
            }
        };
        let index = SlideIndex::new(units).ok_or(BindError::EmptySlideSet)?;
        let autoplay = config
            .autoplay
            .map(|interval| Autoplay::start(interval, config.resume_after, now));
        Ok(Self {
            config,
            viewport,
            slide_count: region.slide_count,
            index,
            phase: Phase::Idle,
            autoplay,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        })
    }

    /// Bind to a region, degrading silently: an unusable region yields
    /// `None` and a single warning, leaving the page visually static.
    pub fn bind(config: CarouselConfig, region: RegionDescription, now: Instant) -> Option<Self> {
        match Self::try_bind(config, region, now) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("carousel region not bound: {e}");
                None
            }
        }
    }

    /// User-visible current position (slide or page, mode-dependent).
    pub fn current(&self) -> usize {
        self.index.current()
    }

    /// Number of navigable units (slides or pages).
    pub fn total(&self) -> usize {
        self.index.total()
    }

    /// Presentation mode.
    pub fn mode(&self) -> CarouselMode {
        self.config.mode
    }

    /// Whether a transition is in flight at `now`.
    pub fn is_transitioning(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Transitioning { until, .. } if now < until)
    }

    /// Whether autoplay is currently running.
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some_and(|a| a.is_running())
    }

    /// Advance one unit with wraparound. Returns `false` when the command
    /// is dropped by the transition lock.
    pub fn next(&mut self, now: Instant) -> bool {
        self.interacted(now);
        self.navigate_next(now)
    }

    /// Retreat one unit with wraparound. Returns `false` when dropped.
    pub fn prev(&mut self, now: Instant) -> bool {
        self.interacted(now);
        self.navigate_prev(now)
    }

    /// Absolute jump (pagination dots); `n` wraps into range. Returns
    /// `false` when dropped or already on the target.
    pub fn go_to_page(&mut self, n: isize, now: Instant) -> bool {
        self.interacted(now);
        if !self.try_begin(now) {
            return false;
        }
        let target = vitrine_core::wrap(n, self.index.total());
        if target == self.index.current() {
            return false;
        }
        let from = self.resting_offset_px();
        self.index.go_to(n);
        self.begin_move(now, from, self.resting_offset_px());
        true
    }

    /// Settle a due transition and poll autoplay. Returns `true` when an
    /// automatic advance fired. Shells call this from their frame loop.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.settle_if_due(now);
        if self.phase != Phase::Idle {
            return false;
        }
        let due = self.autoplay.as_mut().is_some_and(|a| a.tick(now));
        if due {
            // Automatic advance: no interaction bookkeeping.
            self.navigate_next(now)
        } else {
            false
        }
    }

    /// Pointer entered the region: hold autoplay.
    pub fn pointer_enter(&mut self) {
        if let Some(a) = self.autoplay.as_mut() {
            a.pause();
        }
    }

    /// Pointer left the region: restart autoplay from zero.
    pub fn pointer_leave(&mut self, now: Instant) {
        if let Some(a) = self.autoplay.as_mut() {
            a.resume(now);
        }
    }

    /// Touch started inside the region.
    pub fn swipe_begin(&mut self, x: f32, y: f32) {
        self.swipe.begin(x, y);
    }

    /// Touch released. A recognized swipe issues the matching navigation
    /// and counts as a manual interaction; anything else is a tap.
    pub fn swipe_end(&mut self, x: f32, y: f32, now: Instant) -> bool {
        match self.swipe.end(x, y) {
            Some(SwipeDirection::Next) => self.next(now),
            Some(SwipeDirection::Prev) => self.prev(now),
            None => false,
        }
    }

    /// The region was resized. Recomputes items-per-view and re-clamps the
    /// current page without animation; any in-flight transition is
    /// abandoned at the re-clamped position.
    pub fn resize(&mut self, width_px: f32) {
        self.viewport.set_width(width_px);
        if matches!(
            self.config.mode,
            CarouselMode::Track | CarouselMode::SeamlessTrack
        ) {
            let pages = self.viewport.pages(self.slide_count);
            self.index.set_total(pages);
        }
        self.phase = Phase::Idle;
    }

    /// Content changed. Returns `false` (controller should be removed) when
    /// the region is now empty.
    pub fn set_slide_count(&mut self, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        self.slide_count = count;
        let units = match self.config.mode {
            CarouselMode::Spotlight => count,
            CarouselMode::Track | CarouselMode::SeamlessTrack => self.viewport.pages(count),
        };
        self.index.set_total(units)
    }

    /// Compute the frame to draw at `now`.
    pub fn render_plan(&self, now: Instant) -> RenderPlan {
        let current = self.index.current();
        match self.config.mode {
            CarouselMode::Spotlight => RenderPlan {
                classes: spotlight_classes(
                    current,
                    self.index.prev_index(),
                    self.index.next_index(),
                    self.index.total(),
                ),
                dots: dot_states(current, self.index.total()),
                track: None,
            },
            CarouselMode::Track | CarouselMode::SeamlessTrack => {
                let track = match self.phase {
                    Phase::Transitioning {
                        started_at,
                        until,
                        tween: Some(tw),
                    } if now < until => Some(TrackOffset {
                        px: tw.value_at(now.duration_since(started_at)),
                        animated: true,
                    }),
                    _ => Some(TrackOffset {
                        px: self.resting_offset_px(),
                        animated: false,
                    }),
                };
                RenderPlan {
                    classes: Vec::new(),
                    dots: dot_states(current, self.index.total()),
                    track,
                }
            }
        }
    }

    // ---- internals ----

    fn navigate_next(&mut self, now: Instant) -> bool {
        if !self.try_begin(now) {
            return false;
        }
        let pages = self.index.total();
        let from = self.resting_offset_px();
        let wrapping = self.index.current() == pages - 1;
        self.index.advance();
        let to = if wrapping && self.config.mode == CarouselMode::SeamlessTrack {
            // Animate into the cloned head; settling lands on the congruent
            // original offset without animation.
            self.viewport.page_offset_px(pages)
        } else {
            self.resting_offset_px()
        };
        self.begin_move(now, from, to);
        true
    }

    fn navigate_prev(&mut self, now: Instant) -> bool {
        if !self.try_begin(now) {
            return false;
        }
        let pages = self.index.total();
        let wrapping = self.index.current() == 0;
        let from = if wrapping && self.config.mode == CarouselMode::SeamlessTrack {
            // Pre-jump to the cloned head so the step back is smooth.
            self.viewport.page_offset_px(pages)
        } else {
            self.resting_offset_px()
        };
        self.index.retreat();
        self.begin_move(now, from, self.resting_offset_px());
        true
    }

    /// Settle the phase if its deadline has passed, then report whether a
    /// new command may begin. Dropped commands are the re-entrancy guard.
    fn try_begin(&mut self, now: Instant) -> bool {
        self.settle_if_due(now);
        if self.phase == Phase::Idle {
            true
        } else {
            log::debug!("navigation dropped: transition in flight");
            false
        }
    }

    fn settle_if_due(&mut self, now: Instant) {
        if let Phase::Transitioning { until, tween, .. } = self.phase {
            if now >= until {
                if tween.is_some_and(|tw| tw.to != self.resting_offset_px()) {
                    log::debug!(
                        "seamless snap: clone offset -> page {}",
                        self.index.current()
                    );
                }
                self.phase = Phase::Idle;
            }
        }
    }

    fn begin_move(&mut self, now: Instant, from_px: f32, to_px: f32) {
        let tween = match self.config.mode {
            CarouselMode::Spotlight => None,
            CarouselMode::Track | CarouselMode::SeamlessTrack => Some(Tween::new(
                from_px,
                to_px,
                self.config.transition,
                Easing::EaseOutQuad,
            )),
        };
        self.phase = Phase::Transitioning {
            started_at: now,
            until: now + self.config.transition,
            tween,
        };
    }

    /// Offset of the current page when no transition is in flight.
    fn resting_offset_px(&self) -> f32 {
        match self.config.mode {
            CarouselMode::Spotlight => 0.0,
            CarouselMode::Track | CarouselMode::SeamlessTrack => {
                self.viewport.page_offset_px(self.index.current())
            }
        }
    }

    /// Any manual interaction resets the autoplay window wholesale.
    fn interacted(&mut self, now: Instant) {
        if let Some(a) = self.autoplay.as_mut() {
            a.interact(now);
        }
    }
}
