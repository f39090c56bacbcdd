//! Render plans: the pure "what should the surface look like" output.
//!
//! Controllers compute plans; shells apply them (class toggling in a DOM
//! bridge, transforms in a canvas, styles in a TUI). Keeping this a plain
//! value separates the navigation math from any rendering technology.

/// Visual marking for one slide of a spotlight carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideClass {
    /// The slide currently shown front and center.
    Active,
    /// The slide peeking in before the active one.
    Prev,
    /// The slide peeking in after the active one.
    Next,
    /// Everything else.
    Unmarked,
}

/// Current transform of a multi-item track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackOffset {
    /// Horizontal translation in pixels, already tween-sampled when a
    /// transition is in flight.
    pub px: f32,
    /// Whether the offset is part of an animated move. `false` means the
    /// shell must apply it without animation (idle position, seamless-loop
    /// snap, resize re-clamp).
    pub animated: bool,
}

/// Everything a shell needs to draw one carousel frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Per-slide class assignment.
    pub classes: Vec<SlideClass>,
    /// Pagination dots; exactly one entry is `true`.
    pub dots: Vec<bool>,
    /// Track transform, `None` for spotlight carousels.
    pub track: Option<TrackOffset>,
}

/// Assign spotlight classes for `total` slides with the given current index.
///
/// Mirrors the class chain of the page variants: active, else prev, else
/// next. With two slides the lone neighbor is both prev-index and
/// next-index and resolves to `Prev`; with one slide it is simply `Active`.
pub(crate) fn spotlight_classes(current: usize, prev: usize, next: usize, total: usize) -> Vec<SlideClass> {
    (0..total)
        .map(|i| {
            if i == current {
                SlideClass::Active
            } else if i == prev {
                SlideClass::Prev
            } else if i == next {
                SlideClass::Next
            } else {
                SlideClass::Unmarked
            }
        })
        .collect()
}

/// Pagination dot states: one `true` at `current`.
pub(crate) fn dot_states(current: usize, total: usize) -> Vec<bool> {
    (0..total).map(|i| i == current).collect()
}
