//! Render-agnostic carousel math.
//!
//! Everything in this crate is pure: index wraparound, page arithmetic,
//! viewport layout, easing curves, and value tweening. No clocks, no
//! logging, no rendering surface. The headless controllers in `vitrine-ui`
//! drive these with real timestamps and feed the results to whatever shell
//! is rendering (DOM bridge, iced view, TUI).

pub mod easing;
pub mod index;
pub mod layout;
pub mod tween;

pub use easing::Easing;
pub use index::{page_count, wrap, SlideIndex};
pub use layout::Viewport;
pub use tween::Tween;
