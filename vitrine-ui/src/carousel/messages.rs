//! Message types and dispatch for shell-driven updates.
//!
//! A shell translates its raw events (clicks, touches, resize, frame
//! ticks) into [`CarouselMessage`]s and hands them to [`update`], which
//! routes them to the right instance in the registry.

use std::time::Instant;

use super::registry::CarouselRegistry;
use super::types::CarouselKey;

/// Shell events addressed to carousel instances.
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    /// Arrow click: advance one unit.
    Next(CarouselKey),
    /// Arrow click: retreat one unit.
    Prev(CarouselKey),
    /// Pagination dot click: absolute jump.
    GoToPage(CarouselKey, isize),
    /// Touch started at (x, y).
    SwipeStart(CarouselKey, f32, f32),
    /// Touch released at (x, y).
    SwipeEnd(CarouselKey, f32, f32),
    /// Pointer entered the region (holds autoplay).
    PointerEnter(CarouselKey),
    /// Pointer left the region (restarts autoplay).
    PointerLeave(CarouselKey),
    /// The page was resized to the given width.
    Resized(f32),
    /// Frame tick with the shell's timestamp.
    Tick(Instant),
}

/// Route one message into the registry. Returns the keys of instances that
/// advanced via autoplay (only ever non-empty for [`CarouselMessage::Tick`]).
pub fn update(registry: &mut CarouselRegistry, message: CarouselMessage) -> Vec<CarouselKey> {
    let now = Instant::now();
    match message {
        CarouselMessage::Next(key) => {
            if let Some(c) = registry.get_mut(&key) {
                c.next(now);
            }
        }
        CarouselMessage::Prev(key) => {
            if let Some(c) = registry.get_mut(&key) {
                c.prev(now);
            }
        }
        CarouselMessage::GoToPage(key, page) => {
            if let Some(c) = registry.get_mut(&key) {
                c.go_to_page(page, now);
            }
        }
        CarouselMessage::SwipeStart(key, x, y) => {
            if let Some(c) = registry.get_mut(&key) {
                c.swipe_begin(x, y);
            }
        }
        CarouselMessage::SwipeEnd(key, x, y) => {
            if let Some(c) = registry.get_mut(&key) {
                c.swipe_end(x, y, now);
            }
        }
        CarouselMessage::PointerEnter(key) => {
            if let Some(c) = registry.get_mut(&key) {
                c.pointer_enter();
            }
        }
        CarouselMessage::PointerLeave(key) => {
            if let Some(c) = registry.get_mut(&key) {
                c.pointer_leave(now);
            }
        }
        CarouselMessage::Resized(width_px) => registry.resize_all(width_px),
        CarouselMessage::Tick(at) => return registry.tick_all(at),
    }
    Vec::new()
}
