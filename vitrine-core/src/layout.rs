//! Viewport layout: breakpoint-driven items-per-view and pixel offsets.

use crate::index::page_count;

/// Responsive breakpoints (px). Tuning happens here so every carousel
/// switches consistently.
pub mod breakpoints {
    /// Below this width the layout is considered compact (phones).
    pub const COMPACT: f32 = 600.0;
    /// At or above this width a paged track shows two items per page.
    pub const TWO_UP: f32 = 768.0;
    /// At or above this width spotlight peek styling gets full side cards.
    pub const WIDE: f32 = 900.0;
}

/// Geometry of a carousel's visible region.
///
/// Recomputed on resize via [`Viewport::set_width`]; everything else is
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Current width of the region in pixels.
    pub width_px: f32,
    /// Gap between adjacent slides in pixels.
    pub gap_px: f32,
    /// Width of a single slide in pixels.
    pub slide_width_px: f32,
}

impl Viewport {
    /// Create a viewport; slide width is forced positive so stride math
    /// stays well-defined.
    pub fn new(width_px: f32, gap_px: f32, slide_width_px: f32) -> Self {
        Self {
            width_px: width_px.max(0.0),
            gap_px: gap_px.max(0.0),
            slide_width_px: slide_width_px.max(1.0),
        }
    }

    /// Update the region width (resize handler).
    pub fn set_width(&mut self, width_px: f32) {
        self.width_px = width_px.max(0.0);
    }

    /// Items shown per page at the current width: one below the two-up
    /// breakpoint, two at or above it.
    #[inline]
    pub fn items_per_view(&self) -> usize {
        if self.width_px >= breakpoints::TWO_UP {
            2
        } else {
            1
        }
    }

    /// Horizontal stride of one slide (width plus gap).
    #[inline]
    pub fn stride(&self) -> f32 {
        self.slide_width_px + self.gap_px
    }

    /// Transform offset for a given page of a multi-item track.
    #[inline]
    pub fn page_offset_px(&self, page: usize) -> f32 {
        self.stride() * self.items_per_view() as f32 * page as f32
    }

    /// Largest offset a track may reach: the offset of the last page, so a
    /// ragged final page never overshoots the content.
    pub fn max_offset_px(&self, total_items: usize) -> f32 {
        let pages = page_count(total_items, self.items_per_view());
        self.page_offset_px(pages.saturating_sub(1))
    }

    /// Number of pages for `total_items` at the current width.
    #[inline]
    pub fn pages(&self, total_items: usize) -> usize {
        page_count(total_items, self.items_per_view())
    }
}
