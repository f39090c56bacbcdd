//! Slide index wraparound and page arithmetic.
//!
//! Out-of-range indices are never rejected; they are normalized with
//! modular arithmetic, so navigation has no error paths at all.

/// Normalize an arbitrary signed index into `[0, total)`.
///
/// Total for every `i` when `total >= 1`. Callers with an empty slide set
/// must not construct an index in the first place (empty sets disable the
/// owning controller entirely).
#[inline]
pub fn wrap(i: isize, total: usize) -> usize {
    debug_assert!(total >= 1, "wrap requires at least one slide");
    let t = total as isize;
    (((i % t) + t) % t) as usize
}

/// Number of pages when showing `items_per_view` consecutive items per page.
///
/// Ceiling division; a non-empty set always has at least one page.
#[inline]
pub fn page_count(total_items: usize, items_per_view: usize) -> usize {
    total_items.div_ceil(items_per_view.max(1)).max(1)
}

/// Current position within an ordered, non-empty slide set.
///
/// The unit is opaque: for a spotlight carousel it is a slide, for a paged
/// track it is a page. `total` is fixed at construction and mutated only
/// through [`SlideIndex::set_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    total: usize,
}

impl SlideIndex {
    /// Create a new index at position 0. Returns `None` for an empty set.
    pub fn new(total: usize) -> Option<Self> {
        (total >= 1).then_some(Self { current: 0, total })
    }

    /// Current position, always in `[0, total)`.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total number of positions.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to an absolute position, wrapping into range.
    pub fn go_to(&mut self, i: isize) -> usize {
        self.current = wrap(i, self.total);
        self.current
    }

    /// Step forward by one with wraparound.
    pub fn advance(&mut self) -> usize {
        self.current = self.next_index();
        self.current
    }

    /// Step backward by one with wraparound.
    pub fn retreat(&mut self) -> usize {
        self.current = self.prev_index();
        self.current
    }

    /// Position immediately before the current one, wrapped.
    #[inline]
    pub fn prev_index(&self) -> usize {
        (self.current + self.total - 1) % self.total
    }

    /// Position immediately after the current one, wrapped.
    #[inline]
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.total
    }

    /// Change the total, re-wrapping the current position. Returns `false`
    /// (and leaves the index untouched) when `total` is zero; the caller is
    /// expected to drop the owning controller in that case.
    pub fn set_total(&mut self, total: usize) -> bool {
        if total == 0 {
            return false;
        }
        self.total = total;
        self.current = self.current.min(total - 1);
        true
    }
}
