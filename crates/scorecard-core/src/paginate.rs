//! Fixed-size pagination over a filtered view.
//!
//! Pages are 1-based. `total_pages` is never below 1, so an empty view still
//! has a single (empty) page.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Records shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Tracks the current page over a view of `len` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// The current 1-based page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// `max(1, ceil(len / page_size))`.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.get()).max(1)
    }

    /// Move to `target` if it is within `1..=total_pages(len)`.
    ///
    /// Returns `false` and leaves the current page alone otherwise.
    pub fn go_to(&mut self, target: usize, len: usize) -> bool {
        if target < 1 || target > self.total_pages(len) {
            return false;
        }
        self.current = target;
        true
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.current + 1, len)
    }

    pub fn prev(&mut self, len: usize) -> bool {
        self.go_to(self.current - 1, len)
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    /// Offsets of the current page within a view of `len` records.
    pub fn range(&self, len: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = ((self.current - 1) * size).min(len);
        let end = (start + size).min(len);
        start..end
    }

    /// Sequential 1-based row number of the `local_index`-th row on this page.
    pub fn row_number(&self, local_index: usize) -> usize {
        (self.current - 1) * self.page_size.get() + local_index + 1
    }
}
