//! Page window arithmetic.
//!
//! Pages are 1-based. Page `p` covers filtered positions `[(p-1)*size, p*size)`,
//! clamped to the number of matches. Nothing here rejects a page past the end;
//! such pages are simply empty.

/// Bounds of one page over `count` filtered matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Slice start (inclusive, 0-based).
    pub start: usize,
    /// Slice end (exclusive, 0-based).
    pub end: usize,
    /// 1-based position of the first shown match, for "Displaying left-right of count".
    /// Equals `end` when the page is empty.
    pub range_left: usize,
    /// 1-based position of the last shown match.
    pub range_right: usize,
}

impl PageWindow {
    /// Computes the window for `page` (expected to be >= 1) with `page_size` records per page.
    pub fn new(count: usize, page: i64, page_size: usize) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);

        let start = count.min((page - 1).saturating_mul(page_size));
        let end = count.min(page.saturating_mul(page_size));

        Self {
            start,
            end,
            range_left: (start + 1).min(end),
            range_right: end,
        }
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
