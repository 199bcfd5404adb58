#![forbid(unsafe_code)]

//! Pagination window calculation.
//!
//! Given a current page, a total page count, and a sibling count, compute the
//! row of page buttons a pager renders: first and last page always present,
//! a window of siblings around the current page, and ellipses standing in
//! for collapsed runs. Pages are 1-based.
//!
//! # Invariants
//!
//! 1. Page numbers appear in strictly increasing order, without duplicates.
//! 2. The first token is page 1 and the last is page `total` (when nonempty).
//! 3. The current page is always present.
//! 4. An ellipsis always hides at least two pages; a gap of exactly one page
//!    is rendered as that page.

/// One slot in a pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageToken {
    /// A direct page link (1-based page number).
    Page(usize),
    /// A collapsed run of at least two pages.
    Ellipsis,
}

/// Default number of sibling pages shown on each side of the current page.
pub const DEFAULT_SIBLINGS: usize = 1;

/// Compute the token row for a pager.
///
/// `current` is clamped into `1..=total`; a zero `total` yields an empty row.
#[must_use]
pub fn page_window(current: usize, total: usize, siblings: usize) -> Vec<PageToken> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let low = current.saturating_sub(siblings).max(1);
    let high = (current + siblings).min(total);

    let mut out = Vec::with_capacity(high - low + 5);
    if low > 1 {
        out.push(PageToken::Page(1));
        match low {
            2 => {}
            3 => out.push(PageToken::Page(2)),
            _ => out.push(PageToken::Ellipsis),
        }
    }
    out.extend((low..=high).map(PageToken::Page));
    if high < total {
        match total - high {
            1 => {}
            2 => out.push(PageToken::Page(total - 1)),
            _ => out.push(PageToken::Ellipsis),
        }
        out.push(PageToken::Page(total));
    }
    out
}

/// A computed pagination row plus the prev/next availability flags a list
/// API reports alongside each page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    current: usize,
    total: usize,
    tokens: Vec<PageToken>,
}

impl PageWindow {
    /// Compute a window with [`DEFAULT_SIBLINGS`].
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self::with_siblings(current, total, DEFAULT_SIBLINGS)
    }

    /// Compute a window with an explicit sibling count.
    #[must_use]
    pub fn with_siblings(current: usize, total: usize, siblings: usize) -> Self {
        let clamped = if total == 0 { 0 } else { current.clamp(1, total) };
        Self {
            current: clamped,
            total,
            tokens: page_window(current, total, siblings),
        }
    }

    /// The (clamped) current page, or 0 when there are no pages.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// The token row to render.
    #[must_use]
    pub fn tokens(&self) -> &[PageToken] {
        &self.tokens
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total
    }
}
