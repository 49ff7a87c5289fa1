//! Pagination: the visible window over the data and page navigation.
//!
//! The free functions are pure. [`Pager`] keeps the current page index and
//! re-validates it against whatever item count it is given, so navigation
//! never leaves the index pointing past the data.

use serde::Serialize;

/// Page size used when none (or zero) is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// The records shown on the current page.
///
/// With the pager disabled this is the whole input. Otherwise it is the
/// half-open window `[index * size, (index + 1) * size)` truncated to the
/// data, or empty once the window starts past the end. A zero page size
/// counts as [`DEFAULT_PAGE_SIZE`].
///
/// ```rust
/// use littlegrid::visible_slice;
///
/// let data: Vec<u32> = (1..=12).collect();
/// assert_eq!(visible_slice(&data, true, 5, 0), &[1, 2, 3, 4, 5]);
/// assert_eq!(visible_slice(&data, true, 5, 2), &[11, 12]);
/// assert!(visible_slice(&data, true, 5, 3).is_empty());
/// assert_eq!(visible_slice(&data, false, 5, 2).len(), 12);
/// ```
pub fn visible_slice<T>(
    data: &[T],
    pager_enabled: bool,
    page_size: usize,
    current_page_index: usize,
) -> &[T] {
    if !pager_enabled {
        return data;
    }
    let size = effective_page_size(page_size);
    let start = current_page_index.saturating_mul(size);
    if start >= data.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(data.len());
    &data[start..end]
}

/// Index of the last page: `ceil(total / page_size) - 1`, or `-1` when
/// there is no data.
///
/// ```rust
/// use littlegrid::max_page_index;
///
/// assert_eq!(max_page_index(0, 5), -1);
/// assert_eq!(max_page_index(5, 5), 0);
/// assert_eq!(max_page_index(6, 5), 1);
/// ```
pub fn max_page_index(total: usize, page_size: usize) -> i64 {
    if total == 0 {
        return -1;
    }
    let pages = total.div_ceil(effective_page_size(page_size));
    i64::try_from(pages).map_or(i64::MAX, |pages| pages - 1)
}

/// One entry in the pager footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Zero-based page index to navigate to.
    pub index: usize,
    /// One-based label.
    pub number: usize,
    /// Whether this is the current page.
    pub active: bool,
}

/// Pagination state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    enabled: bool,
    page_size: usize,
    current_page_index: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            enabled: false,
            page_size: DEFAULT_PAGE_SIZE,
            current_page_index: 0,
        }
    }
}

impl Pager {
    /// Create a pager on the first page. A zero page size becomes
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(enabled: bool, page_size: usize) -> Self {
        Pager {
            enabled,
            page_size: effective_page_size(page_size),
            current_page_index: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Last valid page index for `total` items, never below zero.
    fn last_index(&self, total: usize) -> usize {
        usize::try_from(max_page_index(total, self.page_size)).unwrap_or(0)
    }

    fn move_to(&mut self, index: usize) {
        if index != self.current_page_index {
            tracing::trace!(from = self.current_page_index, to = index, "page changed");
            self.current_page_index = index;
        }
    }

    /// Go to the first page.
    pub fn jump_to_first_page(&mut self) {
        self.move_to(0);
    }

    /// Go to the last page (page 0 when there is no data).
    pub fn jump_to_last_page(&mut self, total: usize) {
        self.move_to(self.last_index(total));
    }

    /// Go to `index`, clamped into the valid page range.
    pub fn set_page(&mut self, index: usize, total: usize) {
        self.move_to(index.min(self.last_index(total)));
    }

    /// Pull the current index back into range after the data changed.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.current_page_index, total);
    }

    /// The records on the current page.
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        visible_slice(data, self.enabled, self.page_size, self.current_page_index)
    }

    /// Index of the last page for `total` items (`-1` when empty).
    pub fn max_page_index(&self, total: usize) -> i64 {
        max_page_index(total, self.page_size)
    }

    /// One link per page, in order.
    pub fn page_links(&self, total: usize) -> Vec<PageLink> {
        if total == 0 {
            return Vec::new();
        }
        (0..=self.last_index(total))
            .map(|index| PageLink {
                index,
                number: index + 1,
                active: index == self.current_page_index,
            })
            .collect()
    }
}
