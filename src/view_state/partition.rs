//! Responsive partitioning of an item list into fixed-size pages.
//!
//! Pages are derived state: they are recomputed from `(items, visible_count)`
//! on demand and never stored. Only the page index is durable.

/// Number of pages `len` items occupy at `visible_count` items per page.
///
/// Always at least 1: an empty list still has one (empty) page. A
/// `visible_count` of 0 is treated as 1.
pub fn page_count(len: usize, visible_count: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(visible_count.max(1))
    }
}

/// Split `items` into contiguous pages of at most `visible_count` items.
///
/// - Empty input yields exactly one empty page.
/// - Otherwise every page holds `visible_count` items except possibly the
///   last, which holds the remainder.
/// - Concatenating the pages reproduces `items` exactly.
pub fn partition<T>(items: &[T], visible_count: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return vec![items];
    }
    items.chunks(visible_count.max(1)).collect()
}

/// The page at `index`, or an empty slice if `index` is out of range.
pub fn page_at<T>(items: &[T], visible_count: usize, index: usize) -> &[T] {
    let size = visible_count.max(1);
    let start = index.saturating_mul(size);
    if start >= items.len() {
        return &items[items.len()..];
    }
    let end = (start + size).min(items.len());
    &items[start..end]
}
