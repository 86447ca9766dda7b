//! Fixed-size page windows over a filtered list.

/// Number of rows on one page of the user table.
pub const USERS_PER_PAGE: usize = 5;

/// Number of pages needed for `len` items, `0` when there are none.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page)
}

/// The half-open window `[(page - 1) * per_page, page * per_page)` of `items`.
///
/// Pages are 1-based. The window is clamped to the slice, so a page past the
/// end yields an empty slice rather than panicking.
pub fn page_window<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = page.saturating_mul(per_page).min(items.len());
    &items[start..end]
}
