/// Page slicing
///
/// Pages are 1-based. Requests outside the valid range produce an empty
/// page; a zero page size is a programming error and fails fast.

/// Return the items on `page` when `items` is split into chunks of
/// `page_size`.
///
/// # Panics
///
/// Panics if `page_size` is zero.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    assert!(page_size > 0, "page size must be positive");

    if page == 0 {
        // Pages are 1-based; page zero is before the start
        return Vec::new();
    }

    let start = (page - 1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}
