//! Page counting and sibling-index arithmetic.
//!
//! These are pure functions. [`count_pages`] feeds the paginator;
//! [`prev_index`] and [`next_index`] are never called by pagination itself and
//! exist for the template layer to build previous/next links from a 0-based
//! page index.

use crate::config::validate_per_page;
use crate::Result;
use std::num::NonZeroUsize;

/// Number of pages needed to hold `length` items at `per_page` items each.
///
/// Exact ceiling division: `count_pages(20, 10)` is 2 and `count_pages(21, 10)`
/// is 3. Zero items need zero pages.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `per_page` is zero.
///
/// ```rust
/// use folio_core::count_pages;
///
/// assert_eq!(count_pages(0, 10)?, 0);
/// assert_eq!(count_pages(10, 10)?, 1);
/// assert_eq!(count_pages(11, 10)?, 2);
/// # Ok::<(), folio_core::Error>(())
/// ```
pub fn count_pages(length: usize, per_page: usize) -> Result<usize> {
    Ok(pages_for(length, validate_per_page(per_page)?))
}

/// [`count_pages`] for an already validated page size.
#[inline]
pub(crate) const fn pages_for(length: usize, per_page: NonZeroUsize) -> usize {
    length.div_ceil(per_page.get())
}

/// Index of the previous page, clamped at the first page.
#[inline]
#[must_use]
pub const fn prev_index(i: usize) -> usize {
    i.saturating_sub(1)
}

/// Index of the next page, clamped at the last valid index.
///
/// Returns `None` when `length` is zero since there is no valid index at all.
///
/// ```rust
/// use folio_core::next_index;
///
/// assert_eq!(next_index(0, 3), Some(1));
/// assert_eq!(next_index(2, 3), Some(2));
/// assert_eq!(next_index(0, 0), None);
/// ```
#[inline]
#[must_use]
pub fn next_index(i: usize, length: usize) -> Option<usize> {
    length
        .checked_sub(1)
        .map(|last| i.saturating_add(1).min(last))
}

/// Lazily select the items of the 0-based page `page_index`.
///
/// Skips `page_index * per_page` items and yields at most `per_page`. Nothing
/// past the end of the requested page is read from `items`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `per_page` is zero.
///
/// ```rust
/// use folio_core::slice_page;
///
/// let page: Vec<_> = slice_page(1..=25, 2, 10)?.collect();
/// assert_eq!(page, vec![21, 22, 23, 24, 25]);
/// # Ok::<(), folio_core::Error>(())
/// ```
pub fn slice_page<I>(
    items: I,
    page_index: usize,
    per_page: usize,
) -> Result<std::iter::Take<std::iter::Skip<I::IntoIter>>>
where
    I: IntoIterator,
{
    let per_page = validate_per_page(per_page)?.get();
    let start = page_index.saturating_mul(per_page);
    Ok(items.into_iter().skip(start).take(per_page))
}
