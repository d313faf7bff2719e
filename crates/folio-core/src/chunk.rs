//! Lazy fixed-size chunking.
//!
//! [`chunk`] turns any iterator into an iterator of `Vec`s holding `size`
//! consecutive items each, except the last which holds the remainder. Each
//! chunk is pulled from the source only when it is requested, so chunking an
//! unbounded or expensive input only reads as far as the consumer goes.

use crate::{Error, Result};
use std::iter::FusedIterator;

/// Split `items` into consecutive groups of `size` elements.
///
/// Never yields an empty group. The final group holds between 1 and `size`
/// elements.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `size` is zero.
///
/// ```rust
/// use folio_core::chunk;
///
/// let chunks: Vec<Vec<u32>> = chunk(1..=7, 3)?.collect();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// # Ok::<(), folio_core::Error>(())
/// ```
pub fn chunk<I>(items: I, size: usize) -> Result<Chunks<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(Error::InvalidArgument(
            "chunk size must be at least 1".to_string(),
        ));
    }
    Ok(Chunks::new(items.into_iter(), size))
}

/// Iterator returned by [`chunk`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I> Chunks<I> {
    /// Wrap `iter`; callers guarantee `size` is non-zero.
    pub(crate) const fn new(iter: I, size: usize) -> Self {
        Self {
            iter,
            size,
            done: false,
        }
    }

    /// Number of items per full chunk.
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let group: Vec<I::Item> = self.iter.by_ref().take(self.size).collect();
        if group.len() < self.size {
            // A short group means the source ran dry; don't poll it again.
            self.done = true;
        }
        if group.is_empty() { None } else { Some(group) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|u| u.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Chunks<I> {}
