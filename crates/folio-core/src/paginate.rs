//! Turning one ordered run of stubs into page documents.
//!
//! Every page carries the group's total `page_count`, so the count has to be
//! known before the first page is yielded. Two ways to get it:
//!
//! - [`Paginator::paginate`] accepts any iterator and materializes the chunk
//!   boundaries first, then hands out pages one at a time.
//! - [`Paginator::paginate_exact`] accepts an [`ExactSizeIterator`], computes
//!   the count with [`count_pages`], and pulls each chunk from the input only
//!   when its page is requested.
//!
//! Both produce identical documents for the same input. Empty input yields no
//! pages at all.
//!
//! ```rust
//! use folio_core::{Paginator, PagingConfig};
//!
//! let paginator = Paginator::new(&PagingConfig::default().with_per_page(2))?;
//! let pages: Vec<_> = paginator.paginate(["a", "b", "c"]).collect();
//!
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[1].meta.page_list, vec!["c"]);
//! assert_eq!(pages[1].meta.page_count, 2);
//! # Ok::<(), folio_core::Error>(())
//! ```

use crate::arithmetic::pages_for;
use crate::chunk::Chunks;
use crate::page::{PageDocBuilder, PageDocument};
use crate::{PagingConfig, Result};
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, trace};

/// Pages produced from fully materialized chunk boundaries.
pub type MaterializedPages<S> = Pages<std::vec::IntoIter<Vec<S>>>;

/// Pages produced by pulling chunks from the input on demand.
pub type LazyPages<I> = Pages<Chunks<I>>;

/// Paginates stub sequences with one validated configuration.
///
/// Cheap to clone; clones share the same page builder.
#[derive(Debug, Clone)]
pub struct Paginator {
    builder: Arc<PageDocBuilder>,
}

impl Paginator {
    /// Validate `config` and prepare a paginator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `per_page` is zero or the
    /// output path template lacks `{n}`.
    pub fn new(config: &PagingConfig) -> Result<Self> {
        let builder = PageDocBuilder::new(config)?;
        debug!(
            per_page = builder.per_page(),
            templates = ?builder.templates(),
            "Paginator configured"
        );
        Ok(Self {
            builder: Arc::new(builder),
        })
    }

    /// Configured page size.
    pub fn per_page(&self) -> usize {
        self.builder.per_page()
    }

    /// Paginate any ordered sequence.
    ///
    /// Chunk boundaries are materialized up front to learn the page count;
    /// pages are then built one at a time as the result is consumed.
    pub fn paginate<I>(&self, stubs: I) -> MaterializedPages<I::Item>
    where
        I: IntoIterator,
    {
        let chunks: Vec<Vec<I::Item>> = self.chunks(stubs).collect();
        let page_count = chunks.len();
        debug!(page_count, "Paginating materialized sequence");
        Pages::new(chunks.into_iter(), Arc::clone(&self.builder), page_count)
    }

    /// Paginate a sequence whose length is known without reading it.
    ///
    /// Each page's items are pulled from `stubs` only when that page is
    /// requested, so stopping early leaves the rest of the input unread.
    pub fn paginate_exact<I>(&self, stubs: I) -> LazyPages<I::IntoIter>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = stubs.into_iter();
        let page_count = pages_for(iter.len(), self.builder.page_size());
        debug!(items = iter.len(), page_count, "Paginating sized sequence");
        Pages::new(self.chunks(iter), Arc::clone(&self.builder), page_count)
    }

    fn chunks<I: IntoIterator>(&self, stubs: I) -> Chunks<I::IntoIter> {
        Chunks::new(stubs.into_iter(), self.per_page())
    }
}

/// Paginate `stubs` with `config`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for an invalid `config`. No stub
/// is read in that case.
pub fn paginate<I>(stubs: I, config: &PagingConfig) -> Result<MaterializedPages<I::Item>>
where
    I: IntoIterator,
{
    Ok(Paginator::new(config)?.paginate(stubs))
}

/// Paginate an exactly sized sequence lazily.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for an invalid `config`.
pub fn paginate_exact<I>(stubs: I, config: &PagingConfig) -> Result<LazyPages<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    Ok(Paginator::new(config)?.paginate_exact(stubs))
}

/// Lazy sequence of page documents for one group.
///
/// Single pass: once consumed it cannot be restarted.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Pages<C> {
    chunks: C,
    builder: Arc<PageDocBuilder>,
    page_count: usize,
    page_n: usize,
}

impl<C> Pages<C> {
    fn new(chunks: C, builder: Arc<PageDocBuilder>, page_count: usize) -> Self {
        Self {
            chunks,
            builder,
            page_count,
            page_n: 0,
        }
    }

    /// Total pages this sequence yields.
    pub const fn page_count(&self) -> usize {
        self.page_count
    }
}

impl<C, S> Iterator for Pages<C>
where
    C: Iterator<Item = Vec<S>>,
{
    type Item = PageDocument<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.chunks.next()?;
        self.page_n += 1;
        trace!(
            page_n = self.page_n,
            page_count = self.page_count,
            items = items.len(),
            "Built page"
        );
        Some(self.builder.assemble(items, self.page_n, self.page_count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.page_count.saturating_sub(self.page_n);
        (remaining, Some(remaining))
    }
}

impl<C, S> ExactSizeIterator for Pages<C> where C: Iterator<Item = Vec<S>> {}

impl<C, S> FusedIterator for Pages<C> where C: FusedIterator<Item = Vec<S>> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{Error, Stub, count_pages};
    use proptest::prelude::*;
    use std::cell::Cell;

    fn stubs(n: usize) -> Vec<Stub> {
        (1..=n).map(|i| Stub::new(format!("blog/post-{i}"))).collect()
    }

    #[test]
    fn test_twenty_five_stubs_make_three_pages() {
        // Given: 25 stubs and the default page size
        let input = stubs(25);
        let paginator = Paginator::new(&PagingConfig::default()).unwrap();

        // When: Paginating
        let pages: Vec<_> = paginator.paginate(&input).collect();

        // Then: 10, 10, 5 with consistent metadata
        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(|p| p.meta.page_list.len()).collect();
        assert_eq!(sizes, vec![10, 10, 5]);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.meta.page_n, i + 1);
            assert_eq!(page.meta.page_count, 3);
            assert_eq!(page.output_path, format!("page/{}/index.html", i + 1));
            assert_eq!(page.templates, vec!["list.html", "default.html"]);
        }
    }

    #[test]
    fn test_empty_input_yields_no_pages() {
        let paginator = Paginator::new(&PagingConfig::default()).unwrap();
        assert_eq!(paginator.paginate(Vec::<Stub>::new()).count(), 0);
        assert_eq!(paginator.paginate_exact(Vec::<Stub>::new()).count(), 0);
    }

    #[test]
    fn test_short_input_yields_single_page() {
        let input = stubs(3);
        let pages: Vec<_> = paginate(&input, &PagingConfig::default()).unwrap().collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].meta.page_count, 1);
        assert_eq!(pages[0].meta.page_list.len(), 3);
    }

    #[test]
    fn test_invalid_config_fails_before_reading_input() {
        // Given: An input that records whether it was read
        let touched = Cell::new(false);
        let input = std::iter::from_fn(|| {
            touched.set(true);
            None::<Stub>
        });

        // When: Paginating with a zero page size
        let result = paginate(input, &PagingConfig::default().with_per_page(0));

        // Then: The error surfaces and the input was never touched
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(!touched.get());
    }

    #[test]
    fn test_exact_pagination_pulls_one_page_at_a_time() {
        // Given: A sized input that records how far it was read
        let pulled = Cell::new(0usize);
        let input: Vec<usize> = (0..30).collect();
        let source = input.iter().inspect(|_| pulled.set(pulled.get() + 1));
        let paginator = Paginator::new(&PagingConfig::default()).unwrap();

        // When: Only the first page is consumed
        let mut pages = paginator.paginate_exact(source);
        assert_eq!(pages.page_count(), 3);
        let first = pages.next().unwrap();

        // Then: Only the first page's items were read
        assert_eq!(first.meta.page_count, 3);
        assert_eq!(pulled.get(), 10);
    }

    #[test]
    fn test_size_hint_tracks_remaining_pages() {
        let input = stubs(25);
        let mut pages = paginate_exact(&input, &PagingConfig::default()).unwrap();
        assert_eq!(pages.len(), 3);
        pages.next();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_custom_template_and_path() {
        let config = PagingConfig::default()
            .with_per_page(4)
            .with_template("blog.html")
            .with_output_path_template("blog/page/{n}/index.html");
        let input = stubs(5);

        let pages: Vec<_> = paginate(&input, &config).unwrap().collect();

        assert_eq!(pages[1].output_path, "blog/page/2/index.html");
        assert_eq!(pages[1].id_path, "blog/page/2/index.html");
        assert_eq!(pages[1].templates[0], "blog.html");
        assert_eq!(pages[1].meta.per_page, 4);
    }

    proptest! {
        #[test]
        fn test_pagination_covers_input(n in 0usize..120, per_page in 1usize..15) {
            let input: Vec<usize> = (0..n).collect();
            let config = PagingConfig::default().with_per_page(per_page);

            let pages: Vec<_> = paginate(input.clone(), &config).unwrap().collect();
            let lazy: Vec<_> = paginate_exact(input.clone(), &config).unwrap().collect();

            prop_assert_eq!(pages.len(), count_pages(n, per_page).unwrap());
            let flat: Vec<usize> = pages.iter().flat_map(|p| p.meta.page_list.clone()).collect();
            prop_assert_eq!(flat, input);
            prop_assert!(pages.iter().all(|p| p.meta.page_count == pages.len()));
            prop_assert!(pages.iter().all(|p| !p.meta.page_list.is_empty()));
            prop_assert_eq!(pages, lazy);
        }
    }
}
