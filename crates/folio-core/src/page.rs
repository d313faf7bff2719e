//! Page documents and their construction.
//!
//! A [`PageDocument`] is the only thing pagination produces: one listing page
//! holding a slice of the original stubs plus the metadata templates need to
//! render it (`page_n`, `per_page`, `page_count`, `page_list`).
//!
//! ```rust
//! use folio_core::{PageDocBuilder, PagingConfig, Stub};
//!
//! let builder = PageDocBuilder::new(&PagingConfig::default())?;
//! let stubs = vec![Stub::new("blog/a"), Stub::new("blog/b")];
//! let page = builder.build(stubs.iter().collect(), 1, 1)?;
//!
//! assert_eq!(page.output_path, "page/1/index.html");
//! assert_eq!(page.title, "Page 1");
//! assert_eq!(page.meta.page_list.len(), 2);
//! # Ok::<(), folio_core::Error>(())
//! ```

use crate::arithmetic;
use crate::config::{OutputPathTemplate, PagingConfig, validate_per_page};
use crate::{Error, Result};
use serde::Serialize;
use std::num::NonZeroUsize;

/// Per-page metadata exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta<S> {
    /// 1-based ordinal of this page within its group.
    pub page_n: usize,
    /// Configured page size.
    pub per_page: usize,
    /// Total pages in this group.
    pub page_count: usize,
    /// Items on this page, in input order.
    pub page_list: Vec<S>,
}

/// One synthesized listing page.
///
/// `S` is whatever the caller paginated: usually `&Stub` or `Rc<Stub>` so the
/// page refers to the original stubs rather than copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDocument<S> {
    /// Identifier of the page; equal to `output_path`.
    pub id_path: String,
    /// Where the rendered page is written, relative to the output root.
    pub output_path: String,
    /// Human-readable title, `"Page {n}"`.
    pub title: String,
    /// Templates to try, most specific first.
    pub templates: Vec<String>,
    /// Pagination metadata and the page's items.
    pub meta: PageMeta<S>,
}

impl<S> PageDocument<S> {
    /// 0-based index of this page.
    pub const fn index(&self) -> usize {
        self.meta.page_n.saturating_sub(1)
    }

    /// 0-based index of the previous page, clamped at the first page.
    pub const fn prev_index(&self) -> usize {
        arithmetic::prev_index(self.index())
    }

    /// 0-based index of the next page, clamped at the last page.
    pub fn next_index(&self) -> Option<usize> {
        arithmetic::next_index(self.index(), self.meta.page_count)
    }

    /// Whether this is the first page of its group.
    pub const fn is_first(&self) -> bool {
        self.meta.page_n == 1
    }

    /// Whether this is the last page of its group.
    pub const fn is_last(&self) -> bool {
        self.meta.page_n == self.meta.page_count
    }
}

/// Builds [`PageDocument`]s from validated settings.
///
/// Construction validates the configuration once; [`PageDocBuilder::build`]
/// then only checks the page's own shape and performs no I/O.
#[derive(Debug, Clone)]
pub struct PageDocBuilder {
    per_page: NonZeroUsize,
    templates: Vec<String>,
    output_path: OutputPathTemplate,
}

impl PageDocBuilder {
    /// Validate `config` and capture what every page needs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `per_page` is zero or the
    /// output path template lacks `{n}`.
    pub fn new(config: &PagingConfig) -> Result<Self> {
        Ok(Self {
            per_page: validate_per_page(config.per_page)?,
            templates: config.templates(),
            output_path: config.output_path()?,
        })
    }

    /// Configured page size.
    pub const fn per_page(&self) -> usize {
        self.per_page.get()
    }

    pub(crate) const fn page_size(&self) -> NonZeroUsize {
        self.per_page
    }

    /// Template chain attached to every page.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Build the page with 1-based ordinal `page_n` out of `page_count`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `page_n` is outside
    /// `1..=page_count`, or `page_items` is empty or longer than `per_page`.
    pub fn build<S>(
        &self,
        page_items: Vec<S>,
        page_n: usize,
        page_count: usize,
    ) -> Result<PageDocument<S>> {
        if page_n == 0 || page_n > page_count {
            return Err(Error::InvalidArgument(format!(
                "page_n {page_n} is outside 1..={page_count}"
            )));
        }
        if page_items.is_empty() {
            return Err(Error::InvalidArgument("a page needs at least one item".to_string()));
        }
        if page_items.len() > self.per_page() {
            return Err(Error::InvalidArgument(format!(
                "{} items exceed per_page {}",
                page_items.len(),
                self.per_page()
            )));
        }
        Ok(self.assemble(page_items, page_n, page_count))
    }

    // Callers guarantee the page shape: chunks are non-empty, at most
    // `per_page` long, and numbered within the page count.
    pub(crate) fn assemble<S>(
        &self,
        page_items: Vec<S>,
        page_n: usize,
        page_count: usize,
    ) -> PageDocument<S> {
        let output_path = self.output_path.render(page_n);
        PageDocument {
            id_path: output_path.clone(),
            output_path,
            title: format!("Page {page_n}"),
            templates: self.templates.clone(),
            meta: PageMeta {
                page_n,
                per_page: self.per_page(),
                page_count,
                page_list: page_items,
            },
        }
    }
}

/// Build a single page without keeping a builder around.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `per_page` is zero,
/// `output_path_template` lacks `{n}`, or the page itself is malformed (see
/// [`PageDocBuilder::build`]).
pub fn build_page<S>(
    page_items: Vec<S>,
    page_n: usize,
    page_count: usize,
    per_page: usize,
    template: Option<&str>,
    output_path_template: Option<&str>,
) -> Result<PageDocument<S>> {
    let config = PagingConfig {
        per_page,
        template: template.map(str::to_string),
        output_path_template: output_path_template.map(str::to_string),
    };
    PageDocBuilder::new(&config)?.build(page_items, page_n, page_count)
}
