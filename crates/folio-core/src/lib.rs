//! # folio-core
//!
//! The pagination stage of a static site build.
//!
//! Given a stream of content stubs (lightweight references to source
//! documents), this crate synthesizes listing-page documents: each one holds a
//! slice of the original stubs plus the page number, page count and template
//! chain a rendering layer needs.
//!
//! ## Architecture
//!
//! - **Arithmetic**: exact page counts and clamped sibling indices
//! - **Chunking**: lazy fixed-size grouping of any iterator
//! - **Pages**: [`PageDocument`] construction from validated [`PagingConfig`]
//! - **Pagination**: one ordered run of stubs into a lazy page sequence
//! - **Grouping**: per-section pagination of a combined stream
//!
//! The crate renders nothing and performs no I/O. Errors are raised when a
//! paginator is configured, never halfway through a page stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::{PagingConfig, Stub, paginate_grouped, section_key};
//!
//! let stubs: Vec<Stub> = (1..=25)
//!     .map(|i| Stub::new(format!("blog/post-{i}")))
//!     .chain([Stub::new("docs/intro")])
//!     .collect();
//!
//! let pages: Vec<_> =
//!     paginate_grouped(&stubs, |s| section_key(*s), &PagingConfig::default())?.collect();
//!
//! assert_eq!(pages.len(), 4); // three blog pages, one docs page
//! assert_eq!(pages[2].meta.page_list.len(), 5);
//! assert_eq!(pages[3].meta.page_count, 1);
//! # Ok::<(), folio_core::Error>(())
//! ```

/// Page counting and sibling-index arithmetic
pub mod arithmetic;
/// Lazy fixed-size chunking
pub mod chunk;
/// Pagination settings
pub mod config;
/// Error types and result aliases
pub mod error;
/// Per-section pagination
pub mod group;
/// Page documents and the page builder
pub mod page;
/// Pagination of one ordered sequence
pub mod paginate;
/// Stub records and grouping keys
pub mod stub;

// Re-export commonly used types
pub use arithmetic::{count_pages, next_index, prev_index, slice_page};
pub use chunk::{Chunks, chunk};
pub use config::{
    DEFAULT_OUTPUT_PATH_TEMPLATE, DEFAULT_PER_PAGE, DEFAULT_TEMPLATES, OutputPathTemplate,
    PagingConfig,
};
pub use error::{Error, Result};
pub use group::{Dispatch, Group, dispatch, group_by_key, paginate_grouped};
pub use page::{PageDocBuilder, PageDocument, PageMeta, build_page};
pub use paginate::{LazyPages, MaterializedPages, Pages, Paginator, paginate, paginate_exact};
pub use stub::{IdPath, Stub, parent_key, section_key, whole_key};
