//! Per-section pagination.
//!
//! A site build feeds one combined stream of stubs from many sections
//! (`blog/*`, `docs/*`, ...). [`dispatch`] partitions that stream by a
//! caller-chosen key and paginates each partition on its own, so each section
//! gets its own page 1..N instead of one interleaved sequence.
//!
//! Groups come out in order of first appearance and keep their members in
//! input order. All pages of one group precede all pages of the next.
//!
//! ```rust
//! use folio_core::{PagingConfig, Stub, paginate_grouped, parent_key};
//!
//! let stubs = vec![
//!     Stub::new("blog/a1"),
//!     Stub::new("docs/b1"),
//!     Stub::new("blog/a2"),
//! ];
//! let pages: Vec<_> = paginate_grouped(&stubs, parent_key, &PagingConfig::default())?.collect();
//!
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[0].meta.page_list[1].id_path, "blog/a2");
//! assert_eq!(pages[1].meta.page_list[0].id_path, "docs/b1");
//! # Ok::<(), folio_core::Error>(())
//! ```

use crate::page::PageDocument;
use crate::paginate::Paginator;
use crate::{PagingConfig, Result};
use std::collections::HashMap;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Items sharing one grouping key, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<S> {
    /// The shared key.
    pub key: String,
    /// Members in the order they were encountered.
    pub items: Vec<S>,
}

/// Partition `stubs` by `key_fn`, in order of each key's first appearance.
///
/// ```rust
/// use folio_core::group_by_key;
///
/// let groups = group_by_key(["a1", "b1", "a2"], |s| s[..1].to_string());
/// assert_eq!(groups[0].items, vec!["a1", "a2"]);
/// assert_eq!(groups[1].key, "b");
/// ```
pub fn group_by_key<I, K>(stubs: I, mut key_fn: K) -> Vec<Group<I::Item>>
where
    I: IntoIterator,
    K: FnMut(&I::Item) -> String,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<I::Item>> = Vec::new();

    for stub in stubs {
        let key = key_fn(&stub);
        let slot = *slots.entry(key).or_insert_with_key(|key| {
            groups.push(Group {
                key: key.clone(),
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(stub);
    }

    groups
}

/// Run `paginate_fn` once per group of `stubs` and concatenate the results.
///
/// Nothing is read until the first item is requested. The whole input is
/// then partitioned (a later stub may belong to the first group), and each
/// group's pages are produced only after the previous group's are exhausted.
pub fn dispatch<I, K, F, P>(stubs: I, key_fn: K, paginate_fn: F) -> Dispatch<I::IntoIter, K, F, P>
where
    I: IntoIterator,
    K: FnMut(&I::Item) -> String,
    F: FnMut(Vec<I::Item>) -> P,
    P: IntoIterator,
{
    Dispatch {
        pending: Some((stubs.into_iter(), key_fn)),
        groups: Vec::new().into_iter(),
        paginate_fn,
        current: None,
    }
}

/// Iterator returned by [`dispatch`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Dispatch<I, K, F, P>
where
    I: Iterator,
    P: IntoIterator,
{
    pending: Option<(I, K)>,
    groups: std::vec::IntoIter<Group<I::Item>>,
    paginate_fn: F,
    current: Option<P::IntoIter>,
}

impl<I, K, F, P> Dispatch<I, K, F, P>
where
    I: Iterator,
    K: FnMut(&I::Item) -> String,
    P: IntoIterator,
{
    fn partition(&mut self) {
        if let Some((stubs, key_fn)) = self.pending.take() {
            let groups = group_by_key(stubs, key_fn);
            debug!(
                groups = groups.len(),
                keys = ?groups.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(),
                "Partitioned stubs into groups"
            );
            self.groups = groups.into_iter();
        }
    }
}

impl<I, K, F, P> Iterator for Dispatch<I, K, F, P>
where
    I: Iterator,
    K: FnMut(&I::Item) -> String,
    F: FnMut(Vec<I::Item>) -> P,
    P: IntoIterator,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.partition();
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(doc) = current.next() {
                    return Some(doc);
                }
                self.current = None;
            }
            let group = self.groups.next()?;
            trace!(key = %group.key, items = group.items.len(), "Paginating group");
            self.current = Some((self.paginate_fn)(group.items).into_iter());
        }
    }
}

impl<I, K, F, P> FusedIterator for Dispatch<I, K, F, P>
where
    I: Iterator,
    K: FnMut(&I::Item) -> String,
    F: FnMut(Vec<I::Item>) -> P,
    P: IntoIterator,
{
}

/// Paginate each group of `stubs` with one configuration.
///
/// `config` is validated before any stub is read.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for an invalid `config`.
pub fn paginate_grouped<I, K>(
    stubs: I,
    key_fn: K,
    config: &PagingConfig,
) -> Result<impl Iterator<Item = PageDocument<I::Item>> + use<I, K>>
where
    I: IntoIterator,
    K: FnMut(&I::Item) -> String,
{
    let paginator = Paginator::new(config)?;
    Ok(dispatch(stubs, key_fn, move |group| {
        paginator.paginate_exact(group)
    }))
}
