//! Stub records and grouping-key policies.
//!
//! A stub is a lightweight reference to one source document. The paginator
//! only needs its identifying path, which any item type can expose through
//! [`IdPath`]. Everything else a template might want (title, date, custom
//! front matter) rides along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::rc::Rc;
use std::sync::Arc;

/// Anything with a slash-delimited identifying path such as `"blog/post-1"`.
pub trait IdPath {
    /// The identifying path.
    fn id_path(&self) -> &str;
}

impl<T: IdPath + ?Sized> IdPath for &T {
    fn id_path(&self) -> &str {
        (**self).id_path()
    }
}

impl<T: IdPath + ?Sized> IdPath for Rc<T> {
    fn id_path(&self) -> &str {
        (**self).id_path()
    }
}

impl<T: IdPath + ?Sized> IdPath for Arc<T> {
    fn id_path(&self) -> &str {
        (**self).id_path()
    }
}

impl<T: IdPath + ?Sized> IdPath for Box<T> {
    fn id_path(&self) -> &str {
        (**self).id_path()
    }
}

/// One source document as seen by the pagination stage.
///
/// Unknown fields are kept in [`Stub::extra`] and written back out unchanged,
/// so stubs survive a JSON round trip through the CLI. The exception is an
/// explicit `null` for `title` or `date`: it reads as absent and is omitted
/// on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stub {
    /// Slash-delimited path locating the document, e.g. `"blog/post-1"`.
    pub id_path: String,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as written in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Any other passthrough fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stub {
    /// Create a stub with only an identifying path.
    pub fn new(id_path: impl Into<String>) -> Self {
        Self {
            id_path: id_path.into(),
            title: None,
            date: None,
            extra: Map::new(),
        }
    }

    /// Attach a title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Attach an arbitrary passthrough field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl IdPath for Stub {
    fn id_path(&self) -> &str {
        &self.id_path
    }
}

fn trimmed(path: &str) -> &str {
    path.trim_matches('/')
}

/// Group by containing directory: every segment except the last.
///
/// ```rust
/// use folio_core::{parent_key, Stub};
///
/// assert_eq!(parent_key(&Stub::new("blog/2024/post-1")), "blog/2024");
/// assert_eq!(parent_key(&Stub::new("about")), "");
/// ```
pub fn parent_key<S: IdPath + ?Sized>(stub: &S) -> String {
    let path = trimmed(stub.id_path());
    path.rsplit_once('/')
        .map_or_else(String::new, |(parent, _)| parent.to_string())
}

/// Group by top-level section: the first segment only.
///
/// Top-level documents without a directory land in the `""` section.
///
/// ```rust
/// use folio_core::{section_key, Stub};
///
/// assert_eq!(section_key(&Stub::new("blog/2024/post-1")), "blog");
/// assert_eq!(section_key(&Stub::new("about")), "");
/// ```
pub fn section_key<S: IdPath + ?Sized>(stub: &S) -> String {
    let path = trimmed(stub.id_path());
    path.split_once('/')
        .map_or_else(String::new, |(section, _)| section.to_string())
}

/// Put every stub in a single group.
pub fn whole_key<S: ?Sized>(_stub: &S) -> String {
    String::new()
}
