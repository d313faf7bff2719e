//! Pagination settings supplied by the caller.
//!
//! The core never reads configuration from disk or the environment. Callers
//! hand it a [`PagingConfig`], either built in code or parsed from TOML text
//! they loaded themselves:
//!
//! ```toml
//! per_page = 20
//! template = "blog-list.html"
//! output_path_template = "blog/page/{n}/index.html"
//! ```
//!
//! ```rust
//! use folio_core::PagingConfig;
//!
//! let config = PagingConfig::from_toml_str(r#"
//! per_page = 20
//! output_path_template = "blog/page/{n}/index.html"
//! "#)?;
//! assert_eq!(config.per_page, 20);
//! assert!(config.template.is_none());
//! # Ok::<(), folio_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Number of items per page when none is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Fallback template chain appended after any caller-supplied template.
pub const DEFAULT_TEMPLATES: [&str; 2] = ["list.html", "default.html"];

/// Output path used when no template is configured.
pub const DEFAULT_OUTPUT_PATH_TEMPLATE: &str = "page/{n}/index.html";

const PAGE_PLACEHOLDER: &str = "{n}";

/// Settings for one pagination run.
///
/// Missing keys fall back to their defaults; unknown keys are rejected so a
/// typo such as `perpage` does not silently paginate by 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
    /// Maximum number of items on one page. Must be at least 1.
    pub per_page: usize,

    /// Template tried before the default chain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Format string for each page's id and output path. Must contain `{n}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path_template: Option<String>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            template: None,
            output_path_template: None,
        }
    }
}

impl PagingConfig {
    /// Set the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the most specific template name.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the output path format string.
    #[must_use]
    pub fn with_output_path_template(mut self, template: impl Into<String>) -> Self {
        self.output_path_template = Some(template.into());
        self
    }

    /// Check every setting without producing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `per_page` is zero or the output
    /// path template lacks `{n}`.
    pub fn validate(&self) -> Result<()> {
        validate_per_page(self.per_page)?;
        self.output_path()?;
        Ok(())
    }

    /// The parsed output path template, or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a configured template lacks `{n}`.
    pub fn output_path(&self) -> Result<OutputPathTemplate> {
        self.output_path_template
            .as_deref()
            .map_or_else(|| Ok(OutputPathTemplate::default()), OutputPathTemplate::new)
    }

    /// The full template chain, most specific first.
    ///
    /// A configured template is prepended as-is, even when it repeats one of
    /// the defaults.
    pub fn templates(&self) -> Vec<String> {
        self.template
            .iter()
            .cloned()
            .chain(DEFAULT_TEMPLATES.iter().map(|t| (*t).to_string()))
            .collect()
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML for this
    /// structure or if the parsed values fail [`PagingConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse paging config: {e}")))?;
        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid paging config: {e}")))?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_per_page(per_page: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(per_page)
        .ok_or_else(|| Error::InvalidArgument("per_page must be at least 1".to_string()))
}

/// A validated output path format string containing `{n}`.
///
/// ```rust
/// use folio_core::OutputPathTemplate;
///
/// let template = OutputPathTemplate::new("docs/page-{n}.html")?;
/// assert_eq!(template.render(3), "docs/page-3.html");
/// assert!(OutputPathTemplate::new("docs/index.html").is_err());
/// # Ok::<(), folio_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPathTemplate(String);

impl OutputPathTemplate {
    /// Parse a format string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `{n}` does not appear in it.
    pub fn new(template: &str) -> Result<Self> {
        if !template.contains(PAGE_PLACEHOLDER) {
            return Err(Error::InvalidArgument(format!(
                "output path template '{template}' must contain {PAGE_PLACEHOLDER}"
            )));
        }
        Ok(Self(template.to_string()))
    }

    /// Substitute the 1-based page ordinal for every `{n}`.
    #[must_use]
    pub fn render(&self, page_n: usize) -> String {
        self.0.replace(PAGE_PLACEHOLDER, &page_n.to_string())
    }

    /// The raw format string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputPathTemplate {
    fn default() -> Self {
        Self(DEFAULT_OUTPUT_PATH_TEMPLATE.to_string())
    }
}

impl FromStr for OutputPathTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for OutputPathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
