//! # CLI Structure and Argument Parsing
//!
//! `folio` is a thin front end over `folio-core`: it reads a list of stubs,
//! paginates them, and prints the page documents as JSON for a rendering step
//! to consume.
//!
//! ```bash
//! # Paginate every section of a content tree, 20 items per page
//! folio paginate stubs.json --per-page 20 --group-by section
//!
//! # Same, reading stubs from stdin and settings from a file
//! cat stubs.json | folio paginate --config folio.toml --format jsonl
//!
//! # Arithmetic helpers for template authors
//! folio count 25 --per-page 10
//! folio links 2 3
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use folio_core::{IdPath, parent_key, section_key, whole_key};
use std::path::PathBuf;

/// Main CLI structure for the `folio` command
#[derive(Parser, Clone, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "folio - Paginate content stubs into listing pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress everything but errors on stderr
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands for the `folio` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Paginate stubs into page documents
    Paginate(PaginateArgs),

    /// Print how many pages a number of items needs
    Count {
        /// Number of items
        length: usize,

        /// Items per page
        #[arg(long, env = "FOLIO_PER_PAGE", default_value_t = folio_core::DEFAULT_PER_PAGE)]
        per_page: usize,
    },

    /// Print previous/next page indices for a 0-based page index
    Links {
        /// 0-based page index
        index: usize,

        /// Total number of pages
        length: usize,
    },

    /// Print the effective paging configuration as TOML
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Arguments for `folio paginate`
#[derive(clap::Args, Clone, Debug)]
pub struct PaginateArgs {
    /// JSON file with an array of stubs (or one stub per line); `-` or omitted reads stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// How stubs are grouped before pagination
    #[arg(long, value_enum, default_value_t = GroupBy::Parent)]
    pub group_by: GroupBy,

    /// Output format; defaults to `json` on a terminal and `jsonl` when piped
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Paging settings shared by commands that build a `PagingConfig`
#[derive(clap::Args, Clone, Debug, Default)]
pub struct SettingsArgs {
    /// TOML file with `per_page`, `template` and `output_path_template`
    #[arg(long, value_name = "FILE", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Items per page (overrides the config file)
    #[arg(long, value_name = "COUNT", env = "FOLIO_PER_PAGE")]
    pub per_page: Option<usize>,

    /// Template to try before `list.html` and `default.html`
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Output path format containing `{n}`, e.g. `blog/page/{n}/index.html`
    #[arg(long, value_name = "FORMAT")]
    pub output_path_template: Option<String>,
}

/// Grouping policy applied to each stub's identifying path
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    /// Containing directory (`blog/2024/post` groups under `blog/2024`)
    Parent,
    /// Top-level section (`blog/2024/post` groups under `blog`)
    Section,
    /// Everything in one group
    None,
}

impl GroupBy {
    /// The grouping key for one stub.
    pub fn key<S: IdPath + ?Sized>(self, stub: &S) -> String {
        match self {
            Self::Parent => parent_key(stub),
            Self::Section => section_key(stub),
            Self::None => whole_key(stub),
        }
    }
}

/// Output format for page documents
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    Json,
    /// One compact JSON document per line, written as pages are produced
    Jsonl,
}
