//! Command implementations for the `folio` CLI.

mod config;
mod count;
mod links;
mod paginate;

pub use config::{resolve_config, show_config};
pub use count::count;
pub use links::links;
pub use paginate::paginate;
