//! `folio links`: previous and next indices for a page.

use folio_core::{next_index, prev_index};
use serde_json::json;

use crate::error::CliResult;

/// Print `{"prev": .., "next": ..}`; `next` is `null` when there are no pages.
#[allow(clippy::unnecessary_wraps)]
pub fn links(index: usize, length: usize) -> CliResult<()> {
    let links = json!({
        "prev": prev_index(index),
        "next": next_index(index, length),
    });
    println!("{links}");
    Ok(())
}
