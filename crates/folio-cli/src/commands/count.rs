//! `folio count`: page count for a number of items.

use folio_core::count_pages;

use crate::error::CliResult;

/// Print `ceil(length / per_page)`.
pub fn count(length: usize, per_page: usize) -> CliResult<()> {
    println!("{}", count_pages(length, per_page)?);
    Ok(())
}
