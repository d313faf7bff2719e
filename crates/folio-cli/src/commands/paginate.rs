//! `folio paginate`: stubs in, page documents out.

use std::io;

use folio_core::paginate_grouped;
use tracing::{debug, info};

use crate::cli::PaginateArgs;
use crate::commands::resolve_config;
use crate::error::CliResult;
use crate::input::read_stubs;
use crate::output::{is_interactive, resolve_format, write_documents};

/// Paginate every group of the input and write the pages to stdout.
///
/// Settings are validated before any input is read.
pub fn paginate(args: &PaginateArgs) -> CliResult<()> {
    let config = resolve_config(&args.settings)?;
    let stubs = read_stubs(args.input.as_deref())?;

    let group_by = args.group_by;
    let pages = paginate_grouped(&stubs, |s| group_by.key(s), &config)?;

    let format = resolve_format(args.format, is_interactive());
    debug!(?format, ?group_by, "Writing page documents");

    let mut out = io::BufWriter::new(io::stdout().lock());
    let written = write_documents(&mut out, format, pages)?;

    info!(stubs = stubs.len(), pages = written, "Paginated stubs");
    Ok(())
}
