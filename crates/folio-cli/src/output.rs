//! Output format detection and page document writers.

use std::io::Write;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Whether stdout is an interactive terminal.
#[must_use]
pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
}

/// Pick the output format: an explicit choice wins, otherwise pretty JSON on
/// a terminal and JSON Lines when piped.
#[must_use]
pub const fn resolve_format(explicit: Option<OutputFormat>, interactive: bool) -> OutputFormat {
    match explicit {
        Some(format) => format,
        None if interactive => OutputFormat::Json,
        None => OutputFormat::Jsonl,
    }
}

/// Write `docs` in `format`, returning how many were written.
///
/// JSON Lines output is written as each document is produced.
pub fn write_documents<W, I>(out: &mut W, format: OutputFormat, docs: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let written = match format {
        OutputFormat::Json => {
            let docs: Vec<I::Item> = docs.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &docs)
                .context("Failed to write page documents")?;
            writeln!(out)?;
            docs.len()
        },
        OutputFormat::Jsonl => {
            let mut written = 0;
            for doc in docs {
                serde_json::to_writer(&mut *out, &doc).context("Failed to write page document")?;
                writeln!(out)?;
                written += 1;
            }
            written
        },
    };
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, true), OutputFormat::Json);
        assert_eq!(resolve_format(None, false), OutputFormat::Jsonl);
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), false),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_jsonl_one_document_per_line() {
        let mut out = Vec::new();
        let n = write_documents(&mut out, OutputFormat::Jsonl, [json!({"a": 1}), json!({"a": 2})])
            .unwrap();

        assert_eq!(n, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines, vec![json!({"a": 1}), json!({"a": 2})]);
    }

    #[test]
    fn test_json_array_even_when_empty() {
        let mut out = Vec::new();
        let n = write_documents(&mut out, OutputFormat::Json, Vec::<Value>::new()).unwrap();

        assert_eq!(n, 0);
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, json!([]));
    }
}
