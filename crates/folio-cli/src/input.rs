//! Reading stubs from files or stdin.
//!
//! Two layouts are accepted:
//!
//! - a JSON array of stub objects
//! - JSON Lines, one stub object per line (blank lines are skipped)

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, anyhow};
use folio_core::Stub;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Read a whole file, mapping a missing file to a not-found error and
/// non-UTF-8 content to a usage error.
pub fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| classify_read_error(e, &format!("Failed to read {}", path.display())))
}

/// Read stubs from `input`, or from stdin when it is `None` or `-`.
pub fn read_stubs(input: Option<&Path>) -> CliResult<Vec<Stub>> {
    let (content, origin) = match input {
        Some(path) if path != Path::new("-") => (read_file(path)?, path.display().to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| classify_read_error(e, "Failed to read stubs from stdin"))?;
            (buf, "stdin".to_string())
        },
    };

    let stubs = parse_stubs(&content)
        .with_context(|| format!("Invalid stubs in {origin}"))
        .map_err(CliError::usage)?;
    debug!(count = stubs.len(), origin = %origin, "Read stubs");
    Ok(stubs)
}

fn classify_read_error(err: io::Error, context: &str) -> CliError {
    match err.kind() {
        io::ErrorKind::NotFound => CliError::not_found(anyhow!("{context}: file not found")),
        io::ErrorKind::InvalidData => {
            CliError::usage(anyhow::Error::new(err).context(context.to_string()))
        },
        _ => CliError::internal(anyhow::Error::new(err).context(context.to_string())),
    }
}

/// Parse either a JSON array or JSON Lines.
pub fn parse_stubs(content: &str) -> anyhow::Result<Vec<Stub>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("Expected a JSON array of stubs");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Line {}: expected a stub object", i + 1))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use std::io::Write;

    #[test]
    fn test_parse_json_array() {
        let stubs = parse_stubs(r#"[{"id_path": "blog/a"}, {"id_path": "blog/b", "title": "B"}]"#)
            .unwrap();
        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"id_path\": \"blog/a\"}\n\n{\"id_path\": \"docs/b\", \"draft\": true}\n";
        let stubs = parse_stubs(content).unwrap();
        let paths: Vec<&str> = stubs.iter().map(|s| s.id_path.as_str()).collect();
        assert_eq!(paths, vec!["blog/a", "docs/b"]);
        assert_eq!(stubs[1].extra["draft"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_stubs("{\"id_path\": \"a\"}\n{\"title\": \"no path\"}\n").unwrap_err();
        assert!(format!("{err:#}").contains("Line 2"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_stubs("").unwrap().is_empty());
        assert!(parse_stubs("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_file(Path::new("/nonexistent/folio/stubs.json")).unwrap_err();
        assert_eq!(err.category, ErrorCategory::NotFound);
    }

    #[test]
    fn test_non_utf8_file_is_usage_error() {
        // Given: A file that starts with bytes no UTF-8 text can contain
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xff\xfe{\"id_path\": \"blog/a\"}\n").unwrap();

        // When: Reading it as stub input
        let err = read_file(file.path()).unwrap_err();

        // Then: Bad input, not an internal failure
        assert_eq!(err.category, ErrorCategory::Usage);
        assert!(err.to_string().contains("Failed to read"));
    }
}
