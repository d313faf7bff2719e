#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `folio` command isolated from the caller's environment.
#[allow(dead_code)]
pub fn folio_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("FOLIO_PER_PAGE");
    cmd.env_remove("FOLIO_CONFIG");
    cmd
}

/// `count` stubs under `section/`, as a JSON array.
#[allow(dead_code)]
pub fn stubs_json(section: &str, count: usize) -> String {
    let stubs: Vec<serde_json::Value> = (1..=count)
        .map(|i| serde_json::json!({ "id_path": format!("{section}/post-{i}"), "title": format!("Post {i}") }))
        .collect();
    serde_json::to_string(&stubs).expect("serialize stubs")
}

/// Write `content` to `name` inside a fresh temp dir.
#[allow(dead_code)]
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    (dir, path)
}

/// Parse JSON Lines output into values.
#[allow(dead_code)]
pub fn parse_jsonl(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}
