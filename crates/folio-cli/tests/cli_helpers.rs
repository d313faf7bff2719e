#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{folio_cmd, write_temp};
use predicates::prelude::*;

#[test]
fn count_rounds_up() {
    folio_cmd()
        .args(["count", "25", "--per-page", "10"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn count_defaults_and_edge_cases() {
    folio_cmd().args(["count", "10"]).assert().success().stdout("1\n");
    folio_cmd().args(["count", "0"]).assert().success().stdout("0\n");
    folio_cmd()
        .args(["count", "5", "--per-page", "0"])
        .assert()
        .code(2);
}

#[test]
fn links_clamp_at_both_ends() {
    folio_cmd()
        .args(["links", "0", "3"])
        .assert()
        .success()
        .stdout("{\"next\":1,\"prev\":0}\n");
    folio_cmd()
        .args(["links", "2", "3"])
        .assert()
        .success()
        .stdout("{\"next\":2,\"prev\":1}\n");
    folio_cmd()
        .args(["links", "0", "0"])
        .assert()
        .success()
        .stdout("{\"next\":null,\"prev\":0}\n");
}

#[test]
fn config_prints_effective_settings() {
    let (_dir, config) = write_temp("folio.toml", "per_page = 4\n");

    folio_cmd()
        .arg("config")
        .arg("--config")
        .arg(&config)
        .args(["--template", "blog.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("per_page = 4"))
        .stdout(predicate::str::contains("template = \"blog.html\""));
}

#[test]
fn config_rejects_unknown_keys() {
    let (_dir, config) = write_temp("folio.toml", "perpage = 4\n");

    folio_cmd()
        .arg("config")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    folio_cmd()
        .args(["--verbose", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("per_page = 10"))
        .stderr(predicate::str::contains("Resolved paging config"));
}
