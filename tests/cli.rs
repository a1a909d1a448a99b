use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn tokens_prints_one_line_per_token() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["tokens", "-e", "for(3)"]);

    cmd.assert().success().stdout(
        predicate::str::contains("ScopeKeyword     'for' @1:1")
            .and(predicate::str::contains("Literal          '3' @1:5"))
            .and(predicate::str::contains("Eof              '' @1:7")),
    );
}

#[test]
fn tokens_reports_lex_errors() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["tokens", "-e", "x $"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("error[L0001]: unexpected character '$'"));
}

#[test]
fn parse_prints_the_tree() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["parse", "-e", "for(3){ out(1); }"]);

    cmd.assert().success().stdout(predicate::str::diff(
        "Scope \"for\"\n  Condition\n    Expression \"3\"\n  Operator \"out\"\n    Expression \"1\"\n",
    ));
}

#[test]
fn parse_as_json() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["parse", "--format", "json", "-e", "foo { }"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"NamedScope\"").and(predicate::str::contains("\"foo\"")));
}

#[test]
fn parse_failure_renders_a_report() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["parse", "-e", "x = 1;"]);

    cmd.assert().code(1).stderr(
        predicate::str::contains("error[P0001]: expected '{' to start named scope")
            .and(predicate::str::contains("--> <eval>:1:3")),
    );
}

#[test]
fn check_reports_every_file() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.scope", "main { out(1); }");
    let bad = write(dir.path(), "bad.scope", "for(3){ out(1); ");
    let missing = dir.path().join("missing.scope");

    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.arg("check").arg(&good).arg(&missing).arg(&bad);

    cmd.assert().code(1).stdout(
        predicate::str::contains("good.scope: ok")
            .and(predicate::str::contains("missing.scope: error"))
            .and(predicate::str::contains("bad.scope: error"))
            .and(predicate::str::contains("3 checked, 2 failed")),
    );
}

#[test]
fn check_succeeds_when_all_files_parse() {
    let dir = TempDir::new().unwrap();
    let one = write(dir.path(), "one.scope", "{ }");
    let two = write(dir.path(), "two.scope", "struct { int a; }");

    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.arg("check").arg(&one).arg(&two);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 checked, 0 failed"));
}

#[test]
fn unreadable_config_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.arg("--config")
        .arg(dir.path().join("absent.json"))
        .args(["parse", "-e", "{ }"]);

    cmd.assert().code(2);
}

#[test]
fn lenient_flag_skips_stray_characters() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.args(["--lenient", "parse", "-e", "{ x$ = 1; }"]);

    cmd.assert().success();
}

#[test]
fn config_verbosity_enables_logging() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.json", r#"{ "verbosity": 2 }"#);

    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(["parse", "-e", "foo { }"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("parsed named scope: foo"));
}

#[test]
fn logging_is_off_by_default() {
    let mut cmd = cargo_bin_cmd!("scopelang");
    cmd.env_remove("RUST_LOG").args(["parse", "-e", "foo { }"]);

    cmd.assert().success().stderr(predicate::str::is_empty());
}
