use assert_cmd::Command;
use predicates::prelude::*;

const ADDITION_REPORT: &str = r#"{
    "status": "ok",
    "value": 7,
    "seed": 42,
    "appendix": {
        "representation": {
            "kind": "call",
            "style": "operator",
            "callee": "+",
            "args": [
                { "kind": "value", "value": 3 },
                { "kind": "value", "value": 4 }
            ],
            "result": { "kind": "value", "value": 7 }
        },
        "statistics": { "time_consumed_ms": 3 }
    }
}"#;

fn dicetrace() -> Command {
    Command::cargo_bin("dicetrace").unwrap()
}

#[test]
fn test_renders_report_from_stdin() {
    dicetrace()
        .write_stdin(ADDITION_REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("7 (seed 42)"))
        .stdout(predicate::str::contains("( ( 3 + 4 ) ⇒ 7 )"))
        .stdout(predicate::str::contains("evaluated in 3 ms"));
}

#[test]
fn test_renders_report_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, ADDITION_REPORT).unwrap();

    dicetrace()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("( ( 3 + 4 ) ⇒ 7 )"));
}

#[test]
fn test_json_output_emits_fragments() {
    dicetrace()
        .arg("--json")
        .write_stdin(ADDITION_REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"kind":"code","text":"3"}"#));
}

#[test]
fn test_depth_limit_flag_collapses_trace() {
    dicetrace()
        .arg("--depth-limit")
        .arg("0")
        .write_stdin(ADDITION_REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("( ... )"));
}

#[test]
fn test_config_file_sets_default_limits() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dicetrace.toml");
    std::fs::write(&config, "auto_expansion_depth_limit = 0\n").unwrap();

    dicetrace()
        .arg("--config")
        .arg(config.to_str().unwrap())
        .write_stdin(ADDITION_REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("( ... )"));
}

#[test]
fn test_error_outcome_without_trace() {
    let report = r#"{ "status": "error", "kind": "parse", "message": "unexpected token" }"#;
    dicetrace()
        .write_stdin(report)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "evaluation failed (parse): unexpected token",
        ));
}

#[test]
fn test_malformed_trace_fails_loudly() {
    // Three arguments to a binary operator is a contract violation between
    // evaluator and renderer, not something to render around.
    let report = r#"{
        "status": "ok",
        "value": 0,
        "appendix": {
            "representation": {
                "kind": "call",
                "style": "operator",
                "callee": "+",
                "args": [
                    { "kind": "value", "value": 1 },
                    { "kind": "value", "value": 2 },
                    { "kind": "value", "value": 3 }
                ]
            }
        }
    }"#;
    dicetrace()
        .write_stdin(report)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument count"));
}

#[test]
fn test_invalid_json_fails() {
    dicetrace()
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid evaluation report"));
}
