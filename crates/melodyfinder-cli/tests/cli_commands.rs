//! Integration tests for the CLI command layer.

use melodyfinder_cli::commands;
use pretty_assertions::assert_eq;
use std::fs;
use std::process::ExitCode;
use tempfile::tempdir;

#[test]
fn melody_config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("melody.json");
    fs::write(&config_path, r#"{"bars": 3, "title": "Study"}"#).unwrap();

    let config = commands::melody::load_config(config_path.to_str()).unwrap();
    assert_eq!(config.bars, 3);
    assert_eq!(config.title, "Study");

    let output = commands::melody::generate(12, config).unwrap();
    assert_eq!(output.melody.notes().count(), 12);
    assert!(output.abc.contains("\nT:Study\n"));
}

#[test]
fn melody_config_errors_carry_codes() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    let err = commands::melody::load_config(missing.to_str()).unwrap_err();
    assert_eq!(err.code(), "CLI_001");

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let err = commands::melody::load_config(broken.to_str()).unwrap_err();
    assert_eq!(err.code(), "CLI_002");
}

#[test]
fn melody_json_reports_the_failing_code() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    let output = commands::melody::json_output(5, missing.to_str(), None);
    assert!(!output.success);
    assert!(output.result.is_none());
    assert_eq!(output.errors[0].code, "CLI_001");

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[1, 2").unwrap();
    let output = commands::melody::json_output(5, broken.to_str(), None);
    assert_eq!(output.errors[0].code, "CLI_002");

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["errors"][0]["code"], "CLI_002");

    let output = commands::melody::json_output(5, None, None);
    assert!(output.success);
    assert!(output.errors.is_empty());
}

#[test]
fn melody_json_reports_output_write_failure() {
    let dir = tempdir().unwrap();
    let unwritable = dir.path().join("no-such-dir").join("tune.abc");
    let output = commands::melody::json_output(5, None, unwritable.to_str());
    assert_eq!(output.errors[0].code, "CLI_004");
}

#[test]
fn melody_run_json_failure_exits_nonzero() {
    let code = commands::melody::run(Some(1), Some("/nonexistent/melody.json"), None, true).unwrap();
    assert_eq!(code, ExitCode::FAILURE);
}

#[test]
fn melody_run_writes_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tune.abc");

    let code = commands::melody::run(Some(99), None, out.to_str(), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = fs::read_to_string(&out).unwrap();
    let expected = commands::melody::generate(99, Default::default()).unwrap();
    assert_eq!(written, format!("{}\n", expected.abc));
    assert!(written.starts_with("X:1\nQ:100\nT:Random Melody\nM:4/4\nK:"));
}

#[test]
fn scale_run_reports_unknown_key() {
    assert_eq!(commands::scale::run("Z", true).unwrap(), ExitCode::FAILURE);
    assert_eq!(commands::scale::run("Am", true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn generating_commands_succeed() {
    assert_eq!(commands::note::run(Some(1), 3, true).unwrap(), ExitCode::SUCCESS);
    assert_eq!(commands::chord::run(Some(1), false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(commands::keys::run(false).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn chord_output_serializes_tag_and_renderings() {
    let output = commands::chord::generate(4);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["tag"], output.tag);
    assert_eq!(json["chord"]["token"], output.chord.token.as_str());
    assert_eq!(json["chord"]["arpeggio"], output.chord.arpeggio.as_str());
}
