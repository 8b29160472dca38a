//! Tests for fatal errors surfaced by the binary.

use crate::support::*;

#[test]
fn test_missing_secret_id_fails() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "secretid is required");
    assert_stderr_contains(&output, "-secretid");
    assert!(stdout(&output).is_empty());
    t.assert_home_clean();
}

#[test]
fn test_empty_secret_id_fails_before_staging() {
    let t = Test::new();

    let output = t.run(&["-secretid", "", "-editor", "true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secretid is required");
    t.assert_home_clean();
}

#[test]
fn test_empty_secret_id_equals_form() {
    let t = Test::new();

    let output = t.run(&["-secretid="]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secretid is required");
}

#[test]
fn test_unreachable_store_fails_without_scratch_file() {
    let t = Test::new();

    let output = t.edit("db-creds", "true");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to get secret db-creds");
    assert!(stdout(&output).is_empty());
    t.assert_home_clean();
}

#[test]
fn test_invalid_editor_command_fails_before_store() {
    let t = Test::new();

    let output = t.edit("db-creds", "vi 'unbalanced");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid editor command");
    assert_stderr_excludes(&output, "failed to get secret");
    t.assert_home_clean();
}

#[test]
fn test_error_is_single_line_with_marker() {
    let t = Test::new();

    let output = t.edit("db-creds", "true");
    assert_failure(&output);
    let err = stderr(&output);
    let errors: Vec<&str> = err.lines().filter(|l| l.starts_with('✗')).collect();
    assert_eq!(errors.len(), 1, "expected one error line, got: {}", err);
}

#[test]
fn test_missing_secret_id_exit_code_and_hint() {
    use predicates::prelude::*;

    let t = Test::new();

    t.cmd()
        .args(["-editor", "true"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("✗ secretid is required"))
        .stderr(predicate::str::contains("→ pass -secretid <id-or-arn>"))
        .stdout(predicate::str::is_empty());
}
