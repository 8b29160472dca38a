//! Tests for flag parsing.

use crate::support::*;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    let out = stdout(&output);
    for flag in ["--secretid", "--editor", "--versionid", "--versionstage"] {
        assert!(out.contains(flag), "help missing {}: {}", flag, out);
    }
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "smedit");
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();

    let output = t.run(&["-secretid", "db-creds", "--no-such-flag"]);
    assert_failure(&output);
    t.assert_home_clean();
}

#[test]
fn test_single_and_double_dash_are_equivalent() {
    let t = Test::new();

    // Both forms parse and reach the store, which is unreachable here.
    for args in [
        ["-secretid", "db-creds", "-versionstage", "AWSPREVIOUS"],
        ["--secretid", "db-creds", "--versionstage", "AWSPREVIOUS"],
    ] {
        let output = t.run(&args);
        assert_failure(&output);
        assert_stderr_contains(&output, "failed to get secret db-creds");
    }
}

#[test]
fn test_editor_env_accepted() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("EDITOR", "true")
        .args(["-secretid", "db-creds"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to get secret");
}
