// integration tests for shell completion generation

use crate::common::*;

#[test]
fn test_completions_for_each_shell() {
    let env = TestEnv::new();

    for shell in ["bash", "zsh", "fish"] {
        let output = env.run(&["completions", shell]);

        assert!(output.status.success(), "{} failed: {}", shell, stderr(&output));
        let script = stdout(&output);
        assert!(script.contains("mediaq"), "{} script missing binary name", shell);
        assert!(script.contains("query"), "{} script missing subcommand", shell);
    }
}

#[test]
fn test_completions_unknown_shell() {
    let env = TestEnv::new();
    let output = env.run(&["completions", "tcsh"]);

    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_help_and_version_exit_cleanly() {
    let env = TestEnv::new();

    let output = env.run(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("query"));

    let output = env.run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("mediaq "));
}
