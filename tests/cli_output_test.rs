use assert_cmd::Command as AssertCommand;
use pretty_assertions::assert_eq;
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fibseq"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fibseq")
}

#[test]
fn test_default_run_prints_101_terms() {
    let output = run(&[]);
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("0 1 1 2 3 5 8 13 21 34 55 "));
    assert!(stdout.ends_with(' '));
    assert!(!stdout.ends_with('\n'));

    let tokens: Vec<i64> = stdout
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(tokens.len(), 101);
    assert_eq!(tokens[46], 1_836_311_903);
    assert_eq!(tokens[47], -1_323_752_223);
}

#[test]
fn test_stdout_matches_library_rendering() {
    let output = run(&[]);
    let expected = fibseq::render(&fibseq::generate(fibseq::DEFAULT_UPPER_INDEX));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_default_run_is_silent_on_stderr() {
    let output = run(&[]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let quiet = run(&[]);
    let verbose = run(&["-vv"]);

    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);

    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("Generated Fibonacci sequence"));
    assert!(stderr.contains("index=47"));
}

#[test]
fn test_rejects_positional_argument() {
    AssertCommand::new(env!("CARGO_BIN_EXE_fibseq"))
        .arg("20")
        .assert()
        .failure();
}

#[test]
fn test_version_flag() {
    let assert = AssertCommand::new(env!("CARGO_BIN_EXE_fibseq"))
        .arg("--version")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.starts_with("fibseq "));
}
