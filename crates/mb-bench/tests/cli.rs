//! End-to-end tests of the `mb-bench` binary.

use std::process::{Command, Output};

fn mb_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mb-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mb-bench")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_success_prints_value_and_time() {
    let output = mb_bench(&["10"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    let value: f64 = lines[0].parse().expect("value line is a float");
    assert_eq!(value, mb_bench::calc(10).unwrap());

    let secs = lines[1]
        .strip_prefix("time: ")
        .and_then(|s| s.strip_suffix(" s"))
        .expect("time line format");
    assert!(secs.parse::<f64>().unwrap() >= 0.0);
    assert_eq!(secs.split('.').nth(1).map(str::len), Some(6));
}

#[test]
fn test_no_args_matches_100() {
    let default = mb_bench(&[]);
    let explicit = mb_bench(&["100"]);
    assert!(default.status.success());
    assert!(explicit.status.success());
    assert_eq!(stdout_lines(&default)[0], stdout_lines(&explicit)[0]);
}

#[test]
fn test_failed_self_check_exits_1() {
    let output = mb_bench(&["--expected", "5.0", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end(), "-18.671667 != 5.000000");
}

#[test]
fn test_negative_expected_is_accepted() {
    let output = mb_bench(&["--expected", "-18.6", "4"]);
    assert!(output.status.success());
}

#[test]
fn test_naive_backend_reports_same_value() {
    let transposed = mb_bench(&["12"]);
    let naive = mb_bench(&["--backend", "naive", "12"]);
    assert!(naive.status.success());
    assert_eq!(stdout_lines(&transposed)[0], stdout_lines(&naive)[0]);
}

#[test]
fn test_empty_size_fails() {
    let output = mb_bench(&["1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}
