use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

const EXPECTED_TEXT: &str = include_str!("../fixtures/hotel_billing_report.txt");

fn repoready() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repoready"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    repoready().args(args).output().expect("failed to run repoready")
}

#[test]
fn test_no_arguments_prints_report() {
    let output = run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert_eq!(stdout, EXPECTED_TEXT);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_sections_appear_in_order() {
    let stdout = String::from_utf8(run(&[]).stdout).unwrap();

    let prep = stdout.find("GITHUB REPOSITORY PREPARATION").unwrap();
    let commands = stdout.find("QUICK UPLOAD COMMANDS").unwrap();
    let congrats = stdout.find("CONGRATULATIONS!").unwrap();

    assert!(prep < commands);
    assert!(commands < congrats);
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run(&[]);
    let second = run(&[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn test_json_output() {
    let output = run(&["--output", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_files"], 30);
    assert_eq!(value["title"], "📁 GITHUB REPOSITORY PREPARATION - COMPLETE!");
}

#[test]
fn test_output_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("report.txt");

    let output = run(&["--output-file", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED_TEXT);
}

#[test]
fn test_missing_config_exits_critical() {
    let output = run(&["--config", "/nonexistent/repoready.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration file not found"));
    assert!(stderr.contains("--init"));
}

#[test]
fn test_config_file_selects_format() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("repoready.toml");
    fs::write(&config_path, "output_format = \"csv\"\n").unwrap();

    let output = run(&["--config", config_path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("section,position,label,count,detail\n"));
}

#[test]
fn test_init_creates_config_in_current_dir() {
    let temp_dir = tempdir().unwrap();

    let first = repoready()
        .arg("--init")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(first.status.success());
    assert!(temp_dir.path().join(".repoready.toml").is_file());

    let second = repoready()
        .arg("--init")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(second.status.success());
    assert!(String::from_utf8(second.stdout).unwrap().contains("already exists"));
}

// The quiet counterpart is test_no_arguments_prints_report, which
// requires an empty stderr.
#[test]
fn test_verbose_logs_go_to_stderr() {
    let output = run(&["--verbose"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_TEXT);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("writing report"));
}

#[test]
fn test_piped_logs_have_no_ansi_styling() {
    let output = run(&["--verbose"]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.is_empty());
    assert!(!stderr.contains('\x1b'));
}

#[test]
fn test_verbose_from_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("repoready.toml");
    fs::write(&config_path, "verbose = true\n").unwrap();

    let output = run(&["--config", config_path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_TEXT);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("writing report"));
}


#[test]
fn test_unwritable_output_file_exits_with_error() {
    let temp_dir = tempdir().unwrap();

    // The target is a directory, so creating the file fails
    let output = run(&["--output-file", temp_dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not write"));
    assert!(stderr.contains("due to ERROR"));
}
