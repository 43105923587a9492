//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn guidgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_guidgen"));
    cmd.env_remove("GUIDGEN_RECORD")
        .env_remove("GUIDGEN_TIMEZONE")
        .env_remove("GUIDGEN_SUFFIX")
        .env_remove("GUIDGEN_UUID");
    cmd
}

fn run_guidgen(args: &[&str]) -> std::process::Output {
    guidgen().args(args).output().expect("failed to run guidgen binary")
}

#[test]
fn generate_prints_prefixed_identifier() {
    let output = run_guidgen(&["generate", "RDS-"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    let token = stdout.trim_end();
    assert!(token.starts_with("RDS-"));
    assert_eq!(token.len(), "RDS-".len() + 20 + 1 + 8);
}

#[test]
fn generate_count_prints_distinct_sorted_lines() {
    let output = run_guidgen(&["generate", "S3-", "-n", "25", "--utc"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 25);
    let mut unique = lines.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 25);
}

#[test]
fn full_suffix_flag_lengthens_suffix() {
    let output = run_guidgen(&["generate", "--suffix", "full", "--uuid", "v4"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    let suffix = stdout.trim_end().rsplit('-').next().unwrap();
    assert_eq!(suffix.len(), 32);
}

#[test]
fn inspect_shows_creation_time() {
    let output = run_guidgen(&["inspect", "ELB-20240615103005000042-1e3b7a5c", "--prefix", "ELB-"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("2024-06-15 10:30:05.000042"));
}

#[test]
fn inspect_malformed_token_fails() {
    let output = run_guidgen(&["inspect", "hello"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid identifier"));
}

#[test]
fn stack_yaml_names_default_stack() {
    let output = run_guidgen(&["stack", "--format", "yaml"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("logical_id: archive_storage"));
    assert!(stdout.contains("name: RDS-"));
}

#[test]
fn stack_reads_custom_manifest() {
    let dir = std::env::temp_dir().join("guidgen_cli_manifest");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("stack.yaml");
    std::fs::write(
        &path,
        "name: edge\nresources:\n  - logical_id: cdn\n    kind: distribution\n    prefix: edge-\n",
    )
    .unwrap();

    let output = run_guidgen(&["stack", "--manifest", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("edge-"));
    assert!(stdout.contains("1 resource(s) in stack edge."));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_env_setting_fails() {
    let output = guidgen().env("GUIDGEN_TIMEZONE", "mars").args(["generate"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("GUIDGEN_TIMEZONE"));
}

#[test]
fn replay_dir_without_cassettes_fails() {
    let dir = std::env::temp_dir().join("guidgen_cli_empty_replay");
    std::fs::create_dir_all(&dir).unwrap();

    let output = run_guidgen(&["generate", "--replay-dir", dir.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("No cassette files found"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn recorded_session_replays_identically() {
    let base = std::env::temp_dir().join("guidgen_cli_record");
    let _ = std::fs::remove_dir_all(&base);

    let recorded = guidgen()
        .env("GUIDGEN_RECORD", &base)
        .args(["generate", "ASG-", "-n", "3", "--utc"])
        .output()
        .unwrap();
    assert!(recorded.status.success());
    assert!(String::from_utf8_lossy(&recorded.stderr).contains("Recording saved to:"));

    let session_dir = only_subdirectory(&base);
    let replayed = run_guidgen(&[
        "generate",
        "ASG-",
        "-n",
        "3",
        "--utc",
        "--replay-dir",
        session_dir.to_str().unwrap(),
    ]);
    assert!(replayed.status.success());
    assert_eq!(recorded.stdout, replayed.stdout);

    let _ = std::fs::remove_dir_all(&base);
}

fn only_subdirectory(base: &Path) -> std::path::PathBuf {
    let entries: Vec<_> = std::fs::read_dir(base).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1, "expected one session directory in {}", base.display());
    entries.into_iter().next().unwrap()
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_guidgen(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
