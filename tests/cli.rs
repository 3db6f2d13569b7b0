//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_rwweb(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_rwweb");
    Command::new(bin)
        .args(args)
        .env_remove("RWWEB_RECORD")
        .env_remove("RWWEB_CONFIG")
        .output()
        .expect("failed to run rwweb binary")
}

fn write_temp(dir_name: &str, file: &str, content: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn demo_prints_canvas_and_graph() {
    let output = run_rwweb(&["demo", "--sequential-ids"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("ITEM"));
    assert!(stdout.contains("welcomeMessage"));
    assert!(stdout.contains("centered"));
    assert!(stdout.contains("7 document(s), 6 link(s)."));
}

#[test]
fn run_executes_a_script() {
    let script = write_temp(
        "rwweb_cli_run_script",
        "script.yaml",
        r#"
steps:
  - init
  - navigate: { item: empty, input: "https://example.com" }
  - navigate: { item: empty, input: "notes about example" }
"#,
    );
    let config =
        write_temp("rwweb_cli_run_script", "rwweb.yaml", "navigator:\n  seed_welcome: false\n");

    let output = run_rwweb(&[
        "run",
        script.to_str().unwrap(),
        "--sequential-ids",
        "--config",
        config.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("navigate #1: showing doc-1"));
    assert!(stdout.contains("doc-1 -> doc-2"));
    assert!(stdout.contains("2 document(s), 1 link(s)."));
}

#[test]
fn failing_script_step_exits_with_error() {
    let script =
        write_temp("rwweb_cli_bad_step", "script.yaml", "steps:\n  - tap: { item: \"#42\" }\n");

    let output = run_rwweb(&["run", script.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("step 1: canvas error: unknown item #42"));
}

#[test]
fn missing_config_file_exits_with_error() {
    let output = run_rwweb(&["demo", "--config", "/nonexistent/rwweb.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read settings file"));
}

#[test]
fn record_env_writes_per_port_cassettes() {
    let root = std::env::temp_dir().join("rwweb_cli_record_env");
    let _ = std::fs::remove_dir_all(&root);

    let output = Command::new(env!("CARGO_BIN_EXE_rwweb"))
        .args(["demo", "--sequential-ids"])
        .env("RWWEB_RECORD", &root)
        .env_remove("RWWEB_CONFIG")
        .output()
        .expect("failed to run rwweb binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("Recording saved to:"));

    let session = std::fs::read_dir(&root).unwrap().next().unwrap().unwrap().path();
    for port in ["graph", "canvas", "input"] {
        assert!(session.join(format!("{port}.cassette.yaml")).exists(), "missing {port} cassette");
    }

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn run_help_shows_usage() {
    let output = run_rwweb(&["run", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("SCRIPT"));
    assert!(stdout.contains("--config"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_rwweb(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
