//! Integration tests for the `gtm generate` and `gtm completions` commands.
//!
//! These run the compiled binary against brief files in a temp directory.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

use gtm_test_utils::{acme_payload, ledgerly_payload, payload_with};

fn gtm(args: &[&str], config_home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gtm"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run gtm binary")
}

fn write_brief(dir: &TempDir, name: &str, payload: &Value) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, payload.to_string()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn generate_prints_json_plan() {
    let dir = TempDir::new().unwrap();
    let brief = write_brief(&dir, "acme.json", &acme_payload());

    let out = gtm(&["generate", &brief], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let plan: Value = serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert!(!plan["northStar"].as_str().unwrap().is_empty());
    assert_eq!(plan["personas"].as_array().unwrap().len(), 3);
}

#[test]
fn generate_output_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let brief = write_brief(&dir, "ledgerly.json", &ledgerly_payload());

    let first = gtm(&["generate", &brief], dir.path());
    let second = gtm(&["generate", &brief], dir.path());
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn generate_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let brief = write_brief(&dir, "acme.json", &acme_payload());
    let out_path = dir.path().join("plan.md");

    let out = gtm(
        &[
            "generate",
            &brief,
            "--format",
            "markdown",
            "--output",
            out_path.to_str().unwrap(),
        ],
        dir.path(),
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let md = std::fs::read_to_string(&out_path).unwrap();
    assert!(md.contains("## North Star"));
    assert!(md.contains("## Automation Track"));
}

#[test]
fn generate_fails_on_unknown_tone() {
    let dir = TempDir::new().unwrap();
    let payload = payload_with(acme_payload(), "tone", serde_json::json!("grumpy"));
    let brief = write_brief(&dir, "bad.json", &payload);

    let out = gtm(&["generate", &brief], dir.path());
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("tone"), "stderr: {stderr}");
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    let out = gtm(&["init", "--port", "4100"], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let written = std::fs::read_to_string(dir.path().join("gtm/config.toml")).unwrap();
    assert!(written.contains("port = 4100"), "config: {written}");

    let again = gtm(&["init"], dir.path());
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    let out = gtm(&["completions", "bash"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("gtm"));
}
