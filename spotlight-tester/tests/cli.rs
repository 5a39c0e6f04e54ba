use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "spotlight-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_spotlight-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("fallback-totality"));
}

#[test]
fn cli_runs_scenarios_and_writes_json() {
    let exe = env!("CARGO_BIN_EXE_spotlight-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--scenarios",
            "merge-semantics,role-redirect,race-last-write-wins",
            "--iterations",
            "2",
            "--seeds",
            "1,nightly",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Spotlight Navigation Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = results.as_array().expect("array");
    assert_eq!(runs.len(), 6);
    assert!(runs.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_unknown_scenario_runs_nothing() {
    let exe = env!("CARGO_BIN_EXE_spotlight-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "does-not-exist", "--iterations", "1"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No scenarios executed"));
}
