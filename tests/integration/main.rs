//! Integration tests for Ringroute
//!
//! These tests drive the built binary end to end: network files in,
//! rendered routes out.

use ringroute_core::{build_graph, find_route};
use ringroute_input::{PromptSession, load_network};
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const NETWORK: &str = r#"
[[circles]]
name = "Red"
stops = ["A", "B", "C"]

[[circles]]
name = "Blue"
stops = ["C", "D", "E"]

[[circles]]
name = "Green"
stops = ["X", "Y", "Z"]

[[intersections]]
first = "Red"
second = "Blue"
common = ["C"]

[[intersections]]
first = "Blue"
second = "Green"
common = ["D", "X"]
"#;

fn ringroute(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ringroute"))
        .arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("RINGROUTE_NETWORK")
        .env_remove("RINGROUTE_FORMAT")
        .env_remove("RINGROUTE_LOG")
        .output()
        .expect("Failed to execute ringroute")
}

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("network.toml"), NETWORK).unwrap();
    temp_dir
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = ringroute(temp_dir.path(), &["--help"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Shortest-time routes across circular bus lines"));
}

/// Test routing through a network file with a transfer
#[test]
fn test_route_command() {
    let temp_dir = workspace();
    let network = temp_dir.path().join("network.toml");
    let output = ringroute(
        temp_dir.path(),
        &["route", "--network", network.to_str().unwrap(), "--from", "A", "--to", "Y"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Path: A -> C -> D -> X -> Y"), "{}", stdout);
    assert!(stdout.contains("Total Travel Time: 15 minutes"), "{}", stdout);
}

/// Padded labels are trimmed before searching and printing
#[test]
fn test_route_trims_labels() {
    let temp_dir = workspace();
    let network = temp_dir.path().join("network.toml");
    let output = ringroute(
        temp_dir.path(),
        &["route", "-n", network.to_str().unwrap(), "--from", " A ", "--to", " E "],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Start: A\nDestination: E\n"), "{}", stdout);
    assert!(stdout.contains("Path: A -> C -> E"), "{}", stdout);
}

/// Test that settings supply the network and output format
#[test]
fn test_route_uses_settings_file() {
    let temp_dir = workspace();
    std::fs::write(
        temp_dir.path().join("ringroute.toml"),
        format!(
            "network = {:?}\nformat = \"json\"\n",
            temp_dir.path().join("network.toml")
        ),
    )
    .unwrap();

    let output = ringroute(temp_dir.path(), &["route", "--from", "B", "--to", "B"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["route"]["stops"], serde_json::json!(["B"]));
    assert_eq!(value["route"]["cost"], 0);
}

/// No route is an outcome, not a failure
#[test]
fn test_route_to_unknown_stop() {
    let temp_dir = workspace();
    let network = temp_dir.path().join("network.toml");
    let output = ringroute(
        temp_dir.path(),
        &["route", "-n", network.to_str().unwrap(), "--from", "A", "--to", "Nowhere"],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No valid route found.");
}

/// Invalid declarations fail with a non-zero status
#[test]
fn test_invalid_network_fails() {
    let temp_dir = TempDir::new().unwrap();
    let network = temp_dir.path().join("broken.json");
    std::fs::write(
        &network,
        r#"{"circles": [{"name": "Red", "stops": []}], "intersections": []}"#,
    )
    .unwrap();

    let output = ringroute(temp_dir.path(), &["check", "-n", network.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("circle Red has no stops"));
}

/// Missing network file is reported
#[test]
fn test_route_without_network_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = ringroute(temp_dir.path(), &["route", "--from", "A", "--to", "B"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_and_graph_commands() {
    let temp_dir = workspace();
    let network = temp_dir.path().join("network.toml");
    let network = network.to_str().unwrap();

    let output = ringroute(temp_dir.path(), &["check", "--network", network]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "3 circles, 2 intersections, 8 stops, 10 legs"
    );

    let output = ringroute(temp_dir.path(), &["graph", "--network", network]);
    assert!(output.status.success());
    let adjacency: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(adjacency["D"]["X"], 0);
    assert_eq!(adjacency["X"]["D"], 0);
    assert_eq!(adjacency["C"]["E"], 5);
}

/// Test the prompted session end to end
#[test]
fn test_interactive_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_ringroute"))
        .arg("-C")
        .arg(temp_dir.path())
        .arg("interactive")
        .env_remove("RINGROUTE_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn ringroute");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2\nRed\nA, B, C\nBlue\nC, D, E\n1\nRed\nBlue\nC\nA\nE\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter the number of bus circles: "));
    assert!(stdout.contains("\nRouting Solution:\nStart: A\nDestination: E\n"));
    assert!(stdout.contains("Total Travel Time: 10 minutes"));
}

/// Library crates compose without the binary
#[test]
fn test_library_pipeline() {
    let temp_dir = workspace();
    let network = load_network(&temp_dir.path().join("network.toml")).unwrap();
    network.validate().unwrap();
    let graph = build_graph(&network);

    let route = find_route(&graph, "Z", "B").unwrap();
    assert_eq!(route.cost, 15);
    assert_eq!(route.transfers, 1);

    let script = "1\nSolo\nA\n0\nA\nA\n";
    let request = PromptSession::new(Cursor::new(script), Vec::new())
        .collect()
        .unwrap();
    let route = find_route(&build_graph(&request.network), "A", "A").unwrap();
    assert_eq!(route.stops, vec!["A"]);
    assert_eq!(route.cost, 0);
}
