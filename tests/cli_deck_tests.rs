//! End-to-end tests for the `quotedeck deck` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the quotedeck binary
fn quotedeck_bin() -> &'static str {
    env!("CARGO_BIN_EXE_quotedeck")
}

#[test]
fn test_deck_summary_wide_viewport() {
    let (path, _dir) = write_temp_file("deck.json", &deck_json(7));

    let output = Command::new(quotedeck_bin())
        .args([
            "deck",
            "--file",
            path.to_str().unwrap(),
            "--width",
            "120",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(summary["items"], 7);
    assert_eq!(summary["items_per_page"], 3);
    assert_eq!(summary["page_count"], 3);

    let pages = summary["pages"].as_array().unwrap();
    assert_eq!(pages[0]["authors"].as_array().unwrap().len(), 3);
    assert_eq!(pages[2]["authors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_deck_summary_narrow_viewport() {
    let (path, _dir) = write_temp_file("deck.json", &deck_json(7));

    let output = Command::new(quotedeck_bin())
        .args([
            "deck",
            "--file",
            path.to_str().unwrap(),
            "--width",
            "40",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let summary: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(summary["items_per_page"], 1);
    assert_eq!(summary["page_count"], 7);
}

#[test]
fn test_deck_summary_terminal_output() {
    let (path, _dir) = write_temp_file("deck.json", &deck_json(4));

    let output = Command::new(quotedeck_bin())
        .args(["deck", "--file", path.to_str().unwrap(), "--width", "120"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kind words"));
    assert!(stdout.contains("Testimonials:   4"));
    assert!(stdout.contains("Person 0"));
}

#[test]
fn test_deck_empty_is_valid() {
    let (path, _dir) = write_temp_file("deck.json", &deck_json(0));

    let output = Command::new(quotedeck_bin())
        .args(["deck", "--file", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let summary: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(summary["items"], 0);
    assert_eq!(summary["page_count"], 0);
}

#[test]
fn test_deck_malformed_file_fails_cleanly() {
    let (path, _dir) = write_temp_file("deck.json", "{not valid json");

    let output = Command::new(quotedeck_bin())
        .args(["deck", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"), "stderr: {stderr}");
}

#[test]
fn test_deck_blank_quote_rejected() {
    let content = serde_json::json!({
        "testimonials": [
            { "quote": "   ", "name": "Someone", "title": "CTO" }
        ]
    })
    .to_string();
    let (path, _dir) = write_temp_file("deck.json", &content);

    let output = Command::new(quotedeck_bin())
        .args(["deck", "--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty quote"));
}

#[test]
fn test_deck_missing_file() {
    let output = Command::new(quotedeck_bin())
        .args(["deck", "--file", "/nonexistent/deck.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
