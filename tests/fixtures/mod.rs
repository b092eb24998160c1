//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every fixture is used by every test binary

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a deck JSON document with `count` testimonials.
pub fn deck_json(count: usize) -> String {
    let cards: Vec<serde_json::Value> = (0..count)
        .map(|n| {
            serde_json::json!({
                "quote": format!("Working with the team was great, take {n}."),
                "name": format!("Person {n}"),
                "title": "Engineering Manager",
                "image": format!("/images/person-{n}.jpg"),
                "alt": format!("Portrait of Person {n}")
            })
        })
        .collect();

    serde_json::json!({
        "title": "Kind words",
        "testimonials": cards
    })
    .to_string()
}

/// Writes content to a temp file, returning its path and the guard keeping
/// the directory alive.
pub fn write_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, dir)
}

/// A pairs file with one passing and one failing combination.
pub fn mixed_pairs_json() -> String {
    serde_json::json!([
        {
            "name": "White on black",
            "foreground": "#ffffff",
            "background": "#000000",
            "usage": "Headings"
        },
        {
            "name": "Gray on gray",
            "foreground": "#777777",
            "background": "#888888"
        }
    ])
    .to_string()
}
