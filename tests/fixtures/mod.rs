//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use mapcolor::models::{GraphModel, Palette, PaletteEntry, Region, RgbColor};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the mapcolor binary (set by cargo at compile time)
pub fn mapcolor_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mapcolor")
}

/// Runs the binary with an empty config directory so the user's own
/// configuration cannot leak into the test.
pub fn run_mapcolor(args: &[&str]) -> Output {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    Command::new(mapcolor_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn palette(hexes: &[(&str, &str)]) -> Palette {
    Palette::new(
        hexes
            .iter()
            .map(|(hex, name)| PaletteEntry::named(RgbColor::from_hex(hex).unwrap(), *name))
            .collect(),
    )
}

fn symmetric(edges: &[(&str, &str)]) -> HashMap<Region, Vec<Region>> {
    let mut neighbors: HashMap<Region, Vec<Region>> = HashMap::new();
    for (a, b) in edges {
        neighbors.entry(Region::new(*a)).or_default().push(Region::new(*b));
        neighbors.entry(Region::new(*b)).or_default().push(Region::new(*a));
    }
    neighbors
}

/// Triangle A-B-C with only two colors: one region must stay uncolored.
pub fn triangle_two_colors() -> GraphModel {
    GraphModel::new(
        vec![Region::new("A"), Region::new("B"), Region::new("C")],
        symmetric(&[("A", "B"), ("B", "C"), ("A", "C")]),
        palette(&[("#ff0000", "red"), ("#0000ff", "blue")]),
    )
}

/// Path A-B plus an island with no neighbors.
pub fn path_with_island() -> GraphModel {
    GraphModel::new(
        vec![Region::new("A"), Region::new("B"), Region::new("Island")],
        symmetric(&[("A", "B")]),
        palette(&[("#ff0000", "red"), ("#0000ff", "blue"), ("#00ff00", "green")]),
    )
}

/// TOML text for a small custom map.
pub const SQUARE_MAP_TOML: &str = r##"
regions = ["North", "East", "South", "West"]

[neighbors]
North = ["East", "West"]
East = ["North", "South"]
South = ["East", "West"]
West = ["North", "South"]

[[palette]]
hex = "#ff0000"
name = "red"

[[palette]]
hex = "#00ff00"
name = "green"

[[palette]]
hex = "#0000ff"
name = "blue"
"##;

/// Writes `content` to `map.toml` in a fresh temp dir.
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn create_temp_map_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("map.toml");
    fs::write(&path, content).expect("Failed to write map file");
    (path, temp_dir)
}
