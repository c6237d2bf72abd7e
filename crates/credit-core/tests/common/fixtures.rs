//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as raw bytes
pub fn load_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a JATS XML fixture
#[allow(dead_code)]
pub fn load_jats_fixture(name: &str) -> Vec<u8> {
    load_fixture(&format!("jats/{}", name))
}

/// Load a JSON table fixture
#[allow(dead_code)]
pub fn load_json_fixture(name: &str) -> Vec<u8> {
    load_fixture(&format!("json/{}", name))
}
