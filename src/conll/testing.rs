//! Test support
//!
//! Tests run against verified corpus fixture files under `tests/fixtures/`
//! rather than ad-hoc inline strings, so a format change only ever means
//! reviewing the fixtures in one place.

use std::path::PathBuf;

/// Resolve a fixture file under `tests/fixtures/` relative to the crate root
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
