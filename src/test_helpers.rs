//! Shared test utilities for the folio-gen test suite.
//!
//! Provides the fixture document, fixture directory setup and lookup helpers
//! that panic with a useful message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let doc = sample_document();
//! let project = find_project(&doc, "atlas");
//! assert!(project.featured);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{ContentDate, PortfolioDocument, Project};

/// The fixture document, `fixtures/portfolio.json`.
pub const SAMPLE_JSON: &str = include_str!("../fixtures/portfolio.json");

// =========================================================================
// Fixture setup
// =========================================================================

pub fn sample_document() -> PortfolioDocument {
    serde_json::from_str(SAMPLE_JSON).expect("fixture document must parse")
}

/// Copy `fixtures/` to a temp directory and return it.
///
/// The copy is a complete content directory: `portfolio.json` plus `assets/`.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups
// =========================================================================

/// Parse a `YYYY-MM-DD` literal. Panics on bad input.
pub fn date(s: &str) -> ContentDate {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test date '{s}': {e}"))
}

/// Find a project by id. Panics if not found.
pub fn find_project<'a>(doc: &'a PortfolioDocument, id: &str) -> &'a Project {
    doc.projects.iter().find(|p| p.id == id).unwrap_or_else(|| {
        let ids: Vec<&str> = doc.projects.iter().map(|p| p.id.as_str()).collect();
        panic!("project '{id}' not found. Available: {ids:?}")
    })
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
