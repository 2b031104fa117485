//! Content loading.
//!
//! The loader turns a [`ContentSource`] into a [`LoadStatus`]. It starts out
//! [`LoadStatus::Pending`] and settles exactly once, to either a ready
//! document or a failure. There is no retry: the source is a local file or
//! the document bundled into the binary, so a second attempt would read the
//! same bytes.
//!
//! The loader never settles itself. The page queues the source result and
//! hands it over on a later turn of its event loop (see [`crate::page`]), so
//! callers always observe `Pending` first and must be able to render it.
//!
//! A failed load never exposes a partial document. The caller sees a single
//! user-facing reason, "Failed to load portfolio data"; the underlying
//! [`SourceError`] is logged.

use crate::content::PortfolioDocument;
use crate::icons::Icon;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// The sample document compiled into the binary.
pub const BUNDLED_DOCUMENT: &str = include_str!("../content/portfolio.json");

/// Default file name of the content document inside the content directory.
pub const DOCUMENT_FILENAME: &str = "portfolio.json";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("content document not found: {0}")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The only failure the content pipeline knows about.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load portfolio data")]
    DataUnavailable(#[source] SourceError),
}

impl From<SourceError> for LoadError {
    fn from(err: SourceError) -> Self {
        LoadError::DataUnavailable(err)
    }
}

/// Where the raw document comes from.
pub trait ContentSource {
    /// Human-readable origin, used in logs and CLI output.
    fn describe(&self) -> String;

    /// Read the raw document text.
    fn read(&self) -> Result<String, SourceError>;

    /// Read and parse the document.
    fn fetch(&self) -> Result<PortfolioDocument, LoadError> {
        let raw = self.read()?;
        let doc = parse_document(&raw)?;
        Ok(doc)
    }
}

/// The document compiled into the binary (or any in-memory text).
#[derive(Debug, Clone, Copy)]
pub struct BundledSource(pub &'static str);

impl Default for BundledSource {
    fn default() -> Self {
        Self(BUNDLED_DOCUMENT)
    }
}

impl ContentSource for BundledSource {
    fn describe(&self) -> String {
        "bundled document".to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(self.0.to_string())
    }
}

/// A `portfolio.json` on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document file inside a content directory.
    pub fn in_dir(content_dir: &Path, filename: &str) -> Self {
        Self::new(content_dir.join(filename))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::Missing(self.path.clone()));
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Parse a raw document. Data-quality problems are logged, not rejected.
pub fn parse_document(raw: &str) -> Result<PortfolioDocument, SourceError> {
    let doc: PortfolioDocument = serde_json::from_str(raw)?;
    for problem in data_quality_warnings(&doc) {
        warn!("{problem}");
    }
    Ok(doc)
}

/// Problems in a parsed document that are rendered as-is.
///
/// Duplicate ids, several "current" roles, a current role with an end date,
/// skill levels outside 0-100 (clamped when rendered) and unknown icon keys
/// (rendered with the default icon).
pub fn data_quality_warnings(doc: &PortfolioDocument) -> Vec<String> {
    let mut problems = Vec::new();

    let mut seen = HashSet::new();
    for project in &doc.projects {
        if !seen.insert(project.id.as_str()) {
            problems.push(format!("duplicate project id '{}'", project.id));
        }
    }

    seen.clear();
    for exp in &doc.experience {
        if !seen.insert(exp.id.as_str()) {
            problems.push(format!("duplicate experience id '{}'", exp.id));
        }
        if exp.current && exp.end_date.is_some() {
            problems.push(format!(
                "experience '{}' is marked current but has an end date",
                exp.id
            ));
        }
    }

    let current = doc.experience.iter().filter(|e| e.current).count();
    if current > 1 {
        problems.push(format!("{current} experience entries are marked current"));
    }

    for skill in doc.skills.iter().filter(|s| !s.level_in_range()) {
        problems.push(format!(
            "skill '{}' has level {} outside 0-100, it will be clamped",
            skill.name, skill.level
        ));
    }

    for skill in doc.skills.iter().filter(|s| !Icon::is_known(&s.icon)) {
        problems.push(format!(
            "skill '{}' has unknown icon '{}', using the default",
            skill.name, skill.icon
        ));
    }

    problems
}

/// Observable state of the loader.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    Pending,
    Ready(Arc<PortfolioDocument>),
    Failed(String),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn document(&self) -> Option<&Arc<PortfolioDocument>> {
        match self {
            LoadStatus::Ready(doc) => Some(doc),
            _ => None,
        }
    }
}

/// One-shot loader state machine.
#[derive(Debug)]
pub struct ContentLoader {
    status: LoadStatus,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentLoader {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Pending,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Settle the loader with a fetch result.
    ///
    /// Returns `true` if this call moved the loader out of `Pending`. Once
    /// settled, further results are ignored and `false` is returned.
    pub fn settle(&mut self, result: Result<PortfolioDocument, LoadError>) -> bool {
        if !self.status.is_pending() {
            debug!("content loader already settled, ignoring result");
            return false;
        }
        self.status = match result {
            Ok(doc) => {
                debug!(name = %doc.personal.name, "portfolio document ready");
                LoadStatus::Ready(Arc::new(doc))
            }
            Err(err) => {
                match &err {
                    LoadError::DataUnavailable(cause) => {
                        warn!(%cause, "portfolio document unavailable")
                    }
                }
                LoadStatus::Failed(err.to_string())
            }
        };
        true
    }
}
