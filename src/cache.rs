//! Output cache for incremental builds.
//!
//! Rebuilding a portfolio usually changes little or nothing: the page is
//! re-rendered from the same document and the assets tree is the same set of
//! images. This module lets the generator skip writing an output file whose
//! bytes are identical to what the previous build wrote, which keeps
//! modification times stable for servers and sync tools watching `dist/`.
//!
//! # Design
//!
//! Every file the generator writes goes through [`write_if_changed`]. The
//! manifest maps the file's path (relative to the output directory) to the
//! SHA-256 of the bytes last written there.
//!
//! A cache hit requires:
//! 1. An entry for the path exists with the same hash
//! 2. The file is still on disk
//!
//! Anything else is a miss and the file is written. Rendering always runs;
//! only the write is skipped.
//!
//! ## Storage
//!
//! The manifest is a JSON file at `<output_dir>/.folio-cache.json`, so it
//! travels with the output directory.
//!
//! ## Bypassing the cache
//!
//! Pass `--no-cache` to `build` to start from an empty manifest. Every file
//! is then rewritten.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the cache manifest file within the output directory.
pub const MANIFEST_FILENAME: &str = ".folio-cache.json";

/// Version of the cache manifest format. Bump this to invalidate all
/// existing caches when the format or key computation changes.
const MANIFEST_VERSION: u32 = 1;

/// On-disk cache manifest: output path → content hash.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CacheManifest {
    pub version: u32,
    pub entries: BTreeMap<String, String>,
}

impl CacheManifest {
    /// Create an empty manifest (used for `--no-cache` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Load from the output directory. Returns an empty manifest if the
    /// file doesn't exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Self {
        let path = manifest_path(output_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        let manifest: Self = match serde_json::from_str(&content) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "discarding unreadable cache manifest");
                return Self::empty();
            }
        };
        if manifest.version != MANIFEST_VERSION {
            return Self::empty();
        }
        manifest
    }

    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(manifest_path(output_dir), json)
    }

    /// True if `rel_path` was last written with `hash` and is still on disk.
    pub fn is_fresh(&self, rel_path: &str, hash: &str, output_dir: &Path) -> bool {
        self.entries.get(rel_path).is_some_and(|h| h == hash)
            && output_dir.join(rel_path).exists()
    }

    pub fn insert(&mut self, rel_path: String, hash: String) {
        self.entries.insert(rel_path, hash);
    }
}

/// SHA-256 of a byte slice, as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Write `bytes` to `output_dir/rel_path` unless the cache says the same
/// bytes are already there. Returns `true` if the file was written.
pub fn write_if_changed(
    manifest: &mut CacheManifest,
    stats: &mut CacheStats,
    output_dir: &Path,
    rel_path: &str,
    bytes: &[u8],
) -> io::Result<bool> {
    let hash = hash_bytes(bytes);
    if manifest.is_fresh(rel_path, &hash, output_dir) {
        stats.hit();
        return Ok(false);
    }

    let dest = output_dir.join(rel_path);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dest, bytes)?;
    manifest.insert(rel_path.to_string(), hash);
    stats.miss();
    Ok(true)
}

/// Summary of cache performance for a build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn miss(&mut self) {
        self.misses += 1;
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits > 0 {
            write!(
                f,
                "{} unchanged, {} written ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} written", self.misses)
        }
    }
}

/// Resolve the cache manifest path for an output directory.
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}
