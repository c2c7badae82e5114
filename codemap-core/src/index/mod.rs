//! Persisted structural index of a source tree

pub mod store;

pub use store::{MapStorage, StoreError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use crate::extract::DEFAULT_EXPORT;

pub const SCHEMA_VERSION: u32 = 1;

/// Extraction result for one source file.
///
/// Records are created or overwritten on every trigger for their path and are
/// never deleted automatically; a stale record for a removed file survives
/// until the index itself is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub exports: BTreeSet<String>,
    pub imports: BTreeSet<String>,
    pub indexed_at: DateTime<Utc>,
}

/// The full mapping of indexed files to their records.
///
/// Keys are always absolute, normalized paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    pub schema_version: u32,
    pub updated_at: DateTime<Utc>,
    pub files: BTreeMap<String, FileRecord>,
}

impl Default for Index {
    fn default() -> Self {
        Self { schema_version: SCHEMA_VERSION, updated_at: Utc::now(), files: BTreeMap::new() }
    }
}

impl Index {
    /// Write or replace the record for `path` with a fresh timestamp and bump
    /// the index-wide updated timestamp.
    pub fn upsert(&mut self, path: &Path, exports: BTreeSet<String>, imports: BTreeSet<String>) {
        let key = normalize_path(path);
        let now = Utc::now();
        self.files.insert(key, FileRecord { exports, imports, indexed_at: now });
        self.updated_at = now;
    }

    /// Total number of exported symbols, excluding the `"default"` sentinel.
    pub fn total_exports(&self) -> usize {
        self.files
            .values()
            .map(|record| record.exports.iter().filter(|name| *name != DEFAULT_EXPORT).count())
            .sum()
    }
}

/// Normalize a path to an absolute canonical key.
///
/// Resolution is purely lexical (`.` and `..` segments are folded away
/// without touching the filesystem), so paths to files that no longer exist
/// still normalize consistently.
pub fn normalize_path(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_dot_segments() {
        assert_eq!(normalize_path(Path::new("/a/b/./c.ts")), "/a/b/c.ts");
        assert_eq!(normalize_path(Path::new("/a/b/../c.ts")), "/a/c.ts");
    }

    #[test]
    fn test_normalize_makes_relative_paths_absolute() {
        let normalized = normalize_path(Path::new("src/app.ts"));
        assert!(Path::new(&normalized).is_absolute());
        assert!(normalized.ends_with("src/app.ts"));
    }

    #[test]
    fn test_upsert_replaces_record_and_bumps_timestamp() {
        let mut index = Index::default();
        let before = index.updated_at;

        index.upsert(Path::new("/p/a.ts"), BTreeSet::from(["one".to_string()]), BTreeSet::new());
        index.upsert(Path::new("/p/a.ts"), BTreeSet::from(["two".to_string()]), BTreeSet::new());

        assert_eq!(index.files.len(), 1);
        let record = &index.files["/p/a.ts"];
        assert!(record.exports.contains("two"));
        assert!(!record.exports.contains("one"));
        assert!(index.updated_at >= before);
    }

    #[test]
    fn test_total_exports_excludes_default_sentinel() {
        let mut index = Index::default();
        index.upsert(
            Path::new("/p/a.ts"),
            BTreeSet::from(["default".to_string(), "getUser".to_string()]),
            BTreeSet::new(),
        );
        assert_eq!(index.total_exports(), 1);
    }
}
