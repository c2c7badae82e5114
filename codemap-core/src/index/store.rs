//! On-disk persistence for the index, conventions, and summary documents

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::warn;

use crate::conventions::ConventionRecord;
use crate::index::Index;

/// Project-relative directory holding all persisted artifacts.
pub const MAP_DIR: &str = ".codemap";

const INDEX_FILE: &str = "index.json";
const CONVENTIONS_FILE: &str = "conventions.json";
const SUMMARY_FILE: &str = "summary.md";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("map storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("map storage serialization: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Owns the `.codemap/` directory under a project root.
///
/// Every document is overwritten in full on save; there is no locking, so
/// concurrent writers are last-write-wins on the whole document.
#[derive(Debug)]
pub struct MapStorage {
    map_dir: PathBuf,
}

impl MapStorage {
    pub fn new(project_root: &Path) -> Self {
        Self { map_dir: project_root.join(MAP_DIR) }
    }

    /// Read the persisted index. A missing or unparsable document yields a
    /// fresh empty index: corruption self-heals by reset, trading the prior
    /// state for the guarantee that loading never fails.
    pub async fn load_index(&self) -> Index {
        let index_file = self.map_dir.join(INDEX_FILE);
        match fs::read_to_string(&index_file).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(index) => index,
                Err(err) => {
                    warn!("index at {} is unparsable, starting fresh: {}", index_file.display(), err);
                    Index::default()
                }
            },
            Err(_) => Index::default(),
        }
    }

    pub async fn save_index(&self, index: &Index) -> Result<(), StoreError> {
        self.write_document(INDEX_FILE, serde_json::to_string_pretty(index)?).await
    }

    pub async fn save_conventions(&self, conventions: &ConventionRecord) -> Result<(), StoreError> {
        self.write_document(CONVENTIONS_FILE, serde_json::to_string_pretty(conventions)?).await
    }

    pub async fn save_summary(&self, summary: &str) -> Result<(), StoreError> {
        self.write_document(SUMMARY_FILE, summary.to_string()).await
    }

    async fn write_document(&self, name: &str, content: String) -> Result<(), StoreError> {
        fs::create_dir_all(&self.map_dir).await?;
        fs::write(self.map_dir.join(name), content).await?;
        Ok(())
    }

    pub fn map_path(&self) -> &Path {
        &self.map_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_index_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = MapStorage::new(temp_dir.path());

        let index = storage.load_index().await;
        assert!(index.files.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = MapStorage::new(temp_dir.path());

        let mut index = Index::default();
        index.upsert(
            Path::new("/p/src/a.ts"),
            BTreeSet::from(["getUser".to_string()]),
            BTreeSet::from(["./db".to_string()]),
        );
        storage.save_index(&index).await.unwrap();

        let loaded = storage.load_index().await;
        assert_eq!(loaded.files.len(), 1);
        assert!(loaded.files["/p/src/a.ts"].exports.contains("getUser"));
    }

    #[tokio::test]
    async fn test_corrupted_index_self_heals() {
        let temp_dir = TempDir::new().unwrap();
        let storage = MapStorage::new(temp_dir.path());

        fs::create_dir_all(storage.map_path()).await.unwrap();
        fs::write(storage.map_path().join("index.json"), "{not valid json!").await.unwrap();

        let index = storage.load_index().await;
        assert!(index.files.is_empty());
    }
}
