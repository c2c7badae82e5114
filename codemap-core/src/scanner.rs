//! Bulk indexing of an existing source tree
//!
//! The per-trigger orchestrator only ever sees files as they are touched; the
//! scanner walks the whole tree once so a project starts from a complete
//! index instead of accreting one edit at a time.

use std::path::Path;
use tokio::fs;
use tracing::info;
use walkdir::WalkDir;

use crate::extract::{extract_exports, extract_imports};
use crate::index::MapStorage;
use crate::update::is_source_file;
use crate::{conventions, summary};

/// Index every source file under `project_root`, then re-derive conventions
/// and re-render the summary once. Returns the number of files indexed.
pub async fn scan(project_root: &Path) -> anyhow::Result<usize> {
    let storage = MapStorage::new(project_root);
    let mut index = storage.load_index().await;
    let mut indexed = 0usize;

    let walker = WalkDir::new(project_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(&entry.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_source_file(path) {
            continue;
        }
        // Unreadable or non-UTF-8 files are skipped, not fatal.
        if let Ok(content) = fs::read_to_string(path).await {
            index.upsert(path, extract_exports(&content), extract_imports(&content));
            indexed += 1;
        }
    }

    storage.save_index(&index).await?;
    let record = conventions::detect(&index);
    storage.save_conventions(&record).await?;
    storage.save_summary(&summary::render(&index, &record)).await?;

    info!("scanned {} source files under {}", indexed, project_root.display());
    Ok(indexed)
}

fn is_ignored(name: &str) -> bool {
    name.starts_with('.')
        || matches!(name, "node_modules" | "target" | "dist" | "build" | "coverage" | "vendor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, content).await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_indexes_source_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write(root, "src/a.ts", "export const one = 1;").await;
        write(root, "src/b.js", "module.exports = { two };").await;
        write(root, "README.md", "# readme").await;

        let indexed = scan(root).await.unwrap();
        assert_eq!(indexed, 2);

        let index = MapStorage::new(root).load_index().await;
        assert_eq!(index.files.len(), 2);
    }

    #[tokio::test]
    async fn test_scan_skips_dependency_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write(root, "src/a.ts", "export const one = 1;").await;
        write(root, "node_modules/pkg/index.js", "module.exports = pkg;").await;
        write(root, "dist/bundle.js", "export const bundled = 1;").await;

        let indexed = scan(root).await.unwrap();
        assert_eq!(indexed, 1);
    }

    #[tokio::test]
    async fn test_scan_writes_all_three_documents() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write(root, "src/a.ts", "export const one = 1;").await;
        scan(root).await.unwrap();

        assert!(root.join(".codemap/index.json").exists());
        assert!(root.join(".codemap/conventions.json").exists());
        assert!(root.join(".codemap/summary.md").exists());
    }

    #[tokio::test]
    async fn test_scan_does_not_reindex_its_own_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write(root, "src/a.ts", "export const one = 1;").await;
        scan(root).await.unwrap();
        let second = scan(root).await.unwrap();

        // .codemap/ is dot-prefixed and therefore never walked.
        assert_eq!(second, 1);
    }
}
