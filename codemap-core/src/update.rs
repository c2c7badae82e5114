//! Update orchestration for a single triggering event
//!
//! One trigger runs extraction, index persistence, convention re-detection,
//! and summary rendering strictly in sequence. Everything after extraction is
//! recomputed from persisted state rather than incrementally adjusted; each
//! stage is O(total files) and triggers arrive at human-edit frequency.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::conventions;
use crate::extract::{SOURCE_EXTENSIONS, extract_exports, extract_imports};
use crate::index::MapStorage;
use crate::summary;

/// Payload delivered by the invoking dispatcher for one file mutation.
/// Parsed leniently: unknown fields are ignored and every field is optional,
/// so a malformed payload degrades to a no-op rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerEvent {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub content: Option<String>,
}

/// What a single run did with its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Indexed,
    Skipped(SkipReason),
}

/// Expected no-op conditions, distinguished from genuine faults for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedTool,
    MissingPath,
    UnsupportedExtension,
    UnreadableTarget,
}

enum Action {
    Write,
    Edit,
}

/// Run one extract → persist → re-detect → re-render cycle for a trigger.
///
/// Returns `Skipped` for all expected no-op conditions; an `Err` here means a
/// persistence or rendering fault, which the hook boundary absorbs.
pub async fn run_update(
    project_root: &Path,
    event: &TriggerEvent,
) -> anyhow::Result<UpdateOutcome> {
    let action = match event.tool_name.as_str() {
        "Write" => Action::Write,
        "Edit" => Action::Edit,
        _ => return Ok(UpdateOutcome::Skipped(SkipReason::UnsupportedTool)),
    };

    let Some(raw_path) = event.tool_input.file_path.as_deref() else {
        return Ok(UpdateOutcome::Skipped(SkipReason::MissingPath));
    };
    let path =
        if raw_path.is_absolute() { raw_path.to_path_buf() } else { project_root.join(raw_path) };

    if !is_source_file(&path) {
        return Ok(UpdateOutcome::Skipped(SkipReason::UnsupportedExtension));
    }

    let content = match action {
        Action::Write => match event.tool_input.content.clone() {
            Some(content) => content,
            None => match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(_) => return Ok(UpdateOutcome::Skipped(SkipReason::UnreadableTarget)),
            },
        },
        // Edits carry no content; the current state is read back from disk.
        Action::Edit => match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => return Ok(UpdateOutcome::Skipped(SkipReason::UnreadableTarget)),
        },
    };

    let exports = extract_exports(&content);
    let imports = extract_imports(&content);

    let storage = MapStorage::new(project_root);
    let mut index = storage.load_index().await;
    index.upsert(&path, exports, imports);
    storage.save_index(&index).await?;

    let record = conventions::detect(&index);
    storage.save_conventions(&record).await?;

    let digest = summary::render(&index, &record);
    storage.save_summary(&digest).await?;

    debug!("indexed {} ({} files total)", path.display(), index.files.len());
    Ok(UpdateOutcome::Indexed)
}

/// Whether a path carries one of the indexable source extensions.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
