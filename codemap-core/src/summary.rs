//! Digest rendering

use chrono::Utc;
use std::fmt::Write;

use crate::conventions::ConventionRecord;
use crate::index::Index;

const MAX_DIRECTORIES: usize = 5;
const MAX_SUFFIXES: usize = 3;

/// Render the bounded-size digest from the index and its conventions.
///
/// The output is regenerated in full each run and is sized to stay well under
/// common LLM-context budgets.
pub fn render(index: &Index, conventions: &ConventionRecord) -> String {
    let mut out = String::new();

    out.push_str("# Codebase Map\n\n");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "Files indexed: {}", index.files.len());

    if let Some(naming) = &conventions.naming {
        out.push_str("\n## Naming Conventions\n");
        let _ = writeln!(
            out,
            "- Exports: {} ({} exports, {}%)",
            naming.style.label(),
            naming.count,
            naming.percent
        );
    }

    if !conventions.directories.is_empty() {
        out.push_str("\n## Directories\n");
        for dir in conventions.directories.iter().take(MAX_DIRECTORIES) {
            let _ = writeln!(out, "- {}/: {} ({} files)", dir.name, dir.purpose, dir.files);
        }
    }

    if !conventions.suffixes.is_empty() {
        out.push_str("\n## File Patterns\n");
        for suffix in conventions.suffixes.iter().take(MAX_SUFFIXES) {
            let _ = writeln!(out, "- *{}: {} ({} files)", suffix.pattern, suffix.purpose, suffix.files);
        }
    }

    let total = index.total_exports();
    if total > 0 {
        let _ = writeln!(out, "\nTotal exports: {total}");
    }

    out
}
