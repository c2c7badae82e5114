//! Convention inference over the accumulated index

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::casing::{CaseStyle, classify};
use crate::extract::SOURCE_EXTENSIONS;
use crate::index::{Index, SCHEMA_VERSION};

/// Minimum occurrence count before a pattern is reported as a convention.
pub const MIN_SAMPLES: usize = 5;
/// Minimum share of the dominant style among all classified samples.
pub const MIN_MATCH_RATE: f64 = 0.70;

/// Derived statistics over the index. Always recomputed in full; a pure
/// function of the current index content plus the static vocabularies and
/// thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConventionRecord {
    pub schema_version: u32,
    pub updated_at: DateTime<Utc>,
    pub naming: Option<NamingConvention>,
    pub directories: Vec<DirectoryConvention>,
    pub suffixes: Vec<SuffixConvention>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub style: CaseStyle,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConvention {
    pub name: String,
    pub purpose: String,
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixConvention {
    pub pattern: String,
    pub purpose: String,
    pub files: usize,
}

/// Well-known directory names and their purpose labels. Directory names are a
/// strong, low-noise signal, so matches are included without a minimum count.
const DIRECTORY_PURPOSES: &[(&str, &str)] = &[
    ("components", "UI components"),
    ("hooks", "Reusable hooks"),
    ("utils", "Utility functions"),
    ("helpers", "Helper functions"),
    ("services", "Service layer"),
    ("api", "API endpoints"),
    ("models", "Data models"),
    ("controllers", "Request controllers"),
    ("middleware", "Middleware"),
    ("routes", "Route definitions"),
    ("pages", "Page components"),
    ("views", "View templates"),
    ("types", "Type definitions"),
    ("config", "Configuration"),
    ("lib", "Shared library code"),
    ("tests", "Test files"),
    ("__tests__", "Test files"),
];

/// Recognized dotted-suffix purposes, keyed by the middle segment of
/// `name.<suffix>.<ext>`.
const SUFFIX_PURPOSES: &[(&str, &str)] = &[
    ("service", "Service classes"),
    ("controller", "Controller classes"),
    ("model", "Data models"),
    ("component", "Components"),
    ("hook", "Hooks"),
    ("test", "Test files"),
    ("spec", "Test specs"),
    ("types", "Type definitions"),
    ("config", "Configuration"),
    ("utils", "Utilities"),
    ("middleware", "Middleware"),
    ("routes", "Route definitions"),
];

static DOTTED_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.([A-Za-z0-9_-]+)\.([A-Za-z0-9]+)$").expect("invalid regex pattern")
});

/// Re-derive all conventions from the full index.
pub fn detect(index: &Index) -> ConventionRecord {
    ConventionRecord {
        schema_version: SCHEMA_VERSION,
        updated_at: Utc::now(),
        naming: detect_naming(index),
        directories: detect_directories(index),
        suffixes: detect_suffixes(index),
    }
}

/// Tally case-style verdicts across every file's every export; emit the
/// leading style only when both the sample count and match rate thresholds
/// are met. Ties resolve to the first style in enumeration order.
fn detect_naming(index: &Index) -> Option<NamingConvention> {
    let mut counts = [0usize; CaseStyle::ALL.len()];
    for record in index.files.values() {
        for name in &record.exports {
            if let Some(style) = classify(name) {
                counts[style as usize] += 1;
            }
        }
    }

    let total: usize = counts.iter().sum();
    if total < MIN_SAMPLES {
        return None;
    }

    let mut leader = CaseStyle::ALL[0];
    let mut best = counts[0];
    for (style, &count) in CaseStyle::ALL.iter().zip(counts.iter()).skip(1) {
        if count > best {
            leader = *style;
            best = count;
        }
    }

    let share = best as f64 / total as f64;
    if share < MIN_MATCH_RATE {
        return None;
    }

    Some(NamingConvention { style: leader, count: best, percent: (share * 100.0).round() as u32 })
}

fn detect_directories(index: &Index) -> Vec<DirectoryConvention> {
    let mut entries: Vec<DirectoryConvention> = Vec::new();
    for path in index.files.keys() {
        for component in Path::new(path).components() {
            let Component::Normal(segment) = component else { continue };
            let segment = segment.to_string_lossy().to_lowercase();
            let Some((_, purpose)) =
                DIRECTORY_PURPOSES.iter().find(|(name, _)| *name == segment)
            else {
                continue;
            };
            match entries.iter_mut().find(|entry| entry.name == segment) {
                Some(entry) => entry.files += 1,
                None => entries.push(DirectoryConvention {
                    name: segment,
                    purpose: (*purpose).to_string(),
                    files: 1,
                }),
            }
        }
    }
    entries
}

fn detect_suffixes(index: &Index) -> Vec<SuffixConvention> {
    // First-encounter order is preserved so the summary shows the patterns
    // the way the tree introduces them.
    let mut tallies: Vec<(String, String, usize)> = Vec::new();
    for path in index.files.keys() {
        let Some(file_name) = Path::new(path).file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(cap) = DOTTED_SUFFIX_RE.captures(file_name) else { continue };
        let (Some(suffix), Some(extension)) = (cap.get(1), cap.get(2)) else { continue };
        if !SOURCE_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }

        let pattern = format!(".{}.{}", suffix.as_str(), extension.as_str());
        match tallies.iter_mut().find(|(existing, _, _)| *existing == pattern) {
            Some((_, _, count)) => *count += 1,
            None => {
                let purpose = SUFFIX_PURPOSES
                    .iter()
                    .find(|(name, _)| *name == suffix.as_str())
                    .map(|(_, purpose)| *purpose)
                    .unwrap_or("Unknown");
                tallies.push((pattern, purpose.to_string(), 1));
            }
        }
    }

    tallies
        .into_iter()
        .filter(|(_, _, count)| *count >= MIN_SAMPLES)
        .map(|(pattern, purpose, files)| SuffixConvention { pattern, purpose, files })
        .collect()
}
