//! Identifier case-style classification

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::DEFAULT_EXPORT;

/// Naming styles recognized across an indexed codebase.
///
/// Declaration order is the fixed enumeration order used when tallying
/// verdicts, which makes tie-breaking deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnake,
    KebabCase,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::CamelCase,
        CaseStyle::PascalCase,
        CaseStyle::SnakeCase,
        CaseStyle::ScreamingSnake,
        CaseStyle::KebabCase,
    ];

    /// Human-readable label used in rendered summaries.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStyle::CamelCase => "camelCase",
            CaseStyle::PascalCase => "PascalCase",
            CaseStyle::SnakeCase => "snake_case",
            CaseStyle::ScreamingSnake => "SCREAMING_SNAKE",
            CaseStyle::KebabCase => "kebab-case",
        }
    }
}

static SCREAMING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)+$").expect("invalid regex pattern"));
static SNAKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)+$").expect("invalid regex pattern"));
static KEBAB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)+$").expect("invalid regex pattern"));
static PASCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]*)+$").expect("invalid regex pattern")
});
static CAMEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)+$").expect("invalid regex pattern")
});
static LOWER_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*$").expect("invalid regex pattern"));
static CAPITALIZED_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z0-9]+$").expect("invalid regex pattern"));
static UPPER_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]*$").expect("invalid regex pattern"));

/// Classify a single identifier into a case style, or `None` when no style is
/// determinable.
///
/// The `"default"` sentinel always yields `None`: it reflects a language
/// keyword rather than an author naming choice. Multi-segment forms are
/// checked first in a fixed precedence order, then single-segment fallbacks.
pub fn classify(name: &str) -> Option<CaseStyle> {
    if name.is_empty() || name == DEFAULT_EXPORT {
        return None;
    }

    if SCREAMING_RE.is_match(name) {
        return Some(CaseStyle::ScreamingSnake);
    }
    if SNAKE_RE.is_match(name) {
        return Some(CaseStyle::SnakeCase);
    }
    if KEBAB_RE.is_match(name) {
        return Some(CaseStyle::KebabCase);
    }
    if PASCAL_RE.is_match(name) {
        return Some(CaseStyle::PascalCase);
    }
    if CAMEL_RE.is_match(name) {
        return Some(CaseStyle::CamelCase);
    }

    // Single-segment names carry less signal but are still attributable.
    if LOWER_WORD_RE.is_match(name) {
        return Some(CaseStyle::CamelCase);
    }
    if CAPITALIZED_WORD_RE.is_match(name) {
        return Some(CaseStyle::PascalCase);
    }
    if UPPER_WORD_RE.is_match(name) {
        return Some(CaseStyle::ScreamingSnake);
    }

    None
}
