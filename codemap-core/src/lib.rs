//! Core functionality for codemap
//!
//! This crate maintains a lightweight structural index of a source tree's
//! modules (their exported symbols and import targets), derives codebase-wide
//! naming and organizational conventions from it, and renders a compact
//! digest suitable for humans and LLM prompts alike.
//!
//! Extraction is deliberately heuristic: independent regex matchers over raw
//! text, each scoped to one syntactic form, unioned into a result set. The
//! engine tolerates malformed input and degrades to partial or empty
//! extraction rather than failing.

pub mod casing;
pub mod conventions;
pub mod extract;
pub mod index;
pub mod scanner;
pub mod summary;
pub mod update;

pub use casing::CaseStyle;
pub use conventions::ConventionRecord;
pub use index::{FileRecord, Index, MapStorage};
pub use update::{TriggerEvent, UpdateOutcome, run_update};
