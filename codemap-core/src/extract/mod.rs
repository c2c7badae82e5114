//! Best-effort structural extraction over raw source text
//!
//! Each extractor is a union of independent pattern matchers, one per
//! syntactic surface form. A form that fails to match contributes nothing;
//! it never raises and never affects another form's matches. This is not a
//! parser and does not try to be one.

pub mod exports;
pub mod imports;

pub use exports::extract_exports;
pub use imports::extract_imports;

/// Sentinel export name recorded for `export default` / `module.exports =`.
pub const DEFAULT_EXPORT: &str = "default";

/// File extensions treated as indexable source.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];
