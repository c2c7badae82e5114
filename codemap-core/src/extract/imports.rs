//! Import target extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// `import <bindings> from "<source>"` where bindings are a brace list, a
/// `* as ns` star, or a default binding (optionally followed by a brace list).
static FROM_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"import\s+(?:[\w$]+\s*,\s*)?(?:\{[^}]*\}|\*\s*as\s+[\w$]+|[\w$]+)\s+from\s*['"]([^'"]+)['"]"#,
    )
    .expect("invalid regex pattern")
});

/// Side-effect-only `import "<source>"`.
static BARE_IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s*['"]([^'"]+)['"]"#).expect("invalid regex pattern"));

/// Dynamic `require("<source>")`.
static REQUIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("invalid regex pattern")
});

/// Look-behind window used to tell a side-effect import apart from the tail
/// of a static import statement.
const FROM_WINDOW: usize = 20;

/// Recover the set of module references the file textually declares.
///
/// All three surface forms are scanned exhaustively over the whole text; a
/// source referenced by more than one form contributes once. No resolution or
/// existence check is performed, the raw string is the output.
pub fn extract_imports(text: &str) -> BTreeSet<String> {
    let mut sources = BTreeSet::new();

    for cap in FROM_IMPORT_RE.captures_iter(text) {
        if let Some(source) = cap.get(1) {
            sources.insert(source.as_str().to_string());
        }
    }

    for cap in BARE_IMPORT_RE.captures_iter(text) {
        let Some(whole) = cap.get(0) else { continue };
        if preceded_by_from(text, whole.start()) {
            continue;
        }
        if let Some(source) = cap.get(1) {
            sources.insert(source.as_str().to_string());
        }
    }

    for cap in REQUIRE_RE.captures_iter(text) {
        if let Some(source) = cap.get(1) {
            sources.insert(source.as_str().to_string());
        }
    }

    sources
}

fn preceded_by_from(text: &str, start: usize) -> bool {
    let window = &text.as_bytes()[start.saturating_sub(FROM_WINDOW)..start];
    window.windows(4).any(|w| w == b"from")
}
