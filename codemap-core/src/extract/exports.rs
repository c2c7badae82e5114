//! Exported symbol extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::extract::DEFAULT_EXPORT;

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("invalid regex pattern"));

/// `export { a, b as c }`, including re-export lists.
static BRACED_EXPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export\s*\{([^}]*)\}").expect("invalid regex pattern"));

/// `export const|let|var|function|function*|async function|class <Name>`.
static DECL_EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:async\s+)?(?:const|let|var|function\*?|class)\s+([A-Za-z_$][\w$]*)")
        .expect("invalid regex pattern")
});

static DEFAULT_EXPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export\s+default\b").expect("invalid regex pattern"));

/// `export default` followed by a named function or class declaration.
static DEFAULT_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+default\s+(?:async\s+)?(?:function\*?|class)\s+([A-Za-z_$][\w$]*)")
        .expect("invalid regex pattern")
});

/// `module.exports = { a, b: c }`.
static MODULE_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"module\.exports\s*=\s*\{([^}]*)\}").expect("invalid regex pattern"));

/// `module.exports = identifierName;` — the line-end anchor keeps this from
/// matching `module.exports = function () {}` or a `require(...)` call.
static MODULE_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)module\.exports\s*=\s*([A-Za-z_$][\w$]*)\s*;?\s*$")
        .expect("invalid regex pattern")
});

/// `export type Name` / `export interface Name`.
static TYPE_EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:type|interface)\s+([A-Za-z_$][\w$]*)").expect("invalid regex pattern")
});

/// Recover the set of symbol names a source file textually exposes.
///
/// Six independent surface forms are scanned over the same text and unioned;
/// a name appearing via multiple forms is recorded once. No semantic
/// validation of the names is performed.
pub fn extract_exports(text: &str) -> BTreeSet<String> {
    let mut exports = BTreeSet::new();

    for cap in BRACED_EXPORT_RE.captures_iter(text) {
        if let Some(list) = cap.get(1) {
            collect_braced_entries(list.as_str(), &mut exports);
        }
    }

    for cap in DECL_EXPORT_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            exports.insert(name.as_str().to_string());
        }
    }

    if DEFAULT_EXPORT_RE.is_match(text) {
        exports.insert(DEFAULT_EXPORT.to_string());
    }
    for cap in DEFAULT_DECL_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            exports.insert(name.as_str().to_string());
        }
    }

    for cap in MODULE_OBJECT_RE.captures_iter(text) {
        if let Some(list) = cap.get(1) {
            collect_object_keys(list.as_str(), &mut exports);
        }
    }

    for cap in MODULE_VALUE_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            exports.insert(DEFAULT_EXPORT.to_string());
            exports.insert(name.as_str().to_string());
        }
    }

    for cap in TYPE_EXPORT_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            exports.insert(name.as_str().to_string());
        }
    }

    exports
}

/// For an aliased entry only the alias is the externally visible name.
fn collect_braced_entries(list: &str, exports: &mut BTreeSet<String>) {
    for entry in list.split(',') {
        let tokens: Vec<&str> = entry.split_whitespace().collect();
        let name = match tokens.as_slice() {
            [name] => *name,
            [_, keyword, alias] if *keyword == "as" => *alias,
            _ => continue,
        };
        if IDENT_RE.is_match(name) {
            exports.insert(name.to_string());
        }
    }
}

/// For a `key: value` entry only the key is recorded; non-identifier keys
/// are discarded.
fn collect_object_keys(list: &str, exports: &mut BTreeSet<String>) {
    for entry in list.split(',') {
        let key = entry.split(':').next().unwrap_or("").trim();
        if IDENT_RE.is_match(key) {
            exports.insert(key.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_declaration_exports() {
        assert_eq!(extract_exports("export const fooBar = 1;"), set(&["fooBar"]));
        assert_eq!(extract_exports("export function getUser() {}"), set(&["getUser"]));
        assert_eq!(extract_exports("export async function load() {}"), set(&["load"]));
        assert_eq!(extract_exports("export function* walk() {}"), set(&["walk"]));
        assert_eq!(extract_exports("export class UserModel {}"), set(&["UserModel"]));
        assert_eq!(extract_exports("export let counter = 0;"), set(&["counter"]));
    }

    #[test]
    fn test_braced_list_records_alias_only() {
        let text = "export { a, b as c };";
        assert_eq!(extract_exports(text), set(&["a", "c"]));
    }

    #[test]
    fn test_default_export_sentinel() {
        assert_eq!(extract_exports("export default 42;"), set(&["default"]));
    }

    #[test]
    fn test_default_named_declaration_records_both() {
        let text = "export default function Baz() {}";
        assert_eq!(extract_exports(text), set(&["default", "Baz"]));

        let text = "export default class App {}";
        assert_eq!(extract_exports(text), set(&["default", "App"]));
    }

    #[test]
    fn test_module_exports_object_records_keys() {
        let text = "module.exports = { a, b: c };";
        assert_eq!(extract_exports(text), set(&["a", "b"]));
    }

    #[test]
    fn test_module_exports_object_discards_non_identifier_keys() {
        let text = r#"module.exports = { valid, "quoted-key": x, ...spread };"#;
        assert_eq!(extract_exports(text), set(&["valid"]));
    }

    #[test]
    fn test_module_exports_single_value() {
        let text = "module.exports = UserService;";
        assert_eq!(extract_exports(text), set(&["default", "UserService"]));
    }

    #[test]
    fn test_module_exports_anonymous_value_is_not_named() {
        let text = "module.exports = function () { return 1; };";
        assert!(!extract_exports(text).contains("function"));
    }

    #[test]
    fn test_type_level_exports() {
        let text = "export type UserId = string;\nexport interface User {}\n";
        assert_eq!(extract_exports(text), set(&["UserId", "User"]));
    }

    #[test]
    fn test_forms_union_without_duplicates() {
        let text = "export const shared = 1;\nexport { shared };\n";
        assert_eq!(extract_exports(text), set(&["shared"]));
    }

    #[test]
    fn test_malformed_source_degrades_to_empty() {
        assert!(extract_exports("export {").is_empty());
        assert!(extract_exports("expor const x = 1;").is_empty());
        assert!(extract_exports("").is_empty());
    }
}
