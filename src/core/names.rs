//! ROM file name cleaning.
//!
//! Strips dump/catalog tags from the base name of a ROM file:
//! 1. Parenthesized groups: `(USA)`, `(En,Fr,De)`
//! 2. Bracketed groups: `[!]`, `[b1]`
//! 3. Version markers: `v1`, `v1.0.2`
//! 4. Revision markers: `Rev A`, `Rev 1`
//! 5. `Beta`, `Proto` (each with an optional number), `Demo`, `Sample`
//!
//! The extension is split off first and reattached untouched.

use regex::Regex;
use std::sync::LazyLock;

// Applied in order. Bracket-style groups go first so tag-like text inside
// them (`(Beta 2)`, `[v1.1]`) is removed as part of the group.
static TAG_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\s*\(.*?\)",
        r"(?i)\s*\[.*?\]",
        r"(?i)\s*v\d+(\.\d+)*",
        r"(?i)\s*Rev\s*\w+",
        r"(?i)\s*Beta\s*\d*",
        r"(?i)\s*Proto\s*\d*",
        r"(?i)\s*Demo",
        r"(?i)\s*Sample",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Split a file name into (base, extension).
///
/// The extension keeps its leading dot. A leading dot alone does not start an
/// extension, so `.sfc` is all base and `a.tar.gz` has extension `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Remove all known tags from the base name and normalize whitespace.
pub fn clean_base_name(base: &str) -> String {
    let mut cleaned = base.to_string();
    for pattern in TAG_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    WHITESPACE_RUN.replace_all(cleaned.trim(), " ").into_owned()
}

/// Clean a ROM file name, preserving its extension byte-for-byte.
///
/// A name made only of tags cleans to the bare extension (`(USA).sfc` → `.sfc`).
pub fn clean_filename(name: &str) -> String {
    let (base, ext) = split_extension(name);
    let mut cleaned = clean_base_name(base);
    cleaned.push_str(ext);
    cleaned
}
