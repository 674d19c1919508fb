//! Combination-string normalization applied before every matcher call

use super::types::Keys;

/// Normalize a single combination string for the matcher.
///
/// Lowercases, strips all whitespace, then renames `"delete"` to `"del"`
/// and `"cmd"` to `"command"`. The renames are substring-based and replace
/// only the first occurrence, so a key name that merely contains one of
/// these words is rewritten too. Callers using standard key names are
/// unaffected.
pub fn format_key(key: &str) -> String {
    let stripped: String = key
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    stripped
        .replacen("delete", "del", 1)
        .replacen("cmd", "command", 1)
}

/// Normalize every combination carried by `keys`, preserving order.
pub fn resolve(keys: &Keys) -> Vec<String> {
    keys.iter().map(format_key).collect()
}
