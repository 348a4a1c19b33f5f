//! Core parsing primitives for text and sequence normalization.
//!
//! Small building blocks shared by the string and collection helpers:
//! order-preserving deduplication and line splitting that understands all
//! three line terminators.

use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicate preserving first occurrence order.
pub fn dedupe<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Deduplicate by a derived key, keeping the first item seen for each key.
pub fn dedupe_by<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Split on `\r\n`, `\n` or `\r`.
///
/// Unlike `str::lines`, a lone `\r` terminates a line and a trailing
/// terminator produces a final empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&content[start..]);
    lines
}

/// Convert content into a Vec of owned line strings.
pub fn lines_to_vec(content: &str) -> Vec<String> {
    split_lines(content).into_iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let items = vec!["b", "a", "b", "c", "a"];
        assert_eq!(dedupe(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn dedupe_by_uses_key() {
        let items = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
        let result = dedupe_by(items, |s| s.chars().next());
        assert_eq!(result, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn split_lines_handles_all_terminators() {
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("line1\n"), vec!["line1", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn lines_to_vec_owns_lines() {
        assert_eq!(lines_to_vec("x\ny"), vec!["x".to_string(), "y".to_string()]);
    }
}
