//! Total string operations.
//!
//! Possibly absent inputs are taken as `impl Into<Option<&str>>`, so callers
//! pass either a `&str` or `None`. Lengths and counts are measured in
//! `char`s, never bytes.

mod case;
mod indent;
mod join;
mod parse;
mod pattern;
mod truncate;

pub use case::{to_camel_case, to_kebab_case, to_slug, to_snake_case, to_title_case, DEFAULT_CAMEL_DELIMITER};
pub use indent::{indent, trim_indent, trim_margin};
pub use join::{join_to_string, join_to_string_with, JoinOptions};
pub use parse::{
    decode_base64, encode_base64, to_boolean_or_null, to_double_or_null, to_float_or_null,
    to_int_or_null, to_long_or_null,
};
pub use pattern::{
    find, find_all, matches, replace_all, replace_first, split_pattern, AsPattern,
};
pub use truncate::{center, ellipsize, ellipsize_middle, pad_end, pad_start, truncate};

use crate::utils::parser;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\p{Nd}*\z").unwrap());

static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\p{L}*\z").unwrap());

static LETTERS_OR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\p{L}\p{Nd}]*\z").unwrap());

/// Locale tag accepted by the case-mapping helpers.
///
/// Case mapping uses the Unicode default rules for every tag; no
/// locale-specific tailoring (such as Turkish dotless i) is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale(&'static str);

impl Locale {
    pub const ROOT: Locale = Locale("und");
    pub const US: Locale = Locale("en-US");

    pub const fn new(tag: &'static str) -> Self {
        Locale(tag)
    }

    pub fn tag(&self) -> &'static str {
        self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`th char, or `s.len()` when `n` is past the end.
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

fn upper_first(s: &str, rest: impl FnOnce(&str) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &rest(chars.as_str()),
    }
}

// ============================================================================
// Checks
// ============================================================================

pub fn is_null_or_empty<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().map_or(true, str::is_empty)
}

pub fn is_null_or_blank<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().map_or(true, |s| s.trim().is_empty())
}

pub fn is_not_null_or_empty<'a>(s: impl Into<Option<&'a str>>) -> bool {
    !is_null_or_empty(s)
}

pub fn is_not_null_or_blank<'a>(s: impl Into<Option<&'a str>>) -> bool {
    !is_null_or_blank(s)
}

/// Absent counts as empty.
pub fn is_empty<'a>(s: impl Into<Option<&'a str>>) -> bool {
    is_null_or_empty(s)
}

/// Absent counts as blank.
pub fn is_blank<'a>(s: impl Into<Option<&'a str>>) -> bool {
    is_null_or_blank(s)
}

pub fn is_not_empty<'a>(s: impl Into<Option<&'a str>>) -> bool {
    !is_empty(s)
}

pub fn is_not_blank<'a>(s: impl Into<Option<&'a str>>) -> bool {
    !is_blank(s)
}

pub fn starts_with<'a>(s: impl Into<Option<&'a str>>, prefix: &str, ignore_case: bool) -> bool {
    match s.into() {
        None => false,
        Some(s) if ignore_case => fold_case(s).starts_with(&fold_case(prefix)),
        Some(s) => s.starts_with(prefix),
    }
}

pub fn ends_with<'a>(s: impl Into<Option<&'a str>>, suffix: &str, ignore_case: bool) -> bool {
    match s.into() {
        None => false,
        Some(s) if ignore_case => fold_case(s).ends_with(&fold_case(suffix)),
        Some(s) => s.ends_with(suffix),
    }
}

pub fn contains<'a>(s: impl Into<Option<&'a str>>, needle: &str, ignore_case: bool) -> bool {
    match s.into() {
        None => false,
        Some(s) if ignore_case => fold_case(s).contains(&fold_case(needle)),
        Some(s) => s.contains(needle),
    }
}

pub fn contains_char<'a>(s: impl Into<Option<&'a str>>, c: char, ignore_case: bool) -> bool {
    let mut buf = [0u8; 4];
    contains(s, c.encode_utf8(&mut buf), ignore_case)
}

/// Two absent strings are equal.
pub fn equals<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
    ignore_case: bool,
) -> bool {
    match (a.into(), b.into()) {
        (None, None) => true,
        (Some(a), Some(b)) if ignore_case => fold_case(a) == fold_case(b),
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Lexicographic comparison with absence sorting first.
pub fn compare_to<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
    ignore_case: bool,
) -> Ordering {
    match (a.into(), b.into()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) if ignore_case => fold_case(a).cmp(&fold_case(b)),
        (Some(a), Some(b)) => a.cmp(b),
    }
}

// ============================================================================
// Transformation
// ============================================================================

pub fn or_empty<'a>(s: impl Into<Option<&'a str>>) -> &'a str {
    s.into().unwrap_or("")
}

pub fn or_default<'a>(s: impl Into<Option<&'a str>>, default: &'a str) -> &'a str {
    s.into().unwrap_or(default)
}

pub fn trim<'a>(s: impl Into<Option<&'a str>>) -> Option<&'a str> {
    s.into().map(str::trim)
}

pub fn trim_start<'a>(s: impl Into<Option<&'a str>>) -> Option<&'a str> {
    s.into().map(str::trim_start)
}

pub fn trim_end<'a>(s: impl Into<Option<&'a str>>) -> Option<&'a str> {
    s.into().map(str::trim_end)
}

/// Trimmed value, or `None` when nothing is left.
pub fn trim_to_null<'a>(s: impl Into<Option<&'a str>>) -> Option<&'a str> {
    s.into().map(str::trim).filter(|t| !t.is_empty())
}

pub fn to_lower_case<'a>(s: impl Into<Option<&'a str>>, _locale: Locale) -> Option<String> {
    s.into().map(str::to_lowercase)
}

pub fn to_upper_case<'a>(s: impl Into<Option<&'a str>>, _locale: Locale) -> Option<String> {
    s.into().map(str::to_uppercase)
}

/// Upper-case the first char and lower-case the rest.
pub fn capitalize<'a>(s: impl Into<Option<&'a str>>, _locale: Locale) -> Option<String> {
    s.into().map(|s| upper_first(s, str::to_lowercase))
}

/// Lower-case the first char, leaving the rest untouched.
pub fn decapitalize<'a>(s: impl Into<Option<&'a str>>, _locale: Locale) -> Option<String> {
    s.into().map(|s| {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        }
    })
}

// ============================================================================
// Substrings
// ============================================================================

/// First `n` chars; absent input yields `""`.
pub fn take<'a>(s: impl Into<Option<&'a str>>, n: usize) -> String {
    s.into().map_or_else(String::new, |s| s.chars().take(n).collect())
}

/// Last `n` chars; absent input yields `""`.
pub fn take_last<'a>(s: impl Into<Option<&'a str>>, n: usize) -> String {
    match s.into() {
        None => String::new(),
        Some(s) => {
            let skip = char_len(s).saturating_sub(n);
            s[byte_offset(s, skip)..].to_string()
        }
    }
}

pub fn drop<'a>(s: impl Into<Option<&'a str>>, n: usize) -> Option<String> {
    s.into().map(|s| s[byte_offset(s, n)..].to_string())
}

pub fn drop_last<'a>(s: impl Into<Option<&'a str>>, n: usize) -> Option<String> {
    s.into().map(|s| {
        let keep = char_len(s).saturating_sub(n);
        s[..byte_offset(s, keep)].to_string()
    })
}

pub fn take_while<'a, P: FnMut(&char) -> bool>(
    s: impl Into<Option<&'a str>>,
    predicate: P,
) -> Option<String> {
    s.into().map(|s| s.chars().take_while(predicate).collect())
}

/// Text before the first `delimiter`, or `missing` when it does not occur.
pub fn substring_before<'a>(s: impl Into<Option<&'a str>>, delimiter: char, missing: &str) -> String {
    s.into()
        .and_then(|s| s.find(delimiter).map(|i| &s[..i]))
        .unwrap_or(missing)
        .to_string()
}

pub fn substring_before_last<'a>(
    s: impl Into<Option<&'a str>>,
    delimiter: char,
    missing: &str,
) -> String {
    s.into()
        .and_then(|s| s.rfind(delimiter).map(|i| &s[..i]))
        .unwrap_or(missing)
        .to_string()
}

pub fn substring_after<'a>(s: impl Into<Option<&'a str>>, delimiter: char, missing: &str) -> String {
    s.into()
        .and_then(|s| s.find(delimiter).map(|i| &s[i + delimiter.len_utf8()..]))
        .unwrap_or(missing)
        .to_string()
}

pub fn substring_after_last<'a>(
    s: impl Into<Option<&'a str>>,
    delimiter: char,
    missing: &str,
) -> String {
    s.into()
        .and_then(|s| s.rfind(delimiter).map(|i| &s[i + delimiter.len_utf8()..]))
        .unwrap_or(missing)
        .to_string()
}

/// Text between the first `open` and the next `close` after it.
pub fn substring_between<'a>(s: impl Into<Option<&'a str>>, open: &str, close: &str) -> Option<String> {
    let s = s.into()?;
    let start = s.find(open)? + open.len();
    let rest = &s[start..];
    let end = rest.find(close)?;
    Some(rest[..end].to_string())
}

// ============================================================================
// Replacement and cleaning
// ============================================================================

pub fn replace<'a>(
    s: impl Into<Option<&'a str>>,
    old: &str,
    new: &str,
    ignore_case: bool,
) -> Option<String> {
    let s = s.into()?;
    if !ignore_case || old.is_empty() {
        return Some(s.replace(old, new));
    }

    let needle: Vec<char> = old.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        match prefix_len_ignore_case(rest, &needle) {
            Some(len) => {
                out.push_str(new);
                rest = &rest[len..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    Some(out)
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `haystack` equal to `needle`, char by char ignoring case.
fn prefix_len_ignore_case(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    let mut end = 0;
    for &expected in needle {
        let (i, c) = chars.next()?;
        if !eq_ignore_case(c, expected) {
            return None;
        }
        end = i + c.len_utf8();
    }
    Some(end)
}

pub fn replace_char<'a>(
    s: impl Into<Option<&'a str>>,
    old: char,
    new: char,
    ignore_case: bool,
) -> Option<String> {
    let s = s.into()?;
    if !ignore_case {
        return Some(s.replace(old, &new.to_string()));
    }
    Some(
        s.chars()
            .map(|c| if eq_ignore_case(c, old) { new } else { c })
            .collect(),
    )
}

pub fn remove_prefix<'a>(s: impl Into<Option<&'a str>>, prefix: &str) -> Option<&'a str> {
    s.into().map(|s| s.strip_prefix(prefix).unwrap_or(s))
}

pub fn remove_suffix<'a>(s: impl Into<Option<&'a str>>, suffix: &str) -> Option<&'a str> {
    s.into().map(|s| s.strip_suffix(suffix).unwrap_or(s))
}

/// Strip `prefix` and `suffix` only when both are present and do not overlap.
pub fn remove_surrounding<'a>(
    s: impl Into<Option<&'a str>>,
    prefix: &str,
    suffix: &str,
) -> Option<&'a str> {
    s.into().map(|s| {
        if s.len() >= prefix.len() + suffix.len() && s.starts_with(prefix) && s.ends_with(suffix) {
            &s[prefix.len()..s.len() - suffix.len()]
        } else {
            s
        }
    })
}

pub fn remove_whitespace<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into()
        .map(|s| s.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Trim the ends and reduce every whitespace run to one space.
pub fn collapse_whitespace<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
}

// ============================================================================
// Splitting and repetition
// ============================================================================

/// Split on `delimiter`; `limit == 0` means no cap, otherwise at most
/// `limit` parts with the remainder kept in the last one.
pub fn split<'a>(s: impl Into<Option<&'a str>>, delimiter: char, limit: usize) -> Vec<String> {
    match s.into() {
        None => Vec::new(),
        Some(s) if limit == 0 => s.split(delimiter).map(str::to_string).collect(),
        Some(s) => s.splitn(limit, delimiter).map(str::to_string).collect(),
    }
}

/// Split on `\r\n`, `\n` and `\r`.
pub fn lines<'a>(s: impl Into<Option<&'a str>>) -> Vec<String> {
    s.into().map(parser::lines_to_vec).unwrap_or_default()
}

/// Absent input or zero repetitions yield `""`.
pub fn repeat<'a>(s: impl Into<Option<&'a str>>, times: usize) -> String {
    s.into().map(|s| s.repeat(times)).unwrap_or_default()
}

pub fn repeat_char(c: char, times: usize) -> String {
    std::iter::repeat(c).take(times).collect()
}

/// Append to `buffer`, allocating one when absent.
pub fn append_to<'a>(buffer: Option<String>, s: impl Into<Option<&'a str>>) -> String {
    let mut buffer = buffer.unwrap_or_default();
    if let Some(s) = s.into() {
        buffer.push_str(s);
    }
    buffer
}

// ============================================================================
// Validation
// ============================================================================

/// Letters and decimal digits only (`\p{L}` and `\p{Nd}`).
pub fn is_alphanumeric<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().is_some_and(|s| LETTERS_OR_DIGITS.is_match(s))
}

/// Decimal digits only. Fractions and numerals such as `½` or `Ⅻ` do not count.
pub fn is_numeric<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().is_some_and(|s| DIGITS.is_match(s))
}

pub fn is_alpha<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().is_some_and(|s| LETTERS.is_match(s))
}

/// `min <= len <= max`, counting absent as length 0.
pub fn has_length<'a>(s: impl Into<Option<&'a str>>, min: usize, max: usize) -> bool {
    let len = s.into().map_or(0, char_len);
    (min..=max).contains(&len)
}
