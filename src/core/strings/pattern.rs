//! Regex helpers that accept either pattern source or a compiled [`Regex`].
//!
//! An invalid pattern source never raises: predicates answer `false`, finders
//! find nothing and replacements leave the input unchanged.

use regex::Regex;
use std::borrow::Cow;

/// Something usable as a regular expression.
pub trait AsPattern {
    /// `None` when the pattern source does not compile.
    fn as_regex(&self) -> Option<Cow<'_, Regex>>;
}

impl AsPattern for str {
    fn as_regex(&self) -> Option<Cow<'_, Regex>> {
        Regex::new(self).ok().map(Cow::Owned)
    }
}

impl AsPattern for String {
    fn as_regex(&self) -> Option<Cow<'_, Regex>> {
        self.as_str().as_regex()
    }
}

impl AsPattern for Regex {
    fn as_regex(&self) -> Option<Cow<'_, Regex>> {
        Some(Cow::Borrowed(self))
    }
}

impl<T: AsPattern + ?Sized> AsPattern for &T {
    fn as_regex(&self) -> Option<Cow<'_, Regex>> {
        (**self).as_regex()
    }
}

fn anchored(re: &Regex) -> Option<Regex> {
    Regex::new(&format!(r"\A(?:{})\z", re.as_str())).ok()
}

/// Builder flags are not part of `as_str()`, so the leftmost match of `re`
/// itself decides first. The anchored source only runs when `re` matches
/// somewhere, to find a whole match hidden behind a shorter alternative.
fn matches_whole(re: &Regex, s: &str) -> bool {
    match re.find(s) {
        None => false,
        Some(m) if m.start() == 0 && m.end() == s.len() => true,
        Some(_) => anchored(re).is_some_and(|whole| whole.is_match(s)),
    }
}

/// True when the pattern matches the whole input, not just a part of it.
pub fn matches<'a, P: AsPattern>(s: impl Into<Option<&'a str>>, pattern: P) -> bool {
    let Some(s) = s.into() else {
        return false;
    };
    pattern.as_regex().is_some_and(|re| matches_whole(&re, s))
}

/// First match, if any.
pub fn find<'a, P: AsPattern>(s: impl Into<Option<&'a str>>, pattern: P) -> Option<String> {
    let s = s.into()?;
    let re = pattern.as_regex()?;
    re.find(s).map(|m| m.as_str().to_string())
}

/// Every non-overlapping match, left to right.
pub fn find_all<'a, P: AsPattern>(s: impl Into<Option<&'a str>>, pattern: P) -> Vec<String> {
    let (Some(s), Some(re)) = (s.into(), pattern.as_regex()) else {
        return Vec::new();
    };
    re.find_iter(s).map(|m| m.as_str().to_string()).collect()
}

/// Replace every match. `$1` and `${name}` in `replacement` expand to groups.
pub fn replace_all<'a, P: AsPattern>(
    s: impl Into<Option<&'a str>>,
    pattern: P,
    replacement: &str,
) -> Option<String> {
    let s = s.into()?;
    match pattern.as_regex() {
        Some(re) => Some(re.replace_all(s, replacement).into_owned()),
        None => Some(s.to_string()),
    }
}

pub fn replace_first<'a, P: AsPattern>(
    s: impl Into<Option<&'a str>>,
    pattern: P,
    replacement: &str,
) -> Option<String> {
    let s = s.into()?;
    match pattern.as_regex() {
        Some(re) => Some(re.replace(s, replacement).into_owned()),
        None => Some(s.to_string()),
    }
}

/// Split around matches of `pattern`; `limit == 0` means no cap.
/// An invalid pattern yields the whole input as a single part.
pub fn split_pattern<'a, P: AsPattern>(
    s: impl Into<Option<&'a str>>,
    pattern: P,
    limit: usize,
) -> Vec<String> {
    let Some(s) = s.into() else {
        return Vec::new();
    };
    let Some(re) = pattern.as_regex() else {
        return vec![s.to_string()];
    };
    if limit == 0 {
        re.split(s).map(str::to_string).collect()
    } else {
        re.splitn(s, limit).map(str::to_string).collect()
    }
}
