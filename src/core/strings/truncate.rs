//! Padding and length-bounded shortening.
//!
//! Every truncating function guarantees `result.chars().count() <= max`,
//! including the marker.

use super::{byte_offset, char_len, repeat_char, take, take_last};

const ELLIPSIS: &str = "…";

pub fn pad_start<'a>(s: impl Into<Option<&'a str>>, length: usize, pad: char) -> Option<String> {
    s.into().map(|s| {
        let surplus = length.saturating_sub(char_len(s));
        repeat_char(pad, surplus) + s
    })
}

pub fn pad_end<'a>(s: impl Into<Option<&'a str>>, length: usize, pad: char) -> Option<String> {
    s.into().map(|s| {
        let surplus = length.saturating_sub(char_len(s));
        s.to_string() + &repeat_char(pad, surplus)
    })
}

/// Pad both sides to `length`; an odd surplus puts the extra char at the end.
pub fn center<'a>(s: impl Into<Option<&'a str>>, length: usize, pad: char) -> Option<String> {
    s.into().map(|s| {
        let surplus = length.saturating_sub(char_len(s));
        let left = surplus / 2;
        repeat_char(pad, left) + s + &repeat_char(pad, surplus - left)
    })
}

/// Cut to `max` chars, ending in `marker` when anything was removed.
///
/// When `max` cannot fit the marker, the marker itself is cut to `max`.
pub fn truncate<'a>(s: impl Into<Option<&'a str>>, max: usize, marker: &str) -> Option<String> {
    let s = s.into()?;
    if char_len(s) <= max {
        return Some(s.to_string());
    }

    let marker_len = char_len(marker);
    if max <= marker_len {
        return Some(take(marker, max));
    }
    Some(format!("{}{}", &s[..byte_offset(s, max - marker_len)], marker))
}

/// [`truncate`] with a single `…` marker.
pub fn ellipsize<'a>(s: impl Into<Option<&'a str>>, max: usize) -> Option<String> {
    truncate(s, max, ELLIPSIS)
}

/// Keep the head and tail, replacing the middle with `marker`.
/// The tail gets the extra char when the kept count is odd.
pub fn ellipsize_middle<'a>(
    s: impl Into<Option<&'a str>>,
    max: usize,
    marker: &str,
) -> Option<String> {
    let s = s.into()?;
    if char_len(s) <= max {
        return Some(s.to_string());
    }

    let marker_len = char_len(marker);
    if max <= marker_len {
        return Some(take(marker, max));
    }
    let keep = max - marker_len;
    let left = keep / 2;
    Some(format!(
        "{}{}{}",
        take(s, left),
        marker,
        take_last(s, keep - left)
    ))
}
