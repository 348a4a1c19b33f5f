use super::{byte_offset, char_len};
use crate::utils::parser;

/// Prefix every line with `prefix`. Blank lines shorter than the prefix
/// become the prefix alone; longer blank lines are kept as they are.
pub fn indent<'a>(s: impl Into<Option<&'a str>>, prefix: &str) -> Option<String> {
    let s = s.into()?;
    let lines: Vec<String> = parser::split_lines(s)
        .into_iter()
        .map(|line| {
            if !line.trim().is_empty() {
                format!("{}{}", prefix, line)
            } else if char_len(line) < char_len(prefix) {
                prefix.to_string()
            } else {
                line.to_string()
            }
        })
        .collect();
    Some(lines.join("\n"))
}

/// Drop blank first and last lines, then strip the indentation shared by
/// every non-blank line.
pub fn trim_indent<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    let s = s.into()?;
    let lines = parser::split_lines(s);
    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    Some(reindent(&lines, |line| Some(line[byte_offset(line, common)..].to_string())))
}

/// Drop blank first and last lines, then strip leading whitespace followed
/// by `margin` from every line that has it. Other lines are left alone.
pub fn trim_margin<'a>(s: impl Into<Option<&'a str>>, margin: &str) -> Option<String> {
    let s = s.into()?;
    let lines = parser::split_lines(s);
    Some(reindent(&lines, |line| {
        line.trim_start()
            .strip_prefix(margin)
            .filter(|_| !line.trim().is_empty())
            .map(str::to_string)
    }))
}

fn reindent<F>(lines: &[&str], cut: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .filter(|(i, line)| !((*i == 0 || *i == last) && line.trim().is_empty()))
        .map(|(_, line)| cut(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
