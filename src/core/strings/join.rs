use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How [`join_to_string`] lays out its output.
///
/// With a `limit`, only the first `limit` items are rendered and the
/// `truncated` marker takes the place of the rest. `prefix` and `postfix`
/// wrap the whole result either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    pub separator: String,
    pub prefix: String,
    pub postfix: String,
    pub limit: Option<usize>,
    pub truncated: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
            limit: None,
            truncated: "...".to_string(),
        }
    }
}

impl JoinOptions {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn surround(mut self, prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.postfix = postfix.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn truncated(mut self, truncated: impl Into<String>) -> Self {
        self.truncated = truncated.into();
        self
    }
}

/// Join each item's `Display` form. Absent input yields `""`.
pub fn join_to_string<I>(items: Option<I>, options: &JoinOptions) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_to_string_with(items, options, |item| item.to_string())
}

/// Join with a custom renderer per item.
pub fn join_to_string_with<I, F>(items: Option<I>, options: &JoinOptions, mut render: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> String,
{
    let Some(items) = items else {
        return String::new();
    };

    let mut out = options.prefix.clone();
    for (count, item) in items.into_iter().enumerate() {
        if count > 0 {
            out.push_str(&options.separator);
        }
        if options.limit.is_some_and(|limit| count >= limit) {
            out.push_str(&options.truncated);
            break;
        }
        out.push_str(&render(item));
    }
    out.push_str(&options.postfix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        assert_eq!(join_to_string(Some([1, 2, 3]), &JoinOptions::default()), "1, 2, 3");
        assert_eq!(join_to_string(None::<Vec<u8>>, &JoinOptions::default()), "");
        assert_eq!(join_to_string(Some(Vec::<u8>::new()), &JoinOptions::default()), "");
    }

    #[test]
    fn limit_appends_marker_after_separator() {
        let options = JoinOptions::default().limit(2);
        assert_eq!(join_to_string(Some([1, 2, 3]), &options), "1, 2, ...");
        assert_eq!(join_to_string(Some([1, 2]), &options), "1, 2");
    }

    #[test]
    fn prefix_postfix_and_renderer() {
        let options = JoinOptions::default().separator("|").surround("<", ">");
        assert_eq!(
            join_to_string_with(Some(["a", "b"]), &options, |s| s.to_uppercase()),
            "<A|B>"
        );
    }

    #[test]
    fn zero_limit_renders_marker_only() {
        let options = JoinOptions::default().limit(0).surround("[", "]");
        assert_eq!(join_to_string(Some([1]), &options), "[...]");
    }
}
