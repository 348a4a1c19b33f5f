use regex::Regex;
use std::sync::LazyLock;

/// Delimiters `to_camel_case` splits on unless told otherwise.
pub const DEFAULT_CAMEL_DELIMITER: &str = r"[_\s-]+";

static SLUG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static CAMEL_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_CAMEL_DELIMITER).unwrap());

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());

static SNAKE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static KEBAB_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]").unwrap());

/// Lower-case, join ASCII alphanumeric runs with `-`, no leading or trailing `-`.
///
/// `"Hello, World!"` becomes `"hello-world"`.
pub fn to_slug<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| {
        let lower = s.to_lowercase();
        SLUG_SEPARATOR
            .replace_all(&lower, "-")
            .trim_matches('-')
            .to_string()
    })
}

/// Split on `delimiter` (a regex, [`DEFAULT_CAMEL_DELIMITER`] when `None`),
/// lower-case the first segment and upper-case the first char of the rest.
///
/// An invalid delimiter pattern leaves the input unchanged.
pub fn to_camel_case<'a>(s: impl Into<Option<&'a str>>, delimiter: Option<&str>) -> Option<String> {
    let s = s.into()?;
    if s.is_empty() {
        return Some(String::new());
    }

    let custom;
    let splitter: &Regex = match delimiter {
        None => &*CAMEL_DELIMITER,
        Some(pattern) => match Regex::new(pattern) {
            Ok(re) => {
                custom = re;
                &custom
            }
            Err(_) => return Some(s.to_string()),
        },
    };

    let camel = splitter
        .split(s)
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                return word.to_lowercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    Some(camel)
}

/// `"helloWorld Foo-bar"` becomes `"hello_world_foo_bar"`.
pub fn to_snake_case<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| {
        let split = CASE_BOUNDARY.replace_all(s, "${1}_${2}");
        SNAKE_SEPARATOR.replace_all(&split, "_").to_lowercase()
    })
}

/// `"helloWorld foo_bar"` becomes `"hello-world-foo-bar"`.
pub fn to_kebab_case<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| {
        let split = CASE_BOUNDARY.replace_all(s, "${1}-${2}");
        KEBAB_SEPARATOR.replace_all(&split, "-").to_lowercase()
    })
}

/// Capitalize every whitespace-separated word and lower-case the rest of it.
/// Each whitespace run becomes a single space; leading and trailing runs are kept.
pub fn to_title_case<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| {
        WHITESPACE_RUN
            .split(s)
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}
