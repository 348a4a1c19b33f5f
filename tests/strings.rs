use kotlinbridge::strings::{self, JoinOptions, Locale};
use regex::Regex;
use std::cmp::Ordering;

#[test]
fn absent_strings_are_handled_everywhere() {
    let absent: Option<&str> = None;

    assert!(strings::is_null_or_blank(absent));
    assert!(!strings::starts_with(absent, "a", false));
    assert!(strings::equals(absent, absent, false));
    assert_eq!(strings::compare_to(absent, "a", false), Ordering::Less);
    assert_eq!(strings::take(absent, 3), "");
    assert_eq!(strings::drop(absent, 3), None);
    assert_eq!(strings::to_slug(absent), None);
    assert_eq!(strings::split(absent, ',', 0), Vec::<String>::new());
    assert_eq!(strings::substring_before(absent, '.', "missing"), "missing");
    assert!(!strings::matches(absent, ".*"));
    assert_eq!(strings::append_to(None, absent), "");
}

#[test]
fn case_insensitive_comparisons() {
    assert!(strings::starts_with("Hello World", "hello", true));
    assert!(!strings::starts_with("Hello World", "hello", false));
    assert!(strings::ends_with("Hello World", "WORLD", true));
    assert!(strings::contains("Hello World", "O W", true));
    assert!(strings::equals("Hello", "hello", true));
    assert_eq!(strings::compare_to("B", "a", true), Ordering::Greater);
}

#[test]
fn locale_aware_case_helpers() {
    assert_eq!(strings::to_upper_case("hello", Locale::US).as_deref(), Some("HELLO"));
    assert_eq!(strings::capitalize("hello", Locale::ROOT).as_deref(), Some("Hello"));
    assert_eq!(strings::decapitalize("Hello", Locale::default()).as_deref(), Some("hello"));
    assert_eq!(strings::capitalize("", Locale::US).as_deref(), Some(""));
}

#[test]
fn substring_helpers() {
    assert_eq!(strings::take_last("hello", 2), "lo");
    assert_eq!(strings::drop_last("hello", 2).as_deref(), Some("hel"));
    assert_eq!(strings::substring_after("a.b.c", '.', "-"), "b.c");
    assert_eq!(strings::substring_after_last("a.b.c", '.', "-"), "c");
    assert_eq!(strings::substring_before_last("a.b.c", '.', "-"), "a.b");
    assert_eq!(strings::substring_after("abc", '.', "-"), "-");
    assert_eq!(strings::substring_between("x[hello]y", "[", "]").as_deref(), Some("hello"));
    assert_eq!(strings::substring_between("no brackets", "[", "]"), None);
}

#[test]
fn padding_and_truncation() {
    assert_eq!(strings::pad_start("5", 3, '0').as_deref(), Some("005"));
    assert_eq!(strings::pad_end("5", 3, '0').as_deref(), Some("500"));
    assert_eq!(strings::center("hi", 5, '*').as_deref(), Some("*hi**"));
    assert_eq!(strings::pad_start("long", 2, ' ').as_deref(), Some("long"));

    assert_eq!(strings::ellipsize("abcdef", 4).as_deref(), Some("abc…"));
    assert_eq!(strings::ellipsize_middle("abcdefgh", 5, "...").as_deref(), Some("a...h"));
    assert_eq!(strings::truncate("short", 10, "...").as_deref(), Some("short"));
    assert_eq!(strings::truncate("hello", 2, "...").as_deref(), Some(".."));
}

#[test]
fn cleaning() {
    assert_eq!(strings::remove_prefix("test.txt", "test.").as_deref(), Some("txt"));
    assert_eq!(strings::remove_suffix("test.txt", ".md").as_deref(), Some("test.txt"));
    assert_eq!(strings::remove_surrounding("\"quoted\"", "\"", "\"").as_deref(), Some("quoted"));
    assert_eq!(strings::remove_surrounding("\"", "\"", "\"").as_deref(), Some("\""));
    assert_eq!(strings::remove_whitespace("h e l l o").as_deref(), Some("hello"));
    assert_eq!(
        strings::collapse_whitespace("  hello   world  ").as_deref(),
        Some("hello world")
    );
    assert_eq!(strings::trim_to_null("   "), None);
    assert_eq!(
        strings::replace("Hello hello", "HELLO", "bye", true).as_deref(),
        Some("bye bye")
    );
    assert_eq!(strings::replace("a$b", "$", "$1", true).as_deref(), Some("a$1b"));
}

#[test]
fn splitting_and_joining() {
    assert_eq!(strings::split("a,b,c", ',', 2), vec!["a", "b,c"]);
    assert_eq!(strings::lines("one\r\ntwo\nthree"), vec!["one", "two", "three"]);
    assert_eq!(strings::repeat("ab", 3), "ababab");
    assert_eq!(strings::repeat("ab", 0), "");

    let items = [1, 2, 3];
    assert_eq!(
        strings::join_to_string(Some(&items), &JoinOptions::default().surround("[", "]")),
        "[1, 2, 3]"
    );
    assert_eq!(
        strings::join_to_string(Some(&items), &JoinOptions::default().separator("-").limit(1).truncated("~")),
        "1-~"
    );
    assert_eq!(
        strings::join_to_string(None::<&[i32]>, &JoinOptions::default()),
        ""
    );
    assert_eq!(
        strings::join_to_string_with(Some(&items), &JoinOptions::default(), |n| format!("<{}>", n)),
        "<1>, <2>, <3>"
    );
}

#[test]
fn regex_helpers_accept_source_or_compiled_patterns() {
    let digits = Regex::new(r"\d+").unwrap();

    assert!(strings::matches("123", r"\d+"));
    assert!(!strings::matches("abc123", &digits));
    assert_eq!(strings::find("abc123def", &digits).as_deref(), Some("123"));
    assert_eq!(strings::find_all("a1b22c333", r"\d+"), vec!["1", "22", "333"]);
    assert_eq!(strings::replace_all("a1b2", r"\d", "#").as_deref(), Some("a#b#"));
    assert_eq!(strings::replace_first("a1b2", r"\d", "#").as_deref(), Some("a#b2"));
    assert_eq!(strings::split_pattern("a1b22c", r"\d+", 0), vec!["a", "b", "c"]);
}

#[test]
fn invalid_patterns_never_fail() {
    assert!(!strings::matches("abc", "("));
    assert_eq!(strings::find("abc", "("), None);
    assert!(strings::find_all("abc", "(").is_empty());
    assert_eq!(strings::replace_all("abc", "(", "x").as_deref(), Some("abc"));
    assert_eq!(
        strings::to_camel_case("hello_world", Some("(")).as_deref(),
        Some("hello_world")
    );
}

#[test]
fn case_conversions() {
    assert_eq!(strings::to_slug("  Hello, World!!! ").as_deref(), Some("hello-world"));
    assert_eq!(strings::to_camel_case("hello_world-foo bar", None).as_deref(), Some("helloWorldFooBar"));
    assert_eq!(strings::to_camel_case("a.b", Some(r"\.")).as_deref(), Some("aB"));
    assert_eq!(strings::to_snake_case("helloWorld-foo").as_deref(), Some("hello_world_foo"));
    assert_eq!(strings::to_kebab_case("helloWorld foo_bar").as_deref(), Some("hello-world-foo-bar"));
    assert_eq!(strings::to_title_case("hELLO   wORLD").as_deref(), Some("Hello World"));
}

#[test]
fn parsing_never_fails() {
    assert_eq!(strings::to_int_or_null("42"), Some(42));
    assert_eq!(strings::to_int_or_null("9999999999"), None);
    assert_eq!(strings::to_long_or_null("9999999999"), Some(9_999_999_999));
    assert_eq!(strings::to_double_or_null("2.75"), Some(2.75));
    assert_eq!(strings::to_float_or_null("x"), None);
    assert_eq!(strings::to_boolean_or_null("Yes"), Some(true));
    assert_eq!(strings::to_boolean_or_null("off"), Some(false));

    let encoded = strings::encode_base64("hello").unwrap();
    assert_eq!(encoded, "aGVsbG8=");
    assert_eq!(strings::decode_base64(encoded.as_str()).as_deref(), Some("hello"));
    assert_eq!(strings::decode_base64("not base64!"), None);
}

#[test]
fn character_class_checks() {
    assert!(strings::is_alphanumeric("abc123"));
    assert!(!strings::is_alphanumeric("abc 123"));
    assert!(strings::is_numeric("123"));
    assert!(strings::is_alpha("abc"));
    assert!(!strings::is_alpha(None::<&str>));
    assert!(strings::has_length("hello", 3, 10));
    assert!(!strings::has_length("hi", 3, 10));
}

#[test]
fn indentation_helpers() {
    assert_eq!(strings::indent("a\nb", "  ").as_deref(), Some("  a\n  b"));
    assert_eq!(
        strings::trim_indent("\n    one\n      two\n").as_deref(),
        Some("one\n  two")
    );
    assert_eq!(
        strings::trim_margin("\n  |one\n  |two\n", "|").as_deref(),
        Some("one\ntwo")
    );
}

#[test]
fn whole_match_honours_compiled_flags() {
    let re = regex::RegexBuilder::new("abc")
        .case_insensitive(true)
        .build()
        .unwrap();
    assert_eq!(strings::find("ABC", &re).as_deref(), Some("ABC"));
    assert!(strings::matches("ABC", &re));
    assert!(strings::matches("aBc", &re));
    assert!(!strings::matches("xABC", &re));

    let lines = regex::RegexBuilder::new(r"a.b")
        .dot_matches_new_line(true)
        .build()
        .unwrap();
    assert!(strings::matches("a\nb", &lines));
    assert!(!strings::matches("a\nb", r"a.b"));
}

#[test]
fn case_insensitive_replace_never_loses_the_input() {
    let run = "a".repeat(1_000_000);
    let input = format!("x{}y", run);
    assert_eq!(strings::replace(input.as_str(), &run, "-", true).as_deref(), Some("x-y"));
    assert_eq!(strings::replace("Straße", "SSE", "!", true).as_deref(), Some("Straße"));
}

#[test]
fn numeric_means_decimal_digits() {
    assert!(!strings::is_numeric("½"));
    assert!(!strings::is_numeric("Ⅻ"));
    assert!(!strings::is_alphanumeric("abcⅫ"));
    assert!(strings::is_numeric("१२३"));
}

#[test]
fn title_case_keeps_outer_whitespace() {
    assert_eq!(strings::to_title_case("  hello world").as_deref(), Some(" Hello World"));
    assert_eq!(strings::to_title_case("end ").as_deref(), Some("End "));
}
