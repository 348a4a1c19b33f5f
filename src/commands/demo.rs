use clap::{Args, ValueEnum};
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use kotlinbridge::collections::{self, maps, sets};
use kotlinbridge::defaults::{self, DisplayConfig};
use kotlinbridge::null_safety::{self, Wrapper};
use kotlinbridge::render::{Report, ReportEntry};
use kotlinbridge::strings::{self, JoinOptions, Locale};

use super::CmdResult;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

#[derive(Args)]
pub struct DemoArgs {
    /// Only print these sections (repeatable; default: all)
    #[arg(long = "section", value_enum)]
    sections: Vec<Section>,

    /// Emit the report entries in the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Strings,
    NullSafety,
    Collections,
}

impl Section {
    const ALL: [Section; 3] = [Section::Strings, Section::NullSafety, Section::Collections];
}

#[derive(Debug, Serialize)]
pub struct DemoOutput {
    command: String,
    sections: Vec<Section>,
    entries: Vec<ReportEntry>,
}

/// Selected sections in report order; none selected means all.
fn selected(requested: &[Section]) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| requested.is_empty() || requested.contains(s))
        .collect()
}

pub fn run(args: DemoArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<DemoOutput> {
    let sections = selected(&args.sections);
    let report = build_report(&sections, defaults::load_display());

    Ok((
        DemoOutput {
            command: "demo".to_string(),
            sections,
            entries: report.into_entries(),
        },
        0,
    ))
}

pub fn run_raw(args: DemoArgs) -> kotlinbridge::Result<(String, i32)> {
    let sections = selected(&args.sections);
    let report = build_report(&sections, defaults::load_display());
    Ok((report.text().to_string(), 0))
}

pub fn build_report(sections: &[Section], display: DisplayConfig) -> Report {
    let mut report = Report::new(display);
    for section in sections {
        match section {
            Section::Strings => string_functions(&mut report),
            Section::NullSafety => null_safety_functions(&mut report),
            Section::Collections => collection_functions(&mut report),
        }
    }
    report.section("=== Demo Complete ===");
    report
}

fn string_functions(report: &mut Report) {
    report.section("=== StringExtensions Functions ===");

    // Checks
    report.log("is_null_or_blank(\"   \")", &strings::is_null_or_blank("   "));
    report.log("is_null_or_empty(\"\")", &strings::is_null_or_empty(""));
    report.log("is_not_null_or_empty(\"hello\")", &strings::is_not_null_or_empty("hello"));
    report.log("is_not_null_or_blank(\"   \")", &strings::is_not_null_or_blank("   "));
    report.log(
        "starts_with(\"hello world\", \"hello\", false)",
        &strings::starts_with("hello world", "hello", false),
    );
    report.log(
        "ends_with(\"hello world\", \"world\", false)",
        &strings::ends_with("hello world", "world", false),
    );
    report.log(
        "contains(\"hello world\", \"llo\", false)",
        &strings::contains("hello world", "llo", false),
    );
    report.log("matches(\"123\", r\"\\d+\")", &strings::matches("123", r"\d+"));

    // Transformations
    report.log("or_empty(None)", &strings::or_empty(None::<&str>));
    report.log("or_default(None, \"default\")", &strings::or_default(None::<&str>, "default"));
    report.log("trim(\"  hello  \")", &strings::trim("  hello  "));
    report.log(
        "to_lower_case(\"HELLO\", Locale::US)",
        &strings::to_lower_case("HELLO", Locale::US),
    );
    report.log(
        "to_upper_case(\"hello\", Locale::US)",
        &strings::to_upper_case("hello", Locale::US),
    );
    report.log(
        "capitalize(\"hello\", Locale::US)",
        &strings::capitalize("hello", Locale::US),
    );
    report.log(
        "decapitalize(\"Hello\", Locale::US)",
        &strings::decapitalize("Hello", Locale::US),
    );

    // Substrings
    report.log("take(\"hello\", 3)", &strings::take("hello", 3));
    report.log("take_last(\"hello\", 2)", &strings::take_last("hello", 2));
    report.log("drop(\"hello\", 2)", &strings::drop("hello", 2));
    report.log(
        "substring_before(\"hello.world\", '.', \"default\")",
        &strings::substring_before("hello.world", '.', "default"),
    );
    report.log(
        "substring_after(\"hello.world\", '.', \"default\")",
        &strings::substring_after("hello.world", '.', "default"),
    );
    report.log(
        "substring_between(\"[hello]\", \"[\", \"]\")",
        &strings::substring_between("[hello]", "[", "]"),
    );

    // Padding
    report.log("pad_start(\"5\", 3, '0')", &strings::pad_start("5", 3, '0'));
    report.log("pad_end(\"5\", 3, '0')", &strings::pad_end("5", 3, '0'));
    report.log("center(\"hi\", 6, '*')", &strings::center("hi", 6, '*'));

    // Truncation
    report.log(
        "truncate(\"hello world\", 8, \"...\")",
        &strings::truncate("hello world", 8, "..."),
    );
    report.log("ellipsize(\"abcdef\", 4)", &strings::ellipsize("abcdef", 4));
    report.log(
        "ellipsize_middle(\"abcdefgh\", 5, \"...\")",
        &strings::ellipsize_middle("abcdefgh", 5, "..."),
    );

    // Cleaning
    report.log(
        "remove_prefix(\"test.txt\", \"test.\")",
        &strings::remove_prefix("test.txt", "test."),
    );
    report.log(
        "remove_suffix(\"test.txt\", \".txt\")",
        &strings::remove_suffix("test.txt", ".txt"),
    );
    report.log(
        "remove_whitespace(\"h e l l o\")",
        &strings::remove_whitespace("h e l l o"),
    );
    report.log(
        "collapse_whitespace(\"  hello   world  \")",
        &strings::collapse_whitespace("  hello   world  "),
    );

    // Splitting and joining
    report.log("split(\"a,b,c\", ',', 0)", &strings::split("a,b,c", ',', 0));
    report.log("lines(\"line1\\nline2\")", &strings::lines("line1\nline2"));
    report.log(
        "join_to_string([1, 2, 3], surround(\"[\", \"]\"))",
        &strings::join_to_string(Some(&[1, 2, 3]), &JoinOptions::default().surround("[", "]")),
    );
    report.log("repeat(\"*\", 5)", &strings::repeat("*", 5));
    report.log("encode_base64(\"hello\")", &strings::encode_base64("hello"));
    report.log("decode_base64(\"aGVsbG8=\")", &strings::decode_base64("aGVsbG8="));

    // Regex
    report.log("matches(\"123\", &DIGITS)", &strings::matches("123", &*DIGITS));
    report.log("find(\"abc123def\", &DIGITS)", &strings::find("abc123def", &*DIGITS));
    report.log("find_all(\"a1b2c3\", &DIGITS)", &strings::find_all("a1b2c3", &*DIGITS));

    // Case conversions
    report.log("to_slug(\"Hello World!!!\")", &strings::to_slug("Hello World!!!"));
    report.log(
        "to_camel_case(\"hello_world\", Some(r\"[_\\s-]+\"))",
        &strings::to_camel_case("hello_world", Some(strings::DEFAULT_CAMEL_DELIMITER)),
    );
    report.log("to_snake_case(\"helloWorld\")", &strings::to_snake_case("helloWorld"));
    report.log("to_kebab_case(\"hello_world\")", &strings::to_kebab_case("hello_world"));
    report.log("to_title_case(\"hello world\")", &strings::to_title_case("hello world"));

    // Parsing
    report.log("to_int_or_null(\"42\")", &strings::to_int_or_null("42"));
    report.log("to_long_or_null(\"9999999999\")", &strings::to_long_or_null("9999999999"));
    report.log("to_double_or_null(\"3.14\")", &strings::to_double_or_null("3.14"));
    report.log("to_float_or_null(\"2.5\")", &strings::to_float_or_null("2.5"));
    report.log("to_boolean_or_null(\"yes\")", &strings::to_boolean_or_null("yes"));
    report.log("to_boolean_or_null(\"TRUE\")", &strings::to_boolean_or_null("TRUE"));
    report.log("to_boolean_or_null(\"maybe\")", &strings::to_boolean_or_null("maybe"));

    // Validation
    report.log("is_alphanumeric(\"abc123\")", &strings::is_alphanumeric("abc123"));
    report.log("is_numeric(\"123\")", &strings::is_numeric("123"));
    report.log("is_alpha(\"abc\")", &strings::is_alpha("abc"));
    report.log("has_length(\"hello\", 3, 10)", &strings::has_length("hello", 3, 10));
    report.log(
        "equals(\"Hello\", \"hello\", true)",
        &strings::equals("Hello", "hello", true),
    );
    report.log("compare_to(\"a\", \"b\", false)", &strings::compare_to("a", "b", false));

    report.blank();
}

fn null_safety_functions(report: &mut Report) {
    report.section("=== NullSafety Functions ===");

    // Basic checks
    report.log("is_null(None)", &null_safety::is_null(None::<&str>));
    report.log("is_not_null(Some(\"hello\"))", &null_safety::is_not_null(Some("hello")));
    report.log(
        "require_not_null(Some(\"value\"), \"was null\").ok()",
        &null_safety::require_not_null(Some("value"), "was null").ok(),
    );
    report.log(
        "or_else_value(None, \"default\")",
        &null_safety::or_else_value(None, "default"),
    );
    report.log(
        "or_else_get(None, || \"computed\")",
        &null_safety::or_else_get(None, || "computed"),
    );
    report.log(
        "or_default(Some(\"value\"), \"default\")",
        &null_safety::or_default(Some("value"), "default"),
    );

    // Default value helpers
    report.log("or_zero(None::<i32>)", &null_safety::or_zero(None::<i32>));
    report.log("or_zero(Some(42))", &null_safety::or_zero(Some(42)));
    report.log("or_false(None)", &null_safety::or_false(None));
    report.log("or_true(None)", &null_safety::or_true(None));

    // Safe chaining
    report.log(
        "safe_let(Some(\"hello\"), |s| s.to_uppercase())",
        &null_safety::safe_let(Some("hello"), |s| s.to_uppercase()),
    );
    report.log(
        "let_or_default(None, |s| s.to_uppercase(), \"DEFAULT\")",
        &null_safety::let_or_default(None::<&str>, |s| s.to_uppercase(), "DEFAULT".to_string()),
    );
    report.log(
        "coalesce!(None, None, Some(\"first\"), None)",
        &kotlinbridge::coalesce!(None, None, Some("first"), None),
    );

    // Safe casting
    report.log(
        "safe_cast::<String>(json!(\"hello\"))",
        &null_safety::safe_cast::<String>(Some(&json!("hello"))),
    );
    report.log(
        "cast_or_default(json!(123), \"default\")",
        &null_safety::cast_or_default(Some(&json!(123)), "default".to_string()),
    );

    // Null-aware comparison
    report.log(
        "safe_equals(Some(\"a\"), Some(\"a\"))",
        &null_safety::safe_equals(Some("a"), Some("a")),
    );
    report.log(
        "safe_compare_to(Some(1), Some(2))",
        &null_safety::safe_compare_to(Some(1), Some(2)),
    );

    // String representation
    report.log("to_string(None)", &null_safety::to_string(None::<i32>));
    report.log("to_string_or_empty(None)", &null_safety::to_string_or_empty(None::<i32>));

    // Lazy evaluation
    report.log(
        "lazy_or_default(|| Some(42), 0)",
        &null_safety::lazy_or_default(|| Some(42), 0),
    );
    report.log(
        "lazy_or_null(|| \"abc\".parse::<i32>())",
        &null_safety::lazy_or_null(|| "abc".parse::<i32>()),
    );

    // Failure capture
    report.log(
        "try_or_default(-1, || \"abc\".parse::<i32>())",
        &null_safety::try_or_default(-1, || "abc".parse::<i32>()),
    );
    report.log(
        "try_map(Some(\"123\"), str::parse::<i32>)",
        &null_safety::try_map(Some("123"), str::parse::<i32>),
    );
    report.log(
        "try_map(Some(\"abc\"), str::parse::<i32>)",
        &null_safety::try_map(Some("abc"), str::parse::<i32>),
    );

    // takeIf family
    report.log(
        "take_if_not_empty(\"hello\")",
        &null_safety::take_if_not_empty("hello"),
    );
    report.log("take_if_not_empty(\"\")", &null_safety::take_if_not_empty(""));
    report.log("take_if_not_blank(\"   \")", &null_safety::take_if_not_blank("   "));
    report.log(
        "take_if_in_range(Some(5), 0, 10)",
        &null_safety::take_if_in_range(Some(5), 0, 10),
    );
    report.log(
        "take_if_in_range(Some(15), 0, 10)",
        &null_safety::take_if_in_range(Some(15), 0, 10),
    );

    // Arithmetic
    report.log(
        "null_safe_plus(Some(5), Some(3))",
        &null_safety::null_safe_plus(Some(5), Some(3)),
    );
    report.log(
        "null_safe_plus(Some(5), None)",
        &null_safety::null_safe_plus(Some(5), None),
    );
    report.log(
        "null_safe_divide(Some(10), Some(2))",
        &null_safety::null_safe_divide(Some(10), Some(2)),
    );
    report.log(
        "null_safe_divide(Some(10), Some(0))",
        &null_safety::null_safe_divide(Some(10), Some(0)),
    );

    // Three-valued logic
    report.log(
        "null_safe_and(Some(true), Some(false))",
        &null_safety::null_safe_and(Some(true), Some(false)),
    );
    report.log(
        "null_safe_or(Some(true), None)",
        &null_safety::null_safe_or(Some(true), None),
    );
    report.log("null_safe_not(Some(true))", &null_safety::null_safe_not(Some(true)));

    // Wrapper
    report.log(
        "wrap(Some(\"value\")).is_present()",
        &null_safety::wrap(Some("value")).is_present(),
    );
    report.log("wrap(None).is_empty()", &null_safety::wrap(None::<&str>).is_empty());
    report.log(
        "wrap(Some(\"hello\")).map(|s| s.to_uppercase()).or_null()",
        &null_safety::wrap(Some("hello")).map(|s| s.to_uppercase()).or_null(),
    );
    report.log(
        "Wrapper::present(\"value\").filter(|s| s.is_empty())",
        &Wrapper::present("value").filter(|s| s.is_empty()),
    );

    report.blank();
}

fn collection_functions(report: &mut Report) {
    report.section("=== CollectionExtensions Functions ===");

    let fruits = ["apple", "banana", "cherry", "date"];
    let nums = [5, 2, 8, 1, 9];
    let empty: [&str; 0] = [];
    let list = Some(&fruits[..]);
    let numbers = Some(&nums[..]);
    let absent: Option<&[&str]> = None;

    // Basic checks
    report.log("is_null_or_empty(fruits)", &collections::is_null_or_empty(list));
    report.log("is_null_or_empty([])", &collections::is_null_or_empty(Some(&empty[..])));
    report.log("is_null_or_empty(None)", &collections::is_null_or_empty(absent));
    report.log("is_not_null_or_empty(fruits)", &collections::is_not_null_or_empty(list));
    report.log("size_or_zero(fruits)", &collections::size_or_zero(list));
    report.log("size_or_zero(None)", &collections::size_or_zero(absent));

    // Safe access
    report.log("get_or_null(fruits, 1)", &collections::get_or_null(list, 1));
    report.log("get_or_null(fruits, 10)", &collections::get_or_null(list, 10));
    report.log(
        "get_or_default(fruits, 10, \"default\")",
        &collections::get_or_default(list, 10, "default"),
    );
    report.log("first_or_null(fruits)", &collections::first_or_null(list));
    report.log("first_or_null(None)", &collections::first_or_null(absent));
    report.log(
        "first_or_default(None, \"default\")",
        &collections::first_or_default(absent, "default"),
    );
    report.log("last_or_null(fruits)", &collections::last_or_null(list));
    report.log(
        "last_or_default(fruits, \"none\")",
        &collections::last_or_default(list, "none"),
    );

    // Absence handling
    report.log("empty_if_null(None)", &collections::empty_if_null(absent));
    report.log("or_empty(fruits)", collections::or_empty(list));
    report.log("or_empty(None)", collections::or_empty(absent));
    report.log("null_if_empty(fruits)", &collections::null_if_empty(list));
    report.log("null_if_empty([])", &collections::null_if_empty(Some(&empty[..])));

    // Filtering
    report.log(
        "filter(fruits, |s| s.len() > 4)",
        &collections::filter(list, |s| s.len() > 4),
    );
    report.log("take(fruits, 2)", &collections::take(list, 2));
    report.log("take_last(fruits, 2)", &collections::take_last(list, 2));
    report.log("drop(fruits, 1)", &collections::drop(list, 1));
    report.log(
        "filter_not_null([Some(\"a\"), None, Some(\"b\"), None])",
        &collections::filter_not_null(Some(&[Some("a"), None, Some("b"), None][..])),
    );

    // Mapping
    report.log(
        "map(fruits, |s| s.to_uppercase())",
        &collections::map(list, |s| s.to_uppercase()),
    );
    report.log(
        "map_indexed(fruits, |i, s| format!(\"{}:{}\", i, s))",
        &collections::map_indexed(list, |i, s| format!("{}:{}", i, s)),
    );
    report.log(
        "map_not_null([Some(\"a\"), Some(\"b\"), Some(\"c\"), None], |s| s.map(str::to_uppercase))",
        &collections::map_not_null(Some(&[Some("a"), Some("b"), Some("c"), None][..]), |s| {
            s.map(str::to_uppercase)
        }),
    );

    // Sorting
    report.log("sorted(nums)", &collections::sorted(numbers));
    report.log("sorted_descending(nums)", &collections::sorted_descending(numbers));
    report.log(
        "sorted_by(fruits, |s| s.len())",
        &collections::sorted_by(list, |s| s.len()),
    );

    // Aggregation
    report.log(
        "distinct([\"a\", \"a\", \"b\", \"b\", \"c\"])",
        &collections::distinct(Some(&["a", "a", "b", "b", "c"][..])),
    );
    report.log("count(fruits)", &collections::count(list));
    report.log(
        "count_by(fruits, |s| s.len() > 4)",
        &collections::count_by(list, |s| s.len() > 4),
    );
    report.log("max_or_null(nums)", &collections::max_or_null(numbers));
    report.log("min_or_null(nums)", &collections::min_or_null(numbers));
    report.log(
        "sum_of_int(nums, |x| x * x)",
        &collections::sum_of_int(numbers, |x| x * x),
    );
    report.log(
        "average_of_int(nums, |x| *x)",
        &collections::average_of_int(numbers, |x| *x),
    );

    // Grouping
    report.log(
        "group_by(fruits, |s| s.len())",
        &collections::group_by(list, |s| s.len()),
    );
    report.log(
        "associate_by(fruits, |s| first char)",
        &collections::associate_by(list, |s| s.chars().next().unwrap_or_default()),
    );
    report.log(
        "partition(fruits, |s| s.len() > 4)",
        &collections::partition(list, |s| s.len() > 4),
    );

    // Maps
    let counts = BTreeMap::from([("one", 1), ("two", 2), ("three", 3)]);
    let map = Some(&counts);

    report.log("maps::get_or_null(map, \"one\")", &maps::get_or_null(map, &"one"));
    report.log(
        "maps::get_or_null(map, \"missing\")",
        &maps::get_or_null(map, &"missing"),
    );
    report.log(
        "maps::get_or_default(map, \"missing\", 0)",
        &maps::get_or_default(map, &"missing", 0),
    );
    report.log("maps::keys_or_empty(map)", &maps::keys_or_empty(map));
    report.log("maps::values_or_empty(map)", &maps::values_or_empty(map));
    report.log("maps::is_null_or_empty(map)", &maps::is_null_or_empty(map));

    // List utilities
    report.log("reversed(fruits)", &collections::reversed(list));
    report.log("chunked(fruits, 2)", &collections::chunked(list, 2));
    report.log(
        "windowed([a, b, c, d, e], 3, 1, false)",
        &collections::windowed(Some(&["a", "b", "c", "d", "e"][..]), 3, 1, false),
    );
    report.log("slice(fruits, &[0, 2])", &collections::slice(list, &[0, 2]));

    // Sets
    let first = BTreeSet::from(["a", "b", "c"]);
    let second = BTreeSet::from(["b", "c", "d"]);

    report.log(
        "sets::union([a, b, c], [b, c, d])",
        &sets::union(Some(&first), Some(&second)),
    );
    report.log(
        "sets::intersect([a, b, c], [b, c, d])",
        &sets::intersect(Some(&first), Some(&second)),
    );
    report.log(
        "sets::subtract([a, b, c], [b, c, d])",
        &sets::subtract(Some(&first), Some(&second)),
    );

    // Construction
    report.log(
        "list_of_not_null([Some(\"a\"), None, Some(\"b\"), None, Some(\"c\")])",
        &collections::list_of_not_null([Some("a"), None, Some("b"), None, Some("c")]),
    );
    report.log(
        "sets::set_of_not_null([Some(\"a\"), None, Some(\"b\"), None, Some(\"c\")])",
        &sets::set_of_not_null([Some("a"), None, Some("b"), None, Some("c")]),
    );

    // Predicates
    report.log(
        "all(fruits, |s| !s.is_empty())",
        &collections::all(list, |s| !s.is_empty()),
    );
    report.log(
        "any(fruits, |s| s.starts_with('a'))",
        &collections::any(list, |s| s.starts_with('a')),
    );
    report.log(
        "none(fruits, |s| s.starts_with('z'))",
        &collections::none(list, |s| s.starts_with('z')),
    );

    // Finding
    report.log(
        "find_first_or_null(fruits, |s| s.starts_with('b'))",
        &collections::find_first_or_null(list, |s| s.starts_with('b')),
    );
    report.log(
        "find_last_or_null(fruits, |s| s.len() > 4)",
        &collections::find_last_or_null(list, |s| s.len() > 4),
    );
    report.log(
        "index_of_or_null(fruits, &\"banana\")",
        &collections::index_of_or_null(list, &"banana"),
    );
    report.log(
        "index_of_first_or_null(fruits, |s| s.starts_with('c'))",
        &collections::index_of_first_or_null(list, |s| s.starts_with('c')),
    );

    // Folding
    report.log(
        "fold(nums, 0, |acc, x| acc + x)",
        &collections::fold(numbers, 0, |acc, x| acc + x),
    );
    report.log(
        "reduce(nums, |a, b| a + b)",
        &collections::reduce(numbers, |a, b| a + b),
    );

    // Head and tail
    report.log("head(fruits)", &collections::head(list));
    report.log("tail(fruits)", &collections::tail(list));
    report.log("init(fruits)", &collections::init(list));
    report.log("last(fruits)", &collections::last(list));

    // Zipping
    report.log(
        "zip(fruits, [\"1\", \"2\", \"3\"])",
        &collections::zip(list, Some(&["1", "2", "3"][..])),
    );
    report.log(
        "zip_with_next(fruits, |a, b| format!(\"{}{}\", a, b))",
        &collections::zip_with_next(list, |a, b| format!("{}{}", a, b)),
    );

    // Joining
    report.log(
        "join_to_string(fruits, surround(\"[\", \"]\"))",
        &collections::join_to_string(list, &JoinOptions::default().surround("[", "]")),
    );

    report.log("shuffled(nums)", &collections::shuffled(numbers));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(report: &'a Report, expression: &str) -> &'a str {
        report
            .entries()
            .iter()
            .find(|e| e.expression == expression)
            .map(|e| e.result.as_str())
            .unwrap_or_else(|| panic!("no entry for {}", expression))
    }

    #[test]
    fn no_selection_means_every_section() {
        assert_eq!(selected(&[]), Section::ALL.to_vec());
        assert_eq!(
            selected(&[Section::Collections, Section::Strings]),
            vec![Section::Strings, Section::Collections]
        );
    }

    #[test]
    fn string_section_matches_expected_results() {
        let report = build_report(&[Section::Strings], DisplayConfig::default());

        assert_eq!(entry(&report, "center(\"hi\", 6, '*')"), "**hi**");
        assert_eq!(entry(&report, "truncate(\"hello world\", 8, \"...\")"), "hello...");
        assert_eq!(entry(&report, "to_slug(\"Hello World!!!\")"), "hello-world");
        assert_eq!(entry(&report, "to_snake_case(\"helloWorld\")"), "hello_world");
        assert_eq!(entry(&report, "split(\"a,b,c\", ',', 0)"), "[a, b, c]");
        assert_eq!(entry(&report, "find_all(\"a1b2c3\", &DIGITS)"), "[1, 2, 3]");
        assert_eq!(entry(&report, "to_boolean_or_null(\"maybe\")"), "null");
        assert_eq!(entry(&report, "compare_to(\"a\", \"b\", false)"), "-1");
        assert_eq!(entry(&report, "or_empty(None)"), "");
    }

    #[test]
    fn null_safety_section_matches_expected_results() {
        let report = build_report(&[Section::NullSafety], DisplayConfig::default());

        assert_eq!(entry(&report, "coalesce!(None, None, Some(\"first\"), None)"), "first");
        assert_eq!(entry(&report, "try_map(Some(\"abc\"), str::parse::<i32>)"), "null");
        assert_eq!(entry(&report, "null_safe_divide(Some(10), Some(0))"), "null");
        assert_eq!(entry(&report, "null_safe_or(Some(true), None)"), "null");
        assert_eq!(
            entry(&report, "Wrapper::present(\"value\").filter(|s| s.is_empty())"),
            "Wrapper(null)"
        );
    }

    #[test]
    fn collection_section_matches_expected_results() {
        let report = build_report(&[Section::Collections], DisplayConfig::default());

        assert_eq!(entry(&report, "sorted(nums)"), "[1, 2, 5, 8, 9]");
        assert_eq!(entry(&report, "group_by(fruits, |s| s.len())"), "{4=[date], 5=[apple], 6=[banana, cherry]}");
        assert_eq!(entry(&report, "partition(fruits, |s| s.len() > 4)"), "([apple, banana, cherry], [date])");
        assert_eq!(entry(&report, "reduce(nums, |a, b| a + b)"), "25");
        assert_eq!(entry(&report, "average_of_int(nums, |x| *x)"), "5.0");
        assert_eq!(entry(&report, "maps::keys_or_empty(map)"), "[one, three, two]");
        assert_eq!(entry(&report, "sets::subtract([a, b, c], [b, c, d])"), "[a]");
        assert_eq!(
            entry(&report, "windowed([a, b, c, d, e], 3, 1, false)"),
            "[[a, b, c], [b, c, d], [c, d, e]]"
        );
    }

    #[test]
    fn report_ends_with_completion_section() {
        let report = build_report(&[], DisplayConfig::default());
        assert!(report.entries().is_empty());
        assert!(report.text().contains("=== Demo Complete ==="));

        let full = build_report(&Section::ALL, DisplayConfig::default());
        assert!(full.text().trim_end().ends_with("-".repeat(21).as_str()));
    }

    #[test]
    fn narrow_display_truncates_results() {
        let display = DisplayConfig {
            max_result_width: 10,
            ..DisplayConfig::default()
        };
        let report = build_report(&[Section::Collections], display);
        assert_eq!(entry(&report, "map(fruits, |s| s.to_uppercase())"), "[APPLE,...");
    }
}
