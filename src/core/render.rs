//! Human-readable rendering of helper results for the demo report.
//!
//! Values render the way a JVM developer would expect to read them: absence
//! as `null`, sequences as `[a, b]`, maps as `{k=v}`, pairs as `(a, b)` and
//! whole floats with a trailing `.0`.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::defaults::DisplayConfig;
use crate::null_safety::Wrapper;
use crate::strings;
use crate::utils::validation;

pub trait Render {
    fn render(&self) -> String;
}

macro_rules! render_display {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String);

macro_rules! render_float {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    if self.is_finite() && self.fract() == 0.0 {
                        format!("{:.1}", self)
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

render_float!(f32, f64);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }
}

fn render_seq<'a, T: Render + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let rendered: Vec<String> = items.into_iter().map(Render::render).collect();
    format!("[{}]", rendered.join(", "))
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        render_seq(self)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        render_seq(self)
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self) -> String {
        render_seq(self)
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self) -> String {
        let rendered: Vec<String> = self
            .iter()
            .map(|(k, v)| format!("{}={}", k.render(), v.render()))
            .collect();
        format!("{{{}}}", rendered.join(", "))
    }
}

impl<A: Render, B: Render> Render for (A, B) {
    fn render(&self) -> String {
        format!("({}, {})", self.0.render(), self.1.render())
    }
}

/// Comparison results read as `-1`, `0` or `1`.
impl Render for Ordering {
    fn render(&self) -> String {
        (*self as i8).to_string()
    }
}

impl<T: Render> Render for Wrapper<T> {
    fn render(&self) -> String {
        format!("Wrapper({})", self.as_ref().or_null().render())
    }
}

impl Render for serde_json::Value {
    fn render(&self) -> String {
        match self {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Cap a rendered result at `max_result_width` chars, marker included.
pub fn display_result(rendered: &str, display: &DisplayConfig) -> String {
    strings::truncate(rendered, display.max_result_width, &display.truncation_marker)
        .unwrap_or_default()
}

/// The `-` rule printed under a section title.
pub fn section_rule(title: &str, display: &DisplayConfig) -> String {
    strings::repeat_char(
        '-',
        validation::coerce_at_most(title.chars().count(), display.rule_max_width),
    )
}

/// One demonstrated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub section: String,
    pub expression: String,
    pub result: String,
}

/// Accumulates the demo report as text and as structured entries.
#[derive(Debug, Clone)]
pub struct Report {
    display: DisplayConfig,
    text: String,
    section: String,
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            text: String::new(),
            section: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn section(&mut self, title: &str) {
        let rule = section_rule(title, &self.display);
        self.text.push('\n');
        self.text.push_str(title);
        self.text.push('\n');
        self.text.push_str(&rule);
        self.text.push_str("\n\n");
        self.section = title.to_string();
    }

    pub fn log<R: Render + ?Sized>(&mut self, expression: &str, result: &R) {
        let shown = display_result(&result.render(), &self.display);
        self.text.push_str(&format!(
            "{}\n  {} {}\n\n",
            expression, self.display.result_arrow, shown
        ));
        self.entries.push(ReportEntry {
            section: self.section.clone(),
            expression: expression.to_string(),
            result: shown,
        });
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ReportEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_jvm_style() {
        assert_eq!(None::<i32>.render(), "null");
        assert_eq!(vec!["a", "b"].render(), "[a, b]");
        assert_eq!(BTreeMap::from([(1, "x"), (2, "y")]).render(), "{1=x, 2=y}");
        assert_eq!(('a', 1).render(), "(a, 1)");
        assert_eq!(2.0f64.render(), "2.0");
        assert_eq!(2.5f64.render(), "2.5");
        assert_eq!(Ordering::Less.render(), "-1");
        assert_eq!(vec![Some(1), None].render(), "[1, null]");
        assert_eq!(Wrapper::present("v").render(), "Wrapper(v)");
    }

    #[test]
    fn long_results_are_cut_to_width() {
        let display = DisplayConfig::default();
        let long = "x".repeat(80);
        let shown = display_result(&long, &display);
        assert_eq!(shown.chars().count(), 60);
        assert_eq!(shown, format!("{}...", "x".repeat(57)));
        assert_eq!(display_result("short", &display), "short");
    }

    #[test]
    fn rule_width_is_capped() {
        let display = DisplayConfig::default();
        assert_eq!(section_rule("abc", &display), "---");
        assert_eq!(section_rule(&"t".repeat(70), &display).len(), 50);
    }

    #[test]
    fn report_collects_text_and_entries() {
        let mut report = Report::new(DisplayConfig::default());
        report.section("Demo");
        report.log("take(\"hello\", 3)", &"hel");
        report.log("missing", &None::<String>);

        assert_eq!(report.text(), "\nDemo\n----\n\ntake(\"hello\", 3)\n  → hel\n\nmissing\n  → null\n\n");
        assert_eq!(report.entries().len(), 2);
        assert_eq!(report.entries()[1].result, "null");
        assert_eq!(report.entries()[0].section, "Demo");
    }
}
