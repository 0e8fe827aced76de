//! # Console Reporter
//!
//! Owns all console rendering for the calculator: the titled banner, the
//! input/output section rules, labeled numeric lines, and severity-tagged
//! advisory lines. The engine only supplies values and verdicts; every
//! formatting decision lives here.

use rcc_core::verdict::Verdict;

/// Print the program banner: the title underlined across its full width.
pub fn title(text: &str) {
    println!("{}", text);
    println!("{}", "=".repeat(text.len()));
    println!();
}

/// Print a section header in the spaced-capitals style, with a dashed rule.
///
/// `section("SHEAR DESIGN")` renders as:
///
/// ```text
/// S H E A R  D E S I G N
/// ----------------------
/// ```
pub fn section(name: &str) {
    let spaced = spaced_caps(name);
    println!("{}", spaced);
    println!("{}", "-".repeat(spaced.len()));
}

/// Space the letters of each word; words stay separated by a double space.
fn spaced_caps(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<String>>()
        .join("  ")
}

/// Print a labeled value with its display unit (pass "" for unitless).
pub fn value(label: &str, value: f64, unit: &str) {
    if unit.is_empty() {
        println!("{} = {}", label, trim_float(value));
    } else {
        println!("{} = {} {}", label, trim_float(value), unit);
    }
}

/// Print a labeled value with fixed decimal places.
pub fn value_fixed(label: &str, value: f64, decimals: usize, unit: &str) {
    if unit.is_empty() {
        println!("{} = {:.*}", label, decimals, value);
    } else {
        println!("{} = {:.*} {}", label, decimals, value, unit);
    }
}

/// Print a reinforcement ratio as a percentage with its area companion.
pub fn ratio_with_area(label: &str, rho: f64, area_in2: f64) {
    println!(
        "{} = {:.2} % ({:.2} sq.inch)",
        label,
        rho * 100.0,
        area_in2
    );
}

/// Print a severity-tagged advisory line.
pub fn verdict(v: &Verdict) {
    println!("[{}] {}", v.severity.tag(), v.message);
}

/// Print every verdict in order.
pub fn verdicts(list: &[Verdict]) {
    for v in list {
        verdict(v);
    }
}

/// Print a blank spacer line.
pub fn blank() {
    println!();
}

/// Render a float without trailing zeros (input echoes show the value as
/// the user typed it, e.g. "12" not "12.000000").
fn trim_float(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(12.0), "12");
        assert_eq!(trim_float(17.5), "17.5");
        assert_eq!(trim_float(-3.0), "-3");
    }

    #[test]
    fn test_spaced_caps() {
        assert_eq!(spaced_caps("INPUTS"), "I N P U T S");
        assert_eq!(spaced_caps("SHEAR DESIGN"), "S H E A R  D E S I G N");
        assert_eq!(spaced_caps("outputs"), "O U T P U T S");
    }
}
