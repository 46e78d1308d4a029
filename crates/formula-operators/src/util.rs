//! Coercion and rendering helpers shared by the operator families.

use crate::types::{FormulaError, Value};
use regex::Regex;
use std::sync::OnceLock;

// ----------------------------------------------------------------- Operand helpers

/// Reduces a flagged single-cell range to its top-left cell.
///
/// Unflagged operands, and flagged operands that are not ranges, come back
/// as they are.
pub fn reduce(value: &Value, is_single_cell_range: bool) -> &Value {
    match value {
        Value::Range(range) if is_single_cell_range => range.top_left(),
        _ => value,
    }
}

/// The error a binary operator short-circuits on. The left operand wins.
pub fn first_error<'a>(left: &'a Value, right: &'a Value) -> Option<&'a FormulaError> {
    left.as_error().or_else(|| right.as_error())
}

/// Cross-type ordering used by relational operators: number < text < boolean.
///
/// Blanks rank as numbers since comparison reads them as `0`.
pub fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) | Value::Empty => 1,
        Value::Text(_) => 2,
        Value::Boolean(_) => 3,
        Value::Range(_) | Value::Error(_) => 0,
    }
}

// ----------------------------------------------------------------- Numeric coercion

fn numeric_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$").unwrap()
    })
}

/// Parses text that is, in its entirety, a decimal numeric literal.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    if !numeric_literal_regex().is_match(text) {
        return None;
    }
    text.trim().parse::<f64>().ok()
}

/// Coerces an operand to a number.
///
/// Blanks are `0`, booleans are `1`/`0` and text must be a complete numeric
/// literal. An error operand yields that same error; anything else that
/// cannot be read as a number, including an unflagged range, is `#VALUE!`.
/// A NaN input is returned as is and left to the caller.
pub fn to_number(value: &Value, is_single_cell_range: bool) -> Result<f64, FormulaError> {
    match reduce(value, is_single_cell_range) {
        Value::Number(n) => Ok(*n),
        Value::Empty => Ok(0.0),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => parse_numeric_text(s).ok_or_else(FormulaError::value),
        Value::Error(e) => Err(e.clone()),
        Value::Range(_) => Err(FormulaError::value()),
    }
}

/// Wraps an arithmetic result, turning NaN and infinities into `#NUM!`.
pub fn number_result(n: f64) -> Value {
    if n.is_finite() {
        Value::Number(n)
    } else {
        Value::Error(FormulaError::num())
    }
}

// ----------------------------------------------------------------- Text rendering

/// Renders a number the way a formula displays it inside text.
pub fn number_to_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return (if n > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    // Rust prints `1e21`/`1e-7`; formulas print `1e+21`/`1e-7`.
    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// Renders an operand for concatenation.
///
/// Blanks are empty text, booleans are `TRUE`/`FALSE`, errors are their
/// literal and a range lists its cells row by row separated by commas.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Number(n) => number_to_text(*n),
        Value::Text(s) => s.clone(),
        Value::Boolean(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Value::Empty => String::new(),
        Value::Error(e) => e.code.literal().to_string(),
        Value::Range(range) => range.cells().map(to_text).collect::<Vec<_>>().join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorCode, Range};

    #[test]
    fn numeric_text() {
        assert_eq!(parse_numeric_text("42"), Some(42.0));
        assert_eq!(parse_numeric_text(" -1.5 "), Some(-1.5));
        assert_eq!(parse_numeric_text("+.5"), Some(0.5));
        assert_eq!(parse_numeric_text("1e3"), Some(1000.0));
        assert_eq!(parse_numeric_text("2."), Some(2.0));
        assert_eq!(parse_numeric_text(""), None);
        assert_eq!(parse_numeric_text("   "), None);
        assert_eq!(parse_numeric_text("abc"), None);
        assert_eq!(parse_numeric_text("1,000"), None);
        assert_eq!(parse_numeric_text("12abc"), None);
        assert_eq!(parse_numeric_text("inf"), None);
        assert_eq!(parse_numeric_text("NaN"), None);
        assert_eq!(parse_numeric_text("."), None);
    }

    #[test]
    fn coerce_scalars() {
        assert_eq!(to_number(&Value::Empty, false), Ok(0.0));
        assert_eq!(to_number(&Value::Boolean(true), false), Ok(1.0));
        assert_eq!(to_number(&Value::Boolean(false), false), Ok(0.0));
        assert_eq!(to_number(&Value::from("7"), false), Ok(7.0));
        assert_eq!(
            to_number(&Value::from("seven"), false).map_err(|e| e.code),
            Err(ErrorCode::Value)
        );
        assert_eq!(
            to_number(&Value::from(ErrorCode::Na), false).map_err(|e| e.code),
            Err(ErrorCode::Na)
        );
    }

    #[test]
    fn coerce_ranges() {
        let range = Value::Range(
            Range::new(vec![vec![Value::from("3"), Value::Number(9.0)]]).unwrap(),
        );
        assert_eq!(to_number(&range, true), Ok(3.0));
        assert_eq!(
            to_number(&range, false).map_err(|e| e.code),
            Err(ErrorCode::Value)
        );
    }

    #[test]
    fn render_numbers() {
        assert_eq!(number_to_text(1.0), "1");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(2.5), "2.5");
        assert_eq!(number_to_text(-12.25), "-12.25");
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e-7), "1.5e-7");
        assert_eq!(number_to_text(0.000001), "0.000001");
    }

    #[test]
    fn render_values() {
        assert_eq!(to_text(&Value::Boolean(true)), "TRUE");
        assert_eq!(to_text(&Value::Empty), "");
        assert_eq!(to_text(&Value::from(ErrorCode::Div0)), "#DIV/0!");
        let range = Value::Range(
            Range::new(vec![
                vec![Value::Number(1.0), Value::Empty],
                vec![Value::Boolean(false), Value::from("x")],
            ])
            .unwrap(),
        );
        assert_eq!(to_text(&range), "1,,FALSE,x");
    }

    #[test]
    fn ranks() {
        assert!(type_rank(&Value::Number(9.0)) < type_rank(&Value::from("a")));
        assert!(type_rank(&Value::from("a")) < type_rank(&Value::Boolean(false)));
        assert_eq!(type_rank(&Value::Empty), type_rank(&Value::Number(0.0)));
    }
}
