//! The `&` operator.

use crate::types::Value;
use crate::util;

/// Joins the textual renderings of both operands.
///
/// Unlike comparison and arithmetic, error operands do not short-circuit:
/// they are rendered as their literal like any other value.
pub fn concat(
    left: &Value,
    right: &Value,
    left_is_single_cell_range: bool,
    right_is_single_cell_range: bool,
) -> Value {
    let left = util::reduce(left, left_is_single_cell_range);
    let right = util::reduce(right, right_is_single_cell_range);
    let mut text = util::to_text(left);
    text.push_str(&util::to_text(right));
    Value::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorCode, Range};

    fn join(left: Value, right: Value) -> Value {
        concat(&left, &right, false, false)
    }

    #[test]
    fn renders_each_type() {
        assert_eq!(join("a".into(), "b".into()), Value::from("ab"));
        assert_eq!(join(1.0.into(), 2.5.into()), Value::from("12.5"));
        assert_eq!(join(true.into(), false.into()), Value::from("TRUEFALSE"));
        assert_eq!(join(Value::Empty, "x".into()), Value::from("x"));
        assert_eq!(join(Value::Empty, Value::Empty), Value::from(""));
    }

    #[test]
    fn errors_are_rendered() {
        assert_eq!(join(ErrorCode::Na.into(), "x".into()), Value::from("#N/A"));
        assert_eq!(join("x".into(), ErrorCode::Div0.into()), Value::from("x#DIV/0!"));
    }

    #[test]
    fn ranges() {
        let range = Value::Range(
            Range::new(vec![vec!["a".into(), 1.0.into()], vec![true.into(), Value::Empty]])
                .unwrap(),
        );
        assert_eq!(concat(&range, &"!".into(), true, false), Value::from("a!"));
        assert_eq!(concat(&range, &"!".into(), false, false), Value::from("a,1,TRUE,!"));
    }
}
