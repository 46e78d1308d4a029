//! Comparison operators: `=`, `<>`, `<`, `>`, `<=`, `>=`.

use super::range::{self, Elementwise};
use super::CompareOp;
use crate::error::OperatorError;
use crate::eval_ctx::EvalCtx;
use crate::types::Value;
use crate::util;
use std::cmp::Ordering;

fn holds<T: PartialOrd>(a: T, op: CompareOp, b: T) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
        CompareOp::Gt => a > b,
        CompareOp::Lt => a < b,
        CompareOp::Ge => a >= b,
        CompareOp::Le => a <= b,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Empty => Some(0.0),
        _ => None,
    }
}

/// Orders text by UTF-16 code units, the order formula strings sort in.
fn text_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Compares two cell values.
///
/// Errors short-circuit with the left one first. Same-typed values use their
/// natural order; mixed types never test equal and otherwise order by
/// [`util::type_rank`].
pub fn compare_cells(left: &Value, op: CompareOp, right: &Value) -> Value {
    if let Some(e) = util::first_error(left, right) {
        return Value::Error(e.clone());
    }
    let result = match (left, right) {
        (Value::Text(a), Value::Text(b)) => holds(text_order(a, b), op, Ordering::Equal),
        (Value::Boolean(a), Value::Boolean(b)) => holds(a, op, b),
        _ => match (as_number(left), as_number(right)) {
            (Some(a), Some(b)) => holds(a, op, b),
            _ => match op {
                CompareOp::Eq => false,
                CompareOp::Ne => true,
                _ => holds(util::type_rank(left), op, util::type_rank(right)),
            },
        },
    };
    Value::Boolean(result)
}

/// Evaluates a comparison between two operands, broadcasting over ranges.
pub fn compare(
    ctx: &EvalCtx,
    left: &Value,
    op: CompareOp,
    right: &Value,
    left_is_single_cell_range: bool,
    right_is_single_cell_range: bool,
) -> Result<Value, OperatorError> {
    if let Some(e) = util::first_error(left, right) {
        return Ok(Value::Error(e.clone()));
    }
    let left = util::reduce(left, left_is_single_cell_range);
    let right = util::reduce(right, right_is_single_cell_range);
    if let Some(e) = util::first_error(left, right) {
        return Ok(Value::Error(e.clone()));
    }
    if left.is_range() || right.is_range() {
        return range::broadcast(ctx, Elementwise::Compare(op), left, right);
    }
    Ok(compare_cells(left, op, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorCode, Range};

    fn cmp(left: Value, op: CompareOp, right: Value) -> Value {
        compare_cells(&left, op, &right)
    }

    #[test]
    fn same_type() {
        assert_eq!(cmp(5.0.into(), CompareOp::Eq, 5.0.into()), Value::Boolean(true));
        assert_eq!(cmp(2.0.into(), CompareOp::Lt, 3.0.into()), Value::Boolean(true));
        assert_eq!(cmp("b".into(), CompareOp::Gt, "a".into()), Value::Boolean(true));
        assert_eq!(cmp("a".into(), CompareOp::Eq, "A".into()), Value::Boolean(false));
        assert_eq!(cmp(true.into(), CompareOp::Gt, false.into()), Value::Boolean(true));
        assert_eq!(cmp(true.into(), CompareOp::Ne, true.into()), Value::Boolean(false));
    }

    #[test]
    fn text_orders_by_utf16_units() {
        // U+1F600 is a surrogate pair starting at 0xD83D, below U+FF5E.
        let (emoji, tilde) = (Value::from("\u{1F600}"), Value::from("\u{FF5E}"));
        assert_eq!(cmp(emoji.clone(), CompareOp::Lt, tilde.clone()), Value::Boolean(true));
        assert_eq!(cmp(tilde, CompareOp::Gt, emoji), Value::Boolean(true));
        assert_eq!(cmp("ab".into(), CompareOp::Lt, "abc".into()), Value::Boolean(true));
        assert_eq!(cmp("abc".into(), CompareOp::Ge, "abc".into()), Value::Boolean(true));
    }

    #[test]
    fn reduced_error_beats_range() {
        let ctx = EvalCtx::default();
        let hidden = Value::Range(Range::new(vec![vec![ErrorCode::Na.into()]]).unwrap());
        let other = Value::Range(Range::new(vec![vec![1.0.into(), 2.0.into()]]).unwrap());
        assert_eq!(
            compare(&ctx, &hidden, CompareOp::Eq, &other, true, false),
            Ok(Value::from(ErrorCode::Na))
        );
        assert_eq!(
            compare(&ctx, &other, CompareOp::Eq, &hidden, false, true),
            Ok(Value::from(ErrorCode::Na))
        );
    }

    #[test]
    fn blanks_compare_as_zero() {
        assert_eq!(cmp(Value::Empty, CompareOp::Eq, 0.0.into()), Value::Boolean(true));
        assert_eq!(cmp(Value::Empty, CompareOp::Lt, 1.0.into()), Value::Boolean(true));
        assert_eq!(cmp(Value::Empty, CompareOp::Eq, "".into()), Value::Boolean(false));
        assert_eq!(cmp(Value::Empty, CompareOp::Le, Value::Empty), Value::Boolean(true));
    }

    #[test]
    fn mixed_types_use_rank() {
        assert_eq!(cmp(5.0.into(), CompareOp::Eq, "5".into()), Value::Boolean(false));
        assert_eq!(cmp(5.0.into(), CompareOp::Ne, "5".into()), Value::Boolean(true));
        assert_eq!(cmp(true.into(), CompareOp::Gt, "x".into()), Value::Boolean(true));
        assert_eq!(cmp(1e9.into(), CompareOp::Lt, "".into()), Value::Boolean(true));
        assert_eq!(cmp("z".into(), CompareOp::Ge, false.into()), Value::Boolean(false));
        assert_eq!(cmp(false.into(), CompareOp::Ge, 100.0.into()), Value::Boolean(true));
    }

    #[test]
    fn left_error_wins() {
        assert_eq!(
            cmp(ErrorCode::Na.into(), CompareOp::Eq, ErrorCode::Div0.into()),
            Value::from(ErrorCode::Na)
        );
        assert_eq!(
            cmp(1.0.into(), CompareOp::Eq, ErrorCode::Div0.into()),
            Value::from(ErrorCode::Div0)
        );
    }
}
