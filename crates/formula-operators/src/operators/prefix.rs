//! Unary sign operators written in front of an operand.

use super::PrefixOp;
use crate::types::{ErrorCode, FormulaError, Value};
use crate::util;

/// Folds a run of `+`/`-` tokens into one sign. `true` means negative.
pub fn net_negative(signs: &[PrefixOp]) -> bool {
    signs.iter().filter(|op| **op == PrefixOp::Minus).count() % 2 == 1
}

/// Applies stacked sign tokens to an operand.
///
/// A positive net sign hands the operand back untouched, so `+"abc"` stays
/// text. Only a negative sign coerces to a number.
pub fn apply(signs: &[PrefixOp], operand: &Value, is_single_cell_range: bool) -> Value {
    if let Value::Empty = operand {
        return Value::Number(if net_negative(signs) { -0.0 } else { 0.0 });
    }
    if !net_negative(signs) {
        return operand.clone();
    }

    let n = match util::to_number(operand, is_single_cell_range) {
        Ok(n) => n,
        // Last resort for ranges: negate whatever sits in the top-left cell.
        Err(e) if e.code == ErrorCode::Value => match operand {
            Value::Range(range) => match util::to_number(range.top_left(), false) {
                Ok(n) => n,
                Err(_) => return Value::Error(FormulaError::value()),
            },
            _ => return Value::Error(e),
        },
        Err(_) => return Value::Error(FormulaError::value()),
    };
    if n.is_nan() {
        return Value::Error(FormulaError::value());
    }
    Value::Number(-n)
}
