//! The percent operator written after an operand.

use super::PostfixOp;
use crate::types::{FormulaError, Value};
use crate::util;

pub fn apply(operand: &Value, op: PostfixOp, is_single_cell_range: bool) -> Value {
    let n = match util::to_number(operand, is_single_cell_range) {
        Ok(n) => n,
        Err(e) => return Value::Error(e),
    };
    match op {
        PostfixOp::Percent if n.is_nan() => Value::Error(FormulaError::value()),
        PostfixOp::Percent => Value::Number(n / 100.0),
    }
}
