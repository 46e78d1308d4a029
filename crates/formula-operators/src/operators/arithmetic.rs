//! Arithmetic operators: `+`, `-`, `*`, `/`, `^`.

use super::range::{self, Elementwise};
use super::MathOp;
use crate::error::OperatorError;
use crate::eval_ctx::EvalCtx;
use crate::types::{FormulaError, Value};
use crate::util;

/// Applies an arithmetic operator to two cell values.
///
/// Errors short-circuit with the left one first, then both sides are
/// coerced to numbers. Dividing by zero, and raising zero to a negative
/// power, is `#DIV/0!`; any other non-finite result is `#NUM!`.
pub fn math_cells(left: &Value, op: MathOp, right: &Value) -> Value {
    apply(left, op, right, false, false)
}

fn apply(
    left: &Value,
    op: MathOp,
    right: &Value,
    left_is_single_cell_range: bool,
    right_is_single_cell_range: bool,
) -> Value {
    if let Some(e) = util::first_error(left, right) {
        return Value::Error(e.clone());
    }
    let a = util::to_number(left, left_is_single_cell_range);
    let b = util::to_number(right, right_is_single_cell_range);
    let (a, b) = match (a, b) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return Value::Error(FormulaError::value()),
    };
    match op {
        MathOp::Add => util::number_result(a + b),
        MathOp::Sub => util::number_result(a - b),
        MathOp::Mul => util::number_result(a * b),
        MathOp::Div if b == 0.0 => Value::Error(FormulaError::div0()),
        MathOp::Div => util::number_result(a / b),
        MathOp::Pow if a == 0.0 && b < 0.0 => Value::Error(FormulaError::div0()),
        MathOp::Pow => util::number_result(a.powf(b)),
    }
}

/// Evaluates an arithmetic operator over two operands, broadcasting over
/// ranges.
///
/// Any range operand broadcasts, flagged or not. The single-cell flags only
/// matter when a scalar is coerced.
pub fn math(
    ctx: &EvalCtx,
    left: &Value,
    op: MathOp,
    right: &Value,
    left_is_single_cell_range: bool,
    right_is_single_cell_range: bool,
) -> Result<Value, OperatorError> {
    if let Some(e) = util::first_error(left, right) {
        return Ok(Value::Error(e.clone()));
    }
    if left.is_range() || right.is_range() {
        return range::broadcast(ctx, Elementwise::Math(op), left, right);
    }
    Ok(apply(
        left,
        op,
        right,
        left_is_single_cell_range,
        right_is_single_cell_range,
    ))
}
