//! Entry points used by the formula driver.
//!
//! Tokens arrive as the raw strings the tokenizer produced. A token outside
//! the operator catalogue is an integration fault and comes back as `Err`;
//! every user-data problem is an `Ok(Value::Error(..))`.

use crate::error::OperatorError;
use crate::eval_ctx::EvalCtx;
use crate::operators::{arithmetic, comparison, concat, postfix, prefix};
use crate::operators::{InfixOp, PostfixOp, PrefixOp};
use crate::types::Value;

fn parse_token<T>(token: &str) -> Result<T, OperatorError>
where
    T: std::str::FromStr<Err = OperatorError>,
{
    token.parse::<T>().map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(token, error = %e, "rejected operator token");
        e
    })
}

impl EvalCtx {
    /// Applies a run of `+`/`-` sign tokens to an operand.
    pub fn apply_prefix<S: AsRef<str>>(
        &self,
        signs: &[S],
        operand: &Value,
        is_single_cell_range: bool,
    ) -> Result<Value, OperatorError> {
        let signs = signs
            .iter()
            .map(|s| parse_token::<PrefixOp>(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(prefix::apply(&signs, operand, is_single_cell_range))
    }

    /// Applies the `%` token to an operand.
    pub fn apply_postfix(
        &self,
        operand: &Value,
        token: &str,
        is_single_cell_range: bool,
    ) -> Result<Value, OperatorError> {
        let op = parse_token::<PostfixOp>(token)?;
        Ok(postfix::apply(operand, op, is_single_cell_range))
    }

    /// Applies a comparison, concatenation or arithmetic token to two
    /// operands.
    pub fn apply_infix(
        &self,
        left: &Value,
        token: &str,
        right: &Value,
        left_is_single_cell_range: bool,
        right_is_single_cell_range: bool,
    ) -> Result<Value, OperatorError> {
        match parse_token::<InfixOp>(token)? {
            InfixOp::Compare(op) => comparison::compare(
                self,
                left,
                op,
                right,
                left_is_single_cell_range,
                right_is_single_cell_range,
            ),
            InfixOp::Concat => Ok(concat::concat(
                left,
                right,
                left_is_single_cell_range,
                right_is_single_cell_range,
            )),
            InfixOp::Math(op) => arithmetic::math(
                self,
                left,
                op,
                right,
                left_is_single_cell_range,
                right_is_single_cell_range,
            ),
        }
    }
}

/// [`EvalCtx::apply_prefix`] with default options.
pub fn apply_prefix<S: AsRef<str>>(
    signs: &[S],
    operand: &Value,
    is_single_cell_range: bool,
) -> Result<Value, OperatorError> {
    EvalCtx::default().apply_prefix(signs, operand, is_single_cell_range)
}

/// [`EvalCtx::apply_postfix`] with default options.
pub fn apply_postfix(
    operand: &Value,
    token: &str,
    is_single_cell_range: bool,
) -> Result<Value, OperatorError> {
    EvalCtx::default().apply_postfix(operand, token, is_single_cell_range)
}

/// [`EvalCtx::apply_infix`] with default options.
pub fn apply_infix(
    left: &Value,
    token: &str,
    right: &Value,
    left_is_single_cell_range: bool,
    right_is_single_cell_range: bool,
) -> Result<Value, OperatorError> {
    EvalCtx::default().apply_infix(
        left,
        token,
        right,
        left_is_single_cell_range,
        right_is_single_cell_range,
    )
}
