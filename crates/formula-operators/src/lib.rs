//! Operator evaluation for spreadsheet formulas.
//!
//! # Overview
//!
//! Given operator tokens from the tokenizer and operands already resolved to
//! values, this crate computes what a spreadsheet shows: sign and percent
//! unary operators, and comparison, concatenation and arithmetic binary
//! operators, including element-wise application across ranges of
//! different shapes.
//!
//! Spreadsheet errors such as `#DIV/0!` are ordinary [`Value::Error`]
//! results. `Err` is reserved for [`OperatorError`], which signals a token
//! or operand no well-behaved caller produces.
//!
//! # Example
//!
//! ```
//! use formula_operators::{apply_infix, apply_prefix, ErrorCode, Value};
//! use serde_json::json;
//!
//! let result = apply_infix(&Value::Number(5.0), "/", &Value::Number(2.0), false, false).unwrap();
//! assert_eq!(result, Value::Number(2.5));
//!
//! let result = apply_infix(&Value::Number(5.0), "/", &Value::Empty, false, false).unwrap();
//! assert_eq!(result, Value::from(ErrorCode::Div0));
//!
//! let column = Value::from_json(&json!([[1], [2]])).unwrap();
//! let grid = Value::from_json(&json!([[3, 3, 3], [4, 4, 4]])).unwrap();
//! let result = apply_infix(&column, "+", &grid, false, false).unwrap();
//! assert_eq!(result, Value::from_json(&json!([[4, 4, 4], [6, 6, 6]])).unwrap());
//!
//! assert_eq!(apply_prefix(&["-", "-"], &Value::Number(5.0), false).unwrap(), Value::Number(5.0));
//! ```

pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod types;
pub mod util;

// Re-export the core public API
pub use error::OperatorError;
pub use eval_ctx::{EvalCtx, EvalOptions, ScalarRangeMode};
pub use evaluate::{apply_infix, apply_postfix, apply_prefix};
pub use operators::{
    infix_family, CompareOp, InfixFamily, InfixOp, MathOp, PostfixOp, PrefixOp, COMPARE_OPS,
    CONCAT_OPS, MATH_OPS,
};
pub use types::{ErrorCode, FormulaError, Range, Value};
