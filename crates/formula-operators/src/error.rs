use thiserror::Error;

/// Faults raised by malformed calls into the operator layer.
///
/// These never describe user data: a blank cell, bad text or a division by
/// zero come back as [`crate::Value::Error`] inside `Ok`. An `OperatorError`
/// means the tokenizer or the value provider handed over something it
/// guarantees it never produces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Unrecognized prefix: {0}")]
    UnknownPrefix(String),

    #[error("Unrecognized postfix: {0}")]
    UnknownPostfix(String),

    #[error("Unrecognized infix: {0}")]
    UnknownInfix(String),

    #[error("\"{0}\" has no comparison semantics")]
    NotComparison(String),

    #[error("Malformed range: {0}")]
    MalformedRange(String),

    #[error("Unsupported JSON cell value: {0}")]
    UnsupportedJson(String),
}
