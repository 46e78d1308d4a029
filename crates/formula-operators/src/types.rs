use crate::error::OperatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Spreadsheet error codes, serialized as their cell literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "#NULL!")]
    Null,
    #[serde(rename = "#DIV/0!")]
    Div0,
    #[serde(rename = "#VALUE!")]
    Value,
    #[serde(rename = "#REF!")]
    Ref,
    #[serde(rename = "#NAME?")]
    Name,
    #[serde(rename = "#NUM!")]
    Num,
    #[serde(rename = "#N/A")]
    Na,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::Null,
        ErrorCode::Div0,
        ErrorCode::Value,
        ErrorCode::Ref,
        ErrorCode::Name,
        ErrorCode::Num,
        ErrorCode::Na,
    ];

    /// The literal a spreadsheet shows in the cell, e.g. `#DIV/0!`.
    pub fn literal(self) -> &'static str {
        match self {
            ErrorCode::Null => "#NULL!",
            ErrorCode::Div0 => "#DIV/0!",
            ErrorCode::Value => "#VALUE!",
            ErrorCode::Ref => "#REF!",
            ErrorCode::Name => "#NAME?",
            ErrorCode::Num => "#NUM!",
            ErrorCode::Na => "#N/A",
        }
    }

    pub fn from_literal(literal: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|code| code.literal() == literal)
    }

    fn default_message(self) -> &'static str {
        match self {
            ErrorCode::Null => "The ranges do not intersect.",
            ErrorCode::Div0 => "The formula divides by zero.",
            ErrorCode::Value => "A value has the wrong type for the operation.",
            ErrorCode::Ref => "The formula refers to a cell that is not valid.",
            ErrorCode::Name => "The formula contains unrecognized text.",
            ErrorCode::Num => "The formula produced a number that is not valid.",
            ErrorCode::Na => "A value is not available to the formula or function.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// A typed spreadsheet error carried as a cell value.
///
/// Equality only looks at the code: two `#N/A` errors are the same value
/// whatever their messages say.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct FormulaError {
    pub code: ErrorCode,
    pub message: String,
}

impl FormulaError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        FormulaError {
            code,
            message: message.into(),
        }
    }

    pub fn value() -> Self {
        ErrorCode::Value.into()
    }

    pub fn div0() -> Self {
        ErrorCode::Div0.into()
    }

    pub fn na() -> Self {
        ErrorCode::Na.into()
    }

    pub fn num() -> Self {
        ErrorCode::Num.into()
    }
}

impl From<ErrorCode> for FormulaError {
    fn from(code: ErrorCode) -> Self {
        FormulaError::new(code, code.default_message())
    }
}

impl PartialEq for FormulaError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

/// A resolved operand or result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    /// A blank cell. Not zero and not `""` until an operator coerces it.
    Empty,
    Range(Range),
    Error(FormulaError),
}

impl Value {
    pub fn is_range(&self) -> bool {
        matches!(self, Value::Range(_))
    }

    pub fn as_error(&self) -> Option<&FormulaError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Builds a value from a JSON literal.
    ///
    /// `null` is a blank cell, an array of arrays is a range and a flat
    /// array is a single-row range. Strings are always text, including ones
    /// that spell an error literal.
    pub fn from_json(json: &serde_json::Value) -> Result<Value, OperatorError> {
        use serde_json::Value as Json;
        match json {
            Json::Null => Ok(Value::Empty),
            Json::Bool(b) => Ok(Value::Boolean(*b)),
            Json::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
            Json::String(s) => Ok(Value::Text(s.clone())),
            Json::Array(items) => {
                let rows = match items.iter().map(Json::as_array).collect::<Option<Vec<_>>>() {
                    Some(rows) => rows
                        .into_iter()
                        .map(|cells| cells.iter().map(Value::from_json).collect())
                        .collect::<Result<Vec<Vec<Value>>, _>>()?,
                    None => vec![items
                        .iter()
                        .map(Value::from_json)
                        .collect::<Result<Vec<Value>, _>>()?],
                };
                Range::new(rows).map(Value::Range)
            }
            Json::Object(_) => Err(OperatorError::UnsupportedJson(json.to_string())),
        }
    }

    /// Renders the value as JSON. Errors become their literal string and
    /// non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::Text(s) => Json::String(s.clone()),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Empty => Json::Null,
            Value::Range(range) => Json::Array(
                range
                    .rows()
                    .iter()
                    .map(|row| Json::Array(row.iter().map(Value::to_json).collect()))
                    .collect(),
            ),
            Value::Error(e) => Json::String(e.code.literal().to_string()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<FormulaError> for Value {
    fn from(e: FormulaError) -> Self {
        Value::Error(e)
    }
}

impl From<ErrorCode> for Value {
    fn from(code: ErrorCode) -> Self {
        Value::Error(code.into())
    }
}

impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Value::Range(range)
    }
}

/// A rectangular, row-major grid of cell values.
///
/// Always at least 1x1, every row has the same width and no cell is itself
/// a range.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    rows: Vec<Vec<Value>>,
}

impl Range {
    pub fn new(rows: Vec<Vec<Value>>) -> Result<Range, OperatorError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(OperatorError::MalformedRange("range is empty".to_string())),
        };
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(OperatorError::MalformedRange(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            if row.iter().any(Value::is_range) {
                return Err(OperatorError::MalformedRange(format!(
                    "row {} contains a nested range",
                    i
                )));
            }
        }
        Ok(Range { rows })
    }

    /// Builds a `height` x `width` grid from a cell generator.
    ///
    /// Callers guarantee non-zero dimensions and that `f` never yields a
    /// range.
    pub(crate) fn from_fn<F>(height: usize, width: usize, mut f: F) -> Range
    where
        F: FnMut(usize, usize) -> Value,
    {
        debug_assert!(height > 0 && width > 0);
        let rows = (0..height)
            .map(|row| (0..width).map(|col| f(row, col)).collect())
            .collect();
        Range { rows }
    }

    /// Like [`Range::from_fn`], stopping at the first cell that fails.
    pub(crate) fn try_from_fn<F, E>(height: usize, width: usize, mut f: F) -> Result<Range, E>
    where
        F: FnMut(usize, usize) -> Result<Value, E>,
    {
        debug_assert!(height > 0 && width > 0);
        let rows = (0..height)
            .map(|row| (0..width).map(|col| f(row, col)).collect())
            .collect::<Result<Vec<Vec<Value>>, E>>()?;
        Ok(Range { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn top_left(&self) -> &Value {
        &self.rows[0][0]
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Value> {
        self.rows.iter().flatten()
    }

    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }
}
