//! Element-wise application of comparison and arithmetic operators over
//! ranges.
//!
//! Two ranges of different shapes are first aligned: a single column whose
//! height matches the other range is repeated across its width, a single
//! row whose width matches is repeated down its height, and whatever still
//! differs is padded with `#N/A` up to the larger size on each axis. Inputs
//! are never modified; every result is a freshly built range.
//!
//! A range against a scalar follows [`ScalarRangeMode`].

use super::arithmetic::math_cells;
use super::comparison::compare_cells;
use super::{CompareOp, MathOp};
use crate::error::OperatorError;
use crate::eval_ctx::{EvalCtx, ScalarRangeMode};
use crate::types::{FormulaError, Range, Value};
use crate::util;

/// The operator applied to each pair of aligned cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elementwise {
    Compare(CompareOp),
    Math(MathOp),
}

impl Elementwise {
    pub fn as_str(self) -> &'static str {
        match self {
            Elementwise::Compare(op) => op.as_str(),
            Elementwise::Math(op) => op.as_str(),
        }
    }

    fn apply(self, left: &Value, right: &Value) -> Value {
        match self {
            Elementwise::Compare(op) => compare_cells(left, op, right),
            Elementwise::Math(op) => math_cells(left, op, right),
        }
    }
}

/// How one range is read once stretched onto the common shape.
#[derive(Debug, Clone, Copy)]
struct Layout<'a> {
    range: &'a Range,
    height: usize,
    width: usize,
    repeat_row: bool,
    repeat_col: bool,
}

impl<'a> Layout<'a> {
    fn of(range: &'a Range) -> Self {
        Layout {
            range,
            height: range.height(),
            width: range.width(),
            repeat_row: false,
            repeat_col: false,
        }
    }

    /// The cell at a position of the common shape. `None` is padding.
    fn cell(&self, row: usize, col: usize) -> Option<&'a Value> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let row = if self.repeat_row { 0 } else { row };
        let col = if self.repeat_col { 0 } else { col };
        self.range.get(row, col)
    }
}

fn align<'a>(left: &'a Range, right: &'a Range) -> (Layout<'a>, Layout<'a>) {
    let mut l = Layout::of(left);
    let mut r = Layout::of(right);

    if l.width != r.width {
        if l.height == r.height {
            if l.width == 1 {
                l.repeat_col = true;
                l.width = r.width;
            } else if r.width == 1 {
                r.repeat_col = true;
                r.width = l.width;
            }
        }
    } else if l.height != r.height {
        if l.height == 1 {
            l.repeat_row = true;
            l.height = r.height;
        } else if r.height == 1 {
            r.repeat_row = true;
            r.height = l.height;
        }
    }
    (l, r)
}

/// The shape two ranges share once aligned, as `(height, width)`.
pub fn aligned_shape(left: &Range, right: &Range) -> (usize, usize) {
    let (l, r) = align(left, right);
    (l.height.max(r.height), l.width.max(r.width))
}

/// Aligns two ranges onto their common shape, returning new grids.
pub fn normalize(left: &Range, right: &Range) -> (Range, Range) {
    let (l, r) = align(left, right);
    let (height, width) = (l.height.max(r.height), l.width.max(r.width));
    let fill = |layout: &Layout<'_>| {
        Range::from_fn(height, width, |row, col| {
            layout
                .cell(row, col)
                .cloned()
                .unwrap_or_else(|| Value::Error(FormulaError::na()))
        })
    };
    (fill(&l), fill(&r))
}

fn zip(op: Elementwise, left: &Range, right: &Range) -> Range {
    let (l, r) = align(left, right);
    let (height, width) = (l.height.max(r.height), l.width.max(r.width));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = op.as_str(),
        left = ?(left.height(), left.width()),
        right = ?(right.height(), right.width()),
        result = ?(height, width),
        "broadcasting ranges"
    );

    let na = Value::Error(FormulaError::na());
    Range::from_fn(height, width, |row, col| {
        let a = l.cell(row, col).unwrap_or(&na);
        let b = r.cell(row, col).unwrap_or(&na);
        op.apply(a, b)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn against_scalar(
    ctx: &EvalCtx,
    op: Elementwise,
    range: &Range,
    scalar: &Value,
    side: Side,
) -> Result<Range, OperatorError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = op.as_str(),
        shape = ?(range.height(), range.width()),
        mode = ?ctx.options.scalar_range,
        "broadcasting scalar over range"
    );

    match ctx.options.scalar_range {
        // An error cell short-circuits before the operator is looked at, so
        // only a non-error cell under an arithmetic token fails.
        ScalarRangeMode::Compare => Range::try_from_fn(range.height(), range.width(), |row, col| {
            let cell = &range.rows()[row][col];
            match op {
                Elementwise::Compare(cmp) => Ok(compare_cells(cell, cmp, scalar)),
                Elementwise::Math(m) => match util::first_error(cell, scalar) {
                    Some(e) => Ok(Value::Error(e.clone())),
                    None => Err(OperatorError::NotComparison(m.as_str().to_string())),
                },
            }
        }),
        ScalarRangeMode::Elementwise => {
            Ok(Range::from_fn(range.height(), range.width(), |row, col| {
                let cell = &range.rows()[row][col];
                match side {
                    Side::Left => op.apply(cell, scalar),
                    Side::Right => op.apply(scalar, cell),
                }
            }))
        }
    }
}

/// Applies `op` element-wise when at least one operand is a range.
///
/// Each cell pair goes through the scalar form of the operator, which never
/// sees a range, so the recursion ends after one level.
pub fn broadcast(
    ctx: &EvalCtx,
    op: Elementwise,
    left: &Value,
    right: &Value,
) -> Result<Value, OperatorError> {
    let range = match (left, right) {
        (Value::Range(l), Value::Range(r)) => zip(op, l, r),
        (Value::Range(range), scalar) => against_scalar(ctx, op, range, scalar, Side::Left)?,
        (scalar, Value::Range(range)) => against_scalar(ctx, op, range, scalar, Side::Right)?,
        (l, r) => return Ok(op.apply(l, r)),
    };
    Ok(Value::Range(range))
}
