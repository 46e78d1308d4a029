use serde::{Deserialize, Serialize};

/// How an infix operator treats one range operand against one scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarRangeMode {
    /// Every cell is compared against the scalar, cell on the left, no
    /// matter which operator was asked for. Error cells pass through as
    /// they are; any other cell under an arithmetic token has no comparison
    /// meaning and fails with `OperatorError::NotComparison`.
    #[default]
    Compare,
    /// Every cell is combined with the scalar using the requested operator,
    /// keeping the operands in their written order.
    Elementwise,
}

/// Evaluation options, loadable from JSON. Missing fields take their
/// defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Behaviour of an infix operator with one range and one scalar operand.
    pub scalar_range: ScalarRangeMode,
}

/// The context every operator evaluates in.
///
/// Holds no per-evaluation state, so one context can serve any number of
/// evaluations.
#[derive(Debug, Clone, Default)]
pub struct EvalCtx {
    pub options: EvalOptions,
}

impl EvalCtx {
    pub fn new(options: EvalOptions) -> Self {
        EvalCtx { options }
    }

    pub fn with_scalar_range(mut self, mode: ScalarRangeMode) -> Self {
        self.options.scalar_range = mode;
        self
    }
}
