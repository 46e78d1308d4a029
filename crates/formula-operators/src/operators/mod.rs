//! Operator catalogue and the per-family evaluators.

pub mod arithmetic;
pub mod comparison;
pub mod concat;
pub mod postfix;
pub mod prefix;
pub mod range;

use crate::error::OperatorError;
use std::fmt;
use std::str::FromStr;

pub const COMPARE_OPS: [&str; 6] = ["<", ">", "=", "<>", "<=", ">="];
pub const CONCAT_OPS: [&str; 1] = ["&"];
pub const MATH_OPS: [&str; 5] = ["+", "-", "*", "/", "^"];

/// Which evaluator an infix token routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixFamily {
    Compare,
    Concat,
    Math,
}

/// Routes a raw infix token to its family, or `None` if it is not an infix
/// operator.
pub fn infix_family(token: &str) -> Option<InfixFamily> {
    token.parse::<InfixOp>().ok().map(InfixOp::family)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Plus,
    Minus,
}

impl FromStr for PrefixOp {
    type Err = OperatorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "+" => Ok(PrefixOp::Plus),
            "-" => Ok(PrefixOp::Minus),
            _ => Err(OperatorError::UnknownPrefix(token.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Percent,
}

impl FromStr for PostfixOp {
    type Err = OperatorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "%" => Ok(PostfixOp::Percent),
            _ => Err(OperatorError::UnknownPostfix(token.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Ne,
    Le,
    Ge,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ne => "<>",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl MathOp {
    pub fn as_str(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Compare(CompareOp),
    Concat,
    Math(MathOp),
}

impl InfixOp {
    pub fn family(self) -> InfixFamily {
        match self {
            InfixOp::Compare(_) => InfixFamily::Compare,
            InfixOp::Concat => InfixFamily::Concat,
            InfixOp::Math(_) => InfixFamily::Math,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Compare(op) => op.as_str(),
            InfixOp::Concat => "&",
            InfixOp::Math(op) => op.as_str(),
        }
    }
}

impl FromStr for InfixOp {
    type Err = OperatorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let op = match token {
            "=" => InfixOp::Compare(CompareOp::Eq),
            ">" => InfixOp::Compare(CompareOp::Gt),
            "<" => InfixOp::Compare(CompareOp::Lt),
            "<>" => InfixOp::Compare(CompareOp::Ne),
            "<=" => InfixOp::Compare(CompareOp::Le),
            ">=" => InfixOp::Compare(CompareOp::Ge),
            "&" => InfixOp::Concat,
            "+" => InfixOp::Math(MathOp::Add),
            "-" => InfixOp::Math(MathOp::Sub),
            "*" => InfixOp::Math(MathOp::Mul),
            "/" => InfixOp::Math(MathOp::Div),
            "^" => InfixOp::Math(MathOp::Pow),
            _ => return Err(OperatorError::UnknownInfix(token.to_string())),
        };
        Ok(op)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
