//! Comparison and null-test nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{Expression, SingleValue};
use crate::types::{Boolean, TextType};

/// Comparison operators available on textual expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "="),
            CompareOp::Ne => write!(f, "!="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Le => write!(f, "<="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Ge => write!(f, ">="),
        }
    }
}

/// Binary comparison between two textual operands, rendered as
/// `lhs op rhs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison<L, R> {
    pub op: CompareOp,
    pub lhs: L,
    pub rhs: R,
}

impl<L, R> Comparison<L, R> {
    pub fn new(op: CompareOp, lhs: L, rhs: R) -> Self {
        Self { op, lhs, rhs }
    }
}

impl<L, R> Expression for Comparison<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
    type SqlType = Boolean;
}

impl<L, R> SingleValue for Comparison<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Comparison<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// Membership test against a list of textual operands, rendered as
/// `lhs IN (a, b, ...)` or `lhs NOT IN (a, b, ...)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InList<L, R> {
    pub lhs: L,
    pub rhs: Vec<R>,
    pub negated: bool,
}

impl<L, R> InList<L, R> {
    pub fn new(lhs: L, rhs: Vec<R>, negated: bool) -> Self {
        Self { lhs, rhs, negated }
    }
}

impl<L, R> Expression for InList<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
    type SqlType = Boolean;
}

impl<L, R> SingleValue for InList<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for InList<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (", self.lhs, if self.negated { "NOT IN" } else { "IN" })?;
        for (i, item) in self.rhs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

/// Null test, rendered as `expr IS NULL` or `expr IS NOT NULL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsNull<E> {
    pub expr: E,
    pub negated: bool,
}

impl<E> IsNull<E> {
    pub fn new(expr: E, negated: bool) -> Self {
        Self { expr, negated }
    }
}

impl<E> Expression for IsNull<E>
where
    E: Expression + SingleValue,
    E::SqlType: TextType,
{
    type SqlType = Boolean;
}

impl<E> SingleValue for IsNull<E>
where
    E: Expression + SingleValue,
    E::SqlType: TextType,
{
}

impl<E: fmt::Display> fmt::Display for IsNull<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.expr,
            if self.negated { "IS NOT NULL" } else { "IS NULL" }
        )
    }
}
