//! String concatenation nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{AsTextExpression, Expression, SingleValue};
use crate::types::{Text, TextType};

/// Concatenation of two textual operands, rendered as `(lhs || rhs)`.
///
/// The node is itself a textual single-value expression, so concatenations
/// chain and nest left-associatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concat<L, R> {
    pub lhs: L,
    pub rhs: R,
}

impl<L, R> Concat<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Expression for Concat<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
    type SqlType = Text;
}

impl<L, R> SingleValue for Concat<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
}

impl<L, R> AsTextExpression for Concat<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
    type Expression = Self;

    fn as_text_expression(self) -> Self {
        self
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Concat<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} || {})", self.lhs, self.rhs)
    }
}
