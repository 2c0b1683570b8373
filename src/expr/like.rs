//! Pattern-match nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{Expression, SingleValue};
use crate::types::{Boolean, TextType};

/// Pattern match of a textual operand, rendered as `lhs LIKE rhs`.
///
/// The node is a boolean-valued predicate, not a textual expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like<L, R> {
    pub lhs: L,
    pub rhs: R,
}

impl<L, R> Like<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Expression for Like<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
    type SqlType = Boolean;
}

impl<L, R> SingleValue for Like<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
{
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Like<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} LIKE {}", self.lhs, self.rhs)
    }
}
