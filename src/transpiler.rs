//! SQL rendering for expression nodes.

use std::fmt;

use crate::expr::Expression;

/// Trait for converting expression nodes to SQL fragments.
pub trait ToSql {
    /// Render this node as a SQL fragment.
    fn to_sql(&self) -> String;
}

impl<T: Expression + fmt::Display> ToSql for T {
    fn to_sql(&self) -> String {
        self.to_string()
    }
}
