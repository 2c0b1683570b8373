//! Typed SQL expression nodes and the textual operator surface.

pub mod cmp;
pub mod column;
pub mod concat;
pub mod like;
pub mod literal;
pub mod ops;

pub use self::cmp::{CompareOp, Comparison, InList, IsNull};
pub use self::column::{Column, MultiColumn, TextColumn};
pub use self::concat::Concat;
pub use self::like::Like;
pub use self::literal::{Placeholder, TextLiteral};
pub use self::ops::TextOps;

use crate::types::{SqlType, TextType};

/// A typed SQL expression node.
pub trait Expression {
    /// The SQL type identity this expression carries.
    type SqlType: SqlType;
}

/// Marker for expressions that yield exactly one scalar value.
///
/// Multi-value expressions (such as [`MultiColumn`]) do not implement this,
/// which keeps them out of the scalar operator surface at compile time.
pub trait SingleValue: Expression {}

/// Conversion of an operand into a textual single-value expression.
///
/// This is the operand constraint of the operator surface: native strings
/// wrap into a [`TextLiteral`], textual expression nodes pass through
/// unchanged, and everything else is rejected at compile time.
///
/// ```compile_fail
/// use sqltext::prelude::*;
///
/// let name: TextColumn = Column::new("users", "name");
/// let _ = name.concat(42); // i32 is not a textual operand
/// ```
pub trait AsTextExpression {
    /// The expression the operand coerces to.
    type Expression: Expression<SqlType: TextType> + SingleValue;

    fn as_text_expression(self) -> Self::Expression;
}

impl AsTextExpression for &str {
    type Expression = TextLiteral;

    fn as_text_expression(self) -> TextLiteral {
        TextLiteral::new(self)
    }
}

impl AsTextExpression for String {
    type Expression = TextLiteral;

    fn as_text_expression(self) -> TextLiteral {
        TextLiteral::new(self)
    }
}

impl AsTextExpression for &String {
    type Expression = TextLiteral;

    fn as_text_expression(self) -> TextLiteral {
        TextLiteral::new(self.clone())
    }
}
