//! Typed column references.

use std::fmt;
use std::marker::PhantomData;

use crate::expr::{AsTextExpression, Expression, SingleValue};
use crate::types::{SqlType, Text, TextType};

/// A column reference with compile-time type information.
///
/// The type parameter is the column's SQL type tag, so a `Column<Text>`
/// participates in the textual operator surface while a column of any other
/// tag does not.
#[derive(Debug, Clone, Copy)]
pub struct Column<T> {
    table: &'static str,
    name: &'static str,
    _marker: PhantomData<T>,
}

/// The common case.
pub type TextColumn = Column<Text>;

impl<T> Column<T> {
    /// Create a new column reference.
    pub const fn new(table: &'static str, name: &'static str) -> Self {
        Self {
            table,
            name,
            _marker: PhantomData,
        }
    }

    /// Get the table name.
    pub const fn table(&self) -> &'static str {
        self.table
    }

    /// Get the column name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the qualified name (table.column).
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }
}

impl<T: SqlType> Expression for Column<T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValue for Column<T> {}

impl<T: TextType> AsTextExpression for Column<T> {
    type Expression = Self;

    fn as_text_expression(self) -> Self {
        self
    }
}

impl<T> fmt::Display for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

/// A select-list group of text columns.
///
/// Yields one value per column, so it is an expression but not a
/// [`SingleValue`]: the scalar operators refuse it as a left operand at
/// compile time.
///
/// ```compile_fail
/// use sqltext::prelude::*;
///
/// let names = MultiColumn::new(vec![
///     Column::new("users", "first"),
///     Column::new("users", "last"),
/// ]);
/// let _ = names.concat("!"); // multi-value left operand
/// ```
#[derive(Debug, Clone)]
pub struct MultiColumn {
    pub columns: Vec<TextColumn>,
}

impl MultiColumn {
    pub fn new(columns: Vec<TextColumn>) -> Self {
        Self { columns }
    }
}

impl Expression for MultiColumn {
    type SqlType = Text;
}

impl fmt::Display for MultiColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column)?;
        }
        Ok(())
    }
}
