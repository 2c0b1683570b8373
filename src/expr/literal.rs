//! Textual expression leaves: literals and placeholders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{AsTextExpression, Expression, SingleValue};
use crate::types::Text;

/// A quoted string literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLiteral {
    pub value: String,
}

impl TextLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Expression for TextLiteral {
    type SqlType = Text;
}

impl SingleValue for TextLiteral {}

impl AsTextExpression for TextLiteral {
    type Expression = Self;

    fn as_text_expression(self) -> Self {
        self
    }
}

impl fmt::Display for TextLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // embedded quotes are doubled
        write!(f, "'{}'", self.value.replace('\'', "''"))
    }
}

/// A positional parameter reference ($1, $2, etc.).
///
/// The value itself lives in a [`TextParameter`](crate::param::TextParameter)
/// cell bound at the same position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placeholder {
    pub index: usize,
}

impl Placeholder {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Expression for Placeholder {
    type SqlType = Text;
}

impl SingleValue for Placeholder {}

impl AsTextExpression for Placeholder {
    type Expression = Self;

    fn as_text_expression(self) -> Self {
        self
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_quoted() {
        assert_eq!(TextLiteral::new("Herb").to_string(), "'Herb'");
    }

    #[test]
    fn test_literal_doubles_embedded_quotes() {
        assert_eq!(TextLiteral::new("O'Brien").to_string(), "'O''Brien'");
    }

    #[test]
    fn test_placeholder_display() {
        assert_eq!(Placeholder::new(3).to_string(), "$3");
    }
}
