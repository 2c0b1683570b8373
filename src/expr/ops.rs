//! The scalar operator surface for textual expressions.

use std::ops::Add;

use crate::expr::cmp::{CompareOp, Comparison, InList, IsNull};
use crate::expr::column::Column;
use crate::expr::concat::Concat;
use crate::expr::like::Like;
use crate::expr::literal::{Placeholder, TextLiteral};
use crate::expr::{AsTextExpression, Expression, SingleValue};
use crate::types::TextType;

/// Operators attachable to any single-value expression carrying the textual
/// type identity.
///
/// Operand compatibility is checked entirely at compile time: the right
/// operand must coerce through [`AsTextExpression`], and a multi-value left
/// operand has no `TextOps` impl at all, so a malformed expression never
/// reaches serialization or the driver.
///
/// ```compile_fail
/// use sqltext::prelude::*;
///
/// let names = MultiColumn::new(vec![Column::new("users", "name")]);
/// let _ = names.like("A%"); // multi-value left operand
/// ```
pub trait TextOps: Expression + SingleValue + Sized
where
    Self::SqlType: TextType,
{
    /// `(self || rhs)`
    fn concat<R: AsTextExpression>(self, rhs: R) -> Concat<Self, R::Expression> {
        Concat::new(self, rhs.as_text_expression())
    }

    /// `self LIKE rhs`
    fn like<R: AsTextExpression>(self, rhs: R) -> Like<Self, R::Expression> {
        Like::new(self, rhs.as_text_expression())
    }

    /// `self = rhs`
    fn eq<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Eq, self, rhs.as_text_expression())
    }

    /// `self != rhs`
    fn ne<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Ne, self, rhs.as_text_expression())
    }

    /// `self < rhs`
    fn lt<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Lt, self, rhs.as_text_expression())
    }

    /// `self <= rhs`
    fn le<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Le, self, rhs.as_text_expression())
    }

    /// `self > rhs`
    fn gt<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Gt, self, rhs.as_text_expression())
    }

    /// `self >= rhs`
    fn ge<R: AsTextExpression>(self, rhs: R) -> Comparison<Self, R::Expression> {
        Comparison::new(CompareOp::Ge, self, rhs.as_text_expression())
    }

    /// `self IN (values...)`
    fn in_list<R: AsTextExpression>(
        self,
        values: impl IntoIterator<Item = R>,
    ) -> InList<Self, R::Expression> {
        let rhs = values
            .into_iter()
            .map(AsTextExpression::as_text_expression)
            .collect();
        InList::new(self, rhs, false)
    }

    /// `self NOT IN (values...)`
    fn not_in_list<R: AsTextExpression>(
        self,
        values: impl IntoIterator<Item = R>,
    ) -> InList<Self, R::Expression> {
        let rhs = values
            .into_iter()
            .map(AsTextExpression::as_text_expression)
            .collect();
        InList::new(self, rhs, true)
    }

    /// `self IS NULL`
    fn is_null(self) -> IsNull<Self> {
        IsNull::new(self, false)
    }

    /// `self IS NOT NULL`
    fn is_not_null(self) -> IsNull<Self> {
        IsNull::new(self, true)
    }
}

impl<E> TextOps for E
where
    E: Expression + SingleValue,
    E::SqlType: TextType,
{
}

// `+` spells concatenation on each textual node type. MultiColumn gets no
// impl, so `names + "x"` fails to compile just like `names.concat("x")`.

impl<T, R> Add<R> for Column<T>
where
    T: TextType,
    R: AsTextExpression,
{
    type Output = Concat<Self, R::Expression>;

    fn add(self, rhs: R) -> Self::Output {
        self.concat(rhs)
    }
}

impl<R: AsTextExpression> Add<R> for TextLiteral {
    type Output = Concat<Self, R::Expression>;

    fn add(self, rhs: R) -> Self::Output {
        self.concat(rhs)
    }
}

impl<R: AsTextExpression> Add<R> for Placeholder {
    type Output = Concat<Self, R::Expression>;

    fn add(self, rhs: R) -> Self::Output {
        self.concat(rhs)
    }
}

impl<L, R, T> Add<T> for Concat<L, R>
where
    L: Expression + SingleValue,
    L::SqlType: TextType,
    R: Expression + SingleValue,
    R::SqlType: TextType,
    T: AsTextExpression,
{
    type Output = Concat<Self, T::Expression>;

    fn add(self, rhs: T) -> Self::Output {
        self.concat(rhs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::expr::column::{Column, TextColumn};
    use crate::expr::literal::Placeholder;
    use crate::expr::TextOps;

    const NAME: TextColumn = Column::new("users", "name");
    const SURNAME: TextColumn = Column::new("users", "surname");

    #[test]
    fn test_concat_references_operands_in_order() {
        let node = NAME.concat(SURNAME);
        assert_eq!(node.lhs.qualified(), "users.name");
        assert_eq!(node.rhs.qualified(), "users.surname");
        assert_eq!(node.to_string(), "(users.name || users.surname)");
    }

    #[test]
    fn test_concat_coerces_native_strings() {
        assert_eq!(
            NAME.concat(", ").to_string(),
            "(users.name || ', ')"
        );
        assert_eq!(
            NAME.concat(String::from("!")).to_string(),
            "(users.name || '!')"
        );
    }

    #[test]
    fn test_plus_operator_chains_left_associatively() {
        let full = NAME + " " + SURNAME;
        assert_eq!(full.to_string(), "((users.name || ' ') || users.surname)");
    }

    #[test]
    fn test_like() {
        assert_eq!(NAME.like("A%").to_string(), "users.name LIKE 'A%'");
        assert_eq!(
            NAME.like(Placeholder::new(1)).to_string(),
            "users.name LIKE $1"
        );
    }

    #[test]
    fn test_like_on_concatenation() {
        let node = (NAME + SURNAME).like("AB%");
        assert_eq!(
            node.to_string(),
            "(users.name || users.surname) LIKE 'AB%'"
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(NAME.eq("Herb").to_string(), "users.name = 'Herb'");
        assert_eq!(NAME.ne("Herb").to_string(), "users.name != 'Herb'");
        assert_eq!(NAME.lt("M").to_string(), "users.name < 'M'");
        assert_eq!(NAME.le("M").to_string(), "users.name <= 'M'");
        assert_eq!(NAME.gt("M").to_string(), "users.name > 'M'");
        assert_eq!(NAME.ge("M").to_string(), "users.name >= 'M'");
    }

    #[test]
    fn test_in_list() {
        assert_eq!(
            NAME.in_list(["Herb", "Scott"]).to_string(),
            "users.name IN ('Herb', 'Scott')"
        );
        assert_eq!(
            NAME.not_in_list(["Herb"]).to_string(),
            "users.name NOT IN ('Herb')"
        );
    }

    #[test]
    fn test_null_tests() {
        assert_eq!(NAME.is_null().to_string(), "users.name IS NULL");
        assert_eq!(NAME.is_not_null().to_string(), "users.name IS NOT NULL");
    }
}
