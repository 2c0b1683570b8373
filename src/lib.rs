//! # sqltext: typed textual SQL values
//!
//! > **Stop concatenating strings. Type your SQL.**
//!
//! sqltext models the textual column value of a SQL query as a typed value:
//! a compile-time type identity, a bindable parameter cell, a zero-copy
//! result cell, and an operator surface (`||`, `LIKE`, comparisons) whose
//! operand rules are enforced by the type system instead of checked at
//! runtime.
//!
//! ## Quick example
//!
//! ```
//! use sqltext::prelude::*;
//!
//! const NAME: TextColumn = Column::new("users", "name");
//! const SURNAME: TextColumn = Column::new("users", "surname");
//!
//! let full = NAME.concat(" ").concat(SURNAME);
//! assert_eq!(full.to_sql(), "((users.name || ' ') || users.surname)");
//!
//! let filter = NAME.like("A%");
//! assert_eq!(filter.to_sql(), "users.name LIKE 'A%'");
//! ```
//!
//! Invalid SQL never reaches the driver: concatenating a text column with a
//! non-text operand, or applying a scalar operator to a multi-value
//! expression, is a compile error rather than a runtime one.

pub mod driver;
pub mod error;
pub mod expr;
pub mod param;
pub mod result;
pub mod transpiler;
pub mod types;

pub mod prelude {
    pub use crate::driver::{ParameterBinder, ResultBinder};
    pub use crate::error::{TextError, TextResult};
    pub use crate::expr::*;
    pub use crate::param::TextParameter;
    pub use crate::result::TextResultCell;
    pub use crate::transpiler::ToSql;
    pub use crate::types::{Boolean, SqlType, Text, TextType, ValueType};
}
