//! Compile-time SQL type identities.
//!
//! Every expression, parameter cell, and result cell carries one of these
//! tags. The tags are stateless: they only associate a SQL type with its
//! native Rust representation and with the capability markers the generic
//! constraint checks consume. Conformance is structural: any type that
//! implements the same traits participates, there is no base class.

/// Compile-time identity of a SQL value category.
pub trait SqlType {
    /// The native Rust representation for values of this SQL type.
    type Native;
}

/// Marker for tags that describe a storable value.
pub trait ValueType: SqlType {}

/// Marker for tags whose native representation is a character string.
pub trait TextType: ValueType {}

/// The textual SQL value tag (TEXT, VARCHAR, CHAR).
///
/// The single tag describing "this is a character string". It carries no
/// data, only compile-time facts.
#[derive(Debug, Clone, Copy)]
pub struct Text;

impl SqlType for Text {
    type Native = String;
}
impl ValueType for Text {}
impl TextType for Text {}

/// The boolean SQL value tag.
///
/// Predicate nodes (`LIKE`, comparisons, `IS NULL`) carry this identity.
#[derive(Debug, Clone, Copy)]
pub struct Boolean;

impl SqlType for Boolean {
    type Native = bool;
}
impl ValueType for Boolean {}
