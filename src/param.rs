//! Parameter cells for textual prepared-statement placeholders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::driver::ParameterBinder;

/// Holder for one textual value bound into a prepared statement.
///
/// The cell is exclusively owned by the statement that declares the
/// placeholder and may be reassigned any number of times between
/// executions. While the null flag is set the stored value is kept empty;
/// assigning a concrete value always clears the flag again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextParameter {
    value: String,
    is_null: bool,
}

impl TextParameter {
    /// Empty, non-null parameter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored value and clear the null flag.
    ///
    /// Returns `&mut Self` so assignments chain.
    pub fn set(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self.is_null = false;
        self
    }

    /// Clear the stored value and mark the parameter as SQL NULL.
    pub fn set_null(&mut self) -> &mut Self {
        self.value.clear();
        self.is_null = true;
        self
    }

    /// Whether the parameter will be bound as SQL NULL.
    pub fn is_null(&self) -> bool {
        self.is_null
    }

    /// The stored value.
    ///
    /// Callers must check [`is_null`](Self::is_null) separately; a null
    /// parameter reads back as the empty string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Hand the value and null flag to the driver's parameter slot at
    /// `index`.
    ///
    /// The target must copy or consume the value during the call; nothing
    /// is guaranteed once this cell is mutated or dropped.
    pub fn bind<B: ParameterBinder>(&self, target: &mut B, index: usize) {
        target.bind_text_parameter(index, &self.value, self.is_null);
    }
}

impl From<String> for TextParameter {
    fn from(value: String) -> Self {
        Self {
            value,
            is_null: false,
        }
    }
}

impl From<&str> for TextParameter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TextParameter> for String {
    fn from(param: TextParameter) -> Self {
        param.value
    }
}

impl From<&TextParameter> for String {
    fn from(param: &TextParameter) -> Self {
        param.value.clone()
    }
}

/// Writes the current value's textual form. Null is not special-cased here;
/// reporting null to the database is the binding step's job.
impl fmt::Display for TextParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingStatement {
        bound: Vec<(usize, String, bool)>,
    }

    impl ParameterBinder for RecordingStatement {
        fn bind_text_parameter(&mut self, index: usize, value: &str, is_null: bool) {
            self.bound.push((index, value.to_string(), is_null));
        }
    }

    #[test]
    fn test_new_is_empty_and_not_null() {
        let param = TextParameter::new();
        assert!(!param.is_null());
        assert_eq!(param.value(), "");
    }

    #[test]
    fn test_construct_from_value_round_trips() {
        let param = TextParameter::from("Herb");
        assert!(!param.is_null());
        assert_eq!(param.value(), "Herb");
        assert_eq!(String::from(&param), "Herb");
    }

    #[test]
    fn test_set_null_then_set_value() {
        let mut param = TextParameter::from("Herb");
        param.set_null();
        assert!(param.is_null());
        assert_eq!(param.value(), "");

        param.set("Scott");
        assert!(!param.is_null());
        assert_eq!(param.value(), "Scott");
    }

    #[test]
    fn test_chained_assignment() {
        let mut param = TextParameter::new();
        param.set("first").set("second");
        assert_eq!(param.value(), "second");
        param.set("gone").set_null();
        assert!(param.is_null());
    }

    #[test]
    fn test_display_writes_value() {
        let param = TextParameter::from("O'Brien");
        assert_eq!(param.to_string(), "O'Brien");
    }

    #[test]
    fn test_bind_passes_value_and_null_flag() {
        let mut stmt = RecordingStatement::default();

        let mut param = TextParameter::from("Herb");
        param.bind(&mut stmt, 0);
        param.set_null();
        param.bind(&mut stmt, 1);

        assert_eq!(
            stmt.bound,
            vec![
                (0, "Herb".to_string(), false),
                (1, String::new(), true),
            ]
        );
    }
}
