//! Result cells: non-owning views over one text column of the current row.

use std::fmt;
use std::ptr;
use std::slice;

use crate::driver::ResultBinder;
use crate::error::{TextError, TextResult};

/// One text column's value in the current fetched row.
///
/// The cell never owns the bytes it points at. The driver writes a buffer
/// reference and length into the cell on each fetch (or a null reference
/// for a NULL column), and the reference stays valid only until the next
/// fetch, cursor reset, or result-set teardown. [`value`](Self::value)
/// materializes an owned copy on every call, so a caller that keeps the
/// string past that window is safe; the cell itself is not.
///
/// Holding a raw pointer makes the cell `!Send` and `!Sync`, which matches
/// its contract: one cell per row cursor, no sharing.
pub struct TextResultCell {
    is_valid: bool,
    data: *const u8,
    len: usize,
}

impl Default for TextResultCell {
    fn default() -> Self {
        Self {
            is_valid: false,
            data: ptr::null(),
            len: 0,
        }
    }
}

impl TextResultCell {
    /// Cell with no current row. Every read fails until a row is assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell that already refers to a fetched column.
    ///
    /// # Safety
    ///
    /// Same contract as [`assign`](Self::assign).
    pub unsafe fn from_raw(data: *const u8, len: usize) -> Self {
        let mut cell = Self::new();
        unsafe { cell.assign(data, len) };
        cell
    }

    /// Point the cell at the column's bytes for the newly fetched row and
    /// mark it valid.
    ///
    /// Pointer presence, not length, is the null discriminator: a null
    /// `data` signals a NULL column, and `len` is then driver metadata with
    /// no bearing on the value. For a non-null `data` the length delimits
    /// the value.
    ///
    /// # Safety
    ///
    /// A non-null `data` must be valid for reads of `len` bytes until the
    /// next `assign`, [`invalidate`](Self::invalidate), or teardown of the
    /// row buffer, whichever comes first.
    pub unsafe fn assign(&mut self, data: *const u8, len: usize) {
        self.is_valid = true;
        self.data = data;
        self.len = len;
    }

    /// Mark the cell valid without touching the buffer reference.
    ///
    /// Drivers that signal "row exists" before writing individual columns
    /// use this.
    pub fn validate(&mut self) {
        self.is_valid = true;
    }

    /// Drop the current row: the cell refuses reads until the next assign.
    pub fn invalidate(&mut self) {
        self.is_valid = false;
        self.data = ptr::null();
        self.len = 0;
    }

    /// Whether the column is SQL NULL in the current row.
    pub fn is_null(&self) -> TextResult<bool> {
        if !self.is_valid {
            return Err(TextError::no_current_row("is_null"));
        }
        Ok(self.data.is_null())
    }

    /// Materialize the column value as an owned string.
    ///
    /// Recomputed from the referenced bytes on every call, never cached. A
    /// NULL column reads as the empty string; check
    /// [`is_null`](Self::is_null) to tell the two apart.
    pub fn value(&self) -> TextResult<String> {
        if !self.is_valid {
            return Err(TextError::no_current_row("value"));
        }
        if self.data.is_null() {
            return Ok(String::new());
        }
        let bytes = unsafe { slice::from_raw_parts(self.data, self.len) };
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Compare the materialized value against a native string.
    pub fn equals(&self, other: &str) -> TextResult<bool> {
        Ok(self.value()? == other)
    }

    /// Append the materialized value to `out`.
    pub fn serialize(&self, out: &mut String) -> TextResult<()> {
        out.push_str(&self.value()?);
        Ok(())
    }

    /// Register this cell with the driver's result slot for column `index`.
    ///
    /// See [`ResultBinder::bind_text_result`] for the per-fetch contract.
    pub fn bind<B: ResultBinder>(&mut self, target: &mut B, index: usize) {
        target.bind_text_result(index, self);
    }
}

impl TryFrom<&TextResultCell> for String {
    type Error = TextError;

    fn try_from(cell: &TextResultCell) -> TextResult<String> {
        cell.value()
    }
}

impl fmt::Debug for TextResultCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextResultCell")
            .field("is_valid", &self.is_valid)
            .field("is_null", &self.data.is_null())
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_refuses_reads() {
        let cell = TextResultCell::new();
        assert!(matches!(cell.is_null(), Err(TextError::NoCurrentRow(_))));
        assert!(matches!(cell.value(), Err(TextError::NoCurrentRow(_))));
        assert!(matches!(cell.equals("x"), Err(TextError::NoCurrentRow(_))));
    }

    #[test]
    fn test_assigned_cell_reads_referenced_bytes() {
        let row = b"delta".to_vec();
        let mut cell = TextResultCell::new();
        unsafe { cell.assign(row.as_ptr(), row.len()) };

        assert_eq!(cell.is_null().unwrap(), false);
        assert_eq!(cell.value().unwrap(), "delta");
        // lazy: a second read re-materializes the same bytes
        assert_eq!(cell.value().unwrap(), "delta");
    }

    #[test]
    fn test_null_pointer_means_null_regardless_of_length() {
        let mut cell = TextResultCell::new();
        unsafe { cell.assign(ptr::null(), 7) };

        assert_eq!(cell.is_null().unwrap(), true);
        assert_eq!(cell.value().unwrap(), "");
    }

    #[test]
    fn test_reassign_tracks_new_row() {
        let first = b"one".to_vec();
        let second = b"two".to_vec();
        let mut cell = unsafe { TextResultCell::from_raw(first.as_ptr(), first.len()) };
        assert_eq!(cell.value().unwrap(), "one");

        unsafe { cell.assign(second.as_ptr(), second.len()) };
        assert_eq!(cell.value().unwrap(), "two");
    }

    #[test]
    fn test_invalidate_after_valid() {
        let row = b"gone".to_vec();
        let mut cell = unsafe { TextResultCell::from_raw(row.as_ptr(), row.len()) };
        assert_eq!(cell.value().unwrap(), "gone");

        cell.invalidate();
        assert!(matches!(cell.is_null(), Err(TextError::NoCurrentRow(_))));
        assert!(matches!(cell.value(), Err(TextError::NoCurrentRow(_))));
    }

    #[test]
    fn test_validate_marks_row_without_buffer() {
        let mut cell = TextResultCell::new();
        cell.validate();
        // row exists, column not written: reads as NULL
        assert_eq!(cell.is_null().unwrap(), true);
        assert_eq!(cell.value().unwrap(), "");
    }

    #[test]
    fn test_equality_against_native_string() {
        let row = b"match".to_vec();
        let cell = unsafe { TextResultCell::from_raw(row.as_ptr(), row.len()) };
        assert!(cell.equals("match").unwrap());
        assert!(!cell.equals("other").unwrap());
    }

    #[test]
    fn test_serialize_appends_value() {
        let row = b"tail".to_vec();
        let cell = unsafe { TextResultCell::from_raw(row.as_ptr(), row.len()) };
        let mut out = String::from("head ");
        cell.serialize(&mut out).unwrap();
        assert_eq!(out, "head tail");

        let invalid = TextResultCell::new();
        assert!(invalid.serialize(&mut out).is_err());
    }

    #[test]
    fn test_try_from_materializes() {
        let row = b"owned".to_vec();
        let cell = unsafe { TextResultCell::from_raw(row.as_ptr(), row.len()) };
        let copy = String::try_from(&cell).unwrap();
        drop(cell);
        assert_eq!(copy, "owned");
    }
}
