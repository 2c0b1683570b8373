//! Callback contracts at the boundary with the query-execution layer.
//!
//! sqltext does not talk to a database itself. A driver integration
//! implements these two traits and the cells push values through them:
//! parameter cells at bind time, result cells on every row fetch.

use crate::result::TextResultCell;

/// Receiver for prepared-statement parameter values.
pub trait ParameterBinder {
    /// Register `value` (or SQL NULL when `is_null` is set) as the bound
    /// parameter at position `index` for the next execution.
    ///
    /// The borrow is only guaranteed for the duration of the call; an
    /// implementation that keeps the value must copy it before the owning
    /// parameter cell is mutated or dropped.
    fn bind_text_parameter(&mut self, index: usize, value: &str, is_null: bool);
}

/// Writer for result-row column buffers.
pub trait ResultBinder {
    /// Called for the text column at `index` on each row fetch.
    ///
    /// The implementation writes the freshly fetched column into the cell:
    /// a buffer reference and length via [`TextResultCell::assign`], a null
    /// reference for a NULL column, or [`TextResultCell::invalidate`] once
    /// the cursor is exhausted or reset. The cell never copies the bytes;
    /// the referenced buffer stays owned by the driver and must remain
    /// valid until the next fetch for the same cell.
    fn bind_text_result(&mut self, index: usize, cell: &mut TextResultCell);
}
