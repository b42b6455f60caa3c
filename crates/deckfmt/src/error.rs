//! Error type for deck-table writing.

use std::io;

/// Errors reported by [`TableWriter`](crate::TableWriter).
///
/// Sink failures are passed through unchanged; the writer does not retry
/// or buffer beyond the currently open table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The underlying sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A row supplied more or fewer cells than the table declares columns.
    ///
    /// Raised as soon as the contract breaks: on the cell that overshoots,
    /// on `end_row` when the row comes up short, or on table completion if
    /// a row was left unfinished.
    #[error("row has {actual} cells but the table declares {expected} columns")]
    ColumnCountMismatch {
        /// Declared column count of the open table.
        expected: usize,
        /// Cells the row actually carries.
        actual: usize,
    },

    /// A row-building or table-closing call arrived while no table was open.
    #[error("no table is open; declare a header first")]
    NoTableOpen,
}
