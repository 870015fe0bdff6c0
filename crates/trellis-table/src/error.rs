//! Error types for trellis-table.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = TableError> = std::result::Result<T, E>;

/// Errors raised by table operations.
///
/// Out-of-range indices and malformed arguments are programming errors and
/// are reported immediately instead of being clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Row index outside `[0, count)` (or `[0, count]` for inserts).
    #[error("row index {index} out of range (row count {count})")]
    RowOutOfRange {
        /// Offending index.
        index: usize,
        /// Row count at the time of the call.
        count: usize,
    },

    /// Column index outside the valid range.
    #[error("column index {index} out of range (column count {count})")]
    ColumnOutOfRange {
        /// Offending index.
        index: usize,
        /// Column count at the time of the call.
        count: usize,
    },

    /// Display order that is not a permutation of the column indices.
    #[error("invalid column order: {0}")]
    InvalidColumnOrder(String),

    /// Any other rejected argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempt to change the alignment of the first column.
    #[error("the first column is always start-aligned")]
    FirstColumnAlignment,

    /// The table has been disposed.
    #[error("table has been disposed")]
    Disposed,

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
