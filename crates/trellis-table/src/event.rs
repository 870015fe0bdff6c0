//! Notifications a table raises for its host.
//!
//! User input produces [`TableEvent`]s; programmatic mutations through the
//! table API stay silent apart from the structural and column notifications
//! listed below.

use serde::{Deserialize, Serialize};

/// Extra detail attached to a [`TableEvent::Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionDetail {
    /// The row selection changed
    #[default]
    None,
    /// The row's checkbox was toggled
    Check,
}

/// Notification emitted by a [`Table`](crate::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableEvent {
    /// The user selected a row or toggled its checkbox.
    Selection {
        /// Affected row
        row: usize,
        /// What changed
        detail: SelectionDetail,
    },
    /// The user activated a row (double click or Enter).
    DefaultSelection {
        /// Activated row
        row: usize,
    },
    /// The user clicked a column header.
    ColumnSelected {
        /// Column creation index
        column: usize,
    },
    /// A column changed horizontal position.
    ColumnMoved {
        /// Column creation index
        column: usize,
    },
    /// A column changed width.
    ColumnResized {
        /// Column creation index
        column: usize,
    },
    /// Rows were inserted.
    RowsInserted {
        /// Index of the first new row
        start: usize,
        /// Number of rows inserted
        count: usize,
    },
    /// Rows were removed.
    RowsRemoved {
        /// Index of the first removed row, before removal
        start: usize,
        /// Number of rows removed
        count: usize,
    },
    /// A column was inserted.
    ColumnInserted {
        /// Creation index of the new column
        column: usize,
    },
    /// A column was removed.
    ColumnRemoved {
        /// Creation index the column had
        column: usize,
    },
    /// The focused row changed.
    FocusChanged {
        /// New focus row, if any
        row: Option<usize>,
    },
}

impl TableEvent {
    /// Plain selection notification for `row`.
    #[must_use]
    pub const fn selection(row: usize) -> Self {
        Self::Selection {
            row,
            detail: SelectionDetail::None,
        }
    }

    /// Checkbox notification for `row`.
    #[must_use]
    pub const fn check(row: usize) -> Self {
        Self::Selection {
            row,
            detail: SelectionDetail::Check,
        }
    }

    /// Is this a selection or checkbox notification?
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(self, Self::Selection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            TableEvent::selection(3),
            TableEvent::Selection {
                row: 3,
                detail: SelectionDetail::None
            }
        );
        assert_eq!(
            TableEvent::check(1),
            TableEvent::Selection {
                row: 1,
                detail: SelectionDetail::Check
            }
        );
    }

    #[test]
    fn test_is_selection() {
        assert!(TableEvent::check(0).is_selection());
        assert!(!TableEvent::DefaultSelection { row: 0 }.is_selection());
        assert!(!TableEvent::FocusChanged { row: None }.is_selection());
    }

    #[test]
    fn test_serde_roundtrip() {
        let ev = TableEvent::RowsRemoved { start: 2, count: 5 };
        let json = serde_json::to_string(&ev).unwrap();
        let back: TableEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }
}
