//! Vocabulary shared with assistive technology.
//!
//! Widgets answer queries in these terms; the platform bridge that turns them
//! into a live accessibility tree lives outside this crate.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Checkbox
    Checkbox,
    /// List (table without columns)
    List,
    /// List item
    ListItem,
    /// Table
    Table,
    /// Table row
    TableRow,
    /// Table cell
    TableCell,
    /// Column header cell
    ColumnHeader,
}

/// Checked state for checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckedState {
    /// Not checked.
    Unchecked,
    /// Checked.
    Checked,
    /// Mixed/indeterminate state.
    Mixed,
}

impl CheckedState {
    /// Derive the state from a checked flag and a grayed (indeterminate) flag.
    #[must_use]
    pub const fn from_flags(checked: bool, grayed: bool) -> Self {
        match (checked, grayed) {
            (true, true) => Self::Mixed,
            (true, false) => Self::Checked,
            (false, _) => Self::Unchecked,
        }
    }
}

/// Snapshot of one accessible element.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleNode {
    /// Accessible role.
    pub role: AccessibleRole,
    /// Accessible name (label).
    pub name: Option<String>,
    /// Accessible description (tooltip).
    pub description: Option<String>,
    /// Bounding rectangle in widget coordinates.
    pub bounds: Rect,
    /// Whether the element can take focus.
    pub focusable: bool,
    /// Whether the element currently has focus.
    pub focused: bool,
    /// Whether the element is selected.
    pub selected: bool,
    /// Check state, for checkable elements.
    pub checked: Option<CheckedState>,
    /// Row index, for rows and cells.
    pub row: Option<usize>,
    /// Column index, for header and data cells.
    pub column: Option<usize>,
}

impl AccessibleNode {
    /// Create a new accessible node.
    pub fn new(role: AccessibleRole, bounds: Rect) -> Self {
        Self {
            role,
            name: None,
            description: None,
            bounds,
            focusable: false,
            focused: false,
            selected: false,
            checked: None,
            row: None,
            column: None,
        }
    }

}
