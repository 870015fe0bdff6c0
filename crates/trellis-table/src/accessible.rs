//! Read-only accessibility projection of a table.
//!
//! Children are numbered headers first, then cells in row-major order:
//! header `c` has id `c`, and the cell at `(row, column)` has id
//! `columns + row * max(1, columns) + column`. A table without columns
//! exposes no headers and one cell per row.

use crate::table::Table;
use serde::{Deserialize, Serialize};
use trellis_core::{AccessibleNode, AccessibleRole, CheckedState, Point, Rect};

/// A child element of the accessible table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibleChild {
    /// Header cell of a column (creation index)
    Header {
        /// Column creation index
        column: usize,
    },
    /// Data cell
    Cell {
        /// Row index
        row: usize,
        /// Column creation index
        column: usize,
    },
}

/// Accessibility view over a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct AccessibleTable<'a> {
    table: &'a Table,
}

impl Table {
    /// Accessibility view of the table.
    #[must_use]
    pub const fn accessible(&self) -> AccessibleTable<'_> {
        AccessibleTable { table: self }
    }
}

impl AccessibleTable<'_> {
    /// Role of the table itself.
    #[must_use]
    pub fn role(&self) -> AccessibleRole {
        if self.table.columns.is_empty() {
            AccessibleRole::List
        } else {
            AccessibleRole::Table
        }
    }

    /// Number of header children.
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.table.columns.len()
    }

    /// Number of cells per row.
    #[must_use]
    pub fn cells_per_row(&self) -> usize {
        self.table.columns.len().max(1)
    }

    /// Total number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.header_count() + self.table.rows.len() * self.cells_per_row()
    }

    /// Id of a child, or `None` if it does not exist.
    #[must_use]
    pub fn child_id(&self, child: AccessibleChild) -> Option<usize> {
        match child {
            AccessibleChild::Header { column } => {
                (column < self.header_count()).then_some(column)
            }
            AccessibleChild::Cell { row, column } => {
                let per_row = self.cells_per_row();
                (row < self.table.rows.len() && column < per_row)
                    .then(|| self.header_count() + row * per_row + column)
            }
        }
    }

    /// Child with the given id.
    #[must_use]
    pub fn child(&self, id: usize) -> Option<AccessibleChild> {
        if id >= self.child_count() {
            return None;
        }
        let headers = self.header_count();
        if id < headers {
            return Some(AccessibleChild::Header { column: id });
        }
        let per_row = self.cells_per_row();
        let cell = id - headers;
        Some(AccessibleChild::Cell {
            row: cell / per_row,
            column: cell % per_row,
        })
    }

    /// Row index of the child with the given id; `None` for headers.
    #[must_use]
    pub fn row_index(&self, id: usize) -> Option<usize> {
        match self.child(id)? {
            AccessibleChild::Cell { row, .. } => Some(row),
            AccessibleChild::Header { .. } => None,
        }
    }

    /// Column index of the child with the given id.
    #[must_use]
    pub fn column_index(&self, id: usize) -> Option<usize> {
        match self.child(id)? {
            AccessibleChild::Cell { column, .. } | AccessibleChild::Header { column } => {
                Some(column)
            }
        }
    }

    /// Role of a child.
    #[must_use]
    pub fn child_role(&self, child: AccessibleChild) -> AccessibleRole {
        match child {
            AccessibleChild::Header { .. } => AccessibleRole::ColumnHeader,
            AccessibleChild::Cell { .. } if self.table.columns.is_empty() => {
                AccessibleRole::ListItem
            }
            AccessibleChild::Cell { .. } => AccessibleRole::TableCell,
        }
    }

    /// Child under `point`, if any.
    #[must_use]
    pub fn child_at_point(&self, point: Point) -> Option<AccessibleChild> {
        let table = self.table;
        if table.header_area().contains_point(&point) {
            return table
                .column_at(point.x)
                .map(|column| AccessibleChild::Header { column });
        }
        let row = table.item_at(point)?;
        let column = if table.columns.is_empty() {
            0
        } else {
            table.column_at(point.x)?
        };
        Some(AccessibleChild::Cell { row, column })
    }

    /// Bounds of the table.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.table.client
    }

    /// Bounds of a whole column, header included.
    #[must_use]
    pub fn column_bounds(&self, column: usize) -> Option<Rect> {
        let table = self.table;
        (column < self.cells_per_row()).then(|| {
            Rect::new(
                table.column_x(column),
                table.client.y,
                table.column_width(column),
                table.client.height,
            )
        })
    }

    /// Bounds of a whole row.
    #[must_use]
    pub fn row_bounds(&self, row: usize) -> Option<Rect> {
        self.table.item_bounds(row).ok()
    }

    /// Bounds of a child.
    #[must_use]
    pub fn child_bounds(&self, child: AccessibleChild) -> Option<Rect> {
        let table = self.table;
        match child {
            AccessibleChild::Header { column } => {
                let header = table.header_area();
                table.columns.get(column).map(|c| {
                    Rect::new(table.column_x(column), header.y, c.get_width(), header.height)
                })
            }
            AccessibleChild::Cell { row, column } => table.cell_bounds(row, column).ok(),
        }
    }

    /// The focused child: the first cell of the focus row.
    #[must_use]
    pub fn focus_child(&self) -> Option<AccessibleChild> {
        self.table
            .focus
            .map(|row| AccessibleChild::Cell { row, column: 0 })
    }

    /// Id of the focused child.
    #[must_use]
    pub fn focus_child_id(&self) -> Option<usize> {
        self.focus_child().and_then(|child| self.child_id(child))
    }

    /// Selected rows in ascending order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<usize> {
        self.table.selection_indices()
    }

    /// Every cell of every selected row, row-major.
    #[must_use]
    pub fn selected_cells(&self) -> Vec<AccessibleChild> {
        let per_row = self.cells_per_row();
        self.table
            .selection
            .iter()
            .flat_map(|&row| (0..per_row).map(move |column| AccessibleChild::Cell { row, column }))
            .collect()
    }

    /// Ids of [`AccessibleTable::selected_cells`].
    #[must_use]
    pub fn selected_cell_ids(&self) -> Vec<usize> {
        self.selected_cells()
            .into_iter()
            .filter_map(|child| self.child_id(child))
            .collect()
    }

    /// Snapshot of the table node.
    #[must_use]
    pub fn node(&self) -> AccessibleNode {
        let mut node = AccessibleNode::new(self.role(), self.bounds());
        node.focusable = true;
        node.focused = self.table.has_focus;
        node
    }

    /// Snapshot of a child node. Cell names come from row content as it
    /// stands; unpopulated virtual rows read as empty.
    #[must_use]
    pub fn child_node(&self, child: AccessibleChild) -> Option<AccessibleNode> {
        let table = self.table;
        self.child_id(child)?;
        let bounds = self.child_bounds(child).unwrap_or_default();
        let mut node = AccessibleNode::new(self.child_role(child), bounds);
        match child {
            AccessibleChild::Header { column } => {
                let header = &table.columns[column];
                node.name = Some(header.get_text().to_owned());
                node.description = header.get_tooltip().map(str::to_owned);
                node.column = Some(column);
            }
            AccessibleChild::Cell { row, column } => {
                let data = &table.rows[row];
                node.name = Some(data.text(column).unwrap_or_default().to_owned());
                node.focusable = true;
                node.focused = table.has_focus && table.focus == Some(row);
                node.selected = table.selection.contains(&row);
                if column == 0 && table.config.check {
                    node.checked = Some(CheckedState::from_flags(data.checked(), data.grayed()));
                }
                node.row = Some(row);
                node.column = Some(column);
            }
        }
        Some(node)
    }
}
