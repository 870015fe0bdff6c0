//! Column definitions.

use crate::error::{Result, TableError};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use trellis_core::Image;

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Leading edge
    #[default]
    Start,
    /// Centered
    Center,
    /// Trailing edge
    End,
}

/// Sort indicator drawn in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// No indicator
    #[default]
    None,
    /// Ascending arrow
    Ascending,
    /// Descending arrow
    Descending,
}

/// A table column.
///
/// Build one with the builder methods and hand it to
/// [`Table::add_column`]; afterwards change it through
/// [`Table::column_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header text
    text: String,
    /// Header image
    image: Option<Image>,
    /// Header tooltip
    tooltip: Option<String>,
    /// Width in pixels
    width: f32,
    /// Content alignment
    alignment: Alignment,
    /// Can the user resize the column?
    resizable: bool,
    /// Can the user drag the column to a new position?
    moveable: bool,
    /// Header sort indicator
    sort: SortDirection,
    /// Shortened header text and the width it was computed for
    pub(crate) display: Option<(f32, String)>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            text: String::new(),
            image: None,
            tooltip: None,
            width: 0.0,
            alignment: Alignment::Start,
            resizable: true,
            moveable: false,
            sort: SortDirection::None,
            display: None,
        }
    }
}

impl Column {
    /// Create a column with header text and zero width.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    /// Set the alignment. The first column is always start-aligned.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the header image.
    #[must_use]
    pub const fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the header tooltip.
    #[must_use]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Allow or forbid user resizing.
    #[must_use]
    pub const fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Allow or forbid user reordering.
    #[must_use]
    pub const fn moveable(mut self, moveable: bool) -> Self {
        self.moveable = moveable;
        self
    }

    /// Set the sort indicator.
    #[must_use]
    pub const fn sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }

    /// Header text.
    #[must_use]
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Header image.
    #[must_use]
    pub const fn get_image(&self) -> Option<Image> {
        self.image
    }

    /// Header tooltip.
    #[must_use]
    pub fn get_tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Width in pixels.
    #[must_use]
    pub const fn get_width(&self) -> f32 {
        self.width
    }

    /// Content alignment.
    #[must_use]
    pub const fn get_alignment(&self) -> Alignment {
        self.alignment
    }

    /// Is the column user-resizable?
    #[must_use]
    pub const fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Is the column user-moveable?
    #[must_use]
    pub const fn is_moveable(&self) -> bool {
        self.moveable
    }

    /// Header sort indicator.
    #[must_use]
    pub const fn get_sort(&self) -> SortDirection {
        self.sort
    }

    pub(crate) fn set_width_raw(&mut self, width: f32) {
        self.width = width;
    }

    pub(crate) fn set_alignment_raw(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

/// Mutable handle to a column of a [`Table`].
pub struct ColumnMut<'a> {
    pub(crate) table: &'a mut Table,
    pub(crate) index: usize,
}

impl Deref for ColumnMut<'_> {
    type Target = Column;

    fn deref(&self) -> &Column {
        &self.table.columns[self.index]
    }
}

impl ColumnMut<'_> {
    fn column(&mut self) -> &mut Column {
        &mut self.table.columns[self.index]
    }

    /// Creation index of the column.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Set the width. Later columns shift and are notified as moved.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] for a negative or non-finite
    /// width.
    pub fn set_width(&mut self, width: f32) -> Result<&mut Self> {
        if !(width >= 0.0 && width.is_finite()) {
            return Err(TableError::InvalidArgument(format!(
                "column width must be non-negative, got {width}"
            )));
        }
        self.table.set_column_width(self.index, width);
        Ok(self)
    }

    /// Set the header text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        let column = self.column();
        column.text = text.into();
        column.display = None;
        self.table.header_changed(self.index);
        self
    }

    /// Set or clear the header image.
    pub fn set_image(&mut self, image: Option<Image>) -> &mut Self {
        let column = self.column();
        column.image = image;
        column.display = None;
        self.table.header_changed(self.index);
        self
    }

    /// Set or clear the header tooltip.
    pub fn set_tooltip(&mut self, tooltip: Option<String>) -> &mut Self {
        self.column().tooltip = tooltip;
        self
    }

    /// Set the content alignment.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::FirstColumnAlignment`] when asked to move the
    /// first column away from [`Alignment::Start`].
    pub fn set_alignment(&mut self, alignment: Alignment) -> Result<&mut Self> {
        if self.index == 0 && alignment != Alignment::Start {
            return Err(TableError::FirstColumnAlignment);
        }
        if self.alignment != alignment {
            self.column().alignment = alignment;
            self.table.redraw_column(self.index);
        }
        Ok(self)
    }

    /// Allow or forbid user resizing.
    pub fn set_resizable(&mut self, resizable: bool) -> &mut Self {
        self.column().resizable = resizable;
        self
    }

    /// Allow or forbid user reordering.
    pub fn set_moveable(&mut self, moveable: bool) -> &mut Self {
        self.column().moveable = moveable;
        self
    }

    /// Set the header sort indicator.
    pub fn set_sort(&mut self, sort: SortDirection) -> &mut Self {
        if self.sort != sort {
            let column = self.column();
            column.sort = sort;
            column.display = None;
            self.table.header_changed(self.index);
        }
        self
    }

    /// Resize the column to fit its header and populated content.
    pub fn pack(&mut self) -> &mut Self {
        self.table.pack_column(self.index);
        self
    }
}
