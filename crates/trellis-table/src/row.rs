//! Rows and their per-column content.

use crate::error::{Result, TableError};
use crate::table::Table;
use crate::text;
use std::ops::Deref;
use trellis_core::{Color, Font, Image, TextMeasure};

/// Content of one cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Cell {
    pub(crate) text: String,
    pub(crate) image: Option<Image>,
    pub(crate) foreground: Option<Color>,
    pub(crate) background: Option<Color>,
    pub(crate) font: Option<Font>,
    /// Measured width of `text`
    pub(crate) text_width: Option<f32>,
    /// Shortened text and the width it was computed for
    pub(crate) display: Option<(f32, String)>,
}

impl Cell {
    fn invalidate(&mut self) {
        self.text_width = None;
        self.display = None;
    }
}

/// Row-wide overrides, boxed so plain rows stay small.
#[derive(Debug, Clone, Default, PartialEq)]
struct RowStyle {
    foreground: Option<Color>,
    background: Option<Color>,
    font: Option<Font>,
}

/// One row of a table.
///
/// A materialized row holds `max(1, column_count)` cells, so a table
/// without columns still has a slot for its list text. Rows of a virtual
/// table start as placeholders without cells and are materialized when
/// they are populated or handed out for writing.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) index: usize,
    pub(crate) cells: Vec<Cell>,
    style: Option<Box<RowStyle>>,
    checked: bool,
    grayed: bool,
    pub(crate) populated: bool,
    /// Laid-out width of the first cell, after the measure hook
    pub(crate) extent: Option<f32>,
}

impl Row {
    /// Create an empty row with `columns` column slots.
    ///
    /// Rows of a virtual table start unpopulated and without cells.
    pub(crate) fn new(columns: usize, virtual_rows: bool) -> Self {
        let cells = if virtual_rows {
            Vec::new()
        } else {
            vec![Cell::default(); columns.max(1)]
        };
        Self {
            index: 0,
            cells,
            style: None,
            checked: false,
            grayed: false,
            populated: !virtual_rows,
            extent: None,
        }
    }

    /// Give a placeholder row its `max(1, columns)` cells.
    pub(crate) fn materialize(&mut self, columns: usize) {
        if self.cells.is_empty() {
            self.cells = vec![Cell::default(); columns.max(1)];
            self.extent = None;
        }
    }

    /// Position of the row in its table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of column slots, 0 for a placeholder.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    /// Has the row's content been supplied?
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.populated
    }

    /// Text of `column`.
    #[must_use]
    pub fn text(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(|c| c.text.as_str())
    }

    /// Image of `column`.
    #[must_use]
    pub fn image(&self, column: usize) -> Option<Image> {
        self.cells.get(column).and_then(|c| c.image)
    }

    /// Checkbox state.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }

    /// Grayed (indeterminate) checkbox state.
    #[must_use]
    pub const fn grayed(&self) -> bool {
        self.grayed
    }

    /// Row-wide foreground override.
    #[must_use]
    pub fn foreground(&self) -> Option<Color> {
        self.style.as_ref().and_then(|s| s.foreground)
    }

    /// Row-wide background override.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.style.as_ref().and_then(|s| s.background)
    }

    /// Row-wide font override.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        self.style.as_ref().and_then(|s| s.font.as_ref())
    }

    /// Foreground of `column`: the cell override, else the row override.
    #[must_use]
    pub fn cell_foreground(&self, column: usize) -> Option<Color> {
        self.cells
            .get(column)
            .and_then(|c| c.foreground)
            .or_else(|| self.foreground())
    }

    /// Background of `column`: the cell override, else the row override.
    #[must_use]
    pub fn cell_background(&self, column: usize) -> Option<Color> {
        self.cells
            .get(column)
            .and_then(|c| c.background)
            .or_else(|| self.background())
    }

    /// Font of `column`: the cell override, else the row override.
    #[must_use]
    pub fn cell_font(&self, column: usize) -> Option<&Font> {
        self.cells
            .get(column)
            .and_then(|c| c.font.as_ref())
            .or_else(|| self.font())
    }

    fn style_mut(&mut self) -> &mut RowStyle {
        self.style.get_or_insert_with(Box::default)
    }

    fn cell_mut(&mut self, column: usize) -> Result<&mut Cell> {
        self.extent = None;
        let count = self.cells.len();
        self.cells
            .get_mut(column)
            .ok_or(TableError::ColumnOutOfRange {
                index: column,
                count,
            })
    }

    /// Set the text of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_text(&mut self, column: usize, text: impl Into<String>) -> Result<()> {
        let cell = self.cell_mut(column)?;
        cell.text = text.into();
        cell.invalidate();
        Ok(())
    }

    /// Set the texts of consecutive columns starting at column 0.
    ///
    /// Extra entries beyond the column count are ignored.
    pub fn set_texts<S: AsRef<str>>(&mut self, texts: &[S]) {
        self.extent = None;
        for (cell, text) in self.cells.iter_mut().zip(texts) {
            cell.text = text.as_ref().to_string();
            cell.invalidate();
        }
    }

    /// Set or clear the image of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_image(&mut self, column: usize, image: Option<Image>) -> Result<()> {
        let cell = self.cell_mut(column)?;
        cell.image = image;
        cell.invalidate();
        Ok(())
    }

    /// Set the checkbox state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Set the grayed checkbox state.
    pub fn set_grayed(&mut self, grayed: bool) {
        self.grayed = grayed;
    }

    /// Set the row-wide foreground.
    pub fn set_foreground(&mut self, color: Option<Color>) {
        self.style_mut().foreground = color;
    }

    /// Set the row-wide background.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.style_mut().background = color;
    }

    /// Set the row-wide font.
    pub fn set_font(&mut self, font: Option<Font>) {
        self.style_mut().font = font;
        self.invalidate_all();
    }

    /// Set the foreground of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_foreground(&mut self, column: usize, color: Option<Color>) -> Result<()> {
        self.cell_mut(column)?.foreground = color;
        Ok(())
    }

    /// Set the background of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_background(&mut self, column: usize, color: Option<Color>) -> Result<()> {
        self.cell_mut(column)?.background = color;
        Ok(())
    }

    /// Set the font of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_font(&mut self, column: usize, font: Option<Font>) -> Result<()> {
        let cell = self.cell_mut(column)?;
        cell.font = font;
        cell.invalidate();
        Ok(())
    }

    /// Reset all content. The row becomes unpopulated in a virtual table.
    pub(crate) fn clear(&mut self, columns: usize, virtual_rows: bool) {
        let index = self.index;
        *self = Self::new(columns, virtual_rows);
        self.index = index;
    }

    /// Drop every cached measurement.
    pub(crate) fn invalidate_all(&mut self) {
        self.extent = None;
        self.cells.iter_mut().for_each(Cell::invalidate);
    }

    /// Add a column slot at `column`.
    pub(crate) fn insert_slot(&mut self, column: usize, first_column: bool) {
        // The first real column adopts the list content already in slot 0.
        if first_column || self.cells.is_empty() {
            return;
        }
        self.extent = None;
        let at = column.min(self.cells.len());
        self.cells.insert(at, Cell::default());
    }

    /// Remove the slot at `column`. The last slot stays as the list slot.
    pub(crate) fn remove_slot(&mut self, column: usize) {
        if self.cells.len() > 1 && column < self.cells.len() {
            self.extent = None;
            self.cells.remove(column);
        }
    }

    /// Width of the text in `column`, measured once and cached.
    pub(crate) fn text_width(
        &mut self,
        column: usize,
        default_font: &Font,
        measure: &dyn TextMeasure,
    ) -> f32 {
        let row_font = self.style.as_ref().and_then(|s| s.font.as_ref());
        let Some(cell) = self.cells.get_mut(column) else {
            return 0.0;
        };
        if let Some(width) = cell.text_width {
            return width;
        }
        let font = cell.font.as_ref().or(row_font).unwrap_or(default_font);
        let width = measure.text_width(&cell.text, font);
        cell.text_width = Some(width);
        width
    }

    /// Text of `column` shortened to `available` pixels, cached per width.
    pub(crate) fn display_text(
        &mut self,
        column: usize,
        available: f32,
        default_font: &Font,
        measure: &dyn TextMeasure,
    ) -> String {
        let row_font = self.style.as_ref().and_then(|s| s.font.as_ref());
        let Some(cell) = self.cells.get_mut(column) else {
            return String::new();
        };
        if let Some((width, shown)) = &cell.display {
            if (*width - available).abs() < f32::EPSILON {
                return shown.clone();
            }
        }
        let font = cell.font.as_ref().or(row_font).unwrap_or(default_font);
        let shown = text::shorten(&cell.text, available, font, measure);
        cell.display = Some((available, shown.clone()));
        shown
    }
}

/// Mutable handle to a row of a [`Table`].
///
/// Changes made through the handle are reflected on screen: the table
/// schedules the repaint and updates its scroll ranges.
pub struct RowMut<'a> {
    pub(crate) table: &'a mut Table,
    pub(crate) index: usize,
}

impl Deref for RowMut<'_> {
    type Target = Row;

    fn deref(&self) -> &Row {
        &self.table.rows[self.index]
    }
}

impl RowMut<'_> {
    fn row(&mut self) -> &mut Row {
        &mut self.table.rows[self.index]
    }

    fn changed(&mut self) {
        self.table.row_changed(self.index);
    }

    /// Set the text of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_text(&mut self, column: usize, text: impl Into<String>) -> Result<&mut Self> {
        self.row().set_text(column, text)?;
        self.changed();
        Ok(self)
    }

    /// Set the texts of consecutive columns starting at column 0.
    pub fn set_texts<S: AsRef<str>>(&mut self, texts: &[S]) -> &mut Self {
        self.row().set_texts(texts);
        self.changed();
        self
    }

    /// Set or clear the image of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_image(&mut self, column: usize, image: Option<Image>) -> Result<&mut Self> {
        self.row().set_image(column, image)?;
        self.table.grow_item_height_for(image);
        self.changed();
        Ok(self)
    }

    /// Set the checkbox state. Ignored unless the table shows checkboxes.
    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        if self.table.config.check {
            self.row().set_checked(checked);
            self.table.redraw_checkbox(self.index);
        }
        self
    }

    /// Set the grayed checkbox state. Ignored unless the table shows
    /// checkboxes.
    pub fn set_grayed(&mut self, grayed: bool) -> &mut Self {
        if self.table.config.check {
            self.row().set_grayed(grayed);
            self.table.redraw_checkbox(self.index);
        }
        self
    }

    /// Set the row-wide foreground.
    pub fn set_foreground(&mut self, color: Option<Color>) -> &mut Self {
        self.row().set_foreground(color);
        self.table.redraw_row(self.index);
        self
    }

    /// Set the row-wide background.
    pub fn set_background(&mut self, color: Option<Color>) -> &mut Self {
        self.row().set_background(color);
        self.table.redraw_row(self.index);
        self
    }

    /// Set the row-wide font.
    pub fn set_font(&mut self, font: Option<Font>) -> &mut Self {
        self.row().set_font(font);
        self.changed();
        self
    }

    /// Set the foreground of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_foreground(&mut self, column: usize, color: Option<Color>) -> Result<&mut Self> {
        self.row().set_cell_foreground(column, color)?;
        self.table.redraw_row(self.index);
        Ok(self)
    }

    /// Set the background of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_background(&mut self, column: usize, color: Option<Color>) -> Result<&mut Self> {
        self.row().set_cell_background(column, color)?;
        self.table.redraw_row(self.index);
        Ok(self)
    }

    /// Set the font of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] for an unknown column.
    pub fn set_cell_font(&mut self, column: usize, font: Option<Font>) -> Result<&mut Self> {
        self.row().set_cell_font(column, font)?;
        self.changed();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::FixedAdvance;

    // ===== Row Content Tests =====

    #[test]
    fn test_new_row_has_one_slot_without_columns() {
        let row = Row::new(0, false);
        assert_eq!(row.slot_count(), 1);
        assert!(row.is_populated());
        assert_eq!(row.text(0), Some(""));
        assert_eq!(row.text(1), None);
    }

    #[test]
    fn test_virtual_row_starts_as_placeholder() {
        let mut row = Row::new(3, true);
        assert!(!row.is_populated());
        assert_eq!(row.slot_count(), 0);
        assert_eq!(row.text(0), None);
        assert!(row.set_text(0, "x").is_err());
        row.materialize(3);
        assert_eq!(row.slot_count(), 3);
        assert_eq!(row.text(0), Some(""));
    }

    #[test]
    fn test_placeholder_is_smaller_than_materialized_row() {
        assert!(std::mem::size_of::<Row>() <= 64);
        let row = Row::new(4, true);
        assert_eq!(row.cells.capacity(), 0);
        assert!(row.style.is_none());
    }

    #[test]
    fn test_set_text_out_of_range() {
        let mut row = Row::new(2, false);
        assert!(row.set_text(1, "b").is_ok());
        assert_eq!(
            row.set_text(2, "c"),
            Err(TableError::ColumnOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_set_texts_ignores_extra() {
        let mut row = Row::new(2, false);
        row.set_texts(&["a", "b", "c"]);
        assert_eq!(row.text(0), Some("a"));
        assert_eq!(row.text(1), Some("b"));
    }

    #[test]
    fn test_color_resolution() {
        let mut row = Row::new(2, false);
        row.set_foreground(Some(Color::BLACK));
        row.set_cell_foreground(1, Some(Color::WHITE)).unwrap();
        assert_eq!(row.cell_foreground(0), Some(Color::BLACK));
        assert_eq!(row.cell_foreground(1), Some(Color::WHITE));
        assert_eq!(row.cell_background(0), None);
    }

    #[test]
    fn test_clear_keeps_index_and_slots() {
        let mut row = Row::new(3, false);
        row.index = 5;
        row.set_text(0, "x").unwrap();
        row.set_checked(true);
        row.clear(3, false);
        assert_eq!(row.index(), 5);
        assert_eq!(row.slot_count(), 3);
        assert_eq!(row.text(0), Some(""));
        assert!(!row.checked());

        row.clear(3, true);
        assert_eq!(row.index(), 5);
        assert!(!row.is_populated());
        assert_eq!(row.slot_count(), 0);
    }

    // ===== Slot Tests =====

    #[test]
    fn test_first_column_adopts_list_text() {
        let mut row = Row::new(0, false);
        row.set_text(0, "list").unwrap();
        row.insert_slot(0, true);
        assert_eq!(row.slot_count(), 1);
        assert_eq!(row.text(0), Some("list"));
        row.insert_slot(0, false);
        assert_eq!(row.slot_count(), 2);
        assert_eq!(row.text(1), Some("list"));
    }

    #[test]
    fn test_remove_last_slot_keeps_list_text() {
        let mut row = Row::new(2, false);
        row.set_texts(&["a", "b"]);
        row.remove_slot(0);
        assert_eq!(row.text(0), Some("b"));
        row.remove_slot(0);
        assert_eq!(row.slot_count(), 1);
        assert_eq!(row.text(0), Some("b"));
    }

    // ===== Cache Tests =====

    #[test]
    fn test_content_changes_reset_extent() {
        let mut row = Row::new(2, false);
        row.extent = Some(40.0);
        row.set_text(1, "b").unwrap();
        assert_eq!(row.extent, None);
        row.extent = Some(40.0);
        row.set_font(Some(Font::default()));
        assert_eq!(row.extent, None);
        row.extent = Some(40.0);
        row.remove_slot(0);
        assert_eq!(row.extent, None);
        row.extent = Some(40.0);
        row.set_background(Some(Color::WHITE));
        assert_eq!(row.extent, Some(40.0));
    }

    #[test]
    fn test_text_width_cache_invalidated_on_text_change() {
        let measure = FixedAdvance::new(10.0, 16.0);
        let font = Font::default();
        let mut row = Row::new(1, false);
        row.set_text(0, "abc").unwrap();
        assert_eq!(row.text_width(0, &font, &measure), 30.0);
        row.set_text(0, "abcdef").unwrap();
        assert_eq!(row.text_width(0, &font, &measure), 60.0);
    }

    #[test]
    fn test_display_text_tracks_width() {
        let measure = FixedAdvance::new(10.0, 16.0);
        let font = Font::default();
        let mut row = Row::new(1, false);
        row.set_text(0, "hello world").unwrap();
        assert_eq!(row.display_text(0, 200.0, &font, &measure), "hello world");
        assert_eq!(row.display_text(0, 70.0, &font, &measure), "hell...");
        row.set_text(0, "hi").unwrap();
        assert_eq!(row.display_text(0, 70.0, &font, &measure), "hi");
    }
}
