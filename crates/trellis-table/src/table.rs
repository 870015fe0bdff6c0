//! The table control: rows, columns, geometry, and structural changes.

use crate::column::{Alignment, Column, ColumnMut, SortDirection};
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::event::TableEvent;
use crate::hooks::{Hooks, MeasureItem};
use crate::input::{Click, Drag};
use crate::order::{self, ColumnOrder};
use crate::redraw::Repaint;
use crate::row::{Row, RowMut};
use crate::source::RowSource;
use crate::viewport::ScrollBar;
use log::{debug, trace};
use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use trellis_core::{
    AccessibleRole, Canvas, Constraints, Event, FixedAdvance, Font, Image, LayoutResult, Point,
    Rect, Size, TextMeasure, Widget,
};

/// Horizontal padding on each side of cell and header content.
pub const CELL_MARGIN: f32 = 3.0;
/// Gap between an image and the text that follows it.
pub const IMAGE_SPACING: f32 = 3.0;
/// Side length of a row checkbox.
pub const CHECKBOX_SIZE: f32 = 13.0;
/// Gap on either side of a row checkbox.
pub const CHECKBOX_MARGIN: f32 = 3.0;
/// Vertical padding above and below row content.
pub const ROW_PADDING: f32 = 2.0;
/// Vertical padding above and below header content.
pub const HEADER_PADDING: f32 = 3.0;
/// Width reserved for a header sort indicator.
pub const SORT_INDICATOR_WIDTH: f32 = 10.0;
/// Distance from a column's right edge that still grabs the resize handle.
pub const RESIZE_TOLERANCE: f32 = 2.0;

/// A virtualized multi-column table, or a list when it has no columns.
///
/// The table owns its rows and columns; [`RowMut`] and [`ColumnMut`]
/// handles borrow it mutably so every change can schedule the repaint it
/// needs. Repaints are queued as [`Repaint`] entries and flushed with
/// [`Table::render`]; user input goes through [`Table::dispatch`].
///
/// # Examples
///
/// ```
/// use trellis_table::{Column, Table, TableConfig};
/// use trellis_core::{FixedAdvance, Rect};
///
/// let mut table = Table::new(TableConfig::default(), FixedAdvance::default());
/// table.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
/// table.add_column(Column::new("Name").width(120.0)).unwrap();
/// table.add_row().unwrap().set_text(0, "Alice").unwrap();
///
/// assert_eq!(table.row_count(), 1);
/// assert_eq!(table.item(0).unwrap().text(0), Some("Alice"));
/// ```
pub struct Table {
    pub(crate) config: TableConfig,
    pub(crate) measure: Box<dyn TextMeasure>,
    pub(crate) columns: Vec<Column>,
    pub(crate) order: ColumnOrder,
    pub(crate) rows: Vec<Row>,
    pub(crate) selection: BTreeSet<usize>,
    pub(crate) focus: Option<usize>,
    pub(crate) anchor: Option<usize>,
    pub(crate) last_click: Option<Click>,
    pub(crate) last_edge_click: Option<Click>,
    pub(crate) drag: Option<Drag>,
    pub(crate) client: Rect,
    pub(crate) top_index: usize,
    pub(crate) h_offset: f32,
    pub(crate) vbar: ScrollBar,
    pub(crate) hbar: ScrollBar,
    /// Widest row content in a table without columns
    pub(crate) list_width: f32,
    /// Row that set `list_width`
    pub(crate) widest_row: Option<usize>,
    /// `list_width` must be recomputed from every row
    pub(crate) list_rescan: bool,
    pub(crate) item_height: f32,
    pub(crate) has_focus: bool,
    /// Nesting depth of redraw suspension
    pub(crate) suspended: usize,
    /// Scroll ranges went stale while redraw was suspended
    pub(crate) ranges_pending: bool,
    pub(crate) repaints: Vec<Repaint>,
    pub(crate) events: Vec<TableEvent>,
    pub(crate) source: Option<Box<dyn RowSource>>,
    pub(crate) hooks: Hooks,
    pub(crate) disposed: bool,
    pub(crate) range_updates: u64,
    pub(crate) populate_calls: u64,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("config", &self.config)
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("selection", &self.selection)
            .field("focus", &self.focus)
            .field("top_index", &self.top_index)
            .field("h_offset", &self.h_offset)
            .field("client", &self.client)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default(), FixedAdvance::default())
    }
}

impl Table {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an empty table measuring text with `measure`.
    ///
    /// Invalid config values are replaced by their defaults; use
    /// [`Table::try_new`] to reject them instead.
    pub fn new(config: TableConfig, measure: impl TextMeasure + 'static) -> Self {
        Self::build(config.repaired(), Box::new(measure))
    }

    /// Create an empty table, rejecting an invalid config.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Config`] naming the first invalid field.
    pub fn try_new(config: TableConfig, measure: impl TextMeasure + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(measure)))
    }

    fn build(config: TableConfig, measure: Box<dyn TextMeasure>) -> Self {
        let mut table = Self {
            config,
            measure,
            columns: Vec::new(),
            order: ColumnOrder::new(),
            rows: Vec::new(),
            selection: BTreeSet::new(),
            focus: None,
            anchor: None,
            last_click: None,
            last_edge_click: None,
            drag: None,
            client: Rect::default(),
            top_index: 0,
            h_offset: 0.0,
            vbar: ScrollBar::default(),
            hbar: ScrollBar::default(),
            list_width: 0.0,
            widest_row: None,
            list_rescan: false,
            item_height: 0.0,
            has_focus: false,
            suspended: 0,
            ranges_pending: false,
            repaints: Vec::new(),
            events: Vec::new(),
            source: None,
            hooks: Hooks::default(),
            disposed: false,
            range_updates: 0,
            populate_calls: 0,
        };
        table.item_height = table.default_item_height();
        debug!(
            "table created: selection={:?} check={} virtual={} item_height={}",
            table.config.selection, table.config.check, table.config.virtual_rows, table.item_height
        );
        table
    }

    /// Style flags and defaults the table was created with.
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Install the row source used to populate virtual rows.
    pub fn set_source(&mut self, source: impl RowSource + 'static) {
        self.source = Some(Box::new(source));
    }

    /// Has [`Table::dispose`] been called?
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release all rows, columns, hooks, and the row source.
    ///
    /// Every mutating call afterwards fails with [`TableError::Disposed`].
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!("table disposed with {} rows", self.rows.len());
        self.disposed = true;
        self.rows = Vec::new();
        self.list_width = 0.0;
        self.widest_row = None;
        self.columns.clear();
        self.order = ColumnOrder::new();
        self.selection.clear();
        self.focus = None;
        self.anchor = None;
        self.last_click = None;
        self.last_edge_click = None;
        self.drag = None;
        self.source = None;
        self.hooks = Hooks::default();
        self.repaints.clear();
    }

    pub(crate) fn check_alive(&self) -> Result<()> {
        if self.disposed {
            Err(TableError::Disposed)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_row(&self, index: usize) -> Result<()> {
        self.check_alive()?;
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(TableError::RowOutOfRange {
                index,
                count: self.rows.len(),
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        self.check_alive()?;
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfRange {
                index,
                count: self.columns.len(),
            })
        }
    }

    /// Drain the notifications raised outside of [`Table::dispatch`].
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row at `index` without populating it.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Row at `index`, populating it first in a virtual table.
    pub fn item(&mut self, index: usize) -> Result<&Row> {
        self.check_row(index)?;
        self.ensure_populated(index);
        Ok(&self.rows[index])
    }

    /// Mutable handle to the row at `index`, populating it first.
    pub fn item_mut(&mut self, index: usize) -> Result<RowMut<'_>> {
        self.check_row(index)?;
        self.ensure_populated(index);
        Ok(RowMut { table: self, index })
    }

    /// Append an empty row.
    pub fn add_row(&mut self) -> Result<RowMut<'_>> {
        let index = self.rows.len();
        self.insert_row(index)
    }

    /// Insert an empty row at `index`; later rows shift down.
    pub fn insert_row(&mut self, index: usize) -> Result<RowMut<'_>> {
        self.check_alive()?;
        if index > self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index,
                count: self.rows.len(),
            });
        }
        self.insert_rows_at(index, 1);
        let slots = self.columns.len();
        self.rows[index].materialize(slots);
        Ok(RowMut { table: self, index })
    }

    /// Grow or shrink the table to exactly `count` rows.
    ///
    /// New rows are empty; in a virtual table they are populated on first
    /// access.
    pub fn set_row_count(&mut self, count: usize) -> Result<()> {
        self.check_alive()?;
        let old = self.rows.len();
        if count > old {
            self.insert_rows_at(old, count - old);
        } else if count < old {
            self.remove_block(count, old - count);
        }
        Ok(())
    }

    /// Remove the row at `index`.
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.remove_block(index, 1);
        Ok(())
    }

    /// Remove rows `start..=end`. An empty range is a no-op.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_alive()?;
        if start > end {
            return Ok(());
        }
        self.check_row(end)?;
        self.remove_block(start, end - start + 1);
        Ok(())
    }

    /// Remove every listed row. Nothing is removed if any index is invalid.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Result<()> {
        self.check_alive()?;
        for &index in indices {
            self.check_row(index)?;
        }
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for index in sorted {
            self.remove_block(index, 1);
        }
        Ok(())
    }

    /// Remove all rows.
    pub fn remove_all(&mut self) -> Result<()> {
        self.check_alive()?;
        if !self.rows.is_empty() {
            self.remove_block(0, self.rows.len());
        }
        Ok(())
    }

    /// Reset the content of the row at `index`.
    ///
    /// In a virtual table the row is populated again on next access.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.clear_block(index, index + 1);
        Ok(())
    }

    /// Reset rows `start..=end`, clamped to the row count. An empty range
    /// is a no-op.
    pub fn clear_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_alive()?;
        if start > end || start >= self.rows.len() {
            return Ok(());
        }
        let end = end.min(self.rows.len() - 1);
        self.clear_block(start, end + 1);
        Ok(())
    }

    /// Reset every listed row. Nothing is cleared if any index is invalid.
    pub fn clear_indices(&mut self, indices: &[usize]) -> Result<()> {
        self.check_alive()?;
        for &index in indices {
            self.check_row(index)?;
        }
        for &index in indices {
            self.clear_block(index, index + 1);
        }
        Ok(())
    }

    /// Reset every row.
    pub fn clear_all(&mut self) -> Result<()> {
        self.check_alive()?;
        let count = self.rows.len();
        self.clear_block(0, count);
        Ok(())
    }

    fn insert_rows_at(&mut self, index: usize, count: usize) {
        let slots = self.columns.len();
        let virtual_rows = self.config.virtual_rows;
        let tail = self.rows.split_off(index);
        self.rows
            .extend((0..count).map(|_| Row::new(slots, virtual_rows)));
        self.rows.extend(tail);
        self.renumber_from(index);
        self.shift_for_insert(index, count);
        if let Some(widest) = self.widest_row.filter(|&w| w >= index) {
            self.widest_row = Some(widest + count);
        }
        for row in index..index + count {
            self.fold_list_extent(row);
        }
        trace!("inserted {count} rows at {index}");
        self.events.push(TableEvent::RowsInserted {
            start: index,
            count,
        });
        self.update_scroll_ranges();
        self.redraw_from_row(index);
    }

    fn remove_block(&mut self, start: usize, count: usize) {
        match self.widest_row {
            Some(widest) if widest >= start + count => self.widest_row = Some(widest - count),
            Some(widest) if widest >= start => {
                self.widest_row = None;
                self.list_rescan = true;
            }
            _ => {}
        }
        self.rows.drain(start..start + count);
        self.renumber_from(start);
        self.shift_for_remove(start, count);
        trace!("removed {count} rows at {start}");
        self.events.push(TableEvent::RowsRemoved { start, count });
        self.clamp_top_index();
        self.update_scroll_ranges();
        self.redraw_from_row(start);
    }

    fn clear_block(&mut self, start: usize, end: usize) {
        let slots = self.columns.len();
        let virtual_rows = self.config.virtual_rows;
        for row in &mut self.rows[start..end] {
            row.clear(slots, virtual_rows);
        }
        let mut changed = false;
        for row in start..end {
            changed |= self.fold_list_extent(row);
        }
        if changed {
            self.update_scroll_ranges();
        }
        self.redraw_rows(start, end);
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.index = index;
        }
    }

    /// Populate the row at `index` through the row source if it has not
    /// been populated yet.
    pub(crate) fn ensure_populated(&mut self, index: usize) {
        let slots = self.columns.len();
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.materialize(slots);
        if row.populated {
            return;
        }
        let Some(mut source) = self.source.take() else {
            return;
        };
        // Marked first so the row counts as populated during the callback.
        row.populated = true;
        trace!("populating row {index}");
        source.populate(index, row);
        self.source = Some(source);
        self.populate_calls += 1;
        if self.fold_list_extent(index) {
            self.update_scroll_ranges();
        }
    }

    /// How many times the row source has been asked for content.
    #[must_use]
    pub const fn population_requests(&self) -> u64 {
        self.populate_calls
    }

    /// A row's content changed through its handle.
    pub(crate) fn row_changed(&mut self, index: usize) {
        if self.fold_list_extent(index) {
            self.update_scroll_ranges();
        }
        self.redraw_row(index);
    }

    /// Width of the first cell of row `index` as laid out: its content,
    /// as adjusted by the measure hook. Cached on the row.
    pub(crate) fn row_extent(&mut self, index: usize) -> f32 {
        let Some(row) = self.rows.get(index) else {
            return 0.0;
        };
        if let Some(extent) = row.extent {
            return extent;
        }
        let mut item = MeasureItem {
            row: index,
            column: 0,
            width: self.content_extent(index, 0),
            height: self.item_height,
        };
        self.hooks.measure(&mut item);
        self.rows[index].extent = Some(item.width);
        item.width
    }

    /// Fold the current extent of row `index` into the list width.
    ///
    /// Returns whether the list width changed or now needs a rescan. Only
    /// tracked while the table has no columns.
    pub(crate) fn fold_list_extent(&mut self, index: usize) -> bool {
        if !self.columns.is_empty() || index >= self.rows.len() {
            return false;
        }
        let extent = if self.rows[index].populated {
            self.row_extent(index)
        } else {
            0.0
        };
        if extent > self.list_width {
            self.list_width = extent;
            self.widest_row = Some(index);
            true
        } else if self.widest_row == Some(index) && extent < self.list_width {
            self.widest_row = None;
            self.list_rescan = true;
            true
        } else {
            false
        }
    }

    /// Recompute the list width from every populated row.
    pub(crate) fn rescan_list_width(&mut self) {
        let mut width = 0.0f32;
        let mut widest = None;
        for index in 0..self.rows.len() {
            if self.rows[index].populated {
                let extent = self.row_extent(index);
                if extent > width {
                    width = extent;
                    widest = Some(index);
                }
            }
        }
        trace!("list width rescanned: {width}");
        self.list_width = width;
        self.widest_row = widest;
        self.list_rescan = false;
    }

    /// Drop every cached row extent and rescan the list width on the next
    /// range update.
    pub(crate) fn invalidate_extents(&mut self) {
        for row in &mut self.rows {
            row.extent = None;
        }
        self.widest_row = None;
        self.list_rescan = true;
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns in creation order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column created at `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Mutable handle to the column created at `index`.
    pub fn column_mut(&mut self, index: usize) -> Result<ColumnMut<'_>> {
        self.check_column(index)?;
        Ok(ColumnMut { table: self, index })
    }

    /// Append a column and return its creation index.
    pub fn add_column(&mut self, column: Column) -> Result<usize> {
        let index = self.columns.len();
        self.insert_column(index, column)
    }

    /// Insert a column at creation index `index`.
    ///
    /// The first column added to a list keeps the list text as its content.
    pub fn insert_column(&mut self, index: usize, mut column: Column) -> Result<usize> {
        self.check_alive()?;
        if index > self.columns.len() {
            return Err(TableError::ColumnOutOfRange {
                index,
                count: self.columns.len(),
            });
        }
        if index == 0 {
            column.set_alignment_raw(Alignment::Start);
        }
        let first = self.columns.is_empty();
        let before = self.column_offsets();
        self.columns.insert(index, column);
        self.order.insert(index);
        for row in &mut self.rows {
            row.insert_slot(index, first);
        }
        debug!("column inserted at {index}");
        self.events.push(TableEvent::ColumnInserted { column: index });
        let after = self.column_offsets();
        for (old, x) in before.iter().enumerate() {
            let new = if old >= index { old + 1 } else { old };
            if (after[new] - x).abs() > f32::EPSILON {
                self.events.push(TableEvent::ColumnMoved { column: new });
            }
        }
        self.update_scroll_ranges();
        self.redraw();
        Ok(index)
    }

    /// Remove the column created at `index`.
    ///
    /// The next column becomes the first and is start-aligned. Removing the
    /// last column turns the table back into a list that keeps the remaining
    /// content slot.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        let before = self.column_offsets();
        self.columns.remove(index);
        self.order.remove(index);
        for row in &mut self.rows {
            row.remove_slot(index);
        }
        if let Some(first) = self.columns.first_mut() {
            first.set_alignment_raw(Alignment::Start);
        } else {
            self.list_rescan = true;
        }
        self.drag = None;
        debug!("column {index} removed");
        self.events.push(TableEvent::ColumnRemoved { column: index });
        let after = self.column_offsets();
        for (old, x) in before.iter().enumerate() {
            if old == index {
                continue;
            }
            let new = if old > index { old - 1 } else { old };
            if (after[new] - x).abs() > f32::EPSILON {
                self.events.push(TableEvent::ColumnMoved { column: new });
            }
        }
        self.update_scroll_ranges();
        self.redraw();
        Ok(())
    }

    /// Display order as creation indices, left to right.
    #[must_use]
    pub fn column_order(&self) -> Vec<usize> {
        self.order.to_vec(self.columns.len())
    }

    /// Set the display order.
    ///
    /// Every column whose display position changed is notified as moved.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidColumnOrder`] unless `order` is a
    /// permutation of the column indices; the order is then unchanged.
    pub fn set_column_order(&mut self, order: &[usize]) -> Result<()> {
        self.check_alive()?;
        let count = self.columns.len();
        let before: Vec<usize> = (0..count).map(|c| self.order.display_index_of(c)).collect();
        self.order.set(order, count)?;
        for (column, slot) in before.into_iter().enumerate() {
            if self.order.display_index_of(column) != slot {
                self.events.push(TableEvent::ColumnMoved { column });
            }
        }
        debug!("column order set to {order:?}");
        self.redraw();
        Ok(())
    }

    /// Left edge of each column relative to the first display column, by
    /// creation index.
    fn column_offsets(&self) -> Vec<f32> {
        (0..self.columns.len())
            .map(|c| order::x_position_of(&self.order, c, |i| self.columns[i].get_width()))
            .collect()
    }

    pub(crate) fn set_column_width(&mut self, index: usize, width: f32) {
        let old = self.columns[index].get_width();
        if (old - width).abs() < f32::EPSILON {
            return;
        }
        self.columns[index].set_width_raw(width);
        trace!("column {index} width {old} -> {width}");
        self.events.push(TableEvent::ColumnResized { column: index });
        let slot = self.order.display_index_of(index);
        for display in slot + 1..self.columns.len() {
            let column = self.order.creation_index_at(display);
            self.events.push(TableEvent::ColumnMoved { column });
        }
        self.update_scroll_ranges();
        let x = self.column_x(index).max(self.client.x);
        self.redraw_rect(Rect::new(
            x,
            self.client.y,
            self.client.right() - x,
            self.client.height,
        ));
    }

    /// Width the header of column `index` needs.
    fn header_extent(&self, index: usize) -> f32 {
        let column = &self.columns[index];
        let text = self
            .measure
            .text_width(column.get_text(), &self.config.header_font);
        let image = column.get_image().map_or(0.0, |image| {
            image.width + if text > 0.0 { IMAGE_SPACING } else { 0.0 }
        });
        let sort = if column.get_sort() == SortDirection::None {
            0.0
        } else {
            SORT_INDICATOR_WIDTH + IMAGE_SPACING
        };
        2.0 * CELL_MARGIN + image + text + sort
    }

    pub(crate) fn pack_column(&mut self, index: usize) {
        let mut width = self.header_extent(index);
        let height = self.item_height;
        for row in 0..self.rows.len() {
            if !self.rows[row].populated {
                continue;
            }
            let mut item = MeasureItem {
                row,
                column: index,
                width: self.content_extent(row, index),
                height,
            };
            self.hooks.measure(&mut item);
            width = width.max(item.width);
        }
        debug!("packing column {index} to {width}");
        self.set_column_width(index, width.ceil());
    }

    pub(crate) fn header_changed(&mut self, _index: usize) {
        self.update_scroll_ranges();
        self.redraw();
    }

    pub(crate) fn redraw_column(&mut self, index: usize) {
        let x = self.column_x(index);
        let width = self.column_width(index);
        self.redraw_rect(Rect::new(x, self.client.y, width, self.client.height));
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Default cell font.
    #[must_use]
    pub const fn font(&self) -> &Font {
        &self.config.font
    }

    /// Change the default cell font.
    pub fn set_font(&mut self, font: Font) -> Result<()> {
        self.check_alive()?;
        self.config.font = font;
        for row in &mut self.rows {
            row.invalidate_all();
        }
        self.invalidate_extents();
        self.item_height = self.default_item_height();
        self.update_scroll_ranges();
        self.redraw();
        Ok(())
    }

    /// Change the header font.
    pub fn set_header_font(&mut self, font: Font) -> Result<()> {
        self.check_alive()?;
        self.config.header_font = font;
        for column in &mut self.columns {
            column.display = None;
        }
        self.update_scroll_ranges();
        self.redraw();
        Ok(())
    }

    /// Height of every row.
    #[must_use]
    pub const fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Fix the row height.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] unless `height` is positive.
    pub fn set_item_height(&mut self, height: f32) -> Result<()> {
        self.check_alive()?;
        if !(height > 0.0 && height.is_finite()) {
            return Err(TableError::InvalidArgument(format!(
                "item height must be positive, got {height}"
            )));
        }
        self.config.item_height = Some(height);
        self.apply_item_height(height);
        Ok(())
    }

    fn default_item_height(&self) -> f32 {
        if let Some(height) = self.config.item_height {
            return height;
        }
        let text = self.measure.line_height(&self.config.font);
        let check = if self.config.check { CHECKBOX_SIZE } else { 0.0 };
        text.max(check) + 2.0 * ROW_PADDING
    }

    pub(crate) fn apply_item_height(&mut self, height: f32) {
        if (self.item_height - height).abs() < f32::EPSILON {
            return;
        }
        debug!("item height {} -> {height}", self.item_height);
        self.item_height = height;
        self.update_scroll_ranges();
        self.redraw();
    }

    /// Rows grow to fit an image unless the height is fixed.
    pub(crate) fn grow_item_height_for(&mut self, image: Option<Image>) {
        if self.config.item_height.is_some() {
            return;
        }
        if let Some(image) = image {
            let needed = image.height + 2.0 * ROW_PADDING;
            if needed > self.item_height {
                self.apply_item_height(needed);
            }
        }
    }

    /// Is the column header shown?
    #[must_use]
    pub const fn is_header_visible(&self) -> bool {
        self.config.header_visible
    }

    /// Show or hide the column header.
    pub fn set_header_visible(&mut self, visible: bool) -> Result<()> {
        self.check_alive()?;
        if self.config.header_visible != visible {
            self.config.header_visible = visible;
            self.update_scroll_ranges();
            self.redraw();
        }
        Ok(())
    }

    /// Are grid lines drawn?
    #[must_use]
    pub const fn lines_visible(&self) -> bool {
        self.config.lines_visible
    }

    /// Show or hide grid lines.
    pub fn set_lines_visible(&mut self, visible: bool) -> Result<()> {
        self.check_alive()?;
        if self.config.lines_visible != visible {
            self.config.lines_visible = visible;
            self.redraw();
        }
        Ok(())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Set the client area.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.client == bounds {
            return;
        }
        trace!("bounds {:?} -> {bounds:?}", self.client);
        self.client = bounds;
        self.update_scroll_ranges();
        self.redraw();
    }

    /// Client area.
    #[must_use]
    pub const fn client_area(&self) -> Rect {
        self.client
    }

    /// Height of the column header, 0 when hidden or without columns.
    #[must_use]
    pub fn header_height(&self) -> f32 {
        if !self.config.header_visible || self.columns.is_empty() {
            return 0.0;
        }
        let text = self.measure.line_height(&self.config.header_font);
        let image = self
            .columns
            .iter()
            .filter_map(Column::get_image)
            .map(|image| image.height)
            .fold(0.0, f32::max);
        text.max(image) + 2.0 * HEADER_PADDING
    }

    /// Header area.
    #[must_use]
    pub fn header_area(&self) -> Rect {
        Rect::new(
            self.client.x,
            self.client.y,
            self.client.width,
            self.header_height().min(self.client.height),
        )
    }

    /// Client area below the header.
    #[must_use]
    pub fn rows_area(&self) -> Rect {
        let header = self.header_height().min(self.client.height);
        Rect::new(
            self.client.x,
            self.client.y + header,
            self.client.width,
            self.client.height - header,
        )
    }

    /// Top edge of the row at `index`; rows above the viewport get
    /// positions above the rows area.
    pub(crate) fn row_top(&self, index: usize) -> f32 {
        let rows = self.rows_area();
        rows.y + (index as f32 - self.top_index as f32) * self.item_height
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn columns_width(&self) -> f32 {
        self.columns.iter().map(Column::get_width).sum()
    }

    /// Horizontal extent of the content.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        if self.columns.is_empty() {
            self.list_width
        } else {
            self.columns_width()
        }
    }

    /// Width of a row: all columns, or the wider of content and client for
    /// a list.
    pub(crate) fn row_width(&self) -> f32 {
        if self.columns.is_empty() {
            self.list_width.max(self.client.width)
        } else {
            self.columns_width()
        }
    }

    /// Left edge of column `index` in client coordinates.
    pub(crate) fn column_x(&self, index: usize) -> f32 {
        let offset = if self.columns.is_empty() {
            0.0
        } else {
            order::x_position_of(&self.order, index, |i| {
                self.columns.get(i).map_or(0.0, Column::get_width)
            })
        };
        self.client.x - self.h_offset + offset
    }

    /// Width of column `index`, or the row width for a list.
    pub(crate) fn column_width(&self, index: usize) -> f32 {
        if self.columns.is_empty() {
            self.row_width()
        } else {
            self.columns.get(index).map_or(0.0, Column::get_width)
        }
    }

    /// Width taken by the checkbox in the first column.
    pub(crate) fn check_area(&self) -> f32 {
        if self.config.check {
            CHECKBOX_SIZE + 2.0 * CHECKBOX_MARGIN
        } else {
            0.0
        }
    }

    /// Bounds of the row at `index` across all columns.
    pub fn item_bounds(&self, index: usize) -> Result<Rect> {
        self.check_row(index)?;
        Ok(Rect::new(
            self.client.x - self.h_offset,
            self.row_top(index),
            self.row_width(),
            self.item_height,
        ))
    }

    /// Bounds of the cell at `row`, `column`.
    pub fn cell_bounds(&self, row: usize, column: usize) -> Result<Rect> {
        self.check_row(row)?;
        if column >= self.columns.len().max(1) {
            return Err(TableError::ColumnOutOfRange {
                index: column,
                count: self.columns.len(),
            });
        }
        Ok(Rect::new(
            self.column_x(column),
            self.row_top(row),
            self.column_width(column),
            self.item_height,
        ))
    }

    /// Bounds of the checkbox of the row at `index`.
    pub(crate) fn checkbox_bounds(&self, index: usize) -> Rect {
        Rect::new(
            self.column_x(0) + CHECKBOX_MARGIN,
            self.row_top(index) + (self.item_height - CHECKBOX_SIZE) / 2.0,
            CHECKBOX_SIZE,
            CHECKBOX_SIZE,
        )
    }

    /// Width the content of a cell needs, including margins and, in the
    /// first column, the checkbox.
    pub(crate) fn content_extent(&mut self, row: usize, column: usize) -> f32 {
        let check = if column == 0 { self.check_area() } else { 0.0 };
        let Self {
            rows,
            measure,
            config,
            ..
        } = self;
        let Some(row) = rows.get_mut(row) else {
            return 0.0;
        };
        let text = row.text_width(column, &config.font, &**measure);
        let image = row.image(column).map_or(0.0, |image| {
            image.width + if text > 0.0 { IMAGE_SPACING } else { 0.0 }
        });
        check + 2.0 * CELL_MARGIN + image + text
    }

    /// Area of the row at `index` that reacts to clicks and shows the
    /// selection: the whole row with full selection, otherwise the content
    /// of the first column.
    pub(crate) fn hit_bounds(&mut self, index: usize) -> Rect {
        let top = self.row_top(index);
        if self.config.full_selection {
            return Rect::new(
                self.client.x - self.h_offset,
                top,
                self.row_width(),
                self.item_height,
            );
        }
        let check = self.check_area();
        let mut width = self.row_extent(index) - check;
        if !self.columns.is_empty() {
            width = width.min(self.columns[0].get_width() - check);
        }
        Rect::new(
            self.column_x(0) + check,
            top,
            width.max(0.0),
            self.item_height,
        )
    }

    /// Row under `point`, if any.
    #[must_use]
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let area = self.rows_area();
        if !area.contains_point(&point) || self.item_height <= 0.0 {
            return None;
        }
        let offset = ((point.y - area.y) / self.item_height).floor() as usize;
        let index = self.top_index + offset;
        (index < self.rows.len()).then_some(index)
    }

    /// Creation index of the column under client x-coordinate `x`.
    #[must_use]
    pub fn column_at(&self, x: f32) -> Option<usize> {
        let mut left = self.client.x - self.h_offset;
        for display in 0..self.columns.len() {
            let column = self.order.creation_index_at(display);
            let width = self.columns[column].get_width();
            if x >= left && x < left + width {
                return Some(column);
            }
            left += width;
        }
        None
    }
}

impl Widget for Table {
    fn measure(&self, constraints: Constraints) -> Size {
        let height = self.header_height() + self.rows.len() as f32 * self.item_height;
        constraints.constrain(Size::new(self.content_width(), height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.set_bounds(bounds);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&mut self, canvas: &mut dyn Canvas, damage: Rect) {
        self.paint_damage(canvas, damage);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>> {
        let events = self.dispatch(event);
        if events.is_empty() {
            None
        } else {
            Some(Box::new(events))
        }
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.columns.is_empty() {
            AccessibleRole::List
        } else {
            AccessibleRole::Table
        }
    }

    fn bounds(&self) -> Rect {
        self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionMode;
    use trellis_core::Color;

    fn table() -> Table {
        let mut table = Table::new(TableConfig::default(), FixedAdvance::new(8.0, 16.0));
        table.set_bounds(Rect::new(0.0, 0.0, 300.0, 200.0));
        table
    }

    fn with_rows(count: usize) -> Table {
        let mut t = table();
        for i in 0..count {
            t.add_row().unwrap().set_text(0, format!("Item {i}")).unwrap();
        }
        t.take_events();
        t
    }

    // ===== Construction Tests =====

    #[test]
    fn test_new_table_is_empty() {
        let t = table();
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.column_count(), 0);
        assert_eq!(t.item_height(), 20.0);
        assert_eq!(t.header_height(), 0.0);
        assert!(!t.is_disposed());
    }

    #[test]
    fn test_check_grows_default_height() {
        let t = Table::new(TableConfig::new().check(true), FixedAdvance::new(8.0, 10.0));
        assert_eq!(t.item_height(), CHECKBOX_SIZE + 2.0 * ROW_PADDING);
    }

    #[test]
    fn test_fixed_item_height_from_config() {
        let t = Table::new(TableConfig::new().item_height(30.0), FixedAdvance::default());
        assert_eq!(t.item_height(), 30.0);
    }

    #[test]
    fn test_invalid_config_repaired_or_rejected() {
        let t = Table::new(TableConfig::new().item_height(0.0), FixedAdvance::new(8.0, 16.0));
        assert_eq!(t.item_height(), 20.0);
        assert!(matches!(
            Table::try_new(TableConfig::new().item_height(-1.0), FixedAdvance::default()),
            Err(TableError::Config(_))
        ));
        let t = Table::try_new(TableConfig::new().item_height(24.0), FixedAdvance::default())
            .unwrap();
        assert_eq!(t.item_height(), 24.0);
    }

    // ===== Row Tests =====

    #[test]
    fn test_rows_are_numbered() {
        let mut t = with_rows(3);
        t.insert_row(1).unwrap().set_text(0, "new").unwrap();
        for i in 0..4 {
            assert_eq!(t.row(i).unwrap().index(), i);
        }
        assert_eq!(t.row(1).unwrap().text(0), Some("new"));
        assert_eq!(t.row(2).unwrap().text(0), Some("Item 1"));
    }

    #[test]
    fn test_insert_row_out_of_range() {
        let mut t = with_rows(2);
        assert!(matches!(
            t.insert_row(3),
            Err(TableError::RowOutOfRange { index: 3, count: 2 })
        ));
        assert!(t.insert_row(2).is_ok());
    }

    #[test]
    fn test_row_events() {
        let mut t = with_rows(2);
        t.add_row().unwrap();
        t.remove_row(0).unwrap();
        assert_eq!(
            t.take_events(),
            vec![
                TableEvent::RowsInserted { start: 2, count: 1 },
                TableEvent::RowsRemoved { start: 0, count: 1 },
            ]
        );
    }

    #[test]
    fn test_remove_range_and_indices() {
        let mut t = with_rows(6);
        t.remove_range(1, 2).unwrap();
        assert_eq!(t.row_count(), 4);
        assert_eq!(t.row(1).unwrap().text(0), Some("Item 3"));
        t.remove_indices(&[0, 3, 0]).unwrap();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.row(0).unwrap().text(0), Some("Item 3"));
        assert!(t.remove_indices(&[0, 9]).is_err());
        assert_eq!(t.row_count(), 2);
        t.remove_range(1, 0).unwrap();
        assert_eq!(t.row_count(), 2);
        t.remove_all().unwrap();
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn test_set_row_count() {
        let mut t = with_rows(2);
        t.set_row_count(5).unwrap();
        assert_eq!(t.row_count(), 5);
        assert_eq!(t.row(4).unwrap().index(), 4);
        t.set_row_count(1).unwrap();
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.row(0).unwrap().text(0), Some("Item 0"));
    }

    #[test]
    fn test_clear_resets_content() {
        let mut t = with_rows(3);
        t.clear(1).unwrap();
        assert_eq!(t.row(1).unwrap().text(0), Some(""));
        t.clear_range(0, 2).unwrap();
        assert!(t.rows.iter().all(|r| r.text(0) == Some("")));
        assert!(t.clear(3).is_err());
    }

    #[test]
    fn test_clear_range_clamps() {
        let mut t = with_rows(3);
        assert_eq!(t.clear_range(1, 50), Ok(()));
        assert_eq!(t.row(0).unwrap().text(0), Some("Item 0"));
        assert_eq!(t.row(2).unwrap().text(0), Some(""));
        assert_eq!(t.clear_range(5, 9), Ok(()));
    }

    // ===== List Width Tests =====

    /// Fixed-advance metrics that count text measurements.
    #[derive(Default)]
    struct CountingMeasure(std::rc::Rc<std::cell::Cell<usize>>);

    impl TextMeasure for CountingMeasure {
        fn text_width(&self, text: &str, font: &Font) -> f32 {
            self.0.set(self.0.get() + 1);
            FixedAdvance::new(8.0, 16.0).text_width(text, font)
        }

        fn line_height(&self, _font: &Font) -> f32 {
            16.0
        }
    }

    #[test]
    fn test_filling_a_list_measures_each_row_once_per_change() {
        let measure = CountingMeasure::default();
        let calls = std::rc::Rc::clone(&measure.0);
        let mut t = Table::new(TableConfig::default(), measure);
        t.set_bounds(Rect::new(0.0, 0.0, 300.0, 200.0));
        let rows = 20_000;
        for i in 0..rows {
            t.add_row().unwrap().set_text(0, format!("Item {i}")).unwrap();
        }
        // One measurement for the empty row, one after the text is set.
        assert!(calls.get() <= 2 * rows);
        assert_eq!(t.horizontal_bar().maximum, 2.0 * CELL_MARGIN + 10.0 * 8.0);
    }

    #[test]
    fn test_list_width_follows_widest_row() {
        let mut t = table();
        for text in ["a", "abcdef", "abc"] {
            t.add_row().unwrap().set_text(0, text).unwrap();
        }
        let width = |chars: f32| 2.0 * CELL_MARGIN + chars * 8.0;
        assert_eq!(t.content_width(), width(6.0));

        t.item_mut(1).unwrap().set_text(0, "ab").unwrap();
        assert_eq!(t.content_width(), width(3.0));
        t.remove_row(2).unwrap();
        assert_eq!(t.content_width(), width(2.0));
        t.insert_row(0).unwrap().set_text(0, "abcdefgh").unwrap();
        assert_eq!(t.content_width(), width(8.0));
        t.remove_row(1).unwrap();
        assert_eq!(t.content_width(), width(8.0));
        t.clear(0).unwrap();
        assert_eq!(t.content_width(), width(2.0));
        t.set_font(Font::new("mono", 12.0)).unwrap();
        assert_eq!(t.content_width(), width(2.0));

        t.add_column(Column::new("A").width(300.0)).unwrap();
        assert_eq!(t.content_width(), 300.0);
        t.remove_column(0).unwrap();
        assert_eq!(t.content_width(), width(2.0));
    }

    // ===== Virtual Population Tests =====

    #[test]
    fn test_virtual_rows_populate_once() {
        let mut t = Table::new(TableConfig::new().virtual_rows(true), FixedAdvance::default());
        t.set_source(|index: usize, row: &mut Row| {
            row.set_text(0, format!("Lazy {index}")).unwrap();
        });
        t.set_row_count(1000).unwrap();
        assert_eq!(t.population_requests(), 0);
        assert!(!t.row(500).unwrap().is_populated());
        assert_eq!(t.item(500).unwrap().text(0), Some("Lazy 500"));
        assert_eq!(t.item(500).unwrap().text(0), Some("Lazy 500"));
        assert_eq!(t.population_requests(), 1);
    }

    #[test]
    fn test_virtual_rows_start_as_placeholders() {
        let mut t = Table::new(TableConfig::new().virtual_rows(true), FixedAdvance::default());
        t.add_column(Column::new("A")).unwrap();
        t.add_column(Column::new("B")).unwrap();
        t.set_row_count(100_000).unwrap();
        assert!(t.rows.iter().all(|r| r.slot_count() == 0));

        t.item_mut(7).unwrap().set_text(1, "b").unwrap();
        assert_eq!(t.row(7).unwrap().slot_count(), 2);
        assert_eq!(t.row(8).unwrap().slot_count(), 0);

        t.set_source(|index: usize, row: &mut Row| row.set_texts(&[format!("{index}")]));
        assert_eq!(t.item(8).unwrap().text(0), Some("8"));
        assert_eq!(t.row(8).unwrap().slot_count(), 2);
    }

    #[test]
    fn test_virtual_clear_repopulates() {
        let mut t = Table::new(TableConfig::new().virtual_rows(true), FixedAdvance::default());
        t.set_source(|index: usize, row: &mut Row| row.set_texts(&[format!("Row {index}")]));
        t.set_row_count(3).unwrap();
        t.item(1).unwrap();
        t.clear(1).unwrap();
        assert!(!t.row(1).unwrap().is_populated());
        assert_eq!(t.item(1).unwrap().text(0), Some("Row 1"));
        assert_eq!(t.population_requests(), 2);
    }

    // ===== Column Tests =====

    #[test]
    fn test_first_column_keeps_list_text() {
        let mut t = with_rows(2);
        t.add_column(Column::new("Name").width(100.0)).unwrap();
        assert_eq!(t.row(1).unwrap().text(0), Some("Item 1"));
        t.add_column(Column::new("Size").width(50.0)).unwrap();
        assert_eq!(t.row(1).unwrap().slot_count(), 2);
        assert_eq!(t.row(1).unwrap().text(1), Some(""));
    }

    #[test]
    fn test_first_column_always_start_aligned() {
        let mut t = table();
        t.add_column(Column::new("A").alignment(Alignment::End)).unwrap();
        assert_eq!(t.column(0).unwrap().get_alignment(), Alignment::Start);
        t.add_column(Column::new("B").alignment(Alignment::End)).unwrap();
        assert!(matches!(
            t.column_mut(0).unwrap().set_alignment(Alignment::Center),
            Err(TableError::FirstColumnAlignment)
        ));
        t.remove_column(0).unwrap();
        assert_eq!(t.column(0).unwrap().get_alignment(), Alignment::Start);
    }

    #[test]
    fn test_insert_column_reports_moves() {
        let mut t = table();
        t.add_column(Column::new("A").width(10.0)).unwrap();
        t.add_column(Column::new("B").width(10.0)).unwrap();
        t.take_events();
        t.insert_column(0, Column::new("Z").width(5.0)).unwrap();
        let events = t.take_events();
        assert!(events.contains(&TableEvent::ColumnInserted { column: 0 }));
        assert!(events.contains(&TableEvent::ColumnMoved { column: 1 }));
        assert!(events.contains(&TableEvent::ColumnMoved { column: 2 }));
    }

    #[test]
    fn test_width_change_notifies_later_columns() {
        let mut t = table();
        for name in ["A", "B", "C"] {
            t.add_column(Column::new(name).width(40.0)).unwrap();
        }
        t.take_events();
        t.column_mut(0).unwrap().set_width(60.0).unwrap();
        assert_eq!(
            t.take_events(),
            vec![
                TableEvent::ColumnResized { column: 0 },
                TableEvent::ColumnMoved { column: 1 },
                TableEvent::ColumnMoved { column: 2 },
            ]
        );
        assert!(t.column_mut(1).unwrap().set_width(-1.0).is_err());
    }

    #[test]
    fn test_set_column_order() {
        let mut t = table();
        for name in ["A", "B", "C"] {
            t.add_column(Column::new(name).width(40.0)).unwrap();
        }
        t.take_events();
        assert!(t.set_column_order(&[0, 0, 1]).is_err());
        assert_eq!(t.column_order(), vec![0, 1, 2]);
        t.set_column_order(&[2, 0, 1]).unwrap();
        assert_eq!(t.column_order(), vec![2, 0, 1]);
        assert_eq!(t.take_events().len(), 3);
        assert_eq!(t.column_at(10.0), Some(2));
        assert_eq!(t.column_at(50.0), Some(0));
    }

    #[test]
    fn test_pack_uses_widest_content() {
        let mut t = table();
        t.add_column(Column::new("Hi")).unwrap();
        t.add_row().unwrap().set_text(0, "a much longer cell").unwrap();
        t.column_mut(0).unwrap().pack();
        let expected = 2.0 * CELL_MARGIN + 18.0 * 8.0;
        assert_eq!(t.column(0).unwrap().get_width(), expected);
    }

    #[test]
    fn test_pack_consults_measure_hook() {
        let mut t = table();
        t.add_column(Column::new("Hi")).unwrap();
        t.add_row().unwrap();
        t.on_measure_item(|item| item.width = 250.0);
        t.column_mut(0).unwrap().pack();
        assert_eq!(t.column(0).unwrap().get_width(), 250.0);
    }

    // ===== Geometry Tests =====

    #[test]
    fn test_item_at_and_bounds() {
        let mut t = with_rows(20);
        t.add_column(Column::new("A").width(100.0)).unwrap();
        let header = t.header_height();
        assert_eq!(header, 16.0 + 2.0 * HEADER_PADDING);
        assert_eq!(t.item_at(Point::new(5.0, header + 1.0)), Some(0));
        assert_eq!(t.item_at(Point::new(5.0, header + 41.0)), Some(2));
        assert_eq!(t.item_at(Point::new(5.0, 1.0)), None);
        let bounds = t.item_bounds(2).unwrap();
        assert_eq!(bounds.y, header + 40.0);
        assert_eq!(bounds.height, 20.0);
    }

    #[test]
    fn test_image_grows_rows() {
        let mut t = with_rows(1);
        t.item_mut(0)
            .unwrap()
            .set_image(0, Some(Image::new(1, 16.0, 32.0)))
            .unwrap();
        assert_eq!(t.item_height(), 32.0 + 2.0 * ROW_PADDING);
    }

    #[test]
    fn test_set_item_height_validates() {
        let mut t = table();
        assert!(t.set_item_height(0.0).is_err());
        t.set_item_height(25.0).unwrap();
        assert_eq!(t.item_height(), 25.0);
    }

    // ===== Disposal Tests =====

    #[test]
    fn test_disposed_table_rejects_operations() {
        let mut t = with_rows(3);
        t.dispose();
        assert!(t.is_disposed());
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.add_row().err(), Some(TableError::Disposed));
        assert_eq!(t.item(0).err(), Some(TableError::Disposed));
        assert_eq!(t.set_row_count(2), Err(TableError::Disposed));
        assert!(t.dispatch(&Event::key(trellis_core::Key::Down)).is_empty());
    }

    // ===== Widget Tests =====

    #[test]
    fn test_widget_measure_and_role() {
        let mut t = with_rows(4);
        assert_eq!(t.accessible_role(), AccessibleRole::List);
        t.add_column(Column::new("A").width(120.0)).unwrap();
        assert_eq!(t.accessible_role(), AccessibleRole::Table);
        let size = t.measure(Constraints::unbounded());
        assert_eq!(size.width, 120.0);
        assert_eq!(size.height, t.header_height() + 80.0);
        assert!(t.is_focusable());
    }

    #[test]
    fn test_debug_output() {
        let mut t = Table::new(
            TableConfig::new().selection(SelectionMode::Multi),
            FixedAdvance::default(),
        );
        t.config.colors.background = Color::BLACK;
        let text = format!("{t:?}");
        assert!(text.contains("Table"));
        assert!(text.contains("rows: 0"));
    }
}
