//! Repaint queue and redraw suspension.

use crate::table::Table;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use trellis_core::{Canvas, Point, Rect};

/// Row storage is compacted on resume once capacity exceeds the row count
/// by this factor.
const COMPACT_FACTOR: usize = 2;

/// A pending change to the on-screen image of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Repaint {
    /// Repaint this area from the current state.
    Damage(Rect),
    /// Move already-painted pixels from `source` to `dest`.
    Blit {
        /// Area to copy
        source: Rect,
        /// Top-left corner of the destination
        dest: Point,
    },
}

fn covers(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

impl Table {
    /// Suspend (`false`) or resume (`true`) redrawing.
    ///
    /// Calls nest: redraw resumes when every suspension has been matched.
    /// While suspended nothing is queued; on the outermost resume the
    /// deferred scroll range update runs once and the whole table is
    /// damaged.
    pub fn set_redraw(&mut self, redraw: bool) {
        if !redraw {
            self.suspended += 1;
            return;
        }
        if self.suspended == 0 {
            return;
        }
        self.suspended -= 1;
        if self.suspended > 0 {
            return;
        }
        if self.ranges_pending {
            self.update_scroll_ranges();
        }
        if self.rows.capacity() > self.rows.len().saturating_mul(COMPACT_FACTOR) + 64 {
            debug!(
                "compacting row storage: capacity {} for {} rows",
                self.rows.capacity(),
                self.rows.len()
            );
            self.rows.shrink_to_fit();
        }
        self.redraw();
    }

    /// Suspend redrawing until the returned guard is dropped.
    ///
    /// ```
    /// use trellis_table::{Table, TableConfig};
    /// use trellis_core::{FixedAdvance, Rect};
    ///
    /// let mut table = Table::new(TableConfig::default(), FixedAdvance::default());
    /// table.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
    /// table.take_repaints();
    /// {
    ///     let mut batch = table.suspend_redraw();
    ///     for _ in 0..100 {
    ///         batch.add_row().unwrap();
    ///     }
    ///     assert!(batch.take_repaints().is_empty());
    /// }
    /// assert_eq!(table.take_repaints().len(), 1);
    /// ```
    pub fn suspend_redraw(&mut self) -> RedrawGuard<'_> {
        self.set_redraw(false);
        RedrawGuard { table: self }
    }

    /// Is redrawing currently suspended?
    #[must_use]
    pub const fn is_redraw_suspended(&self) -> bool {
        self.suspended > 0
    }

    /// Drain the queued repaints.
    pub fn take_repaints(&mut self) -> Vec<Repaint> {
        std::mem::take(&mut self.repaints)
    }

    /// Is anything waiting to be rendered?
    #[must_use]
    pub fn has_pending_repaints(&self) -> bool {
        !self.repaints.is_empty()
    }

    /// Apply every queued repaint to `canvas`, in order.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        for repaint in self.take_repaints() {
            match repaint {
                Repaint::Blit { source, dest } => canvas.copy_area(source, dest),
                Repaint::Damage(area) => self.paint_damage(canvas, area),
            }
        }
    }

    /// Damage the whole client area.
    pub fn redraw(&mut self) {
        let client = self.client;
        self.redraw_rect(client);
    }

    /// Damage part of the client area.
    pub fn redraw_area(&mut self, area: Rect) {
        self.redraw_rect(area);
    }

    pub(crate) fn has_pending_damage(&self) -> bool {
        self.repaints
            .iter()
            .any(|r| matches!(r, Repaint::Damage(_)))
    }

    pub(crate) fn redraw_rect(&mut self, area: Rect) {
        if self.is_redraw_suspended() || self.disposed {
            return;
        }
        let Some(area) = area.intersection(&self.client) else {
            return;
        };
        let already = self.repaints.iter().any(|r| match r {
            Repaint::Damage(queued) => covers(queued, &area),
            Repaint::Blit { .. } => false,
        });
        if !already {
            self.repaints.push(Repaint::Damage(area));
        }
    }

    /// Damage one row if it is on screen.
    pub(crate) fn redraw_row(&mut self, index: usize) {
        self.redraw_rows(index, index + 1);
    }

    /// Damage rows `start..end` that are on screen.
    pub(crate) fn redraw_rows(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let last_visible = self.top_index + self.visible_row_count() + 1;
        let start = start.max(self.top_index);
        let end = end.min(last_visible);
        if start >= end {
            return;
        }
        let top = self.row_top(start);
        let height = (end - start) as f32 * self.item_height;
        let rows = self.rows_area();
        self.redraw_rect(Rect::new(rows.x, top, rows.width, height));
    }

    /// Damage everything from row `index` down, for rows that shifted.
    pub(crate) fn redraw_from_row(&mut self, index: usize) {
        let rows = self.rows_area();
        let top = self.row_top(index).max(rows.y);
        if top < rows.bottom() {
            self.redraw_rect(Rect::new(rows.x, top, rows.width, rows.bottom() - top));
        }
    }

    pub(crate) fn redraw_checkbox(&mut self, index: usize) {
        if index >= self.top_index && index <= self.top_index + self.visible_row_count() {
            let bounds = self.checkbox_bounds(index);
            self.redraw_rect(bounds);
        }
    }
}

/// Keeps redraw suspended for its lifetime.
///
/// Dereferences to the table, so a batch of changes can be made through
/// the guard.
pub struct RedrawGuard<'a> {
    table: &'a mut Table,
}

impl Deref for RedrawGuard<'_> {
    type Target = Table;

    fn deref(&self) -> &Table {
        self.table
    }
}

impl DerefMut for RedrawGuard<'_> {
    fn deref_mut(&mut self) -> &mut Table {
        self.table
    }
}

impl Drop for RedrawGuard<'_> {
    fn drop(&mut self) {
        self.table.set_redraw(true);
    }
}
