//! Scrolling: top row, horizontal offset, scroll ranges, and blits.
//!
//! Scrolling moves already-painted pixels with a [`Repaint::Blit`] and only
//! damages the strip that comes into view.

use crate::error::{Result, TableError};
use crate::redraw::Repaint;
use crate::table::Table;
use log::trace;
use serde::{Deserialize, Serialize};
use trellis_core::{Point, Rect};

/// Pixels moved by one horizontal scroll step.
pub const H_SCROLL_STEP: f32 = 10.0;

/// Range and position of a scroll bar.
///
/// Vertical values count rows; horizontal values are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollBar {
    /// Total extent
    pub maximum: f32,
    /// Visible extent
    pub thumb: f32,
    /// Current position
    pub selection: f32,
    /// Step for arrow scrolling
    pub increment: f32,
    /// Step for page scrolling
    pub page_increment: f32,
}

impl ScrollBar {
    /// Is there anything to scroll?
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.thumb < self.maximum
    }
}

impl Table {
    /// First row shown at the top of the rows area.
    #[must_use]
    pub const fn top_index(&self) -> usize {
        self.top_index
    }

    /// Number of rows that fit completely in the rows area.
    #[must_use]
    pub fn visible_row_count(&self) -> usize {
        if self.item_height <= 0.0 {
            return 0;
        }
        (self.rows_area().height.max(0.0) / self.item_height).floor() as usize
    }

    /// Largest valid top index.
    pub(crate) fn max_top_index(&self) -> usize {
        self.rows
            .len()
            .saturating_sub(self.visible_row_count().max(1))
    }

    /// Scroll so `index` is the top row, as far as the row count allows.
    ///
    /// Indices past the end clamp to the last page.
    pub fn set_top_index(&mut self, index: usize) -> Result<()> {
        self.check_alive()?;
        self.scroll_to_row(index);
        Ok(())
    }

    /// Horizontal scroll offset in pixels.
    #[must_use]
    pub const fn horizontal_offset(&self) -> f32 {
        self.h_offset
    }

    /// Scroll horizontally, clamped to the content width.
    pub fn set_horizontal_offset(&mut self, offset: f32) -> Result<()> {
        self.check_alive()?;
        self.scroll_to_offset(offset);
        Ok(())
    }

    /// Vertical scroll bar state.
    #[must_use]
    pub const fn vertical_bar(&self) -> ScrollBar {
        self.vbar
    }

    /// Horizontal scroll bar state.
    #[must_use]
    pub const fn horizontal_bar(&self) -> ScrollBar {
        self.hbar
    }

    /// How many times the scroll ranges have been recomputed.
    #[must_use]
    pub const fn scroll_range_updates(&self) -> u64 {
        self.range_updates
    }

    /// Scroll the minimum amount that brings row `index` fully into view.
    pub fn show_item(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.reveal_row(index);
        Ok(())
    }

    /// Scroll horizontally so column `index` is in view.
    pub fn show_column(&mut self, index: usize) -> Result<()> {
        self.check_alive()?;
        if index >= self.columns.len() {
            return Err(TableError::ColumnOutOfRange {
                index,
                count: self.columns.len(),
            });
        }
        let left = self.column_x(index) - self.client.x + self.h_offset;
        let right = left + self.columns[index].get_width();
        if left < self.h_offset {
            self.scroll_to_offset(left);
        } else if right > self.h_offset + self.client.width {
            self.scroll_to_offset((right - self.client.width).min(left));
        }
        Ok(())
    }

    /// Scroll the first selected row into view.
    pub fn show_selection(&mut self) {
        if let Some(&first) = self.selection.iter().next() {
            self.reveal_row(first);
        }
    }

    pub(crate) fn reveal_row(&mut self, index: usize) {
        let visible = self.visible_row_count().max(1);
        if index < self.top_index {
            self.scroll_to_row(index);
        } else if index >= self.top_index + visible {
            self.scroll_to_row(index + 1 - visible);
        }
    }

    /// Move the top row, blitting the rows that stay visible.
    pub(crate) fn scroll_to_row(&mut self, index: usize) {
        let index = index.min(self.max_top_index());
        if index == self.top_index {
            return;
        }
        let delta = index as f32 - self.top_index as f32;
        trace!("top index {} -> {index}", self.top_index);
        self.top_index = index;
        self.vbar.selection = index as f32;
        let area = self.rows_area();
        self.scroll_area(area, 0.0, -delta * self.item_height);
    }

    /// Move the horizontal offset, blitting the columns that stay visible.
    pub(crate) fn scroll_to_offset(&mut self, offset: f32) {
        let max = (self.content_width() - self.client.width).max(0.0);
        let offset = offset.clamp(0.0, max);
        if (offset - self.h_offset).abs() < f32::EPSILON {
            return;
        }
        let delta = offset - self.h_offset;
        trace!("horizontal offset {} -> {offset}", self.h_offset);
        self.h_offset = offset;
        self.hbar.selection = offset;
        let area = self.client;
        self.scroll_area(area, -delta, 0.0);
    }

    /// Queue a blit moving the content of `area` by `(dx, dy)` and damage
    /// the exposed strips.
    fn scroll_area(&mut self, area: Rect, dx: f32, dy: f32) {
        if self.is_redraw_suspended() || self.disposed || area.is_empty() {
            return;
        }
        // Pending damage was computed for the old scroll position.
        if dx.abs() >= area.width || dy.abs() >= area.height || self.has_pending_damage() {
            self.redraw_rect(area);
            return;
        }
        let source = Rect::new(
            area.x + (-dx).max(0.0),
            area.y + (-dy).max(0.0),
            area.width - dx.abs(),
            area.height - dy.abs(),
        );
        let dest = Point::new(source.x + dx, source.y + dy);
        self.repaints.push(Repaint::Blit { source, dest });
        if dy < 0.0 {
            self.redraw_rect(Rect::new(area.x, area.bottom() + dy, area.width, -dy));
        } else if dy > 0.0 {
            self.redraw_rect(Rect::new(area.x, area.y, area.width, dy));
        }
        if dx < 0.0 {
            self.redraw_rect(Rect::new(area.right() + dx, area.y, -dx, area.height));
        } else if dx > 0.0 {
            self.redraw_rect(Rect::new(area.x, area.y, dx, area.height));
        }
    }

    /// Pull the top index back into range after rows went away.
    pub(crate) fn clamp_top_index(&mut self) {
        let max = self.max_top_index();
        if self.top_index > max {
            self.top_index = max;
            self.vbar.selection = max as f32;
            let area = self.rows_area();
            self.redraw_rect(area);
        }
    }

    /// Recompute both scroll bar ranges.
    ///
    /// While redraw is suspended the work is deferred and done once on
    /// resume.
    pub(crate) fn update_scroll_ranges(&mut self) {
        if self.is_redraw_suspended() {
            self.ranges_pending = true;
            return;
        }
        self.ranges_pending = false;
        self.range_updates += 1;
        if self.columns.is_empty() && self.list_rescan {
            self.rescan_list_width();
        }

        let rows = self.rows.len();
        let visible = self.visible_row_count();
        self.vbar = ScrollBar {
            maximum: rows as f32,
            thumb: visible.min(rows) as f32,
            selection: self.top_index as f32,
            increment: 1.0,
            page_increment: visible.max(1) as f32,
        };
        let content = self.content_width();
        self.hbar = ScrollBar {
            maximum: content,
            thumb: self.client.width.min(content),
            selection: self.h_offset,
            increment: H_SCROLL_STEP,
            page_increment: self.client.width,
        };

        self.clamp_top_index();
        let max_offset = (content - self.client.width).max(0.0);
        if self.h_offset > max_offset {
            self.h_offset = max_offset;
            self.hbar.selection = max_offset;
            self.redraw();
        }
        trace!(
            "scroll ranges: rows={rows} visible={visible} content_width={content}"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::column::Column;
    use crate::config::TableConfig;
    use crate::redraw::Repaint;
    use crate::table::Table;
    use trellis_core::{FixedAdvance, Point, Rect};

    /// 100 rows of 20px in a 100px rows area: 5 rows visible.
    fn scrolled_table() -> Table {
        let mut t = Table::new(
            TableConfig::new().header_visible(false),
            FixedAdvance::new(8.0, 16.0),
        );
        t.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
        t.add_column(Column::new("A").width(150.0)).unwrap();
        t.add_column(Column::new("B").width(150.0)).unwrap();
        t.set_row_count(100).unwrap();
        t.take_repaints();
        t
    }

    #[test]
    fn test_visible_row_count() {
        let t = scrolled_table();
        assert_eq!(t.visible_row_count(), 5);
        let bar = t.vertical_bar();
        assert_eq!(bar.maximum, 100.0);
        assert_eq!(bar.thumb, 5.0);
        assert!(bar.is_visible());
    }

    #[test]
    fn test_top_index_clamped() {
        let mut t = scrolled_table();
        t.set_top_index(99).unwrap();
        assert_eq!(t.top_index(), 95);
        t.set_top_index(3).unwrap();
        t.set_top_index(1000).unwrap();
        assert_eq!(t.top_index(), 95);
        assert_eq!(t.vertical_bar().selection, 95.0);
    }

    #[test]
    fn test_top_index_on_short_table() {
        let mut t = Table::new(TableConfig::default(), FixedAdvance::default());
        t.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
        t.set_row_count(3).unwrap();
        assert_eq!(t.set_top_index(10), Ok(()));
        assert_eq!(t.top_index(), 0);
        t.dispose();
        assert_eq!(t.set_top_index(0), Err(crate::error::TableError::Disposed));
    }

    #[test]
    fn test_show_item_scrolls_minimally() {
        let mut t = scrolled_table();
        t.show_item(7).unwrap();
        assert_eq!(t.top_index(), 3);
        t.show_item(5).unwrap();
        assert_eq!(t.top_index(), 3);
        t.show_item(1).unwrap();
        assert_eq!(t.top_index(), 1);
    }

    #[test]
    fn test_scroll_by_one_row_blits() {
        let mut t = scrolled_table();
        t.set_top_index(1).unwrap();
        let repaints = t.take_repaints();
        assert_eq!(
            repaints,
            vec![
                Repaint::Blit {
                    source: Rect::new(0.0, 20.0, 200.0, 80.0),
                    dest: Point::new(0.0, 0.0),
                },
                Repaint::Damage(Rect::new(0.0, 80.0, 200.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_scroll_with_pending_damage_repaints_area() {
        let mut t = scrolled_table();
        t.redraw_area(Rect::new(0.0, 0.0, 10.0, 10.0));
        t.set_top_index(1).unwrap();
        let repaints = t.take_repaints();
        assert!(repaints.iter().all(|r| matches!(r, Repaint::Damage(_))));
    }

    #[test]
    fn test_far_scroll_repaints_everything() {
        let mut t = scrolled_table();
        t.set_top_index(50).unwrap();
        assert_eq!(
            t.take_repaints(),
            vec![Repaint::Damage(Rect::new(0.0, 0.0, 200.0, 100.0))]
        );
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut t = scrolled_table();
        assert_eq!(t.horizontal_bar().maximum, 300.0);
        t.set_horizontal_offset(500.0).unwrap();
        assert_eq!(t.horizontal_offset(), 100.0);
        t.show_column(0).unwrap();
        assert_eq!(t.horizontal_offset(), 0.0);
        t.show_column(1).unwrap();
        assert_eq!(t.horizontal_offset(), 100.0);
    }

    #[test]
    fn test_removing_rows_clamps_top() {
        let mut t = scrolled_table();
        t.set_top_index(90).unwrap();
        t.set_row_count(10).unwrap();
        assert_eq!(t.top_index(), 5);
    }

    #[test]
    fn test_resize_changes_visible_count() {
        let mut t = scrolled_table();
        t.set_top_index(95).unwrap();
        t.set_bounds(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(t.visible_row_count(), 10);
        assert_eq!(t.top_index(), 90);
    }
}
