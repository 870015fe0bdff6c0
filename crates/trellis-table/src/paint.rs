//! Default painter: header, rows, grid lines, focus, and gesture feedback.
//!
//! Painting walks only the rows that intersect the damaged area, so the
//! cost of a repaint is bounded by the viewport, not the row count.

use crate::column::{Alignment, Column, SortDirection};
use crate::config::TableColors;
use crate::hooks::{EraseItem, MeasureItem, PaintItem};
use crate::input::Overlay;
use crate::table::{Table, CELL_MARGIN, IMAGE_SPACING, SORT_INDICATOR_WIDTH};
use crate::text;
use log::trace;
use trellis_core::{Canvas, CheckedState, Color, Point, Rect, TextStyle};

/// A column slot of a row as laid out on screen.
#[derive(Debug, Clone, Copy)]
struct Slot {
    column: usize,
    x: f32,
    width: f32,
}

impl Table {
    /// Paint the part of the table inside `damage`.
    pub(crate) fn paint_damage(&mut self, canvas: &mut dyn Canvas, damage: Rect) {
        if self.disposed || self.is_redraw_suspended() {
            return;
        }
        let Some(damage) = damage.intersection(&self.client) else {
            return;
        };
        trace!("painting {damage:?}");
        let colors = self.config.colors.clone();
        canvas.push_clip(damage);
        if let Some(area) = self.header_area().intersection(&damage) {
            self.paint_header(canvas, area, &colors);
        }
        if let Some(area) = self.rows_area().intersection(&damage) {
            self.paint_rows(canvas, area, &colors);
        }
        match self.drag_overlay() {
            Some(Overlay::ResizeLine(rect)) => canvas.fill_rect(rect, colors.foreground),
            Some(Overlay::Outline(rect)) => canvas.stroke_rect(rect, colors.foreground, 1.0),
            None => {}
        }
        canvas.pop_clip();
    }

    /// Column slots in display order; a list has one slot spanning the row.
    fn slots(&self) -> Vec<Slot> {
        if self.columns.is_empty() {
            return vec![Slot {
                column: 0,
                x: self.client.x - self.h_offset,
                width: self.row_width(),
            }];
        }
        (0..self.columns.len())
            .map(|display| {
                let column = self.order.creation_index_at(display);
                Slot {
                    column,
                    x: self.column_x(column),
                    width: self.columns[column].get_width(),
                }
            })
            .collect()
    }

    // =========================================================================
    // Header
    // =========================================================================

    fn paint_header(&mut self, canvas: &mut dyn Canvas, damage: Rect, colors: &TableColors) {
        let area = self.header_area();
        canvas.fill_rect(damage, colors.header_background);
        let style = TextStyle {
            font: self.config.header_font.clone(),
            color: colors.header_foreground,
        };
        let line = self.measure.line_height(&style.font);

        for slot in self.slots() {
            let cell = Rect::new(slot.x, area.y, slot.width, area.height);
            if cell.intersection(&damage).is_none() {
                continue;
            }
            let column = &self.columns[slot.column];
            let image = column.get_image();
            let sort = column.get_sort();
            let alignment = column.get_alignment();

            canvas.push_clip(cell);
            let mut left = cell.x + CELL_MARGIN;
            let mut right = cell.right() - CELL_MARGIN;
            if let Some(image) = image {
                let y = area.y + (area.height - image.height) / 2.0;
                canvas.draw_image(&image, Point::new(left, y));
                left += image.width + IMAGE_SPACING;
            }
            if sort != SortDirection::None {
                right -= SORT_INDICATOR_WIDTH;
                draw_sort_indicator(canvas, right, area, sort, colors.header_foreground);
                right -= IMAGE_SPACING;
            }
            let available = (right - left).max(0.0);
            let shown = self.header_text(slot.column, available);
            if !shown.is_empty() {
                let width = self.measure.text_width(&shown, &style.font);
                let x = aligned_x(alignment, left, right, width);
                let y = area.y + (area.height - line) / 2.0;
                canvas.draw_text(&shown, Point::new(x, y), &style);
            }
            canvas.pop_clip();

            let edge = cell.right() - 1.0;
            canvas.draw_line(
                Point::new(edge, area.y),
                Point::new(edge, area.bottom()),
                colors.grid_line,
                1.0,
            );
        }
        canvas.draw_line(
            Point::new(area.x, area.bottom() - 1.0),
            Point::new(area.right(), area.bottom() - 1.0),
            colors.grid_line,
            1.0,
        );
    }

    /// Header text shortened to `available`, cached per width.
    fn header_text(&mut self, index: usize, available: f32) -> String {
        let Self {
            columns,
            measure,
            config,
            ..
        } = self;
        let column = &mut columns[index];
        if let Some((width, shown)) = &column.display {
            if (*width - available).abs() < f32::EPSILON {
                return shown.clone();
            }
        }
        let shown = text::shorten(column.get_text(), available, &config.header_font, &**measure);
        column.display = Some((available, shown.clone()));
        shown
    }

    // =========================================================================
    // Rows
    // =========================================================================

    fn paint_rows(&mut self, canvas: &mut dyn Canvas, damage: Rect, colors: &TableColors) {
        let rows_area = self.rows_area();
        let height = self.item_height;
        if height <= 0.0 {
            return;
        }
        let first = self.top_index + ((damage.y - rows_area.y) / height).floor() as usize;
        let last = (self.top_index + ((damage.bottom() - rows_area.y) / height).ceil() as usize)
            .min(self.rows.len());

        let slots = self.slots();
        let mut draw_focus = true;
        for index in first..last {
            self.ensure_populated(index);
            if !self.measure_row(index, &slots) {
                // Rows grew; the whole table has been damaged again.
                return;
            }
            self.paint_row(canvas, index, &slots, damage, colors, &mut draw_focus);
        }

        let below = self.row_top(last).max(damage.y);
        if below < damage.bottom() {
            canvas.fill_rect(
                Rect::new(damage.x, below, damage.width, damage.bottom() - below),
                colors.background,
            );
        }

        if self.config.lines_visible {
            self.paint_grid(canvas, damage, &slots, first, last, colors.grid_line);
        }

        if self.has_focus && draw_focus {
            if self.rows.is_empty() {
                canvas.draw_focus(rows_area);
            } else if let Some(focus) = self.focus.filter(|f| (first..last).contains(f)) {
                let bounds = self.hit_bounds(focus);
                canvas.draw_focus(bounds);
            }
        }
    }

    /// Run the measure hook over a row. Returns `false` if it grew the rows.
    fn measure_row(&mut self, index: usize, slots: &[Slot]) -> bool {
        if self.hooks.measure.is_none() {
            return true;
        }
        for slot in slots {
            let mut item = MeasureItem {
                row: index,
                column: slot.column,
                width: self.content_extent(index, slot.column),
                height: self.item_height,
            };
            self.hooks.measure(&mut item);
            if item.height > self.item_height {
                self.apply_item_height(item.height.ceil());
                return false;
            }
        }
        true
    }

    fn paint_row(
        &mut self,
        canvas: &mut dyn Canvas,
        index: usize,
        slots: &[Slot],
        damage: Rect,
        colors: &TableColors,
        draw_focus: &mut bool,
    ) {
        let top = self.row_top(index);
        let height = self.item_height;
        let selected = self.selection.contains(&index);
        let focused = self.focus == Some(index);
        let show_selection = selected && (self.has_focus || !self.config.hide_selection);
        let highlight = self.hit_bounds(index);
        let row_background = self.rows[index].background().unwrap_or(colors.background);

        for slot in slots {
            let bounds = Rect::new(slot.x, top, slot.width, height);
            if bounds.intersection(&damage).is_none() {
                continue;
            }

            let mut erase = EraseItem {
                row: index,
                column: slot.column,
                bounds,
                selected: show_selection,
                focused,
                canvas: &mut *canvas,
                draw_background: true,
                draw_selection: show_selection,
                draw_foreground: true,
            };
            if let Some(hook) = self.hooks.erase.as_mut() {
                hook(&mut erase);
            }
            let EraseItem {
                draw_background,
                draw_selection,
                draw_foreground,
                ..
            } = erase;

            if draw_background {
                let color = self.rows[index]
                    .cell_background(slot.column)
                    .unwrap_or(colors.background);
                canvas.fill_rect(bounds, color);
            }
            let lit = if draw_selection {
                highlight.intersection(&bounds)
            } else {
                None
            };
            if let Some(lit) = lit {
                canvas.fill_rect(lit, colors.selection_background);
            }
            if draw_foreground {
                let color = if lit.is_some() {
                    colors.selection_foreground
                } else {
                    self.rows[index]
                        .cell_foreground(slot.column)
                        .unwrap_or(colors.foreground)
                };
                canvas.push_clip(bounds);
                self.paint_cell(canvas, index, slot.column, bounds, color);
                canvas.pop_clip();
            }

            let mut item = PaintItem {
                row: index,
                column: slot.column,
                bounds,
                selected: show_selection,
                focused,
                canvas: &mut *canvas,
                draw_focus: true,
            };
            if let Some(hook) = self.hooks.paint.as_mut() {
                hook(&mut item);
            }
            if focused && !item.draw_focus {
                *draw_focus = false;
            }
        }

        // Space right of the last column
        if let Some(last) = slots.last() {
            let right = last.x + last.width;
            if right < damage.right() {
                canvas.fill_rect(
                    Rect::new(right, top, damage.right() - right, height),
                    row_background,
                );
            }
        }
    }

    /// Checkbox, image, and text of one cell.
    fn paint_cell(
        &mut self,
        canvas: &mut dyn Canvas,
        index: usize,
        column: usize,
        bounds: Rect,
        color: Color,
    ) {
        let mut left = bounds.x + CELL_MARGIN;
        let right = bounds.right() - CELL_MARGIN;
        if column == 0 && self.config.check {
            let row = &self.rows[index];
            let state = CheckedState::from_flags(row.checked(), row.grayed());
            canvas.draw_checkbox(self.checkbox_bounds(index), state);
            left += self.check_area();
        }
        if let Some(image) = self.rows[index].image(column) {
            let y = bounds.y + (bounds.height - image.height) / 2.0;
            canvas.draw_image(&image, Point::new(left, y));
            left += image.width + IMAGE_SPACING;
        }

        let available = (right - left).max(0.0);
        let shown = {
            let Self {
                rows,
                measure,
                config,
                ..
            } = self;
            rows[index].display_text(column, available, &config.font, &**measure)
        };
        if shown.is_empty() {
            return;
        }
        let row = &self.rows[index];
        let font = row
            .cell_font(column)
            .cloned()
            .unwrap_or_else(|| self.config.font.clone());
        let width = self.measure.text_width(&shown, &font);
        let line = self.measure.line_height(&font);
        let alignment = self
            .columns
            .get(column)
            .map_or(Alignment::Start, Column::get_alignment);
        let position = Point::new(
            aligned_x(alignment, left, right, width),
            bounds.y + (bounds.height - line) / 2.0,
        );
        canvas.draw_text(&shown, position, &TextStyle { font, color });
    }

    fn paint_grid(
        &self,
        canvas: &mut dyn Canvas,
        damage: Rect,
        slots: &[Slot],
        first: usize,
        last: usize,
        color: Color,
    ) {
        for index in first..last {
            let y = self.row_top(index + 1) - 1.0;
            canvas.draw_line(
                Point::new(damage.x, y),
                Point::new(damage.right(), y),
                color,
                1.0,
            );
        }
        if self.columns.is_empty() {
            return;
        }
        for slot in slots {
            let x = slot.x + slot.width - 1.0;
            if x >= damage.x && x < damage.right() {
                canvas.draw_line(
                    Point::new(x, damage.y),
                    Point::new(x, damage.bottom()),
                    color,
                    1.0,
                );
            }
        }
    }
}

/// Left edge of text `width` wide placed between `left` and `right`.
fn aligned_x(alignment: Alignment, left: f32, right: f32, width: f32) -> f32 {
    let x = match alignment {
        Alignment::Start => left,
        Alignment::Center => left + (right - left - width) / 2.0,
        Alignment::End => right - width,
    };
    x.max(left)
}

/// Small chevron at `x` pointing up for ascending, down for descending.
fn draw_sort_indicator(
    canvas: &mut dyn Canvas,
    x: f32,
    area: Rect,
    sort: SortDirection,
    color: Color,
) {
    let mid_x = x + SORT_INDICATOR_WIDTH / 2.0;
    let mid_y = area.y + area.height / 2.0;
    let half = SORT_INDICATOR_WIDTH / 4.0;
    let (tip, base) = match sort {
        SortDirection::Ascending => (mid_y - half, mid_y + half),
        SortDirection::Descending => (mid_y + half, mid_y - half),
        SortDirection::None => return,
    };
    let tip = Point::new(mid_x, tip);
    canvas.draw_line(Point::new(mid_x - 2.0 * half, base), tip, color, 1.0);
    canvas.draw_line(tip, Point::new(mid_x + 2.0 * half, base), color, 1.0);
}
