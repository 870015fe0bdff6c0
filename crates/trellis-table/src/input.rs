//! Input state machine: pointer, keyboard, type-ahead, and header
//! gestures.

use crate::event::TableEvent;
use crate::table::{Table, RESIZE_TOLERANCE};
use crate::viewport::H_SCROLL_STEP;
use log::{debug, trace};
use std::collections::BTreeSet;
use trellis_core::{Event, Key, Modifiers, MouseButton, Point, Rect};

/// Pointer travel before a header press turns into a column drag.
const DRAG_THRESHOLD: f32 = 3.0;

/// A press remembered for double-click detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Click {
    /// Row index, or column index for header edges
    pub(crate) target: usize,
    pub(crate) time_ms: u64,
}

impl Click {
    pub(crate) const fn retarget(self, target: usize) -> Self {
        Self { target, ..self }
    }

    const fn repeats(self, target: usize, time_ms: u64, interval: u64) -> bool {
        self.target == target && time_ms.saturating_sub(self.time_ms) <= interval
    }
}

/// A header gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Drag {
    /// Dragging a column's right edge
    Resize {
        column: usize,
        start_x: f32,
        original: f32,
        current_x: f32,
    },
    /// Pressed on a header cell; becomes a move once the pointer travels
    Header {
        column: usize,
        start_x: f32,
        current_x: f32,
        moved: bool,
    },
}

/// Feedback drawn over the table during a header gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Overlay {
    /// Vertical line at the prospective column edge
    ResizeLine(Rect),
    /// Outline of the column being moved, confined to the header
    Outline(Rect),
}

impl Overlay {
    pub(crate) const fn rect(self) -> Rect {
        match self {
            Self::ResizeLine(rect) | Self::Outline(rect) => rect,
        }
    }
}

impl Table {
    /// Feed one input event through the state machine.
    ///
    /// Returns the notifications this event produced, in order.
    pub fn dispatch(&mut self, event: &Event) -> Vec<TableEvent> {
        if self.disposed {
            return Vec::new();
        }
        let start = self.events.len();
        match event {
            Event::PointerDown {
                position,
                button,
                modifiers,
                time_ms,
            } => self.pointer_down(*position, *button, *modifiers, *time_ms),
            Event::PointerMove { position, .. } => self.pointer_move(*position),
            Event::PointerUp { position, .. } => self.pointer_up(*position),
            Event::KeyDown { key, modifiers } => self.key_down(*key, *modifiers),
            Event::TextInput { text } => self.type_ahead(text),
            Event::Scroll { delta_x, delta_y } => self.scroll_by(*delta_x, *delta_y),
            Event::Paint { damage } => self.redraw_rect(*damage),
            Event::FocusIn => self.focus_changed(true),
            Event::FocusOut => self.focus_changed(false),
            Event::Resize { width, height } => {
                let bounds = Rect::new(self.client.x, self.client.y, *width, *height);
                self.set_bounds(bounds);
            }
        }
        self.events.split_off(start)
    }

    /// Does the table have keyboard focus?
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn pointer_down(
        &mut self,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        time_ms: u64,
    ) {
        if self.header_area().contains_point(&position) {
            if button == MouseButton::Left {
                self.header_pressed(position, time_ms);
            }
            return;
        }
        let Some(row) = self.item_at(position) else {
            return;
        };
        self.ensure_populated(row);
        if button == MouseButton::Left
            && self.config.check
            && self.checkbox_bounds(row).contains_point(&position)
        {
            self.toggle_check(row);
            return;
        }
        if !self.config.full_selection && !self.hit_bounds(row).contains_point(&position) {
            return;
        }
        match button {
            MouseButton::Left => self.row_clicked(row, modifiers, time_ms),
            MouseButton::Right => self.row_context_clicked(row),
            MouseButton::Middle => {}
        }
    }

    fn row_clicked(&mut self, row: usize, modifiers: Modifiers, time_ms: u64) {
        let interval = self.config.double_click_ms;
        if self
            .last_click
            .is_some_and(|click| click.repeats(row, time_ms, interval))
        {
            // The first click already selected the row.
            self.last_click = None;
            debug!("default selection on row {row}");
            self.events.push(TableEvent::DefaultSelection { row });
            return;
        }
        self.last_click = Some(Click {
            target: row,
            time_ms,
        });

        let multi = self.config.is_multi();
        if multi && modifiers.shift {
            let anchor = *self.anchor.get_or_insert(self.focus.unwrap_or(row));
            let range = anchor.min(row)..=anchor.max(row);
            let next = if modifiers.control {
                let mut next = self.selection.clone();
                next.extend(range);
                next
            } else {
                range.collect()
            };
            self.replace_selection(next);
        } else if multi && modifiers.control {
            let mut next = self.selection.clone();
            if !next.remove(&row) {
                next.insert(row);
            }
            self.replace_selection(next);
            self.anchor = Some(row);
        } else {
            self.replace_selection(BTreeSet::from([row]));
            self.anchor = None;
        }
        self.move_focus(Some(row), true);
        self.reveal_row(row);
        self.events.push(TableEvent::selection(row));
    }

    /// Right click selects the row unless it is already part of the
    /// selection.
    fn row_context_clicked(&mut self, row: usize) {
        if !self.selection.contains(&row) {
            self.replace_selection(BTreeSet::from([row]));
            self.anchor = None;
            self.move_focus(Some(row), true);
            self.events.push(TableEvent::selection(row));
        } else {
            self.move_focus(Some(row), true);
        }
    }

    fn toggle_check(&mut self, row: usize) {
        let checked = !self.rows[row].checked();
        self.rows[row].set_checked(checked);
        trace!("row {row} checked={checked}");
        self.redraw_checkbox(row);
        self.events.push(TableEvent::check(row));
    }

    fn header_pressed(&mut self, position: Point, time_ms: u64) {
        if let Some(column) = self.resize_edge_at(position.x) {
            let interval = self.config.double_click_ms;
            if self
                .last_edge_click
                .is_some_and(|click| click.repeats(column, time_ms, interval))
            {
                self.last_edge_click = None;
                self.pack_column(column);
                return;
            }
            self.last_edge_click = Some(Click {
                target: column,
                time_ms,
            });
            self.drag = Some(Drag::Resize {
                column,
                start_x: position.x,
                original: self.columns[column].get_width(),
                current_x: position.x,
            });
            return;
        }
        if let Some(column) = self.column_at(position.x) {
            self.drag = Some(Drag::Header {
                column,
                start_x: position.x,
                current_x: position.x,
                moved: false,
            });
        }
    }

    /// Resizable column whose right edge is within reach of `x`. Later
    /// display columns win so a zero-width column can still be widened.
    fn resize_edge_at(&self, x: f32) -> Option<usize> {
        (0..self.columns.len())
            .rev()
            .map(|display| self.order.creation_index_at(display))
            .find(|&column| {
                let right = self.column_x(column) + self.columns[column].get_width();
                self.columns[column].is_resizable() && (x - right).abs() <= RESIZE_TOLERANCE
            })
    }

    fn pointer_move(&mut self, position: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let before = self.drag_overlay();
        self.drag = Some(match drag {
            Drag::Resize {
                column,
                start_x,
                original,
                ..
            } => Drag::Resize {
                column,
                start_x,
                original,
                current_x: position.x,
            },
            Drag::Header {
                column,
                start_x,
                moved,
                ..
            } => Drag::Header {
                column,
                start_x,
                current_x: position.x,
                moved: moved
                    || (self.columns[column].is_moveable()
                        && (position.x - start_x).abs() > DRAG_THRESHOLD),
            },
        });
        let after = self.drag_overlay();
        for overlay in [before, after].into_iter().flatten() {
            self.redraw_rect(overlay.rect());
        }
    }

    fn pointer_up(&mut self, position: Point) {
        let overlay = self.drag_overlay();
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let Some(overlay) = overlay {
            self.redraw_rect(overlay.rect());
        }
        match drag {
            Drag::Resize {
                column,
                start_x,
                original,
                ..
            } => {
                let width = (original + position.x - start_x).max(0.0);
                self.set_column_width(column, width);
            }
            Drag::Header {
                column,
                moved: false,
                ..
            } => self.events.push(TableEvent::ColumnSelected { column }),
            Drag::Header { column, .. } => self.drop_column(column, position.x),
        }
    }

    /// Move `column` to the display slot under `x`.
    fn drop_column(&mut self, column: usize, x: f32) {
        let mut order = self.column_order();
        let from = self.order.display_index_of(column);
        let mut target = order.len().saturating_sub(1);
        let mut left = self.client.x - self.h_offset;
        for (slot, &c) in order.iter().enumerate() {
            let width = self.columns[c].get_width();
            if x < left + width {
                target = slot;
                break;
            }
            left += width;
        }
        if target == from {
            return;
        }
        order.remove(from);
        order.insert(target, column);
        debug!("column {column} dragged from slot {from} to {target}");
        if let Err(err) = self.set_column_order(&order) {
            debug!("column drop rejected: {err}");
        }
    }

    /// Overlay for the gesture in progress.
    pub(crate) fn drag_overlay(&self) -> Option<Overlay> {
        match self.drag? {
            Drag::Resize {
                column,
                start_x,
                original,
                current_x,
            } => {
                let x = self.column_x(column) + (original + current_x - start_x).max(0.0);
                Some(Overlay::ResizeLine(Rect::new(
                    x - 1.0,
                    self.client.y,
                    2.0,
                    self.client.height,
                )))
            }
            Drag::Header {
                column,
                start_x,
                current_x,
                moved: true,
            } => Some(Overlay::Outline(Rect::new(
                self.column_x(column) + current_x - start_x,
                self.client.y,
                self.columns[column].get_width(),
                self.header_height(),
            ))),
            Drag::Header { .. } => None,
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Up | Key::Down | Key::Home | Key::End | Key::PageUp | Key::PageDown => {
                self.navigate(key, modifiers);
            }
            Key::Left => self.scroll_to_offset(self.h_offset - H_SCROLL_STEP),
            Key::Right => self.scroll_to_offset(self.h_offset + H_SCROLL_STEP),
            Key::Space => self.space_pressed(modifiers),
            Key::Enter => {
                if let Some(row) = self.focus {
                    self.events.push(TableEvent::DefaultSelection { row });
                }
            }
            _ => {}
        }
    }

    fn navigate(&mut self, key: Key, modifiers: Modifiers) {
        let count = self.rows.len();
        if count == 0 {
            return;
        }
        let multi = self.config.is_multi();
        if modifiers.control && matches!(key, Key::PageUp | Key::PageDown) {
            self.page_scroll(key == Key::PageDown, multi);
            return;
        }

        let last = count - 1;
        let page = self.visible_row_count().max(1);
        let current = self.focus;
        let from = current.unwrap_or_else(|| self.top_index.min(last));
        let target = match (key, current) {
            (Key::Up | Key::Down, None) => from,
            (Key::Up, Some(focus)) => focus.saturating_sub(1),
            (Key::Down, Some(focus)) => (focus + 1).min(last),
            (Key::Home, _) => 0,
            (Key::End, _) => last,
            (Key::PageUp, _) => from.saturating_sub(page),
            (Key::PageDown, _) => (from + page).min(last),
            _ => return,
        };

        if multi && modifiers.shift {
            let anchor = *self.anchor.get_or_insert(from);
            self.replace_selection((anchor.min(target)..=anchor.max(target)).collect());
            self.move_focus(Some(target), true);
            self.reveal_row(target);
            self.events.push(TableEvent::selection(target));
        } else if multi && modifiers.control {
            self.anchor = None;
            self.move_focus(Some(target), true);
            self.reveal_row(target);
        } else {
            if current == Some(target)
                && self.selection.len() == 1
                && self.selection.contains(&target)
            {
                return;
            }
            self.anchor = None;
            self.replace_selection(BTreeSet::from([target]));
            self.move_focus(Some(target), true);
            self.reveal_row(target);
            self.events.push(TableEvent::selection(target));
        }
    }

    /// Ctrl+PageUp/PageDown: scroll a page. With multi selection the focus
    /// follows to the edge row of the new page; the selection never changes.
    fn page_scroll(&mut self, down: bool, multi: bool) {
        let page = self.visible_row_count().max(1);
        let top = if down {
            self.top_index + page
        } else {
            self.top_index.saturating_sub(page)
        };
        self.scroll_to_row(top);
        if multi {
            let last = self.rows.len().saturating_sub(1);
            let target = if down {
                (self.top_index + page - 1).min(last)
            } else {
                self.top_index
            };
            self.move_focus(Some(target), true);
        }
    }

    fn space_pressed(&mut self, modifiers: Modifiers) {
        let Some(row) = self.focus else {
            return;
        };
        self.ensure_populated(row);
        if self.config.is_multi() {
            let mut next = self.selection.clone();
            if modifiers.control && next.contains(&row) {
                next.remove(&row);
            } else {
                next.insert(row);
            }
            self.replace_selection(next);
        } else {
            self.replace_selection(BTreeSet::from([row]));
        }
        self.reveal_row(row);
        self.events.push(TableEvent::selection(row));
        if self.config.check {
            self.toggle_check(row);
        }
    }

    /// Jump to the next row whose first-column text starts with the typed
    /// character, searching after the focus row and wrapping around.
    fn type_ahead(&mut self, text: &str) {
        let Some(typed) = text.chars().next() else {
            return;
        };
        if typed.is_control() {
            return;
        }
        let Some(focus) = self.focus else {
            return;
        };
        let count = self.rows.len();
        let needle: Vec<char> = typed.to_lowercase().collect();
        for offset in 1..=count {
            let index = (focus + offset) % count;
            self.ensure_populated(index);
            let hit = self.rows[index]
                .text(0)
                .and_then(|t| t.chars().next())
                .is_some_and(|first| first.to_lowercase().eq(needle.iter().copied()));
            if hit {
                trace!("type-ahead {typed:?} matched row {index}");
                self.anchor = None;
                self.replace_selection(BTreeSet::from([index]));
                self.move_focus(Some(index), true);
                self.reveal_row(index);
                self.events.push(TableEvent::selection(index));
                return;
            }
        }
    }

    fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        if delta_y != 0.0 {
            let top = self.top_index as f32 + delta_y.round();
            self.scroll_to_row(top.max(0.0) as usize);
        }
        if delta_x != 0.0 {
            self.scroll_to_offset(self.h_offset + delta_x);
        }
    }

    fn focus_changed(&mut self, focused: bool) {
        if self.has_focus == focused {
            return;
        }
        self.has_focus = focused;
        if focused && self.focus.is_none() && !self.rows.is_empty() {
            self.move_focus(Some(self.top_index), true);
        }
        self.redraw();
    }
}
