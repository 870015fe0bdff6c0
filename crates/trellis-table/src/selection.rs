//! Programmatic selection and the bookkeeping that keeps selection, focus,
//! and anchor valid across structural changes.
//!
//! Nothing here raises selection notifications; only user input does.

use crate::event::TableEvent;
use crate::table::Table;
use std::collections::BTreeSet;

impl Table {
    /// Is the row at `index` selected?
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Lowest selected row.
    #[must_use]
    pub fn selection_index(&self) -> Option<usize> {
        self.selection.iter().next().copied()
    }

    /// All selected rows in ascending order.
    #[must_use]
    pub fn selection_indices(&self) -> Vec<usize> {
        self.selection.iter().copied().collect()
    }

    /// Number of selected rows.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Focused row.
    #[must_use]
    pub const fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    /// Anchor of the current shift-extended range.
    #[must_use]
    pub const fn anchor_index(&self) -> Option<usize> {
        self.anchor
    }

    /// Add a row to the selection. Out-of-range indices are ignored; in
    /// single mode the row replaces the selection.
    pub fn select(&mut self, index: usize) {
        if self.disposed || index >= self.rows.len() {
            return;
        }
        if self.config.is_multi() {
            if self.selection.insert(index) {
                self.redraw_row(index);
            }
        } else {
            self.replace_selection(BTreeSet::from([index]));
        }
    }

    /// Add rows `start..=end` to the selection, clamped to the row count.
    /// In single mode only a one-row range is accepted.
    pub fn select_range(&mut self, start: usize, end: usize) {
        if self.disposed || start > end || start >= self.rows.len() {
            return;
        }
        if !self.config.is_multi() {
            if start == end {
                self.select(start);
            }
            return;
        }
        let end = end.min(self.rows.len() - 1);
        let mut next = self.selection.clone();
        next.extend(start..=end);
        self.replace_selection(next);
    }

    /// Add the listed rows to the selection, skipping invalid ones. In
    /// single mode only a one-element list is accepted.
    pub fn select_indices(&mut self, indices: &[usize]) {
        if self.disposed {
            return;
        }
        if !self.config.is_multi() {
            if let [index] = indices {
                self.select(*index);
            }
            return;
        }
        let count = self.rows.len();
        let mut next = self.selection.clone();
        next.extend(indices.iter().copied().filter(|&i| i < count));
        self.replace_selection(next);
    }

    /// Select every row. Ignored in single mode.
    pub fn select_all(&mut self) {
        if self.disposed || !self.config.is_multi() {
            return;
        }
        let all: BTreeSet<usize> = (0..self.rows.len()).collect();
        self.replace_selection(all);
    }

    /// Remove a row from the selection.
    pub fn deselect(&mut self, index: usize) {
        if self.selection.remove(&index) {
            self.redraw_row(index);
        }
    }

    /// Remove rows `start..=end` from the selection.
    pub fn deselect_range(&mut self, start: usize, end: usize) {
        if start > end {
            return;
        }
        let next: BTreeSet<usize> = self
            .selection
            .iter()
            .copied()
            .filter(|i| !(start..=end).contains(i))
            .collect();
        self.replace_selection(next);
    }

    /// Remove the listed rows from the selection.
    pub fn deselect_indices(&mut self, indices: &[usize]) {
        let next: BTreeSet<usize> = self
            .selection
            .iter()
            .copied()
            .filter(|i| !indices.contains(i))
            .collect();
        self.replace_selection(next);
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.replace_selection(BTreeSet::new());
    }

    /// Make `index` the only selected row, focus it, and scroll it into
    /// view. An out-of-range index just clears the selection.
    pub fn set_selection(&mut self, index: usize) {
        self.deselect_all();
        if self.disposed || index >= self.rows.len() {
            return;
        }
        self.select(index);
        self.move_focus(Some(index), false);
        self.anchor = None;
        self.reveal_row(index);
    }

    /// Replace the selection with rows `start..=end`.
    pub fn set_selection_range(&mut self, start: usize, end: usize) {
        self.deselect_all();
        self.select_range(start, end);
        self.focus_first_selected();
    }

    /// Replace the selection with the listed rows.
    pub fn set_selection_indices(&mut self, indices: &[usize]) {
        self.deselect_all();
        self.select_indices(indices);
        self.focus_first_selected();
    }

    fn focus_first_selected(&mut self) {
        if let Some(first) = self.selection_index() {
            self.move_focus(Some(first), false);
            self.anchor = None;
            self.show_selection();
        }
    }

    /// Swap in a new selection, damaging only rows whose state changed.
    pub(crate) fn replace_selection(&mut self, next: BTreeSet<usize>) {
        if next == self.selection {
            return;
        }
        let changed: Vec<usize> = self
            .selection
            .symmetric_difference(&next)
            .copied()
            .collect();
        self.selection = next;
        let first = self.top_index;
        let last = first + self.visible_row_count() + 1;
        for index in changed {
            if (first..last).contains(&index) {
                self.redraw_row(index);
            }
        }
    }

    /// Move keyboard focus, damaging the old and new focus rows.
    pub(crate) fn move_focus(&mut self, row: Option<usize>, notify: bool) {
        if self.focus == row {
            return;
        }
        let old = std::mem::replace(&mut self.focus, row);
        if let Some(old) = old {
            self.redraw_row(old);
        }
        if let Some(new) = row {
            self.redraw_row(new);
        }
        if notify {
            self.events.push(TableEvent::FocusChanged { row });
        }
    }

    /// Shift tracked indices after `count` rows were inserted at `start`.
    pub(crate) fn shift_for_insert(&mut self, start: usize, count: usize) {
        let shift = |i: usize| if i >= start { i + count } else { i };
        self.selection = self.selection.iter().map(|&i| shift(i)).collect();
        self.focus = self.focus.map(shift);
        self.anchor = self.anchor.map(shift);
        if let Some(click) = &mut self.last_click {
            click.target = shift(click.target);
        }
    }

    /// Shift tracked indices after rows `start..start + count` were removed.
    ///
    /// A removed focus row passes focus to the previous row, else the next,
    /// else nothing. A removed anchor is forgotten.
    pub(crate) fn shift_for_remove(&mut self, start: usize, count: usize) {
        let end = start + count;
        let map = |i: usize| {
            if i < start {
                Some(i)
            } else if i >= end {
                Some(i - count)
            } else {
                None
            }
        };
        self.selection = self.selection.iter().filter_map(|&i| map(i)).collect();
        self.anchor = self.anchor.and_then(map);
        self.last_click = self
            .last_click
            .and_then(|click| map(click.target).map(|target| click.retarget(target)));

        if let Some(focus) = self.focus {
            match map(focus) {
                Some(shifted) => self.focus = Some(shifted),
                None => {
                    let next = if start > 0 {
                        Some(start - 1)
                    } else if start < self.rows.len() {
                        Some(start)
                    } else {
                        None
                    };
                    self.focus = next;
                    self.events.push(TableEvent::FocusChanged { row: next });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TableConfig;
    use crate::event::TableEvent;
    use crate::redraw::Repaint;
    use crate::table::Table;
    use proptest::prelude::*;
    use trellis_core::{FixedAdvance, Rect};

    fn table(multi: bool, rows: usize) -> Table {
        let config = if multi {
            TableConfig::new().multi()
        } else {
            TableConfig::new()
        };
        let mut t = Table::new(config, FixedAdvance::new(8.0, 16.0));
        t.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
        t.set_row_count(rows).unwrap();
        t.take_events();
        t
    }

    // ===== Programmatic Selection Tests =====

    #[test]
    fn test_single_mode_replaces() {
        let mut t = table(false, 5);
        t.select(1);
        t.select(3);
        assert_eq!(t.selection_indices(), vec![3]);
        t.select_range(0, 2);
        assert_eq!(t.selection_indices(), vec![3]);
        t.select_indices(&[0, 1]);
        assert_eq!(t.selection_indices(), vec![3]);
        t.select_indices(&[4]);
        assert_eq!(t.selection_indices(), vec![4]);
        t.select_all();
        assert_eq!(t.selection_count(), 1);
    }

    #[test]
    fn test_multi_mode_accumulates() {
        let mut t = table(true, 10);
        t.select(1);
        t.select_range(4, 6);
        t.select_indices(&[8, 42]);
        assert_eq!(t.selection_indices(), vec![1, 4, 5, 6, 8]);
        assert_eq!(t.selection_index(), Some(1));
        t.deselect_range(5, 8);
        assert_eq!(t.selection_indices(), vec![1, 4]);
        t.select_all();
        assert_eq!(t.selection_count(), 10);
        t.deselect_indices(&[0, 9]);
        assert_eq!(t.selection_count(), 8);
        t.deselect_all();
        assert_eq!(t.selection_index(), None);
    }

    #[test]
    fn test_select_damages_only_that_row() {
        let mut t = table(true, 10);
        t.select(1);
        t.take_repaints();
        let row_two = vec![Repaint::Damage(Rect::new(0.0, 40.0, 200.0, 20.0))];
        t.select(2);
        assert_eq!(t.take_repaints(), row_two);
        t.select(2);
        assert!(t.take_repaints().is_empty());
        t.deselect(2);
        assert_eq!(t.take_repaints(), row_two);
        t.select(8);
        assert!(t.take_repaints().is_empty());
        assert_eq!(t.selection_indices(), vec![1, 8]);
    }

    #[test]
    fn test_programmatic_selection_is_silent() {
        let mut t = table(true, 5);
        t.select(1);
        t.set_selection(2);
        t.select_all();
        assert!(t.take_events().is_empty());
    }

    #[test]
    fn test_set_selection_focuses_and_reveals() {
        let mut t = table(false, 50);
        t.set_selection(30);
        assert_eq!(t.selection_indices(), vec![30]);
        assert_eq!(t.focus_index(), Some(30));
        assert!(t.top_index() <= 30 && 30 < t.top_index() + t.visible_row_count());
        t.set_selection(99);
        assert_eq!(t.selection_count(), 0);
    }

    #[test]
    fn test_select_range_clamps_end() {
        let mut t = table(true, 5);
        t.set_selection_range(3, 100);
        assert_eq!(t.selection_indices(), vec![3, 4]);
        assert_eq!(t.focus_index(), Some(3));
    }

    // ===== Structural Bookkeeping Tests =====

    #[test]
    fn test_insert_shifts_selection_and_focus() {
        let mut t = table(true, 5);
        t.set_selection_indices(&[1, 3]);
        t.insert_row(2).unwrap();
        assert_eq!(t.selection_indices(), vec![1, 4]);
        assert_eq!(t.focus_index(), Some(1));
    }

    #[test]
    fn test_removing_focus_moves_to_previous() {
        let mut t = table(true, 5);
        t.set_selection_indices(&[2, 3]);
        t.remove_row(2).unwrap();
        assert_eq!(t.selection_indices(), vec![2]);
        assert_eq!(t.focus_index(), Some(1));
        assert!(t
            .take_events()
            .contains(&TableEvent::FocusChanged { row: Some(1) }));
    }

    #[test]
    fn test_removing_first_focus_moves_to_next() {
        let mut t = table(false, 3);
        t.set_selection(0);
        t.remove_row(0).unwrap();
        assert_eq!(t.focus_index(), Some(0));
        t.remove_all().unwrap();
        assert_eq!(t.focus_index(), None);
        assert_eq!(t.selection_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_selection_stays_in_range(
            rows in 1usize..40,
            picks in prop::collection::vec(0usize..40, 0..10),
            removals in prop::collection::vec(0usize..40, 0..10),
        ) {
            let mut t = table(true, rows);
            t.select_indices(&picks);
            if let Some(&first) = picks.first() {
                if first < rows {
                    t.set_selection(first);
                }
            }
            for r in removals {
                if r < t.row_count() {
                    t.remove_row(r).unwrap();
                }
            }
            let count = t.row_count();
            prop_assert!(t.selection_indices().iter().all(|&i| i < count));
            prop_assert!(t.focus_index().map_or(true, |f| f < count));
            prop_assert!(t.top_index() <= count.saturating_sub(t.visible_row_count().max(1)));
            for i in 0..count {
                prop_assert_eq!(t.row(i).unwrap().index(), i);
            }
        }
    }
}
