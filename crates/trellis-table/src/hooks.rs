//! Owner-draw hooks.
//!
//! A host can take over parts of cell painting in three phases: measure
//! (adjust the cell size before layout), erase (decide which default
//! background layers to draw), and paint (draw on top of the default
//! content). Hooks receive the data for one cell and the canvas; they never
//! see the table itself, so they cannot mutate or dispose it mid-paint.

use crate::table::Table;
use trellis_core::{Canvas, Rect};

/// Measure phase data for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureItem {
    /// Row index
    pub row: usize,
    /// Column creation index (0 in a table without columns)
    pub column: usize,
    /// Content width; a hook may enlarge it
    pub width: f32,
    /// Row height; a hook may enlarge it, which grows every row
    pub height: f32,
}

/// Erase phase data for one cell.
pub struct EraseItem<'a> {
    /// Row index
    pub row: usize,
    /// Column creation index
    pub column: usize,
    /// Cell bounds
    pub bounds: Rect,
    /// Is the row selected?
    pub selected: bool,
    /// Is the row focused?
    pub focused: bool,
    /// Canvas to draw on
    pub canvas: &'a mut dyn Canvas,
    /// Draw the default background
    pub draw_background: bool,
    /// Draw the default selection highlight
    pub draw_selection: bool,
    /// Draw the default content (checkbox, image, text)
    pub draw_foreground: bool,
}

/// Paint phase data for one cell.
pub struct PaintItem<'a> {
    /// Row index
    pub row: usize,
    /// Column creation index
    pub column: usize,
    /// Cell bounds
    pub bounds: Rect,
    /// Is the row selected?
    pub selected: bool,
    /// Is the row focused?
    pub focused: bool,
    /// Canvas to draw on
    pub canvas: &'a mut dyn Canvas,
    /// Draw the focus indicator after this pass; clearing it on the
    /// focused row suppresses the indicator
    pub draw_focus: bool,
}

/// Measure hook.
pub type MeasureHook = Box<dyn FnMut(&mut MeasureItem)>;
/// Erase hook.
pub type EraseHook = Box<dyn FnMut(&mut EraseItem<'_>)>;
/// Paint hook.
pub type PaintHook = Box<dyn FnMut(&mut PaintItem<'_>)>;

#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) measure: Option<MeasureHook>,
    pub(crate) erase: Option<EraseHook>,
    pub(crate) paint: Option<PaintHook>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("measure", &self.measure.is_some())
            .field("erase", &self.erase.is_some())
            .field("paint", &self.paint.is_some())
            .finish()
    }
}

impl Hooks {
    pub(crate) fn measure(&mut self, item: &mut MeasureItem) {
        if let Some(hook) = self.measure.as_mut() {
            hook(item);
        }
    }
}

impl Table {
    /// Install the measure hook, replacing any previous one.
    ///
    /// Row extents are measured again, so the hook's widths reach the
    /// scroll range and the click area.
    pub fn on_measure_item(&mut self, hook: impl FnMut(&mut MeasureItem) + 'static) {
        self.hooks.measure = Some(Box::new(hook));
        self.measure_hook_changed();
    }

    /// Install the erase hook, replacing any previous one.
    pub fn on_erase_item(&mut self, hook: impl FnMut(&mut EraseItem<'_>) + 'static) {
        self.hooks.erase = Some(Box::new(hook));
        self.redraw();
    }

    /// Install the paint hook, replacing any previous one.
    pub fn on_paint_item(&mut self, hook: impl FnMut(&mut PaintItem<'_>) + 'static) {
        self.hooks.paint = Some(Box::new(hook));
        self.redraw();
    }

    /// Remove every owner-draw hook.
    pub fn clear_hooks(&mut self) {
        let measured = self.hooks.measure.is_some();
        self.hooks = Hooks::default();
        if measured {
            self.measure_hook_changed();
        } else {
            self.redraw();
        }
    }

    fn measure_hook_changed(&mut self) {
        self.invalidate_extents();
        self.update_scroll_ranges();
        self.redraw();
    }

    /// Is any owner-draw hook installed?
    #[must_use]
    pub fn has_hooks(&self) -> bool {
        self.hooks.measure.is_some() || self.hooks.erase.is_some() || self.hooks.paint.is_some()
    }
}
