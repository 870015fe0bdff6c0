//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute preferred size given constraints
//! 2. **Layout**: Accept the bounds allocated by the parent
//! 3. **Paint**: Issue draw calls for a damaged area
//!
//! Input arrives through [`Widget::event`] as a single [`Event`] value.
//!
//! # Examples
//!
//! ```
//! use trellis_core::{Constraints, LayoutResult, Size};
//!
//! let constraints = Constraints::new(0.0, 200.0, 0.0, 100.0);
//! let result = LayoutResult { size: constraints.constrain(Size::new(300.0, 50.0)) };
//! assert_eq!(result.size, Size::new(200.0, 50.0));
//! ```

use crate::accessibility::AccessibleRole;
use crate::canvas::Canvas;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
///
/// Widgets run on the UI thread only, so the trait carries no `Send`/`Sync`
/// bounds and painting may update internal caches.
pub trait Widget {
    /// Compute preferred size within the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds allocated by the parent.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint the part of the widget that intersects `damage`.
    fn paint(&mut self, canvas: &mut dyn Canvas, damage: Rect);

    /// Handle input events, returning any message the widget emitted.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>>;

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::color::Color;

    struct Swatch {
        bounds: Rect,
    }

    impl Widget for Swatch {
        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(20.0, 20.0))
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&mut self, canvas: &mut dyn Canvas, damage: Rect) {
            if let Some(area) = self.bounds.intersection(&damage) {
                canvas.fill_rect(area, Color::WHITE);
            }
        }

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any>> {
            None
        }
    }

    #[test]
    fn test_widget_defaults() {
        let w = Swatch {
            bounds: Rect::default(),
        };
        assert!(!w.is_focusable());
        assert_eq!(w.accessible_name(), None);
        assert_eq!(w.accessible_role(), AccessibleRole::Generic);
        assert_eq!(w.bounds(), Rect::default());
    }

    #[test]
    fn test_widget_paint_respects_damage() {
        let mut w = Swatch {
            bounds: Rect::default(),
        };
        w.layout(Rect::new(0.0, 0.0, 20.0, 20.0));
        let mut canvas = RecordingCanvas::new();
        w.paint(&mut canvas, Rect::new(50.0, 50.0, 5.0, 5.0));
        assert!(canvas.is_empty());
        w.paint(&mut canvas, Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(canvas.command_count(), 1);
    }
}
