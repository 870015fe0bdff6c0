//! Core types and traits for the Trellis grid control.
//!
//! This crate provides the primitives the table consumes but does not own:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Input events: [`Event`], [`Key`], [`Modifiers`]
//! - Drawing collaborators: [`Canvas`], [`TextMeasure`], [`RecordingCanvas`]
//! - Accessibility vocabulary: [`AccessibleRole`], [`AccessibleNode`]

mod accessibility;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use accessibility::{AccessibleNode, AccessibleRole, CheckedState};
pub use canvas::{Canvas, FixedAdvance, RecordingCanvas, TextMeasure};
pub use color::Color;
pub use constraints::Constraints;
pub use draw::{DrawCommand, Font, FontStyle, FontWeight, Image, TextStyle};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{LayoutResult, Widget};
