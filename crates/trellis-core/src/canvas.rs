//! Drawing collaborator traits and a recording implementation for tests.

use crate::accessibility::CheckedState;
use crate::color::Color;
use crate::draw::{DrawCommand, Font, Image, TextStyle};
use crate::geometry::{Point, Rect};

/// Text metrics supplied by the platform layer.
///
/// Widgets keep their own measurement caches; this trait is only consulted
/// when a cached value is missing or stale.
pub trait TextMeasure {
    /// Width in pixels of `text` rendered with `font`.
    fn text_width(&self, text: &str, font: &Font) -> f32;

    /// Height in pixels of one line of text rendered with `font`.
    fn line_height(&self, font: &Font) -> f32;
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw an image with its top-left corner at `position`.
    fn draw_image(&mut self, image: &Image, position: Point);

    /// Draw the platform checkbox glyph.
    fn draw_checkbox(&mut self, bounds: Rect, state: CheckedState);

    /// Draw the platform focus indicator.
    fn draw_focus(&mut self, bounds: Rect);

    /// Copy already-rendered pixels from `source` so that its top-left corner
    /// lands on `dest`.
    fn copy_area(&mut self, source: Rect, dest: Point);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Monospace metrics: every character advances by the same width.
///
/// Deterministic, which makes it the measurer of choice for tests and
/// headless layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    /// Width of a single character
    pub advance: f32,
    /// Height of a line
    pub line_height: f32,
}

impl FixedAdvance {
    /// Create a fixed-advance measurer.
    #[must_use]
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, _font: &Font) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self, _font: &Font) -> f32 {
        self.line_height
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another process)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text runs drawn so far, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            bounds: rect,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            bounds: rect,
            color,
            width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: &Image, position: Point) {
        self.commands.push(DrawCommand::Image {
            image: *image,
            position,
        });
    }

    fn draw_checkbox(&mut self, bounds: Rect, state: CheckedState) {
        self.commands.push(DrawCommand::Checkbox { bounds, state });
    }

    fn draw_focus(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::Focus { bounds });
    }

    fn copy_area(&mut self, source: Rect, dest: Point) {
        self.commands.push(DrawCommand::CopyArea { source, dest });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip { bounds: rect });
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
