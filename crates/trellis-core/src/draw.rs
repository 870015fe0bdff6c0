//! Draw commands and the value types they carry.
//!
//! Fonts and images are opaque handles: the drawing backend owns glyph
//! rasterization and pixel data, widgets only need their metrics.

use crate::accessibility::CheckedState;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

/// Font description resolved by the drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Family name
    pub family: String,
    /// Size in pixels
    pub size: f32,
    /// Weight
    pub weight: FontWeight,
    /// Style
    pub style: FontStyle,
}

impl Font {
    /// Create a regular font of the given family and size.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", 12.0)
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font used to shape the text
    pub font: Font,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::BLACK,
        }
    }
}

/// Handle to an image owned by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Backend-specific identifier
    pub id: u64,
    /// Pixel width
    pub width: f32,
    /// Pixel height
    pub height: f32,
}

impl Image {
    /// Create an image handle.
    #[must_use]
    pub const fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline
    StrokeRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run, positioned by its top-left corner
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Image, positioned by its top-left corner
    Image {
        /// Image handle
        image: Image,
        /// Top-left position
        position: Point,
    },
    /// Platform checkbox glyph
    Checkbox {
        /// Checkbox bounds
        bounds: Rect,
        /// Check state
        state: CheckedState,
    },
    /// Platform focus indicator
    Focus {
        /// Focus bounds
        bounds: Rect,
    },
    /// Copy already-rendered pixels to a new location
    CopyArea {
        /// Source area
        source: Rect,
        /// Destination top-left corner
        dest: Point,
    },
    /// Clip region pushed
    PushClip {
        /// Clip bounds
        bounds: Rect,
    },
    /// Clip region popped
    PopClip,
}

impl DrawCommand {
    /// Text content, if this command draws text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_default() {
        let f = Font::default();
        assert_eq!(f.size, 12.0);
        assert_eq!(f.weight, FontWeight::Normal);
        assert_eq!(f.style, FontStyle::Normal);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.font, Font::default());
    }

    #[test]
    fn test_draw_command_text_accessor() {
        let cmd = DrawCommand::Text {
            content: "cell".into(),
            position: Point::ORIGIN,
            style: TextStyle::default(),
        };
        assert_eq!(cmd.text(), Some("cell"));
        assert_eq!(DrawCommand::PopClip.text(), None);
    }
}
