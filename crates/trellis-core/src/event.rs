//! Input events delivered to widgets.
//!
//! Every input a widget can react to is one variant of [`Event`]; widgets
//! dispatch with a single `match` instead of registering per-kind listeners.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer button pressed
    PointerDown {
        /// Position of the press, in widget coordinates
        position: Point,
        /// Button pressed
        button: MouseButton,
        /// Modifier keys held during the press
        modifiers: Modifiers,
        /// Platform timestamp in milliseconds, used for double-click detection
        time_ms: u64,
    },
    /// Pointer moved (with or without a button held)
    PointerMove {
        /// New position
        position: Point,
        /// Modifier keys held during the move
        modifiers: Modifiers,
    },
    /// Pointer button released
    PointerUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
        /// Modifier keys held during the release
        modifiers: Modifiers,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
        /// Modifier keys held
        modifiers: Modifiers,
    },
    /// Printable text typed by the user
    TextInput {
        /// Input text
        text: String,
    },
    /// Scroll request.
    ///
    /// `delta_y` is measured in rows and `delta_x` in pixels; positive values
    /// move the viewport toward the end of the content.
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// The platform asks for the damaged area to be repainted
    Paint {
        /// Area to repaint, in widget coordinates
        damage: Rect,
    },
    /// Widget gained keyboard focus
    FocusIn,
    /// Widget lost keyboard focus
    FocusOut,
    /// Widget client area resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Left-button press with no modifiers at `(x, y)`.
    #[must_use]
    pub const fn click(x: f32, y: f32, time_ms: u64) -> Self {
        Self::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
            time_ms,
        }
    }

    /// Key press with no modifiers.
    #[must_use]
    pub const fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Modifier keys held while an input event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift held
    pub shift: bool,
    /// Control (Command on macOS) held
    pub control: bool,
    /// Alt/Option held
    pub alt: bool,
}

impl Modifiers {
    /// No modifier keys.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };
    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };

    /// True when no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt
    }
}

/// Keyboard key identifiers the table reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Space key
    Space,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
