//! Creation-time configuration for a [`Table`](crate::Table).
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```
//! use trellis_table::{SelectionMode, TableConfig};
//!
//! let config = TableConfig::from_toml("selection = \"multi\"\ncheck = true").unwrap();
//! assert_eq!(config.selection, SelectionMode::Multi);
//! assert!(config.check);
//! assert!(config.header_visible);
//! ```

use crate::error::{Result, TableError};
use log::warn;
use serde::{Deserialize, Serialize};
use trellis_core::{Color, Font};

/// Double-click interval used when the platform does not supply one.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

fn positive(value: f32) -> bool {
    value > 0.0 && value.is_finite()
}

/// How many rows may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one selected row
    #[default]
    Single,
    /// Any number of selected rows
    Multi,
}

/// Colors used by the default painter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableColors {
    /// Row background
    pub background: Color,
    /// Cell text
    pub foreground: Color,
    /// Selected row background
    pub selection_background: Color,
    /// Selected row text
    pub selection_foreground: Color,
    /// Header background
    pub header_background: Color,
    /// Header text
    pub header_foreground: Color,
    /// Grid lines and header separators
    pub grid_line: Color,
}

impl Default for TableColors {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            selection_background: Color::SELECTION,
            selection_foreground: Color::WHITE,
            header_background: Color::LIGHT_GRAY,
            header_foreground: Color::BLACK,
            grid_line: Color::GRAY,
        }
    }
}

/// Style flags and defaults fixed when a table is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Single or multi selection
    pub selection: SelectionMode,
    /// Show a checkbox in front of every row
    pub check: bool,
    /// Selection highlight and hit area span the whole row
    pub full_selection: bool,
    /// Rows are populated lazily through a [`RowSource`](crate::RowSource)
    pub virtual_rows: bool,
    /// Hide the selection highlight while the table is unfocused
    pub hide_selection: bool,
    /// Show the column header
    pub header_visible: bool,
    /// Draw grid lines between rows and columns
    pub lines_visible: bool,
    /// Fixed row height; computed from the font when absent
    pub item_height: Option<f32>,
    /// Maximum delay between clicks that count as a double click
    pub double_click_ms: u64,
    /// Default cell font
    pub font: Font,
    /// Header font
    pub header_font: Font,
    /// Default colors
    pub colors: TableColors,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            selection: SelectionMode::Single,
            check: false,
            full_selection: false,
            virtual_rows: false,
            hide_selection: false,
            header_visible: true,
            lines_visible: false,
            item_height: None,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            font: Font::default(),
            header_font: Font::default(),
            colors: TableColors::default(),
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode.
    #[must_use]
    pub const fn selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    /// Shorthand for multi selection.
    #[must_use]
    pub const fn multi(self) -> Self {
        self.selection(SelectionMode::Multi)
    }

    /// Enable row checkboxes.
    #[must_use]
    pub const fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Enable full-row selection.
    #[must_use]
    pub const fn full_selection(mut self, full: bool) -> Self {
        self.full_selection = full;
        self
    }

    /// Enable lazy row population.
    #[must_use]
    pub const fn virtual_rows(mut self, virtual_rows: bool) -> Self {
        self.virtual_rows = virtual_rows;
        self
    }

    /// Hide the selection while unfocused.
    #[must_use]
    pub const fn hide_selection(mut self, hide: bool) -> Self {
        self.hide_selection = hide;
        self
    }

    /// Show or hide the header.
    #[must_use]
    pub const fn header_visible(mut self, visible: bool) -> Self {
        self.header_visible = visible;
        self
    }

    /// Show or hide grid lines.
    #[must_use]
    pub const fn lines_visible(mut self, visible: bool) -> Self {
        self.lines_visible = visible;
        self
    }

    /// Use a fixed row height.
    #[must_use]
    pub const fn item_height(mut self, height: f32) -> Self {
        self.item_height = Some(height);
        self
    }

    /// Set the double-click interval.
    #[must_use]
    pub const fn double_click_ms(mut self, ms: u64) -> Self {
        self.double_click_ms = ms;
        self
    }

    /// Is more than one row selectable?
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.selection == SelectionMode::Multi
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Config`] if the TOML is malformed or a value is
    /// out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| TableError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the table cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if let Some(height) = self.item_height {
            if !positive(height) {
                return Err(TableError::Config(format!(
                    "item_height must be positive, got {height}"
                )));
            }
        }
        for (name, font) in [("font", &self.font), ("header_font", &self.header_font)] {
            if !positive(font.size) {
                return Err(TableError::Config(format!(
                    "{name}.size must be positive, got {}",
                    font.size
                )));
            }
        }
        Ok(())
    }

    /// Replace every invalid value with its default.
    pub(crate) fn repaired(mut self) -> Self {
        if let Err(err) = self.validate() {
            warn!("{err}; using defaults for invalid values");
            let defaults = Self::default();
            if self.item_height.is_some_and(|h| !positive(h)) {
                self.item_height = None;
            }
            if !positive(self.font.size) {
                self.font.size = defaults.font.size;
            }
            if !positive(self.header_font.size) {
                self.header_font.size = defaults.header_font.size;
            }
        }
        self
    }
}
