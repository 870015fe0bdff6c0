//! Virtualized table and list control for Trellis.
//!
//! A [`Table`] owns rows and columns and keeps everything derived from
//! them consistent: scroll ranges, selection, focus, display order, and the
//! repaint queue. It never draws on its own. Hosts feed input through
//! [`Table::dispatch`], collect [`Repaint`]s with [`Table::take_repaints`]
//! or apply them with [`Table::render`], and receive [`TableEvent`]s.
//!
//! Rows of a virtual table are populated lazily by a [`RowSource`] when
//! they are first painted or read, so a million-row table costs only the
//! rows that are actually shown.
//!
//! # Example
//!
//! ```
//! use trellis_core::{Event, FixedAdvance, Rect};
//! use trellis_table::{Column, Table, TableConfig, TableEvent};
//!
//! let mut table = Table::new(TableConfig::new().multi(), FixedAdvance::default());
//! table.set_bounds(Rect::new(0.0, 0.0, 240.0, 120.0));
//! table.add_column(Column::new("Name").width(120.0)).unwrap();
//! table.add_column(Column::new("Size").width(80.0)).unwrap();
//! for (name, size) in [("a.txt", "1 KB"), ("b.txt", "2 KB")] {
//!     table.add_row().unwrap().set_texts(&[name, size]);
//! }
//!
//! // Click the first row: 22px header, 20px rows.
//! let events = table.dispatch(&Event::click(10.0, 30.0, 0));
//! assert!(events.contains(&TableEvent::selection(0)));
//! assert_eq!(table.selection_indices(), vec![0]);
//! ```

pub mod accessible;
pub mod column;
pub mod config;
pub mod error;
pub mod event;
pub mod hooks;
mod input;
pub mod order;
mod paint;
pub mod redraw;
pub mod row;
mod selection;
pub mod source;
pub mod table;
pub mod text;
pub mod viewport;

pub use accessible::{AccessibleChild, AccessibleTable};
pub use column::{Alignment, Column, ColumnMut, SortDirection};
pub use config::{SelectionMode, TableColors, TableConfig, DEFAULT_DOUBLE_CLICK_MS};
pub use error::{Result, TableError};
pub use event::{SelectionDetail, TableEvent};
pub use hooks::{EraseHook, EraseItem, MeasureHook, MeasureItem, PaintHook, PaintItem};
pub use order::{x_position_of, ColumnOrder};
pub use redraw::{RedrawGuard, Repaint};
pub use row::{Row, RowMut};
pub use source::RowSource;
pub use table::{
    Table, CELL_MARGIN, CHECKBOX_MARGIN, CHECKBOX_SIZE, HEADER_PADDING, IMAGE_SPACING,
    RESIZE_TOLERANCE, ROW_PADDING, SORT_INDICATOR_WIDTH,
};
pub use text::{shorten, ELLIPSIS};
pub use viewport::{ScrollBar, H_SCROLL_STEP};
