//! weaver-toolbar-core: toolbar logic without framework dependencies.
//!
//! This crate provides:
//! - `ToolbarAction` and the mark/block/table/widget format vocabulary
//! - `EditorCommands` trait, the only way toolbar code reaches an editing engine
//! - `GridPicker` - table-size picker state machine
//! - `ToolbarConfig` - grid geometry, palette and button layout
//! - `MarkdownEditor` - `EditorCommands` over a plain markdown buffer

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod grid_picker;
pub mod markdown;
pub mod palette;

pub use commands::EditorCommands;
pub use config::{GridConfig, ToolbarConfig, ToolbarItem};
pub use error::{Result, ToolbarError};
pub use format::{BlockFormat, FormWidget, HeadingLevel, MarkFormat, TableEdit, ToolbarAction};
pub use grid_picker::{GridCoordinate, GridDimensions, GridPicker, PickerState};
pub use markdown::{MarkdownEditor, Selection};
pub use palette::Palette;
pub use smol_str::SmolStr;
