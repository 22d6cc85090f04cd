//! Dioxus toolbar components for the weaver editor.
//!
//! Components never reach for an editor through context. The editor is passed
//! in as an [`EditorHandle`] prop, which wraps any
//! [`EditorCommands`](weaver_toolbar_core::EditorCommands) implementation.
//!
//! - `button`: `Button`, `MarkButton`, `BlockButton`
//! - `table_picker`: `CreateTableButton` with its grid popup
//! - `toolbar`: `Toolbar`, renders a `ToolbarConfig` layout

pub use weaver_toolbar_core;

pub mod button;
pub mod editor;
pub mod table_picker;
pub mod toolbar;

pub use button::{BlockButton, Button, MarkButton};
pub use editor::{EditorHandle, SignalEditor, use_editor_handle};
pub use table_picker::CreateTableButton;
pub use toolbar::Toolbar;
