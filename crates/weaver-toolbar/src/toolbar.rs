//! Editor toolbar assembled from a [`ToolbarConfig`] layout.

use dioxus::prelude::*;
use weaver_toolbar_core::{ToolbarAction, ToolbarConfig, ToolbarItem};

use crate::button::{BlockButton, MarkButton};
use crate::editor::EditorHandle;
use crate::table_picker::CreateTableButton;

const TOOLBAR_CSS: Asset = asset!("/assets/toolbar.css");

/// Editor toolbar with formatting buttons.
///
/// Mark actions get a [`MarkButton`], every other action a [`BlockButton`].
#[component]
pub fn Toolbar(editor: EditorHandle, #[props(default)] config: ToolbarConfig) -> Element {
    rsx! {
        document::Stylesheet { href: TOOLBAR_CSS }
        div { class: "editor-toolbar",
            for item in config.items.iter() {
                {toolbar_item(editor, item, &config)}
            }
        }
    }
}

fn toolbar_item(editor: EditorHandle, item: &ToolbarItem, config: &ToolbarConfig) -> Element {
    match item {
        ToolbarItem::Button {
            action: ToolbarAction::Mark(mark),
            icon,
            title,
        } => rsx! {
            MarkButton {
                editor,
                format: *mark,
                icon: icon.as_str(),
                title: title.as_deref().unwrap_or_default(),
                palette: config.palette.clone(),
            }
        },
        ToolbarItem::Button {
            action,
            icon,
            title,
        } => rsx! {
            BlockButton {
                editor,
                action: *action,
                icon: icon.as_str(),
                title: title.as_deref().unwrap_or_default(),
                palette: config.palette.clone(),
            }
        },
        ToolbarItem::TablePicker { icon, title } => rsx! {
            CreateTableButton {
                editor,
                icon: icon.as_str(),
                title: title.as_deref().unwrap_or_default(),
                grid: config.grid.clone(),
                palette: config.palette.clone(),
            }
        },
        ToolbarItem::Separator => rsx! {
            span { class: "toolbar-separator" }
        },
    }
}
