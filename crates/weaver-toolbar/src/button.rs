//! Toolbar buttons.

use dioxus::prelude::*;
use weaver_toolbar_core::{MarkFormat, Palette, ToolbarAction};

use crate::editor::EditorHandle;

/// Presentational toolbar control.
///
/// Colour comes from `palette` based on `active` and `reversed`; `class` and
/// `style` are appended to the defaults.
#[component]
pub fn Button(
    #[props(default)] active: bool,
    #[props(default)] reversed: bool,
    #[props(default)] disabled: bool,
    #[props(into, default)] class: String,
    #[props(into, default)] title: String,
    #[props(into, default)] style: String,
    #[props(default)] palette: Palette,
    onmousedown: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base_style = palette.button_style(active, reversed);
    let state_class = if active { "toolbar-button active" } else { "toolbar-button" };

    rsx! {
        span {
            class: "{state_class} {class}",
            title: "{title}",
            style: "{base_style} {style}",
            "aria-pressed": "{active}",
            "aria-disabled": "{disabled}",
            onmousedown: move |evt| onmousedown.call(evt),
            {children}
        }
    }
}

/// Toggles an inline mark and lights up while the selection carries it.
#[component]
pub fn MarkButton(
    editor: EditorHandle,
    format: MarkFormat,
    #[props(into)] icon: String,
    #[props(into, default)] title: String,
    #[props(default)] palette: Palette,
) -> Element {
    let action = ToolbarAction::Mark(format);

    rsx! {
        Button {
            active: editor.is_active(action),
            title: "{title}",
            palette: palette.clone(),
            onmousedown: move |evt: MouseEvent| {
                // Keep focus and selection in the editor.
                evt.prevent_default();
                editor.dispatch(action);
            },
            "{icon}"
        }
    }
}

/// Block toggles, table structure edits and widget insertion.
///
/// Which editor command runs is decided by `action`; see
/// [`ToolbarAction::dispatch`].
#[component]
pub fn BlockButton(
    editor: EditorHandle,
    action: ToolbarAction,
    #[props(into)] icon: String,
    #[props(into, default)] title: String,
    #[props(default)] palette: Palette,
) -> Element {
    rsx! {
        Button {
            active: editor.is_active(action),
            title: "{title}",
            palette: palette.clone(),
            onmousedown: move |evt: MouseEvent| {
                evt.prevent_default();
                editor.dispatch(action);
            },
            "{icon}"
        }
    }
}
