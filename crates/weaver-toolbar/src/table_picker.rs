//! Insert-table button with a size-picking grid popup.

use dioxus::prelude::*;
use weaver_toolbar_core::{
    BlockFormat, EditorCommands, GridConfig, GridCoordinate, GridPicker, Palette,
};

use crate::button::Button;
use crate::editor::EditorHandle;

/// Opens a grid of `grid.rows` × `grid.cols` cells; pressing a cell inserts a
/// table of that size. Disabled while the caret is already inside a table.
#[component]
pub fn CreateTableButton(
    editor: EditorHandle,
    #[props(into)] icon: String,
    #[props(into, default)] title: String,
    #[props(default)] grid: GridConfig,
    #[props(default)] palette: Palette,
) -> Element {
    let grid = usable_grid(grid);
    let dims = grid.dimensions().unwrap_or_default();
    let mut picker = use_signal(move || GridPicker::new(dims));
    use_effect(use_reactive!(|(dims,)| {
        if picker.peek().dimensions() != dims {
            picker.write().resize(dims);
        }
    }));

    let active = editor.table_active();
    let display = if picker.read().is_visible() { "block" } else { "none" };
    let popup_style = format!("width: {}px; display: {display};", grid.popup_width());
    let cell_style = format!("width: {}px; height: {}px;", grid.cell_width, grid.cell_height);

    // Cells come from the current props so a resize never renders stale rows.
    let rows: Vec<Vec<(GridCoordinate, bool)>> = {
        let picker = picker.read();
        dims.cell_rows()
            .map(|row| row.into_iter().map(|cell| (cell, picker.is_highlighted(cell))).collect())
            .collect()
    };

    rsx! {
        Button {
            active,
            disabled: active,
            title: "{title}",
            style: "position: relative;",
            palette: palette.clone(),
            onmousedown: move |evt: MouseEvent| {
                evt.prevent_default();
                press_trigger(&mut picker.write(), &editor);
            },
            "{icon}"
            div {
                class: "table-picker-popup",
                style: "{popup_style}",
                onmouseleave: move |_| picker.write().cancel(),
                table { class: "table-picker-grid",
                    tbody {
                        for (row_idx, row) in rows.into_iter().enumerate() {
                            tr { key: "{row_idx}",
                                for (cell, highlighted) in row {
                                    td {
                                        key: "{cell.row}-{cell.col}",
                                        class: if highlighted { "active" } else { "" },
                                        title: cell.label(),
                                        style: "{cell_style}",
                                        onmousemove: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            if picker.peek().hovered() != Some(cell) {
                                                picker.write().hover(cell);
                                            }
                                        },
                                        onmousedown: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            let mut editor = editor;
                                            if press_cell(&mut picker.write(), cell, &mut editor) {
                                                evt.stop_propagation();
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `grid` if it validates, otherwise the default grid.
fn usable_grid(grid: GridConfig) -> GridConfig {
    match grid.validate() {
        Ok(()) => grid,
        Err(err) => {
            tracing::warn!("table picker: {err}, using default grid");
            GridConfig::default()
        }
    }
}

/// Trigger pressed: open the popup unless a table is already active.
fn press_trigger<E: EditorCommands + ?Sized>(picker: &mut GridPicker, editor: &E) -> bool {
    picker.open(editor.is_block_active(BlockFormat::Table))
}

/// Cell pressed: insert a table of the cell's size.
///
/// Returns `true` when a table was inserted. The event must then stop here,
/// since reaching the trigger would reopen the popup.
fn press_cell<E: EditorCommands + ?Sized>(
    picker: &mut GridPicker,
    cell: GridCoordinate,
    editor: &mut E,
) -> bool {
    // The caret may have moved into a table since the last render.
    let active = editor.is_block_active(BlockFormat::Table);
    picker.confirm(cell, active, |rows, cols| {
        let applied = editor.insert_table(rows, cols);
        tracing::debug!(rows, cols, applied, "insert table");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaver_toolbar_core::{MarkdownEditor, PickerState};

    #[test]
    fn test_trigger_opens_outside_table() {
        let mut picker = GridPicker::default();
        let doc = MarkdownEditor::new("text");

        assert!(press_trigger(&mut picker, &doc));
        assert_eq!(picker.state(), PickerState::Open { hovered: None });
    }

    #[test]
    fn test_trigger_ignored_inside_table() {
        let mut picker = GridPicker::default();
        let doc = MarkdownEditor::new("| a |\n| --- |").with_caret(2);

        assert!(!press_trigger(&mut picker, &doc));
        assert!(!picker.is_visible());
    }

    #[test]
    fn test_cell_press_inserts_and_closes() {
        let mut picker = GridPicker::default();
        let mut doc = MarkdownEditor::new("");
        press_trigger(&mut picker, &doc);
        picker.hover(GridCoordinate::new(1, 2));

        assert!(press_cell(&mut picker, GridCoordinate::new(1, 2), &mut doc));
        assert_eq!(doc.text(), "|  |  |  |\n| --- | --- | --- |\n|  |  |  |");
        assert!(!picker.is_visible());
        assert_eq!(picker.hovered(), None);

        // A second press on the now hidden grid does nothing.
        assert!(!press_cell(&mut picker, GridCoordinate::new(0, 0), &mut doc));
    }

    #[test]
    fn test_cell_press_rechecks_table_state() {
        let mut picker = GridPicker::default();
        let mut doc = MarkdownEditor::new("text\n| a |\n| --- |");
        assert!(press_trigger(&mut picker, &doc));

        // The caret moves into the table while the popup is open.
        doc.set_caret(7);
        assert!(!press_cell(&mut picker, GridCoordinate::new(0, 0), &mut doc));
        assert_eq!(doc.text(), "text\n| a |\n| --- |");
        assert!(picker.is_visible());
    }

    #[test]
    fn test_invalid_grid_falls_back_whole() {
        let grid = usable_grid(GridConfig {
            cols: 0,
            cell_width: 30,
            ..Default::default()
        });
        assert_eq!(grid, GridConfig::default());
        assert_eq!(grid.popup_width(), 285);

        let grid = usable_grid(GridConfig {
            rows: 2,
            cols: 3,
            ..Default::default()
        });
        assert_eq!((grid.rows, grid.cols, grid.popup_width()), (2, 3, 65));
    }
}
