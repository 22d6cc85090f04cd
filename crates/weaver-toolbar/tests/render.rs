//! Server-side render checks for the toolbar components.

use std::cell::RefCell;

use dioxus::prelude::*;
use weaver_toolbar::{CreateTableButton, Toolbar, use_editor_handle};
use weaver_toolbar_core::{
    BlockFormat, EditorCommands, GridConfig, MarkFormat, MarkdownEditor, TableEdit,
    ToolbarAction, ToolbarConfig, ToolbarItem,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_mark_button_reflects_selection() {
    fn app() -> Element {
        // Caret inside "bold".
        let doc = use_signal(|| MarkdownEditor::new("some **bold** text").with_caret(8));
        let editor = use_editor_handle(doc);
        let config = ToolbarConfig {
            items: vec![
                ToolbarItem::button(MarkFormat::Bold, "B", "Bold"),
                ToolbarItem::button(MarkFormat::Italic, "I", "Italic"),
            ],
            ..Default::default()
        };
        rsx! { Toolbar { editor, config } }
    }

    let html = render(app);
    assert!(html.contains(r#"title="Bold""#));
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 1);
    assert!(html.contains("color: black;"));
    assert!(html.contains("color: #ccc;"));
}

#[test]
fn test_table_picker_renders_hidden_grid() {
    fn app() -> Element {
        let doc = use_signal(|| MarkdownEditor::new("text"));
        let editor = use_editor_handle(doc);
        let config = ToolbarConfig {
            grid: GridConfig {
                rows: 3,
                cols: 4,
                ..Default::default()
            },
            items: vec![ToolbarItem::TablePicker {
                icon: "T".into(),
                title: None,
            }],
            ..Default::default()
        };
        rsx! { Toolbar { editor, config } }
    }

    let html = render(app);
    assert_eq!(html.matches("<td").count(), 12);
    assert!(html.contains("width: 85px; display: none;"));
    assert!(html.contains(r#"title="3x4""#));
    assert!(!html.contains(r#"class="active""#));
}

#[test]
fn test_table_picker_disabled_inside_table() {
    fn app() -> Element {
        let doc = use_signal(|| MarkdownEditor::new("| a |\n| --- |").with_caret(2));
        let editor = use_editor_handle(doc);
        let config = ToolbarConfig {
            items: vec![
                ToolbarItem::TablePicker {
                    icon: "T".into(),
                    title: Some("Insert Table".into()),
                },
                ToolbarItem::button(BlockFormat::Table, "t", "Table"),
            ],
            ..Default::default()
        };
        rsx! { Toolbar { editor, config } }
    }

    let html = render(app);
    assert!(html.contains(r#"aria-disabled="true""#));
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 2);
}

#[test]
fn test_table_picker_invalid_grid_uses_default() {
    fn app() -> Element {
        let doc = use_signal(|| MarkdownEditor::new(""));
        let editor = use_editor_handle(doc);
        let grid = GridConfig {
            cols: 0,
            cell_width: 40,
            ..Default::default()
        };
        rsx! { CreateTableButton { editor, icon: "T", grid } }
    }

    let html = render(app);
    assert_eq!(html.matches("<td").count(), 14 * 14);
    assert!(html.contains("width: 285px; display: none;"));
    assert!(html.contains("width: 20px; height: 20px;"));
}

thread_local! {
    static SEEN: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record(entry: String) {
    SEEN.with_borrow_mut(|seen| seen.push(entry));
}

#[test]
fn test_handle_commands_reach_document() {
    fn app() -> Element {
        let doc = use_signal(|| MarkdownEditor::new("word"));
        let editor = use_editor_handle(doc);

        use_hook(move || {
            // Button pointer-down handlers dispatch through the handle.
            for action in [
                ToolbarAction::Mark(MarkFormat::Bold),
                ToolbarAction::Block(BlockFormat::BlockQuote),
                ToolbarAction::Table(TableEdit::InsertRowBelow),
            ] {
                let applied = editor.dispatch(action);
                record(format!("{action} {applied}: {}", doc.peek().text()));
            }
            record(format!("quote active: {}", editor.is_active(BlockFormat::BlockQuote.into())));

            let mut handle = editor;
            record(format!("table inserted: {}", handle.insert_table(1, 1)));
            record(format!("table active: {}", editor.table_active()));
        });

        rsx! {}
    }

    render(app);
    SEEN.with_borrow(|seen| {
        assert_eq!(
            seen,
            &[
                "bold true: **word**",
                "block-quote true: > **word**",
                "table-row-insert-down false: > **word**",
                "quote active: true",
                "table inserted: true",
                "table active: true",
            ]
        );
    });
}
