//! Command capability between toolbar controls and an editing engine.
//!
//! Toolbar code never talks to a concrete document model. Engines are wrapped
//! in an adapter implementing [`EditorCommands`], and toolbar actions are
//! routed through [`ToolbarAction::dispatch`].

use crate::format::{BlockFormat, FormWidget, MarkFormat, TableEdit, ToolbarAction};

/// Formatting commands an editing engine exposes to the toolbar.
///
/// Queries must not mutate the document. Mutating methods return `true` when
/// the engine applied the command and `false` when it declined it (for example
/// a structural table edit with the caret outside a table).
pub trait EditorCommands {
    /// Whether the current selection already carries `mark`.
    fn is_mark_active(&self, mark: MarkFormat) -> bool;

    /// Whether the block at the insertion point is of type `block`.
    fn is_block_active(&self, block: BlockFormat) -> bool;

    fn toggle_mark(&mut self, mark: MarkFormat) -> bool;

    fn toggle_block(&mut self, block: BlockFormat) -> bool;

    /// Insert a `rows` × `cols` table at the insertion point. Both are ≥ 1.
    fn insert_table(&mut self, rows: usize, cols: usize) -> bool;

    fn edit_table(&mut self, edit: TableEdit) -> bool;

    fn insert_widget(&mut self, widget: FormWidget) -> bool;
}

impl<E: EditorCommands + ?Sized> EditorCommands for Box<E> {
    fn is_mark_active(&self, mark: MarkFormat) -> bool {
        (**self).is_mark_active(mark)
    }

    fn is_block_active(&self, block: BlockFormat) -> bool {
        (**self).is_block_active(block)
    }

    fn toggle_mark(&mut self, mark: MarkFormat) -> bool {
        (**self).toggle_mark(mark)
    }

    fn toggle_block(&mut self, block: BlockFormat) -> bool {
        (**self).toggle_block(block)
    }

    fn insert_table(&mut self, rows: usize, cols: usize) -> bool {
        (**self).insert_table(rows, cols)
    }

    fn edit_table(&mut self, edit: TableEdit) -> bool {
        (**self).edit_table(edit)
    }

    fn insert_widget(&mut self, widget: FormWidget) -> bool {
        (**self).insert_widget(widget)
    }
}

impl ToolbarAction {
    /// Whether the button for this action should render as active.
    ///
    /// Table edits and widget insertions are one-shot commands and never
    /// report an active state.
    pub fn is_active<E: EditorCommands + ?Sized>(&self, editor: &E) -> bool {
        match *self {
            Self::Mark(mark) => editor.is_mark_active(mark),
            Self::Block(block) => editor.is_block_active(block),
            Self::Table(_) | Self::Widget(_) => false,
        }
    }

    /// Route this action to the matching engine command.
    ///
    /// Issues exactly one call on `editor` and returns its result.
    pub fn dispatch<E: EditorCommands + ?Sized>(&self, editor: &mut E) -> bool {
        let applied = match *self {
            Self::Mark(mark) => editor.toggle_mark(mark),
            Self::Block(block) => editor.toggle_block(block),
            Self::Table(edit) => editor.edit_table(edit),
            Self::Widget(widget) => editor.insert_widget(widget),
        };
        tracing::debug!(action = %self, applied, "toolbar dispatch");
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every engine call, answering queries from fixed state.
    #[derive(Debug, Default)]
    struct RecordingEditor {
        pub calls: Vec<String>,
        pub active_marks: Vec<MarkFormat>,
        pub active_blocks: Vec<BlockFormat>,
        pub accept: bool,
    }

    impl RecordingEditor {
        pub fn accepting() -> Self {
            Self {
                accept: true,
                ..Default::default()
            }
        }
    }

    impl EditorCommands for RecordingEditor {
        fn is_mark_active(&self, mark: MarkFormat) -> bool {
            self.active_marks.contains(&mark)
        }

        fn is_block_active(&self, block: BlockFormat) -> bool {
            self.active_blocks.contains(&block)
        }

        fn toggle_mark(&mut self, mark: MarkFormat) -> bool {
            self.calls.push(format!("toggle_mark {}", mark.as_str()));
            self.accept
        }

        fn toggle_block(&mut self, block: BlockFormat) -> bool {
            self.calls.push(format!("toggle_block {}", block.as_str()));
            self.accept
        }

        fn insert_table(&mut self, rows: usize, cols: usize) -> bool {
            self.calls.push(format!("insert_table {rows}x{cols}"));
            self.accept
        }

        fn edit_table(&mut self, edit: TableEdit) -> bool {
            self.calls.push(format!("edit_table {}", edit.as_str()));
            self.accept
        }

        fn insert_widget(&mut self, widget: FormWidget) -> bool {
            self.calls.push(format!("insert_widget {}", widget.as_str()));
            self.accept
        }
    }

    #[test]
    fn test_dispatch_routes_each_family() {
        let mut editor = RecordingEditor::accepting();

        for name in [
            "bold",
            "heading-one",
            "table-cell-merge",
            "table-cell-split",
            "table-row-insert-down",
            "checkbox",
            "radio",
        ] {
            let action: ToolbarAction = name.parse().unwrap();
            assert!(action.dispatch(&mut editor));
        }

        assert_eq!(
            editor.calls,
            vec![
                "toggle_mark bold",
                "toggle_block heading-one",
                "edit_table table-cell-merge",
                "edit_table table-cell-split",
                "edit_table table-row-insert-down",
                "insert_widget checkbox",
                "insert_widget radio",
            ]
        );
    }

    #[test]
    fn test_dispatch_reports_declined() {
        let mut editor = RecordingEditor::default();
        assert!(!ToolbarAction::Table(TableEdit::DeleteRow).dispatch(&mut editor));
        assert_eq!(editor.calls.len(), 1);
    }

    #[test]
    fn test_is_active() {
        let editor = RecordingEditor {
            active_marks: vec![MarkFormat::Italic],
            active_blocks: vec![BlockFormat::Table],
            ..Default::default()
        };

        assert!(ToolbarAction::Mark(MarkFormat::Italic).is_active(&editor));
        assert!(!ToolbarAction::Mark(MarkFormat::Bold).is_active(&editor));
        assert!(ToolbarAction::Block(BlockFormat::Table).is_active(&editor));
        // Inside a table, but structural edits never light up.
        assert!(!ToolbarAction::Table(TableEdit::DeleteRow).is_active(&editor));
        assert!(!ToolbarAction::Widget(FormWidget::Checkbox).is_active(&editor));
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut editor: Box<dyn EditorCommands> = Box::new(RecordingEditor::accepting());
        assert!(ToolbarAction::Mark(MarkFormat::Code).dispatch(&mut editor));
        assert!(editor.insert_table(2, 3));
    }
}
