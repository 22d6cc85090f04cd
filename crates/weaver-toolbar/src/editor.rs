//! Editor access for toolbar components.

use dioxus::prelude::*;
use weaver_toolbar_core::{
    BlockFormat, EditorCommands, FormWidget, MarkFormat, TableEdit, ToolbarAction,
};

/// Shared, reactive handle to the editor behind a toolbar.
///
/// Reading through the handle during render subscribes the component, so
/// buttons re-render when a command changes the document.
#[derive(Clone, Copy, PartialEq)]
pub struct EditorHandle {
    inner: Signal<Box<dyn EditorCommands>>,
}

impl EditorHandle {
    pub fn new(inner: Signal<Box<dyn EditorCommands>>) -> Self {
        Self { inner }
    }

    pub fn is_active(&self, action: ToolbarAction) -> bool {
        action.is_active(self)
    }

    /// Whether the insertion point is inside a table.
    pub fn table_active(&self) -> bool {
        self.is_block_active(BlockFormat::Table)
    }

    pub fn dispatch(&self, action: ToolbarAction) -> bool {
        let mut handle = *self;
        action.dispatch(&mut handle)
    }
}

impl EditorCommands for EditorHandle {
    fn is_mark_active(&self, mark: MarkFormat) -> bool {
        self.inner.read().is_mark_active(mark)
    }

    fn is_block_active(&self, block: BlockFormat) -> bool {
        self.inner.read().is_block_active(block)
    }

    fn toggle_mark(&mut self, mark: MarkFormat) -> bool {
        self.inner.write().toggle_mark(mark)
    }

    fn toggle_block(&mut self, block: BlockFormat) -> bool {
        self.inner.write().toggle_block(block)
    }

    fn insert_table(&mut self, rows: usize, cols: usize) -> bool {
        self.inner.write().insert_table(rows, cols)
    }

    fn edit_table(&mut self, edit: TableEdit) -> bool {
        self.inner.write().edit_table(edit)
    }

    fn insert_widget(&mut self, widget: FormWidget) -> bool {
        self.inner.write().insert_widget(widget)
    }
}

/// Create an [`EditorHandle`] over an editor living in its own signal.
///
/// The caller keeps `doc` for everything that is not a toolbar command
/// (rendering, text input).
pub fn use_editor_handle<E: EditorCommands + 'static>(doc: Signal<E>) -> EditorHandle {
    let inner = use_signal(move || Box::new(SignalEditor(doc)) as Box<dyn EditorCommands>);
    EditorHandle::new(inner)
}

/// [`EditorCommands`] for an editor stored in a Dioxus signal.
pub struct SignalEditor<E: 'static>(pub Signal<E>);

impl<E: EditorCommands + 'static> EditorCommands for SignalEditor<E> {
    fn is_mark_active(&self, mark: MarkFormat) -> bool {
        self.0.read().is_mark_active(mark)
    }

    fn is_block_active(&self, block: BlockFormat) -> bool {
        self.0.read().is_block_active(block)
    }

    fn toggle_mark(&mut self, mark: MarkFormat) -> bool {
        self.0.write().toggle_mark(mark)
    }

    fn toggle_block(&mut self, block: BlockFormat) -> bool {
        self.0.write().toggle_block(block)
    }

    fn insert_table(&mut self, rows: usize, cols: usize) -> bool {
        self.0.write().insert_table(rows, cols)
    }

    fn edit_table(&mut self, edit: TableEdit) -> bool {
        self.0.write().edit_table(edit)
    }

    fn insert_widget(&mut self, widget: FormWidget) -> bool {
        self.0.write().insert_widget(widget)
    }
}
