//! [`EditorCommands`] over a plain markdown buffer.
//!
//! Marks wrap the selection (or the word under the caret) in delimiters,
//! blocks are line prefixes, tables are GFM pipe tables. Commands markdown
//! cannot express (cell spans, radio buttons) are declined.
//!
//! All offsets are in chars.

use ropey::{Rope, RopeSlice};

use crate::commands::EditorCommands;
use crate::format::{BlockFormat, FormWidget, HeadingLevel, MarkFormat, TableEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// `(start, end)` with `start <= end`.
    pub fn range(self) -> (usize, usize) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }

    pub fn is_collapsed(self) -> bool {
        self.anchor == self.head
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownEditor {
    rope: Rope,
    caret: usize,
    selection: Option<Selection>,
}

fn mark_delimiters(mark: MarkFormat) -> (&'static str, &'static str) {
    match mark {
        MarkFormat::Bold => ("**", "**"),
        MarkFormat::Italic => ("*", "*"),
        MarkFormat::Underline => ("<u>", "</u>"),
        MarkFormat::Code => ("`", "`"),
        MarkFormat::Strikethrough => ("~~", "~~"),
    }
}

fn block_prefix(block: BlockFormat) -> Option<String> {
    match block {
        BlockFormat::Heading(level) => Some("#".repeat(usize::from(level.get())) + " "),
        BlockFormat::BlockQuote => Some("> ".to_string()),
        BlockFormat::NumberedList => Some("1. ".to_string()),
        BlockFormat::BulletedList => Some("- ".to_string()),
        BlockFormat::Table => None,
    }
}

/// Block type of a line and the char length of its prefix.
fn line_block(line: &str) -> Option<(BlockFormat, usize)> {
    if line.starts_with('|') {
        return Some((BlockFormat::Table, 0));
    }

    let hashes = line.chars().take_while(|c| *c == '#').count();
    if line[hashes..].starts_with(' ') {
        if let Some(level) = u8::try_from(hashes).ok().and_then(|n| HeadingLevel::new(n).ok()) {
            return Some((BlockFormat::Heading(level), hashes + 1));
        }
    }
    if line.starts_with("> ") {
        return Some((BlockFormat::BlockQuote, 2));
    }
    if line.starts_with("- ") {
        return Some((BlockFormat::BulletedList, 2));
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && line[digits..].starts_with(". ") {
        return Some((BlockFormat::NumberedList, digits + 2));
    }
    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Char length of `line` without its trailing line break.
fn content_len(line: RopeSlice<'_>) -> usize {
    let mut len = line.len_chars();
    while len > 0 && is_line_break(line.char(len - 1)) {
        len -= 1;
    }
    len
}

impl MarkdownEditor {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(text.as_ref()),
            caret: 0,
            selection: None,
        }
    }

    pub fn with_caret(mut self, caret: usize) -> Self {
        self.set_caret(caret);
        self
    }

    pub fn with_selection(mut self, anchor: usize, head: usize) -> Self {
        self.set_selection(Some(Selection::new(anchor, head)));
        self
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.rope = Rope::from_str(text.as_ref());
        self.caret = self.caret.min(self.len_chars());
        self.selection = None;
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.len_chars());
        self.selection = None;
    }

    /// Set the selection; the caret follows its head.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        let len = self.len_chars();
        self.selection = selection.map(|sel| Selection::new(sel.anchor.min(len), sel.head.min(len)));
        if let Some(sel) = self.selection {
            self.caret = sel.head;
        }
    }

    /// Select from UTF-16 offsets, as reported by `selectionStart`/`selectionEnd`
    /// of a DOM text control. An empty range places the caret.
    pub fn set_selection_utf16(&mut self, start: usize, end: usize) {
        let len = self.rope.len_utf16_cu();
        let start = self.rope.utf16_cu_to_char(start.min(len));
        let end = self.rope.utf16_cu_to_char(end.min(len));
        if start == end {
            self.set_caret(start);
        } else {
            self.set_selection(Some(Selection::new(start, end)));
        }
    }

    fn replace(&mut self, start: usize, end: usize, with: &str) {
        self.rope.remove(start..end);
        self.rope.insert(start, with);
    }

    /// Word around `offset`, bounded by non-word characters.
    fn word_around(&self, offset: usize) -> (usize, usize) {
        let len = self.rope.len_chars();
        let offset = offset.min(len);
        let mut start = offset;
        while start > 0 && is_word_char(self.rope.char(start - 1)) {
            start -= 1;
        }
        let mut end = offset;
        while end < len && is_word_char(self.rope.char(end)) {
            end += 1;
        }
        (start, end)
    }

    /// Selection if non-empty, otherwise the word under the caret.
    fn target_range(&self) -> (usize, usize) {
        match self.selection {
            Some(sel) if !sel.is_collapsed() => sel.range(),
            _ => self.word_around(self.caret),
        }
    }

    fn wrapped_by(&self, start: usize, end: usize, open: &str, close: &str) -> bool {
        let open_len = open.chars().count();
        let close_len = close.chars().count();
        start >= open_len
            && end + close_len <= self.rope.len_chars()
            && self.rope.slice(start - open_len..start) == open
            && self.rope.slice(end..end + close_len) == close
    }

    fn caret_line(&self) -> usize {
        self.rope.char_to_line(self.caret.min(self.rope.len_chars()))
    }

    /// `(start, end)` of a line's content, excluding its line break.
    fn line_bounds(&self, line: usize) -> (usize, usize) {
        let start = self.rope.line_to_char(line);
        (start, start + content_len(self.rope.line(line)))
    }

    fn line_text(&self, line: usize) -> String {
        let (start, end) = self.line_bounds(line);
        self.rope.slice(start..end).to_string()
    }

    fn is_table_row(&self, line: usize) -> bool {
        line < self.rope.len_lines() && self.rope.line(line).chars().next() == Some('|')
    }

    fn current_line(&self) -> (usize, usize) {
        self.line_bounds(self.caret_line())
    }

    fn current_block(&self) -> Option<(BlockFormat, usize)> {
        line_block(&self.line_text(self.caret_line()))
    }

    fn table_at_caret(&self) -> Option<TableBlock> {
        let caret_line = self.caret_line();
        if !self.is_table_row(caret_line) {
            return None;
        }

        let mut first = caret_line;
        while first > 0 && self.is_table_row(first - 1) {
            first -= 1;
        }
        let mut last = caret_line;
        while self.is_table_row(last + 1) {
            last += 1;
        }

        let (caret_line_start, _) = self.line_bounds(caret_line);
        let col_pipes = self
            .rope
            .slice(caret_line_start..self.caret.max(caret_line_start))
            .chars()
            .filter(|c| *c == '|')
            .count();

        let rows = (first..=last).map(|line| parse_row(&self.line_text(line))).collect();

        let mut table = TableBlock {
            start: self.rope.line_to_char(first),
            end: self.line_bounds(last).1,
            rows,
            caret_row: caret_line - first,
            caret_col: col_pipes.saturating_sub(1),
        };
        table.normalize();
        Some(table)
    }
}

fn parse_row(line: &str) -> Vec<String> {
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn render_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

fn is_delimiter_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

/// A GFM table parsed out of the buffer.
#[derive(Debug)]
struct TableBlock {
    start: usize,
    end: usize,
    rows: Vec<Vec<String>>,
    caret_row: usize,
    caret_col: usize,
}

impl TableBlock {
    fn cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows before the first body row: header plus delimiter.
    fn head_rows(&self) -> usize {
        if self.rows.len() > 1 && is_delimiter_row(&self.rows[1]) { 2 } else { 0 }
    }

    fn normalize(&mut self) {
        let cols = self.cols();
        let delimiter = (self.head_rows() == 2).then_some(1);
        for (idx, row) in self.rows.iter_mut().enumerate() {
            let fill = if Some(idx) == delimiter { "---" } else { "" };
            row.resize(cols, fill.to_string());
        }
        self.caret_col = self.caret_col.min(cols.saturating_sub(1));
    }

    fn blank_row(&self) -> Vec<String> {
        vec![String::new(); self.cols()]
    }

    fn insert_column(&mut self, at: usize) {
        let delimiter = (self.head_rows() == 2).then_some(1);
        for (idx, row) in self.rows.iter_mut().enumerate() {
            let fill = if Some(idx) == delimiter { "---" } else { "" };
            row.insert(at, fill.to_string());
        }
    }

    /// Apply `edit`, returning the cell the caret should land in.
    fn apply(&mut self, edit: TableEdit) -> Option<(usize, usize)> {
        let (row, col) = (self.caret_row, self.caret_col);
        let body = self.head_rows();

        match edit {
            TableEdit::InsertRowAbove => {
                if row < body {
                    return None;
                }
                let blank = self.blank_row();
                self.rows.insert(row, blank);
                Some((row, col))
            }
            TableEdit::InsertRowBelow => {
                let at = (row + 1).max(body);
                let blank = self.blank_row();
                self.rows.insert(at, blank);
                Some((at, col))
            }
            TableEdit::DeleteRow => {
                if row < body || self.rows.len() <= 1 {
                    return None;
                }
                self.rows.remove(row);
                Some((row.min(self.rows.len() - 1), col))
            }
            TableEdit::InsertColumnLeft => {
                self.insert_column(col);
                Some((row, col))
            }
            TableEdit::InsertColumnRight => {
                self.insert_column(col + 1);
                Some((row, col + 1))
            }
            TableEdit::DeleteColumn => {
                if self.cols() <= 1 {
                    return None;
                }
                for cells in &mut self.rows {
                    cells.remove(col);
                }
                Some((row, col.min(self.cols() - 1)))
            }
            TableEdit::MergeCells | TableEdit::SplitCells => None,
        }
    }

    fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Char offset of a cell's content, relative to the start of the table.
    fn cell_offset(&self, row: usize, col: usize) -> usize {
        let preceding_lines: usize = self.rows[..row]
            .iter()
            .map(|cells| render_row(cells).chars().count() + 1)
            .sum();
        let preceding_cells: usize = self.rows[row][..col]
            .iter()
            .map(|cell| cell.chars().count() + 3)
            .sum();
        preceding_lines + 2 + preceding_cells
    }
}

impl EditorCommands for MarkdownEditor {
    fn is_mark_active(&self, mark: MarkFormat) -> bool {
        let (start, end) = self.target_range();
        let (open, close) = mark_delimiters(mark);
        match mark {
            // A lone `*` is italic; `**` is bold unless it is really `***`.
            MarkFormat::Italic => {
                self.wrapped_by(start, end, "*", "*")
                    && (!self.wrapped_by(start, end, "**", "**")
                        || self.wrapped_by(start, end, "***", "***"))
            }
            _ => self.wrapped_by(start, end, open, close),
        }
    }

    fn is_block_active(&self, block: BlockFormat) -> bool {
        self.current_block().is_some_and(|(current, _)| current == block)
    }

    fn toggle_mark(&mut self, mark: MarkFormat) -> bool {
        let (start, end) = self.target_range();
        let (open, close) = mark_delimiters(mark);
        let open_len = open.chars().count();
        let close_len = close.chars().count();

        if self.is_mark_active(mark) {
            self.replace(end, end + close_len, "");
            self.replace(start - open_len, start, "");
            self.caret = end - open_len;
        } else {
            self.replace(end, end, close);
            self.replace(start, start, open);
            self.caret = end + open_len + close_len;
        }
        self.selection = None;
        true
    }

    fn toggle_block(&mut self, block: BlockFormat) -> bool {
        let Some(prefix) = block_prefix(block) else {
            tracing::debug!("markdown: tables are inserted, not toggled");
            return false;
        };
        let existing = self.current_block();
        if matches!(existing, Some((BlockFormat::Table, _))) {
            return false;
        }

        let (line_start, _) = self.current_line();
        let old_len = existing.map_or(0, |(_, len)| len);
        let new_prefix = match existing {
            Some((current, _)) if current == block => "",
            _ => prefix.as_str(),
        };
        let new_len = new_prefix.chars().count();

        self.replace(line_start, line_start + old_len, new_prefix);
        self.caret = if self.caret >= line_start + old_len {
            self.caret - old_len + new_len
        } else {
            line_start + new_len
        };
        self.selection = None;
        true
    }

    fn insert_table(&mut self, rows: usize, cols: usize) -> bool {
        if rows == 0 || cols == 0 || self.is_block_active(BlockFormat::Table) {
            return false;
        }

        let mut lines = Vec::with_capacity(rows + 1);
        lines.push(render_row(&vec![String::new(); cols]));
        lines.push(render_row(&vec!["---".to_string(); cols]));
        for _ in 1..rows {
            lines.push(render_row(&vec![String::new(); cols]));
        }
        let table = lines.join("\n");

        // Keep a blank line between the new table and any neighbouring one,
        // otherwise both parse as a single table.
        let line = self.caret_line();
        let (line_start, line_end) = self.line_bounds(line);
        let mut block = String::new();
        let at = if line_start == line_end {
            if line > 0 && self.is_table_row(line - 1) {
                block.push('\n');
            }
            line_start
        } else {
            block.push('\n');
            line_end
        };
        let table_start = at + block.chars().count();
        block.push_str(&table);
        if self.is_table_row(line + 1) {
            block.push('\n');
        }
        self.replace(at, at, &block);

        self.caret = table_start + 2;
        self.selection = None;
        true
    }

    fn edit_table(&mut self, edit: TableEdit) -> bool {
        let Some(mut table) = self.table_at_caret() else {
            return false;
        };
        let Some((row, col)) = table.apply(edit) else {
            tracing::debug!(edit = edit.as_str(), "markdown: table edit declined");
            return false;
        };

        let rendered = table.render();
        self.replace(table.start, table.end, &rendered);
        self.caret = table.start + table.cell_offset(row, col);
        self.selection = None;
        true
    }

    fn insert_widget(&mut self, widget: FormWidget) -> bool {
        match widget {
            FormWidget::Checkbox => {
                self.replace(self.caret, self.caret, "[ ] ");
                self.caret += 4;
                self.selection = None;
                true
            }
            FormWidget::Radio => false,
        }
    }
}
