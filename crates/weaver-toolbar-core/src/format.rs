//! Format vocabulary shared by toolbar buttons and editor adapters.
//!
//! Every toolbar control is described by a [`ToolbarAction`]. Actions have a
//! stable string name (`"bold"`, `"heading-two"`, `"table-row-delete"`, ...)
//! used by toolbar layouts and configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToolbarError;

/// Inline character-level styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkFormat {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
}

impl MarkFormat {
    pub const ALL: [MarkFormat; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Code,
        Self::Strikethrough,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Code => "code",
            Self::Strikethrough => "strikethrough",
        }
    }
}

const HEADING_NAMES: [&str; 6] = [
    "heading-one",
    "heading-two",
    "heading-three",
    "heading-four",
    "heading-five",
    "heading-six",
];

/// Heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: HeadingLevel = HeadingLevel(1);
    pub const H2: HeadingLevel = HeadingLevel(2);
    pub const H3: HeadingLevel = HeadingLevel(3);
    pub const H4: HeadingLevel = HeadingLevel(4);
    pub const H5: HeadingLevel = HeadingLevel(5);
    pub const H6: HeadingLevel = HeadingLevel(6);
    pub const MIN: HeadingLevel = Self::H1;
    pub const MAX: HeadingLevel = Self::H6;

    pub fn new(level: u8) -> Result<Self, ToolbarError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ToolbarError::InvalidHeading(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = HeadingLevel> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }

    fn as_str(self) -> &'static str {
        HEADING_NAMES[usize::from(self.0 - 1)]
    }
}

/// Structural block element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    Heading(HeadingLevel),
    BlockQuote,
    NumberedList,
    BulletedList,
    Table,
}

impl BlockFormat {
    pub fn heading(level: u8) -> Result<Self, ToolbarError> {
        HeadingLevel::new(level).map(Self::Heading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading(level) => level.as_str(),
            Self::BlockQuote => "block-quote",
            Self::NumberedList => "numbered-list",
            Self::BulletedList => "bulleted-list",
            Self::Table => "table",
        }
    }
}

/// Structural edits applied to the table under the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEdit {
    MergeCells,
    SplitCells,
    InsertRowAbove,
    InsertRowBelow,
    InsertColumnLeft,
    InsertColumnRight,
    DeleteRow,
    DeleteColumn,
}

impl TableEdit {
    pub const ALL: [TableEdit; 8] = [
        Self::MergeCells,
        Self::SplitCells,
        Self::InsertRowAbove,
        Self::InsertRowBelow,
        Self::InsertColumnLeft,
        Self::InsertColumnRight,
        Self::DeleteRow,
        Self::DeleteColumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MergeCells => "table-cell-merge",
            Self::SplitCells => "table-cell-split",
            Self::InsertRowAbove => "table-row-insert-up",
            Self::InsertRowBelow => "table-row-insert-down",
            Self::InsertColumnLeft => "table-col-insert-left",
            Self::InsertColumnRight => "table-col-insert-right",
            Self::DeleteRow => "table-row-delete",
            Self::DeleteColumn => "table-col-delete",
        }
    }
}

/// Inline form controls that can be dropped into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormWidget {
    Checkbox,
    Radio,
}

impl FormWidget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// What a toolbar button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ToolbarAction {
    Mark(MarkFormat),
    Block(BlockFormat),
    Table(TableEdit),
    Widget(FormWidget),
}

impl ToolbarAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mark(mark) => mark.as_str(),
            Self::Block(block) => block.as_str(),
            Self::Table(edit) => edit.as_str(),
            Self::Widget(widget) => widget.as_str(),
        }
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolbarAction {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(mark) = MarkFormat::ALL.into_iter().find(|m| m.as_str() == s) {
            return Ok(Self::Mark(mark));
        }
        if let Some(edit) = TableEdit::ALL.into_iter().find(|e| e.as_str() == s) {
            return Ok(Self::Table(edit));
        }
        if let Some(level) = HeadingLevel::all().find(|level| level.as_str() == s) {
            return Ok(Self::Block(BlockFormat::Heading(level)));
        }

        let action = match s {
            "block-quote" => Self::Block(BlockFormat::BlockQuote),
            "numbered-list" => Self::Block(BlockFormat::NumberedList),
            "bulleted-list" => Self::Block(BlockFormat::BulletedList),
            "table" => Self::Block(BlockFormat::Table),
            "checkbox" => Self::Widget(FormWidget::Checkbox),
            "radio" => Self::Widget(FormWidget::Radio),
            other => return Err(ToolbarError::UnknownFormat(other.to_string())),
        };
        Ok(action)
    }
}

impl TryFrom<String> for ToolbarAction {
    type Error = ToolbarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToolbarAction> for String {
    fn from(action: ToolbarAction) -> Self {
        action.name().to_string()
    }
}

impl From<MarkFormat> for ToolbarAction {
    fn from(mark: MarkFormat) -> Self {
        Self::Mark(mark)
    }
}

impl From<BlockFormat> for ToolbarAction {
    fn from(block: BlockFormat) -> Self {
        Self::Block(block)
    }
}

impl From<TableEdit> for ToolbarAction {
    fn from(edit: TableEdit) -> Self {
        Self::Table(edit)
    }
}

impl From<FormWidget> for ToolbarAction {
    fn from(widget: FormWidget) -> Self {
        Self::Widget(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_action() -> Vec<ToolbarAction> {
        let mut actions: Vec<ToolbarAction> =
            MarkFormat::ALL.into_iter().map(ToolbarAction::from).collect();
        actions.extend(HeadingLevel::all().map(|level| ToolbarAction::Block(BlockFormat::Heading(level))));
        actions.extend(
            [
                BlockFormat::BlockQuote,
                BlockFormat::NumberedList,
                BlockFormat::BulletedList,
                BlockFormat::Table,
            ]
            .map(ToolbarAction::from),
        );
        actions.extend(TableEdit::ALL.map(ToolbarAction::from));
        actions.extend([FormWidget::Checkbox, FormWidget::Radio].map(ToolbarAction::from));
        actions
    }

    #[test]
    fn test_names_parse_back() {
        for action in every_action() {
            let parsed: ToolbarAction = action.name().parse().unwrap();
            assert_eq!(parsed, action, "{}", action.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let actions = every_action();
        let mut names: Vec<&str> = actions.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), actions.len());
    }

    #[test]
    fn test_unknown_name() {
        let err = "heading-seven".parse::<ToolbarAction>().unwrap_err();
        assert!(matches!(err, ToolbarError::UnknownFormat(ref name) if name == "heading-seven"));
    }

    #[test]
    fn test_layout_block_names() {
        assert_eq!(
            "table-row-insert-up".parse::<ToolbarAction>().unwrap(),
            ToolbarAction::Table(TableEdit::InsertRowAbove)
        );
        assert_eq!(
            "table-col-insert-right".parse::<ToolbarAction>().unwrap(),
            ToolbarAction::Table(TableEdit::InsertColumnRight)
        );
        assert_eq!(
            "heading-two".parse::<ToolbarAction>().unwrap(),
            ToolbarAction::Block(BlockFormat::heading(2).unwrap())
        );
    }

    #[test]
    fn test_heading_bounds() {
        assert!(BlockFormat::heading(0).is_err());
        assert!(BlockFormat::heading(7).is_err());
        assert_eq!(BlockFormat::heading(6).unwrap(), BlockFormat::Heading(HeadingLevel::MAX));
        assert!(matches!(HeadingLevel::new(0), Err(ToolbarError::InvalidHeading(0))));
    }

    #[test]
    fn test_heading_names_follow_level() {
        let names: Vec<&str> = HeadingLevel::all()
            .map(|level| BlockFormat::Heading(level).as_str())
            .collect();
        assert_eq!(names, HEADING_NAMES);
        assert_eq!(HeadingLevel::MIN.get(), 1);
        assert_eq!(HeadingLevel::MAX.get(), 6);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&ToolbarAction::Mark(MarkFormat::Bold)).unwrap();
        assert_eq!(json, "\"bold\"");

        let action: ToolbarAction = serde_json::from_str("\"table-col-delete\"").unwrap();
        assert_eq!(action, ToolbarAction::Table(TableEdit::DeleteColumn));

        assert!(serde_json::from_str::<ToolbarAction>("\"sparkles\"").is_err());
    }
}
