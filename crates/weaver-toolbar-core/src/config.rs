//! Toolbar configuration: grid picker geometry, colours and button layout.
//!
//! Configuration is plain serde data. [`ToolbarConfig::load`] chooses the
//! format from the file extension (`.toml` or `.json`).

use std::path::Path;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Result, ToolbarError};
use crate::format::{BlockFormat, FormWidget, HeadingLevel, MarkFormat, TableEdit, ToolbarAction};
use crate::grid_picker::GridDimensions;
use crate::palette::Palette;

/// Grid picker geometry. Cell sizes are in CSS pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 14,
            cols: 14,
            cell_width: 20,
            cell_height: 20,
        }
    }
}

impl GridConfig {
    /// Largest accepted cell edge, in CSS pixels.
    pub const MAX_CELL_PX: u32 = 200;

    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(self.rows, self.cols)
    }

    /// Popup width: every column of cells plus 5px for padding and border.
    pub fn popup_width(&self) -> u32 {
        u32::try_from(self.cols)
            .ok()
            .and_then(|cols| self.cell_width.checked_mul(cols))
            .map_or(u32::MAX, |width| width.saturating_add(5))
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        for (axis, px) in [("width", self.cell_width), ("height", self.cell_height)] {
            if !(1..=Self::MAX_CELL_PX).contains(&px) {
                return Err(ToolbarError::Config(format!(
                    "grid cell {axis} must be between 1 and {}px, got {px}",
                    Self::MAX_CELL_PX
                )));
            }
        }
        Ok(())
    }
}

/// One entry in the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ToolbarItem {
    Button {
        action: ToolbarAction,
        icon: SmolStr,
        #[serde(default)]
        title: Option<SmolStr>,
    },
    TablePicker {
        icon: SmolStr,
        #[serde(default)]
        title: Option<SmolStr>,
    },
    Separator,
}

impl ToolbarItem {
    pub fn button(action: impl Into<ToolbarAction>, icon: &'static str, title: &'static str) -> Self {
        Self::Button {
            action: action.into(),
            icon: SmolStr::new_static(icon),
            title: Some(SmolStr::new_static(title)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub grid: GridConfig,
    pub palette: Palette,
    pub items: Vec<ToolbarItem>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            palette: Palette::default(),
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<ToolbarItem> {
    use ToolbarItem as I;

    vec![
        I::button(MarkFormat::Bold, "B", "Bold (Ctrl+B)"),
        I::button(MarkFormat::Italic, "I", "Italic (Ctrl+I)"),
        I::button(MarkFormat::Underline, "U", "Underline (Ctrl+U)"),
        I::button(MarkFormat::Code, "<>", "Code"),
        I::button(MarkFormat::Strikethrough, "S", "Strikethrough"),
        I::Separator,
        I::button(BlockFormat::Heading(HeadingLevel::H1), "H1", "Heading 1"),
        I::button(BlockFormat::Heading(HeadingLevel::H2), "H2", "Heading 2"),
        I::button(BlockFormat::BlockQuote, "❝", "Quote"),
        I::button(BlockFormat::NumberedList, "1.", "Numbered List"),
        I::button(BlockFormat::BulletedList, "•", "Bullet List"),
        I::Separator,
        I::TablePicker {
            icon: SmolStr::new_static("▦"),
            title: Some(SmolStr::new_static("Insert Table")),
        },
        I::button(TableEdit::MergeCells, "⊞", "Merge Cells"),
        I::button(TableEdit::SplitCells, "⊟", "Split Cells"),
        I::button(TableEdit::InsertRowAbove, "↥", "Insert Row Above"),
        I::button(TableEdit::InsertRowBelow, "↧", "Insert Row Below"),
        I::button(TableEdit::InsertColumnLeft, "↤", "Insert Column Left"),
        I::button(TableEdit::InsertColumnRight, "↦", "Insert Column Right"),
        I::button(TableEdit::DeleteRow, "⤒", "Delete Row"),
        I::button(TableEdit::DeleteColumn, "⇤", "Delete Column"),
        I::Separator,
        I::button(FormWidget::Checkbox, "☐", "Checkbox"),
        I::button(FormWidget::Radio, "◉", "Radio"),
    ]
}

impl ToolbarConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ToolbarError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ToolbarError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(ToolbarError::UnsupportedConfigFormat(path.to_path_buf())),
        };
        tracing::debug!(path = %path.display(), items = config.items.len(), "loaded toolbar config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()
    }
}
