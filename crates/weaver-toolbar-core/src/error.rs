use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ToolbarError {
    #[error("unknown toolbar format: {0}")]
    #[diagnostic(
        code(weaver_toolbar::unknown_format),
        help("mark names: bold, italic, underline, code, strikethrough")
    )]
    UnknownFormat(String),

    #[error("heading level must be between 1 and 6, got {0}")]
    #[diagnostic(code(weaver_toolbar::invalid_heading))]
    InvalidHeading(u8),

    #[error("table grid must have at least one cell, got {rows}x{cols}")]
    #[diagnostic(code(weaver_toolbar::empty_grid))]
    EmptyGrid { rows: usize, cols: usize },

    #[error("table grid is limited to {max}x{max} cells, got {rows}x{cols}")]
    #[diagnostic(code(weaver_toolbar::grid_too_large))]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("invalid toolbar configuration: {0}")]
    #[diagnostic(code(weaver_toolbar::config))]
    Config(String),

    #[error("unsupported configuration file: {}", .0.display())]
    #[diagnostic(
        code(weaver_toolbar::config_format),
        help("use a .toml or .json file")
    )]
    UnsupportedConfigFormat(PathBuf),

    #[error("io error: {0}")]
    #[diagnostic(code(weaver_toolbar::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ToolbarError> = std::result::Result<T, E>;
