//! Table-size grid picker.
//!
//! A popup grid of cells; hovering a cell previews a table anchored at the
//! top-left corner, pressing it reports the 1-indexed dimensions to an
//! insertion callback.
//!
//! State transitions:
//!
//! ```text
//!            open (not active)              hover (in bounds)
//!   Hidden ────────────────────► Open{None} ───────────────► Open{Some(c)}
//!     ▲                              │                            │
//!     └──── cancel / confirm ────────┴────────────────────────────┘
//! ```
//!
//! Requests made while a table is already active at the insertion point are
//! ignored, not reported.

use serde::{Deserialize, Serialize};

use crate::error::ToolbarError;

/// A cell position in the picker, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Table size this cell stands for, as `(rows, cols)`.
    pub fn dimensions(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }

    /// Tooltip text, e.g. `"4x6"` for `(3, 5)`.
    pub fn label(self) -> String {
        let (rows, cols) = self.dimensions();
        format!("{rows}x{cols}")
    }

    /// Whether `other` lies inside the rectangle spanned from the origin to `self`.
    pub fn covers(self, other: GridCoordinate) -> bool {
        other.row <= self.row && other.col <= self.col
    }
}

/// Size of the picker grid. Both axes are within `1..=GridDimensions::MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawDimensions> for GridDimensions {
    type Error = ToolbarError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self { rows: 14, cols: 14 }
    }
}

impl GridDimensions {
    pub const MAX_SIDE: usize = 64;

    pub fn new(rows: usize, cols: usize) -> Result<Self, ToolbarError> {
        if rows == 0 || cols == 0 {
            return Err(ToolbarError::EmptyGrid { rows, cols });
        }
        if rows > Self::MAX_SIDE || cols > Self::MAX_SIDE {
            return Err(ToolbarError::GridTooLarge {
                rows,
                cols,
                max: Self::MAX_SIDE,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Every cell of the grid, grouped by row.
    pub fn cell_rows(self) -> impl Iterator<Item = Vec<GridCoordinate>> {
        (0..self.rows).map(move |row| (0..self.cols).map(|col| GridCoordinate::new(row, col)).collect())
    }
}

/// Visibility and hover state. A hovered cell only exists while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Open { hovered: Option<GridCoordinate> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridPicker {
    dims: GridDimensions,
    state: PickerState,
}

impl GridPicker {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            state: PickerState::Hidden,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    /// The hovered cell. Always `None` while hidden.
    pub fn hovered(&self) -> Option<GridCoordinate> {
        match self.state {
            PickerState::Open { hovered } => hovered,
            PickerState::Hidden => None,
        }
    }

    /// Show the popup. Ignored while a table is `active`.
    ///
    /// Returns whether the popup is now open because of this call.
    pub fn open(&mut self, active: bool) -> bool {
        if active {
            tracing::debug!("grid picker: open ignored, table already active");
            return false;
        }
        if self.is_visible() {
            return false;
        }
        self.state = PickerState::Open { hovered: None };
        tracing::debug!("grid picker opened");
        true
    }

    /// Record the cell under the pointer. Ignored while hidden.
    pub fn hover(&mut self, coord: GridCoordinate) -> bool {
        let PickerState::Open { hovered } = &mut self.state else {
            return false;
        };
        if !self.dims.contains(coord) {
            tracing::debug!(row = coord.row, col = coord.col, "grid picker: hover out of bounds");
            return false;
        }
        tracing::trace!(row = coord.row, col = coord.col, "grid picker hover");
        *hovered = Some(coord);
        true
    }

    /// Choose `coord` and hand the 1-indexed `(rows, cols)` to `insert`.
    ///
    /// Ignored while hidden, while a table is `active`, or for a cell outside
    /// the grid. On success `insert` runs exactly once and the picker closes.
    pub fn confirm<F>(&mut self, coord: GridCoordinate, active: bool, insert: F) -> bool
    where
        F: FnOnce(usize, usize),
    {
        if !self.is_visible() {
            return false;
        }
        if active {
            tracing::debug!("grid picker: confirm ignored, table already active");
            return false;
        }
        if !self.dims.contains(coord) {
            tracing::debug!(row = coord.row, col = coord.col, "grid picker: confirm out of bounds");
            return false;
        }

        let (rows, cols) = coord.dimensions();
        tracing::debug!(rows, cols, "grid picker confirmed");
        insert(rows, cols);
        self.state = PickerState::Hidden;
        true
    }

    /// Switch to a different grid size. A change closes the popup.
    pub fn resize(&mut self, dims: GridDimensions) -> bool {
        if self.dims == dims {
            return false;
        }
        tracing::debug!(rows = dims.rows, cols = dims.cols, "grid picker resized");
        self.dims = dims;
        self.state = PickerState::Hidden;
        true
    }

    /// Hide the popup and forget the hovered cell.
    pub fn cancel(&mut self) {
        if self.is_visible() {
            tracing::trace!("grid picker cancelled");
        }
        self.state = PickerState::Hidden;
    }

    pub fn is_highlighted(&self, cell: GridCoordinate) -> bool {
        self.hovered().is_some_and(|hovered| hovered.covers(cell))
    }

    /// Highlighted cells in row-major order.
    pub fn highlighted_cells(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        let (rows, cols) = self
            .hovered()
            .map(GridCoordinate::dimensions)
            .unwrap_or((0, 0));
        (0..rows).flat_map(move |row| (0..cols).map(move |col| GridCoordinate::new(row, col)))
    }
}
