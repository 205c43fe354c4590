//! Per-cell style records and the style grid returned by every engine call.
//!
//! Key invariants:
//! - A StyleGrid built from a Grid has the same row count and, row by row,
//!   the same cell count (jagged grids stay jagged)
//! - An empty StyleRecord means "no override", never "reset to white"
//! - Writes outside the shape are dropped, never grow the grid

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::palette::ColorPair;

/// Style override for one cell. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    /// Background fill, `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Text (foreground) color, `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl StyleRecord {
    /// Background + text color from a palette pair.
    pub fn painted(pair: ColorPair) -> Self {
        Self {
            background: Some(pair.background.to_string()),
            color: Some(pair.text.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.color.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
    }

    /// Copy every field that is set on `other` over this record.
    pub fn merge_from(&mut self, other: &StyleRecord) {
        if let Some(bg) = &other.background {
            self.background = Some(bg.clone());
        }
        if let Some(fg) = &other.color {
            self.color = Some(fg.clone());
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.italic.is_some() {
            self.italic = other.italic;
        }
    }
}

/// Style records shaped like the data grid they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleGrid {
    rows: Vec<Vec<StyleRecord>>,
}

impl StyleGrid {
    /// All-empty records, one per data cell.
    pub fn empty_like(grid: &[Vec<CellValue>]) -> Self {
        Self {
            rows: grid
                .iter()
                .map(|row| vec![StyleRecord::default(); row.len()])
                .collect(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<StyleRecord>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<StyleRecord>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<StyleRecord>> {
        self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[StyleRecord]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&StyleRecord> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// True when no cell carries any override.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(StyleRecord::is_empty)
    }

    /// True when row count and every row length match `grid`.
    pub fn matches_shape(&self, grid: &[Vec<CellValue>]) -> bool {
        self.rows.len() == grid.len()
            && self.rows.iter().zip(grid).all(|(s, d)| s.len() == d.len())
    }

    /// Count of cells carrying any override.
    pub fn styled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|r| !r.is_empty()).count()
    }

    /// Row indices with at least one styled cell, ascending.
    pub fn styled_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.iter().any(|c| !c.is_empty()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Paint every cell of `row`. Out-of-range rows are ignored.
    pub fn paint_row(&mut self, row: usize, pair: ColorPair) {
        if let Some(cells) = self.rows.get_mut(row) {
            for cell in cells.iter_mut() {
                *cell = StyleRecord::painted(pair);
            }
        }
    }

    /// Paint one cell. Out-of-range cells are ignored.
    pub fn paint_cell(&mut self, row: usize, col: usize, pair: ColorPair) {
        if let Some(cell) = self.cell_mut(row, col) {
            *cell = StyleRecord::painted(pair);
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut StyleRecord> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Same shape, every record empty.
    pub fn cleared(&self) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| vec![StyleRecord::default(); row.len()])
                .collect(),
        }
    }

    /// Layer `other` on top of this grid. Fields set in `other` win; the
    /// shape of `self` is kept.
    pub fn overlay(&self, other: &StyleGrid) -> Self {
        let mut merged = self.clone();
        for (i, row) in other.rows.iter().enumerate() {
            for (j, record) in row.iter().enumerate() {
                if let Some(cell) = merged.cell_mut(i, j) {
                    cell.merge_from(record);
                }
            }
        }
        merged
    }
}
