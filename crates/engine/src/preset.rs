//! Preset formatting actions.
//!
//! Fixed rules with no text parsing, sharing the style grid contract of
//! `highlight`. `BoldHeaders` is the only action that touches row 0.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellValue;
use crate::error::EngineError;
use crate::highlight::{RowSpan, DEFAULT_COUNT};
use crate::palette::{ColorPair, BAND_BACKGROUND, BLUE, GREEN, RED};
use crate::style::StyleGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetAction {
    HighlightAll,
    HighlightTop10,
    HighlightBottom10,
    AlternateRows,
    BoldHeaders,
    ClearFormatting,
}

impl PresetAction {
    pub const ALL: [PresetAction; 6] = [
        PresetAction::HighlightAll,
        PresetAction::HighlightTop10,
        PresetAction::HighlightBottom10,
        PresetAction::AlternateRows,
        PresetAction::BoldHeaders,
        PresetAction::ClearFormatting,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::HighlightAll => "highlight-all",
            Self::HighlightTop10 => "highlight-top-10",
            Self::HighlightBottom10 => "highlight-bottom-10",
            Self::AlternateRows => "alternate-rows",
            Self::BoldHeaders => "bold-headers",
            Self::ClearFormatting => "clear-formatting",
        }
    }

    /// One-line description for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlightAll => "Highlight all data rows in red",
            Self::HighlightTop10 => "Highlight the first 10 data rows in blue",
            Self::HighlightBottom10 => "Highlight the last 10 data rows in green",
            Self::AlternateRows => "Shade every second data row",
            Self::BoldHeaders => "Bold the header row",
            Self::ClearFormatting => "Remove all formatting",
        }
    }

    /// Color pair painted by the action, if it paints one.
    pub fn pair(&self) -> Option<ColorPair> {
        match self {
            Self::HighlightAll => Some(RED),
            Self::HighlightTop10 => Some(BLUE),
            Self::HighlightBottom10 => Some(GREEN),
            Self::AlternateRows | Self::BoldHeaders | Self::ClearFormatting => None,
        }
    }
}

impl fmt::Display for PresetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PresetAction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "highlight-all" | "highlight-all-red" | "highlight-red" => Ok(Self::HighlightAll),
            "highlight-top-10" => Ok(Self::HighlightTop10),
            "highlight-bottom-10" => Ok(Self::HighlightBottom10),
            "alternate-rows" => Ok(Self::AlternateRows),
            "bold-headers" => Ok(Self::BoldHeaders),
            "clear-formatting" => Ok(Self::ClearFormatting),
            other => Err(EngineError::UnknownPreset(other.to_string())),
        }
    }
}

/// Apply a preset to a grid, returning a fresh style grid of the same shape.
pub fn apply_preset(action: PresetAction, grid: &[Vec<CellValue>]) -> StyleGrid {
    let mut styles = StyleGrid::empty_like(grid);
    let row_count = grid.len();

    match action {
        PresetAction::HighlightAll => paint_span(&mut styles, RowSpan::data_rows(row_count), RED),
        PresetAction::HighlightTop10 => {
            let span = RowSpan {
                start: 1,
                end: DEFAULT_COUNT.min(row_count.saturating_sub(1)),
            };
            paint_span(&mut styles, span, BLUE);
        }
        PresetAction::HighlightBottom10 => {
            let span = RowSpan {
                start: row_count.saturating_sub(DEFAULT_COUNT).max(1),
                end: row_count.saturating_sub(1),
            };
            paint_span(&mut styles, span, GREEN);
        }
        PresetAction::AlternateRows => {
            // Second, fourth, ... data rows
            for row in (2..row_count).step_by(2) {
                let len = grid[row].len();
                for col in 0..len {
                    if let Some(cell) = styles.cell_mut(row, col) {
                        cell.background = Some(BAND_BACKGROUND.to_string());
                    }
                }
            }
        }
        PresetAction::BoldHeaders => {
            if let Some(header) = grid.first() {
                for col in 0..header.len() {
                    if let Some(cell) = styles.cell_mut(0, col) {
                        cell.bold = Some(true);
                    }
                }
            }
        }
        PresetAction::ClearFormatting => {}
    }

    styles
}

/// Strip every override from an already styled grid.
pub fn clear_formatting(styles: &StyleGrid) -> StyleGrid {
    styles.cleared()
}

fn paint_span(styles: &mut StyleGrid, span: RowSpan, pair: ColorPair) {
    if span.is_empty() {
        return;
    }
    for row in span.rows() {
        styles.paint_row(row, pair);
    }
}
