//! Instruction-driven row highlighting.
//!
//! The instruction is pattern-matched, not parsed: one color pair is picked by
//! keyword, the row span is narrowed by `top` / `bottom` directives, and every
//! cell of every row in the span is painted. Matching is case-sensitive.
//!
//! `top` and `bottom` are evaluated independently, top first. When both are
//! present `top` narrows the end of the span and `bottom` the start, which can
//! leave the span empty.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;

use crate::cell::CellValue;
use crate::palette::literal_color;
use crate::style::StyleGrid;

/// Row count used by `top` / `bottom` when no number follows the keyword.
pub const DEFAULT_COUNT: usize = 10;

fn top_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"top\s+([0-9]+)").unwrap())
}

fn bottom_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"bottom\s+([0-9]+)").unwrap())
}

/// First integer captured by `re`. Values past `usize::MAX` saturate.
pub(crate) fn captured_count(re: &Regex, text: &str) -> Option<usize> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<usize>().unwrap_or(usize::MAX))
}

/// Inclusive range of grid rows to paint. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    /// All rows below the header.
    pub fn data_rows(row_count: usize) -> Self {
        Self {
            start: 1,
            end: row_count.saturating_sub(1),
        }
    }

    /// Resolve `top N` / `bottom N` against a grid of `row_count` rows.
    ///
    /// `top N` keeps rows `1..=N`; `bottom N` keeps the last `N` rows. Both
    /// clamp to the data rows, so out-of-range counts never index past the grid.
    pub fn resolve(instruction: &str, row_count: usize) -> Self {
        let mut span = Self::data_rows(row_count);

        if instruction.contains("top") {
            let count = captured_count(top_pattern(), instruction).unwrap_or(DEFAULT_COUNT);
            span.end = count.min(row_count.saturating_sub(1));
        }

        if instruction.contains("bottom") {
            let count = captured_count(bottom_pattern(), instruction).unwrap_or(DEFAULT_COUNT);
            span.start = row_count.saturating_sub(count).max(1);
        }

        span
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Map an instruction onto a style grid shaped like `grid`.
///
/// Total: empty, header-only and jagged grids all yield a well-formed result.
/// The header row is never painted.
pub fn highlight(instruction: &str, grid: &[Vec<CellValue>]) -> StyleGrid {
    let pair = literal_color(instruction);
    let span = RowSpan::resolve(instruction, grid.len());

    let mut styles = StyleGrid::empty_like(grid);
    if !span.is_empty() {
        for row in span.rows() {
            styles.paint_row(row, pair);
        }
    }
    styles
}
