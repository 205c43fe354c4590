//! Case-insensitive prompt parser with a richer vocabulary than `highlight`.
//!
//! A prompt is only treated as a formatting request when it mentions
//! "highlight". It is then reduced to a [`PromptPlan`]:
//!
//! - color: first of the extended palette keywords found, red otherwise
//! - rows, first directive found wins: `top [N]`, `bottom [N]`, `odd`,
//!   `even`, `rows A-B`, `row N`; all data rows otherwise
//! - columns, only when "column" appears: `columns X-Y`, `column X`
//!   (spreadsheet letters); all columns otherwise
//! - `bold` / `italic` add the flags to every painted cell
//!
//! The header row is never painted.

use std::sync::OnceLock;

use regex::Regex;

use crate::cell::CellValue;
use crate::highlight::{captured_count, RowSpan, DEFAULT_COUNT};
use crate::palette::{extended_color, ColorPair};
use crate::style::{StyleGrid, StyleRecord};

fn pattern(slot: &'static OnceLock<Regex>, re: &str) -> &'static Regex {
    slot.get_or_init(|| Regex::new(re).unwrap())
}

fn top_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"top\s+([0-9]+)")
}

fn bottom_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"bottom\s+([0-9]+)")
}

fn row_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"rows?\s+([0-9]+)\s*-\s*([0-9]+)")
}

fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"rows?\s+([0-9]+)")
}

fn column_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"columns?\s+([a-z])\s*-\s*([a-z])\b")
}

fn column_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"columns?\s+([a-z])\b")
}

/// Which rows a prompt selects. Indices are grid rows (header = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    /// First `n` data rows.
    Top(usize),
    /// Last `n` data rows.
    Bottom(usize),
    /// Grid rows 1, 3, 5, ...
    Odd,
    /// Grid rows 2, 4, 6, ...
    Even,
    /// Inclusive grid row range, clamped to the data rows.
    Range(usize, usize),
    /// One grid row; nothing is painted when it is the header or past the end.
    Single(usize),
    All,
}

impl RowSelection {
    pub fn indices(&self, row_count: usize) -> Vec<usize> {
        let last = row_count.saturating_sub(1);
        let span = match *self {
            Self::Top(n) => RowSpan { start: 1, end: n.min(last) },
            Self::Bottom(n) => RowSpan {
                start: row_count.saturating_sub(n).max(1),
                end: last,
            },
            Self::Range(a, b) => RowSpan { start: a.max(1), end: b.min(last) },
            Self::All => RowSpan::data_rows(row_count),
            Self::Odd => return (1..row_count).step_by(2).collect(),
            Self::Even => return (2..row_count).step_by(2).collect(),
            Self::Single(n) => {
                return if n > 0 && n < row_count { vec![n] } else { Vec::new() };
            }
        };
        if span.is_empty() {
            Vec::new()
        } else {
            span.rows().collect()
        }
    }
}

/// Which columns a prompt selects, as 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    Range(usize, usize),
    Single(usize),
    All,
}

impl ColumnSelection {
    /// Resolve against the header width. A single column past the header
    /// falls back to all columns.
    fn bounds(&self, header_width: usize) -> Option<(usize, usize)> {
        if header_width == 0 {
            return None;
        }
        let last = header_width - 1;
        let (start, end) = match *self {
            Self::All => (0, last),
            Self::Single(c) if c <= last => (c, c),
            Self::Single(_) => (0, last),
            Self::Range(a, b) => (a, b.min(last)),
        };
        (start <= end).then_some((start, end))
    }
}

/// A prompt reduced to its formatting intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPlan {
    pub pair: ColorPair,
    pub rows: RowSelection,
    pub columns: ColumnSelection,
    pub bold: bool,
    pub italic: bool,
}

impl PromptPlan {
    /// `None` when the prompt is not a highlighting request.
    pub fn parse(prompt: &str) -> Option<Self> {
        let lowered = prompt.to_lowercase();
        if !lowered.contains("highlight") {
            return None;
        }

        Some(Self {
            pair: extended_color(&lowered),
            rows: parse_rows(&lowered),
            columns: parse_columns(&lowered),
            bold: lowered.contains("bold"),
            italic: lowered.contains("italic"),
        })
    }

    pub fn apply(&self, grid: &[Vec<CellValue>]) -> StyleGrid {
        let mut styles = StyleGrid::empty_like(grid);
        let header_width = grid.first().map_or(0, Vec::len);
        let Some((start_col, end_col)) = self.columns.bounds(header_width) else {
            return styles;
        };

        let record = self.record();
        for row in self.rows.indices(grid.len()) {
            for col in start_col..=end_col {
                if let Some(cell) = styles.cell_mut(row, col) {
                    *cell = record.clone();
                }
            }
        }
        styles
    }

    fn record(&self) -> StyleRecord {
        let mut record = StyleRecord::painted(self.pair);
        if self.bold {
            record.bold = Some(true);
        }
        if self.italic {
            record.italic = Some(true);
        }
        record
    }
}

fn parse_rows(lowered: &str) -> RowSelection {
    if lowered.contains("top") {
        return RowSelection::Top(captured_count(top_re(), lowered).unwrap_or(DEFAULT_COUNT));
    }
    if lowered.contains("bottom") {
        return RowSelection::Bottom(captured_count(bottom_re(), lowered).unwrap_or(DEFAULT_COUNT));
    }
    if lowered.contains("odd") {
        return RowSelection::Odd;
    }
    if lowered.contains("even") {
        return RowSelection::Even;
    }
    if let Some(caps) = row_range_re().captures(lowered) {
        let a = caps[1].parse::<usize>().unwrap_or(usize::MAX);
        let b = caps[2].parse::<usize>().unwrap_or(usize::MAX);
        return RowSelection::Range(a, b);
    }
    if let Some(n) = captured_count(row_re(), lowered) {
        return RowSelection::Single(n);
    }
    RowSelection::All
}

fn parse_columns(lowered: &str) -> ColumnSelection {
    if !lowered.contains("column") {
        return ColumnSelection::All;
    }
    if let Some(caps) = column_range_re().captures(lowered) {
        return ColumnSelection::Range(letter_index(&caps[1]), letter_index(&caps[2]));
    }
    if let Some(caps) = column_re().captures(lowered) {
        return ColumnSelection::Single(letter_index(&caps[1]));
    }
    ColumnSelection::All
}

/// "a" -> 0, "b" -> 1, ...
fn letter_index(letter: &str) -> usize {
    letter
        .bytes()
        .next()
        .map_or(0, |b| (b.to_ascii_uppercase() - b'A') as usize)
}

/// Parse `prompt` and apply it to `grid`. `None` when the prompt is not a
/// highlighting request.
pub fn parse_prompt(prompt: &str, grid: &[Vec<CellValue>]) -> Option<StyleGrid> {
    PromptPlan::parse(prompt).map(|plan| plan.apply(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, PURPLE, RED};

    fn sheet(data_rows: usize) -> Vec<Vec<CellValue>> {
        let mut grid = vec![vec!["country".into(), "sales".into(), "total".into(), "rank".into()]];
        for i in 0..data_rows {
            grid.push(vec![
                format!("c{i}").into(),
                (i as i64 * 10).into(),
                (i as i64 * 12).into(),
                (i as i64 + 1).into(),
            ]);
        }
        grid
    }

    fn painted_cols(styles: &StyleGrid, row: usize) -> Vec<usize> {
        styles
            .row(row)
            .unwrap()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(j, _)| j)
            .collect()
    }

    #[test]
    fn test_not_a_highlight_request() {
        assert_eq!(parse_prompt("sort by country", &sheet(3)), None);
        assert_eq!(PromptPlan::parse(""), None);
    }

    #[test]
    fn test_case_insensitive() {
        let plan = PromptPlan::parse("HIGHLIGHT the TOP 3 in Blue").unwrap();
        assert_eq!(plan.pair, BLUE);
        assert_eq!(plan.rows, RowSelection::Top(3));

        let styles = parse_prompt("HIGHLIGHT the TOP 3 in Blue", &sheet(10)).unwrap();
        assert_eq!(styles.styled_rows(), vec![1, 2, 3]);
    }

    #[test]
    fn test_extended_palette() {
        let plan = PromptPlan::parse("highlight in purple").unwrap();
        assert_eq!(plan.pair, PURPLE);
        let plan = PromptPlan::parse("highlight everything").unwrap();
        assert_eq!(plan.pair, RED);
    }

    #[test]
    fn test_top_wins_over_bottom() {
        let plan = PromptPlan::parse("highlight top 2 and bottom 2").unwrap();
        assert_eq!(plan.rows, RowSelection::Top(2));
    }

    #[test]
    fn test_bottom_default() {
        let styles = parse_prompt("highlight bottom rows", &sheet(15)).unwrap();
        assert_eq!(styles.styled_rows(), (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_odd_and_even_rows() {
        let grid = sheet(6);
        assert_eq!(parse_prompt("highlight odd rows", &grid).unwrap().styled_rows(), vec![1, 3, 5]);
        assert_eq!(parse_prompt("highlight even rows", &grid).unwrap().styled_rows(), vec![2, 4, 6]);
    }

    #[test]
    fn test_row_range_and_single_row() {
        let grid = sheet(8);
        let styles = parse_prompt("highlight rows 2-4 in blue", &grid).unwrap();
        assert_eq!(styles.styled_rows(), vec![2, 3, 4]);

        let styles = parse_prompt("highlight rows 0 - 100", &grid).unwrap();
        assert_eq!(styles.styled_rows(), (1..=8).collect::<Vec<_>>());

        let styles = parse_prompt("highlight row 5", &grid).unwrap();
        assert_eq!(styles.styled_rows(), vec![5]);
    }

    #[test]
    fn test_single_row_out_of_range_paints_nothing() {
        let grid = sheet(3);
        assert!(parse_prompt("highlight row 0", &grid).unwrap().is_blank());
        assert!(parse_prompt("highlight row 9", &grid).unwrap().is_blank());
    }

    #[test]
    fn test_single_column() {
        let grid = sheet(3);
        let styles = parse_prompt("highlight column B in green", &grid).unwrap();
        assert_eq!(styles.styled_rows(), vec![1, 2, 3]);
        assert_eq!(painted_cols(&styles, 1), vec![1]);
    }

    #[test]
    fn test_column_range() {
        let grid = sheet(2);
        let styles = parse_prompt("highlight columns b-c", &grid).unwrap();
        assert_eq!(painted_cols(&styles, 2), vec![1, 2]);

        let styles = parse_prompt("highlight columns c - z", &grid).unwrap();
        assert_eq!(painted_cols(&styles, 1), vec![2, 3]);
    }

    #[test]
    fn test_column_past_header_falls_back_to_all() {
        let grid = sheet(2);
        let styles = parse_prompt("highlight column x", &grid).unwrap();
        assert_eq!(painted_cols(&styles, 1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_column_word_without_letter() {
        let plan = PromptPlan::parse("highlight columns in blue").unwrap();
        assert_eq!(plan.columns, ColumnSelection::All);
    }

    #[test]
    fn test_bold_and_italic_flags() {
        let grid = sheet(2);
        let styles = parse_prompt("highlight top 1 bold italic", &grid).unwrap();
        let cell = styles.get(1, 0).unwrap();
        assert_eq!(cell.bold, Some(true));
        assert_eq!(cell.italic, Some(true));
        assert_eq!(cell.background.as_deref(), Some(RED.background));
        assert!(styles.get(2, 0).unwrap().is_empty());
    }

    #[test]
    fn test_header_never_painted_and_shape_kept() {
        let grid = vec![
            vec!["a".into(), "b".into()],
            vec![1i64.into(), 2i64.into(), 3i64.into()],
            vec![],
        ];
        let styles = parse_prompt("highlight all", &grid).unwrap();
        assert!(styles.matches_shape(&grid));
        assert!(styles.row(0).unwrap().iter().all(|c| c.is_empty()));
        // columns are bounded by the header width
        assert_eq!(painted_cols(&styles, 1), vec![0, 1]);
    }

    #[test]
    fn test_empty_grid() {
        let empty: Vec<Vec<CellValue>> = Vec::new();
        let styles = parse_prompt("highlight everything", &empty).unwrap();
        assert!(styles.is_empty());
    }
}
