//! Conditional formatting: color the cells of one column whose numeric value
//! satisfies a comparison such as `>100` or `<= 5`.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellValue;
use crate::error::EngineError;
use crate::palette::ColorPair;
use crate::style::StyleGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl Comparison {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "=",
            Self::Ne => "!=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub op: Comparison,
    pub threshold: f64,
}

impl Condition {
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let trimmed = text.trim();
        let invalid = || EngineError::InvalidCondition(text.to_string());

        // Two-char operators first so ">=" isn't read as ">" + "=5"
        let (op, rest) = [
            (">=", Comparison::Ge),
            ("<=", Comparison::Le),
            ("!=", Comparison::Ne),
            ("<>", Comparison::Ne),
            ("==", Comparison::Eq),
            (">", Comparison::Gt),
            ("<", Comparison::Lt),
            ("=", Comparison::Eq),
        ]
        .iter()
        .find_map(|(sym, op)| trimmed.strip_prefix(*sym).map(|rest| (*op, rest)))
        .ok_or_else(invalid)?;

        let threshold = rest
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(invalid)?;

        Ok(Self { op, threshold })
    }

    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            Comparison::Gt => value > self.threshold,
            Comparison::Ge => value >= self.threshold,
            Comparison::Lt => value < self.threshold,
            Comparison::Le => value <= self.threshold,
            Comparison::Eq => value == self.threshold,
            Comparison::Ne => value != self.threshold,
        }
    }
}

impl FromStr for Condition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.threshold)
    }
}

/// Index of the first header cell whose text contains `hint`, ignoring case.
pub fn find_column(grid: &[Vec<CellValue>], hint: &str) -> Option<usize> {
    let needle = hint.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    grid.first()?
        .iter()
        .position(|h| h.raw_display().to_lowercase().contains(&needle))
}

/// Paint the `column_hint` cells of data rows whose number satisfies
/// `condition`. Blank and non-numeric cells never match.
pub fn conditional_format(
    grid: &[Vec<CellValue>],
    column_hint: &str,
    condition: &Condition,
    pair: ColorPair,
) -> Result<StyleGrid, EngineError> {
    let col = find_column(grid, column_hint)
        .ok_or_else(|| EngineError::UnknownColumn(column_hint.to_string()))?;

    let mut styles = StyleGrid::empty_like(grid);
    for (row, cells) in grid.iter().enumerate().skip(1) {
        let hit = cells
            .get(col)
            .and_then(CellValue::as_number)
            .is_some_and(|v| condition.matches(v));
        if hit {
            styles.paint_cell(row, col, pair);
        }
    }
    Ok(styles)
}
