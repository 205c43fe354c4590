// Grid I/O: CSV/JSON import, formatted payload export

pub mod csv;
pub mod json;
pub mod payload;

use std::path::Path;

use tintgrid_engine::Grid;

pub use payload::FormattedSheet;

/// Input formats a grid can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Csv,
    Tsv,
    Json,
}

impl GridFormat {
    /// Guess from the file extension. Unknown extensions read as CSV.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => GridFormat::Json,
            Some("tsv") | Some("tab") => GridFormat::Tsv,
            _ => GridFormat::Csv,
        }
    }
}

/// Load a grid from disk. `delimiter` only applies to CSV; `None` sniffs it.
pub fn load(path: &Path, format: GridFormat, delimiter: Option<u8>) -> Result<Grid, String> {
    match format {
        GridFormat::Json => json::import(path),
        GridFormat::Tsv => csv::import_with_delimiter(path, b'\t'),
        GridFormat::Csv => match delimiter {
            Some(d) => csv::import_with_delimiter(path, d),
            None => csv::import(path),
        },
    }
}

/// Parse a grid from text already in memory (stdin).
pub fn parse(content: &str, format: GridFormat, delimiter: Option<u8>) -> Result<Grid, String> {
    match format {
        GridFormat::Json => json::parse_grid(content),
        GridFormat::Tsv => csv::parse(content, Some(b'\t')),
        GridFormat::Csv => csv::parse(content, delimiter),
    }
}
