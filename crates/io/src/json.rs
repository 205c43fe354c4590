// JSON import (array of arrays)

use std::path::Path;

use tintgrid_engine::Grid;

use crate::csv::read_file_as_utf8;

pub fn import(path: &Path) -> Result<Grid, String> {
    let content = read_file_as_utf8(path)?;
    parse_grid(&content).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Parse `[[...], [...]]`. Objects and nested arrays inside a row are rejected.
pub fn parse_grid(content: &str) -> Result<Grid, String> {
    serde_json::from_str::<Grid>(content).map_err(|e| format!("expected an array of rows: {e}"))
}
