// Formatted payload export
//
// `{"data": [[...]], "formatting": [[{...}]]}` is the shape UI callers merge
// into their table rendering. `data` may be omitted when the caller already
// holds the grid. Whole-number cells are written as JSON integers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tintgrid_engine::{Grid, StyleGrid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Grid>,
    pub formatting: StyleGrid,
}

impl FormattedSheet {
    pub fn new(data: Grid, formatting: StyleGrid) -> Self {
        Self { data: Some(data), formatting }
    }

    pub fn formatting_only(formatting: StyleGrid) -> Self {
        Self { data: None, formatting }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| e.to_string())
    }

    pub fn write(&self, path: &Path, pretty: bool) -> Result<(), String> {
        let file = File::create(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let mut writer = BufWriter::new(file);
        let json = self.to_json(pretty)?;
        writer.write_all(json.as_bytes()).map_err(|e| e.to_string())?;
        writer.write_all(b"\n").map_err(|e| e.to_string())?;
        writer.flush().map_err(|e| e.to_string())
    }
}
