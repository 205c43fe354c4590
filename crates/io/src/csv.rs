// CSV/TSV import

use std::io::Read;
use std::path::Path;

use tintgrid_engine::{CellValue, Grid};

pub fn import(path: &Path) -> Result<Grid, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    log::debug!(
        "sniffed delimiter {:?} for {}",
        delimiter as char,
        path.display()
    );
    import_from_str(&content, delimiter)
}

pub fn import_with_delimiter(path: &Path, delimiter: u8) -> Result<Grid, String> {
    let content = read_file_as_utf8(path)?;
    import_from_str(&content, delimiter)
}

/// Parse CSV text already in memory (stdin, tests). `None` sniffs the delimiter.
pub fn parse(content: &str, delimiter: Option<u8>) -> Result<Grid, String> {
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(content));
    import_from_str(content, delimiter)
}

/// Delimiters tried by `sniff_delimiter`, in tie-break order.
const CANDIDATES: [u8; 4] = [b'\t', b';', b',', b'|'];

/// Non-blank lines inspected when sniffing.
const SAMPLE_LINES: usize = 10;

/// Guess the field delimiter from the first non-blank lines.
///
/// A candidate must split the header into at least two fields. It then scores
/// the header width times the number of sampled lines with that same width,
/// so jagged data rows lower the score without disqualifying the candidate.
/// Falls back to comma.
pub fn sniff_delimiter(content: &str) -> u8 {
    let sample: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let mut best: Option<(usize, u8)> = None;
    for delimiter in CANDIDATES {
        let Some(points) = score(&sample, delimiter) else {
            continue;
        };
        if best.map_or(true, |(top, _)| points > top) {
            best = Some((points, delimiter));
        }
    }
    best.map_or(b',', |(_, delimiter)| delimiter)
}

fn score(sample: &[&str], delimiter: u8) -> Option<usize> {
    let width = field_count(sample.first()?, delimiter);
    if width < 2 {
        return None;
    }
    let agreeing = sample
        .iter()
        .filter(|line| field_count(line, delimiter) == width)
        .count();
    Some(agreeing * width)
}

/// Fields on one line, honoring quotes.
fn field_count(line: &str, delimiter: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(Result::ok)
        .map_or(1, |record| record.len())
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;
    Ok(decode(bytes))
}

/// UTF-8 first; Windows-1252 (Excel exports) when that fails.
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            log::debug!("input is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    }
}

pub fn import_from_str(content: &str, delimiter: u8) -> Result<Grid, String> {
    // Rows keep their own width: the highlighter styles jagged grids as-is
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut grid: Grid = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("row {}: {}", row_idx + 1, e))?;
        grid.push(record.iter().map(CellValue::from_input).collect());
    }

    Ok(grid)
}
