use std::io::ErrorKind;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::{cast_with_options, CastOptions};
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{is_count_column, CellValue, Dataset, PlayerRecord, REQUIRED_COLUMNS};
use crate::error::{DashboardResult, LoadError, SchemaError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the player table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "Name": "...", "Age": 25, ... }, ...]`
/// * `.parquet` – one column per field; anything castable to text or number
pub fn load_file(path: &Path) -> DashboardResult<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string()).into()),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    if source.kind() == ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Map every required column to its position in `headers`.
fn required_indices(headers: &[String]) -> Result<[usize; 8], SchemaError> {
    let mut indices = [0usize; 8];
    for (slot, col) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == col)
            .ok_or_else(|| SchemaError::missing(col, headers))?;
    }
    Ok(indices)
}

fn build_record(row: usize, cells: [CellValue; 8]) -> Result<PlayerRecord, LoadError> {
    PlayerRecord::from_cells(cells).map_err(|(col, cell)| {
        let reason = match cell {
            CellValue::Null => {
                format!("column '{col}' is blank; numeric columns must have a value in every row")
            }
            other => format!("column '{col}' expects a non-negative integer, got {other}"),
        };
        LoadError::malformed(row, reason)
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one player per line.
/// Extra columns are ignored.
fn load_csv(path: &Path) -> DashboardResult<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::malformed(0, format!("reading CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let indices = required_indices(&headers)?;
    let mut players = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| LoadError::malformed(row, e.to_string()))?;
        let cells = indices.map(|idx| match record.get(idx) {
            Some(s) if !s.trim().is_empty() => CellValue::Text(s.to_string()),
            _ => CellValue::Null,
        });
        players.push(build_record(row, cells)?);
    }

    Ok(Dataset::from_players(players))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Name": "A. Player", "Position": "Forward", "Age": 24, ... },
///   ...
/// ]
/// ```
///
/// A key that is absent from the first record is a schema error; absent from
/// a later record it reads as null.
fn load_json(path: &Path) -> DashboardResult<Dataset> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let root: JsonValue = serde_json::from_str(&text)
        .map_err(|e| LoadError::malformed(e.line(), format!("parsing JSON: {e}")))?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::malformed(0, "expected a top-level JSON array"))?;

    if let Some(first) = records.first().and_then(|r| r.as_object()) {
        let keys: Vec<String> = first.keys().cloned().collect();
        required_indices(&keys)?;
    }

    let mut players = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::malformed(row, "record is not a JSON object"))?;
        let cells =
            REQUIRED_COLUMNS.map(|col| obj.get(col).map_or(CellValue::Null, json_to_cell));
        players.push(build_record(row, cells)?);
    }

    Ok(Dataset::from_players(players))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of players.
///
/// Every required column is cast up front: text columns to Utf8 (this also
/// unpacks dictionary-encoded categoricals), count columns to Float64 (any
/// integer or float width). Works with files written by both **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> DashboardResult<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| LoadError::malformed(0, format!("reading parquet metadata: {e}")))?;

    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let indices = required_indices(&headers)?;

    let reader = builder
        .build()
        .map_err(|e| LoadError::malformed(0, format!("building parquet reader: {e}")))?;

    let mut players = Vec::new();
    for batch_result in reader {
        let first_row = players.len() + 1;
        let batch = batch_result.map_err(|e| {
            LoadError::malformed(first_row, format!("reading parquet record batch: {e}"))
        })?;

        let columns = indices
            .iter()
            .zip(REQUIRED_COLUMNS)
            .map(|(&idx, name)| normalize_column(batch.column(idx), name, first_row))
            .collect::<Result<Vec<_>, _>>()?;

        for r in 0..batch.num_rows() {
            let row = players.len() + 1;
            let cells = std::array::from_fn(|i| extract_cell(&columns[i], r));
            players.push(build_record(row, cells)?);
        }
    }

    Ok(Dataset::from_players(players))
}

/// Cast a required column to the one type [`extract_cell`] reads for it.
fn normalize_column(col: &ArrayRef, name: &str, first_row: usize) -> Result<ArrayRef, LoadError> {
    let target = if is_count_column(name) {
        DataType::Float64
    } else {
        DataType::Utf8
    };
    let options = CastOptions {
        safe: false,
        ..Default::default()
    };
    cast_with_options(col, &target, &options).map_err(|e| {
        let found = col.data_type();
        LoadError::malformed(
            first_row,
            format!("column '{name}' of type {found:?} cannot be read as {target:?}: {e}"),
        )
    })
}

/// Extract a single cell from a column produced by [`normalize_column`].
fn extract_cell(col: &ArrayRef, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 => CellValue::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        _ => CellValue::Null,
    }
}
