//! Loading data files into a `Dataset`.
//!
//! `.json` files hold an array of objects; anything else is read as delimited
//! text with a header row (tab for `.tsv`, comma otherwise).

use std::fs;
use std::path::Path;

use datalens::{Dataset, DatalensError, Record, Scalar};
use serde_json::Value;
use tracing::debug;

/// Load a data file, choosing the reader from its extension.
pub fn load(path: &Path) -> Result<Dataset, Box<dyn std::error::Error>> {
    let bytes = fs::read(path).map_err(|e| DatalensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let dataset = match extension.as_str() {
        "json" => parse_json(&bytes)?,
        "tsv" | "tab" => parse_delimited(&bytes, b'\t')?,
        _ => parse_delimited(&bytes, b',')?,
    };

    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse delimited text. Headers name the columns; every cell is text.
pub fn parse_delimited(bytes: &[u8], delimiter: u8) -> Result<Dataset, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let fields = result?;
        let row: Record = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let value = match fields.get(i) {
                    Some(text) if !text.is_empty() => Scalar::Text(text.to_string()),
                    _ => Scalar::Null,
                };
                (column.clone(), value)
            })
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Parse a JSON array of objects. Columns are ordered by first appearance.
pub fn parse_json(bytes: &[u8]) -> datalens::Result<Dataset> {
    let values: Vec<Value> = serde_json::from_slice(bytes)?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(values.len());

    for (i, value) in values.into_iter().enumerate() {
        let Value::Object(object) = value else {
            return Err(DatalensError::InvalidRecord {
                row: i + 1,
                message: format!("expected an object, found {}", kind_of(&value)),
            });
        };

        let mut row = Record::with_capacity(object.len());
        for (key, value) in object {
            if !columns.contains(&key) {
                columns.push(key.clone());
            }
            row.insert(key, to_scalar(value));
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn to_scalar(value: Value) -> Scalar {
    match value {
        Value::Null => Scalar::Null,
        Value::Number(n) => n.as_f64().map(Scalar::Number).unwrap_or(Scalar::Null),
        Value::String(s) => Scalar::Text(s),
        other => Scalar::Text(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
