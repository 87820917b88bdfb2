//! In-memory dataset handed to the profiler.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::record::{Record, Scalar, cell};

/// Rows plus the authoritative column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in display order.
    pub columns: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Create a dataset with an explicit column order.
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// Create a dataset whose columns are the keys of the first row.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether a column is part of the dataset.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// All values of a column in row order, missing cells as null.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Scalar> + 'a {
        column_values(&self.rows, column)
    }

    /// Content-addressed identifier for this dataset version.
    ///
    /// Two datasets with the same columns and the same cells (by type and
    /// string form) share a fingerprint, so callers can key cached summaries
    /// on it instead of minting ids.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for column in &self.columns {
            update_framed(&mut hasher, column.as_bytes());
        }
        hasher.update([0x1e]);
        for row in &self.rows {
            for column in &self.columns {
                let value = cell(row, column);
                let tag: u8 = match value {
                    Scalar::Null => b'0',
                    Scalar::Number(_) => b'n',
                    Scalar::Text(_) => b't',
                };
                hasher.update([tag]);
                update_framed(&mut hasher, value.to_string().as_bytes());
            }
            hasher.update([0x1e]);
        }
        format!("sha256:{:x}", hasher.finalize())
    }
}

/// Hash one field behind its length prefix.
fn update_framed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// All values of `column` across `rows`, missing cells as null.
pub fn column_values<'a>(rows: &'a [Record], column: &'a str) -> impl Iterator<Item = &'a Scalar> + 'a {
    rows.iter().map(move |row| cell(row, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::record;

    #[test]
    fn test_from_rows_uses_first_row_keys() {
        let dataset = Dataset::from_rows(vec![
            record([("region", Scalar::from("East")), ("revenue", Scalar::from(100))]),
            record([("region", Scalar::from("West"))]),
        ]);

        assert_eq!(dataset.columns, vec!["region", "revenue"]);
        assert_eq!(dataset.row_count(), 2);
        let revenue: Vec<&Scalar> = dataset.column_values("revenue").collect();
        assert_eq!(revenue, vec![&Scalar::Number(100.0), &Scalar::Null]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_rows(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.column_count(), 0);
    }

    #[test]
    fn test_fingerprint_is_content_addressed() {
        let a = Dataset::from_rows(vec![record([("x", 1)])]);
        let b = Dataset::from_rows(vec![record([("x", 1)])]);
        let c = Dataset::from_rows(vec![record([("x", "1")])]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert!(a.fingerprint().starts_with("sha256:"));
    }

    #[test]
    fn test_fingerprint_separates_column_names() {
        let joined = Dataset::new(vec!["a\u{1f}b".to_string()], Vec::new());
        let split = Dataset::new(vec!["a".to_string(), "b".to_string()], Vec::new());
        assert_ne!(joined.fingerprint(), split.fingerprint());
    }
}
