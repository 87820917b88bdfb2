//! Column type inference from a leading sample.

use indexmap::IndexMap;

use super::dates::looks_like_date;
use crate::input::{Record, Scalar, cell};
use crate::limits::TYPE_SAMPLE_SIZE;
use crate::schema::ColumnType;

/// Classifies columns as number, string or date.
#[derive(Debug, Clone)]
pub struct TypeInferencer {
    /// Leading rows sampled per column.
    sample_size: usize,
}

impl TypeInferencer {
    /// Create an inferencer with the default sample size.
    pub fn new() -> Self {
        Self {
            sample_size: TYPE_SAMPLE_SIZE,
        }
    }

    /// Create an inferencer that samples `sample_size` leading rows.
    pub fn with_sample_size(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Infer the type of one column.
    ///
    /// Looks at the column's values in the first `sample_size` rows and drops
    /// the null ones before classifying.
    pub fn infer(&self, rows: &[Record], column: &str) -> ColumnType {
        let samples: Vec<&Scalar> = rows
            .iter()
            .take(self.sample_size)
            .map(|row| cell(row, column))
            .filter(|value| !value.is_null())
            .collect();

        classify(&samples)
    }

    /// Infer the types of all columns, in column order.
    pub fn infer_all(&self, rows: &[Record], columns: &[String]) -> IndexMap<String, ColumnType> {
        columns
            .iter()
            .map(|column| (column.clone(), self.infer(rows, column)))
            .collect()
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a sample of non-null values.
///
/// Rules are checked in a fixed order and the first that holds for every
/// sample wins: number, then date, then string. An empty sample is a string
/// column, so all-empty columns never look numeric or temporal.
pub fn classify(samples: &[&Scalar]) -> ColumnType {
    if samples.is_empty() {
        return ColumnType::String;
    }

    if samples.iter().all(|value| value.is_numeric_literal()) {
        return ColumnType::Number;
    }

    if samples.iter().all(|value| is_date_value(value)) {
        return ColumnType::Date;
    }

    ColumnType::String
}

/// Whether a single value is a calendar date or timestamp.
///
/// Only text can be a date; bare numbers are never read as epoch offsets.
pub fn is_date_value(value: &Scalar) -> bool {
    match value {
        Scalar::Text(s) => looks_like_date(s),
        _ => false,
    }
}

/// Infer the type of one column with the default sample size.
pub fn infer_column_type(rows: &[Record], column: &str) -> ColumnType {
    TypeInferencer::new().infer(rows, column)
}

/// Infer the types of all columns with the default sample size.
pub fn infer_types(rows: &[Record], columns: &[String]) -> IndexMap<String, ColumnType> {
    TypeInferencer::new().infer_all(rows, columns)
}
