//! Per-column statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Statistics computed for a column, shaped by its type.
///
/// Exactly one of `numeric`, `top_values` and `date_range` can be present and
/// it matches `column_type`. A numeric column with no valid numbers carries
/// none of them: absent statistics are never reported as zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name.
    pub column: String,
    /// Inferred (or caller-supplied) type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Number of distinct raw values, null included.
    pub unique_count: usize,
    /// Number of null or empty values.
    pub null_count: usize,
    /// Numeric statistics (for number columns).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub numeric: Option<NumericStats>,
    /// Most frequent values (for string columns).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_values: Option<Vec<ValueCount>>,
    /// Earliest and latest value (for date columns).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_range: Option<DateRange>,
}

impl ColumnStats {
    /// Base statistics with no type-specific section.
    pub fn new(column: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            column: column.into(),
            column_type,
            unique_count: 0,
            null_count: 0,
            numeric: None,
            top_values: None,
            date_range: None,
        }
    }
}

/// Statistics for numeric columns, all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    /// Number of valid numeric values the statistics were computed from.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub sum: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// A value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// First and last value of a date column in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: String,
    pub latest: String,
}
