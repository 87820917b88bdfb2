//! Per-column descriptive statistics, keyed by column type.

mod categorical;
mod numeric;
mod temporal;

use std::collections::HashSet;

pub use categorical::{NULL_TOKEN, top_values};
pub use numeric::{StreamingStats, median, numeric_stats, round_to};
pub use temporal::date_range;

use crate::input::{Record, Scalar, column_values};
use crate::limits::TOP_VALUES_LIMIT;
use crate::schema::{ColumnStats, ColumnType};

/// Type-tagged identity of a raw value, so `1` and `"1"` stay distinct.
#[derive(Debug, PartialEq, Eq, Hash)]
enum DistinctKey<'a> {
    Null,
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a Scalar> for DistinctKey<'a> {
    fn from(value: &'a Scalar) -> Self {
        match value {
            Scalar::Null => DistinctKey::Null,
            // -0.0 and 0.0 are the same value.
            Scalar::Number(n) if *n == 0.0 => DistinctKey::Number(0f64.to_bits()),
            Scalar::Number(n) => DistinctKey::Number(n.to_bits()),
            Scalar::Text(s) => DistinctKey::Text(s),
        }
    }
}

/// Computes `ColumnStats` for one column at a time.
#[derive(Debug, Clone)]
pub struct ColumnProfiler {
    /// Most frequent values kept for categorical columns.
    top_values_limit: usize,
}

impl ColumnProfiler {
    /// Create a profiler with default settings.
    pub fn new() -> Self {
        Self {
            top_values_limit: TOP_VALUES_LIMIT,
        }
    }

    /// Create a profiler keeping `limit` top values per categorical column.
    pub fn with_top_values_limit(limit: usize) -> Self {
        Self {
            top_values_limit: limit,
        }
    }

    /// Profile a column whose type has already been decided.
    pub fn profile(&self, rows: &[Record], column: &str, column_type: ColumnType) -> ColumnStats {
        let values: Vec<&Scalar> = column_values(rows, column).collect();

        let mut stats = ColumnStats::new(column, column_type);
        stats.null_count = values.iter().filter(|v| v.is_null()).count();
        stats.unique_count = values
            .iter()
            .map(|v| DistinctKey::from(*v))
            .collect::<HashSet<_>>()
            .len();

        match column_type {
            ColumnType::Number => {
                let numbers: Vec<f64> = values.iter().filter_map(|v| v.as_number()).collect();
                stats.numeric = numeric_stats(&numbers);
            }
            ColumnType::String => {
                stats.top_values = Some(top_values(values.iter().copied(), self.top_values_limit));
            }
            ColumnType::Date => {
                stats.date_range = date_range(values.iter().copied());
            }
        }

        stats
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile one column with default settings.
pub fn profile_column(rows: &[Record], column: &str, column_type: ColumnType) -> ColumnStats {
    ColumnProfiler::new().profile(rows, column, column_type)
}
