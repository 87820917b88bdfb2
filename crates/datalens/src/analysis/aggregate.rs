//! Group-by aggregation.

use indexmap::IndexMap;

use crate::input::{Record, Scalar, cell};
use crate::profile::{StreamingStats, round_to};
use crate::schema::{AggregationResult, Operation};

/// Group key used for null, empty and missing group values.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Group rows by `group_column` and reduce the numeric values of
/// `value_column` in each group.
///
/// Values that are not numeric are left out of the reduction rather than
/// counted as zero, so a group can end up with a mean of 0 over no values.
/// Results are rounded to 2 decimals and ordered by value, largest first;
/// equal values keep the order their groups were first seen in.
pub fn aggregate(
    rows: &[Record],
    group_column: &str,
    value_column: &str,
    operation: Operation,
) -> Vec<Record> {
    let mut groups: IndexMap<String, StreamingStats> = IndexMap::new();

    for row in rows {
        let group = cell(row, group_column);
        let key = if group.is_null() {
            UNKNOWN_GROUP.to_string()
        } else {
            group.to_string()
        };

        let stats = groups.entry(key).or_default();
        if let Some(value) = cell(row, value_column).as_number() {
            stats.add(value);
        }
    }

    let mut reduced: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(key, stats)| (key, round_to(reduce(&stats, operation), 2)))
        .collect();

    reduced.sort_by(|a, b| b.1.total_cmp(&a.1));

    reduced
        .into_iter()
        .map(|(key, value)| group_row(group_column, key, value_column, value))
        .collect()
}

/// Sum per date value, ordered by the date text ascending.
///
/// Dates are compared lexicographically, which is chronological for ISO-8601
/// values only.
pub fn time_series(rows: &[Record], date_column: &str, value_column: &str) -> Vec<Record> {
    let mut data = aggregate(rows, date_column, value_column, Operation::Sum);
    data.sort_by(|a, b| {
        cell(a, date_column)
            .to_string()
            .cmp(&cell(b, date_column).to_string())
    });
    data
}

/// Aggregate and wrap the result with its description and identifier.
pub fn build_aggregation(
    rows: &[Record],
    group_column: &str,
    value_column: &str,
    operation: Operation,
) -> AggregationResult {
    AggregationResult::new(
        describe(group_column, value_column, operation),
        group_column,
        value_column,
        operation,
        aggregate(rows, group_column, value_column, operation),
    )
}

/// Build a time series aggregation for a date column.
pub fn build_time_series(rows: &[Record], date_column: &str, value_column: &str) -> AggregationResult {
    AggregationResult::new(
        format!("Total {} over {}", value_column, date_column),
        date_column,
        value_column,
        Operation::Sum,
        time_series(rows, date_column, value_column),
    )
}

/// Human-readable description of an aggregation.
pub fn describe(group_column: &str, value_column: &str, operation: Operation) -> String {
    match operation {
        Operation::Sum => format!("Total {} by {}", value_column, group_column),
        Operation::Mean => format!("Average {} by {}", value_column, group_column),
        Operation::Count => format!("Count of {} by {}", value_column, group_column),
    }
}

fn reduce(stats: &StreamingStats, operation: Operation) -> f64 {
    match operation {
        Operation::Sum => stats.sum(),
        Operation::Mean => {
            if stats.count() == 0 {
                0.0
            } else {
                stats.sum() / stats.count() as f64
            }
        }
        Operation::Count => stats.count() as f64,
    }
}

fn group_row(group_column: &str, key: String, value_column: &str, value: f64) -> Record {
    let mut row = Record::with_capacity(2);
    row.insert(group_column.to_string(), Scalar::Text(key));
    row.insert(value_column.to_string(), Scalar::Number(value));
    row
}
