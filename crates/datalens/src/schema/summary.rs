//! Aggregations, correlations and the dataset summary that owns them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::column::ColumnStats;
use crate::error::Result;
use crate::input::{Record, Scalar, cell};

/// Reduction applied to each group of an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Arithmetic total.
    Sum,
    /// Total divided by the number of numeric values.
    Mean,
    /// Number of numeric values.
    Count,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Mean => write!(f, "mean"),
            Operation::Count => write!(f, "count"),
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" | "total" => Ok(Operation::Sum),
            "mean" | "avg" | "average" => Ok(Operation::Mean),
            "count" => Ok(Operation::Count),
            _ => Err(format!("Unknown operation: {}. Use sum, mean, or count.", s)),
        }
    }
}

/// A group-by reduction of one numeric column by one categorical or date column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Content-addressed identifier derived from group column, metric and operation.
    pub id: String,
    /// Human-readable description, e.g. "Total revenue by region".
    pub description: String,
    /// Column the rows were grouped by.
    pub group_by: String,
    /// Column that was reduced.
    pub metric: String,
    /// Reduction applied per group.
    pub operation: Operation,
    /// One record per group: the key under `group_by`, the value under `metric`.
    pub data: Vec<Record>,
}

impl AggregationResult {
    /// Create an aggregation result, deriving its identifier.
    pub fn new(
        description: impl Into<String>,
        group_by: impl Into<String>,
        metric: impl Into<String>,
        operation: Operation,
        data: Vec<Record>,
    ) -> Self {
        let group_by = group_by.into();
        let metric = metric.into();
        Self {
            id: aggregation_id(&group_by, &metric, operation),
            description: description.into(),
            group_by,
            metric,
            operation,
            data,
        }
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.data.len()
    }

    /// Group key of a data row.
    pub fn key_of<'a>(&self, row: &'a Record) -> &'a Scalar {
        cell(row, &self.group_by)
    }

    /// Reduced value of a data row.
    pub fn value_of(&self, row: &Record) -> Option<f64> {
        cell(row, &self.metric).as_number()
    }

    /// `(key, value)` pairs in data order.
    pub fn entries(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.data.iter().map(|row| {
            (
                self.key_of(row).to_string(),
                self.value_of(row).unwrap_or_default(),
            )
        })
    }
}

/// Identifier shared by every aggregation over the same columns and operation.
pub fn aggregation_id(group_by: &str, metric: &str, operation: Operation) -> String {
    let mut hasher = Sha256::new();
    hasher.update(group_by.as_bytes());
    hasher.update([0x1f]);
    hasher.update(metric.as_bytes());
    hasher.update([0x1f]);
    hasher.update(operation.to_string().as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    format!("agg:{}", &hex[..16])
}

/// One paired sample retained for scatter plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Pearson correlation between two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub x_column: String,
    pub y_column: String,
    /// Coefficient in [-1, 1], rounded to 3 decimals.
    pub correlation: f64,
    /// Leading paired samples in row order.
    pub scatter_data: Vec<ScatterPoint>,
}

/// Profile of a whole dataset: column statistics plus the pre-computed
/// aggregation and correlation banks.
///
/// Built once per dataset version and never mutated; safe to share across
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub date_columns: Vec<String>,
    pub column_stats: Vec<ColumnStats>,
    pub aggregations: Vec<AggregationResult>,
    pub correlations: Vec<CorrelationResult>,
}

impl DataSummary {
    /// Statistics for a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.column_stats.iter().find(|c| c.column == name)
    }

    /// Aggregation by identifier.
    pub fn aggregation(&self, id: &str) -> Option<&AggregationResult> {
        self.aggregations.iter().find(|a| a.id == id)
    }

    /// Correlation between two columns, in either order.
    pub fn correlation(&self, a: &str, b: &str) -> Option<&CorrelationResult> {
        self.correlations.iter().find(|c| {
            (c.x_column == a && c.y_column == b) || (c.x_column == b && c.y_column == a)
        })
    }

    /// Render the text digest.
    pub fn digest(&self) -> String {
        crate::digest::render(self)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::record;

    #[test]
    fn test_aggregation_id_is_stable() {
        let a = aggregation_id("region", "revenue", Operation::Sum);
        let b = aggregation_id("region", "revenue", Operation::Sum);
        let c = aggregation_id("region", "revenue", Operation::Mean);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("agg:"));
        assert_eq!(a.len(), "agg:".len() + 16);
    }

    #[test]
    fn test_entries() {
        let agg = AggregationResult::new(
            "Total revenue by region",
            "region",
            "revenue",
            Operation::Sum,
            vec![
                record([("region", Scalar::from("East")), ("revenue", Scalar::from(300))]),
                record([("region", Scalar::from("West")), ("revenue", Scalar::from(50))]),
            ],
        );

        let entries: Vec<(String, f64)> = agg.entries().collect();
        assert_eq!(entries, vec![("East".to_string(), 300.0), ("West".to_string(), 50.0)]);
        assert_eq!(agg.group_count(), 2);
    }

    #[test]
    fn test_correlation_lookup_is_order_insensitive() {
        let summary = DataSummary {
            correlations: vec![CorrelationResult {
                x_column: "x".into(),
                y_column: "y".into(),
                correlation: 1.0,
                scatter_data: Vec::new(),
            }],
            ..Default::default()
        };

        assert!(summary.correlation("y", "x").is_some());
        assert!(summary.correlation("x", "z").is_none());
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("SUM".parse::<Operation>(), Ok(Operation::Sum));
        assert_eq!("avg".parse::<Operation>(), Ok(Operation::Mean));
        assert!("median".parse::<Operation>().is_err());
    }
}
