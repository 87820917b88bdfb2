//! Profile builder: the main entry point that turns a dataset into a
//! `DataSummary`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::analysis::{build_aggregation, build_time_series, correlate};
use crate::error::{DatalensError, Result};
use crate::inference::TypeInferencer;
use crate::input::Dataset;
use crate::limits;
use crate::profile::ColumnProfiler;
use crate::schema::{
    AggregationResult, ColumnStats, ColumnType, CorrelationResult, DataSummary, Operation,
};

/// Configuration for building a profile.
///
/// Every cap defaults to its constant in [`crate::limits`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Leading rows sampled per column for type inference.
    pub type_sample_size: usize,
    /// Most frequent values kept per categorical column.
    pub top_values_limit: usize,
    /// Highest distinct-value count for a categorical group key.
    pub max_group_cardinality: usize,
    /// Categorical columns used as group keys.
    pub max_group_columns: usize,
    /// Numeric columns reduced per group key.
    pub max_metric_columns: usize,
    /// Date columns used for time series.
    pub max_time_series_columns: usize,
    /// Numeric columns reduced per date column.
    pub max_time_series_metrics: usize,
    /// Numeric columns considered for pairwise correlation.
    pub max_correlation_columns: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            type_sample_size: limits::TYPE_SAMPLE_SIZE,
            top_values_limit: limits::TOP_VALUES_LIMIT,
            max_group_cardinality: limits::MAX_GROUP_CARDINALITY,
            max_group_columns: limits::MAX_GROUP_COLUMNS,
            max_metric_columns: limits::MAX_METRIC_COLUMNS,
            max_time_series_columns: limits::MAX_TIME_SERIES_COLUMNS,
            max_time_series_metrics: limits::MAX_TIME_SERIES_METRICS,
            max_correlation_columns: limits::MAX_CORRELATION_COLUMNS,
        }
    }
}

impl ProfilerConfig {
    /// Set the type inference sample size.
    pub fn with_type_sample_size(mut self, size: usize) -> Self {
        self.type_sample_size = size;
        self
    }

    /// Set how many top values are kept per categorical column.
    pub fn with_top_values_limit(mut self, limit: usize) -> Self {
        self.top_values_limit = limit;
        self
    }

    /// Set the cardinality cap for categorical group keys.
    pub fn with_max_group_cardinality(mut self, max: usize) -> Self {
        self.max_group_cardinality = max;
        self
    }

    /// Set how many categorical columns are grouped on.
    pub fn with_max_group_columns(mut self, max: usize) -> Self {
        self.max_group_columns = max;
        self
    }

    /// Set how many numeric columns are reduced per group key.
    pub fn with_max_metric_columns(mut self, max: usize) -> Self {
        self.max_metric_columns = max;
        self
    }

    /// Set how many date columns produce time series.
    pub fn with_max_time_series_columns(mut self, max: usize) -> Self {
        self.max_time_series_columns = max;
        self
    }

    /// Set how many numeric columns are reduced per date column.
    pub fn with_max_time_series_metrics(mut self, max: usize) -> Self {
        self.max_time_series_metrics = max;
        self
    }

    /// Set how many numeric columns are correlated pairwise.
    pub fn with_max_correlation_columns(mut self, max: usize) -> Self {
        self.max_correlation_columns = max;
        self
    }

    /// Reject settings that cannot produce a meaningful profile.
    ///
    /// Inference needs at least one sampled row; every other cap may be 0 to
    /// switch its stage off.
    pub fn validate(&self) -> Result<()> {
        if self.type_sample_size == 0 {
            return Err(DatalensError::Config(
                "type_sample_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds `DataSummary` values.
///
/// # Example
///
/// ```
/// use datalens::{Dataset, Profiler, Scalar, record};
///
/// let dataset = Dataset::from_rows(vec![
///     record([("region", Scalar::from("East")), ("revenue", Scalar::from(100))]),
///     record([("region", Scalar::from("West")), ("revenue", Scalar::from(50))]),
/// ]);
///
/// let summary = Profiler::new().build(&dataset);
/// assert_eq!(summary.numeric_columns, vec!["revenue"]);
/// assert_eq!(summary.aggregations[0].description, "Total revenue by region");
/// ```
#[derive(Debug, Clone)]
pub struct Profiler {
    config: ProfilerConfig,
    inferencer: TypeInferencer,
    columns: ColumnProfiler,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let inferencer = TypeInferencer::with_sample_size(config.type_sample_size);
        let columns = ColumnProfiler::with_top_values_limit(config.top_values_limit);

        Self {
            config,
            inferencer,
            columns,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile a dataset, inferring every column type.
    pub fn build(&self, dataset: &Dataset) -> DataSummary {
        self.build_with_types(dataset, &HashMap::new())
    }

    /// Profile a dataset using caller-supplied types where given.
    ///
    /// Columns without a hint are inferred. An empty dataset yields an empty
    /// summary with no columns.
    #[instrument(skip_all, fields(rows = dataset.row_count(), columns = dataset.column_count()))]
    pub fn build_with_types(
        &self,
        dataset: &Dataset,
        column_types: &HashMap<String, ColumnType>,
    ) -> DataSummary {
        if dataset.is_empty() {
            debug!("empty dataset, nothing to profile");
            return DataSummary::default();
        }

        let rows = &dataset.rows;

        let column_stats: Vec<ColumnStats> = dataset
            .columns
            .iter()
            .map(|column| {
                let column_type = match column_types.get(column) {
                    Some(hint) => *hint,
                    None => self.inferencer.infer(rows, column),
                };
                self.columns.profile(rows, column, column_type)
            })
            .collect();

        let columns_of = |wanted: fn(&ColumnType) -> bool| -> Vec<String> {
            column_stats
                .iter()
                .filter(|stats| wanted(&stats.column_type))
                .map(|stats| stats.column.clone())
                .collect()
        };
        let numeric_columns = columns_of(ColumnType::is_numeric);
        let categorical_columns = columns_of(ColumnType::is_categorical);
        let date_columns = columns_of(ColumnType::is_temporal);

        let mut aggregations = self.group_aggregations(dataset, &column_stats, &numeric_columns);
        aggregations.extend(self.time_series(dataset, &date_columns, &numeric_columns));
        let correlations = self.correlations(dataset, &numeric_columns);

        debug!(
            numeric = numeric_columns.len(),
            categorical = categorical_columns.len(),
            date = date_columns.len(),
            aggregations = aggregations.len(),
            correlations = correlations.len(),
            "profile built"
        );

        DataSummary {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            numeric_columns,
            categorical_columns,
            date_columns,
            column_stats,
            aggregations,
            correlations,
        }
    }

    /// Sum and mean of each numeric column by each low-cardinality
    /// categorical column.
    fn group_aggregations(
        &self,
        dataset: &Dataset,
        column_stats: &[ColumnStats],
        numeric_columns: &[String],
    ) -> Vec<AggregationResult> {
        let eligible: Vec<&ColumnStats> = column_stats
            .iter()
            .filter(|stats| stats.column_type.is_categorical())
            .filter(|stats| stats.unique_count <= self.config.max_group_cardinality)
            .collect();

        if eligible.len() > self.config.max_group_columns {
            debug!(
                eligible = eligible.len(),
                kept = self.config.max_group_columns,
                "capping categorical group columns"
            );
        }

        let metrics = &numeric_columns[..numeric_columns.len().min(self.config.max_metric_columns)];

        let mut aggregations = Vec::new();
        for group in eligible.iter().take(self.config.max_group_columns) {
            for metric in metrics {
                for operation in [Operation::Sum, Operation::Mean] {
                    aggregations.push(build_aggregation(&dataset.rows, &group.column, metric, operation));
                }
            }
        }
        aggregations
    }

    /// Totals of each numeric column per date value, in date order.
    fn time_series(
        &self,
        dataset: &Dataset,
        date_columns: &[String],
        numeric_columns: &[String],
    ) -> Vec<AggregationResult> {
        let metrics =
            &numeric_columns[..numeric_columns.len().min(self.config.max_time_series_metrics)];

        date_columns
            .iter()
            .take(self.config.max_time_series_columns)
            .flat_map(|date| {
                metrics
                    .iter()
                    .map(move |metric| build_time_series(&dataset.rows, date, metric))
            })
            .collect()
    }

    /// Pearson correlation for every unordered pair of leading numeric columns.
    fn correlations(&self, dataset: &Dataset, numeric_columns: &[String]) -> Vec<CorrelationResult> {
        let columns =
            &numeric_columns[..numeric_columns.len().min(self.config.max_correlation_columns)];

        let mut correlations = Vec::new();
        for (i, x) in columns.iter().enumerate() {
            for y in &columns[i + 1..] {
                correlations.push(correlate(&dataset.rows, x, y));
            }
        }
        correlations
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile a dataset with default configuration.
pub fn build_summary(dataset: &Dataset) -> DataSummary {
    Profiler::new().build(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Record, Scalar, record};

    fn wide_dataset(categorical: usize, numeric: usize, dates: usize) -> Dataset {
        let rows: Vec<Record> = (0..6)
            .map(|r| {
                let mut row = Record::new();
                for c in 0..categorical {
                    row.insert(format!("cat{c}"), Scalar::from(format!("g{}", r % 2)));
                }
                for n in 0..numeric {
                    row.insert(format!("num{n}"), Scalar::from((r * (n + 1)) as f64));
                }
                for d in 0..dates {
                    row.insert(format!("date{d}"), Scalar::from(format!("2023-01-0{}", r + 1)));
                }
                row
            })
            .collect();
        Dataset::from_rows(rows)
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(vec!["a".into()], Vec::new());
        let summary = Profiler::new().build(&dataset);

        assert_eq!(summary, DataSummary::default());
        assert_eq!(summary.column_count, 0);
    }

    #[test]
    fn test_columns_partitioned_by_type() {
        let summary = Profiler::new().build(&wide_dataset(1, 2, 1));

        assert_eq!(summary.row_count, 6);
        assert_eq!(summary.column_count, 4);
        assert_eq!(summary.numeric_columns, vec!["num0", "num1"]);
        assert_eq!(summary.categorical_columns, vec!["cat0"]);
        assert_eq!(summary.date_columns, vec!["date0"]);
        assert_eq!(summary.column_stats.len(), 4);
    }

    #[test]
    fn test_aggregation_caps_and_order() {
        let summary = Profiler::new().build(&wide_dataset(6, 8, 0));

        // 4 group columns x 6 metrics x (sum, mean)
        assert_eq!(summary.aggregations.len(), 4 * 6 * 2);
        let first = &summary.aggregations[0];
        assert_eq!((first.group_by.as_str(), first.metric.as_str()), ("cat0", "num0"));
        assert_eq!(first.operation, Operation::Sum);
        assert_eq!(summary.aggregations[1].operation, Operation::Mean);
        assert_eq!(summary.aggregations[2].metric, "num1");
        assert!(summary.aggregations.iter().all(|a| a.group_by != "cat4"));
    }

    #[test]
    fn test_high_cardinality_columns_are_not_grouped() {
        let rows: Vec<Record> = (0..30)
            .map(|i| {
                record([
                    ("id", Scalar::from(format!("row-{i}"))),
                    ("kind", Scalar::from(if i % 2 == 0 { "a" } else { "b" })),
                    ("value", Scalar::from(i)),
                ])
            })
            .collect();
        let summary = Profiler::new().build(&Dataset::from_rows(rows));

        assert!(summary.aggregations.iter().all(|a| a.group_by == "kind"));
        assert_eq!(summary.aggregations.len(), 2);
    }

    #[test]
    fn test_time_series_caps_and_order() {
        let summary = Profiler::new().build(&wide_dataset(0, 5, 3));

        assert_eq!(summary.aggregations.len(), 2 * 4);
        for series in &summary.aggregations {
            assert_eq!(series.operation, Operation::Sum);
            let keys: Vec<String> = series.entries().map(|(k, _)| k).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }
        assert!(summary.aggregations.iter().all(|a| a.group_by != "date2"));
        assert!(summary.aggregations.iter().all(|a| a.metric != "num4"));
    }

    #[test]
    fn test_correlation_pairs() {
        let summary = Profiler::new().build(&wide_dataset(0, 7, 0));

        // C(5, 2) pairs among the first five numeric columns
        assert_eq!(summary.correlations.len(), 10);
        let pairs: Vec<(&str, &str)> = summary
            .correlations
            .iter()
            .map(|c| (c.x_column.as_str(), c.y_column.as_str()))
            .collect();
        assert_eq!(pairs[0], ("num0", "num1"));
        assert_eq!(pairs[9], ("num3", "num4"));
        assert!(pairs.iter().all(|(x, y)| x < y));
    }

    #[test]
    fn test_type_hints_override_inference() {
        let rows = vec![
            record([("code", Scalar::from("1")), ("v", Scalar::from(1))]),
            record([("code", Scalar::from("2")), ("v", Scalar::from(2))]),
        ];
        let hints = HashMap::from([("code".to_string(), ColumnType::String)]);
        let summary = Profiler::new().build_with_types(&Dataset::from_rows(rows), &hints);

        assert_eq!(summary.categorical_columns, vec!["code"]);
        assert_eq!(summary.numeric_columns, vec!["v"]);
        assert_eq!(summary.aggregations.len(), 2);
    }

    #[test]
    fn test_config_validation() {
        assert!(ProfilerConfig::default().validate().is_ok());
        assert!(ProfilerConfig::default().with_max_group_columns(0).validate().is_ok());

        let err = ProfilerConfig::default()
            .with_type_sample_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DatalensError::Config(_)));
        assert!(err.to_string().contains("type_sample_size"));
    }

    #[test]
    fn test_custom_caps() {
        let config = ProfilerConfig::default()
            .with_max_group_columns(1)
            .with_max_metric_columns(1)
            .with_max_correlation_columns(2);
        let summary = Profiler::with_config(config).build(&wide_dataset(3, 3, 0));

        assert_eq!(summary.aggregations.len(), 2);
        assert_eq!(summary.correlations.len(), 1);
    }
}
