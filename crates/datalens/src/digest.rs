//! Plain-text digest of a [`DataSummary`].
//!
//! The digest is meant to be pasted into a prompt or read in a terminal, so it
//! is compact and its layout is stable:
//!
//! ```text
//! === DATASET OVERVIEW ===
//! Rows: 3
//! ...
//! === AVAILABLE AGGREGATIONS ===
//! 1. Total revenue by region [2 groups] e.g. East=300
//! ```

use crate::input::format_number;
use crate::limits::{DIGEST_AGGREGATIONS, DIGEST_CORRELATIONS, DIGEST_TOP_VALUES};
use crate::schema::{AggregationResult, ColumnStats, ColumnType, CorrelationResult, DataSummary};

const STRONG: f64 = 0.7;
const MODERATE: f64 = 0.4;

/// Render the digest for a summary.
pub fn render(summary: &DataSummary) -> String {
    let mut sections = Vec::with_capacity(4);
    sections.push(overview(summary));
    sections.push(column_statistics(&summary.column_stats));
    sections.push(notable_correlations(&summary.correlations));
    sections.push(available_aggregations(&summary.aggregations));
    sections.join("\n\n")
}

/// Strength and direction of a correlation coefficient, e.g. "strong positive".
pub fn describe_correlation(r: f64) -> String {
    let strength = match r.abs() {
        a if a >= STRONG => "strong",
        a if a >= MODERATE => "moderate",
        _ => "weak",
    };
    let direction = if r >= 0.0 { "positive" } else { "negative" };
    format!("{} {}", strength, direction)
}

fn overview(summary: &DataSummary) -> String {
    [
        "=== DATASET OVERVIEW ===".to_string(),
        format!("Rows: {}", summary.row_count),
        format!("Columns: {}", summary.column_count),
        format!("Numeric columns: {}", list_or_none(&summary.numeric_columns)),
        format!("Categorical columns: {}", list_or_none(&summary.categorical_columns)),
        format!("Date columns: {}", list_or_none(&summary.date_columns)),
    ]
    .join("\n")
}

fn column_statistics(stats: &[ColumnStats]) -> String {
    let mut lines = vec!["=== COLUMN STATISTICS ===".to_string()];
    lines.extend(stats.iter().map(column_line));
    lines.join("\n")
}

fn column_line(stats: &ColumnStats) -> String {
    let label = stats.column_type.label();
    let detail = match stats.column_type {
        ColumnType::Number => match &stats.numeric {
            Some(n) => format!(
                "min={}, max={}, mean={}, median={}, sum={}, stdDev={}",
                format_number(n.min),
                format_number(n.max),
                format_number(n.mean),
                format_number(n.median),
                format_number(n.sum),
                format_number(n.std_dev),
            ),
            None => "no valid numeric values".to_string(),
        },
        ColumnType::String => {
            let top = stats
                .top_values
                .as_deref()
                .unwrap_or_default()
                .iter()
                .take(DIGEST_TOP_VALUES)
                .map(|vc| format!("{}: {}", vc.value, vc.count))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} unique, top values: {}", stats.unique_count, top)
        }
        ColumnType::Date => match &stats.date_range {
            Some(range) => format!("earliest={}, latest={}", range.earliest, range.latest),
            None => "no valid date values".to_string(),
        },
    };
    format!("- {} ({}): {}", stats.column, label, detail)
}

fn notable_correlations(correlations: &[CorrelationResult]) -> String {
    let mut ranked: Vec<&CorrelationResult> = correlations.iter().collect();
    ranked.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));

    let mut lines = vec!["=== NOTABLE CORRELATIONS ===".to_string()];
    if ranked.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(ranked.into_iter().take(DIGEST_CORRELATIONS).map(|c| {
        format!(
            "- {} vs {}: r={:.3} ({})",
            c.x_column,
            c.y_column,
            c.correlation,
            describe_correlation(c.correlation)
        )
    }));
    lines.join("\n")
}

fn available_aggregations(aggregations: &[AggregationResult]) -> String {
    let mut lines = vec!["=== AVAILABLE AGGREGATIONS ===".to_string()];
    if aggregations.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(
        aggregations
            .iter()
            .take(DIGEST_AGGREGATIONS)
            .enumerate()
            .map(|(i, agg)| aggregation_line(i + 1, agg)),
    );
    lines.join("\n")
}

fn aggregation_line(position: usize, agg: &AggregationResult) -> String {
    let mut line = format!("{}. {} [{} groups]", position, agg.description, agg.group_count());
    if let Some((key, value)) = agg.entries().next() {
        line.push_str(&format!(" e.g. {}={}", key, format_number(value)));
    }
    line
}

fn list_or_none(columns: &[String]) -> String {
    if columns.is_empty() {
        "none".to_string()
    } else {
        columns.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Scalar, record};
    use crate::schema::{DateRange, NumericStats, Operation, ValueCount};

    fn numeric(column: &str) -> ColumnStats {
        let mut stats = ColumnStats::new(column, ColumnType::Number);
        stats.unique_count = 5;
        stats.numeric = Some(NumericStats {
            count: 5,
            min: 1.0,
            max: 5.0,
            mean: 3.0,
            median: 3.0,
            sum: 15.0,
            std_dev: 1.41,
        });
        stats
    }

    fn correlation(x: &str, y: &str, r: f64) -> CorrelationResult {
        CorrelationResult {
            x_column: x.to_string(),
            y_column: y.to_string(),
            correlation: r,
            scatter_data: Vec::new(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let digest = render(&DataSummary::default());

        assert_eq!(
            digest,
            "=== DATASET OVERVIEW ===\n\
             Rows: 0\n\
             Columns: 0\n\
             Numeric columns: none\n\
             Categorical columns: none\n\
             Date columns: none\n\
             \n\
             === COLUMN STATISTICS ===\n\
             \n\
             === NOTABLE CORRELATIONS ===\n\
             (none)\n\
             \n\
             === AVAILABLE AGGREGATIONS ===\n\
             (none)"
        );
    }

    #[test]
    fn test_column_lines() {
        let mut category = ColumnStats::new("region", ColumnType::String);
        category.unique_count = 2;
        category.top_values = Some(vec![
            ValueCount { value: "East".to_string(), count: 2 },
            ValueCount { value: "West".to_string(), count: 1 },
        ]);

        let mut day = ColumnStats::new("day", ColumnType::Date);
        day.date_range = Some(DateRange {
            earliest: "2023-01-01".to_string(),
            latest: "2023-03-01".to_string(),
        });

        assert_eq!(
            column_line(&numeric("v")),
            "- v (numeric): min=1, max=5, mean=3, median=3, sum=15, stdDev=1.41"
        );
        assert_eq!(
            column_line(&ColumnStats::new("empty", ColumnType::Number)),
            "- empty (numeric): no valid numeric values"
        );
        assert_eq!(
            column_line(&category),
            "- region (categorical): 2 unique, top values: East: 2, West: 1"
        );
        assert_eq!(
            column_line(&day),
            "- day (date): earliest=2023-01-01, latest=2023-03-01"
        );
    }

    #[test]
    fn test_top_values_truncated() {
        let mut stats = ColumnStats::new("c", ColumnType::String);
        stats.unique_count = 8;
        stats.top_values = Some(
            (0..8)
                .map(|i| ValueCount { value: format!("v{}", i), count: 8 - i })
                .collect(),
        );

        assert!(column_line(&stats).ends_with("v3: 5, v4: 4"));
    }

    #[test]
    fn test_correlations_ranked_by_magnitude() {
        let correlations = vec![
            correlation("a", "b", 0.1),
            correlation("a", "c", -0.9),
            correlation("b", "c", 0.5),
            correlation("a", "d", 0.2),
            correlation("b", "d", -0.3),
            correlation("c", "d", 0.05),
        ];
        let section = notable_correlations(&correlations);
        let lines: Vec<&str> = section.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "- a vs c: r=-0.900 (strong negative)");
        assert_eq!(lines[2], "- b vs c: r=0.500 (moderate positive)");
        assert_eq!(lines[5], "- a vs b: r=0.100 (weak positive)");
    }

    #[test]
    fn test_describe_correlation_thresholds() {
        assert_eq!(describe_correlation(0.7), "strong positive");
        assert_eq!(describe_correlation(-0.4), "moderate negative");
        assert_eq!(describe_correlation(0.39), "weak positive");
        assert_eq!(describe_correlation(0.0), "weak positive");
    }

    #[test]
    fn test_aggregation_lines() {
        let data = vec![
            record([("region", Scalar::from("East")), ("revenue", Scalar::from(300))]),
            record([("region", Scalar::from("West")), ("revenue", Scalar::from(50.5))]),
        ];
        let sum = AggregationResult::new("Total revenue by region", "region", "revenue", Operation::Sum, data);
        let empty = AggregationResult::new("Average revenue by region", "region", "revenue", Operation::Mean, Vec::new());

        assert_eq!(aggregation_line(1, &sum), "1. Total revenue by region [2 groups] e.g. East=300");
        assert_eq!(aggregation_line(2, &empty), "2. Average revenue by region [0 groups]");
    }

    #[test]
    fn test_aggregations_truncated() {
        let aggregations: Vec<AggregationResult> = (0..25)
            .map(|i| {
                AggregationResult::new(format!("agg {}", i), "g", format!("m{}", i), Operation::Sum, Vec::new())
            })
            .collect();
        let section = available_aggregations(&aggregations);

        assert_eq!(section.lines().count(), 1 + DIGEST_AGGREGATIONS);
        assert!(section.ends_with("20. agg 19 [0 groups]"));
    }
}
