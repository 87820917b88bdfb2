//! Property-based tests for Datalens.
//!
//! These tests use proptest to generate random datasets and verify that the
//! profiler, aggregator, correlator and matcher keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p datalens --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p datalens --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use datalens::analysis::{aggregate, describe, pearson};
use datalens::inference::looks_like_date;
use datalens::profile::numeric_stats;
use datalens::{
    AggregationResult, DataSummary, Dataset, Operation, Profiler, RelevanceMatcher, Record,
    Scalar, record,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Whole numbers keep rounded statistics exact enough to compare.
fn whole_numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000i32..1000).prop_map(f64::from), 1..50)
}

/// Any scalar a loader could produce.
fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Null),
        (-1.0e6f64..1.0e6).prop_map(Scalar::Number),
        "[a-zA-Z0-9 \\-/:.]{0,16}".prop_map(Scalar::Text),
        "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9])".prop_map(Scalar::Text),
    ]
}

/// Rows over a fixed set of columns, with arbitrary cells.
fn rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (scalar(), scalar(), scalar(), scalar()).prop_map(|(a, b, c, d)| {
            record([("a", a), ("b", b), ("c", c), ("d", d)])
        }),
        0..40,
    )
}

/// Group/value rows; an empty group string reads as missing.
fn grouped_rows() -> impl Strategy<Value = Vec<(String, Option<i32>)>> {
    prop::collection::vec(
        (
            prop_oneof![Just("a"), Just("b"), Just("c"), Just("")].prop_map(String::from),
            prop::option::of(-100i32..100),
        ),
        0..60,
    )
}

// =============================================================================
// Numeric Statistics Properties
// =============================================================================

mod numeric_tests {
    use super::*;

    proptest! {
        /// The median sits between the extremes.
        #[test]
        fn median_between_min_and_max(values in whole_numbers()) {
            let stats = numeric_stats(&values).unwrap();
            prop_assert!(stats.min <= stats.median);
            prop_assert!(stats.median <= stats.max);
            prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        }

        /// Sum and mean agree up to rounding.
        #[test]
        fn sum_is_mean_times_count(values in whole_numbers()) {
            let stats = numeric_stats(&values).unwrap();
            let tolerance = 0.005 * (stats.count as f64 + 1.0) + 1e-9 * stats.sum.abs();
            prop_assert_eq!(stats.count, values.len());
            prop_assert!((stats.sum - stats.mean * stats.count as f64).abs() <= tolerance);
        }

        /// Standard deviation is zero exactly when every value is the same.
        #[test]
        fn std_dev_zero_iff_constant(values in whole_numbers()) {
            let stats = numeric_stats(&values).unwrap();
            let constant = values.iter().all(|v| *v == values[0]);
            prop_assert!(stats.std_dev >= 0.0);
            prop_assert_eq!(stats.std_dev == 0.0, constant);
        }
    }
}

// =============================================================================
// Aggregation Properties
// =============================================================================

mod aggregation_tests {
    use super::*;

    fn to_records(rows: &[(String, Option<i32>)]) -> Vec<Record> {
        rows.iter()
            .map(|(group, value)| {
                record([("g", Scalar::from(group.as_str())), ("v", Scalar::from(*value))])
            })
            .collect()
    }

    proptest! {
        /// One output row per distinct group key.
        #[test]
        fn one_row_per_group(rows in grouped_rows()) {
            let keys: HashSet<&str> = rows
                .iter()
                .map(|(g, _)| if g.is_empty() { "Unknown" } else { g.as_str() })
                .collect();

            for operation in [Operation::Sum, Operation::Mean, Operation::Count] {
                let data = aggregate(&to_records(&rows), "g", "v", operation);
                prop_assert_eq!(data.len(), keys.len());
            }
        }

        /// Counts add up to the number of numeric values.
        #[test]
        fn counts_add_up(rows in grouped_rows()) {
            let data = aggregate(&to_records(&rows), "g", "v", Operation::Count);
            let total: f64 = data.iter().filter_map(|row| row["v"].as_number()).sum();
            let numeric = rows.iter().filter(|(_, v)| v.is_some()).count();
            prop_assert_eq!(total, numeric as f64);
        }

        /// Output is ordered by value, largest first.
        #[test]
        fn sorted_descending(rows in grouped_rows()) {
            let data = aggregate(&to_records(&rows), "g", "v", Operation::Sum);
            let values: Vec<f64> = data.iter().filter_map(|row| row["v"].as_number()).collect();
            prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

// =============================================================================
// Correlation Properties
// =============================================================================

mod correlation_tests {
    use super::*;

    fn paired() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        prop::collection::vec((-1.0e4f64..1.0e4, -1.0e4f64..1.0e4), 0..60)
            .prop_map(|pairs: Vec<(f64, f64)>| -> (Vec<f64>, Vec<f64>) { pairs.into_iter().unzip() })
    }

    proptest! {
        /// r is symmetric and bounded.
        #[test]
        fn symmetric_and_bounded((xs, ys) in paired()) {
            let r = pearson(&xs, &ys);
            prop_assert!((-1.0..=1.0).contains(&r));
            prop_assert_eq!(r, pearson(&ys, &xs));
        }

        /// Fewer than three pairs gives zero.
        #[test]
        fn zero_below_three_pairs((xs, ys) in paired()) {
            let n = xs.len().min(2);
            prop_assert_eq!(pearson(&xs[..n], &ys[..n]), 0.0);
        }
    }
}

// =============================================================================
// Matcher Properties
// =============================================================================

mod matcher_tests {
    use super::*;

    /// Column names and query words are drawn from disjoint alphabets, so
    /// no rule can fire.
    fn column_name() -> impl Strategy<Value = String> {
        "[a-m]{3,8}"
    }

    fn unrelated_query() -> impl Strategy<Value = String> {
        prop::collection::vec("[p-z]{1,8}", 0..6).prop_map(|words| words.join(" "))
    }

    fn bank() -> impl Strategy<Value = Vec<AggregationResult>> {
        prop::collection::vec(
            (column_name(), column_name(), prop::bool::ANY),
            0..12,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .map(|(group, metric, sum)| {
                    let operation = if sum { Operation::Sum } else { Operation::Mean };
                    AggregationResult::new(
                        describe(&group, &metric, operation),
                        group,
                        metric,
                        operation,
                        Vec::new(),
                    )
                })
                .collect()
        })
    }

    proptest! {
        /// No shared vocabulary means no answer.
        #[test]
        fn unrelated_query_finds_nothing(aggregations in bank(), query in unrelated_query()) {
            let summary = DataSummary { aggregations, ..Default::default() };
            prop_assert!(RelevanceMatcher::new().find(&summary, &query).is_none());
        }

        /// The same query always picks the same aggregation.
        #[test]
        fn matching_is_deterministic(aggregations in bank(), query in "[a-z ]{0,30}") {
            let matcher = RelevanceMatcher::new();
            let first = matcher.find_in(&aggregations, &query).map(|a| a.id.clone());
            let second = matcher.find_in(&aggregations, &query).map(|a| a.id.clone());
            prop_assert_eq!(first, second);
        }
    }
}

// =============================================================================
// Robustness Properties
// =============================================================================

mod robustness_tests {
    use super::*;

    proptest! {
        /// Profiling never panics and keeps its bookkeeping straight.
        #[test]
        fn profile_never_panics(rows in rows()) {
            let dataset = Dataset::from_rows(rows);
            let summary = Profiler::new().build(&dataset);

            prop_assert_eq!(summary.row_count, dataset.row_count());
            prop_assert_eq!(
                summary.numeric_columns.len()
                    + summary.categorical_columns.len()
                    + summary.date_columns.len(),
                summary.column_count
            );
            for stats in &summary.column_stats {
                prop_assert!(stats.null_count <= summary.row_count);
                if let Some(numeric) = &stats.numeric {
                    prop_assert!(numeric.min <= numeric.max);
                }
            }
            for correlation in &summary.correlations {
                prop_assert!((-1.0..=1.0).contains(&correlation.correlation));
            }
            prop_assert!(summary.digest().starts_with("=== DATASET OVERVIEW ==="));
        }

        /// Date detection never panics on arbitrary text.
        #[test]
        fn date_detection_never_panics(input in "\\PC{0,40}") {
            let _ = looks_like_date(&input);
        }
    }
}
