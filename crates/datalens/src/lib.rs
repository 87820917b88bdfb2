//! Datalens: statistical profiling of tabular datasets.
//!
//! Datalens takes an in-memory dataset of loosely typed records and builds a
//! `DataSummary`: inferred column types, per-column statistics, precomputed
//! group-by aggregations and time series, and pairwise correlations. A lexical
//! matcher then picks the aggregation that best answers a free-text question.
//!
//! # Core Principles
//!
//! - **Total**: malformed values are excluded from a reduction, never fatal
//! - **Deterministic**: the same dataset always yields the same summary
//! - **Bounded**: every fan-out (groups, metrics, pairs) is capped
//!
//! # Example
//!
//! ```
//! use datalens::{Dataset, Profiler, Scalar, find_relevant_aggregation, record};
//!
//! let dataset = Dataset::from_rows(vec![
//!     record([("region", Scalar::from("East")), ("revenue", Scalar::from(100))]),
//!     record([("region", Scalar::from("East")), ("revenue", Scalar::from(200))]),
//!     record([("region", Scalar::from("West")), ("revenue", Scalar::from(50))]),
//! ]);
//!
//! let summary = Profiler::new().build(&dataset);
//! println!("{}", summary.digest());
//!
//! let answer = find_relevant_aggregation(&summary, "total revenue by region").unwrap();
//! assert_eq!(answer.description, "Total revenue by region");
//! ```

pub mod analysis;
pub mod digest;
pub mod error;
pub mod inference;
pub mod input;
pub mod limits;
pub mod matcher;
pub mod profile;
pub mod schema;

mod profiler;

pub use crate::profiler::{Profiler, ProfilerConfig, build_summary};
pub use error::{DatalensError, Result};
pub use input::{Dataset, Record, Scalar, cell, record};
pub use matcher::{RelevanceMatcher, RuleHit, SCORING_RULES, ScoringRule, find_relevant_aggregation};
pub use schema::{
    AggregationResult, ColumnStats, ColumnType, CorrelationResult, DataSummary, DateRange,
    NumericStats, Operation, ScatterPoint, ValueCount,
};
