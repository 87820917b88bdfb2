//! Schema types for representing a dataset profile.

mod column;
mod summary;
mod types;

pub use column::{ColumnStats, DateRange, NumericStats, ValueCount};
pub use summary::{
    AggregationResult, CorrelationResult, DataSummary, Operation, ScatterPoint, aggregation_id,
};
pub use types::ColumnType;
